// End-to-end pipeline tests: raw selections through table lookup, feature
// assembly and a real loaded artifact, without the web layer.

use std::sync::Arc;

use mslp_data::ReferenceTable;
use mslp_ml::{Classifier, LinearArtifact};
use mslp_models::{FeatureVector, Outcome, PredictError, RawSelection};
use mslp_services::PredictorService;

const REFERENCE_CSV: &str = "\
Team,Date,Goal Scored_rolling,Goal Conceded_rolling,ShotF_rolling,ShotOnF_rolling,CornerF_rolling,CornerA_rolling,OffF_rolling,OffA_rolling,FoulF_rolling,FoulA_rolling
Selangor,2024-03-09,1.1,1.0,11.0,4.0,5.0,5.0,2.0,2.0,11.0,12.0
Perak,2024-05-11,0.9,1.4,9.3,3.1,4.2,6.0,1.7,2.4,12.1,10.9
Selangor,2024-05-18,1.5,0.8,12.4,5.2,6.1,4.3,1.9,2.2,10.7,11.3
";

fn artifact(intercept: f64) -> LinearArtifact {
    LinearArtifact {
        model_name: "msl_linear_v1".to_string(),
        weights: vec![0.0; FeatureVector::LEN],
        intercept,
    }
}

fn service(intercept: f64) -> PredictorService {
    let table = Arc::new(ReferenceTable::from_csv_reader(REFERENCE_CSV.as_bytes()).unwrap());
    PredictorService::new(table, Arc::new(artifact(intercept)))
}

fn selection(home: &str, away: &str) -> RawSelection {
    RawSelection {
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        venue: Some("Home".to_string()),
        kickoff: Some("7pm".to_string()),
        day: Some("Saturday".to_string()),
    }
}

#[test]
fn test_selangor_vs_perak_win_and_lose() {
    // Zero weights: the intercept alone decides the label
    let win = service(1.0).predict_raw(&selection("Selangor", "Perak")).unwrap();
    assert_eq!(win.outcome, Outcome::Win);
    assert_eq!(win.model_name, "msl_linear_v1");

    let lose = service(-1.0).predict_raw(&selection("Selangor", "Perak")).unwrap();
    assert_eq!(lose.outcome, Outcome::Lose);
}

#[test]
fn test_vector_uses_most_recent_selangor_row() {
    let service = service(1.0);
    let parsed = selection("Selangor", "Perak").parse().unwrap();
    let vector = service.lookup_and_build(&parsed).unwrap();

    // Codes for Selangor home vs Perak at 7pm on a Saturday, then the
    // 2024-05-18 rolling row, not the older March one
    assert_eq!(
        vector.as_slice(),
        &[11.0, 1.0, 9.0, 19.0, 6.0, 1.5, 0.8, 12.4, 5.2, 6.1, 4.3, 1.9, 2.2, 10.7, 11.3]
    );
}

#[test]
fn test_same_team_halts_with_validation_warning() {
    let result = service(1.0).predict_raw(&selection("Kedah Darul Aman", "Kedah Darul Aman"));
    match result {
        Err(err @ PredictError::SameTeamSelected) => {
            assert!(err.is_validation());
            assert_eq!(err.to_string(), "Please select different Team and Opponent");
        }
        other => panic!("expected SameTeamSelected, got {other:?}"),
    }
}

#[test]
fn test_missing_selection_halts() {
    let mut raw = selection("Selangor", "Perak");
    raw.kickoff = None;
    assert!(matches!(
        service(1.0).predict_raw(&raw),
        Err(PredictError::MissingSelection { field: "Time" })
    ));
}

#[test]
fn test_team_without_table_rows_is_not_found() {
    // Sabah is in the catalog but has no rows in this table
    let result = service(1.0).predict_raw(&selection("Sabah", "Perak"));
    match result {
        Err(PredictError::TeamNotFound { team }) => assert_eq!(team, "Sabah"),
        other => panic!("expected TeamNotFound, got {other:?}"),
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let service = service(1.0);
    let parsed = selection("Selangor", "Perak").parse().unwrap();
    assert_eq!(
        service.lookup_and_build(&parsed).unwrap(),
        service.lookup_and_build(&parsed).unwrap()
    );
}

#[test]
fn test_artifact_loads_from_disk_and_checks_shape() {
    let dir = std::env::temp_dir();

    let good_path = dir.join("mslp_test_artifact_good.json");
    std::fs::write(&good_path, serde_json::to_string(&artifact(0.5)).unwrap()).unwrap();
    let loaded = LinearArtifact::load(&good_path).unwrap();
    assert_eq!(loaded.model_name, "msl_linear_v1");

    let parsed = selection("Perak", "Selangor").parse().unwrap();
    let table = ReferenceTable::from_csv_reader(REFERENCE_CSV.as_bytes()).unwrap();
    let vector = FeatureVector::from_parts(&parsed, table.latest_for(parsed.home_team).unwrap());
    assert_eq!(loaded.predict(&vector).unwrap(), 1);

    // Ten weights against a fifteen-slot vector is rejected at load time
    let bad = LinearArtifact {
        model_name: "short".to_string(),
        weights: vec![0.1; 10],
        intercept: 0.0,
    };
    let bad_path = dir.join("mslp_test_artifact_bad.json");
    std::fs::write(&bad_path, serde_json::to_string(&bad).unwrap()).unwrap();
    assert!(matches!(
        LinearArtifact::load(&bad_path),
        Err(PredictError::ShapeMismatch { expected: 15, actual: 10 })
    ));

    std::fs::remove_file(&good_path).ok();
    std::fs::remove_file(&bad_path).ok();
}
