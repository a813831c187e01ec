use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use mslp_models::{Result, RollingRecord, Team};

/// In-memory copy of the rolling statistics reference table.
///
/// The table is maintained by an upstream pipeline and never changes during a
/// run, so it is loaded once at startup and shared read-only. Rows are decoded
/// strictly: a missing or unparseable field anywhere in the file fails the
/// load instead of slipping a default into a later prediction.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    records: Vec<RollingRecord>,
}

impl ReferenceTable {
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_csv_reader(File::open(path)?)?;
        info!(
            "📈 Loaded {} rolling statistic rows from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: RollingRecord = row?;
            records.push(record);
        }
        Ok(Self { records })
    }

    pub fn from_records(records: Vec<RollingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record for a team, selected by the explicit `Date`
    /// column. Rows with equal dates fall back to file order, latest wins.
    pub fn latest_for(&self, team: Team) -> Option<&RollingRecord> {
        self.records
            .iter()
            .filter(|record| record.team == team.name())
            .max_by_key(|record| record.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team: &str, date: &str, goals_scored: f64) -> RollingRecord {
        RollingRecord {
            team: team.to_string(),
            date: date.parse().unwrap(),
            goals_scored,
            goals_conceded: 1.0,
            shots_for: 10.0,
            shots_on_target_for: 4.0,
            corners_for: 5.0,
            corners_against: 5.0,
            offsides_for: 2.0,
            offsides_against: 2.0,
            fouls_for: 11.0,
            fouls_against: 12.0,
        }
    }

    #[test]
    fn test_latest_for_selects_maximum_date_not_file_order() {
        // Deliberately out of chronological order
        let table = ReferenceTable::from_records(vec![
            record("Selangor", "2024-05-18", 1.5),
            record("Selangor", "2024-02-03", 0.9),
            record("Perak", "2024-05-11", 1.1),
            record("Selangor", "2024-04-27", 1.2),
        ]);

        let latest = table.latest_for(Team::Selangor).unwrap();
        assert_eq!(latest.date.to_string(), "2024-05-18");
        assert_eq!(latest.goals_scored, 1.5);
    }

    #[test]
    fn test_latest_for_equal_dates_keeps_last_row() {
        let table = ReferenceTable::from_records(vec![
            record("Sabah", "2024-05-18", 1.0),
            record("Sabah", "2024-05-18", 2.0),
        ]);

        assert_eq!(table.latest_for(Team::Sabah).unwrap().goals_scored, 2.0);
    }

    #[test]
    fn test_absent_team_yields_none() {
        let table = ReferenceTable::from_records(vec![record("Perak", "2024-05-11", 1.1)]);
        assert!(table.latest_for(Team::KuchingCity).is_none());
    }

    #[test]
    fn test_csv_load_is_strict_about_fields() {
        let good = "\
Team,Date,Goal Scored_rolling,Goal Conceded_rolling,ShotF_rolling,ShotOnF_rolling,CornerF_rolling,CornerA_rolling,OffF_rolling,OffA_rolling,FoulF_rolling,FoulA_rolling
Selangor,2024-05-18,1.5,0.8,12.4,5.2,6.1,4.3,1.9,2.2,10.7,11.3
";
        let table = ReferenceTable::from_csv_reader(good.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.latest_for(Team::Selangor).unwrap().shots_for, 12.4);

        // Missing rolling column: hard error, not a default
        let missing_column = "\
Team,Date,Goal Scored_rolling
Selangor,2024-05-18,1.5
";
        assert!(ReferenceTable::from_csv_reader(missing_column.as_bytes()).is_err());

        // Unparseable value: hard error
        let bad_value = good.replace("12.4", "n/a");
        assert!(ReferenceTable::from_csv_reader(bad_value.as_bytes()).is_err());
    }
}
