use std::sync::Arc;

use tracing::{info, warn};

use mslp_data::ReferenceTable;
use mslp_ml::Classifier;
use mslp_models::{
    FeatureVector, MatchSelection, Outcome, PredictError, Prediction, RawSelection, Result,
};

/// The one pipeline of the system: validate the user's selections, look up
/// the home team's most recent rolling statistics, assemble the feature
/// vector and ask the classifier for a label.
///
/// Both collaborators are injected at startup and shared read-only, so the
/// service itself holds no mutable state and every request is independent.
pub struct PredictorService {
    table: Arc<ReferenceTable>,
    classifier: Arc<dyn Classifier>,
}

impl PredictorService {
    pub fn new(table: Arc<ReferenceTable>, classifier: Arc<dyn Classifier>) -> Self {
        Self { table, classifier }
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    /// Run the pipeline on raw form input. Decoding failures halt the request
    /// before any lookup or classifier call happens.
    pub fn predict_raw(&self, raw: &RawSelection) -> Result<Prediction> {
        let selection = raw.parse()?;
        self.predict(&selection)
    }

    pub fn predict(&self, selection: &MatchSelection) -> Result<Prediction> {
        selection.validate()?;

        let vector = self.lookup_and_build(selection)?;
        let label = self.classifier.predict(&vector)?;
        let outcome = Outcome::from_label(label);

        info!(
            "🎯 {} vs {} ({}, {} {}): predicted {}",
            selection.home_team,
            selection.away_team,
            selection.venue,
            selection.day,
            selection.kickoff,
            outcome
        );

        Ok(Prediction::new(
            *selection,
            outcome,
            self.classifier.model_name().to_string(),
        ))
    }

    /// Locate the home team's most recent record and build the fixed-order
    /// feature vector from it. A team with no rows in the table halts the
    /// request; nothing is defaulted.
    pub fn lookup_and_build(&self, selection: &MatchSelection) -> Result<FeatureVector> {
        let record = self.table.latest_for(selection.home_team).ok_or_else(|| {
            warn!("📉 No reference data for {}", selection.home_team);
            PredictError::TeamNotFound {
                team: selection.home_team.name().to_string(),
            }
        })?;

        Ok(FeatureVector::from_parts(selection, record))
    }
}
