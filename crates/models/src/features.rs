use serde::{Deserialize, Serialize};

use crate::selection::MatchSelection;
use crate::stats::RollingRecord;

/// Column names the classifier was trained against, in training order.
pub const FEATURE_NAMES: [&str; FeatureVector::LEN] = [
    "Team_code",
    "Venue_Code",
    "opp_code",
    "hour",
    "day_code",
    "Goal Scored_rolling",
    "Goal Conceded_rolling",
    "ShotF_rolling",
    "ShotOnF_rolling",
    "CornerF_rolling",
    "CornerA_rolling",
    "OffF_rolling",
    "OffA_rolling",
    "FoulF_rolling",
    "FoulA_rolling",
];

/// The fixed-order input tuple the classifier consumes: five encoded
/// categorical selections followed by the home team's ten rolling statistics.
///
/// Order and length must match the training columns exactly. A wrong order
/// would not crash anything, it would just make every prediction garbage,
/// so construction goes through [`FeatureVector::from_parts`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FeatureVector::LEN],
}

impl FeatureVector {
    pub const LEN: usize = 15;

    pub fn from_parts(selection: &MatchSelection, record: &RollingRecord) -> Self {
        let mut values = [0.0; FeatureVector::LEN];
        values[0] = f64::from(selection.home_team.code());
        values[1] = f64::from(selection.venue.code());
        values[2] = f64::from(selection.away_team.code());
        values[3] = f64::from(selection.kickoff.hour());
        values[4] = f64::from(selection.day.code());
        values[5..].copy_from_slice(&record.stats());
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        FeatureVector::LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
