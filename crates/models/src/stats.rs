use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the rolling statistics reference table: the trailing-window
/// aggregates for a team as of a given match date. All quantities are
/// computed upstream and consumed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingRecord {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Goal Scored_rolling")]
    pub goals_scored: f64,
    #[serde(rename = "Goal Conceded_rolling")]
    pub goals_conceded: f64,
    #[serde(rename = "ShotF_rolling")]
    pub shots_for: f64,
    #[serde(rename = "ShotOnF_rolling")]
    pub shots_on_target_for: f64,
    #[serde(rename = "CornerF_rolling")]
    pub corners_for: f64,
    #[serde(rename = "CornerA_rolling")]
    pub corners_against: f64,
    #[serde(rename = "OffF_rolling")]
    pub offsides_for: f64,
    #[serde(rename = "OffA_rolling")]
    pub offsides_against: f64,
    #[serde(rename = "FoulF_rolling")]
    pub fouls_for: f64,
    #[serde(rename = "FoulA_rolling")]
    pub fouls_against: f64,
}

impl RollingRecord {
    /// The ten rolling statistics in the order the classifier was trained on.
    pub fn stats(&self) -> [f64; 10] {
        [
            self.goals_scored,
            self.goals_conceded,
            self.shots_for,
            self.shots_on_target_for,
            self.corners_for,
            self.corners_against,
            self.offsides_for,
            self.offsides_against,
            self.fouls_for,
            self.fouls_against,
        ]
    }
}
