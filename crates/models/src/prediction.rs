use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::selection::MatchSelection;

/// Binary outcome for the selected team. The classifier emits integer labels;
/// 1 means a win, anything else is rendered as a loss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn label(&self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => 0,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub id: Uuid,
    pub selection: MatchSelection,
    pub outcome: Outcome,
    pub model_name: String,
    pub predicted_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(selection: MatchSelection, outcome: Outcome, model_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            selection,
            outcome,
            model_name,
            predicted_at: Utc::now(),
        }
    }
}
