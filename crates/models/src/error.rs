use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Please select {field}")]
    MissingSelection { field: &'static str },

    #[error("Please select different Team and Opponent")]
    SameTeamSelected,

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Invalid {field} selection: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("No data found for {team}. Please check the reference table.")]
    TeamNotFound { team: String },

    #[error("Reference table error: {0}")]
    Table(#[from] csv::Error),

    #[error("Model artifact error: {0}")]
    Artifact(#[from] serde_json::Error),

    #[error("Feature vector has {actual} elements, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Model prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PredictError {
    /// Validation errors come from the user's own selections and are expected;
    /// everything else is a fault at the data or model boundary.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PredictError::MissingSelection { .. }
                | PredictError::SameTeamSelected
                | PredictError::UnknownTeam(_)
                | PredictError::UnknownOption { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;
