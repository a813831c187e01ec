use std::fs::read_to_string;
use std::path::Path;

use ndarray::aview1;
use serde::{Deserialize, Serialize};
use tracing::info;

use mslp_models::{FeatureVector, PredictError, Result};

/// Narrow interface over the pre-trained outcome model: one operation,
/// fixed-shape input, integer class label out. The pipeline never looks
/// inside the model.
pub trait Classifier: Send + Sync {
    fn model_name(&self) -> &str;

    /// Deterministic and side-effect free. Label 1 means the selected team
    /// wins; any other label is a loss.
    fn predict(&self, features: &FeatureVector) -> Result<i64>;
}

/// A pre-trained linear classifier restored from a JSON artifact exported by
/// the training pipeline: one weight per feature column plus an intercept,
/// thresholded at 0.5 after the sigmoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    pub model_name: String,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LinearArtifact {
    /// Load and shape-check the artifact. A weight count that disagrees with
    /// the feature vector would corrupt every prediction silently, so it is
    /// rejected here at startup rather than at request time.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = read_to_string(path)?;
        let artifact: LinearArtifact = serde_json::from_str(&raw)?;

        if artifact.weights.len() != FeatureVector::LEN {
            return Err(PredictError::ShapeMismatch {
                expected: FeatureVector::LEN,
                actual: artifact.weights.len(),
            });
        }

        info!(
            "🧠 Loaded model '{}' ({} weights) from {}",
            artifact.model_name,
            artifact.weights.len(),
            path.display()
        );
        Ok(artifact)
    }

    fn score(&self, features: &FeatureVector) -> f64 {
        aview1(&self.weights).dot(&aview1(features.as_slice())) + self.intercept
    }
}

impl Classifier for LinearArtifact {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64> {
        if self.weights.len() != features.len() {
            return Err(PredictError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let probability = 1.0 / (1.0 + (-self.score(features)).exp());
        Ok(if probability >= 0.5 { 1 } else { 0 })
    }
}
