//! On-disk artifact schema and predictor math.
//!
//! The artifact is a single JSON document holding the trained predictor's
//! parameters together with the ordered feature list it was trained on.
//! Feature order is load-bearing: scoring a vector in any other order
//! produces silently wrong results, so the list is stored verbatim and
//! never reordered.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading an artifact from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read artifact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("artifact shape mismatch: {coefficients} coefficients for {features} features")]
    ShapeMismatch { coefficients: usize, features: usize },
}

/// The persisted unit: predictor parameters + training feature order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model: Predictor,
    pub features: Vec<String>,
}

impl ModelArtifact {
    /// Deserialize an artifact from `path` and validate its shape.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), LoadError> {
        let coefficients = self.model.coefficient_count();
        if coefficients != self.features.len() {
            return Err(LoadError::ShapeMismatch {
                coefficients,
                features: self.features.len(),
            });
        }
        Ok(())
    }
}

/// A trained binary classifier.
///
/// Tagged enum so further model kinds can be added without changing the
/// artifact envelope; the variant name doubles as the `model_type`
/// reported by `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predictor {
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

impl Predictor {
    /// Human-readable model type name.
    pub fn model_type(&self) -> &'static str {
        match self {
            Predictor::LogisticRegression { .. } => "LogisticRegression",
        }
    }

    fn coefficient_count(&self) -> usize {
        match self {
            Predictor::LogisticRegression { coefficients, .. } => coefficients.len(),
        }
    }

    /// Probability of the positive (churn) class for an aligned vector.
    ///
    /// The caller guarantees `vector.len()` equals the feature count; the
    /// store upholds this by construction.
    pub fn predict_proba(&self, vector: &[f64]) -> f64 {
        match self {
            Predictor::LogisticRegression {
                coefficients,
                intercept,
            } => {
                let z: f64 = coefficients
                    .iter()
                    .zip(vector)
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept;
                sigmoid(z)
            }
        }
    }

    /// Discrete class label: 1 (churns) when the positive-class
    /// probability reaches 0.5, else 0 (stays).
    pub fn predict(&self, vector: &[f64]) -> u8 {
        if self.predict_proba(vector) >= 0.5 {
            1
        } else {
            0
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
