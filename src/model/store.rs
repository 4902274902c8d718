//! Model store: the predictor and its feature list, loaded once at startup.

use std::path::Path;

use super::artifact::{LoadError, ModelArtifact, Predictor};

const EMPTY_FEATURES: &[String] = &[];

/// Read-only holder for the deserialized predictor.
///
/// Built once at startup and shared behind an `Arc`. Never mutated, so
/// concurrent request handlers read it without locking. A store that
/// failed to load answers `is_loaded() == false` and `/predict` reports
/// the absence at request time.
#[derive(Debug)]
pub struct ModelStore {
    inner: Option<Loaded>,
}

#[derive(Debug)]
struct Loaded {
    predictor: Predictor,
    features: Vec<String>,
}

impl ModelStore {
    /// Load the artifact at `path`.
    ///
    /// Never fails the process: any load error (missing file, malformed
    /// JSON, shape mismatch) is logged with its distinct cause and the
    /// store comes up empty.
    pub fn load(path: &Path) -> Self {
        match ModelArtifact::from_file(path) {
            Ok(artifact) => Self::from_artifact(artifact),
            Err(err) => {
                match &err {
                    LoadError::Io(_) => {
                        tracing::error!("Failed to load model. Check the path {}: {}", path.display(), err)
                    }
                    LoadError::Malformed(_) | LoadError::ShapeMismatch { .. } => {
                        tracing::error!("Failed to load model from {}: {}", path.display(), err)
                    }
                }
                Self::unloaded()
            }
        }
    }

    /// Build a store directly from an in-memory artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            inner: Some(Loaded {
                predictor: artifact.model,
                features: artifact.features,
            }),
        }
    }

    /// A store with no predictor.
    pub fn unloaded() -> Self {
        Self { inner: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    /// Feature names in training order; empty when not loaded.
    pub fn feature_list(&self) -> &[String] {
        self.inner
            .as_ref()
            .map(|loaded| loaded.features.as_slice())
            .unwrap_or(EMPTY_FEATURES)
    }

    /// Model type name, `None` when not loaded.
    pub fn model_type(&self) -> Option<&'static str> {
        self.inner.as_ref().map(|loaded| loaded.predictor.model_type())
    }

    /// Score an aligned feature vector: (label, positive-class probability).
    ///
    /// `None` when no model is loaded.
    pub fn predict(&self, vector: &[f64]) -> Option<(u8, f64)> {
        let loaded = self.inner.as_ref()?;
        let probability = loaded.predictor.predict_proba(vector);
        let label = loaded.predictor.predict(vector);
        Some((label, probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_artifact(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_a_valid_artifact() {
        let file = write_artifact(
            r#"{
                "model": {
                    "kind": "logistic_regression",
                    "coefficients": [0.5, -1.0, 2.0],
                    "intercept": 0.1
                },
                "features": ["tenure", "monthly_charges", "contract_two_year"]
            }"#,
        );

        let store = ModelStore::load(file.path());
        assert!(store.is_loaded());
        assert_eq!(store.model_type(), Some("LogisticRegression"));
        assert_eq!(
            store.feature_list(),
            ["tenure", "monthly_charges", "contract_two_year"]
        );
    }

    #[test]
    fn missing_file_yields_unloaded_store() {
        let store = ModelStore::load(Path::new("/nonexistent/churn_model.json"));
        assert!(!store.is_loaded());
        assert!(store.feature_list().is_empty());
        assert_eq!(store.model_type(), None);
        assert!(store.predict(&[]).is_none());
    }

    #[test]
    fn corrupt_json_yields_unloaded_store() {
        let file = write_artifact("{ not json");
        let store = ModelStore::load(file.path());
        assert!(!store.is_loaded());
    }

    #[test]
    fn wrong_structure_yields_unloaded_store() {
        let file = write_artifact(r#"{"weights": [1.0], "names": ["a"]}"#);
        let store = ModelStore::load(file.path());
        assert!(!store.is_loaded());
    }

    #[test]
    fn shape_mismatch_yields_unloaded_store() {
        let file = write_artifact(
            r#"{
                "model": {
                    "kind": "logistic_regression",
                    "coefficients": [0.5, -1.0],
                    "intercept": 0.0
                },
                "features": ["tenure"]
            }"#,
        );
        let store = ModelStore::load(file.path());
        assert!(!store.is_loaded());
    }

    #[test]
    fn loaded_from_file_store_predicts() {
        let file = write_artifact(
            r#"{
                "model": {
                    "kind": "logistic_regression",
                    "coefficients": [2.0],
                    "intercept": -1.0
                },
                "features": ["tenure"]
            }"#,
        );

        let store = ModelStore::load(file.path());
        let (label, probability) = store.predict(&[1.0]).unwrap();
        // sigmoid(1.0)
        assert_eq!(label, 1);
        assert!((probability - 0.731_058_578_630_004_9).abs() < 1e-12);
    }

    #[test]
    fn predict_returns_label_and_probability() {
        let store = ModelStore::from_artifact(ModelArtifact {
            model: Predictor::LogisticRegression {
                coefficients: vec![1.0, 1.0],
                intercept: 0.0,
            },
            features: vec!["a".into(), "b".into()],
        });

        let (label, probability) = store.predict(&[0.0, 0.0]).unwrap();
        assert_eq!(label, 1); // sigmoid(0) = 0.5, at the threshold
        assert!((probability - 0.5).abs() < 1e-12);

        let (label, probability) = store.predict(&[-3.0, 0.0]).unwrap();
        assert_eq!(label, 0);
        assert!(probability < 0.5);
    }
}
