//! Pre-trained category classifier artifact.
//!
//! Two serialized objects are loaded once at startup: a feature scaler
//! (per-dimension mean/scale) and a linear classifier (per-label weight
//! rows + biases, softmax confidence). Both are opaque training products;
//! this module only validates their shape against [`FEATURE_DIM`] and
//! evaluates them.
//!
//! Loading never aborts the program. A missing or malformed artifact falls
//! back to an untrained default whose every prediction fails, which the
//! pipeline absorbs into the `default` category at confidence 0.0. The
//! fallback is deliberately loud: a startup warning is logged and
//! [`ClassifierArtifact::is_trained`] lets the shell display the degraded
//! mode instead of hiding it.

use crate::config::ArtifactConfig;
use crate::error::{PersonaError, Result};
use crate::features::{FEATURE_DIM, FeatureVector};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Per-dimension standardization parameters (mean/scale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl FeatureScaler {
    fn validate(&self) -> Result<()> {
        if self.mean.len() != FEATURE_DIM || self.scale.len() != FEATURE_DIM {
            return Err(PersonaError::Artifact(format!(
                "scaler dimension mismatch: mean={}, scale={}, expected {FEATURE_DIM}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(PersonaError::Artifact(
                "scaler contains zero or non-finite scale entries".into(),
            ));
        }
        Ok(())
    }

    fn transform(&self, features: &FeatureVector) -> [f32; FEATURE_DIM] {
        let mut scaled = [0.0; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

/// Linear classifier head: one weight row and bias per label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub labels: Vec<String>,
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

impl LinearModel {
    fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(PersonaError::Artifact("model has no labels".into()));
        }
        if self.weights.len() != self.labels.len() || self.bias.len() != self.labels.len() {
            return Err(PersonaError::Artifact(format!(
                "model shape mismatch: {} labels, {} weight rows, {} biases",
                self.labels.len(),
                self.weights.len(),
                self.bias.len()
            )));
        }
        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != FEATURE_DIM {
                return Err(PersonaError::Artifact(format!(
                    "weight row {i} has {} columns, expected {FEATURE_DIM}",
                    row.len()
                )));
            }
        }
        Ok(())
    }
}

/// One classification outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Knowledge-table label for the winning category.
    pub label: String,
    /// Softmax probability of the winning label, in `[0, 1]`.
    pub confidence: f32,
}

/// The loaded scaler + classifier pair.
#[derive(Debug, Clone)]
pub struct ClassifierArtifact {
    scaler: Option<FeatureScaler>,
    model: Option<LinearModel>,
}

impl ClassifierArtifact {
    /// Load both artifacts, falling back to an untrained default on any
    /// failure. The fallback is logged as a warning, never silent.
    #[must_use]
    pub fn load(config: &ArtifactConfig) -> Self {
        match Self::try_load(&config.scaler_path, &config.model_path) {
            Ok(artifact) => {
                info!(
                    scaler = %config.scaler_path.display(),
                    model = %config.model_path.display(),
                    "classifier artifacts loaded"
                );
                artifact
            }
            Err(e) => {
                warn!(
                    error = %e,
                    "classifier artifacts unavailable; running UNTRAINED — every \
                     prediction will degrade to the default category at confidence 0.0"
                );
                Self::untrained()
            }
        }
    }

    /// Strict load used by [`Self::load`] and by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, unparseable, or
    /// dimensionally inconsistent with [`FEATURE_DIM`].
    pub fn try_load(scaler_path: &Path, model_path: &Path) -> Result<Self> {
        let scaler: FeatureScaler = read_json(scaler_path)?;
        scaler.validate()?;
        let model: LinearModel = read_json(model_path)?;
        model.validate()?;
        Ok(Self {
            scaler: Some(scaler),
            model: Some(model),
        })
    }

    /// The untrained default: shaped like a classifier, predicts nothing.
    #[must_use]
    pub fn untrained() -> Self {
        Self {
            scaler: None,
            model: None,
        }
    }

    /// Whether a real trained artifact is loaded.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.scaler.is_some() && self.model.is_some()
    }

    /// Classify one feature vector.
    ///
    /// Attempted exactly once per message; callers absorb any error into
    /// the default category rather than retrying.
    ///
    /// # Errors
    ///
    /// Returns [`PersonaError::Classifier`] when running untrained.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let (Some(scaler), Some(model)) = (&self.scaler, &self.model) else {
            return Err(PersonaError::Classifier(
                "untrained artifact cannot classify".into(),
            ));
        };

        let scaled = scaler.transform(features);

        let scores: Vec<f32> = model
            .weights
            .iter()
            .zip(&model.bias)
            .map(|(row, b)| row.iter().zip(&scaled).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect();

        let (best_idx, best_score) = scores
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or_else(|| PersonaError::Classifier("model produced no scores".into()))?;

        // Softmax probability of the winning label, shifted for stability.
        let denom: f32 = scores.iter().map(|s| (s - best_score).exp()).sum();
        let confidence = (1.0 / denom).clamp(0.0, 1.0);

        Ok(Prediction {
            label: model.labels[best_idx].clone(),
            confidence,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PersonaError::Artifact(format!("cannot read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| PersonaError::Artifact(format!("cannot parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::features::extract;
    use std::path::PathBuf;

    fn identity_scaler() -> FeatureScaler {
        FeatureScaler {
            mean: vec![0.0; FEATURE_DIM],
            scale: vec![1.0; FEATURE_DIM],
        }
    }

    /// A model whose bias strongly favours one label regardless of input.
    fn biased_model(favoured: &str) -> LinearModel {
        let labels: Vec<String> = crate::knowledge::Category::ALL
            .iter()
            .map(|c| c.label().to_owned())
            .collect();
        let bias: Vec<f32> = labels
            .iter()
            .map(|l| if l.as_str() == favoured { 10.0 } else { 0.0 })
            .collect();
        LinearModel {
            weights: vec![vec![0.0; FEATURE_DIM]; labels.len()],
            bias,
            labels,
        }
    }

    fn write_artifacts(
        dir: &Path,
        scaler: &FeatureScaler,
        model: &LinearModel,
    ) -> (PathBuf, PathBuf) {
        let scaler_path = dir.join("scaler.json");
        let model_path = dir.join("model.json");
        std::fs::write(&scaler_path, serde_json::to_string(scaler).unwrap()).unwrap();
        std::fs::write(&model_path, serde_json::to_string(model).unwrap()).unwrap();
        (scaler_path, model_path)
    }

    #[test]
    fn trained_artifact_predicts_favoured_label() {
        let dir = tempfile::tempdir().unwrap();
        let (s, m) = write_artifacts(dir.path(), &identity_scaler(), &biased_model("independance"));
        let artifact = ClassifierArtifact::try_load(&s, &m).unwrap();
        assert!(artifact.is_trained());

        let prediction = artifact.predict(&extract("Parlez-moi de l'indépendance?")).unwrap();
        assert_eq!(prediction.label, "independance");
        assert!(prediction.confidence > 0.7, "got {}", prediction.confidence);
    }

    #[test]
    fn confidence_is_a_probability() {
        let dir = tempfile::tempdir().unwrap();
        let (s, m) = write_artifacts(dir.path(), &identity_scaler(), &biased_model("femme"));
        let artifact = ClassifierArtifact::try_load(&s, &m).unwrap();
        let p = artifact.predict(&extract("bonjour")).unwrap();
        assert!((0.0..=1.0).contains(&p.confidence));
    }

    #[test]
    fn untrained_predict_errors() {
        let artifact = ClassifierArtifact::untrained();
        assert!(!artifact.is_trained());
        assert!(artifact.predict(&extract("bonjour")).is_err());
    }

    #[test]
    fn missing_files_fall_back_to_untrained() {
        let config = ArtifactConfig {
            scaler_path: PathBuf::from("/nonexistent/scaler.json"),
            model_path: PathBuf::from("/nonexistent/model.json"),
        };
        let artifact = ClassifierArtifact::load(&config);
        assert!(!artifact.is_trained());
    }

    #[test]
    fn corrupt_model_fails_strict_load() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        let model_path = dir.path().join("model.json");
        std::fs::write(&scaler_path, serde_json::to_string(&identity_scaler()).unwrap()).unwrap();
        std::fs::write(&model_path, "not json at all").unwrap();
        assert!(ClassifierArtifact::try_load(&scaler_path, &model_path).is_err());
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bad_scaler = FeatureScaler {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        let (s, m) = write_artifacts(dir.path(), &bad_scaler, &biased_model("default"));
        assert!(ClassifierArtifact::try_load(&s, &m).is_err());
    }

    #[test]
    fn zero_scale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut scaler = identity_scaler();
        scaler.scale[2] = 0.0;
        let (s, m) = write_artifacts(dir.path(), &scaler, &biased_model("default"));
        assert!(ClassifierArtifact::try_load(&s, &m).is_err());
    }

    #[test]
    fn ragged_weight_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = biased_model("default");
        model.weights[4] = vec![0.0; 3];
        let (s, m) = write_artifacts(dir.path(), &identity_scaler(), &model);
        assert!(ClassifierArtifact::try_load(&s, &m).is_err());
    }
}
