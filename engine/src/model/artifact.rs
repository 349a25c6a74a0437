// Serialized model artifact.
//
// The training side exports the fitted pipeline (ordinal encoders for the
// categorical columns plus the regressor collapsed to per-feature weights)
// as a single JSON document. Everything outside this module treats the
// artifact as opaque: load it once, call predict, never mutate it.

use crate::error::EngineError;
use crate::features::FEATURE_ORDER;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    /// Feature column order the pipeline was fitted with. Must match
    /// `FEATURE_ORDER` exactly; checked at load time so a stale or
    /// reordered export fails fast instead of silently mispredicting.
    pub schema: Vec<String>,
    /// Per-categorical-feature level -> ordinal code maps, keyed by the
    /// feature name. Numeric features have no entry here.
    pub encoders: HashMap<String, HashMap<String, f64>>,
    /// Regression weights, one per feature, in schema order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Load and validate the artifact. Called once at startup; any failure
    /// here is fatal to the whole session (no predictions are possible
    /// without a model).
    pub fn load(path: impl AsRef<Path>) -> Result<ModelArtifact, EngineError> {
        let path = path.as_ref();
        let artifact = Self::read_json(path)
            .map_err(|e| EngineError::ModelLoad(format!("{:#}", e)))?;
        artifact.check_shape()?;
        tracing::info!(
            "Loaded model artifact from '{}' ({} features, {} categorical encoders)",
            path.display(),
            artifact.schema.len(),
            artifact.encoders.len()
        );
        Ok(artifact)
    }

    fn read_json(path: &Path) -> Result<ModelArtifact> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open model artifact '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed model artifact '{}'", path.display()))
    }

    fn check_shape(&self) -> Result<(), EngineError> {
        if self.schema != FEATURE_ORDER {
            return Err(EngineError::ModelLoad(format!(
                "Artifact schema {:?} does not match expected feature order {:?}",
                self.schema, FEATURE_ORDER
            )));
        }
        if self.coefficients.len() != self.schema.len() {
            return Err(EngineError::ModelLoad(format!(
                "Artifact has {} coefficients for {} features",
                self.coefficients.len(),
                self.schema.len()
            )));
        }
        for name in self.encoders.keys() {
            if !self.schema.iter().any(|s| s == name) {
                return Err(EngineError::ModelLoad(format!(
                    "Encoder for unknown feature '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Ordinal code for one categorical level, if the encoder saw it
    /// during training.
    pub fn encode(&self, feature: &str, level: &str) -> Option<f64> {
        self.encoders.get(feature)?.get(level).copied()
    }

    /// Helper for tests and tooling that build artifacts in memory.
    pub fn from_json_str(json: &str) -> Result<ModelArtifact, EngineError> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| EngineError::ModelLoad(format!("Malformed model artifact JSON: {}", e)))?;
        artifact.check_shape()?;
        Ok(artifact)
    }
}
