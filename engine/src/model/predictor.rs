// The predictor capability consumed by the prediction service.

use super::artifact::ModelArtifact;
use crate::error::EngineError;
use crate::features::{FeatureValue, FeatureVector, FEATURE_ORDER};

/// Single capability the rest of the system depends on: one synchronous,
/// side-effect-free estimate per feature vector. The service holds this as
/// a trait object so tests can substitute a canned predictor.
pub trait PricePredictor: Send + Sync {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, EngineError>;
}

/// Predictor backed by a loaded [`ModelArtifact`]: encode each categorical
/// slot through the artifact's ordinal maps, then apply the regression
/// weights. An unseen categorical level is a per-request error, not a
/// panic; the encoding only knows levels present at training time.
pub struct ArtifactPredictor {
    artifact: ModelArtifact,
}

impl ArtifactPredictor {
    pub fn new(artifact: ModelArtifact) -> Self {
        ArtifactPredictor { artifact }
    }

    fn encode_slot(&self, name: &str, value: &FeatureValue) -> Result<f64, EngineError> {
        match value {
            FeatureValue::Number(n) => Ok(*n),
            FeatureValue::Category(level) => {
                self.artifact.encode(name, level).ok_or_else(|| {
                    EngineError::Prediction(format!(
                        "Unseen {} level '{}' (not in the training encoding)",
                        name, level
                    ))
                })
            }
        }
    }
}

impl PricePredictor for ArtifactPredictor {
    fn predict(&self, vector: &FeatureVector) -> Result<f64, EngineError> {
        let mut estimate = self.artifact.intercept;
        for ((name, value), coefficient) in FEATURE_ORDER
            .iter()
            .zip(vector.iter())
            .zip(self.artifact.coefficients.iter())
        {
            estimate += coefficient * self.encode_slot(name, value)?;
        }
        if !estimate.is_finite() {
            return Err(EngineError::Prediction(
                "Model produced a non-finite estimate".to_string(),
            ));
        }
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::assemble;
    use shared::models::{CarFeatures, Make};

    fn test_artifact() -> ModelArtifact {
        ModelArtifact::from_json_str(
            r#"{
                "schema": ["miles", "year", "make", "model", "trim", "body_type", "engine_size", "province"],
                "encoders": {
                    "make": {"toyota": 0.0, "honda": 1.0},
                    "model": {"Corolla": 0.0, "Civic": 1.0},
                    "trim": {"Base": 0.0, "LE": 1.0},
                    "body_type": {"sedan": 0.0, "hatchback": 1.0},
                    "province": {"NB": 0.0, "ON": 1.0}
                },
                "coefficients": [-0.1, 10.0, 500.0, 250.0, 100.0, 50.0, 1000.0, 25.0],
                "intercept": 5000.0
            }"#,
        )
        .unwrap()
    }

    fn corolla() -> CarFeatures {
        CarFeatures {
            miles: 1000.0,
            year: 2000,
            make: Make::Toyota,
            model: "Corolla".to_string(),
            trim: "Base".to_string(),
            body_type: "sedan".to_string(),
            engine_size: 1.5,
            province: "NB".to_string(),
        }
    }

    #[test]
    fn test_predict_linear_combination() {
        let predictor = ArtifactPredictor::new(test_artifact());
        let estimate = predictor.predict(&assemble(&corolla())).unwrap();
        // 5000 - 0.1*1000 + 10*2000 + 0 + 0 + 0 + 0 + 1000*1.5 + 0
        assert!((estimate - 26400.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_uses_categorical_encoding() {
        let predictor = ArtifactPredictor::new(test_artifact());
        let mut civic = corolla();
        civic.make = Make::Honda;
        civic.model = "Civic".to_string();

        let base = predictor.predict(&assemble(&corolla())).unwrap();
        let other = predictor.predict(&assemble(&civic)).unwrap();
        // honda adds 500*1, Civic adds 250*1 on top of the base estimate
        assert!((other - base - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_is_pure() {
        let predictor = ArtifactPredictor::new(test_artifact());
        let vector = assemble(&corolla());
        assert_eq!(
            predictor.predict(&vector).unwrap(),
            predictor.predict(&vector).unwrap()
        );
    }

    #[test]
    fn test_unseen_level_is_prediction_error() {
        let predictor = ArtifactPredictor::new(test_artifact());
        let mut odd = corolla();
        odd.trim = "TRD Pro".to_string();
        let err = predictor.predict(&assemble(&odd)).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(ref msg) if msg.contains("TRD Pro")));
        assert!(!err.is_fatal());
    }
}
