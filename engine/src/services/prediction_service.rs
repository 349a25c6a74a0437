// The one call chain of the application:
// complete -> validate -> assemble -> predict -> round -> band.

use crate::banding::band;
use crate::config::EngineSettings;
use crate::error::EngineError;
use crate::features::{assemble, validate, CarFeaturesDraft};
use crate::model::{ArtifactPredictor, ModelArtifact, PricePredictor};
use chrono::Utc;
use shared::models::PriceEstimate;
use shared::utils::currency::round2;
use std::sync::Arc;

pub struct PredictionService {
    predictor: Arc<dyn PricePredictor>,
    mae: f64,
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("mae", &self.mae)
            .finish_non_exhaustive()
    }
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn PricePredictor>, mae: f64) -> Self {
        PredictionService { predictor, mae }
    }

    /// Load the model artifact named by the settings and wrap it. The one
    /// fallible initialization of the process; a `ModelLoad` error here is
    /// fatal and should stop startup.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        if !settings.mae.is_finite() || settings.mae <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "mae must be a positive finite number, got {}",
                settings.mae
            )));
        }
        let artifact = ModelArtifact::load(&settings.model_path)?;
        Ok(PredictionService::new(
            Arc::new(ArtifactPredictor::new(artifact)),
            settings.mae,
        ))
    }

    /// Run one synchronous prediction for one form submission. Every
    /// failure is surfaced to the caller for this request; nothing is
    /// retried and nothing is stored here.
    pub fn estimate(&self, draft: CarFeaturesDraft) -> Result<PriceEstimate, EngineError> {
        let features = draft.complete()?;
        validate(&features)?;

        let vector = assemble(&features);
        let prediction = round2(self.predictor.predict(&vector)?);
        let band = band(prediction, self.mae);

        tracing::info!(
            "Estimated {} {} {} at {:.2} (band {})",
            features.year,
            features.make,
            features.model,
            prediction,
            band.range_label
        );

        Ok(PriceEstimate {
            prediction,
            band,
            predicted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::DEFAULT_MAE;
    use crate::features::FeatureVector;
    use shared::models::Make;

    /// Canned predictor standing in for the artifact-backed one.
    struct FixedPredictor(f64);

    impl PricePredictor for FixedPredictor {
        fn predict(&self, _vector: &FeatureVector) -> Result<f64, EngineError> {
            Ok(self.0)
        }
    }

    struct FailingPredictor;

    impl PricePredictor for FailingPredictor {
        fn predict(&self, _vector: &FeatureVector) -> Result<f64, EngineError> {
            Err(EngineError::Prediction("unseen trim level 'B1'".to_string()))
        }
    }

    fn full_draft() -> CarFeaturesDraft {
        CarFeaturesDraft {
            miles: Some(86132.0),
            year: Some(2001),
            make: Some(Make::Toyota),
            model: Some("Corolla".to_string()),
            trim: Some("Base".to_string()),
            body_type: Some("sedan".to_string()),
            engine_size: Some(1.5),
            province: Some("NB".to_string()),
        }
    }

    #[test]
    fn test_estimate_full_chain() {
        let service = PredictionService::new(Arc::new(FixedPredictor(22132.10)), DEFAULT_MAE);
        let estimate = service.estimate(full_draft()).unwrap();

        assert_eq!(estimate.prediction, 22132.10);
        assert_eq!(estimate.band.lower_bound, 18232.10);
        assert_eq!(estimate.band.upper_bound, 26032.10);
        assert_eq!(estimate.band.range_label, "18,232.10 ~ 26,032.10");
    }

    #[test]
    fn test_estimate_rounds_raw_prediction() {
        let service = PredictionService::new(Arc::new(FixedPredictor(22132.104999)), DEFAULT_MAE);
        let estimate = service.estimate(full_draft()).unwrap();
        assert_eq!(estimate.prediction, 22132.10);
    }

    #[test]
    fn test_estimate_rejects_partial_draft() {
        let service = PredictionService::new(Arc::new(FixedPredictor(1.0)), DEFAULT_MAE);
        let mut draft = full_draft();
        draft.engine_size = None;
        let err = service.estimate(draft).unwrap_err();
        assert!(matches!(err, EngineError::MissingField(ref f) if f == "engine_size"));
    }

    #[test]
    fn test_estimate_rejects_out_of_range_input() {
        let service = PredictionService::new(Arc::new(FixedPredictor(1.0)), DEFAULT_MAE);
        let mut draft = full_draft();
        draft.year = Some(1600);
        assert!(matches!(
            service.estimate(draft),
            Err(EngineError::InvalidField(_))
        ));
    }

    #[test]
    fn test_estimate_surfaces_prediction_error() {
        let service = PredictionService::new(Arc::new(FailingPredictor), DEFAULT_MAE);
        let err = service.estimate(full_draft()).unwrap_err();
        assert!(matches!(err, EngineError::Prediction(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_resubmission_overwrites_not_merges() {
        // Two submissions against the same service are independent results.
        let service = PredictionService::new(Arc::new(FixedPredictor(10000.0)), DEFAULT_MAE);
        let first = service.estimate(full_draft()).unwrap();
        let second = service.estimate(full_draft()).unwrap();
        assert_eq!(first.prediction, second.prediction);
        assert_eq!(first.band, second.band);
    }

    #[test]
    fn test_from_settings_with_artifact_file_end_to_end() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "schema": ["miles", "year", "make", "model", "trim", "body_type", "engine_size", "province"],
                "encoders": {{
                    "make": {{"toyota": 0.0, "honda": 1.0}},
                    "model": {{"Corolla": 0.0}},
                    "trim": {{"Base": 0.0}},
                    "body_type": {{"sedan": 0.0}},
                    "province": {{"NB": 0.0}}
                }},
                "coefficients": [-0.05, 10.0, 500.0, 250.0, 100.0, 50.0, 1000.0, 25.0],
                "intercept": 5000.0
            }}"#
        )
        .unwrap();

        let settings = EngineSettings {
            model_path: file.path().to_string_lossy().into_owned(),
            ..EngineSettings::default()
        };
        let service = PredictionService::from_settings(&settings).unwrap();
        let estimate = service.estimate(full_draft()).unwrap();

        // 5000 - 0.05*86132 + 10*2001 + 1000*1.5, rounded to two decimals
        assert_eq!(estimate.prediction, 22203.40);
        assert_eq!(estimate.band.lower_bound, 18303.40);
        assert_eq!(estimate.band.upper_bound, 26103.40);
    }

    #[test]
    fn test_from_settings_rejects_non_positive_mae() {
        let settings = EngineSettings {
            mae: 0.0,
            ..EngineSettings::default()
        };
        assert!(matches!(
            PredictionService::from_settings(&settings),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_settings_missing_artifact_is_fatal() {
        let settings = EngineSettings {
            model_path: "no/such/model.json".to_string(),
            ..EngineSettings::default()
        };
        let err = PredictionService::from_settings(&settings).unwrap_err();
        assert!(err.is_fatal());
    }
}
