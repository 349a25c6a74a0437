// In-process handle around the engine's prediction service.
//
// Bootstrapped once at app startup: load the model artifact, load the
// option catalog, keep both for the life of the process. A model-load
// failure is remembered so the UI can render a fatal view instead of a
// form that can never predict. A catalog failure is not fatal; the
// built-in enumerations stand in.

use crate::config::AppConfig;
use engine::data::VehicleCatalog;
use engine::features::CarFeaturesDraft;
use engine::services::PredictionService;
use shared::models::PriceEstimate;
use std::sync::Arc;

#[derive(Clone)]
pub struct EngineHandle {
    service: Option<Arc<PredictionService>>,
    pub catalog: Arc<VehicleCatalog>,
    pub load_error: Option<String>,
}

impl EngineHandle {
    pub fn bootstrap(config: &AppConfig) -> EngineHandle {
        let catalog = match VehicleCatalog::from_csv(&config.engine.dataset_path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded option catalog from '{}' ({} models, {} trims)",
                    config.engine.dataset_path,
                    catalog.models.len(),
                    catalog.trims.len()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read reference dataset '{}': {:#}. Using built-in option lists.",
                    config.engine.dataset_path,
                    e
                );
                VehicleCatalog::builtin()
            }
        };

        match PredictionService::from_settings(&config.engine) {
            Ok(service) => EngineHandle {
                service: Some(Arc::new(service)),
                catalog: Arc::new(catalog),
                load_error: None,
            },
            Err(e) => {
                tracing::error!("Prediction engine failed to start: {}", e);
                EngineHandle {
                    service: None,
                    catalog: Arc::new(catalog),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }

    /// One synchronous prediction; errors come back as display-ready text.
    pub fn estimate(&self, draft: CarFeaturesDraft) -> Result<PriceEstimate, String> {
        match &self.service {
            Some(service) => service.estimate(draft).map_err(|e| e.to_string()),
            None => Err("The prediction model is not loaded".to_string()),
        }
    }
}
