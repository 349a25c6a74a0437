// Engine settings, typically deserialized from the application config
use serde::Deserialize;

/// The MAE margin is a constant produced by the offline model-evaluation
/// step (mean absolute error on the holdout set). It belongs to the model
/// artifact's generation, not to any particular dataset loaded at runtime,
/// so it lives in configuration rather than as a literal at call sites.
pub const DEFAULT_MAE: f64 = 3900.0;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    /// Path to the serialized prediction artifact (JSON export of the
    /// trained pipeline). Loaded once per process.
    pub model_path: String,
    /// Path to the reference dataset used only to populate dropdown
    /// options. Never used in prediction.
    pub dataset_path: String,
    /// Half-width of the confidence band around the point estimate.
    pub mae: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            model_path: "model/price_model.json".to_string(),
            dataset_path: "data/honda_toyota_ca.csv".to_string(),
            mae: DEFAULT_MAE,
        }
    }
}
