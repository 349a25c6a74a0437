// Session state for the GUI.
//
// The form fields always carry a value (the defaults below), so the
// MissingField contract can never fire from this UI; it protects callers
// that construct drafts some other way. The estimate is the single session
// slot: absent before the first submission, overwritten by each subsequent
// one, never merged.

use engine::features::CarFeaturesDraft;
use shared::models::{Make, PriceEstimate};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub miles: f64,
    pub year: i32,
    pub make: Make,
    pub model: String,
    pub trim: String,
    pub body_type: String,
    pub engine_size: f64,
    pub province: String,

    pub estimate: Option<PriceEstimate>,
    pub error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            miles: 86132.0,
            year: 2001,
            make: Make::Toyota,
            model: "Prius".to_string(),
            trim: "Base".to_string(),
            body_type: "sedan".to_string(),
            engine_size: 1.5,
            province: "NB".to_string(),
            estimate: None,
            error: None,
        }
    }
}

impl AppState {
    pub fn to_draft(&self) -> CarFeaturesDraft {
        CarFeaturesDraft {
            miles: Some(self.miles),
            year: Some(self.year),
            make: Some(self.make),
            model: Some(self.model.clone()),
            trim: Some(self.trim.clone()),
            body_type: Some(self.body_type.clone()),
            engine_size: Some(self.engine_size),
            province: Some(self.province.clone()),
        }
    }

    /// A successful submission replaces the previous result and clears any
    /// stale error message.
    pub fn apply_estimate(&mut self, estimate: PriceEstimate) {
        self.estimate = Some(estimate);
        self.error = None;
    }

    /// A failed submission keeps the last good estimate on screen; only the
    /// message changes.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
    }
}
