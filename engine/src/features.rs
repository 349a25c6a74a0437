// Feature-vector assembly: turns the eight car attributes into the
// fixed-order vector the prediction artifact was trained on.

use crate::error::EngineError;
use shared::models::{CarFeatures, Make};
use std::fmt;

/// Column order the model pipeline was fitted with. The artifact records
/// the same schema and the two are cross-checked at load time.
pub const FEATURE_ORDER: [&str; 8] = [
    "miles",
    "year",
    "make",
    "model",
    "trim",
    "body_type",
    "engine_size",
    "province",
];

/// One slot of the feature vector. Categorical values are passed through
/// as-is; encoding them to numbers is the prediction engine's job.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Number(n) => write!(f, "{}", n),
            FeatureValue::Category(s) => f.write_str(s),
        }
    }
}

pub type FeatureVector = [FeatureValue; 8];

/// Inputs as they arrive from the form layer, each possibly absent.
/// `complete` is the only way to get a `CarFeatures` out of one of these,
/// so a partial vector can never reach the predictor.
#[derive(Debug, Clone, Default)]
pub struct CarFeaturesDraft {
    pub miles: Option<f64>,
    pub year: Option<i32>,
    pub make: Option<Make>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub body_type: Option<String>,
    pub engine_size: Option<f64>,
    pub province: Option<String>,
}

impl CarFeaturesDraft {
    /// Fails with `MissingField` naming the first absent input.
    pub fn complete(self) -> Result<CarFeatures, EngineError> {
        fn require<T>(value: Option<T>, name: &str) -> Result<T, EngineError> {
            value.ok_or_else(|| EngineError::MissingField(name.to_string()))
        }

        Ok(CarFeatures {
            miles: require(self.miles, "miles")?,
            year: require(self.year, "year")?,
            make: require(self.make, "make")?,
            model: require(self.model, "model")?,
            trim: require(self.trim, "trim")?,
            body_type: require(self.body_type, "body_type")?,
            engine_size: require(self.engine_size, "engine_size")?,
            province: require(self.province, "province")?,
        })
    }
}

/// Range checks the form widgets normally enforce as input minimums.
/// Re-checked here since a typed caller can bypass the widgets.
pub fn validate(features: &CarFeatures) -> Result<(), EngineError> {
    if !features.miles.is_finite() || features.miles < 0.0 {
        return Err(EngineError::InvalidField(format!(
            "miles must be >= 0, got {}",
            features.miles
        )));
    }
    // 1886: the Benz Patent-Motorwagen. Nothing older is a car.
    if features.year < 1886 {
        return Err(EngineError::InvalidField(format!(
            "year must be >= 1886, got {}",
            features.year
        )));
    }
    if !features.engine_size.is_finite() || features.engine_size < 0.9 {
        return Err(EngineError::InvalidField(format!(
            "engine_size must be >= 0.9, got {}",
            features.engine_size
        )));
    }
    Ok(())
}

/// Pure transformation into the fixed feature order. No encoding, no
/// normalization; the artifact's encoders own that.
pub fn assemble(features: &CarFeatures) -> FeatureVector {
    [
        FeatureValue::Number(features.miles),
        FeatureValue::Number(features.year as f64),
        FeatureValue::Category(features.make.as_str().to_string()),
        FeatureValue::Category(features.model.clone()),
        FeatureValue::Category(features.trim.clone()),
        FeatureValue::Category(features.body_type.clone()),
        FeatureValue::Number(features.engine_size),
        FeatureValue::Category(features.province.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> CarFeatures {
        CarFeatures {
            miles: 86132.0,
            year: 2001,
            make: Make::Toyota,
            model: "Corolla".to_string(),
            trim: "Base".to_string(),
            body_type: "sedan".to_string(),
            engine_size: 1.5,
            province: "NB".to_string(),
        }
    }

    fn full_draft() -> CarFeaturesDraft {
        let f = corolla();
        CarFeaturesDraft {
            miles: Some(f.miles),
            year: Some(f.year),
            make: Some(f.make),
            model: Some(f.model),
            trim: Some(f.trim),
            body_type: Some(f.body_type),
            engine_size: Some(f.engine_size),
            province: Some(f.province),
        }
    }

    #[test]
    fn test_assemble_preserves_order() {
        let vector = assemble(&corolla());
        assert_eq!(
            vector,
            [
                FeatureValue::Number(86132.0),
                FeatureValue::Number(2001.0),
                FeatureValue::Category("toyota".to_string()),
                FeatureValue::Category("Corolla".to_string()),
                FeatureValue::Category("Base".to_string()),
                FeatureValue::Category("sedan".to_string()),
                FeatureValue::Number(1.5),
                FeatureValue::Category("NB".to_string()),
            ]
        );
    }

    #[test]
    fn test_vector_length_matches_feature_order() {
        assert_eq!(assemble(&corolla()).len(), FEATURE_ORDER.len());
    }

    #[test]
    fn test_complete_with_all_fields() {
        let features = full_draft().complete().unwrap();
        assert_eq!(features, corolla());
    }

    #[test]
    fn test_complete_names_missing_field() {
        let mut draft = full_draft();
        draft.province = None;
        let err = draft.complete().unwrap_err();
        assert!(matches!(err, EngineError::MissingField(ref f) if f == "province"));

        let err = CarFeaturesDraft::default().complete().unwrap_err();
        assert!(matches!(err, EngineError::MissingField(ref f) if f == "miles"));
    }

    #[test]
    fn test_validate_accepts_widget_minimums() {
        let mut f = corolla();
        f.miles = 0.0;
        f.year = 1886;
        f.engine_size = 0.9;
        assert!(validate(&f).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut f = corolla();
        f.miles = -1.0;
        assert!(matches!(validate(&f), Err(EngineError::InvalidField(_))));

        let mut f = corolla();
        f.year = 1885;
        assert!(matches!(validate(&f), Err(EngineError::InvalidField(_))));

        let mut f = corolla();
        f.engine_size = 0.5;
        assert!(matches!(validate(&f), Err(EngineError::InvalidField(_))));
    }
}
