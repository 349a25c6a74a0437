use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field: {0}")]
    InvalidField(String),

    #[error("Model artifact error: {0}")]
    ModelLoad(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),
}

impl EngineError {
    /// Whether the failure prevents every future prediction (as opposed to
    /// just the current submission). Model-artifact problems are fatal; a
    /// rejected feature vector is not.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::ModelLoad(_) | EngineError::ConfigError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_load_is_fatal_prediction_is_not() {
        assert!(EngineError::ModelLoad("bad file".into()).is_fatal());
        assert!(!EngineError::Prediction("unseen trim".into()).is_fatal());
        assert!(!EngineError::MissingField("miles".into()).is_fatal());
    }

    #[test]
    fn display_names_the_field() {
        let err = EngineError::MissingField("province".into());
        assert_eq!(err.to_string(), "Missing required field: province");
    }
}
