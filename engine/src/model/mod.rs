// Prediction engine: the artifact format and the predictor capability.
pub mod artifact;
pub mod predictor;

pub use artifact::ModelArtifact;
pub use predictor::{ArtifactPredictor, PricePredictor};
