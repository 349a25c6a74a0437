// Engine library root
// Prediction pipeline for the used-car price calculator: feature assembly,
// the artifact-backed predictor, uncertainty banding, and the dropdown
// option catalog. The GUI crate drives all of this in-process.

pub mod banding;
pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod model;
pub mod services;

pub use error::EngineError;
