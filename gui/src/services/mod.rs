// GUI-side services
pub mod engine_handle;

pub use engine_handle::EngineHandle;
