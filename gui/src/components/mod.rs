// GUI components module
pub mod band_panels;
pub mod form;

pub use band_panels::BandPanels;
pub use form::PriceForm;
