// Data loading: the reference dataset feeding the dropdown option lists.
pub mod catalog;

pub use catalog::VehicleCatalog;
