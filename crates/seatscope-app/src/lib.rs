//! Application layer: persisted configuration, built-in datasets, the
//! session workbench and spreadsheet export.

pub mod config;
pub mod datasets;
pub mod export;
pub mod workbench;

pub use config::{Config, SavedFilterPlan};
pub use workbench::Workbench;
