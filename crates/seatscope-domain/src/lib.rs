//! Domain layer: record models and the pure analysis services
//! (catalog filter, comparison, competitive scoring, freight estimation).

pub mod model;
pub mod service;

pub use model::{CompetitorRecord, LogisticsProvider, PartRecord};
