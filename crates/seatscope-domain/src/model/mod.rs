//! Domain model types

pub mod competitor;
pub mod part;
pub mod provider;

pub use competitor::CompetitorRecord;
pub use part::PartRecord;
pub use provider::LogisticsProvider;
