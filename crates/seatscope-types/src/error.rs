//! Error types for seatscope

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog loader error: {0}")]
    CsvLoader(String),

    #[error("Provider loader error: {0}")]
    ProviderLoader(String),

    /// A required numeric input was not supplied. No partial result is
    /// produced; the caller is told which field to fill in.
    #[error("Missing input: {field}")]
    MissingInput { field: &'static str },

    /// Comparison selection is already at capacity; the add is a no-op.
    #[error("Comparison list is full (max {capacity} items)")]
    CapacityExceeded { capacity: usize },

    /// The item is already in the selection or favorites; the add is a no-op.
    #[error("Item {id} is already in the list")]
    DuplicateEntry { id: u32 },

    #[error("Part not found: {0}")]
    PartNotFound(u32),

    #[error("No saved filter plan named '{0}'")]
    PlanNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
