//! Data loading: seat/competitor catalogs from CSV, provider rate
//! cards from TOML.

pub mod csv_loader;
pub mod provider_loader;

pub use csv_loader::{load_competitors_csv, load_parts_csv, CsvLoaderError};
pub use provider_loader::ProviderLoader;
