//! Logistics provider rate cards loaded from TOML
//!
//! A rate file holds one `[[providers]]` table per provider. Loading
//! replaces the built-in rate set for the session.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use seatscope_domain::LogisticsProvider;
use seatscope_types::{Error, Result};

/// Container for parsing a rate card file
#[derive(Debug, Deserialize)]
struct RateFileConfig {
    providers: Vec<LogisticsProvider>,
}

/// Provider rate card repository loaded from TOML
#[derive(Debug)]
pub struct ProviderLoader {
    /// Map of provider id to rate card, ordered by id
    providers: BTreeMap<u32, LogisticsProvider>,
}

impl ProviderLoader {
    /// Load provider rate cards from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ProviderLoader(format!("Failed to read provider rate file: {}", e))
        })?;

        Self::load_from_str(&content)
    }

    /// Load provider rate cards from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: RateFileConfig = toml::from_str(toml_content).map_err(|e| {
            Error::ProviderLoader(format!("Failed to parse provider rate TOML: {}", e))
        })?;

        let providers = config
            .providers
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(Self { providers })
    }

    /// All rate cards in id order
    pub fn providers(&self) -> Vec<&LogisticsProvider> {
        self.providers.values().collect()
    }

    /// Look up a rate card by provider id
    pub fn get(&self, id: u32) -> Option<&LogisticsProvider> {
        self.providers.get(&id)
    }

    /// Look up a rate card by provider name
    pub fn by_name(&self, name: &str) -> Option<&LogisticsProvider> {
        self.providers.values().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[providers]]
id = 1
name = "SF Express"
base_rate = 20.0
weight_rate = 3.0
min_charge = 50.0
delivery_time = "1-3 days"

[[providers]]
id = 2
name = "JD Logistics"
base_rate = 18.0
weight_rate = 3.2
min_charge = 45.0
delivery_time = "2-4 days"
"#;

    #[test]
    fn test_load_from_str() {
        let loader = ProviderLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.len(), 2);
    }

    #[test]
    fn test_get_by_id() {
        let loader = ProviderLoader::load_from_str(TEST_TOML).unwrap();
        let sf = loader.get(1).unwrap();
        assert_eq!(sf.name, "SF Express");
        assert!((sf.weight_rate - 3.0).abs() < 1e-9);
        assert!(loader.get(99).is_none());
    }

    #[test]
    fn test_by_name() {
        let loader = ProviderLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.by_name("JD Logistics").map(|p| p.id), Some(2));
        assert!(loader.by_name("Nonexistent").is_none());
    }

    #[test]
    fn test_providers_ordered_by_id() {
        let loader = ProviderLoader::load_from_str(TEST_TOML).unwrap();
        let ids: Vec<u32> = loader.providers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_malformed_toml_is_loader_error() {
        let result = ProviderLoader::load_from_str("providers = 3");
        assert!(matches!(result, Err(Error::ProviderLoader(_))));
    }
}
