//! Configuration management
//!
//! Config stored at: ~/.config/seatscope/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use seatscope_domain::service::FilterSpec;
use seatscope_types::{ConfigError, OutputFormat, Result, WeightPreset};

/// A named, reusable filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilterPlan {
    pub name: String,
    pub spec: FilterSpec,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Part catalog CSV to load instead of the built-in dataset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Provider rate TOML to load instead of the built-in rate cards
    #[serde(default)]
    pub providers_path: Option<PathBuf>,

    /// Default weight preset for comprehensive analysis
    #[serde(default)]
    pub default_preset: WeightPreset,

    /// Saved filter plans, reusable by name
    #[serde(default)]
    pub saved_plans: Vec<SavedFilterPlan>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            catalog_path: None,
            providers_path: None,
            default_preset: WeightPreset::Balanced,
            saved_plans: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("seatscope");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Look up a saved plan by name
    pub fn plan(&self, name: &str) -> Option<&SavedFilterPlan> {
        self.saved_plans.iter().find(|p| p.name == name)
    }

    /// Save a plan under a name, replacing any existing plan of that name
    pub fn upsert_plan(&mut self, name: &str, spec: FilterSpec) {
        if let Some(existing) = self.saved_plans.iter_mut().find(|p| p.name == name) {
            existing.spec = spec;
        } else {
            self.saved_plans.push(SavedFilterPlan {
                name: name.to_string(),
                spec,
            });
        }
    }

    /// Delete a plan by name; returns whether it existed.
    pub fn remove_plan(&mut self, name: &str) -> bool {
        let before = self.saved_plans.len();
        self.saved_plans.retain(|p| p.name != name);
        self.saved_plans.len() != before
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seatscope Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Catalog path:   {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Providers path: {}",
            self.providers_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Default preset: {}", self.default_preset.label())?;

        if self.saved_plans.is_empty() {
            writeln!(f, "Saved plans:    (none)")?;
        } else {
            writeln!(f, "Saved plans:")?;
            for plan in &self.saved_plans {
                writeln!(f, "  {:<14} {}", plan.name, plan.spec.summary())?;
            }
        }

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.default_preset, WeightPreset::Balanced);
        assert!(config.catalog_path.is_none());
        assert!(config.saved_plans.is_empty());
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = Config::default();
        config.upsert_plan(
            "byd-premium",
            FilterSpec {
                brand: Some("BYD".to_string()),
                min_price: Some(10000.0),
                ..Default::default()
            },
        );
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.saved_plans, config.saved_plans);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format":"json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_preset, WeightPreset::Balanced);
    }

    #[test]
    fn test_upsert_replaces_existing_plan() {
        let mut config = Config::default();
        config.upsert_plan("mine", FilterSpec::default());
        config.upsert_plan(
            "mine",
            FilterSpec {
                year: Some(2024),
                ..Default::default()
            },
        );
        assert_eq!(config.saved_plans.len(), 1);
        assert_eq!(config.plan("mine").unwrap().spec.year, Some(2024));
    }

    #[test]
    fn test_remove_plan() {
        let mut config = Config::default();
        config.upsert_plan("mine", FilterSpec::default());
        assert!(config.remove_plan("mine"));
        assert!(!config.remove_plan("mine"));
    }
}
