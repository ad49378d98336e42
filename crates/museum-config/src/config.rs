//! # Museum Configuration
//!
//! Configuration for the ticket desk: which museum is printed on receipts and
//! where the rate table lives.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MUSEUM_NAME="Hall of Fossils"                                      │
//! │     MUSEUM_PRICING_PATH=/etc/museum/tickets.toml                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tickets/museum.toml (Linux)                              │
//! │     ~/Library/Application Support/org.museum.tickets/museum.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     "Dinosaur Museum", bundled rate table                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # museum.toml
//! [museum]
//! name = "Dinosaur Museum"
//!
//! [pricing]
//! path = "/etc/museum/tickets.json"
//! ```

use museum_core::receipt::header_for;
use museum_core::PricingTable;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::pricing::{default_pricing_table, load_pricing_table};

/// Overrides the museum name printed on receipts.
pub const ENV_MUSEUM_NAME: &str = "MUSEUM_NAME";

/// Overrides the rate file path.
pub const ENV_PRICING_PATH: &str = "MUSEUM_PRICING_PATH";

// =============================================================================
// Sections
// =============================================================================

/// Museum identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumSettings {
    /// Printed in the receipt header: "Thank you for visiting the <name>!"
    #[serde(default = "default_museum_name")]
    pub name: String,
}

fn default_museum_name() -> String {
    "Dinosaur Museum".to_string()
}

impl Default for MuseumSettings {
    fn default() -> Self {
        MuseumSettings {
            name: default_museum_name(),
        }
    }
}

/// Where the rate table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Rate file (`.json` or `.toml`). The bundled table is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete ticket desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuseumConfig {
    #[serde(default)]
    pub museum: MuseumSettings,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl MuseumConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (museum.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// `load` with the environment supplied as a lookup.
    fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading museum config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file body.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.museum.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("museum name must not be empty".into()));
        }

        if let Some(ref path) = self.pricing.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfig("pricing path must not be empty".into()));
            }
        }

        Ok(())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup(ENV_MUSEUM_NAME) {
            debug!(name = %name, "Overriding museum name from environment");
            self.museum.name = name;
        }

        if let Some(path) = lookup(ENV_PRICING_PATH) {
            debug!(path = %path, "Overriding rate file from environment");
            self.pricing.path = Some(PathBuf::from(path));
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "museum", "tickets")
            .map(|dirs| dirs.config_dir().join("museum.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Header line for receipts.
    pub fn receipt_header(&self) -> String {
        header_for(&self.museum.name)
    }

    /// Loads the configured rate table, or the bundled one.
    pub fn pricing_table(&self) -> ConfigResult<PricingTable> {
        match self.pricing.path {
            Some(ref path) => load_pricing_table(path),
            None => {
                debug!("No rate file configured, using bundled rates");
                default_pricing_table()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use museum_core::receipt::DEFAULT_HEADER;
    use std::collections::HashMap;
    use std::path::Path;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("museum-config-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = MuseumConfig::default();
        assert_eq!(config.museum.name, "Dinosaur Museum");
        assert!(config.pricing.path.is_none());
        assert_eq!(config.receipt_header(), DEFAULT_HEADER);
    }

    #[test]
    fn test_from_toml() {
        let config = MuseumConfig::from_toml(
            r#"
            [museum]
            name = "Hall of Fossils"

            [pricing]
            path = "/srv/rates.toml"
            "#,
        )
        .unwrap();

        assert_eq!(config.museum.name, "Hall of Fossils");
        assert_eq!(config.pricing.path, Some(PathBuf::from("/srv/rates.toml")));
        assert_eq!(config.receipt_header(), "Thank you for visiting the Hall of Fossils!");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MuseumConfig::from_toml("[pricing]\n").unwrap();
        assert_eq!(config, MuseumConfig::default());
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = MuseumConfig::from_toml("[museum]\nname = \"From File\"\n").unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_MUSEUM_NAME, "From Env"),
            (ENV_PRICING_PATH, "/tmp/rates.json"),
        ]
        .into_iter()
        .collect();

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.museum.name, "From Env");
        assert_eq!(config.pricing.path, Some(PathBuf::from("/tmp/rates.json")));
    }

    #[test]
    fn test_load_reads_config_file() {
        let path = temp_config(
            "museum.toml",
            "[museum]\nname = \"Hall of Fossils\"\n\n[pricing]\npath = \"/srv/rates.toml\"\n",
        );

        let config = MuseumConfig::load_with(Some(path), no_env).unwrap();
        assert_eq!(config.museum.name, "Hall of Fossils");
        assert_eq!(config.pricing.path, Some(PathBuf::from("/srv/rates.toml")));
    }

    #[test]
    fn test_load_applies_env_after_file_then_validates() {
        let path = temp_config("layered.toml", "[museum]\nname = \"From File\"\n");

        let config = MuseumConfig::load_with(Some(path.clone()), |key| {
            (key == ENV_MUSEUM_NAME).then(|| "From Env".to_string())
        })
        .unwrap();
        assert_eq!(config.museum.name, "From Env");
        assert!(config.pricing.path.is_none());

        let result = MuseumConfig::load_with(Some(path), |key| {
            (key == ENV_MUSEUM_NAME).then(String::new)
        });
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/museum-config/museum.toml").to_path_buf();
        assert!(!path.exists());

        let config = MuseumConfig::load_with(Some(path), no_env).unwrap();
        assert_eq!(config, MuseumConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config("broken.toml", "[museum\nname = 1\n");
        let result = MuseumConfig::load_with(Some(path), no_env);
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = MuseumConfig::default();
        assert!(config.validate().is_ok());

        config.museum.name = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));

        config.museum.name = "Dinosaur Museum".to_string();
        config.pricing.path = Some(PathBuf::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bundled_table_when_no_path() {
        let table = MuseumConfig::default().pricing_table().unwrap();
        assert!(table.admission("general").is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&MuseumConfig::default()).unwrap();
        assert!(toml_str.contains("[museum]"));
        assert!(toml_str.contains("Dinosaur Museum"));
    }
}
