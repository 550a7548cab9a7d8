//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use eco_commerce::search::{SortOption, DEFAULT_MAX_PRICE};
use eco_commerce::Currency;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the storefront data lives.
    #[serde(default)]
    pub store: StoreConfig,

    /// Storefront settings.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Catalog search defaults.
    #[serde(default)]
    pub search: SearchConfig,

    /// Reward crediting rules.
    #[serde(default)]
    pub rewards: RewardsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.search.max_price <= 0 {
            bail!("search.max_price must be positive, got {}", self.search.max_price);
        }
        if !(1..=100).contains(&self.storefront.per_page) {
            bail!("storefront.per_page must be 1-100, got {}", self.storefront.per_page);
        }
        self.default_sort()?;
        Ok(())
    }

    /// The configured default product ordering.
    pub fn default_sort(&self) -> Result<SortOption> {
        self.search
            .default_sort
            .parse()
            .with_context(|| "Invalid search.default_sort")
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Data directory, relative to the working directory unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Currency for new catalogs and admin prices.
    #[serde(default)]
    pub currency: Currency,

    /// Products per page.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_per_page() -> i64 {
    24
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            per_page: default_per_page(),
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Upper bound of the default price filter, in whole units.
    #[serde(default = "default_max_price")]
    pub max_price: i64,

    /// Default ordering (price-asc, price-desc, co2-asc, co2-desc, rating).
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_max_price() -> i64 {
    DEFAULT_MAX_PRICE
}

fn default_sort() -> String {
    SortOption::default().as_str().to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_price: default_max_price(),
            default_sort: default_sort(),
        }
    }
}

/// Rewards configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Credit nothing instead of deducting points for high-carbon orders.
    #[serde(default)]
    pub floor_negative_points: bool,
}

/// Generate a default ecobazaar.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# EcoBazaar configuration

[store]
# data_dir = ".ecobazaar"

[storefront]
currency = "INR"
per_page = 24

[search]
max_price = {max_price}
default_sort = "{sort}"

[rewards]
# Credit zero instead of deducting points for orders above 10 kg CO2
floor_negative_points = false
"#,
        max_price = DEFAULT_MAX_PRICE,
        sort = default_sort(),
    )
}

/// Write a default config file, TOML with comments or plain JSON by extension.
pub fn write_default_config(path: &Path) -> Result<()> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        let path = path
            .to_str()
            .with_context(|| format!("Config path is not valid UTF-8: {}", path.display()))?;
        return CliConfig::default().save(path);
    }

    std::fs::write(path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
        parsed.validate().unwrap();
    }

    #[test]
    fn test_partial_config() {
        let parsed: CliConfig = toml::from_str(
            r#"
[storefront]
currency = "USD"

[rewards]
floor_negative_points = true
"#,
        )
        .unwrap();
        assert_eq!(parsed.storefront.currency, Currency::USD);
        assert_eq!(parsed.storefront.per_page, 24);
        assert_eq!(parsed.search.max_price, DEFAULT_MAX_PRICE);
        assert!(parsed.rewards.floor_negative_points);
        assert!(parsed.store.data_dir.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CliConfig::default();
        config.search.default_sort = "newest".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.search.max_price = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ecobazaar.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.store.data_dir = Some("data".to_string());
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }

    #[test]
    fn test_write_default_config_both_formats() {
        let dir = tempfile::TempDir::new().unwrap();

        let toml_path = dir.path().join("ecobazaar.toml");
        write_default_config(&toml_path).unwrap();
        let content = std::fs::read_to_string(&toml_path).unwrap();
        assert!(content.starts_with("# EcoBazaar configuration"));
        assert_eq!(CliConfig::load(toml_path.to_str().unwrap()).unwrap(), CliConfig::default());

        let json_path = dir.path().join("ecobazaar.json");
        write_default_config(&json_path).unwrap();
        assert_eq!(CliConfig::load(json_path.to_str().unwrap()).unwrap(), CliConfig::default());
    }
}
