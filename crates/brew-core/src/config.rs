use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Custom catalog file; the built-in menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());

        let config: AppConfig = toml::from_str(r#"catalog_path = "/tmp/menu.toml""#).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/menu.toml")));
        assert_eq!(config.currency_symbol, "₹");
    }
}
