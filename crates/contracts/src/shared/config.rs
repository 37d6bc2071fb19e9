use serde::Deserialize;

use super::error::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub app: AppConfig,
    pub filters: FilterOptionsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub search_placeholder: String,
    pub currency_symbol: String,
}

/// Labels offered as checkboxes in the filter panel
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FilterOptionsConfig {
    pub amenities: Vec<String>,
    pub occupancy: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[app]
title = "PG Hunt"
search_placeholder = "Search by location, PG name, or landmark..."
currency_symbol = "₹"

[filters]
amenities = ["WiFi", "AC", "Food", "Laundry", "Parking", "Security"]
occupancy = ["Single", "Double", "Triple", "Four Sharing"]
"#;

/// Load the catalog configuration.
///
/// `overrides` is a complete TOML document replacing the embedded default;
/// `None` uses the default.
pub fn load_config(overrides: Option<&str>) -> Result<CatalogConfig, ConfigError> {
    let source = match overrides {
        Some(text) => {
            log::info!("Loading catalog config from provided TOML");
            text
        }
        None => {
            log::debug!("Using default embedded catalog config");
            DEFAULT_CONFIG
        }
    };

    let config: CatalogConfig = toml::from_str(source)?;
    if config.filters.amenities.is_empty() {
        return Err(ConfigError::EmptyOptions("amenities"));
    }
    if config.filters.occupancy.is_empty() {
        return Err(ConfigError::EmptyOptions("occupancy"));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "PG Hunt");
        assert_eq!(config.app.currency_symbol, "₹");
        assert_eq!(
            config.filters.amenities,
            vec!["WiFi", "AC", "Food", "Laundry", "Parking", "Security"]
        );
        assert_eq!(
            config.filters.occupancy,
            vec!["Single", "Double", "Triple", "Four Sharing"]
        );
    }

    #[test]
    fn test_override_replaces_default() {
        let toml_text = r#"
[app]
title = "Stay Finder"
search_placeholder = "Search"
currency_symbol = "Rs"

[filters]
amenities = ["WiFi"]
occupancy = ["Single", "Double"]
"#;
        let config = load_config(Some(toml_text)).unwrap();
        assert_eq!(config.app.title, "Stay Finder");
        assert_eq!(config.filters.amenities, vec!["WiFi"]);
    }

    #[test]
    fn test_empty_option_list_rejected() {
        let toml_text = r#"
[app]
title = "x"
search_placeholder = "x"
currency_symbol = "x"

[filters]
amenities = []
occupancy = ["Single"]
"#;
        let err = load_config(Some(toml_text)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyOptions("amenities")));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = load_config(Some("[app\ntitle=")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
