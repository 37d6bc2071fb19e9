//! Error types for loading listing data and catalog configuration.
//!
//! Filtering itself never fails: degenerate input collapses into
//! "filter not applied" or "matches nothing". Only the collaborators that
//! read external data return these errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    /// Listing payload is not valid JSON or does not fit the schema.
    #[error("Failed to parse listings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share one identifier.
    #[error("Duplicate listing id: {id}")]
    DuplicateId { id: u32 },

    /// Price is negative or not a finite number.
    #[error("Invalid price {price} for listing {id}")]
    InvalidPrice { id: u32, price: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse catalog config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A filter option list is present but empty.
    #[error("Config section [filters] has empty `{0}` list")]
    EmptyOptions(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = ListingError::from(json_err);
        assert!(matches!(err, ListingError::Parse(_)));
        assert!(err.to_string().contains("Failed to parse listings"));
    }

    #[test]
    fn test_duplicate_id_message_includes_id() {
        let err = ListingError::DuplicateId { id: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_invalid_price_message() {
        let err = ListingError::InvalidPrice { id: 3, price: -5.0 };
        let msg = err.to_string();
        assert!(msg.contains("-5"));
        assert!(msg.contains("listing 3"));
    }
}
