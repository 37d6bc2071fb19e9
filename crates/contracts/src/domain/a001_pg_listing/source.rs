//! Where listings come from.
//!
//! The evaluator only sees `&[Listing]`; any data-access layer that can
//! produce the same schema plugs in behind `ListingSource`.

use super::aggregate::Listing;
use crate::shared::error::ListingError;
use std::collections::HashSet;

/// Listing data embedded in the binary
const FIXTURE_JSON: &str = include_str!("fixture.json");

/// Supplier of the ordered listing collection
pub trait ListingSource {
    fn load(&self) -> Result<Vec<Listing>, ListingError>;
}

/// Source backed by a JSON document (the embedded fixture by default)
#[derive(Debug, Clone)]
pub struct FixtureListingSource {
    json: String,
}

impl FixtureListingSource {
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl Default for FixtureListingSource {
    fn default() -> Self {
        Self::from_json(FIXTURE_JSON)
    }
}

impl ListingSource for FixtureListingSource {
    fn load(&self) -> Result<Vec<Listing>, ListingError> {
        let listings: Vec<Listing> = serde_json::from_str(&self.json)?;
        validate_listings(&listings)?;
        log::info!("Loaded {} listings", listings.len());
        Ok(listings)
    }
}

/// Ids must be unique and prices finite and non-negative
pub fn validate_listings(listings: &[Listing]) -> Result<(), ListingError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id) {
            log::warn!("Rejecting listings: duplicate id {}", listing.id);
            return Err(ListingError::DuplicateId {
                id: listing.id.value(),
            });
        }
        if !listing.price.is_finite() || listing.price < 0.0 {
            return Err(ListingError::InvalidPrice {
                id: listing.id.value(),
                price: listing.price,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loads_in_order() {
        let listings = FixtureListingSource::default().load().unwrap();
        let names: Vec<&str> = listings.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Comfort Stay PG", "Green View PG", "Student Hub PG"]
        );
        assert!(listings.iter().all(|l| l.cover_image().is_some()));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = FixtureListingSource::from_json("{").load().unwrap_err();
        assert!(matches!(err, ListingError::Parse(_)));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let json = r#"[{"id":1,"name":"a","address":"b","city":"c","price":1,"rating":1,
            "type":"coliving","amenities":[],"roomTypes":[],"occupancy":[]}]"#;
        let err = FixtureListingSource::from_json(json).load().unwrap_err();
        assert!(matches!(err, ListingError::Parse(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut listings = FixtureListingSource::default().load().unwrap();
        listings[2].id = listings[0].id;
        let err = validate_listings(&listings).unwrap_err();
        assert!(matches!(err, ListingError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut listings = FixtureListingSource::default().load().unwrap();
        listings[1].price = -1.0;
        let err = validate_listings(&listings).unwrap_err();
        assert!(matches!(err, ListingError::InvalidPrice { id: 2, .. }));
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let listings = FixtureListingSource::from_json("[]").load().unwrap();
        assert!(listings.is_empty());
    }
}
