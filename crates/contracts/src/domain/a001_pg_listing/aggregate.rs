use crate::enums::PgType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Listing identifier, unique within one listing collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl ListingId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paying-guest accommodation listing.
///
/// Read-only for the whole UI session; supplied by a `ListingSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub address: String,
    pub city: String,
    /// Monthly rent
    pub price: f64,
    pub rating: f64,
    #[serde(rename = "type")]
    pub pg_type: PgType,
    /// Feature labels (WiFi, AC, Food...), treated as a set
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub room_types: Vec<String>,
    /// Sharing configurations on offer (Single, Double, Triple, Four Sharing)
    pub occupancy: Vec<String>,
}

impl Listing {
    pub fn has_amenity(&self, label: &str) -> bool {
        self.amenities.iter().any(|a| a == label)
    }

    pub fn offers_occupancy(&self, label: &str) -> bool {
        self.occupancy.iter().any(|o| o == label)
    }

    /// First image, used as the card thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 7,
        "name": "Lake View PG",
        "address": "12 Indiranagar, Bangalore",
        "city": "Bangalore",
        "price": 9000,
        "rating": 4.1,
        "type": "female",
        "amenities": ["WiFi", "Food"],
        "roomTypes": ["Double"],
        "occupancy": ["Double", "Four Sharing"]
    }"#;

    #[test]
    fn test_deserialize_listing_schema() {
        let listing: Listing = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(listing.id, ListingId(7));
        assert_eq!(listing.pg_type, PgType::Female);
        assert_eq!(listing.price, 9000.0);
        assert_eq!(listing.room_types, vec!["Double"]);
        assert!(listing.images.is_empty());
        assert_eq!(listing.cover_image(), None);
    }

    #[test]
    fn test_amenity_and_occupancy_lookup_is_exact() {
        let listing: Listing = serde_json::from_str(SAMPLE).unwrap();
        assert!(listing.has_amenity("WiFi"));
        assert!(!listing.has_amenity("wifi"));
        assert!(listing.offers_occupancy("Four Sharing"));
        assert!(!listing.offers_occupancy("Four"));
    }
}
