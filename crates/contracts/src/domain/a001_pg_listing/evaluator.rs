//! Predicate evaluation over the listing collection.
//!
//! A listing is kept when every active criterion holds:
//! - search text: substring of name OR address OR city (case-insensitive)
//! - location: substring of address (case-insensitive)
//! - min / max price: inclusive bounds
//! - type: exact match
//! - amenities: ALL selected labels present
//! - occupancy: ANY selected label present
//!
//! Inactive criteria (blank text, unset bounds, empty sets) are vacuously true.

use super::aggregate::Listing;
use super::filter_state::FilterState;

/// Lowercased needle for substring search, `None` when the text is blank.
/// Non-blank text is matched as typed, surrounding spaces included.
fn needle(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_search(listing: &Listing, search: Option<&str>) -> bool {
    match search {
        None => true,
        Some(q) => {
            contains_ci(&listing.name, q)
                || contains_ci(&listing.address, q)
                || contains_ci(&listing.city, q)
        }
    }
}

fn matches_location(listing: &Listing, location: Option<&str>) -> bool {
    location.map_or(true, |loc| contains_ci(&listing.address, loc))
}

fn matches_price(listing: &Listing, state: &FilterState) -> bool {
    if let Some(min) = state.min_price {
        if listing.price < min {
            return false;
        }
    }
    if let Some(max) = state.max_price {
        if listing.price > max {
            return false;
        }
    }
    true
}

fn matches_amenities(listing: &Listing, state: &FilterState) -> bool {
    state.amenities.iter().all(|a| listing.has_amenity(a))
}

fn matches_occupancy(listing: &Listing, state: &FilterState) -> bool {
    state.occupancy.is_empty() || state.occupancy.iter().any(|o| listing.offers_occupancy(o))
}

fn matches_prepared(
    listing: &Listing,
    state: &FilterState,
    search: Option<&str>,
    location: Option<&str>,
) -> bool {
    matches_search(listing, search)
        && matches_location(listing, location)
        && matches_price(listing, state)
        && state
            .pg_type
            .as_ref()
            .map_or(true, |t| t.matches(listing.pg_type))
        && matches_amenities(listing, state)
        && matches_occupancy(listing, state)
}

/// Whether a single listing satisfies the filter state
pub fn matches(listing: &Listing, state: &FilterState) -> bool {
    let search = needle(&state.search_text);
    let location = state.location.as_deref().and_then(needle);
    matches_prepared(listing, state, search.as_deref(), location.as_deref())
}

/// Listings satisfying `state`, in source order.
///
/// Stateless; callers recompute on every state or collection change.
pub fn filter_listings<'a>(listings: &'a [Listing], state: &FilterState) -> Vec<&'a Listing> {
    let search = needle(&state.search_text);
    let location = state.location.as_deref().and_then(needle);

    let result: Vec<&Listing> = listings
        .iter()
        .filter(|l| matches_prepared(l, state, search.as_deref(), location.as_deref()))
        .collect();

    log::debug!(
        "Filtered listings: {} of {} match",
        result.len(),
        listings.len()
    );
    result
}
