use contracts::domain::a001_pg_listing::{
    FilterStateManager, FixtureListingSource, Listing, ListingSource,
};
use leptos::prelude::*;

pub fn create_state() -> RwSignal<FilterStateManager> {
    RwSignal::new(FilterStateManager::new())
}

/// Listings for the session plus a user-facing error if loading failed
pub fn load_listings(source: &dyn ListingSource) -> (Vec<Listing>, Option<String>) {
    match source.load() {
        Ok(listings) => (listings, None),
        Err(e) => {
            log::error!("Failed to load listings: {}", e);
            (Vec::new(), Some(format!("Could not load listings: {}", e)))
        }
    }
}

pub fn default_source() -> FixtureListingSource {
    FixtureListingSource::default()
}
