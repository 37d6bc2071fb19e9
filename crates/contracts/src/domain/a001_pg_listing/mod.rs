pub mod aggregate;
pub mod evaluator;
pub mod filter_state;
pub mod source;

pub use aggregate::{Listing, ListingId};
pub use evaluator::{filter_listings, matches};
pub use filter_state::{ActiveFilter, FilterState, FilterStateManager, FilterUpdate, TypeFilter};
pub use source::{FixtureListingSource, ListingSource};
