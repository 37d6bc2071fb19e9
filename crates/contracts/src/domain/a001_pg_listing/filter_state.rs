//! Filter state for the PG listing page and the manager that owns it.
//!
//! UI controls never touch `FilterState` directly. Each control emits one
//! `FilterUpdate`; `FilterStateManager::apply_update` derives the next state
//! from the previous one and swaps it in whole.

use crate::enums::PgType;
use crate::shared::number_parse::parse_price;
use std::collections::BTreeSet;

/// Selected PG type.
///
/// A code that is not a known `PgType` is kept as `Unrecognized` and matches
/// no listing, so a bad selector value shows an empty grid instead of
/// silently widening to "any type".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    Exactly(PgType),
    Unrecognized(String),
}

impl TypeFilter {
    /// `""` means "All Types" and yields `None`.
    pub fn parse(code: &str) -> Option<TypeFilter> {
        if code.is_empty() {
            return None;
        }
        Some(match PgType::from_code(code) {
            Some(t) => TypeFilter::Exactly(t),
            None => TypeFilter::Unrecognized(code.to_string()),
        })
    }

    pub fn matches(&self, pg_type: PgType) -> bool {
        match self {
            TypeFilter::Exactly(t) => *t == pg_type,
            TypeFilter::Unrecognized(_) => false,
        }
    }

    /// Code as the type selector knows it
    pub fn code(&self) -> &str {
        match self {
            TypeFilter::Exactly(t) => t.code(),
            TypeFilter::Unrecognized(code) => code.as_str(),
        }
    }
}

/// Current search text and structured filter criteria.
///
/// Empty `amenities` / `occupancy` sets mean "no restriction".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search_text: String,
    /// `None` when unset or whitespace-only
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// `None` means any type
    pub pg_type: Option<TypeFilter>,
    /// Every label is required (ALL-of)
    pub amenities: BTreeSet<String>,
    /// Any label is acceptable (ANY-of)
    pub occupancy: BTreeSet<String>,
}

/// One change emitted by a UI control.
///
/// Values arrive raw, as typed or selected; parsing happens in
/// `FilterState::with_update`.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    Search(String),
    ClearSearch,
    Location(String),
    MinPrice(String),
    MaxPrice(String),
    /// Type selector code, `""` for all types
    Type(String),
    Amenity { label: String, checked: bool },
    Occupancy { label: String, checked: bool },
    /// Back to defaults, search text included
    Reset,
}

impl FilterUpdate {
    pub fn amenity(label: impl Into<String>, checked: bool) -> Self {
        FilterUpdate::Amenity {
            label: label.into(),
            checked,
        }
    }

    pub fn occupancy(label: impl Into<String>, checked: bool) -> Self {
        FilterUpdate::Occupancy {
            label: label.into(),
            checked,
        }
    }
}

/// Active filter rendered as a removable chip
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    pub label: String,
    /// Update that clears exactly this filter
    pub removal: FilterUpdate,
}

fn toggle(set: &mut BTreeSet<String>, label: String, checked: bool) {
    if checked {
        set.insert(label);
    } else {
        set.remove(&label);
    }
}

impl FilterState {
    /// Derive the next state. Only the field named by `update` changes.
    pub fn with_update(&self, update: FilterUpdate) -> FilterState {
        let mut next = self.clone();
        match update {
            FilterUpdate::Search(text) => next.search_text = text,
            FilterUpdate::ClearSearch => next.search_text.clear(),
            FilterUpdate::Location(text) => {
                next.location = if text.trim().is_empty() {
                    None
                } else {
                    Some(text)
                };
            }
            FilterUpdate::MinPrice(raw) => next.min_price = parse_price(&raw),
            FilterUpdate::MaxPrice(raw) => next.max_price = parse_price(&raw),
            FilterUpdate::Type(code) => next.pg_type = TypeFilter::parse(&code),
            FilterUpdate::Amenity { label, checked } => toggle(&mut next.amenities, label, checked),
            FilterUpdate::Occupancy { label, checked } => {
                toggle(&mut next.occupancy, label, checked)
            }
            FilterUpdate::Reset => next = FilterState::default(),
        }
        next
    }

    /// Nothing filtered, search text included ("Clear all" has nothing to do)
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Filter panel criteria in display order. Search text is not included:
    /// it lives in its own box above the grid.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();

        if let Some(location) = &self.location {
            chips.push(ActiveFilter {
                label: format!("Location: {}", location.trim()),
                removal: FilterUpdate::Location(String::new()),
            });
        }
        if let Some(min) = self.min_price {
            chips.push(ActiveFilter {
                label: format!("Min price: {}", min),
                removal: FilterUpdate::MinPrice(String::new()),
            });
        }
        if let Some(max) = self.max_price {
            chips.push(ActiveFilter {
                label: format!("Max price: {}", max),
                removal: FilterUpdate::MaxPrice(String::new()),
            });
        }
        if let Some(pg_type) = &self.pg_type {
            let name = match pg_type {
                TypeFilter::Exactly(t) => t.display_name(),
                TypeFilter::Unrecognized(code) => code.as_str(),
            };
            chips.push(ActiveFilter {
                label: format!("Type: {}", name),
                removal: FilterUpdate::Type(String::new()),
            });
        }
        for label in &self.occupancy {
            chips.push(ActiveFilter {
                label: label.clone(),
                removal: FilterUpdate::occupancy(label.clone(), false),
            });
        }
        for label in &self.amenities {
            chips.push(ActiveFilter {
                label: label.clone(),
                removal: FilterUpdate::amenity(label.clone(), false),
            });
        }

        chips
    }

    pub fn active_filter_count(&self) -> usize {
        self.active_filters().len()
    }
}

/// Sole owner of the page's `FilterState`
#[derive(Debug, Clone, Default)]
pub struct FilterStateManager {
    state: FilterState,
}

impl FilterStateManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Merge one update into the state and return the new state
    pub fn apply_update(&mut self, update: FilterUpdate) -> &FilterState {
        log::debug!("Applying filter update: {:?}", update);
        self.state = self.state.with_update(update);
        &self.state
    }
}
