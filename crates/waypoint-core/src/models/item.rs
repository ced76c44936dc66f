//! Itinerary item model definition.

use serde::{Deserialize, Serialize};

/// A reference to a catalog place scheduled into one day of the course.
///
/// Serialized field names match the persisted/shared wire shape, which keys
/// the catalog reference as `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryItem {
    /// Stable key into the external place catalog
    #[serde(rename = "id")]
    pub place_id: String,

    /// Optional `HH:MM` visit time; empty when unset
    #[serde(default)]
    pub time: String,

    /// Free-text note (reserved; carried but not mutated by any operation)
    #[serde(default)]
    pub note: String,
}

impl ItineraryItem {
    /// Creates a fresh item for a place with no time and no note.
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            time: String::new(),
            note: String::new(),
        }
    }

    /// Whether the item carries a visit time.
    pub fn has_time(&self) -> bool {
        !self.time.is_empty()
    }
}
