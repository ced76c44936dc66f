//! Place catalog records and the lookup used to resolve itinerary items.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ItineraryItem;
use crate::error::{PlannerError, Result};

/// A record from the external place catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Stable lookup key referenced by itinerary items
    pub key: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Longer description shown under the title
    #[serde(default)]
    pub description: String,

    /// Street address, used as the routing fallback
    #[serde(default)]
    pub address: String,

    /// Latitude, when geocoded
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude, when geocoded
    #[serde(default)]
    pub lng: Option<f64>,

    /// Optional media link associated with the place
    #[serde(default)]
    pub media_url: String,
}

/// An itinerary item joined with its catalog record, ready for display or
/// routing. A catalog miss degrades to the raw id standing in as the title.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub place_id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub media_url: String,
    pub time: String,
}

impl ResolvedPlace {
    /// The point handed to the routing collaborator: `"lat,lng"` when both
    /// coordinates are known, otherwise the title and address joined by a
    /// space (blank parts dropped).
    pub fn route_point(&self) -> String {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            return format!("{lat},{lng}");
        }
        [self.title.trim(), self.address.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// In-memory catalog of places, looked up by key first and title second.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Creates an empty catalog; every lookup degrades to the raw id.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog from already-loaded records.
    pub fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Loads a catalog from a JSON array file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(&path).map_err(|e| PlannerError::FileSystem {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let places: Vec<Place> = serde_json::from_str(&raw)?;
        Ok(Self { places })
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Finds a place by key, falling back to a title match.
    pub fn find(&self, id: &str) -> Option<&Place> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.places
            .iter()
            .find(|place| place.key.trim() == id)
            .or_else(|| self.places.iter().find(|place| place.title.trim() == id))
    }

    /// Joins an itinerary item with its catalog record. A missing record
    /// never fails: the raw id becomes the title and everything else stays
    /// blank.
    pub fn resolve(&self, item: &ItineraryItem) -> ResolvedPlace {
        match self.find(&item.place_id) {
            Some(place) => ResolvedPlace {
                place_id: item.place_id.clone(),
                title: place.title.clone(),
                description: place.description.clone(),
                address: place.address.clone(),
                lat: place.lat,
                lng: place.lng,
                media_url: place.media_url.clone(),
                time: item.time.clone(),
            },
            None => ResolvedPlace {
                place_id: item.place_id.clone(),
                title: item.place_id.clone(),
                description: String::new(),
                address: String::new(),
                lat: None,
                lng: None,
                media_url: String::new(),
                time: item.time.clone(),
            },
        }
    }
}
