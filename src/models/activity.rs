// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity model and provider-native place results.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category used when a place has no type information.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Name used when a place has no display name.
pub const UNNAMED_LOCATION: &str = "Unnamed Location";

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Convert to a `geo` point (x = longitude, y = latitude).
    pub fn to_point(self) -> geo::Point<f64> {
        geo::Point::new(self.lng, self.lat)
    }
}

/// A single visitable item (bar, museum, event, ...) found by a search.
///
/// Built per search and never persisted beyond the session draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    /// Provider place ID, or the result index when the provider gave none
    pub id: String,
    pub name: String,
    pub category: String,
    /// Distance from the search origin in miles
    pub distance: f64,
    /// Average rating, 0 to 5
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
}

impl Activity {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Place record as returned by the text-search provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews behind `rating`
    #[serde(default)]
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
}

impl PlaceResult {
    /// Location of the place, if the provider returned geometry.
    pub fn location(&self) -> Option<Coordinate> {
        self.geometry
            .as_ref()
            .map(|g| Coordinate::new(g.location.lat, g.location.lng))
    }
}

/// Place geometry wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: Coordinate,
}
