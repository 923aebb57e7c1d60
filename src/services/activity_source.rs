// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity source: seed set or live place search.
//!
//! Handles:
//! - Seed ("trending") activities when no search term is given
//! - Provider search, ranking and conversion to `Activity`
//! - Haversine distance from the search origin
//! - Discarding responses overtaken by a newer search

use crate::error::{AppError, Result};
use crate::models::activity::{UNKNOWN_CATEGORY, UNNAMED_LOCATION};
use crate::models::{Activity, Coordinate, PlaceResult};
use crate::services::places::{PlaceProvider, METERS_PER_MILE};
use crate::services::ranking;
use geo::{Distance, Haversine};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues search tickets; only the newest ticket is current.
#[derive(Debug, Default)]
pub struct SearchGuard {
    latest: AtomicU64,
}

/// Ticket identifying one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

impl SearchGuard {
    /// Start a new search, invalidating all earlier tickets.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent search.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Supplies candidate activities for the search screen.
pub struct ActivitySource {
    provider: Option<Arc<dyn PlaceProvider>>,
    guard: SearchGuard,
}

impl ActivitySource {
    /// Create a source. Without a provider only the seed set is available.
    pub fn new(provider: Option<Arc<dyn PlaceProvider>>) -> Self {
        Self {
            provider,
            guard: SearchGuard::default(),
        }
    }

    /// Whether live search is available.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Search for activities.
    ///
    /// An empty term returns the trending seed set. A term is sent to the
    /// provider; results are ranked by popularity then converted. If another
    /// search started while this one was in flight, `AppError::StaleSearch`
    /// is returned and the caller should keep the newer result.
    pub async fn search(
        &self,
        term: &str,
        origin: Coordinate,
        radius_miles: f64,
    ) -> Result<Vec<Activity>> {
        let ticket = self.guard.begin();
        let term = term.trim();

        if term.is_empty() {
            return Ok(trending_activities());
        }

        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::Provider("place search is not configured (set GOOGLE_PLACES_API_KEY)".into())
        })?;

        tracing::info!(term, radius_miles, "Searching places");
        let results = provider
            .text_search(term, origin, radius_miles * METERS_PER_MILE)
            .await?;

        if !self.guard.is_current(ticket) {
            tracing::debug!(term, "Discarding superseded search results");
            return Err(AppError::StaleSearch);
        }

        let activities = to_activities(ranking::rank(results), origin);
        tracing::info!(term, count = activities.len(), "Search complete");
        Ok(activities)
    }
}

/// Convert ranked provider results into activities.
pub fn to_activities(results: Vec<PlaceResult>, origin: Coordinate) -> Vec<Activity> {
    results
        .into_iter()
        .enumerate()
        .map(|(index, place)| to_activity(index, place, origin))
        .collect()
}

fn to_activity(index: usize, place: PlaceResult, origin: Coordinate) -> Activity {
    let location = place.location();
    let distance = location.map_or(0.0, |loc| distance_miles(origin, loc));
    let location = location.unwrap_or(Coordinate::new(0.0, 0.0));

    Activity {
        id: place.place_id.unwrap_or_else(|| index.to_string()),
        name: place.name.unwrap_or_else(|| UNNAMED_LOCATION.to_string()),
        category: place
            .types
            .into_iter()
            .next()
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        distance,
        rating: place.rating.unwrap_or(0.0),
        lat: location.lat,
        lng: location.lng,
    }
}

/// Great-circle distance in miles.
pub fn distance_miles(from: Coordinate, to: Coordinate) -> f64 {
    Haversine.distance(from.to_point(), to.to_point()) / METERS_PER_MILE
}

fn seed(id: &str, name: &str, category: &str, distance: f64, rating: f64, lat: f64, lng: f64) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        distance,
        rating,
        lat,
        lng,
    }
}

/// General seed list shown before any search.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        seed("5", "The Tipsy Crow", "Bar", 0.3, 4.5, 40.7234, -73.9870),
        seed("6", "OMNIA Nightclub", "Club", 0.5, 4.8, 40.7589, -73.9851),
        seed("8", "Central Park Runners", "Run Club", 0.8, 4.7, 40.7829, -73.9654),
        seed("9", "Yankees Game", "Sports Event", 0.4, 4.9, 40.8296, -73.9262),
        seed("11", "Natural History Museum", "Museum", 1.8, 4.9, 40.7813, -73.9740),
        seed("12", "Rooftop Club", "Club", 0.6, 4.4, 40.7484, -73.9857),
        seed("15", "Science Museum", "Museum", 1.7, 4.7, 40.7587, -73.9787),
    ]
}

/// Trending seed list returned for empty searches.
pub fn trending_activities() -> Vec<Activity> {
    vec![
        seed("4", "Runners Meetup", "Run Club", 1.0, 4.9, 40.7580, -73.9855),
        seed("7", "Modern Art Gallery", "Museum", 1.2, 4.6, 40.7829, -73.9654),
        seed("9", "Yankees Game", "Sports Event", 0.4, 4.9, 40.8296, -73.9262),
        seed("10", "Speakeasy Bar", "Bar", 2.1, 4.7, 40.7505, -73.9934),
        seed("11", "Natural History Museum", "Museum", 1.8, 4.9, 40.7813, -73.9740),
        seed("6", "OMNIA Nightclub", "Club", 0.5, 4.8, 40.7589, -73.9851),
    ]
}
