// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - client logic layer.

pub mod activity_source;
pub mod api;
pub mod auth;
pub mod draft_store;
pub mod filter;
pub mod map;
pub mod places;
pub mod ranking;
pub mod recommender;

pub use activity_source::{ActivitySource, SearchGuard, SearchTicket};
pub use api::BackendClient;
pub use auth::AuthStore;
pub use draft_store::SessionDraftStore;
pub use places::{GooglePlacesClient, PlaceProvider};
pub use recommender::{SelectionRecommender, FALLBACK_RECOMMENDATION};
