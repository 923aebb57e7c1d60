// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Follow-up recommendations for a chosen activity.
//!
//! Recommendations are an optional enhancement: failures are logged and
//! replaced with a fixed message, never returned to the caller.

use crate::models::Activity;
use crate::services::api::BackendClient;
use crate::services::auth::AuthStore;

/// Shown whenever the backend cannot provide a recommendation.
pub const FALLBACK_RECOMMENDATION: &str = "Sorry, no recommendations available at this time.";

/// Fetches follow-up suggestions from the backend.
#[derive(Clone)]
pub struct SelectionRecommender {
    client: BackendClient,
    auth: AuthStore,
}

impl SelectionRecommender {
    pub fn new(client: BackendClient, auth: AuthStore) -> Self {
        Self { client, auth }
    }

    /// Recommendation text for `chosen`, or the fallback on any failure.
    pub async fn recommend(&self, chosen: &Activity) -> String {
        let token = match self.auth.token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read auth token for recommendation");
                None
            }
        };

        let result = self.client.recommend(token.as_deref(), &chosen.name).await;
        match self.auth.check(result) {
            Ok(text) if !text.trim().is_empty() => {
                tracing::info!(activity = %chosen.name, "Recommendation received");
                text
            }
            Ok(_) => {
                tracing::warn!(activity = %chosen.name, "Empty recommendation, using fallback");
                FALLBACK_RECOMMENDATION.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    activity = %chosen.name,
                    "Recommendation failed, using fallback"
                );
                FALLBACK_RECOMMENDATION.to_string()
            }
        }
    }
}
