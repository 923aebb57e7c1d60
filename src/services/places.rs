// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Place-search provider client (Google Places Text Search).

use crate::error::AppError;
use crate::models::{Coordinate, PlaceResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Meters per mile, used to convert the search radius.
pub const METERS_PER_MILE: f64 = 1609.34;

/// External text-search provider.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Search places by free text around `origin`.
    async fn text_search(
        &self,
        query: &str,
        origin: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<PlaceResult>, AppError>;
}

/// Google Places Text Search client.
#[derive(Clone)]
pub struct GooglePlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    /// Create a new client against `base_url` (normally
    /// `https://maps.googleapis.com/maps/api/place`).
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl PlaceProvider for GooglePlacesClient {
    async fn text_search(
        &self,
        query: &str,
        origin: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<PlaceResult>, AppError> {
        let url = format!("{}/textsearch/json", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query.to_string()),
                ("location", format!("{},{}", origin.lat, origin.lng)),
                ("radius", format!("{:.0}", radius_meters)),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!("HTTP {}: {}", status, body)));
        }

        let body: TextSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("JSON parse error: {}", e)))?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                tracing::debug!(query, count = body.results.len(), "Place search complete");
                Ok(body.results)
            }
            status => {
                if status == AppError::PROVIDER_QUOTA {
                    tracing::warn!("Place provider quota exceeded");
                }
                Err(AppError::Provider(match body.error_message {
                    Some(msg) => format!("{}: {}", status, msg),
                    None => status.to_string(),
                }))
            }
        }
    }
}

/// Text Search response envelope.
#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<PlaceResult>,
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}
