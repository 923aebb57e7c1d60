// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend REST API client.
//!
//! Handles:
//! - Login and registration
//! - Schedule list/detail/create/update/delete
//! - Follow-up recommendations
//! - Mapping HTTP failures onto `AppError`

use crate::error::AppError;
use crate::models::{
    AuthResponse, CreateScheduleRequest, LoginRequest, RegisterRequest, Schedule,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Backend API client. Cheap to clone.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Auth ────────────────────────────────────────────────────────────────

    /// Log in with username and password.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AppError> {
        credentials.validate()?;
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Register a new account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;
        let url = format!("{}/auth/register", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    // ─── Schedules ───────────────────────────────────────────────────────────

    /// List the current user's schedules.
    pub async fn list_schedules(&self, token: Option<&str>) -> Result<Vec<Schedule>, AppError> {
        let url = format!("{}/schedules", self.base_url);
        self.get_json(&url, token).await
    }

    /// Get a schedule by ID.
    pub async fn get_schedule(&self, token: Option<&str>, id: i64) -> Result<Schedule, AppError> {
        let url = format!("{}/schedules/{}", self.base_url, id);
        self.get_json(&url, token).await
    }

    /// Create a schedule.
    pub async fn create_schedule(
        &self,
        token: Option<&str>,
        request: &CreateScheduleRequest,
    ) -> Result<Schedule, AppError> {
        request.validate()?;
        let url = format!("{}/schedules", self.base_url);
        let response = self
            .authorized(self.http.post(&url), token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Replace a schedule's fields.
    pub async fn update_schedule(
        &self,
        token: Option<&str>,
        id: i64,
        request: &CreateScheduleRequest,
    ) -> Result<Schedule, AppError> {
        request.validate()?;
        let url = format!("{}/schedules/{}", self.base_url, id);
        let response = self
            .authorized(self.http.put(&url), token)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Delete a schedule.
    pub async fn delete_schedule(&self, token: Option<&str>, id: i64) -> Result<(), AppError> {
        let url = format!("{}/schedules/{}", self.base_url, id);
        let response = self
            .authorized(self.http.delete(&url), token)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response(response).await
    }

    // ─── Recommendations ─────────────────────────────────────────────────────

    /// Ask the backend for a follow-up to `chosen_activity`.
    pub async fn recommend(
        &self,
        token: Option<&str>,
        chosen_activity: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/recommendations", self.base_url);
        let body = RecommendationRequest {
            chosen_activity: chosen_activity.to_string(),
        };
        let response = self
            .authorized(self.http.post(&url), token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        let parsed: RecommendationResponse = self.check_response_json(response).await?;
        Ok(parsed.recommendation)
    }

    // ─── Helpers ─────────────────────────────────────────────────────────────

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => {
                tracing::debug!("No auth token for request");
                builder
            }
        }
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        let response = self
            .authorized(self.http.get(url), token)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), AppError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::status_error(response).await)
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
    }

    async fn status_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => {
                tracing::warn!(status = %status, path = %url, "Backend rejected credentials");
                AppError::Unauthorized
            }
            404 => AppError::NotFound(url),
            400 | 422 => AppError::BadRequest(body),
            _ => AppError::Api(format!("HTTP {}: {}", status, body)),
        }
    }
}

/// `POST /recommendations` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationRequest {
    chosen_activity: String,
}

/// `POST /recommendations` response.
#[derive(Debug, Deserialize)]
struct RecommendationResponse {
    recommendation: String,
}
