// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth token and cached profile, kept in durable storage.

use crate::error::{AppError, Result};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::services::api::BackendClient;
use crate::storage::{keys, Storage};
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::Arc;

/// Claims read from the backend token. Only `exp` matters client-side.
#[derive(Debug, Deserialize)]
struct Claims {
    #[allow(dead_code)]
    exp: usize,
}

/// Holds the login state; passed explicitly instead of living in a global.
#[derive(Clone)]
pub struct AuthStore {
    storage: Arc<dyn Storage>,
}

impl AuthStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Log in and persist the returned token and profile.
    pub async fn login(&self, client: &BackendClient, credentials: &LoginRequest) -> Result<User> {
        let response = client.login(credentials).await?;
        let (token, user) = response.into_parts(&credentials.username);
        self.set_auth(&user, &token)?;
        tracing::info!(username = %user.username, "Logged in");
        Ok(user)
    }

    /// Register and persist the returned token and profile.
    pub async fn register(&self, client: &BackendClient, request: &RegisterRequest) -> Result<User> {
        let response = client.register(request).await?;
        let (token, user) = response.into_parts(&request.username);
        self.set_auth(&user, &token)?;
        tracing::info!(username = %user.username, "Registered");
        Ok(user)
    }

    /// Store a token and profile.
    pub fn set_auth(&self, user: &User, token: &str) -> Result<()> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode user: {}", e)))?;
        self.storage.set(keys::TOKEN, token)?;
        self.storage.set(keys::USER, &user_json)?;
        Ok(())
    }

    /// Drop both token and profile.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(keys::TOKEN)?;
        self.storage.remove(keys::USER)?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Drop the cached profile after the backend rejected the session.
    ///
    /// The token is left in place; `token()` discards it once expired.
    pub fn clear_auth(&self) -> Result<()> {
        self.storage.remove(keys::USER)?;
        Ok(())
    }

    /// Current bearer token, or `None` when absent or known to be expired.
    pub fn token(&self) -> Result<Option<String>> {
        let Some(token) = self.storage.get(keys::TOKEN)? else {
            return Ok(None);
        };

        if is_expired(&token) {
            tracing::info!("Stored token expired, clearing auth state");
            self.logout()?;
            return Ok(None);
        }
        Ok(Some(token))
    }

    /// Token for an authenticated request.
    ///
    /// Fails with `Unauthorized` when logged out (including after the
    /// backend rejected the session) and with `InvalidToken` when the stored
    /// token has expired, in which case auth state is cleared first.
    pub fn require_token(&self) -> Result<String> {
        let Some(token) = self.storage.get(keys::TOKEN)? else {
            return Err(AppError::Unauthorized);
        };
        if is_expired(&token) {
            tracing::info!("Stored token expired, clearing auth state");
            self.logout()?;
            return Err(AppError::InvalidToken);
        }
        if self.user()?.is_none() {
            return Err(AppError::Unauthorized);
        }
        Ok(token)
    }

    /// Cached profile. A corrupt entry reads as logged out.
    pub fn user(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get(keys::USER)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupt cached user");
                Ok(None)
            }
        }
    }

    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.token()?.is_some() && self.user()?.is_some())
    }

    /// Apply the auth-error policy to the outcome of a backend call.
    pub fn check<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            if e.is_auth_error() {
                self.clear_auth()?;
            }
        }
        result
    }
}

/// Whether `token` is a JWT whose `exp` has passed.
///
/// The signature cannot be checked client-side and is ignored; tokens that
/// are not JWTs are left for the backend to judge.
pub fn is_expired(token: &str) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;
    validation.leeway = 0;

    match decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(_) => false,
        Err(e) => matches!(e.kind(), ErrorKind::ExpiredSignature),
    }
}
