// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and authentication payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cached user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend user ID (numeric or string, kept as sent)
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Minimal profile for backends that only return a username.
    pub fn from_username(username: &str) -> Self {
        Self {
            id: None,
            username: username.to_string(),
            email: None,
            name: None,
            profile_picture: None,
            bio: None,
        }
    }
}

/// Login/register response.
///
/// Accepts both `{token, user}` and `{token, username}` shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthResponse {
    /// Resolve the profile to cache, falling back to the login username.
    pub fn into_parts(self, fallback_username: &str) -> (String, User) {
        let user = match (self.user, self.username) {
            (Some(user), _) => user,
            (None, Some(username)) => User::from_username(&username),
            (None, None) => User::from_username(fallback_username),
        };
        (self.token, user)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
