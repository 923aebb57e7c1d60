// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Live planner: browse, create and edit personal schedules of activities.
//!
//! This crate provides the client for the schedules backend, activity
//! discovery through a place-search provider, and the draft handoff between
//! the schedule form and activity search.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

use config::Config;
use error::Result;
use services::{
    ActivitySource, AuthStore, BackendClient, GooglePlacesClient, PlaceProvider,
    SelectionRecommender, SessionDraftStore,
};
use std::sync::Arc;
use std::time::Duration;
use storage::{FileStorage, Storage};

/// Shared application context, passed explicitly to every command.
pub struct AppContext {
    pub config: Config,
    pub client: BackendClient,
    pub auth: AuthStore,
    pub drafts: SessionDraftStore,
    pub activities: ActivitySource,
    pub recommender: SelectionRecommender,
}

impl AppContext {
    /// Build a context from explicit storage and provider.
    pub fn new(
        config: Config,
        local: Arc<dyn Storage>,
        session: Arc<dyn Storage>,
        provider: Option<Arc<dyn PlaceProvider>>,
    ) -> Result<Self> {
        let client = BackendClient::new(
            &config.api_url,
            Duration::from_secs(config.http_timeout_secs),
        )?;
        let auth = AuthStore::new(local);
        let recommender = SelectionRecommender::new(client.clone(), auth.clone());

        Ok(Self {
            drafts: SessionDraftStore::new(session),
            activities: ActivitySource::new(provider),
            config,
            client,
            auth,
            recommender,
        })
    }

    /// Build a context backed by files under `config.state_dir`, with live
    /// place search when an API key is configured.
    pub fn from_config(config: Config) -> Result<Self> {
        let local: Arc<dyn Storage> = Arc::new(FileStorage::new(config.local_storage_path()));
        let session: Arc<dyn Storage> = Arc::new(FileStorage::new(config.session_storage_path()));

        let provider: Option<Arc<dyn PlaceProvider>> = match &config.places_api_key {
            Some(key) => Some(Arc::new(GooglePlacesClient::new(
                &config.places_base_url,
                key.clone(),
                Duration::from_secs(config.http_timeout_secs),
            )?)),
            None => {
                tracing::debug!("No places API key, live search disabled");
                None
            }
        };

        Self::new(config, local, session, provider)
    }
}
