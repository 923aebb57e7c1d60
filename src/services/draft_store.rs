// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session-scoped persistence of the schedule draft.
//!
//! The draft survives one round trip from the schedule form to activity
//! search and back. It is stored as JSON under `scheduleFormData`.

use crate::error::{AppError, Result};
use crate::models::{Activity, CreateScheduleRequest, ScheduleDraft};
use crate::storage::{keys, Storage};
use std::sync::Arc;

/// Typed draft handoff over session storage.
#[derive(Clone)]
pub struct SessionDraftStore {
    storage: Arc<dyn Storage>,
}

impl SessionDraftStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Persist the draft, replacing any previous one.
    pub fn save(&self, draft: &ScheduleDraft) -> Result<()> {
        let json = serde_json::to_string(draft)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode draft: {}", e)))?;
        self.storage.set(keys::SCHEDULE_FORM_DATA, &json)?;
        tracing::debug!(activities = draft.activities.len(), "Draft saved");
        Ok(())
    }

    /// Load the draft. Missing, unreadable or corrupt data yields an empty draft.
    pub fn load(&self) -> ScheduleDraft {
        let raw = match self.storage.get(keys::SCHEDULE_FORM_DATA) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ScheduleDraft::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Draft storage unreadable, starting empty");
                return ScheduleDraft::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt draft");
                ScheduleDraft::default()
            }
        }
    }

    /// Discard the draft.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(keys::SCHEDULE_FORM_DATA)?;
        Ok(())
    }

    /// Persist the in-progress form before leaving for activity search.
    ///
    /// Fields already stored (such as an earlier selection) are kept unless
    /// `form` overrides them.
    pub fn stash_form(&self, form: ScheduleDraft) -> Result<ScheduleDraft> {
        let mut draft = self.load();
        draft.merge(form);
        self.save(&draft)?;
        Ok(draft)
    }

    /// Record the activity picked on the search screen.
    pub fn attach_selection(
        &self,
        activity: Activity,
        recommendation: Option<String>,
    ) -> Result<ScheduleDraft> {
        let mut draft = self.load();
        tracing::info!(activity = %activity.name, "Attaching selection to draft");
        draft.attach_selection(activity, recommendation);
        self.save(&draft)?;
        Ok(draft)
    }

    /// Apply `edit` to the stored draft and save the result.
    pub fn update<F>(&self, edit: F) -> Result<ScheduleDraft>
    where
        F: FnOnce(&mut ScheduleDraft),
    {
        let mut draft = self.load();
        edit(&mut draft);
        self.save(&draft)?;
        Ok(draft)
    }

    /// Build the create request from the stored draft.
    pub fn to_request(&self) -> Result<CreateScheduleRequest> {
        self.load().to_request()
    }
}
