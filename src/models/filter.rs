// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter criteria for the activity search and schedule list views.

use crate::models::schedule::ScheduleVisibility;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Activity search filters, changed only by direct user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text term sent to the place provider
    pub search_term: String,
    /// Selected categories; empty means no category restriction
    pub categories: Vec<String>,
    /// Maximum distance in miles; `None` disables the distance check
    pub max_distance: Option<f64>,
    /// Minimum rating, inclusive
    pub min_rating: f64,
    /// Optional date the user plans to go
    pub date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Add `category` if absent, remove it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }
}

/// Schedule list filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    /// Case-insensitive match against title or description
    pub query: String,
    /// Schedules must start at or after this time
    pub start: Option<DateTime<Utc>>,
    /// Schedules must end at or before this time
    pub end: Option<DateTime<Utc>>,
    /// `None` shows all visibilities
    pub visibility: Option<ScheduleVisibility>,
}
