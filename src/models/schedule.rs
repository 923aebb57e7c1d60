// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule models shared with the backend API.

use crate::time_utils::{rfc3339, rfc3339_opt};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Who can see a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleVisibility {
    #[default]
    Private,
    Public,
    FriendsOnly,
}

impl ScheduleVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleVisibility::Private => "PRIVATE",
            ScheduleVisibility::Public => "PUBLIC",
            ScheduleVisibility::FriendsOnly => "FRIENDS_ONLY",
        }
    }
}

impl fmt::Display for ScheduleVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScheduleVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PRIVATE" => Ok(ScheduleVisibility::Private),
            "PUBLIC" => Ok(ScheduleVisibility::Public),
            "FRIENDS_ONLY" => Ok(ScheduleVisibility::FriendsOnly),
            other => Err(format!("unknown visibility '{}'", other)),
        }
    }
}

/// Schedule as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rfc3339")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "rfc3339")]
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub visibility: ScheduleVisibility,
    #[serde(default)]
    pub activities: Vec<ScheduleActivity>,
    #[serde(default, with = "rfc3339_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc3339_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Activity entry stored on a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleActivity {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, with = "rfc3339_opt")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc3339_opt")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Create/update request body for `/schedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CreateScheduleRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(with = "rfc3339")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "rfc3339")]
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub visibility: ScheduleVisibility,
    #[serde(default)]
    #[validate(nested)]
    pub activities: Vec<ActivityDto>,
}

/// Activity entry in a create/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default, with = "rfc3339_opt", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc3339_opt", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

impl ActivityDto {
    /// Activity with just a title, as entered on the schedule form.
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            location: String::new(),
            start_time: None,
            end_time: None,
        }
    }
}

impl From<&Schedule> for CreateScheduleRequest {
    /// Prefill an edit form from an existing schedule.
    fn from(schedule: &Schedule) -> Self {
        Self {
            title: schedule.title.clone(),
            description: schedule.description.clone(),
            location: None,
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            visibility: schedule.visibility,
            activities: schedule
                .activities
                .iter()
                .map(|a| ActivityDto {
                    title: a.title.clone(),
                    description: a.description.clone(),
                    location: a.location.clone().unwrap_or_default(),
                    start_time: a.start_time,
                    end_time: a.end_time,
                })
                .collect(),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Title your Event".into());
        return Err(err);
    }
    Ok(())
}

fn validate_date_range(req: &CreateScheduleRequest) -> Result<(), ValidationError> {
    if req.end_date < req.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("End date must not be before start date".into());
        return Err(err);
    }
    Ok(())
}
