// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-progress schedule form, handed between the schedule form and
//! activity search.

use crate::error::{AppError, Result};
use crate::models::activity::Activity;
use crate::models::schedule::{ActivityDto, CreateScheduleRequest, ScheduleVisibility};
use crate::time_utils::rfc3339_opt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Partially filled schedule. Every field is optional until submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "rfc3339_opt", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc3339_opt", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string | null"))]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ScheduleVisibility>,
    /// Activity names in the order the user entered them
    #[serde(default)]
    pub activities: Vec<String>,
    /// Activity picked on the search screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_activity: Option<Activity>,
    /// Follow-up recommendation for `chosen_activity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_suggestion: Option<String>,
}

impl ScheduleDraft {
    /// True when nothing has been filled in.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Append an activity name.
    pub fn add_activity(&mut self, name: &str) {
        self.activities.push(name.to_string());
    }

    /// Remove the activity at `index`, shifting later ones left.
    ///
    /// Returns `None` (and leaves the list untouched) when out of range.
    pub fn remove_activity(&mut self, index: usize) -> Option<String> {
        if index < self.activities.len() {
            Some(self.activities.remove(index))
        } else {
            None
        }
    }

    /// Record the activity chosen on the search screen and its recommendation.
    pub fn attach_selection(&mut self, activity: Activity, recommendation: Option<String>) {
        self.chosen_activity = Some(activity);
        self.follow_up_suggestion = recommendation;
    }

    /// Overlay the fields set in `other` onto this draft.
    ///
    /// Activities from `other` replace ours only when it has any.
    pub fn merge(&mut self, other: ScheduleDraft) {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.start_date.is_some() {
            self.start_date = other.start_date;
        }
        if other.end_date.is_some() {
            self.end_date = other.end_date;
        }
        if other.location.is_some() {
            self.location = other.location;
        }
        if other.visibility.is_some() {
            self.visibility = other.visibility;
        }
        if !other.activities.is_empty() {
            self.activities = other.activities;
        }
        if other.chosen_activity.is_some() {
            self.chosen_activity = other.chosen_activity;
        }
        if other.follow_up_suggestion.is_some() {
            self.follow_up_suggestion = other.follow_up_suggestion;
        }
    }

    /// Build the create request for submission.
    ///
    /// The chosen activity is appended to the activity list unless a
    /// same-named entry is already present.
    pub fn to_request(&self) -> Result<CreateScheduleRequest> {
        let title = self
            .title
            .clone()
            .ok_or_else(|| AppError::Validation("title: Title your Event".to_string()))?;
        let start_date = self
            .start_date
            .ok_or_else(|| AppError::Validation("startDate: Start date is required".to_string()))?;
        let end_date = self
            .end_date
            .ok_or_else(|| AppError::Validation("endDate: End date is required".to_string()))?;

        let mut activities: Vec<ActivityDto> = self
            .activities
            .iter()
            .map(|name| ActivityDto::titled(name))
            .collect();

        if let Some(chosen) = &self.chosen_activity {
            if !self.activities.iter().any(|name| name == &chosen.name) {
                activities.push(ActivityDto::titled(&chosen.name));
            }
        }

        let request = CreateScheduleRequest {
            title,
            description: self.description.clone(),
            location: self.location.clone(),
            start_date,
            end_date,
            visibility: self.visibility.unwrap_or_default(),
            activities,
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn activity(name: &str) -> Activity {
        Activity {
            id: "5".to_string(),
            name: name.to_string(),
            category: "Bar".to_string(),
            distance: 0.3,
            rating: 4.5,
            lat: 40.7234,
            lng: -73.9870,
        }
    }

    #[test]
    fn test_remove_activity_shifts_left() {
        let mut draft = ScheduleDraft {
            activities: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        };
        assert_eq!(draft.remove_activity(1).as_deref(), Some("b"));
        assert_eq!(draft.activities, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_activity_out_of_range_is_noop() {
        let mut draft = ScheduleDraft {
            activities: vec!["a".into()],
            ..Default::default()
        };
        assert_eq!(draft.remove_activity(3), None);
        assert_eq!(draft.activities, vec!["a"]);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut draft = ScheduleDraft {
            title: Some("Night out".into()),
            activities: vec!["a".into()],
            ..Default::default()
        };
        draft.merge(ScheduleDraft {
            follow_up_suggestion: Some("Try the diner".into()),
            ..Default::default()
        });
        assert_eq!(draft.title.as_deref(), Some("Night out"));
        assert_eq!(draft.activities, vec!["a"]);
        assert_eq!(draft.follow_up_suggestion.as_deref(), Some("Try the diner"));
    }

    #[test]
    fn test_to_request_requires_title_and_dates() {
        let draft = ScheduleDraft::default();
        assert!(matches!(draft.to_request(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_to_request_appends_chosen_activity_once() {
        let mut draft = ScheduleDraft {
            title: Some("Night out".into()),
            start_date: Some(Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2026, 5, 1, 23, 0, 0).unwrap()),
            activities: vec!["Dinner".into()],
            ..Default::default()
        };
        draft.attach_selection(activity("The Tipsy Crow"), None);

        let request = draft.to_request().unwrap();
        let titles: Vec<&str> = request.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Dinner", "The Tipsy Crow"]);
        assert_eq!(request.visibility, ScheduleVisibility::Private);

        draft.add_activity("The Tipsy Crow");
        assert_eq!(draft.to_request().unwrap().activities.len(), 2);
    }

    #[test]
    fn test_empty_draft_serializes_to_minimal_object() {
        let json = serde_json::to_string(&ScheduleDraft::default()).unwrap();
        assert_eq!(json, r#"{"activities":[]}"#);
        assert!(ScheduleDraft::default().is_empty());
    }
}
