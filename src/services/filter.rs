// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity and schedule filtering.
//!
//! Both filters are pure selects: output keeps input order.

use crate::models::{Activity, FilterCriteria, Schedule, ScheduleFilter};

/// Keep the activities that satisfy every criterion.
pub fn filter(activities: &[Activity], criteria: &FilterCriteria) -> Vec<Activity> {
    activities
        .iter()
        .filter(|a| matches(a, criteria))
        .cloned()
        .collect()
}

/// Whether a single activity passes the criteria.
pub fn matches(activity: &Activity, criteria: &FilterCriteria) -> bool {
    if !criteria.categories.is_empty() && !criteria.categories.contains(&activity.category) {
        return false;
    }
    if activity.rating < criteria.min_rating {
        return false;
    }
    if let Some(max) = criteria.max_distance {
        if activity.distance > max {
            return false;
        }
    }
    true
}

/// Keep the schedules that match the schedule-list filter.
pub fn filter_schedules(schedules: &[Schedule], filter: &ScheduleFilter) -> Vec<Schedule> {
    let query = filter.query.to_lowercase();
    schedules
        .iter()
        .filter(|s| {
            let matches_search = s.title.to_lowercase().contains(&query)
                || s
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&query));

            let matches_dates = filter.start.is_none_or(|start| s.start_date >= start)
                && filter.end.is_none_or(|end| s.end_date <= end);

            let matches_visibility = filter.visibility.is_none_or(|v| s.visibility == v);

            matches_search && matches_dates && matches_visibility
        })
        .cloned()
        .collect()
}
