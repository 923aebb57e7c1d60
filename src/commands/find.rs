// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity search command.
//!
//! Search (or the suggested and trending sets), filter, and optionally select
//! an activity, fetch a follow-up recommendation and attach both to the draft.

use super::Output;
use crate::error::{AppError, Result};
use crate::models::{Activity, FilterCriteria};
use crate::services::{activity_source, filter, map};
use crate::AppContext;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// What to search for; omit to show suggested and trending activities
    pub term: Option<String>,

    /// Restrict to a category (repeatable; naming one twice deselects it)
    #[arg(short, long)]
    pub category: Vec<String>,

    /// Minimum rating, inclusive
    #[arg(long, default_value_t = 0.0)]
    pub min_rating: f64,

    /// Maximum distance from the origin in miles
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Provider search radius in miles (defaults to the configured radius)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Planned date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Pick the activity with this ID and attach it to the draft
    #[arg(long)]
    pub select: Option<String>,

    /// Print results as a GeoJSON FeatureCollection
    #[arg(long, conflicts_with = "select")]
    pub geojson: bool,
}

impl FindArgs {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria {
            search_term: self.term.clone().unwrap_or_default(),
            max_distance: self.max_distance,
            min_rating: self.min_rating,
            date: self.date,
            ..Default::default()
        };
        for category in &self.category {
            criteria.toggle_category(category);
        }
        criteria
    }
}

#[derive(Serialize)]
struct FindResult<'a> {
    suggested: &'a [Activity],
    activities: &'a [Activity],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<&'a str>,
}

pub async fn run(ctx: &AppContext, out: &Output, args: FindArgs) -> Result<()> {
    let criteria = args.criteria();
    let radius = args.radius.unwrap_or(ctx.config.default_radius_miles);

    let found = match ctx
        .activities
        .search(&criteria.search_term, ctx.config.origin, radius)
        .await
    {
        Ok(found) => found,
        Err(AppError::StaleSearch) => return Ok(()),
        Err(e) => return Err(e),
    };
    let shown = filter::filter(&found, &criteria);
    // The general list sits above the trending set until a search is made
    let suggested = if criteria.search_term.trim().is_empty() {
        filter::filter(&activity_source::seed_activities(), &criteria)
    } else {
        Vec::new()
    };
    tracing::debug!(
        found = found.len(),
        shown = shown.len(),
        suggested = suggested.len(),
        "Filtered activities"
    );
    let listed = merge_listed(&suggested, &shown);

    if args.geojson {
        let collection = map::to_geojson(&listed);
        let body = serde_json::to_string_pretty(&collection)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("GeoJSON encode failed: {}", e)))?;
        println!("{}", body);
        return Ok(());
    }

    let Some(select_id) = &args.select else {
        return out.emit(
            &FindResult {
                suggested: &suggested,
                activities: &shown,
                selected: None,
                recommendation: None,
            },
            || render_list(&suggested, &shown, &criteria),
        );
    };

    let chosen = listed
        .iter()
        .find(|a| &a.id == select_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Activity {}", select_id)))?;

    let recommendation = ctx.recommender.recommend(&chosen).await;
    ctx.drafts
        .attach_selection(chosen.clone(), Some(recommendation.clone()))?;

    out.emit(
        &FindResult {
            suggested: &suggested,
            activities: &shown,
            selected: Some(&chosen),
            recommendation: Some(&recommendation),
        },
        || {
            format!(
                "Selected {} ({})\nFollow-up activity recommendation: {}\nAdded to your draft.",
                chosen.name, chosen.category, recommendation
            )
        },
    )
}

/// Suggested then shown activities, first occurrence of each ID kept.
fn merge_listed(suggested: &[Activity], shown: &[Activity]) -> Vec<Activity> {
    let mut listed: Vec<Activity> = Vec::with_capacity(suggested.len() + shown.len());
    for a in suggested.iter().chain(shown) {
        if !listed.iter().any(|seen| seen.id == a.id) {
            listed.push(a.clone());
        }
    }
    listed
}

fn render_rows(lines: &mut Vec<String>, activities: &[Activity]) {
    for a in activities {
        lines.push(format!(
            "  [{}] {} - {} - {:.1} mi - {:.1}★",
            a.id, a.name, a.category, a.distance, a.rating
        ));
    }
}

fn render_list(
    suggested: &[Activity],
    activities: &[Activity],
    criteria: &FilterCriteria,
) -> String {
    let mut lines = Vec::new();
    if !suggested.is_empty() {
        lines.push("Suggested activities".to_string());
        render_rows(&mut lines, suggested);
        lines.push(String::new());
    }

    let heading = if criteria.search_term.trim().is_empty() {
        "Trending activities".to_string()
    } else {
        format!("Results for \"{}\"", criteria.search_term.trim())
    };
    let heading = match criteria.date {
        Some(date) => format!("{} for {}", heading, date.format("%a %b %-d")),
        None => heading,
    };

    lines.push(heading);
    if activities.is_empty() {
        lines.push("No activities match your filters".to_string());
    }
    render_rows(&mut lines, activities);

    if let Some(rect) = map::bounds(&merge_listed(suggested, activities)) {
        lines.push(format!(
            "Map bounds: ({:.4}, {:.4}) to ({:.4}, {:.4})",
            rect.min().y,
            rect.min().x,
            rect.max().y,
            rect.max().x
        ));
    }
    lines.join("\n")
}
