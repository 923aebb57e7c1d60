// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule list, detail, edit and delete commands.

use super::{parse_date_arg, require_token, Output};
use crate::error::Result;
use crate::models::{
    ActivityDto, CreateScheduleRequest, Schedule, ScheduleFilter, ScheduleVisibility,
};
use crate::services::filter::filter_schedules;
use crate::AppContext;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum SchedulesCommand {
    /// List your schedules
    List(ListArgs),

    /// Show one schedule
    Show { id: i64 },

    /// Submit the current draft as a new schedule
    Create,

    /// Edit an existing schedule
    Edit(EditArgs),

    /// Delete a schedule
    Delete { id: i64 },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Match title or description (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Only schedules starting at or after this date
    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<DateTime<Utc>>,

    /// Only schedules ending at or before this date
    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<DateTime<Utc>>,

    /// PRIVATE, PUBLIC or FRIENDS_ONLY
    #[arg(long)]
    pub visibility: Option<ScheduleVisibility>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: i64,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long, value_parser = parse_date_arg)]
    pub start: Option<DateTime<Utc>>,

    #[arg(long, value_parser = parse_date_arg)]
    pub end: Option<DateTime<Utc>>,

    #[arg(long)]
    pub visibility: Option<ScheduleVisibility>,

    /// Append an activity by name (repeatable)
    #[arg(long = "add-activity")]
    pub add_activity: Vec<String>,

    /// Remove the activity at this position, counting from 1 (repeatable)
    #[arg(long = "remove-activity")]
    pub remove_activity: Vec<usize>,
}

pub async fn run(ctx: &AppContext, out: &Output, cmd: SchedulesCommand) -> Result<()> {
    match cmd {
        SchedulesCommand::List(args) => list(ctx, out, args).await,
        SchedulesCommand::Show { id } => show(ctx, out, id).await,
        SchedulesCommand::Create => super::draft::submit(ctx, out).await,
        SchedulesCommand::Edit(args) => edit(ctx, out, args).await,
        SchedulesCommand::Delete { id } => delete(ctx, out, id).await,
    }
}

async fn list(ctx: &AppContext, out: &Output, args: ListArgs) -> Result<()> {
    let token = require_token(ctx)?;
    let schedules = ctx
        .auth
        .check(ctx.client.list_schedules(Some(&token)).await)?;

    let filter = ScheduleFilter {
        query: args.query,
        start: args.start,
        end: args.end,
        visibility: args.visibility,
    };
    let shown = filter_schedules(&schedules, &filter);
    tracing::debug!(total = schedules.len(), shown = shown.len(), "Listed schedules");

    out.emit(&shown, || {
        if shown.is_empty() {
            return "No schedules found".to_string();
        }
        shown.iter().map(summary_line).collect::<Vec<_>>().join("\n")
    })
}

async fn show(ctx: &AppContext, out: &Output, id: i64) -> Result<()> {
    let token = require_token(ctx)?;
    let schedule = ctx
        .auth
        .check(ctx.client.get_schedule(Some(&token), id).await)?;
    out.emit(&schedule, || detail(&schedule))
}

async fn edit(ctx: &AppContext, out: &Output, args: EditArgs) -> Result<()> {
    let token = require_token(ctx)?;
    let schedule = ctx
        .auth
        .check(ctx.client.get_schedule(Some(&token), args.id).await)?;

    let mut request = CreateScheduleRequest::from(&schedule);
    apply_edits(&mut request, &args);

    let updated = ctx
        .auth
        .check(ctx.client.update_schedule(Some(&token), args.id, &request).await)?;
    tracing::info!(id = updated.id, "Schedule updated");
    out.emit(&updated, || format!("Updated schedule {}\n{}", updated.id, detail(&updated)))
}

async fn delete(ctx: &AppContext, out: &Output, id: i64) -> Result<()> {
    let token = require_token(ctx)?;
    ctx.auth
        .check(ctx.client.delete_schedule(Some(&token), id).await)?;
    tracing::info!(id, "Schedule deleted");
    out.note(&format!("Deleted schedule {}", id));
    Ok(())
}

/// Apply edit flags to a prefilled request.
///
/// Removals are applied highest position first so earlier positions refer
/// to the list as shown before the edit.
fn apply_edits(request: &mut CreateScheduleRequest, args: &EditArgs) {
    if let Some(title) = &args.title {
        request.title = title.clone();
    }
    if let Some(description) = &args.description {
        request.description = Some(description.clone());
    }
    if let Some(location) = &args.location {
        request.location = Some(location.clone());
    }
    if let Some(start) = args.start {
        request.start_date = start;
    }
    if let Some(end) = args.end {
        request.end_date = end;
    }
    if let Some(visibility) = args.visibility {
        request.visibility = visibility;
    }

    let mut positions: Vec<usize> = args.remove_activity.clone();
    positions.sort_unstable();
    positions.dedup();
    for position in positions.into_iter().rev() {
        if position >= 1 && position <= request.activities.len() {
            request.activities.remove(position - 1);
        }
    }

    request
        .activities
        .extend(args.add_activity.iter().map(|name| ActivityDto::titled(name)));
}

fn summary_line(schedule: &Schedule) -> String {
    format!(
        "#{:<5} {:<30} {} - {}  [{}]",
        schedule.id,
        schedule.title,
        schedule.start_date.format("%Y-%m-%d"),
        schedule.end_date.format("%Y-%m-%d"),
        schedule.visibility.as_str().to_lowercase()
    )
}

fn detail(schedule: &Schedule) -> String {
    let mut lines = vec![
        format!("{} (#{})", schedule.title, schedule.id),
        format!(
            "When: {} - {}",
            schedule.start_date.format("%Y-%m-%d %H:%M"),
            schedule.end_date.format("%Y-%m-%d %H:%M")
        ),
        format!("Visibility: {}", schedule.visibility),
    ];
    if let Some(description) = schedule.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Description: {}", description));
    }
    if schedule.activities.is_empty() {
        lines.push("No activities".to_string());
    } else {
        lines.push("Activities:".to_string());
        for (i, activity) in schedule.activities.iter().enumerate() {
            match activity.location.as_deref().filter(|l| !l.is_empty()) {
                Some(location) => lines.push(format!("  {}. {} @ {}", i + 1, activity.title, location)),
                None => lines.push(format!("  {}. {}", i + 1, activity.title)),
            }
        }
    }
    lines.join("\n")
}
