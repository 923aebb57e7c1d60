// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schedule draft commands (the "new schedule" form).

use super::{parse_date_arg, require_token, Output};
use crate::error::Result;
use crate::models::{ScheduleDraft, ScheduleVisibility};
use crate::AppContext;
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum DraftCommand {
    /// Show the current draft
    Show,

    /// Set draft fields
    Set(SetArgs),

    /// Append an activity by name
    Add { name: String },

    /// Remove the activity at a position, counting from 1
    Remove { position: usize },

    /// Discard the draft
    Clear,

    /// Create a schedule from the draft
    Submit,
}

#[derive(Args, Debug, Default)]
pub struct SetArgs {
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
}

impl From<SetArgs> for ScheduleDraft {
    fn from(args: SetArgs) -> Self {
        ScheduleDraft {
            title: args.title,
            description: args.description,
            start_date: args.start,
            end_date: args.end,
            location: args.location,
            visibility: args.visibility,
            ..Default::default()
        }
    }
}

pub async fn run(ctx: &AppContext, out: &Output, cmd: DraftCommand) -> Result<()> {
    match cmd {
        DraftCommand::Show => {
            let draft = ctx.drafts.load();
            out.emit(&draft, || render(&draft))
        }
        DraftCommand::Set(args) => {
            let draft = ctx.drafts.stash_form(args.into())?;
            out.emit(&draft, || render(&draft))
        }
        DraftCommand::Add { name } => {
            let draft = ctx.drafts.update(|d| d.add_activity(&name))?;
            out.emit(&draft, || render(&draft))
        }
        DraftCommand::Remove { position } => {
            let mut removed = None;
            let draft = ctx.drafts.update(|d| {
                removed = position.checked_sub(1).and_then(|i| d.remove_activity(i));
            })?;
            if removed.is_none() {
                tracing::warn!(position, "No activity at position");
            }
            out.emit(&draft, || render(&draft))
        }
        DraftCommand::Clear => {
            ctx.drafts.clear()?;
            out.note("Draft discarded");
            Ok(())
        }
        DraftCommand::Submit => submit(ctx, out).await,
    }
}

/// Create a schedule from the stored draft.
///
/// The draft is cleared only after the backend accepts it, so a failed
/// submission can be retried as-is.
pub async fn submit(ctx: &AppContext, out: &Output) -> Result<()> {
    let request = ctx.drafts.to_request()?;
    let token = require_token(ctx)?;

    let schedule = ctx
        .auth
        .check(ctx.client.create_schedule(Some(&token), &request).await)?;

    ctx.drafts.clear()?;
    tracing::info!(id = schedule.id, "Schedule created from draft");
    out.emit(&schedule, || {
        format!("Created schedule #{}: {}", schedule.id, schedule.title)
    })
}

fn render(draft: &ScheduleDraft) -> String {
    if draft.is_empty() {
        return "Draft is empty".to_string();
    }

    let or_dash = |v: Option<&str>| v.unwrap_or("-").to_string();
    let date = |v: Option<DateTime<Utc>>| {
        v.map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut lines = vec![
        format!("Title:       {}", or_dash(draft.title.as_deref())),
        format!("Description: {}", or_dash(draft.description.as_deref())),
        format!("Start:       {}", date(draft.start_date)),
        format!("End:         {}", date(draft.end_date)),
        format!("Location:    {}", or_dash(draft.location.as_deref())),
        format!(
            "Visibility:  {}",
            draft.visibility.unwrap_or_default()
        ),
    ];

    if draft.activities.is_empty() {
        lines.push("Activities:  none".to_string());
    } else {
        lines.push("Activities:".to_string());
        for (i, name) in draft.activities.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, name));
        }
    }

    if let Some(chosen) = &draft.chosen_activity {
        lines.push(format!(
            "Chosen:      {} ({}, {:.1}★)",
            chosen.name, chosen.category, chosen.rating
        ));
    }
    if let Some(suggestion) = &draft.follow_up_suggestion {
        lines.push(format!("Follow-up:   {}", suggestion));
    }
    lines.join("\n")
}
