// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command-line front end.
//!
//! Each subcommand corresponds to one screen of the planner: auth, the
//! schedule list and editor, activity search, and the draft form.

pub mod account;
pub mod draft;
pub mod find;
pub mod schedules;

use crate::error::{AppError, Result};
use crate::time_utils::parse_utc_rfc3339;
use crate::AppContext;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "live-planner")]
#[command(version)]
#[command(about = "Plan schedules of activities and discover new ones")]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and remember the session
    Login(account::LoginArgs),

    /// Create an account and log in
    Register(account::RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Browse and edit schedules
    #[command(subcommand)]
    Schedules(schedules::SchedulesCommand),

    /// Search for activities and optionally pick one for the draft
    Find(find::FindArgs),

    /// Work on the schedule draft
    ///
    /// The draft is kept until it is submitted or a new session starts with
    /// login, register or logout.
    #[command(subcommand)]
    Draft(draft::DraftCommand),
}

/// Run a parsed command against the context.
pub async fn run(ctx: &AppContext, cli: Cli) -> Result<()> {
    let out = Output { json: cli.json };
    match cli.command {
        Command::Login(args) => account::login(ctx, &out, args).await,
        Command::Register(args) => account::register(ctx, &out, args).await,
        Command::Logout => account::logout(ctx, &out),
        Command::Whoami => account::whoami(ctx, &out),
        Command::Schedules(cmd) => schedules::run(ctx, &out, cmd).await,
        Command::Find(args) => find::run(ctx, &out, args).await,
        Command::Draft(cmd) => draft::run(ctx, &out, cmd).await,
    }
}

/// Writes command results to stdout as text or JSON.
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print `value` as JSON in JSON mode, otherwise print `text()`.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let body = serde_json::to_string_pretty(value)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON encode failed: {}", e)))?;
            println!("{}", body);
        } else {
            println!("{}", text());
        }
        Ok(())
    }

    /// Print a status line (suppressed in JSON mode).
    pub fn note(&self, text: &str) {
        if !self.json {
            println!("{}", text);
        }
    }
}

/// Parse a date argument: RFC3339, `YYYY-MM-DDTHH:MM`, or `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_date_arg(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = parse_utc_rfc3339(raw) {
        return Ok(dt);
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{}': use YYYY-MM-DD or RFC3339", raw))
}

/// Current token, or `Unauthorized` when not logged in.
pub(crate) fn require_token(ctx: &AppContext) -> Result<String> {
    ctx.auth.require_token()
}
