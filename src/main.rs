// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Live Planner CLI
//!
//! Browse and edit schedules on the planner backend, and discover
//! activities to add to them.

use clap::Parser;
use live_planner::{commands, commands::Cli, config::Config, AppContext};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter used when RUST_LOG is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "live_planner=info,warn";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.json_logs) {
        eprintln!("error: failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    tracing::debug!(api_url = %config.api_url, state_dir = %config.state_dir.display(), "Starting");

    let ctx = match AppContext::from_config(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {}", e.notice());
            return ExitCode::FAILURE;
        }
    };

    match commands::run(&ctx, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("error: {}", e.notice());
            ExitCode::FAILURE
        }
    }
}

/// Build the log filter, preferring an explicit RUST_LOG value.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging to stderr, JSON or compact text.
fn init_logging(json: bool) -> anyhow::Result<()> {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .try_init()?;
    } else {
        let format = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .try_init()?;
    }
    Ok(())
}
