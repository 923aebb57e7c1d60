// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and session commands.
//!
//! Each of them starts a new session, so any saved draft is discarded once
//! the command succeeds.

use super::Output;
use crate::error::Result;
use crate::models::{LoginRequest, RegisterRequest};
use crate::AppContext;
use clap::Args;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long, env = "LIVE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, env = "LIVE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn login(ctx: &AppContext, out: &Output, args: LoginArgs) -> Result<()> {
    let credentials = LoginRequest {
        username: args.username,
        password: args.password,
    };
    let user = ctx.auth.login(&ctx.client, &credentials).await?;
    ctx.drafts.clear()?;
    out.emit(&user, || format!("Logged in as {}", user.username))
}

pub async fn register(ctx: &AppContext, out: &Output, args: RegisterArgs) -> Result<()> {
    let request = RegisterRequest {
        username: args.username,
        email: args.email,
        password: args.password,
    };
    let user = ctx.auth.register(&ctx.client, &request).await?;
    ctx.drafts.clear()?;
    out.emit(&user, || format!("Registered and logged in as {}", user.username))
}

pub fn logout(ctx: &AppContext, out: &Output) -> Result<()> {
    ctx.auth.logout()?;
    ctx.drafts.clear()?;
    out.note("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext, out: &Output) -> Result<()> {
    let user = if ctx.auth.token()?.is_some() {
        ctx.auth.user()?
    } else {
        None
    };
    match user {
        Some(user) => out.emit(&user, || match &user.email {
            Some(email) => format!("{} <{}>", user.username, email),
            None => user.username.clone(),
        }),
        None => out.emit(&serde_json::Value::Null, || "Not logged in".to_string()),
    }
}
