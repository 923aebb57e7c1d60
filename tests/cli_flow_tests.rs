// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end command flows against the mock backend.

use clap::Parser;
use live_planner::commands::{self, Cli};
use live_planner::error::AppError;
use live_planner::models::ScheduleVisibility;
use live_planner::AppContext;

mod common;
use common::{place_json, test_context, MockBackend};

async fn run(ctx: &AppContext, args: &[&str]) -> Result<(), AppError> {
    let cli = Cli::try_parse_from(std::iter::once("live-planner").chain(args.iter().copied()))
        .expect("arguments should parse");
    commands::run(ctx, cli).await
}

#[tokio::test]
async fn test_draft_search_select_submit() {
    let backend = MockBackend::start().await;
    backend.state().places = serde_json::json!({
        "status": "OK",
        "results": [
            place_json("p1", "Rooftop Lounge", 4.6, 900, "bar", 40.7190, -74.0010),
            place_json("p2", "Dive Bar", 3.9, 40, "bar", 40.7150, -74.0020),
        ]
    });
    let (ctx, _, session) = test_context(&backend);

    run(&ctx, &["login", "-u", "ana", "-p", "secret"]).await.unwrap();
    run(
        &ctx,
        &[
            "draft",
            "set",
            "--title",
            "Friday night",
            "--start",
            "2026-05-01T18:00",
            "--end",
            "2026-05-01T23:30",
            "--visibility",
            "friends_only",
        ],
    )
    .await
    .unwrap();
    run(&ctx, &["draft", "add", "Dinner"]).await.unwrap();

    run(
        &ctx,
        &["find", "rooftop", "--min-rating", "4.5", "--select", "p1"],
    )
    .await
    .unwrap();

    let draft = ctx.drafts.load();
    assert_eq!(draft.title.as_deref(), Some("Friday night"));
    assert_eq!(
        draft.chosen_activity.as_ref().map(|a| a.name.as_str()),
        Some("Rooftop Lounge")
    );
    assert_eq!(
        draft.follow_up_suggestion.as_deref(),
        Some("Try a late-night diner nearby")
    );
    assert_eq!(backend.state().recommendation_requests, vec!["Rooftop Lounge"]);

    run(&ctx, &["draft", "submit"]).await.unwrap();

    {
        let state = backend.state();
        assert_eq!(state.schedules.len(), 1);
        let schedule = &state.schedules[0];
        assert_eq!(schedule.title, "Friday night");
        assert_eq!(schedule.visibility, ScheduleVisibility::FriendsOnly);
        let titles: Vec<&str> = schedule.activities.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Dinner", "Rooftop Lounge"]);
    }
    assert!(session.is_empty());
}

#[tokio::test]
async fn test_select_filtered_out_activity_is_not_found() {
    let backend = MockBackend::start().await;
    backend.state().places = serde_json::json!({
        "status": "OK",
        "results": [place_json("p2", "Dive Bar", 3.9, 40, "bar", 40.7150, -74.0020)]
    });
    let (ctx, _, session) = test_context(&backend);

    let err = run(&ctx, &["find", "bars", "--min-rating", "4", "--select", "p2"])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(session.is_empty());
}

#[tokio::test]
async fn test_failed_submit_keeps_draft() {
    let backend = MockBackend::start().await;
    let (ctx, _, _) = test_context(&backend);

    run(&ctx, &["draft", "set", "--title", "Museum day"]).await.unwrap();

    // Missing dates fail validation before any request
    let err = run(&ctx, &["draft", "submit"]).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(ctx.drafts.load().title.as_deref(), Some("Museum day"));

    // Complete but logged out
    run(
        &ctx,
        &["draft", "set", "--start", "2026-05-02", "--end", "2026-05-02T16:00"],
    )
    .await
    .unwrap();
    let err = run(&ctx, &["schedules", "create"]).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(ctx.drafts.load().title.as_deref(), Some("Museum day"));
    assert!(backend.state().schedules.is_empty());
}

#[tokio::test]
async fn test_edit_and_delete_schedule() {
    let backend = MockBackend::start().await;
    let seeded = backend.insert_schedule("Museum day", ScheduleVisibility::Private);
    let (ctx, _, _) = test_context(&backend);
    run(&ctx, &["login", "-u", "ana", "-p", "secret"]).await.unwrap();

    let id = seeded.id.to_string();
    run(
        &ctx,
        &[
            "schedules",
            "edit",
            &id,
            "--title",
            "Museum and dinner",
            "--visibility",
            "public",
            "--add-activity",
            "Natural History Museum",
        ],
    )
    .await
    .unwrap();
    {
        let state = backend.state();
        let schedule = &state.schedules[0];
        assert_eq!(schedule.title, "Museum and dinner");
        assert_eq!(schedule.visibility, ScheduleVisibility::Public);
        assert_eq!(schedule.activities.len(), 1);
    }

    run(&ctx, &["schedules", "list", "--query", "dinner"]).await.unwrap();
    run(&ctx, &["schedules", "delete", &id]).await.unwrap();
    assert!(backend.state().schedules.is_empty());
}

#[tokio::test]
async fn test_logout_clears_auth_and_draft() {
    let backend = MockBackend::start().await;
    let (ctx, local, session) = test_context(&backend);

    run(&ctx, &["login", "-u", "ana", "-p", "secret"]).await.unwrap();
    run(&ctx, &["draft", "add", "Dinner"]).await.unwrap();
    run(&ctx, &["logout"]).await.unwrap();

    assert!(local.is_empty());
    assert!(session.is_empty());
    let err = run(&ctx, &["schedules", "list"]).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_login_discards_previous_session_draft() {
    let backend = MockBackend::start().await;
    let (ctx, _, session) = test_context(&backend);

    run(&ctx, &["draft", "set", "--title", "Old plan"]).await.unwrap();
    run(&ctx, &["draft", "add", "Dinner"]).await.unwrap();
    assert!(!session.is_empty());

    // A rejected login is not a new session
    let err = run(&ctx, &["login", "-u", "ana", "-p", common::WRONG_PASSWORD])
        .await
        .unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(ctx.drafts.load().title.as_deref(), Some("Old plan"));

    run(&ctx, &["login", "-u", "ana", "-p", "secret"]).await.unwrap();
    assert!(session.is_empty());
    assert!(ctx.drafts.load().title.is_none());
}

#[tokio::test]
async fn test_select_from_suggested_without_search_term() {
    let backend = MockBackend::start().await;
    let (ctx, _, _) = test_context(&backend);
    run(&ctx, &["login", "-u", "ana", "-p", "secret"]).await.unwrap();

    // "The Tipsy Crow" is only in the suggested list, not in trending
    run(&ctx, &["find", "--select", "5"]).await.unwrap();

    let draft = ctx.drafts.load();
    assert_eq!(
        draft.chosen_activity.as_ref().map(|a| a.name.as_str()),
        Some("The Tipsy Crow")
    );
    assert!(backend.state().place_queries.is_empty());
    assert_eq!(backend.state().recommendation_requests, vec!["The Tipsy Crow"]);
}
