// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod draft;
pub mod filter;
pub mod schedule;
pub mod user;

pub use activity::{Activity, Coordinate, PlaceResult};
pub use draft::ScheduleDraft;
pub use filter::{FilterCriteria, ScheduleFilter};
pub use schedule::{ActivityDto, CreateScheduleRequest, Schedule, ScheduleVisibility};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
