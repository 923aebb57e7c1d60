// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Popularity ranking for place search results.
//!
//! `score = rating * ln(reviews + 1)` weighs quality by review volume, so a
//! 5.0 place with one review ranks below a 4.7 place with thousands.

use crate::models::PlaceResult;

/// Weighted popularity score. Missing rating or review count counts as 0.
pub fn score(result: &PlaceResult) -> f64 {
    let rating = result.rating.unwrap_or(0.0);
    let reviews = result.user_ratings_total.unwrap_or(0) as f64;
    rating * (reviews + 1.0).ln()
}

/// Sort results by descending score.
///
/// The sort is stable: equal scores keep provider order.
pub fn rank(mut results: Vec<PlaceResult>) -> Vec<PlaceResult> {
    results.sort_by(|a, b| score(b).total_cmp(&score(a)));
    results
}
