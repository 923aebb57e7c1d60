use criterion::{criterion_group, criterion_main, Criterion};
use live_planner::config::DEFAULT_ORIGIN;
use live_planner::models::{Coordinate, FilterCriteria, PlaceResult};
use live_planner::models::activity::PlaceGeometry;
use live_planner::services::activity_source::to_activities;
use live_planner::services::filter::filter;
use live_planner::services::ranking::rank;
use std::hint::black_box;

/// Provider-sized batch of results scattered around the origin.
fn fixture(count: usize) -> Vec<PlaceResult> {
    let kinds = ["bar", "night_club", "museum", "stadium", "park"];
    (0..count)
        .map(|i| PlaceResult {
            place_id: Some(format!("place-{}", i)),
            name: Some(format!("Place {}", i)),
            rating: Some(3.0 + (i % 21) as f64 / 10.0),
            user_ratings_total: Some((i * 7919 % 5000) as u64),
            types: vec![kinds[i % kinds.len()].to_string()],
            geometry: Some(PlaceGeometry {
                location: Coordinate::new(
                    DEFAULT_ORIGIN.lat + (i % 50) as f64 * 0.002,
                    DEFAULT_ORIGIN.lng + (i % 37) as f64 * 0.002,
                ),
            }),
        })
        .collect()
}

fn benchmark_search_pipeline(c: &mut Criterion) {
    // Text Search returns at most 60 results over three pages
    let page = fixture(60);
    let large = fixture(5000);

    let criteria = FilterCriteria {
        categories: vec!["bar".to_string(), "museum".to_string()],
        min_rating: 4.0,
        max_distance: Some(3.0),
        ..Default::default()
    };

    let mut group = c.benchmark_group("search_pipeline");

    group.bench_function("rank_60", |b| b.iter(|| rank(black_box(page.clone()))));

    group.bench_function("rank_convert_filter_60", |b| {
        b.iter(|| {
            let activities = to_activities(rank(black_box(page.clone())), DEFAULT_ORIGIN);
            filter(&activities, black_box(&criteria))
        })
    });

    group.bench_function("rank_convert_filter_5000", |b| {
        b.iter(|| {
            let activities = to_activities(rank(black_box(large.clone())), DEFAULT_ORIGIN);
            filter(&activities, black_box(&criteria))
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_search_pipeline);
criterion_main!(benches);
