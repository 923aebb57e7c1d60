// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Map presentation helpers for search results.

use crate::models::Activity;
use geo::{BoundingRect, MultiPoint, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

/// Smallest rectangle covering every activity, or `None` for no activities.
pub fn bounds(activities: &[Activity]) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = activities
        .iter()
        .map(|a| a.coordinate().to_point())
        .collect::<Vec<_>>()
        .into();
    points.bounding_rect()
}

/// Point markers for each activity, with name, category and rating properties.
pub fn to_geojson(activities: &[Activity]) -> FeatureCollection {
    let features = activities
        .iter()
        .map(|a| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), a.name.clone().into());
            properties.insert("category".to_string(), a.category.clone().into());
            properties.insert("rating".to_string(), a.rating.into());
            properties.insert("distance".to_string(), a.distance.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![a.lng, a.lat]))),
                id: Some(geojson::feature::Id::String(a.id.clone())),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: bounds(activities).map(|r| vec![r.min().x, r.min().y, r.max().x, r.max().y]),
        features,
        foreign_members: None,
    }
}
