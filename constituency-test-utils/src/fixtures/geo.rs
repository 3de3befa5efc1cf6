//! Factory functions for GeoJSON request payloads.
//!
//! Pure functions returning `serde_json::Value`s shaped like the bodies clients submit to
//! the polygon endpoints.

use serde_json::{json, Value};

/// Closed, axis-aligned square ring from `(min, min)` to `(max, max)`.
pub fn square_ring(min: f64, max: f64) -> Vec<[f64; 2]> {
    vec![[min, min], [min, max], [max, max], [max, min], [min, min]]
}

/// Polygon feature with the properties the polygon store requires.
pub fn polygon_feature(name: &str, district: &str, vs_code: i64, ring: Vec<[f64; 2]>) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "Name": name,
            "District": district,
            "Division": "Test Division",
            "Parliament": "Test Parliament",
            "VS_Code": vs_code
        },
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring]
        }
    })
}

/// Square polygon feature spanning `(min, min)` to `(max, max)`.
pub fn square_feature(name: &str, district: &str, vs_code: i64, min: f64, max: f64) -> Value {
    polygon_feature(name, district, vs_code, square_ring(min, max))
}

/// Square feature whose ring is not closed.
pub fn open_ring_feature(name: &str, district: &str, vs_code: i64) -> Value {
    let mut ring = square_ring(0.0, 10.0);
    ring.pop();
    polygon_feature(name, district, vs_code, ring)
}

/// FeatureCollection wrapping the given features.
pub fn feature_collection(features: Vec<Value>) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features
    })
}
