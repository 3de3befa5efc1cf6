//! GeoJSON parsing, validation and point containment for the polygon store.
//!
//! Incoming features are validated into [`NewPolygon`]s; stored records are turned back into
//! GeoJSON features with their row id as the feature id.

use geo::{Coord, Intersects, LineString, Point, Polygon};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value as GeoValue};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::server::{
    data::polygon::{NewPolygon, PolygonRecord},
    error::validation::ValidationError,
};

/// Which polygon table a request addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonKind {
    District,
    Parliament,
}

impl PolygonKind {
    pub fn label(self) -> &'static str {
        match self {
            PolygonKind::District => "District polygon",
            PolygonKind::Parliament => "Parliament polygon",
        }
    }

    /// District rings must be closed with at least four positions and VS_Code must be
    /// positive. Parliament features are stored as submitted.
    fn is_strict(self) -> bool {
        matches!(self, PolygonKind::District)
    }
}

/// Validates a FeatureCollection body into one polygon per feature.
pub fn parse_collection(
    body: Value,
    kind: PolygonKind,
) -> Result<Vec<NewPolygon>, ValidationError> {
    let collection: FeatureCollection = serde_json::from_value(body)
        .map_err(|err| ValidationError::Invalid(format!("Invalid GeoJSON: {}", err)))?;

    if collection.features.is_empty() {
        return Err(ValidationError::Invalid(
            "FeatureCollection must contain at least one feature".to_string(),
        ));
    }

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            to_polygon(feature, kind)
                .map_err(|message| ValidationError::Invalid(format!("Feature {}: {}", i, message)))
        })
        .collect()
}

/// Validates a single Feature body, as sent to replace a stored feature.
pub fn parse_feature(body: Value, kind: PolygonKind) -> Result<NewPolygon, ValidationError> {
    let feature: Feature = serde_json::from_value(body)
        .map_err(|err| ValidationError::Invalid(format!("Invalid GeoJSON: {}", err)))?;

    to_polygon(feature, kind).map_err(ValidationError::Invalid)
}

fn to_polygon(feature: Feature, kind: PolygonKind) -> Result<NewPolygon, String> {
    let properties = feature.properties.unwrap_or_default();
    let geometry = feature.geometry.ok_or("Feature has no geometry")?;

    let GeoValue::Polygon(rings) = &geometry.value else {
        return Err("Geometry must be a Polygon".to_string());
    };
    let bbox = validate_rings(rings, kind)?;

    let vs_code = integer_property(&properties, "VS_Code")?;
    if kind.is_strict() && vs_code < 1 {
        return Err("VS_Code must be at least 1".to_string());
    }

    Ok(NewPolygon {
        name: string_property(&properties, "Name")?,
        district: string_property(&properties, "District")?,
        division: string_property(&properties, "Division")?,
        parliament: string_property(&properties, "Parliament")?,
        vs_code,
        geometry: serde_json::to_value(&geometry).map_err(|err| err.to_string())?,
        bbox,
    })
}

/// Checks every ring and returns the bounding box of all positions.
fn validate_rings(rings: &[Vec<Vec<f64>>], kind: PolygonKind) -> Result<[f64; 4], String> {
    if rings.is_empty() {
        return Err("Polygon must have at least one ring".to_string());
    }

    let mut bbox = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];

    for ring in rings {
        if ring.is_empty() {
            return Err("Polygon rings cannot be empty".to_string());
        }
        if kind.is_strict() {
            if ring.len() < 4 {
                return Err("Polygon rings must have at least 4 positions".to_string());
            }
            if ring.first() != ring.last() {
                return Err("Polygon coordinates must form a closed loop".to_string());
            }
        }

        for position in ring {
            let [lng, lat] = match position.as_slice() {
                [lng, lat, ..] if lng.is_finite() && lat.is_finite() => [*lng, *lat],
                _ => return Err("Positions must have a longitude and latitude".to_string()),
            };

            bbox[0] = bbox[0].min(lng);
            bbox[1] = bbox[1].min(lat);
            bbox[2] = bbox[2].max(lng);
            bbox[3] = bbox[3].max(lat);
        }
    }

    Ok(bbox)
}

fn string_property(properties: &JsonObject, key: &str) -> Result<String, String> {
    match properties.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(format!("Property {} is required", key)),
    }
}

/// Integers may also arrive as numeric strings.
fn integer_property(properties: &JsonObject, key: &str) -> Result<i32, String> {
    let value = match properties.get(key) {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(value)) => value.trim().parse::<i64>().ok(),
        _ => return Err(format!("Property {} is required", key)),
    };

    value
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| format!("Property {} must be an integer", key))
}

/// Planar point-in-polygon test with the boundary counted as inside.
///
/// A stored geometry that is not a Polygon never contains anything.
pub fn contains_point(geometry: &Value, lng: f64, lat: f64) -> bool {
    let Ok(geometry) = serde_json::from_value::<Geometry>(geometry.clone()) else {
        return false;
    };
    let GeoValue::Polygon(rings) = geometry.value else {
        return false;
    };

    let mut rings = rings.iter().map(|ring| {
        LineString::from(
            ring.iter()
                .filter(|position| position.len() >= 2)
                .map(|position| Coord {
                    x: position[0],
                    y: position[1],
                })
                .collect::<Vec<_>>(),
        )
    });
    let Some(exterior) = rings.next() else {
        return false;
    };

    Polygon::new(exterior, rings.collect()).intersects(&Point::new(lng, lat))
}

/// Validates the coordinates of a containment query.
pub fn parse_point(lng: Option<&str>, lat: Option<&str>) -> Result<(f64, f64), ValidationError> {
    Ok((
        parse_coordinate("lng", lng, 180.0)?,
        parse_coordinate("lat", lat, 90.0)?,
    ))
}

fn parse_coordinate(
    field: &'static str,
    value: Option<&str>,
    limit: f64,
) -> Result<f64, ValidationError> {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::Required(field))?;

    let value: f64 = value
        .parse()
        .map_err(|_| ValidationError::field(field, format!("{} must be a number", field)))?;

    if !value.is_finite() || value.abs() > limit {
        return Err(ValidationError::field(
            field,
            format!("{} must be between -{} and {}", field, limit, limit),
        ));
    }

    Ok(value)
}

pub fn parse_vs_code(value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::field("vs_code", "VS code must be an integer"))
}

/// A stored record as a GeoJSON feature whose id is the row id.
pub fn to_feature(record: &PolygonRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("Name".to_string(), json!(record.name));
    properties.insert("District".to_string(), json!(record.district));
    properties.insert("Division".to_string(), json!(record.division));
    properties.insert("Parliament".to_string(), json!(record.parliament));
    properties.insert("VS_Code".to_string(), json!(record.vs_code));

    Feature {
        bbox: Some(record.bbox.to_vec()),
        geometry: serde_json::from_value(record.geometry.clone()).ok(),
        id: Some(Id::Number(record.id.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Reassembles the stored features of one collection.
pub fn to_feature_collection(collection_id: Uuid, records: &[PolygonRecord]) -> FeatureCollection {
    let mut foreign_members = JsonObject::new();
    foreign_members.insert("collection_id".to_string(), json!(collection_id));

    FeatureCollection {
        bbox: None,
        features: records.iter().map(to_feature).collect(),
        foreign_members: Some(foreign_members),
    }
}

#[cfg(test)]
mod tests {
    use constituency_test_utils::prelude::geo_factory;

    use super::*;

    mod parse_collection {
        use super::*;

        /// Expect one polygon per feature with trimmed properties and a bounding box
        #[test]
        fn parses_features() {
            let body = geo_factory::feature_collection(vec![
                geo_factory::square_feature(" Patna ", "Patna", 166, 0.0, 10.0),
                geo_factory::square_feature("Gaya", "Gaya", 167, 20.0, 30.0),
            ]);

            let polygons = parse_collection(body, PolygonKind::District).unwrap();

            assert_eq!(polygons.len(), 2);
            assert_eq!(polygons[0].name, "Patna");
            assert_eq!(polygons[0].vs_code, 166);
            assert_eq!(polygons[1].bbox, [20.0, 20.0, 30.0, 30.0]);
        }

        /// Expect open rings to be rejected for districts and accepted for parliaments
        #[test]
        fn enforces_closed_rings_for_districts() {
            let body = geo_factory::feature_collection(vec![geo_factory::open_ring_feature(
                "Open", "Patna", 1,
            )]);

            let err = parse_collection(body.clone(), PolygonKind::District).unwrap_err();

            assert!(err.to_string().contains("closed loop"));
            assert!(parse_collection(body, PolygonKind::Parliament).is_ok());
        }

        /// Expect district VS codes below 1 to be rejected
        #[test]
        fn rejects_non_positive_district_vs_code() {
            let body = geo_factory::feature_collection(vec![geo_factory::square_feature(
                "Zero", "Patna", 0, 0.0, 1.0,
            )]);

            assert!(parse_collection(body, PolygonKind::District).is_err());
        }

        /// Expect a missing property to be reported
        #[test]
        fn requires_properties() {
            let mut feature = geo_factory::square_feature("A", "Patna", 1, 0.0, 1.0);
            feature["properties"]
                .as_object_mut()
                .unwrap()
                .remove("Division");

            let err = parse_collection(
                geo_factory::feature_collection(vec![feature]),
                PolygonKind::District,
            )
            .unwrap_err();

            assert_eq!(err.to_string(), "Feature 0: Property Division is required");
        }

        /// Expect non-collection JSON to be rejected as invalid GeoJSON
        #[test]
        fn rejects_malformed_geojson() {
            let err = parse_collection(json!({ "type": "Nope" }), PolygonKind::District)
                .unwrap_err();

            assert!(err.to_string().starts_with("Invalid GeoJSON"));
        }
    }

    mod contains_point {
        use super::*;

        fn square_geometry() -> Value {
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]]
            })
        }

        #[test]
        fn contains_inner_point() {
            assert!(contains_point(&square_geometry(), 5.0, 5.0));
        }

        #[test]
        fn excludes_outer_point() {
            assert!(!contains_point(&square_geometry(), 50.0, 50.0));
        }

        /// Expect points on an edge or vertex to count as contained
        #[test]
        fn includes_boundary() {
            assert!(contains_point(&square_geometry(), 10.0, 5.0));
            assert!(contains_point(&square_geometry(), 0.0, 0.0));
        }

        /// Expect points inside a hole to be excluded
        #[test]
        fn excludes_holes() {
            let geometry = json!({
                "type": "Polygon",
                "coordinates": [
                    [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]],
                    [[4.0, 4.0], [4.0, 6.0], [6.0, 6.0], [6.0, 4.0], [4.0, 4.0]]
                ]
            });

            assert!(!contains_point(&geometry, 5.0, 5.0));
            assert!(contains_point(&geometry, 2.0, 2.0));
        }
    }

    mod parse_point {
        use super::*;

        #[test]
        fn parses_coordinates() {
            assert_eq!(parse_point(Some("85.1"), Some("25.6")), Ok((85.1, 25.6)));
        }

        /// Expect non-numeric, missing and out of range coordinates to be rejected
        #[test]
        fn rejects_invalid_coordinates() {
            assert!(parse_point(Some("east"), Some("25.6")).is_err());
            assert!(parse_point(None, Some("25.6")).is_err());
            assert!(parse_point(Some("181"), Some("0")).is_err());
            assert!(parse_point(Some("0"), Some("-90.5")).is_err());
        }
    }

    /// Expect reassembled features to carry the row id and the collection id
    #[test]
    fn reassembles_collection() {
        let collection_id = Uuid::new_v4();
        let polygon = parse_feature(
            geo_factory::square_feature("A", "Patna", 3, 0.0, 1.0),
            PolygonKind::District,
        )
        .unwrap();
        let record = PolygonRecord {
            id: 42,
            collection_id,
            name: polygon.name,
            district: polygon.district,
            division: polygon.division,
            parliament: polygon.parliament,
            vs_code: polygon.vs_code,
            geometry: polygon.geometry,
            bbox: polygon.bbox,
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let collection = to_feature_collection(collection_id, &[record]);
        let value = serde_json::to_value(&collection).unwrap();

        assert_eq!(value["collection_id"], json!(collection_id));
        assert_eq!(value["features"][0]["id"], json!(42));
        assert_eq!(value["features"][0]["properties"]["VS_Code"], json!(3));
    }
}
