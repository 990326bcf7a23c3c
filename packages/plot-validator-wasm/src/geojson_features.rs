use serde_json::Value;
use std::fmt;

use crate::options::{FARMER_NAME_PROPERTY, PLOT_ID_PROPERTY};

const UNKNOWN_FARMER: &str = "Unknown farmer";

// The seven GeoJSON geometry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point" => Some(GeometryKind::Point),
            "MultiPoint" => Some(GeometryKind::MultiPoint),
            "LineString" => Some(GeometryKind::LineString),
            "MultiLineString" => Some(GeometryKind::MultiLineString),
            "Polygon" => Some(GeometryKind::Polygon),
            "MultiPolygon" => Some(GeometryKind::MultiPolygon),
            "GeometryCollection" => Some(GeometryKind::GeometryCollection),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// Plot boundaries are single polygons without holes; every other kind
    /// is rejected even though it is legal GeoJSON.
    pub fn is_accepted_plot_shape(&self) -> bool {
        match self {
            GeometryKind::Polygon => true,
            GeometryKind::Point
            | GeometryKind::MultiPoint
            | GeometryKind::LineString
            | GeometryKind::MultiLineString
            | GeometryKind::MultiPolygon
            | GeometryKind::GeometryCollection => false,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the `features` array when the root is a FeatureCollection with at
/// least one feature.
pub fn collection_features(document: &Value) -> Option<&Vec<Value>> {
    let root = document.as_object()?;
    if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return None;
    }
    root.get("features")
        .and_then(Value::as_array)
        .filter(|features| !features.is_empty())
}

fn feature_property<'a>(feature: &'a Value, name: &str) -> Option<&'a Value> {
    feature
        .get("properties")
        .and_then(Value::as_object)
        .and_then(|properties| properties.get(name))
}

// Display name for a plot, falling back to its 1-based position in the file
pub fn plot_id(feature: &Value, index: usize) -> String {
    match feature_property(feature, PLOT_ID_PROPERTY) {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("Plot {}", index + 1),
    }
}

pub fn farmer_name(feature: &Value) -> String {
    match feature_property(feature, FARMER_NAME_PROPERTY) {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => UNKNOWN_FARMER.to_string(),
    }
}
