use serde_json::Value;

use super::polygon::check_polygon;
use super::RuleContext;
use crate::geojson_features::GeometryKind;
use crate::models::Rule;

pub fn check_geometry(ctx: &mut RuleContext<'_>, geometry: &Value) {
    let type_name = geometry.get("type").and_then(Value::as_str);
    let Some(kind) = type_name.and_then(GeometryKind::from_name) else {
        let shown = match type_name {
            Some(name) => format!("'{}'", name),
            None => "missing".to_string(),
        };
        ctx.fail(
            Rule::GeometryType,
            format!("geometry type {} is not a GeoJSON geometry type", shown),
        );
        return;
    };

    if !kind.is_accepted_plot_shape() {
        ctx.fail(
            Rule::PolygonOnly,
            format!(
                "geometry type '{}' is not accepted; plot boundaries must be a single Polygon",
                kind
            ),
        );
        return;
    }
    ctx.pass(Rule::GeometryType, format!("geometry is a {}", kind));

    match geometry.get("coordinates").and_then(Value::as_array) {
        Some(rings) => check_polygon(ctx, rings),
        None => ctx.fail(
            Rule::CoordinatesArray,
            "geometry coordinates must be an array",
        ),
    }
}
