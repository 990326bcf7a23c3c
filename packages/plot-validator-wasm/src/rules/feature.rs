use serde_json::Value;

use super::geometry::check_geometry;
use super::RuleContext;
use crate::models::Rule;
use crate::options::AREA_PROPERTY;

/// Validates one feature: its type, its properties, then its geometry.
pub fn check_feature(ctx: &mut RuleContext<'_>, feature: &Value) {
    if feature.get("type").and_then(Value::as_str) != Some("Feature") {
        ctx.fail(Rule::FeatureType, "type must be 'Feature'");
        return;
    }
    ctx.pass(Rule::FeatureType, "type is Feature");

    let properties = match feature.get("properties") {
        Some(Value::Null) => None,
        Some(Value::Object(properties)) => Some(properties),
        Some(_) => {
            ctx.fail(Rule::Properties, "properties must be an object or null");
            return;
        }
        None => {
            ctx.fail(Rule::Properties, "properties member is missing");
            return;
        }
    };
    ctx.pass(Rule::Properties, "properties present");

    if let Some(properties) = properties {
        // Every required name is checked even after a miss
        let options = ctx.options;
        for name in &options.required_properties {
            if properties.contains_key(name.as_str()) {
                ctx.pass(Rule::RequiredProperty, format!("property '{}' present", name));
            } else {
                ctx.fail(
                    Rule::RequiredProperty,
                    format!("required property '{}' is missing", name),
                );
            }
        }

        if let Some(area) = properties.get(AREA_PROPERTY) {
            if area.is_number() {
                ctx.pass(Rule::AreaType, "area is numeric");
            } else {
                ctx.fail(Rule::AreaType, "area must be a number");
            }
        }
    }

    match feature.get("geometry") {
        Some(Value::Null) => ctx.pass(Rule::Geometry, "geometry is null; no shape to check"),
        Some(geometry) => check_geometry(ctx, geometry),
        None => ctx.fail(Rule::Geometry, "geometry member is missing"),
    }
}
