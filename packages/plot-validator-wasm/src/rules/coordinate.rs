use geo_types::Coord;
use serde_json::Value;

use super::RuleContext;
use crate::models::Rule;
use crate::predicates::decimal_places;

const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

#[derive(Clone, Copy)]
enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    fn rule(self) -> Rule {
        match self {
            Axis::Longitude => Rule::Longitude,
            Axis::Latitude => Rule::Latitude,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Axis::Longitude => "longitude",
            Axis::Latitude => "latitude",
        }
    }

    fn range(self) -> (f64, f64) {
        match self {
            Axis::Longitude => LONGITUDE_RANGE,
            Axis::Latitude => LATITUDE_RANGE,
        }
    }
}

/// Reads a well-formed position as a planar coordinate (altitude dropped).
pub fn as_coord(position: &Value) -> Option<Coord<f64>> {
    let items = position.as_array()?;
    if !(2..=3).contains(&items.len()) {
        return None;
    }
    Some(Coord {
        x: items[0].as_f64()?,
        y: items[1].as_f64()?,
    })
}

/// Checks one position, recording only failures. `point_number` is 1-based.
/// Returns true when the position passed every check.
pub fn check_position(ctx: &mut RuleContext<'_>, position: &Value, point_number: usize) -> bool {
    let items = match position.as_array() {
        Some(items) if (2..=3).contains(&items.len()) => items,
        _ => {
            ctx.fail(
                Rule::PositionFormat,
                format!(
                    "point {} must be [longitude, latitude] or [longitude, latitude, altitude]",
                    point_number
                ),
            );
            return false;
        }
    };

    // Both axes are always evaluated
    let longitude_ok = check_axis(ctx, &items[0], Axis::Longitude, point_number);
    let latitude_ok = check_axis(ctx, &items[1], Axis::Latitude, point_number);
    longitude_ok && latitude_ok
}

fn check_axis(ctx: &mut RuleContext<'_>, value: &Value, axis: Axis, point_number: usize) -> bool {
    let Some(number) = value.as_f64() else {
        ctx.fail(
            axis.rule(),
            format!("point {} {} must be a number", point_number, axis.name()),
        );
        return false;
    };

    let (min, max) = axis.range();
    if !(min..=max).contains(&number) {
        ctx.fail(
            axis.rule(),
            format!(
                "point {} {} {} is outside [{}, {}]",
                point_number,
                axis.name(),
                number,
                min,
                max
            ),
        );
        return false;
    }

    if ctx.options.enforce_coordinate_precision {
        let places = decimal_places(number);
        let max_places = ctx.options.max_decimal_places as usize;
        if places > max_places {
            ctx.fail(
                Rule::CoordinatePrecision,
                format!(
                    "point {} {} {} has {} decimal places (max {})",
                    point_number,
                    axis.name(),
                    number,
                    places,
                    max_places
                ),
            );
            return false;
        }
    }

    true
}
