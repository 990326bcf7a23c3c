use geo_types::Coord;
use serde_json::Value;

use super::coordinate::{as_coord, check_position};
use super::RuleContext;
use crate::models::Rule;
use crate::options::COORDINATE_TOLERANCE_DECIMALS;
use crate::predicates::{round_to_decimals, segments_cross, vertex_angle_degrees};

// 3 unique vertices plus the closing duplicate
const MIN_RING_POSITIONS: usize = 4;

/// Runs the ring battery on a polygon's exterior ring. Only the array and
/// minimum-size gates stop evaluation; every later check runs regardless of
/// earlier failures so one ring can report several defects at once.
pub fn check_ring(ctx: &mut RuleContext<'_>, ring: &Value) {
    let Some(positions) = ring.as_array() else {
        ctx.fail(
            Rule::RingStructure,
            "exterior ring must be an array of positions",
        );
        return;
    };

    let count = positions.len();
    if count < MIN_RING_POSITIONS {
        ctx.fail(
            Rule::MinimumPoints,
            format!(
                "exterior ring has {} point(s); at least {} are required (3 unique vertices plus the closing point)",
                count, MIN_RING_POSITIONS
            ),
        );
        return;
    }
    ctx.pass(
        Rule::MinimumPoints,
        format!("exterior ring has {} points", count),
    );

    check_closure(ctx, positions);
    check_duplicates(ctx, positions);
    check_coordinates(ctx, positions);

    // The shape heuristics need every position as a number pair; malformed
    // positions were already reported above.
    if let Some(coords) = positions.iter().map(as_coord).collect::<Option<Vec<_>>>() {
        check_self_intersection(ctx, &coords);
        check_spikes(ctx, &coords);
    }

    check_straight_lines(ctx, count);
}

// Element-wise equality after rounding numbers to the coordinate tolerance
fn positions_equal(a: &Value, b: &Value) -> bool {
    match (a.as_array(), b.as_array()) {
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| match (x.as_f64(), y.as_f64()) {
                    (Some(x), Some(y)) => {
                        round_to_decimals(x, COORDINATE_TOLERANCE_DECIMALS)
                            == round_to_decimals(y, COORDINATE_TOLERANCE_DECIMALS)
                    }
                    _ => x == y,
                })
        }
        _ => a == b,
    }
}

fn check_closure(ctx: &mut RuleContext<'_>, positions: &[Value]) {
    let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
        return;
    };

    if positions_equal(first, last) {
        ctx.pass(Rule::RingClosure, "ring is closed");
    } else {
        ctx.fail(
            Rule::RingClosure,
            "ring is not closed: first and last points must be identical",
        );
    }
}

fn check_duplicates(ctx: &mut RuleContext<'_>, positions: &[Value]) {
    let legacy = ctx.options.legacy_zero_length_edge_messages;
    let mut found = false;

    for (i, pair) in positions.windows(2).enumerate() {
        if !positions_equal(&pair[0], &pair[1]) {
            continue;
        }
        found = true;
        ctx.fail(
            Rule::DuplicatePoints,
            format!("points {} and {} are consecutive duplicates", i + 1, i + 2),
        );
        if legacy {
            ctx.fail(
                Rule::ZeroLengthEdges,
                format!("edge from point {} to point {} has zero length", i + 1, i + 2),
            );
        }
    }

    if !found {
        ctx.pass(Rule::DuplicatePoints, "no consecutive duplicate points");
        if legacy {
            ctx.pass(Rule::ZeroLengthEdges, "no zero-length edges");
        }
    }
}

fn check_coordinates(ctx: &mut RuleContext<'_>, positions: &[Value]) {
    let mut all_valid = true;
    for (i, position) in positions.iter().enumerate() {
        all_valid &= check_position(ctx, position, i + 1);
    }

    if all_valid {
        ctx.pass(
            Rule::Coordinates,
            format!("all {} points are valid WGS84 coordinates", positions.len()),
        );
    }
}

// O(n^2) over edge pairs; plot boundaries are small
fn check_self_intersection(ctx: &mut RuleContext<'_>, coords: &[Coord<f64>]) {
    let report_all = ctx.options.report_all_self_intersections;
    let edge_count = coords.len() - 1;
    let mut crossings = 0;

    'scan: for i in 0..edge_count {
        for j in (i + 2)..edge_count {
            // First and last edges meet at the closing point
            if i == 0 && j == edge_count - 1 {
                continue;
            }
            if segments_cross(coords[i], coords[i + 1], coords[j], coords[j + 1]) {
                crossings += 1;
                ctx.fail(
                    Rule::SelfIntersection,
                    format!("edges {} and {} cross each other", i + 1, j + 1),
                );
                if !report_all {
                    break 'scan;
                }
            }
        }
    }

    if crossings == 0 {
        ctx.pass(Rule::SelfIntersection, "no self-intersections");
    }
}

fn check_spikes(ctx: &mut RuleContext<'_>, coords: &[Coord<f64>]) {
    let min_angle = ctx.options.min_spike_angle_degrees;
    let mut found = false;

    for i in 1..coords.len() - 1 {
        let angle = vertex_angle_degrees(coords[i - 1], coords[i], coords[i + 1]);
        if angle < min_angle {
            found = true;
            ctx.fail(
                Rule::SpikeVertices,
                format!(
                    "spike at point {}: angle of {:.1} degrees is below {} degrees",
                    i + 1,
                    angle,
                    min_angle
                ),
            );
        }
    }

    if !found {
        ctx.pass(
            Rule::SpikeVertices,
            format!("no vertex angle below {} degrees", min_angle),
        );
    }
}

fn check_straight_lines(ctx: &mut RuleContext<'_>, count: usize) {
    if count == MIN_RING_POSITIONS {
        ctx.pass(Rule::StraightLines, "triangle boundary accepted");
    } else if count < MIN_RING_POSITIONS {
        ctx.fail(
            Rule::StraightLines,
            "insufficient points for curvature: boundary is made of too few straight lines",
        );
    } else {
        ctx.pass(
            Rule::StraightLines,
            format!("{} points describe the boundary", count),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidationOptions;
    use crate::rules::test_support::{run, run_with};
    use serde_json::json;

    fn pentagram() -> Value {
        json!([
            [0.0, 10.0],
            [5.88, -8.09],
            [-9.51, 3.09],
            [9.51, 3.09],
            [-5.88, -8.09],
            [0.0, 10.0]
        ])
    }

    #[test]
    fn rectangle_passes_every_check() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]])));
        assert!(result.is_valid, "{:?}", result.errors);

        let rules: Vec<Rule> = result.steps.iter().map(|step| step.rule).collect();
        assert_eq!(
            rules,
            vec![
                Rule::MinimumPoints,
                Rule::RingClosure,
                Rule::DuplicatePoints,
                Rule::Coordinates,
                Rule::SelfIntersection,
                Rule::SpikeVertices,
                Rule::StraightLines,
            ]
        );
    }

    #[test]
    fn short_ring_skips_shape_checks() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [1, 1], [0, 0]])));
        assert!(!result.is_valid);
        assert_eq!(result.steps.len(), 1);
        assert!(result.has_failure(Rule::MinimumPoints));
        assert!(!result.has_step(Rule::SelfIntersection));
        assert!(!result.has_step(Rule::SpikeVertices));
    }

    #[test]
    fn non_array_ring_is_rejected() {
        let result = run(|ctx| check_ring(ctx, &json!("0,0 1,1")));
        assert_eq!(result.steps.len(), 1);
        assert!(result.has_failure(Rule::RingStructure));
    }

    #[test]
    fn open_ring_keeps_evaluating() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [0, 1], [1, 1], [1, 0], [0.5, 0]])));
        assert!(result.has_failure(Rule::RingClosure));
        assert!(result.has_step(Rule::SelfIntersection));
        assert!(result.has_step(Rule::SpikeVertices));
    }

    #[test]
    fn closure_uses_six_decimal_tolerance() {
        let result = run(|ctx| {
            check_ring(
                ctx,
                &json!([[0, 0], [0, 1], [1, 1], [1, 0], [0.0000001, 0.0]]),
            )
        });
        assert!(!result.has_failure(Rule::RingClosure));
    }

    #[test]
    fn appended_duplicate_is_reported_once_per_pair() {
        let result = run(|ctx| {
            check_ring(ctx, &json!([[0, 0], [0, 1], [1, 1], [1, 0], [0, 0], [0, 0]]))
        });
        assert!(!result.has_failure(Rule::RingClosure));
        assert_eq!(
            result.errors,
            vec!["Feature 1: points 5 and 6 are consecutive duplicates"]
        );
    }

    #[test]
    fn legacy_option_repeats_duplicate_as_zero_length_edge() {
        let options = ValidationOptions {
            legacy_zero_length_edge_messages: true,
            ..Default::default()
        };
        let result = run_with(&options, |ctx| {
            check_ring(ctx, &json!([[0, 0], [0, 1], [0, 1], [1, 1], [1, 0], [0, 0]]))
        });
        assert_eq!(result.errors.len(), 2);
        assert!(result.has_failure(Rule::DuplicatePoints));
        assert!(result.has_failure(Rule::ZeroLengthEdges));
    }

    #[test]
    fn bowtie_crosses_in_both_directions() {
        let bowtie = json!([[0, 0], [1, 1], [0, 1], [1, 0], [0, 0]]);
        let reversed = json!([[0, 0], [1, 0], [0, 1], [1, 1], [0, 0]]);

        for ring in [bowtie, reversed] {
            let result = run(|ctx| check_ring(ctx, &ring));
            assert!(result.has_failure(Rule::SelfIntersection));
            assert_eq!(result.failed_steps().count(), 1);
        }
    }

    fn reversed(ring: &Value) -> Value {
        let mut positions = ring.as_array().cloned().unwrap_or_default();
        positions.reverse();
        Value::Array(positions)
    }

    #[test]
    fn repeated_vertex_is_not_a_crossing_in_either_direction() {
        let counter_clockwise = json!([[0, 0], [1, 0], [1, 0], [1, 1], [0, 1], [0, 0]]);

        for ring in [reversed(&counter_clockwise), counter_clockwise] {
            let result = run(|ctx| check_ring(ctx, &ring));
            assert!(result.has_failure(Rule::DuplicatePoints));
            assert!(!result.has_failure(Rule::SelfIntersection), "{:?}", result.errors);
        }
    }

    #[test]
    fn touching_and_overlapping_edges_are_not_crossings() {
        // Edges 4 and 6 touch edge 1 at a vertex; edge 5 runs along edge 1
        let notched = json!([
            [0, 0], [3, 0], [3, 1], [2, 1], [2, 0], [1, 0], [1, -1], [0, -1], [0, 0]
        ]);

        for ring in [reversed(&notched), notched] {
            let result = run(|ctx| check_ring(ctx, &ring));
            assert!(!result.has_failure(Rule::SelfIntersection), "{:?}", result.errors);
            assert!(result.has_step(Rule::SelfIntersection));
        }
    }

    #[test]
    fn reversing_a_ring_keeps_the_crossing_verdict() {
        for ring in [
            json!([[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]),
            json!([[0, 0], [1, 1], [0, 1], [1, 0], [0, 0]]),
            json!([[0, 0], [1, 0], [1, 0], [1, 1], [0, 1], [0, 0]]),
            pentagram(),
        ] {
            let forward = run(|ctx| check_ring(ctx, &ring));
            let backward = run(|ctx| check_ring(ctx, &reversed(&ring)));
            assert_eq!(
                forward.has_failure(Rule::SelfIntersection),
                backward.has_failure(Rule::SelfIntersection)
            );
        }
    }

    #[test]
    fn crossing_cardinality_follows_options() {
        let all = run(|ctx| check_ring(ctx, &pentagram()));
        assert_eq!(
            all.failed_steps()
                .filter(|step| step.rule == Rule::SelfIntersection)
                .count(),
            5
        );

        let first_only = ValidationOptions {
            report_all_self_intersections: false,
            ..Default::default()
        };
        let first = run_with(&first_only, |ctx| check_ring(ctx, &pentagram()));
        assert_eq!(
            first
                .failed_steps()
                .filter(|step| step.rule == Rule::SelfIntersection)
                .count(),
            1
        );
    }

    #[test]
    fn two_degree_vertex_is_a_spike() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [10, 0], [0, 0.349], [0, 0]])));
        assert!(result.has_failure(Rule::SpikeVertices));
        assert!(result
            .errors
            .iter()
            .any(|error| error.contains("spike at point 2: angle of 2.0 degrees")));
    }

    #[test]
    fn malformed_position_skips_shape_heuristics() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [0, 1], ["x", 1], [1, 0], [0, 0]])));
        assert!(result.has_failure(Rule::Longitude));
        assert!(!result.has_step(Rule::Coordinates));
        assert!(!result.has_step(Rule::SelfIntersection));
        assert!(result.has_step(Rule::StraightLines));
    }

    #[test]
    fn triangle_is_exempt_from_straight_line_heuristic() {
        let result = run(|ctx| check_ring(ctx, &json!([[0, 0], [1, 0], [0, 1], [0, 0]])));
        assert!(result.is_valid, "{:?}", result.errors);
        assert_eq!(
            result.steps.last().map(|step| step.message.as_str()),
            Some("Feature 1: triangle boundary accepted")
        );
    }
}
