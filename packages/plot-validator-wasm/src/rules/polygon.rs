use serde_json::Value;

use super::ring::check_ring;
use super::RuleContext;
use crate::models::Rule;

pub fn check_polygon(ctx: &mut RuleContext<'_>, rings: &[Value]) {
    match rings.len() {
        0 => ctx.fail(Rule::ExteriorRing, "polygon must have an exterior ring"),
        1 => {
            ctx.pass(Rule::InteriorRings, "polygon has a single exterior ring");
            check_ring(ctx, &rings[0]);
        }
        n => ctx.fail(
            Rule::InteriorRings,
            format!(
                "polygon has {} interior ring(s); holes are not accepted",
                n - 1
            ),
        ),
    }
}
