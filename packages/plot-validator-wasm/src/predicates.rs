// Planar predicates over lon/lat positions. These are heuristics with a
// fixed tolerance, not exact arithmetic.
use geo_types::Coord;

// Signed orientation of p3 relative to the line p1 -> p2; zero when collinear
fn direction(p1: Coord<f64>, p2: Coord<f64>, p3: Coord<f64>) -> f64 {
    (p3.x - p1.x) * (p2.y - p1.y) - (p2.x - p1.x) * (p3.y - p1.y)
}

/// Whether segment p1-p2 properly crosses segment p3-p4. Each segment must
/// have its endpoints strictly on opposite sides of the other, so collinear
/// and touching configurations are not reported.
pub fn segments_cross(p1: Coord<f64>, p2: Coord<f64>, p3: Coord<f64>, p4: Coord<f64>) -> bool {
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);

    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Angle in degrees at `vertex` between the edges to `prev` and `next`.
/// A zero-length edge has no direction, so it reads as a straight 180.
pub fn vertex_angle_degrees(prev: Coord<f64>, vertex: Coord<f64>, next: Coord<f64>) -> f64 {
    let v1 = prev - vertex;
    let v2 = next - vertex;

    let len1 = v1.x.hypot(v1.y);
    let len2 = v2.x.hypot(v2.y);
    if len1 == 0.0 || len2 == 0.0 {
        return 180.0;
    }

    let cos = ((v1.x * v2.x + v1.y * v2.y) / (len1 * len2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// Number of fractional digits in the shortest round-trip form of `value`
pub fn decimal_places(value: f64) -> usize {
    let text = format!("{}", value);
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}
