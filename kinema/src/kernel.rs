//! Geometry kernel of the position solvers.
//!
//! All functions are pure. A `None` return means the constraint cannot be
//! closed at this configuration.
use crate::Point;

/// Both intersections of two circles, `(p1, r1)` and `(p2, r2)`.
///
/// Returns `None` when the circles are too far apart, one contains the
/// other, or the centers coincide.
pub fn intersections(p1: Point, r1: f64, p2: Point, r2: f64) -> Option<[Point; 2]> {
    let d = p1.dist(p2);
    if d > r1 + r2 || d < (r1 - r2).abs() || d == 0. {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let a = (r1 * r1 - r2 * r2 + d * d) / (2. * d);
    let h = (r1 * r1 - a * a).max(0.).sqrt();
    let xm = p1.x + a * dx / d;
    let ym = p1.y + a * dy / d;
    Some([
        Point::new(xm + h * dy / d, ym - h * dx / d),
        Point::new(xm - h * dy / d, ym + h * dx / d),
    ])
}

/// One intersection of two circles, selected by assembly mode.
///
/// With `upper`, the candidate with the smaller y (higher on screen) is
/// returned, otherwise the one with the larger y.
///
/// This is a per-call heuristic without continuity tracking: near a singular
/// configuration the selected branch may flip between two frames.
pub fn intersect(p1: Point, r1: f64, p2: Point, r2: f64, upper: bool) -> Option<Point> {
    let [c1, c2] = intersections(p1, r1, p2, r2)?;
    Some(if upper == (c1.y < c2.y) { c1 } else { c2 })
}

/// Intersection of a circle `(center, r)` and the line through `line_p`
/// with direction angle `line_a`.
///
/// Only the root at `+sqrt(disc)` along the line direction is returned,
/// never the other one.
pub fn intersect_line(center: Point, r: f64, line_p: Point, line_a: f64) -> Option<Point> {
    let d = center - line_p;
    let (s, c) = (-line_a).sin_cos();
    let local_x = d.x * c - d.y * s;
    let local_y = d.x * s + d.y * c;
    let disc = r * r - local_y * local_y;
    if disc < 0. {
        return None;
    }
    Some(line_p.pla(local_x + disc.sqrt(), line_a))
}

/// Transfer a point fixed on a rigid body.
///
/// The body frame has its x-axis from `p1` to `p2` and its y-axis rotated
/// 90° from it. `local` is the point in that frame. A zero-length baseline
/// returns `p1`.
pub fn rigid_point(p1: Point, p2: Point, local: Point) -> Point {
    let len = p1.dist(p2);
    if len == 0. {
        return p1;
    }
    let ux = (p2.x - p1.x) / len;
    let uy = (p2.y - p1.y) / len;
    Point::new(
        p1.x + local.x * ux - local.y * uy,
        p1.y + local.x * uy + local.y * ux,
    )
}
