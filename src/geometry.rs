//! Signed area, barycentric solve and the point-in-triangle test.
//!
//! Everything here works on the (x, y) projection of a [`Triangle`]; z is
//! ignored. The default barycentric solve never branches: a zero-area triangle
//! divides by zero and the NaN/infinite weights reach the caller untouched. Use
//! [`try_barycentric_coordinate`] when degenerate input has to be rejected.

use crate::barycentric::Barycentric;
use crate::error::GeometryError;
use crate::point2d::{Point2D, dot2, perp};
use crate::triangle::Triangle;

/// Areas at or below this magnitude count as degenerate in the guarded solve.
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-12;

/// Signed area of the 2D triangle `(t1, t2, p)`. Positive when counter-clockwise.
#[inline(always)]
pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f32 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    dot2(ap, t1t2perp) * 0.5
}

/// Signed area of `tri` in the (x, y) plane.
///
/// Counter-clockwise winding is positive, clockwise negative, and collinear or
/// coincident vertices give zero.
#[inline(always)]
pub fn compute_signed_area(tri: &Triangle) -> f32 {
    signed_triangle_area(tri.a.into(), tri.b.into(), tri.c.into())
}

/// Ratio of the signed area of `(a, b, c)` to the signed area of `tri`.
#[inline(always)]
pub fn barycentric_coordinate_value(a: Point2D, b: Point2D, c: Point2D, tri: &Triangle) -> f32 {
    signed_triangle_area(a, b, c) / compute_signed_area(tri)
}

/// Barycentric weights of `point` with respect to `tri`.
///
/// `beta` comes from the sub-triangle `(a, point, c)`, `gamma` from
/// `(a, b, point)` and `alpha = 1 - beta - gamma`. A zero-area triangle yields
/// non-finite weights.
#[inline(always)]
pub fn compute_barycentric_coordinate(tri: &Triangle, point: Point2D) -> Barycentric {
    let [a, b, c] = tri.screen_vertices();
    let beta = barycentric_coordinate_value(a, point, c, tri);
    let gamma = barycentric_coordinate_value(a, b, point, tri);
    let alpha = 1.0 - beta - gamma;
    Barycentric { alpha, beta, gamma }
}

/// Same weights as [`compute_barycentric_coordinate`], but degenerate triangles
/// are reported instead of producing NaN.
pub fn try_barycentric_coordinate(
    tri: &Triangle,
    point: Point2D,
) -> Result<Barycentric, GeometryError> {
    let area = compute_signed_area(tri);
    if !area.is_finite() || area.abs() <= DEGENERATE_AREA_EPSILON {
        return Err(GeometryError::DegenerateTriangle { area });
    }
    Ok(compute_barycentric_coordinate(tri, point))
}

/// True iff every weight lies in `[0, 1]`. Edges count as inside.
#[inline(always)]
pub fn is_inside_triangle(coord: Barycentric) -> bool {
    coord.alpha >= 0.0
        && coord.alpha <= 1.0
        && coord.beta >= 0.0
        && coord.beta <= 1.0
        && coord.gamma >= 0.0
        && coord.gamma <= 1.0
}
