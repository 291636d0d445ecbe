//! Barycentric weights and linear attribute interpolation.
//!
//! Interpolation is a plain weighted sum in screen space. It is not
//! perspective corrected, never renormalizes and never clamps: callers pre-divide
//! by w, renormalize normals and only shade samples that passed
//! [`is_inside_triangle`](crate::geometry::is_inside_triangle).

use std::ops::{Add, Mul};

use crate::point3d::Point3D;
use crate::texture::Color;
use crate::triangle::PerVertex;

/// Weights of a point relative to a triangle's vertices `(a, b, c)`.
///
/// The weights sum to 1 up to rounding. Negative weights (or weights above 1)
/// mean the point is outside.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    pub const fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Barycentric { alpha, beta, gamma }
    }

    #[inline(always)]
    pub fn as_array(self) -> [f32; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    pub fn sum(self) -> f32 {
        self.alpha + self.beta + self.gamma
    }

    #[inline(always)]
    pub fn is_inside(self) -> bool {
        crate::geometry::is_inside_triangle(self)
    }
}

/// `alpha * values[0] + beta * values[1] + gamma * values[2]`.
#[inline(always)]
pub fn interpolate<T>(coord: Barycentric, values: &PerVertex<T>) -> T
where
    T: Copy + Mul<f32, Output = T> + Add<Output = T>,
{
    values[0] * coord.alpha + values[1] * coord.beta + values[2] * coord.gamma
}

/// Screen-space linear depth.
#[inline(always)]
pub fn interpolate_depth(coord: Barycentric, depths: &PerVertex<f32>) -> f32 {
    interpolate(coord, depths)
}

/// Componentwise weighted sum, typically of normals. The result is not renormalized.
#[inline(always)]
pub fn interpolate_vector(coord: Barycentric, vectors: &PerVertex<Point3D>) -> Point3D {
    interpolate(coord, vectors)
}

#[inline(always)]
pub fn interpolate_color(coord: Barycentric, colors: &PerVertex<Color>) -> Color {
    interpolate(coord, colors)
}
