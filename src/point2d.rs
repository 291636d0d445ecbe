use std::ops::{Add, Mul, Sub};

use crate::point3d::Point3D;

/// Screen-space or texture-space point.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[inline(always)]
    pub const fn new(x: f32, y: f32) -> Self {
        Point2D { x, y }
    }
}

/// Drops z, the projection every 2D test works on.
impl From<Point3D> for Point2D {
    #[inline(always)]
    fn from(p: Point3D) -> Point2D {
        Point2D { x: p.x, y: p.y }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, other: Point2D) -> Point2D {
        Point2D {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, other: Point2D) -> Point2D {
        Point2D {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;
    fn mul(self, scalar: f32) -> Point2D {
        Point2D {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

#[inline(always)]
pub fn dot2(a: Point2D, b: Point2D) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Counter-clockwise quarter turn, so `dot2(v, perp(u))` is the 2D cross product `u x v`.
#[inline(always)]
pub fn perp(vec: Point2D) -> Point2D {
    Point2D { x: -vec.y, y: vec.x }
}
