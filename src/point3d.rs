use std::ops::{Add, Div, Mul};

/// Vertex position, normal or linear RGB color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3D { x, y, z }
    }

    /// Componentwise minimum.
    #[inline(always)]
    pub fn min(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Componentwise maximum.
    #[inline(always)]
    pub fn max(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }
}

impl Add for Point3D {
    type Output = Point3D;
    fn add(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Mul<f32> for Point3D {
    type Output = Point3D;
    fn mul(self, scalar: f32) -> Point3D {
        Point3D {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Div<f32> for Point3D {
    type Output = Point3D;
    fn div(self, scalar: f32) -> Point3D {
        Point3D {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

pub fn dot3(a: Point3D, b: Point3D) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn normalize(vec: Point3D) -> Point3D {
    let length = dot3(vec, vec).sqrt();
    if length != 0.0 { vec / length } else { vec }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_componentwise() {
        let a = Point3D::new(1.0, 5.0, -2.0);
        let b = Point3D::new(3.0, -1.0, 0.0);
        assert_eq!(a.min(b), Point3D::new(1.0, -1.0, -2.0));
        assert_eq!(a.max(b), Point3D::new(3.0, 5.0, 0.0));
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Point3D::new(3.0, 0.0, 4.0));
        assert!((dot3(n, n) - 1.0).abs() < 1e-6);
        assert_eq!(n, Point3D::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn test_normalize_zero_vector_is_unchanged() {
        assert_eq!(normalize(Point3D::default()), Point3D::default());
    }
}
