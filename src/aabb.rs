use crate::point3d::Point3D;
use crate::triangle::Triangle;

/// Axis aligned bounding box. Always `min <= max` on every axis when built from
/// finite vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Point3D,
    pub max: Point3D,
}

/// Inclusive pixel rectangle covered by a box, already clamped to a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

/// Componentwise min/max over the three vertices.
#[inline(always)]
pub fn compute_bounding_box(tri: &Triangle) -> Aabb {
    Aabb {
        min: tri.a.min(tri.b).min(tri.c),
        max: tri.a.max(tri.b).max(tri.c),
    }
}

impl Aabb {
    pub fn contains(&self, p: Point3D) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Clamp the x/y extent to a `width` x `height` pixel grid.
    ///
    /// Returns `None` when the box misses the grid entirely, or the grid is empty.
    pub fn pixel_bounds(&self, width: u32, height: u32) -> Option<PixelBounds> {
        if width == 0 || height == 0 {
            return None;
        }
        if self.max.x < 0.0
            || self.max.y < 0.0
            || self.min.x >= width as f32
            || self.min.y >= height as f32
        {
            return None;
        }
        // Saturating float casts turn NaN into 0; such boxes only come from broken input.
        let max_x = width - 1;
        let max_y = height - 1;
        Some(PixelBounds {
            min_x: (self.min.x.floor() as u32).min(max_x),
            min_y: (self.min.y.floor() as u32).min(max_y),
            max_x: (self.max.x.ceil() as u32).min(max_x),
            max_y: (self.max.y.ceil() as u32).min(max_y),
        })
    }
}
