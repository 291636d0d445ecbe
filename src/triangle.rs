use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// One value per triangle vertex, in vertex order.
pub type PerVertex<T> = [T; 3];

/// Screen-space triangle. x/y are pixel coordinates, z is depth.
///
/// Vertex order is significant: it fixes the sign of the signed area. No
/// reordering or degeneracy check is done here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point3D,
    pub b: Point3D,
    pub c: Point3D,
}

impl Triangle {
    #[inline(always)]
    pub const fn new(a: Point3D, b: Point3D, c: Point3D) -> Self {
        Triangle { a, b, c }
    }

    #[inline(always)]
    pub fn vertices(&self) -> PerVertex<Point3D> {
        [self.a, self.b, self.c]
    }

    /// Per-vertex depth, ready for `interpolate_depth`.
    #[inline(always)]
    pub fn depths(&self) -> PerVertex<f32> {
        [self.a.z, self.b.z, self.c.z]
    }

    /// The (x, y) projection of each vertex.
    #[inline(always)]
    pub fn screen_vertices(&self) -> PerVertex<Point2D> {
        [self.a.into(), self.b.into(), self.c.into()]
    }
}

impl From<PerVertex<Point3D>> for Triangle {
    fn from([a, b, c]: PerVertex<Point3D>) -> Triangle {
        Triangle { a, b, c }
    }
}
