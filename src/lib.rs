//! Triangle rasterization primitives.
//!
//! A rasterizer calls [`compute_bounding_box`] once per triangle, then for each
//! candidate sample [`compute_barycentric_coordinate`] and [`is_inside_triangle`].
//! Covered samples get their depth, normal and color from the `interpolate_*`
//! functions, and optionally a texel from [`sample_texture`].
//!
//! Every function is pure: no shared state, no I/O, no locks. They can be
//! called from any number of threads at once, per sample or per triangle.
//!
//! Interpolation is linear in screen space and the default barycentric solve
//! does not guard against zero-area triangles (the weights come back NaN or
//! infinite). Check [`compute_signed_area`] first, or use
//! [`try_barycentric_coordinate`].

pub mod aabb;
pub mod barycentric;
pub mod error;
pub mod geometry;
pub mod point2d;
pub mod point3d;
pub mod texture;
pub mod transform;
pub mod triangle;

pub use aabb::{Aabb, PixelBounds, compute_bounding_box};
pub use barycentric::{
    Barycentric, interpolate, interpolate_color, interpolate_depth, interpolate_vector,
};
pub use error::{GeometryError, TextureError};
pub use geometry::{
    barycentric_coordinate_value, compute_barycentric_coordinate, compute_signed_area,
    is_inside_triangle, try_barycentric_coordinate,
};
pub use point2d::Point2D;
pub use point3d::Point3D;
pub use texture::{Color, Texture, TextureBuffer, color_to_rgba8, sample_texture};
pub use transform::{Mat4, multiply_mv};
pub use triangle::{PerVertex, Triangle};
