use std::ops::Mul;

use crate::point3d::Point3D;

/// Column-major 4x4 matrix. `cols[j]` is column j.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Mat4 { cols }
    }

    pub fn translation(offset: Point3D) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [offset.x, offset.y, offset.z, 1.0];
        m
    }

    pub fn scale(factors: Point3D) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[0][0] = factors.x;
        m.cols[1][1] = factors.y;
        m.cols[2][2] = factors.z;
        m
    }
}

// Sum of the columns weighted by the vector's components.
#[inline(always)]
fn transform_vector(m: &Mat4, v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for (col, weight) in m.cols.iter().zip(v) {
        for (o, c) in out.iter_mut().zip(col) {
            *o += c * weight;
        }
    }
    out
}

/// `m * v`, keeping x, y and z. No perspective divide.
#[inline(always)]
pub fn multiply_mv(m: &Mat4, v: [f32; 4]) -> Point3D {
    let [x, y, z, _] = transform_vector(m, v);
    Point3D { x, y, z }
}

impl Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        Mat4 { cols: rhs.cols.map(|col| transform_vector(&self, col)) }
    }
}
