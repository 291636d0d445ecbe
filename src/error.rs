use thiserror::Error;

/// Failure of the guarded barycentric solve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate triangle (signed area {area})")]
    DegenerateTriangle { area: f32 },
}

/// Rejected texture construction or load.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture has zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("texel stride {0} is smaller than 3 bytes")]
    StrideTooSmall(usize),

    #[error("texture size {width}x{height} with stride {stride} overflows usize")]
    SizeOverflow {
        width: u32,
        height: u32,
        stride: usize,
    },

    #[error("texture buffer holds {actual} bytes, needs {required}")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("failed to decode texture image: {0}")]
    Image(#[from] image::ImageError),
}
