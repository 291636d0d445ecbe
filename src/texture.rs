use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::TextureError;
use crate::point2d::Point2D;
use crate::point3d::Point3D;

/// Linear RGB, components nominally in `[0, 1]`.
pub type Color = Point3D;

/// Read-only view over texels stored row-major, `stride` bytes per texel.
///
/// The first three bytes of each texel are red, green and blue; anything past
/// that (alpha, padding) is ignored. The bytes are always borrowed from a
/// texture store owned elsewhere.
#[derive(Debug, Copy, Clone)]
pub struct TextureBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> TextureBuffer<'a> {
    /// Wrap `data` after checking it really holds `width * height` texels.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension { width, height });
        }
        if stride < 3 {
            return Err(TextureError::StrideTooSmall(stride));
        }
        let required = (width as usize)
            .checked_mul(height as usize)
            .and_then(|texels| texels.checked_mul(stride))
            .ok_or(TextureError::SizeOverflow { width, height, stride })?;
        if data.len() < required {
            return Err(TextureError::BufferTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(TextureBuffer { data, width, height, stride })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Texel column and row for `texcoord`, nearest neighbour with wraparound.
    #[inline(always)]
    pub fn texel_index(&self, texcoord: Point2D) -> (u32, u32) {
        let x = (self.width as f32 * texcoord.x).floor() as i64;
        let y = (self.height as f32 * texcoord.y).floor() as i64;
        (
            x.rem_euclid(self.width as i64) as u32,
            y.rem_euclid(self.height as i64) as u32,
        )
    }
}

/// Nearest-neighbour lookup with repeat addressing.
///
/// Texel `(floor(w * u) mod w, floor(h * v) mod h)` is read and its first three
/// bytes are divided by 255. Coordinates outside `[0, 1]` wrap.
#[inline(always)]
pub fn sample_texture(buffer: &TextureBuffer<'_>, texcoord: Point2D) -> Color {
    let (x, y) = buffer.texel_index(texcoord);
    let index = (x as usize + y as usize * buffer.width as usize) * buffer.stride;
    let texel = &buffer.data[index..index + 3];
    Color::new(
        texel[0] as f32 / 255.0,
        texel[1] as f32 / 255.0,
        texel[2] as f32 / 255.0,
    )
}

/// Clamp to `[0, 1]` and quantize to opaque RGBA8.
pub fn color_to_rgba8(color: Color) -> [u8; 4] {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z), 255]
}

/// Owned RGBA8 texture store. Hands out [`TextureBuffer`] views for sampling.
///
/// Fields stay private so the dimensions always match the texel bytes.
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Decode an image file. Rows are stored bottom-up so `v = 0` is the bottom edge.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img: DynamicImage = image::open(path.as_ref())?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimension { width, height });
        }
        let rgba_img = img.to_rgba8();
        let row_len = width as usize * 4;
        let mut rgba = Vec::with_capacity(rgba_img.as_raw().len());
        for row in rgba_img.as_raw().chunks_exact(row_len).rev() {
            rgba.extend_from_slice(row);
        }
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.as_ref().display(),
            width,
            height
        );
        Self::from_rgba8(width, height, rgba)
    }

    /// Take ownership of tightly packed RGBA8 texels.
    pub fn from_rgba8(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, TextureError> {
        TextureBuffer::new(&rgba, width, height, 4)?;
        Ok(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn view(&self) -> TextureBuffer<'_> {
        TextureBuffer {
            data: &self.rgba,
            width: self.width,
            height: self.height,
            stride: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2, stride 3: red, green / blue, white.
    static TEXELS: [[u8; 3]; 4] = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];

    fn buffer() -> TextureBuffer<'static> {
        TextureBuffer::new(bytemuck::cast_slice(&TEXELS), 2, 2, 3).unwrap()
    }

    #[test]
    fn test_sample_first_texel() {
        let c = sample_texture(&buffer(), Point2D::new(0.1, 0.1));
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sample_each_quadrant() {
        let tex = buffer();
        let green = sample_texture(&tex, Point2D::new(0.75, 0.25));
        let blue = sample_texture(&tex, Point2D::new(0.25, 0.75));
        let white = sample_texture(&tex, Point2D::new(0.75, 0.75));
        assert_eq!(green, Color::new(0.0, 1.0, 0.0));
        assert_eq!(blue, Color::new(0.0, 0.0, 1.0));
        assert_eq!(white, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_sample_wraps_out_of_range() {
        let tex = buffer();
        let inside = sample_texture(&tex, Point2D::new(0.1, 0.1));
        assert_eq!(sample_texture(&tex, Point2D::new(1.1, 0.1)), inside);
        assert_eq!(sample_texture(&tex, Point2D::new(0.1, 3.1)), inside);
        assert_eq!(tex.texel_index(Point2D::new(1.0, 1.0)), (0, 0));
    }

    #[test]
    fn test_sample_wraps_negative() {
        let tex = buffer();
        // floor(2 * -0.25) = -1, which wraps to the last column
        assert_eq!(tex.texel_index(Point2D::new(-0.25, 0.1)), (1, 0));
        let wrapped = sample_texture(&tex, Point2D::new(-0.25, 0.1));
        assert_eq!(wrapped, Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_stride_skips_extra_channels() {
        let rgba: Vec<u8> = vec![10, 20, 30, 99, 40, 50, 60, 99];
        let tex = TextureBuffer::new(&rgba, 2, 1, 4).unwrap();
        let c = sample_texture(&tex, Point2D::new(0.6, 0.0));
        assert_eq!(c, Color::new(40.0 / 255.0, 50.0 / 255.0, 60.0 / 255.0));
    }

    #[test]
    fn test_buffer_validation() {
        let data = [0u8; 11];
        assert!(matches!(
            TextureBuffer::new(&data, 2, 2, 3),
            Err(TextureError::BufferTooSmall { required: 12, actual: 11 })
        ));
        assert!(matches!(
            TextureBuffer::new(&data, 0, 2, 3),
            Err(TextureError::ZeroDimension { width: 0, height: 2 })
        ));
        assert!(matches!(
            TextureBuffer::new(&data, 1, 1, 2),
            Err(TextureError::StrideTooSmall(2))
        ));
    }

    #[test]
    fn test_buffer_size_overflow_is_rejected() {
        let data = [0u8; 16];
        let stride = usize::MAX / 2 + 1;
        assert!(matches!(
            TextureBuffer::new(&data, 2, 2, stride),
            Err(TextureError::SizeOverflow { width: 2, height: 2, .. })
        ));
    }

    #[test]
    fn test_owned_texture_view() {
        let tex = Texture::from_rgba8(1, 1, vec![0, 255, 0, 255]).unwrap();
        assert_eq!((tex.width(), tex.height()), (1, 1));
        let c = sample_texture(&tex.view(), Point2D::new(0.5, 0.5));
        assert_eq!(c, Color::new(0.0, 1.0, 0.0));
        assert!(Texture::from_rgba8(2, 2, vec![0; 4]).is_err());
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rastertools-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_load_stores_bottom_row_first() {
        // 1x2 image: red on top, blue at the bottom
        let path = temp_path("column.png");
        let img = image::RgbaImage::from_raw(1, 2, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        img.save(&path).unwrap();

        let tex = Texture::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((tex.width(), tex.height()), (1, 2));
        let bottom = sample_texture(&tex.view(), Point2D::new(0.5, 0.25));
        let top = sample_texture(&tex.view(), Point2D::new(0.5, 0.75));
        assert_eq!(bottom, Color::new(0.0, 0.0, 1.0));
        assert_eq!(top, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_load_reports_decode_failures() {
        let garbage = temp_path("garbage.png");
        std::fs::write(&garbage, b"definitely not a png").unwrap();
        let result = Texture::load(&garbage);
        std::fs::remove_file(&garbage).unwrap();
        assert!(matches!(result, Err(TextureError::Image(_))));

        let missing = temp_path("missing.png");
        assert!(matches!(Texture::load(&missing), Err(TextureError::Image(_))));
    }

    #[test]
    fn test_color_to_rgba8_clamps() {
        assert_eq!(color_to_rgba8(Color::new(1.5, -0.2, 0.5)), [255, 0, 128, 255]);
    }
}
