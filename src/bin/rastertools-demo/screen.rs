use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::tiles::Rect;

/// Color and depth storage for one tile, or the whole screen.
pub struct ScreenSpace {
    pub rect: Rect,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<[u8; 4]>,
    pub depth: Vec<f32>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        Self::for_rect(Rect {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        })
    }

    pub fn for_rect(rect: Rect) -> Self {
        let size_calc = (rect.width() * rect.height()) as usize;
        Self {
            rect,
            width: rect.width(),
            height: rect.height(),
            rgba: vec![[0; 4]; size_calc],
            depth: vec![f32::INFINITY; size_calc],
        }
    }

    /// Coordinates are screen-space; they are offset by the tile origin here.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let lx = x.wrapping_sub(self.rect.min_x);
        let ly = y.wrapping_sub(self.rect.min_y);
        if lx >= self.width || ly >= self.height {
            return;
        }
        self.rgba[(ly * self.width + lx) as usize] = rgba;
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let lx = x.checked_sub(self.rect.min_x)?;
        let ly = y.checked_sub(self.rect.min_y)?;
        if lx >= self.width || ly >= self.height {
            return None;
        }
        Some(self.rgba[(ly * self.width + lx) as usize])
    }

    pub fn set_depth(&mut self, x: u32, y: u32, value: f32) {
        let i = ((y - self.rect.min_y) * self.width + (x - self.rect.min_x)) as usize;
        self.depth[i] = value;
    }

    pub fn get_depth(&self, x: u32, y: u32) -> f32 {
        let i = ((y - self.rect.min_y) * self.width + (x - self.rect.min_x)) as usize;
        self.depth[i]
    }

    pub fn clear(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.rgba.fill([r, g, b, a]);
        self.depth.fill(f32::INFINITY);
    }

    /// Copy a tile's color rows into this full-screen buffer.
    pub fn blit(&mut self, tile: &ScreenSpace) {
        let row_len = tile.width.min(self.width.saturating_sub(tile.rect.min_x)) as usize;
        for y in 0..tile.height {
            let screen_y = tile.rect.min_y + y;
            if screen_y >= self.height {
                continue;
            }
            let screen_row_start = (screen_y * self.width + tile.rect.min_x) as usize;
            let tile_row_start = (y * tile.width) as usize;
            self.rgba[screen_row_start..screen_row_start + row_len]
                .copy_from_slice(&tile.rgba[tile_row_start..tile_row_start + row_len]);
        }
    }

    /// Write the color buffer as PNG, top row first.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes: &[u8] = bytemuck::cast_slice(&self.rgba);
        let img = RgbaImage::from_raw(self.width, self.height, bytes.to_vec())
            .context("color buffer does not match its dimensions")?;
        img.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::subdivide;

    #[test]
    fn test_tile_uses_screen_coordinates() {
        let mut tile = ScreenSpace::for_rect(Rect {
            min_x: 4,
            min_y: 2,
            max_x: 8,
            max_y: 4,
        });
        tile.set_pixel(5, 3, [1, 2, 3, 4]);
        tile.set_depth(5, 3, 0.5);
        assert_eq!(tile.get_pixel(5, 3), Some([1, 2, 3, 4]));
        assert_eq!(tile.get_depth(5, 3), 0.5);
        assert_eq!(tile.get_depth(4, 2), f32::INFINITY);
        assert_eq!(tile.get_pixel(0, 0), None);
    }

    #[test]
    fn test_clear_resets_color_and_depth() {
        let mut screen = ScreenSpace::new(2, 2);
        screen.set_depth(1, 1, 0.25);
        screen.clear(9, 8, 7, 255);
        assert_eq!(screen.get_pixel(1, 1), Some([9, 8, 7, 255]));
        assert_eq!(screen.get_depth(1, 1), f32::INFINITY);
    }

    #[test]
    fn test_clear_empty_tile() {
        let mut empty = ScreenSpace::for_rect(Rect {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 1,
        });
        empty.clear(0, 0, 0, 255);
        assert!(empty.rgba.is_empty());

        for rect in subdivide(1, 1, 1) {
            ScreenSpace::for_rect(rect).clear(0, 0, 0, 255);
        }
    }

    #[test]
    fn test_blit_places_tile() {
        let mut screen = ScreenSpace::new(4, 4);
        let mut tile = ScreenSpace::for_rect(Rect {
            min_x: 2,
            min_y: 2,
            max_x: 4,
            max_y: 4,
        });
        tile.clear(255, 0, 0, 255);
        screen.blit(&tile);
        assert_eq!(screen.get_pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(screen.get_pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_save_png_round_trips_pixels() {
        let mut screen = ScreenSpace::new(2, 1);
        screen.set_pixel(1, 0, [10, 20, 30, 255]);
        let path =
            std::env::temp_dir().join(format!("rastertools-demo-{}.png", std::process::id()));
        screen.save_png(&path).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30, 255]);
    }
}
