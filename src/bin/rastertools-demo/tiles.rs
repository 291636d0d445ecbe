use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use rand::Rng;

/// Half-open pixel rectangle `[min, max)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

// helper methods
impl Rect {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}

// Compute minimum depth to get at least n rectangles for # of CPU cores
pub fn compute_subdivisions(n: usize) -> u32 {
    let mut depth = 0;
    let mut count = 1;
    while count < n {
        depth += 1;
        count *= 2;
    }
    depth
}

/// Subdivide a rectangle evenly with given depth
pub fn subdivide(width: u32, height: u32, depth: u32) -> Vec<Rect> {
    let mut rects = Vec::new();

    let root = Rect {
        min_x: 0,
        min_y: 0,
        max_x: width,
        max_y: height,
    };

    // Alternate spliting the screen vertically and horizontally
    // Tiny screens split into empty halves; those are dropped
    fn recurse(r: Rect, vertical: bool, depth: u32, rects: &mut Vec<Rect>) {
        if r.width() == 0 || r.height() == 0 {
            return;
        }
        if depth == 0 {
            rects.push(r);
            return;
        }

        if vertical {
            let mid = r.min_x + r.width() / 2;
            let left = Rect { max_x: mid, ..r };
            let right = Rect { min_x: mid, ..r };
            recurse(left, !vertical, depth - 1, rects);
            recurse(right, !vertical, depth - 1, rects);
        } else {
            let mid = r.min_y + r.height() / 2;
            let top = Rect { max_y: mid, ..r };
            let bottom = Rect { min_y: mid, ..r };
            recurse(top, !vertical, depth - 1, rects);
            recurse(bottom, !vertical, depth - 1, rects);
        }
    }

    recurse(root, true, depth, &mut rects);
    rects
}

/// Paint each tile a random color so the work split can be inspected.
pub fn draw_tile_map<R: Rng>(
    rects: &[Rect],
    width: u32,
    height: u32,
    rng: &mut R,
    path: &Path,
) -> Result<()> {
    let mut img = RgbImage::new(width, height);

    for rect in rects {
        let color = Rgb([
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
        ]);

        for y in rect.min_y..rect.max_y.min(height) {
            for x in rect.min_x..rect.max_x.min(width) {
                img.put_pixel(x, y, color);
            }
        }
    }

    img.save(path)
        .with_context(|| format!("failed to write tile map {}", path.display()))?;
    Ok(())
}
