// External crates
use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

// STD library
use std::path::PathBuf;
use std::time::Instant;

// Internal modules
mod scene;
mod screen;
mod tiles;

// Internal imports
use crate::scene::{SceneTriangle, random_scene};
use crate::screen::ScreenSpace;
use crate::tiles::{compute_subdivisions, draw_tile_map, subdivide};
use rastertools::geometry::DEGENERATE_AREA_EPSILON;
use rastertools::point3d::{dot3, normalize};
use rastertools::{
    Color, Point2D, Point3D, Texture, TextureBuffer, color_to_rgba8,
    compute_barycentric_coordinate, compute_bounding_box, compute_signed_area, interpolate,
    interpolate_color, interpolate_depth, interpolate_vector, is_inside_triangle, sample_texture,
};

/// Render a random triangle scene with the rastertools primitives.
#[derive(Debug, Parser)]
#[command(name = "rastertools-demo", version, about)]
struct Args {
    /// Output image width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Number of triangles in the scene
    #[arg(short = 'n', long, default_value_t = 500)]
    triangles: usize,

    /// Seed for the scene generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads (defaults to the number of logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Modulate vertex colors with this texture
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Discard clockwise (negative area) triangles
    #[arg(long)]
    cull_back: bool,

    /// Also write the tile split as an image
    #[arg(long)]
    tile_map: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn shade_pixel(color: Color, normal: Point3D, light: Point3D) -> Color {
    let intensity = (dot3(normalize(normal), light) + 1.0) * 0.5;
    color * intensity
}

/// Rasterize every triangle into one tile. Returns the number of fragments written.
fn rasterize_tile(
    tile: &mut ScreenSpace,
    triangles: &[SceneTriangle],
    texture: Option<&TextureBuffer<'_>>,
    screen_width: u32,
    screen_height: u32,
    cull_back: bool,
    light: Point3D,
) -> u64 {
    let mut fragments = 0;
    for scene_tri in triangles {
        let tri = &scene_tri.tri;
        let area = compute_signed_area(tri);
        // Degenerate triangles would turn every weight into NaN
        if area.abs() <= DEGENERATE_AREA_EPSILON || (cull_back && area < 0.0) {
            continue;
        }
        let aabb = compute_bounding_box(tri);
        let Some(bounds) = aabb.pixel_bounds(screen_width, screen_height) else {
            continue;
        };
        let depths = tri.depths();
        // Bounding box intersected with the tile, half-open
        let (start_x, end_x) = (
            bounds.min_x.max(tile.rect.min_x),
            (bounds.max_x + 1).min(tile.rect.max_x),
        );
        let (start_y, end_y) = (
            bounds.min_y.max(tile.rect.min_y),
            (bounds.max_y + 1).min(tile.rect.max_y),
        );
        for y in start_y..end_y {
            for x in start_x..end_x {
                let p = Point2D::new(x as f32 + 0.5, y as f32 + 0.5);
                let coord = compute_barycentric_coordinate(tri, p);
                if !is_inside_triangle(coord) {
                    continue;
                }
                let depth = interpolate_depth(coord, &depths);
                if depth > tile.get_depth(x, y) {
                    continue;
                }
                tile.set_depth(x, y, depth);

                let mut color = interpolate_color(coord, &scene_tri.colors);
                if let Some(texture) = texture {
                    let uv = interpolate(coord, &scene_tri.uvs);
                    let texel = sample_texture(texture, uv);
                    color = Color::new(color.x * texel.x, color.y * texel.y, color.z * texel.z);
                }
                let normal = interpolate_vector(coord, &scene_tri.normals);
                tile.set_pixel(x, y, color_to_rgba8(shade_pixel(color, normal, light)));
                fragments += 1;
            }
        }
    }
    fragments
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    log::debug!("{:?}", args);
    anyhow::ensure!(args.width > 0 && args.height > 0, "resolution must be non-zero");

    let cores = args.threads.unwrap_or_else(num_cpus::get).max(1);
    log::info!("Rendering {}x{} with {} threads", args.width, args.height, cores);

    // Build thread pool based on number of cores
    rayon::ThreadPoolBuilder::new()
        .num_threads(cores)
        .build_global()
        .context("failed to build thread pool")?;

    // Additional depth so threads can steal work if there are regions onscreen with less geometry
    let depth = compute_subdivisions(cores);
    let rects = subdivide(args.width, args.height, depth + 1);
    log::info!("Split screen into {} tiles", rects.len());

    let mut rng = StdRng::seed_from_u64(args.seed);
    if let Some(path) = &args.tile_map {
        draw_tile_map(&rects, args.width, args.height, &mut rng, path)?;
        log::info!("Saved tile map to {}", path.display());
    }

    let texture = match &args.texture {
        Some(path) => {
            let texture = Texture::load(path)
                .with_context(|| format!("failed to load texture {}", path.display()))?;
            log::info!(
                "Loaded texture {} ({}x{})",
                path.display(),
                texture.width(),
                texture.height()
            );
            Some(texture)
        }
        None => None,
    };
    let texture_view = texture.as_ref().map(Texture::view);

    let triangles = random_scene(&mut rng, args.triangles, args.width, args.height);
    let light = normalize(Point3D::new(-1.0, -1.0, 1.0));

    let mut tile_buffers: Vec<ScreenSpace> =
        rects.iter().map(|rect| ScreenSpace::for_rect(*rect)).collect();
    for tile in &mut tile_buffers {
        tile.clear(0, 0, 0, 255);
    }

    let raster_start = Instant::now();
    let fragments: u64 = tile_buffers
        .par_iter_mut()
        .map(|tile| {
            rasterize_tile(
                tile,
                &triangles,
                texture_view.as_ref(),
                args.width,
                args.height,
                args.cull_back,
                light,
            )
        })
        .sum();
    let raster_time = raster_start.elapsed();

    let merge_start = Instant::now();
    let mut screen = ScreenSpace::new(args.width, args.height);
    for tile in &tile_buffers {
        screen.blit(tile);
    }
    let merge_time = merge_start.elapsed();

    log::info!(
        "Rasterized {} triangles ({} fragments) in {:.2?}, merged in {:.2?}",
        triangles.len(),
        fragments,
        raster_time,
        merge_time
    );

    screen.save_png(&args.output)?;
    log::info!("Saved {}", args.output.display());
    Ok(())
}
