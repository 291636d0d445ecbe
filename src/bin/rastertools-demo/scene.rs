use rand::Rng;
use rastertools::point3d::normalize;
use rastertools::{Color, Mat4, PerVertex, Point2D, Point3D, Triangle, multiply_mv};

/// Screen-space triangle plus the attributes shaded across it.
#[derive(Debug, Clone, Copy)]
pub struct SceneTriangle {
    pub tri: Triangle,
    pub colors: PerVertex<Color>,
    pub normals: PerVertex<Point3D>,
    pub uvs: PerVertex<Point2D>,
}

// Counter-clockwise in object space, centred on the origin.
const TEMPLATE: PerVertex<Point2D> = [
    Point2D::new(-0.5, -0.4),
    Point2D::new(0.5, -0.4),
    Point2D::new(0.0, 0.6),
];
const TEMPLATE_UVS: PerVertex<Point2D> = [
    Point2D::new(0.0, 0.0),
    Point2D::new(2.0, 0.0),
    Point2D::new(1.0, 2.0),
];

fn random_unit<R: Rng>(rng: &mut R) -> Point3D {
    normalize(Point3D::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(0.2..1.0),
    ))
}

/// `count` random triangles inside a `width` x `height` screen.
///
/// Roughly one in four is emitted clockwise so back-face culling has
/// something to discard.
pub fn random_scene<R: Rng>(
    rng: &mut R,
    count: usize,
    width: u32,
    height: u32,
) -> Vec<SceneTriangle> {
    let max_size = width.min(height).max(4) as f32 * 0.5;
    (0..count)
        .map(|_| {
            let size = rng.gen_range(1.0..max_size);
            let center = Point3D::new(
                rng.gen_range(0.0..width as f32),
                rng.gen_range(0.0..height as f32),
                rng.gen_range(1.0..100.0),
            );
            let model = Mat4::translation(center)
                * Mat4::scale(Point3D::new(size, size * rng.gen_range(0.5..1.5), 1.0));
            let [a, b, c] = TEMPLATE
                .map(|p| multiply_mv(&model, [p.x, p.y, rng.gen_range(-0.5..0.5), 1.0]));
            let mut scene_tri = SceneTriangle {
                tri: Triangle::new(a, b, c),
                colors: [(); 3].map(|_| Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen())),
                normals: [(); 3].map(|_| random_unit(rng)),
                uvs: TEMPLATE_UVS,
            };
            if rng.gen_bool(0.25) {
                scene_tri.tri = Triangle::new(a, c, b);
                scene_tri.colors.swap(1, 2);
                scene_tri.normals.swap(1, 2);
                scene_tri.uvs.swap(1, 2);
            }
            scene_tri
        })
        .collect()
}
