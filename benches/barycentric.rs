use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rastertools::{
    Point2D, Point3D, TextureBuffer, Triangle, compute_barycentric_coordinate, interpolate_depth,
    is_inside_triangle, sample_texture,
};

fn bench_per_sample(c: &mut Criterion) {
    let tri = Triangle::new(
        Point3D::new(3.0, 2.0, 0.1),
        Point3D::new(250.0, 40.0, 0.5),
        Point3D::new(90.0, 230.0, 0.9),
    );
    let depths = tri.depths();

    c.bench_function("barycentric_256x256", |b| {
        b.iter(|| {
            let mut covered = 0u32;
            let mut depth_sum = 0.0f32;
            for y in 0..256 {
                for x in 0..256 {
                    let p = Point2D::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coord = compute_barycentric_coordinate(black_box(&tri), p);
                    if is_inside_triangle(coord) {
                        covered += 1;
                        depth_sum += interpolate_depth(coord, &depths);
                    }
                }
            }
            black_box((covered, depth_sum))
        })
    });

    let texels = vec![128u8; 256 * 256 * 4];
    let texture = TextureBuffer::new(&texels, 256, 256, 4).unwrap();
    c.bench_function("sample_texture_wrapped", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..4096 {
                let t = i as f32 * 0.013;
                acc += sample_texture(black_box(&texture), Point2D::new(t, -t)).x;
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_per_sample);
criterion_main!(benches);
