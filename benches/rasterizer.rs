use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastly::bench::{
    EdgeFunctionRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex, TexCoord,
    Triangle,
};
use rastly::Texture;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffers() -> (Vec<u32>, Vec<f32>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![1.0f32; size])
}

fn vertex(x: i32, y: i32, w: f32) -> ScreenVertex {
    ScreenVertex::new(x, y, 0.0, w)
}

fn small_triangle() -> Triangle {
    Triangle::solid(
        [
            vertex(100, 100, 2.0),
            vertex(120, 100, 2.5),
            vertex(110, 120, 3.0),
        ],
        0xFFFF0000,
    )
}

fn medium_triangle() -> Triangle {
    Triangle::solid(
        [
            vertex(100, 100, 2.0),
            vertex(300, 100, 4.0),
            vertex(200, 300, 6.0),
        ],
        0xFFFF0000,
    )
}

fn large_triangle() -> Triangle {
    Triangle::solid(
        [
            vertex(50, 50, 2.0),
            vertex(750, 100, 8.0),
            vertex(400, 550, 5.0),
        ],
        0xFFFF0000,
    )
}

fn checkerboard_texture() -> Texture {
    let data: Vec<u32> = (0..64 * 64)
        .map(|i| {
            let (x, y) = (i % 64, i / 64);
            if (x / 8 + y / 8) % 2 == 0 {
                0xFFFFFFFF
            } else {
                0xFF000000
            }
        })
        .collect();
    Texture::from_raw(data, 64, 64)
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.fill(1.0);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb, None);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("edge_function", name),
            &triangle,
            |b, tri| {
                let (mut color, mut depth) = create_buffers();
                b.iter(|| {
                    depth.fill(1.0);
                    let mut fb =
                        FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                    edge_fn.fill_triangle(black_box(tri), &mut fb, None);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_textured_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("textured_triangle");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();
    let texture = checkerboard_texture();

    let triangle = Triangle::new(
        [
            vertex(100, 100, 2.0),
            vertex(300, 100, 4.0),
            vertex(200, 300, 6.0),
        ],
        [
            TexCoord::new(0.0, 0.0),
            TexCoord::new(1.0, 0.0),
            TexCoord::new(0.5, 1.0),
        ],
        0,
    );

    group.bench_function("scanline", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(1.0);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            scanline.fill_triangle(black_box(&triangle), &mut fb, Some(&texture));
        });
    });

    group.bench_function("edge_function", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(1.0);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            edge_fn.fill_triangle(black_box(&triangle), &mut fb, Some(&texture));
        });
    });

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();

    // Grid of small triangles at staggered depths
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                let w = 2.0 + ((row + col) % 5) as f32;
                Triangle::solid(
                    [
                        vertex(x, y, w),
                        vertex(x + 35, y, w),
                        vertex(x + 17, y + 25, w),
                    ],
                    0xFFFF0000,
                )
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(1.0);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb, None);
            }
        });
    });

    group.bench_function("edge_function_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(1.0);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                edge_fn.fill_triangle(black_box(tri), &mut fb, None);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_textured_triangle,
    benchmark_many_triangles
);
criterion_main!(benches);
