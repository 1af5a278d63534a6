//! Microbenchmarks for construction and point location on the Kuhn cube.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use tetmesh::prelude::*;

fn cube_vertices() -> Vec<Point3<f64>> {
    (0..8)
        .map(|v| {
            Point3::new(
                f64::from(v & 1),
                f64::from((v >> 1) & 1),
                f64::from((v >> 2) & 1),
            )
        })
        .collect()
}

fn cube_edges() -> Vec<Edge> {
    [
        (0, 1),
        (0, 2),
        (0, 4),
        (1, 3),
        (1, 5),
        (2, 3),
        (2, 6),
        (4, 5),
        (4, 6),
        (3, 7),
        (5, 7),
        (6, 7),
        (0, 3),
        (0, 5),
        (0, 6),
        (1, 7),
        (2, 7),
        (4, 7),
        (0, 7),
    ]
    .into_iter()
    .map(|(a, b)| Edge::new(a, b).unwrap())
    .collect()
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("derive_cube_complex", |b| {
        b.iter(|| {
            SimplicialComplex::from_vertices_and_edges(
                black_box(cube_vertices()),
                black_box(cube_edges()),
            )
            .unwrap()
        });
    });
}

fn bench_point_location(c: &mut Criterion) {
    let complex =
        SimplicialComplex::from_vertices_and_edges(cube_vertices(), cube_edges()).unwrap();
    let samples: Vec<Point3<f64>> = (0..64)
        .map(|i| {
            let t = f64::from(i) / 64.0;
            Point3::new(0.05 + 0.9 * t, 0.95 - 0.9 * t, 0.07 + 0.86 * t)
        })
        .collect();

    c.bench_function("locate_cell_cube", |b| {
        b.iter(|| {
            for p in &samples {
                black_box(complex.locate_cell(black_box(p)));
            }
        });
    });
}

criterion_group!(benches, bench_construction, bench_point_location);
criterion_main!(benches);
