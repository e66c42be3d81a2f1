//! Benchmarks for the Gauss-area engine.

use criterion::{criterion_group, criterion_main, Criterion};
use gaussmap::prelude::*;
use nalgebra::Point3;
use std::collections::HashMap;

/// Icosphere with `subdivisions` rounds of midpoint subdivision.
fn create_icosphere(subdivisions: usize) -> MeshSnapshot {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = 1.0 / (1.0 + phi * phi).sqrt();

    let mut vertices = vec![
        Point3::new(-1.0, phi, 0.0) * scale,
        Point3::new(1.0, phi, 0.0) * scale,
        Point3::new(-1.0, -phi, 0.0) * scale,
        Point3::new(1.0, -phi, 0.0) * scale,
        Point3::new(0.0, -1.0, phi) * scale,
        Point3::new(0.0, 1.0, phi) * scale,
        Point3::new(0.0, -1.0, -phi) * scale,
        Point3::new(0.0, 1.0, -phi) * scale,
        Point3::new(phi, 0.0, -1.0) * scale,
        Point3::new(phi, 0.0, 1.0) * scale,
        Point3::new(-phi, 0.0, -1.0) * scale,
        Point3::new(-phi, 0.0, 1.0) * scale,
    ];

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        let mut new_faces = Vec::new();
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();

        for face in &faces {
            let mut mids = [0u32; 3];
            for i in 0..3 {
                let v0 = face[i];
                let v1 = face[(i + 1) % 3];
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };

                mids[i] = *midpoints.entry(key).or_insert_with(|| {
                    let mid =
                        (vertices[v0 as usize].coords + vertices[v1 as usize].coords) / 2.0;
                    vertices.push(Point3::from(mid.normalize()));
                    (vertices.len() - 1) as u32
                });
            }

            new_faces.push([face[0], mids[0], mids[2]]);
            new_faces.push([face[1], mids[1], mids[0]]);
            new_faces.push([face[2], mids[2], mids[1]]);
            new_faces.push([mids[0], mids[1], mids[2]]);
        }

        faces = new_faces;
    }

    let indices: Vec<u32> = faces.into_iter().flatten().collect();
    MeshSnapshot::from_triangles(vertices, indices).unwrap()
}

fn bench_topology(c: &mut Criterion) {
    let snapshot = create_icosphere(3);

    c.bench_function("topology_icosphere_3", |b| {
        b.iter(|| Topology::build(&snapshot));
    });
}

fn bench_gauss_area(c: &mut Criterion) {
    let small = create_icosphere(2);
    let large = create_icosphere(3);

    c.bench_function("gauss_area_icosphere_2", |b| {
        b.iter(|| compute_gauss_area(&small));
    });

    c.bench_function("gauss_area_icosphere_3", |b| {
        b.iter(|| compute_gauss_area(&large));
    });

    c.bench_function("gauss_area_icosphere_3_sequential", |b| {
        b.iter(|| compute_gauss_area_sequential(&large));
    });
}

criterion_group!(benches, bench_topology, bench_gauss_area);
criterion_main!(benches);
