//! Spherical polygon area via the excess formula.
//!
//! A polygon on the unit sphere is an ordered sequence of unit vectors; its
//! area is the spherical excess, the sum of its interior dihedral angles
//! minus `(n - 2)π`. The sign is meaningful: polygons whose vertices run
//! counter-clockwise around their outward mean direction (the order the
//! circular sorter produces) have positive area, and the sign distinguishes
//! convex from concave curvature.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector3;

use super::{angle, normalized_or_zero, sort_around_mean};

/// Component-wise tolerance for collapsing duplicate polygon vertices.
const DEDUP_EPS: f64 = 1e-5;

/// An ordered polygon on the unit sphere.
///
/// Construction drops duplicate vertices (component-wise tolerance `1e-5`,
/// first occurrence kept); a polygon left with fewer than three unique
/// vertices is degenerate and has area 0.
#[derive(Debug, Clone)]
pub struct SpherePolygon {
    vertices: Vec<Vector3<f64>>,
}

impl SpherePolygon {
    /// Build a polygon from vertices in traversal order.
    pub fn new(vertices: Vec<Vector3<f64>>) -> Self {
        let mut unique: Vec<Vector3<f64>> = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            if !unique.iter().any(|u| approx_equal(u, &vertex)) {
                unique.push(vertex);
            }
        }
        Self { vertices: unique }
    }

    /// The unique vertices in traversal order.
    #[inline]
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    /// Whether the polygon collapsed below three unique vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// The signed spherical area of the polygon.
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let angles = self.internal_angles();
        let excess: f64 = angles.iter().sum();
        excess - (angles.len() as f64 - 2.0) * PI
    }

    /// Interior dihedral angles at each vertex, in radians.
    ///
    /// Each polygon edge `v_i -> v_{i+1}` spans a great-circle plane; the
    /// interior angle at a vertex is the dihedral angle between the planes of
    /// the two edges meeting there, measured on the polygon's inside and
    /// allowed to be reflex.
    pub fn internal_angles(&self) -> Vec<f64> {
        if self.is_degenerate() {
            return Vec::new();
        }
        let n = self.vertices.len();

        let mut normals = Vec::with_capacity(n);
        let mut directions = Vec::with_capacity(n);
        for i in 0..n {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % n];
            normals.push(normalized_or_zero(&(-v0).cross(&(v1 - v0))));
            directions.push(v0 - v1);
        }

        (0..n)
            .map(|i| {
                let next = (i + 1) % n;
                dihedral(&normals[i], &normals[next], &directions[next])
            })
            .collect()
    }
}

/// Interior angle between two consecutive great-circle planes.
///
/// `dv` is the stored direction of the second plane's edge; its side of the
/// first plane decides whether the interior angle is reflex.
fn dihedral(n0: &Vector3<f64>, n1: &Vector3<f64>, dv: &Vector3<f64>) -> f64 {
    if n0.dot(dv) >= 0.0 {
        angle(n0, &-n1)
    } else {
        TAU - angle(n0, &-n1)
    }
}

fn approx_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    (a.x - b.x).abs() < DEDUP_EPS && (a.y - b.y).abs() < DEDUP_EPS && (a.z - b.z).abs() < DEDUP_EPS
}

/// Area of the spherical triangle spanned by three unit vectors.
///
/// Uses the closed triangle form whose dihedral angles cannot be reflex, so
/// the result does not depend on traversal orientation. Degenerate triangles
/// give 0 excess up to rounding.
pub fn triangle_area(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    let normal_a = normalized_or_zero(&(-b).cross(&(c - b)));
    let normal_b = normalized_or_zero(&(-c).cross(&(a - c)));
    let normal_c = normalized_or_zero(&(-a).cross(&(b - a)));

    let angle_a = angle(&normal_b, &-normal_c);
    let angle_b = angle(&normal_c, &-normal_a);
    let angle_c = angle(&normal_a, &-normal_b);

    angle_a + angle_b + angle_c - PI
}

/// Area of the spherical quad spanned by four unit vectors.
///
/// The corners are circularly sorted around their mean direction before the
/// excess is evaluated, so the result is the proper (positive) area of the
/// spanned quad regardless of the order the corners arrive in.
pub fn quad_area(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>, d: &Vector3<f64>) -> f64 {
    SpherePolygon::new(sort_around_mean(&[*a, *b, *c, *d])).area()
}
