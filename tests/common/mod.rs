//! Common test helpers for isoweld integration tests
//!
//! Author: Moroya Sakamoto

use isoweld::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Standard test fields
// ============================================================================

/// Sphere of radius 0.6, the canonical meshing scenario
pub fn test_sphere() -> FieldNode {
    FieldNode::sphere(0.6)
}

/// Axis-aligned box that fits the unit-ish grid
#[allow(dead_code)]
pub fn test_box() -> FieldNode {
    FieldNode::box3d(1.0, 0.7, 0.85)
}

/// Torus in the XZ plane
#[allow(dead_code)]
pub fn test_torus() -> FieldNode {
    FieldNode::torus(0.55, 0.2)
}

/// Multi-operation field for stress testing
#[allow(dead_code)]
pub fn test_blend() -> FieldNode {
    let base = FieldNode::sphere(0.55);
    let slab = FieldNode::box3d(1.1, 0.4, 1.1).translate(0.0, -0.35, 0.0);
    let ring = FieldNode::torus(0.5, 0.12).translate(0.0, 0.3, 0.0);
    base.smooth_union(slab, 0.2).union(ring)
}

// ============================================================================
// Mesh topology helpers
// ============================================================================

/// Count how many triangles use each undirected edge
#[allow(dead_code)]
pub fn undirected_edge_counts(mesh: &Mesh) -> HashMap<(u32, u32), u32> {
    let mut counts = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Every undirected edge bounded by exactly two triangles
#[allow(dead_code)]
pub fn assert_closed(mesh: &Mesh, label: &str) {
    for ((a, b), count) in undirected_edge_counts(mesh) {
        assert_eq!(
            count, 2,
            "{}: edge ({}, {}) bounds {} triangles, expected 2",
            label, a, b, count
        );
    }
}

/// Each directed edge appears exactly once, so winding is globally consistent
#[allow(dead_code)]
pub fn assert_consistent_winding(mesh: &Mesh, label: &str) {
    let mut seen = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *seen.entry((a, b)).or_insert(0u32) += 1;
        }
    }
    for ((a, b), count) in seen {
        assert_eq!(
            count, 1,
            "{}: directed edge ({}, {}) used {} times, expected 1",
            label, a, b, count
        );
    }
}

/// V - E + F over the welded mesh
#[allow(dead_code)]
pub fn euler_characteristic(mesh: &Mesh) -> i64 {
    let v = mesh.vertex_count() as i64;
    let e = undirected_edge_counts(mesh).len() as i64;
    let f = mesh.triangle_count() as i64;
    v - e + f
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
#[allow(dead_code)]
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}
