//! Mesh extraction for distance fields (Deep Fried Edition)
//!
//! Table-driven marching cubes over a cube-shaped sampling grid. Triangle
//! vertices live on an integer half-voxel lattice, so vertices shared by
//! adjacent cells weld by exact key match with no epsilon comparisons, and
//! internal seams never produce duplicates.
//!
//! # Deep Fried Optimizations
//! - **X-Slab Parallelization**: the parallel build processes each X-layer
//!   independently with Rayon, then welds the slabs together in order.
//! - **Exact Welding**: `HashMap<IVec3, u32>` lookups, no float tolerance.
//! - **Forced Inlining**: `#[inline(always)]` on hot-path helpers.
//!
//! Author: Moroya Sakamoto

mod extract;
mod weld;

pub use extract::{
    corner_to_world, create_mesh, lattice_to_world, sdf_to_mesh, sdf_to_mesh_parallel,
    GridConfig, CORNER_OFFSETS,
};
pub use weld::{MeshBuilder, VertexWelder};

use glam::Vec3;
use thiserror::Error;

/// Mesh build configuration errors
#[derive(Error, Debug)]
pub enum MeshError {
    /// Grid edge length must be positive and finite
    #[error("invalid grid size: {0} (must be positive and finite)")]
    InvalidSize(f32),

    /// Per-axis subdivision count must be at least 1
    #[error("invalid subdivision count: {0} (must be at least 1)")]
    InvalidDivide(u32),
}

/// Indexed triangle mesh with per-vertex normals
///
/// `positions[i]` is the world position of welded vertex `i`; `indices` holds
/// vertex-index triples in winding order; `normals` parallels `positions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// World-space vertex positions, indexed by welded vertex id
    pub positions: Vec<Vec3>,
    /// Triangle vertex indices, three per triangle, winding preserved
    pub indices: Vec<u32>,
    /// Per-vertex normals, parallel to `positions`
    pub normals: Vec<Vec3>,
}

impl Mesh {
    /// Create an empty mesh
    #[must_use]
    pub fn new() -> Self {
        Mesh::default()
    }

    /// Number of welded vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when the mesh holds no triangles and no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.indices.is_empty()
    }

    /// Drop all buffers, keeping allocations for reuse
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.normals.clear();
    }

    /// Recompute per-vertex normals from triangle winding
    ///
    /// Accumulates the cross product of each triangle's edge vectors (in
    /// stored winding order, so the sign follows the winding) into the
    /// triangle's three vertices, then normalizes. Larger triangles weigh in
    /// proportionally since the cross product scales with area. A vertex
    /// referenced by no triangle, or only by degenerate ones, keeps a zero
    /// normal.
    pub fn recalculate_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);

        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = self.positions[i0];
            let face = (self.positions[i1] - p0).cross(self.positions[i2] - p0);
            self.normals[i0] += face;
            self.normals[i1] += face;
            self.normals[i2] += face;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}
