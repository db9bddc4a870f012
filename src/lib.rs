//! # isoweld
//!
//! **Table-driven marching cubes over signed distance fields, with exact
//! lattice vertex welding.**
//!
//! The kernel samples a signed distance field over a subdivided cube,
//! classifies each cell by the signs of its 8 corners, triangulates it
//! through a 256-case lookup table, and welds vertices shared by adjacent
//! cells in an integer half-voxel lattice so seams need no floating-point
//! tolerance at all.
//!
//! ## Features
//!
//! - **Fields**: composable field trees (sphere, box, torus, plane,
//!   constant, Mandelbulb) with union/intersection/subtraction, smooth
//!   blending, translate/scale and a time-varying pulse
//! - **Plug-ins**: any `Fn(Vec3, f32) -> f32` slots in through [`types::FieldFn`]
//! - **Case table**: shape-validated JSON loading plus a bundled asset
//! - **Extraction**: single-threaded reference sweep and a rayon slab
//!   variant merged by exact lattice keys
//! - **Output**: position/index/normal buffers with winding-derived normals
//!
//! ## Example
//!
//! ```rust
//! use isoweld::prelude::*;
//!
//! // The classic 256-case table ships with the crate
//! let table = CaseTable::bundled();
//!
//! // A sphere of radius 0.6, meshed over a 2x2x2 cube split 8 ways per axis
//! let field = FieldNode::sphere(0.6);
//! let mesh = sdf_to_mesh(table, &field, &GridConfig::new(2.0, 8)).unwrap();
//!
//! assert!(!mesh.is_empty());
//! assert_eq!(mesh.indices.len() % 3, 0);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod types;
pub mod primitives;
pub mod operations;
pub mod eval;
pub mod table;
pub mod mesh;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::eval::eval;
    pub use crate::mesh::{
        corner_to_world, create_mesh, lattice_to_world, sdf_to_mesh, sdf_to_mesh_parallel,
        GridConfig, Mesh, MeshBuilder, MeshError, VertexWelder, CORNER_OFFSETS,
    };
    pub use crate::operations::*;
    pub use crate::primitives::*;
    pub use crate::table::{CaseTable, CaseTriangle, TableError};
    pub use crate::types::{DistanceField, FieldFn, FieldNode};
    pub use crate::VERSION;
    pub use glam::{IVec3, Vec3};
}

// Re-exports for convenience
pub use eval::eval;
pub use mesh::sdf_to_mesh;
pub use table::CaseTable;
pub use types::FieldNode;
