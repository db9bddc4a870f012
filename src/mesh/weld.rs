//! Exact lattice vertex welding (Deep Fried Edition)
//!
//! Vertices arrive as integer lattice coordinates in half-voxel units, so two
//! cells emitting the same edge midpoint produce the same key and weld to one
//! mesh vertex by plain `HashMap` lookup. No float tolerance, no quantization.
//!
//! # Deep Fried Optimizations
//! - **Entry API**: one hash per weld, insert-or-get in a single probe.
//! - **Index Remap Merge**: slab builders merge by rewelding coordinates and
//!   remapping indices, never by scanning triangles.
//!
//! Author: Moroya Sakamoto

use glam::IVec3;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Deduplicates lattice-coordinate vertices into sequential mesh indices
///
/// The first time a coordinate is welded it receives the next free index;
/// later welds of the same coordinate return that index. First-seen order
/// defines the final vertex array order.
#[derive(Debug, Clone, Default)]
pub struct VertexWelder {
    map: HashMap<IVec3, u32>,
    coords: Vec<IVec3>,
}

impl VertexWelder {
    /// Create an empty welder
    #[must_use]
    pub fn new() -> Self {
        VertexWelder::default()
    }

    /// Insert-or-get the mesh index for a global lattice coordinate
    #[inline]
    pub fn weld(&mut self, coord: IVec3) -> u32 {
        match self.map.entry(coord) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let index = self.coords.len() as u32;
                e.insert(index);
                self.coords.push(coord);
                index
            }
        }
    }

    /// Number of distinct welded vertices
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True when nothing has been welded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Welded coordinates in index order
    #[must_use]
    pub fn coords(&self) -> &[IVec3] {
        &self.coords
    }
}

/// Accumulates welded triangles during a grid sweep
///
/// Owns the vertex map and the index list; `push_triangle` is the only write
/// path, so winding order survives exactly as pushed.
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    welder: VertexWelder,
    indices: Vec<u32>,
}

impl MeshBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        MeshBuilder::default()
    }

    /// Weld three global lattice coordinates and append one triangle
    ///
    /// Vertex order is the winding order and determines the outward normal.
    #[inline]
    pub fn push_triangle(&mut self, a: IVec3, b: IVec3, c: IVec3) {
        let ia = self.welder.weld(a);
        let ib = self.welder.weld(b);
        let ic = self.welder.weld(c);
        self.indices.push(ia);
        self.indices.push(ib);
        self.indices.push(ic);
    }

    /// Fold another builder into this one
    ///
    /// Rewelds the other builder's coordinates by exact key equality and
    /// remaps its indices, so seam vertices shared between the two collapse
    /// to one. Triangle winding is untouched.
    pub fn merge(&mut self, other: MeshBuilder) {
        let remap: Vec<u32> = other
            .welder
            .coords
            .iter()
            .map(|&coord| self.welder.weld(coord))
            .collect();
        self.indices
            .extend(other.indices.iter().map(|&i| remap[i as usize]));
    }

    /// Number of distinct welded vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.welder.len()
    }

    /// Number of accumulated triangles
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Welded coordinates in index order
    #[must_use]
    pub fn coords(&self) -> &[IVec3] {
        self.welder.coords()
    }

    /// Triangle indices, three per triangle
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }
}
