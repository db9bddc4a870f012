//! Core types for isoweld
//!
//! Defines the FieldNode expression tree, the DistanceField capability
//! trait, and the closure adapter used to plug ad-hoc fields into the
//! mesher.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod constructors;

/// A signed distance field, evaluated at a world position and a time.
///
/// The contract mirrors the mesher's expectations:
///
/// - negative distance means the point is inside the surface,
///   non-negative means outside;
/// - the function is pure: total over finite inputs, deterministic, and
///   side-effect free, so it may be called from multiple threads and up
///   to `8 * divide^3` times per build without coordination;
/// - outputs are expected to be finite. A NaN return is a contract
///   violation on the field's side: the mesher does not repair it and
///   classifies such samples as outside (`d < 0` is false for NaN).
pub trait DistanceField {
    /// Signed distance from `point` to the surface at animation time `time`.
    fn evaluate(&self, point: Vec3, time: f32) -> f32;
}

/// Distance field expression node
///
/// Represents a node in a composable field tree. Each node is:
/// - a primitive field (sphere, box, Mandelbulb, ...),
/// - an operation combining two subtrees (union, intersection, ...),
/// - a transform applied to a child subtree, or
/// - a time-varying wrapper around a child subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldNode {
    // === Primitives ===
    /// Sphere with radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },

    /// Axis-aligned box with half-extents
    Box3d {
        /// Half-extents along each axis
        half_extents: Vec3,
    },

    /// Torus in XZ plane with major and minor radius
    Torus {
        /// Distance from center to tube center
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
    },

    /// Infinite plane with normal and distance from origin
    Plane {
        /// Plane normal direction
        normal: Vec3,
        /// Signed distance from origin along normal
        distance: f32,
    },

    /// Uniform field returning the same distance everywhere
    ///
    /// Never crosses zero, so it meshes to nothing; useful as a CSG
    /// identity and in tests.
    Constant {
        /// The constant distance value
        value: f32,
    },

    /// Mandelbulb fractal distance estimator (power 8, 4 iterations)
    ///
    /// The polynomial escape-time estimator used as the numeric
    /// reference field; see [`crate::primitives::sdf_mandelbulb`].
    Mandelbulb,

    // === Operations ===
    /// Union of two fields (minimum distance)
    Union {
        /// First operand
        a: Arc<FieldNode>,
        /// Second operand
        b: Arc<FieldNode>,
    },

    /// Intersection of two fields (maximum distance)
    Intersection {
        /// First operand
        a: Arc<FieldNode>,
        /// Second operand
        b: Arc<FieldNode>,
    },

    /// Subtraction of the second field from the first
    Subtraction {
        /// Base shape
        a: Arc<FieldNode>,
        /// Shape carved out of `a`
        b: Arc<FieldNode>,
    },

    /// Smooth union blending two fields over radius `k`
    SmoothUnion {
        /// First operand
        a: Arc<FieldNode>,
        /// Second operand
        b: Arc<FieldNode>,
        /// Blend radius
        k: f32,
    },

    // === Transforms ===
    /// Child translated by an offset
    Translate {
        /// Transformed subtree
        child: Arc<FieldNode>,
        /// Translation offset
        offset: Vec3,
    },

    /// Child scaled uniformly
    Scale {
        /// Transformed subtree
        child: Arc<FieldNode>,
        /// Uniform scale factor (non-zero)
        factor: f32,
    },

    // === Time-varying ===
    /// Child surface inflated and deflated over time
    ///
    /// Offsets the child's distance by `amplitude * sin(speed * time)`.
    /// The only built-in node that consumes the time parameter.
    Pulse {
        /// Wrapped subtree
        child: Arc<FieldNode>,
        /// Peak distance offset
        amplitude: f32,
        /// Angular speed in radians per time unit
        speed: f32,
    },
}

impl FieldNode {
    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> u32 {
        match self {
            FieldNode::Sphere { .. }
            | FieldNode::Box3d { .. }
            | FieldNode::Torus { .. }
            | FieldNode::Plane { .. }
            | FieldNode::Constant { .. }
            | FieldNode::Mandelbulb => 1,

            FieldNode::Union { a, b }
            | FieldNode::Intersection { a, b }
            | FieldNode::Subtraction { a, b }
            | FieldNode::SmoothUnion { a, b, .. } => 1 + a.node_count() + b.node_count(),

            FieldNode::Translate { child, .. }
            | FieldNode::Scale { child, .. }
            | FieldNode::Pulse { child, .. } => 1 + child.node_count(),
        }
    }
}

impl DistanceField for FieldNode {
    #[inline]
    fn evaluate(&self, point: Vec3, time: f32) -> f32 {
        crate::eval::eval(self, point, time)
    }
}

/// Adapter implementing [`DistanceField`] for plain functions and closures
///
/// The mesher treats every field as an opaque plug-in; this wrapper is how
/// an ad-hoc `Fn(Vec3, f32) -> f32` becomes one:
///
/// ```rust
/// use isoweld::types::{DistanceField, FieldFn};
/// use glam::Vec3;
///
/// let sphere = FieldFn::new(|p: Vec3, _t: f32| p.length() - 0.6);
/// assert!(sphere.evaluate(Vec3::ZERO, 0.0) < 0.0);
/// ```
#[derive(Clone, Copy)]
pub struct FieldFn<F>(F);

impl<F> FieldFn<F>
where
    F: Fn(Vec3, f32) -> f32,
{
    /// Wrap a function or closure as a distance field
    #[must_use]
    #[inline]
    pub fn new(f: F) -> Self {
        FieldFn(f)
    }
}

impl<F> DistanceField for FieldFn<F>
where
    F: Fn(Vec3, f32) -> f32,
{
    #[inline]
    fn evaluate(&self, point: Vec3, time: f32) -> f32 {
        (self.0)(point, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let node = FieldNode::sphere(1.0)
            .union(FieldNode::box3d(1.0, 1.0, 1.0))
            .translate(0.5, 0.0, 0.0);
        assert_eq!(node.node_count(), 4);
    }

    #[test]
    fn test_closure_adapter() {
        let field = FieldFn::new(|p: Vec3, _t: f32| p.length() - 1.0);
        assert!(field.evaluate(Vec3::ZERO, 0.0) < 0.0);
        assert!(field.evaluate(Vec3::new(2.0, 0.0, 0.0), 0.0) > 0.0);
    }

    #[test]
    fn test_time_reaches_closures() {
        let field = FieldFn::new(|_p: Vec3, t: f32| t - 1.0);
        assert!(field.evaluate(Vec3::ZERO, 0.0) < 0.0);
        assert!(field.evaluate(Vec3::ZERO, 2.0) > 0.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let node = FieldNode::sphere(0.6).smooth_union(FieldNode::torus(0.5, 0.2), 0.1);
        let json = serde_json::to_string(&node).unwrap();
        let back: FieldNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_count(), node.node_count());
    }
}
