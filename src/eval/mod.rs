//! Field Evaluation (Deep Fried Edition)
//!
//! Functions for evaluating field trees at points.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: `eval` is marked `#[inline]` to allow recursion unrolling by LLVM.
//! - **Direct Dispatch**: Primitives are called directly without wrapper overhead.
//!
//! Author: Moroya Sakamoto

use crate::operations::*;
use crate::primitives::*;
use crate::types::FieldNode;
use glam::Vec3;

/// Evaluate a field tree at a single point (Deep Fried)
///
/// Recursively traverses the tree and computes the signed distance.
/// Marked `#[inline]` to encourage the compiler to inline small tree traversals.
///
/// # Arguments
/// * `node` - The field tree root
/// * `point` - Point to evaluate
/// * `time` - Animation clock in seconds, threaded through to time-varying nodes
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval(node: &FieldNode, point: Vec3, time: f32) -> f32 {
    match node {
        // === Primitives (Leaf Nodes) ===
        // These are the hot paths at the bottom of the recursion
        FieldNode::Sphere { radius } => sdf_sphere(point, *radius),
        FieldNode::Box3d { half_extents } => sdf_box3d(point, *half_extents),
        FieldNode::Torus {
            major_radius,
            minor_radius,
        } => sdf_torus(point, *major_radius, *minor_radius),
        FieldNode::Plane { normal, distance } => sdf_plane(point, *normal, *distance),
        FieldNode::Mandelbulb => sdf_mandelbulb(point),
        FieldNode::Constant { value } => *value,

        // === Operations ===
        // Recurse first, then combine. Compiler can reorder these instruction streams.
        FieldNode::Union { a, b } => {
            let d1 = eval(a, point, time);
            let d2 = eval(b, point, time);
            sdf_union(d1, d2)
        }
        FieldNode::Intersection { a, b } => {
            let d1 = eval(a, point, time);
            let d2 = eval(b, point, time);
            sdf_intersection(d1, d2)
        }
        FieldNode::Subtraction { a, b } => {
            let d1 = eval(a, point, time);
            let d2 = eval(b, point, time);
            sdf_subtraction(d1, d2)
        }
        FieldNode::SmoothUnion { a, b, k } => {
            let d1 = eval(a, point, time);
            let d2 = eval(b, point, time);
            sdf_smooth_union(d1, d2, *k)
        }

        // === Transforms ===
        // Transform point, then recurse.
        FieldNode::Translate { child, offset } => {
            // Direct inline: point - offset (no function call)
            eval(child, point - *offset, time)
        }
        FieldNode::Scale { child, factor } => {
            // Division then multiply result
            eval(child, point / *factor, time) * factor
        }

        // === Modulation ===
        // Time-varying surface offset; the only node that consumes the clock.
        FieldNode::Pulse {
            child,
            amplitude,
            speed,
        } => eval(child, point, time) + *amplitude * (*speed * time).sin(),
    }
}
