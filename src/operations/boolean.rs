//! Sharp CSG operations for distance fields (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: `#[inline(always)]` guarantees no call overhead.
//!
//! Author: Moroya Sakamoto

/// Union of two distances (minimum)
#[inline(always)]
pub fn sdf_union(d1: f32, d2: f32) -> f32 {
    d1.min(d2)
}

/// Intersection of two distances (maximum)
#[inline(always)]
pub fn sdf_intersection(d1: f32, d2: f32) -> f32 {
    d1.max(d2)
}

/// Subtraction of B from A: `max(d1, -d2)`
#[inline(always)]
pub fn sdf_subtraction(d1: f32, d2: f32) -> f32 {
    d1.max(-d2)
}
