//! Smooth blending for distance fields (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Branchless**: the `k = 0` guard is a single `max`, no branch.
//! - **Forced Inlining**: `#[inline(always)]` guarantees no call overhead.
//!
//! Author: Moroya Sakamoto

/// Polynomial smooth minimum
///
/// Quadratic falloff over blend radius `k`; degenerates to a plain
/// minimum as `k` approaches zero. `k` is clamped to a small epsilon so
/// a zero radius stays well-defined.
#[inline(always)]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    let k = k.max(1e-10);
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

/// Smooth union of two distances
#[inline(always)]
pub fn sdf_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_min(d1, d2, k)
}
