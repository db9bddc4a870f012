//! Plane primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an infinite plane
///
/// `normal` must be normalized; `distance` is the plane's offset from
/// the origin along it. Negative on the side the normal points away
/// from. An open surface: meshing it clips against the sampled cube, so
/// the resulting sheet has boundary edges by construction.
#[inline(always)]
pub fn sdf_plane(point: Vec3, normal: Vec3, distance: f32) -> f32 {
    point.dot(normal) - distance
}
