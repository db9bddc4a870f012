//! Torus primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Vectorized Operations**: tube distance through glam Vec2 lengths.
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec3};

/// Signed distance to a torus in the XZ plane centered at origin
///
/// `major_radius` is the ring radius (center to tube center),
/// `minor_radius` the tube radius. The surface meshes to a genus-1
/// solid, which makes it the closed-but-not-spherical case in the
/// extraction tests.
#[inline(always)]
pub fn sdf_torus(point: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(
        Vec2::new(point.x, point.z).length() - major_radius,
        point.y,
    );
    q.length() - minor_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tube_center_is_deepest() {
        let d = sdf_torus(Vec3::new(0.6, 0.0, 0.0), 0.6, 0.25);
        assert!((d + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_ring_axis_is_outside() {
        // The hole: distance from origin to the tube surface
        let d = sdf_torus(Vec3::ZERO, 0.6, 0.25);
        assert!((d - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_surface_is_zero() {
        let d = sdf_torus(Vec3::new(0.85, 0.0, 0.0), 0.6, 0.25);
        assert!(d.abs() < 1e-6);
        let d = sdf_torus(Vec3::new(0.0, 0.25, 0.6), 0.6, 0.25);
        assert!(d.abs() < 1e-6);
    }
}
