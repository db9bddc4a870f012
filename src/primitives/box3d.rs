//! Box primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Branchless Logic**: interior/exterior combined through max/min.
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an axis-aligned box centered at origin
///
/// `half_extents` is the half-size per axis. Exact both inside and
/// outside, including at edges and corners.
#[inline(always)]
pub fn sdf_box3d(point: Vec3, half_extents: Vec3) -> f32 {
    let q = point.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_deepest() {
        let d = sdf_box3d(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        assert!((d + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_distance() {
        let h = Vec3::splat(0.5);
        let d = sdf_box3d(Vec3::new(1.5, 0.0, 0.0), h);
        assert!((d - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_distance() {
        let h = Vec3::splat(1.0);
        let d = sdf_box3d(Vec3::new(2.0, 2.0, 2.0), h);
        assert!((d - 3.0f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_surface_is_zero() {
        let h = Vec3::new(0.5, 0.25, 0.75);
        assert!(sdf_box3d(Vec3::new(0.5, 0.0, 0.0), h).abs() < 1e-6);
        assert!(sdf_box3d(Vec3::new(0.0, 0.25, 0.0), h).abs() < 1e-6);
    }
}
