//! Sphere primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to a sphere centered at origin
///
/// Exact Euclidean distance; negative inside, non-negative outside.
#[inline(always)]
pub fn sdf_sphere(point: Vec3, radius: f32) -> f32 {
    point.length() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_convention() {
        assert!(sdf_sphere(Vec3::ZERO, 0.6) < 0.0);
        assert!(sdf_sphere(Vec3::new(1.0, 0.0, 0.0), 0.6) > 0.0);
    }

    #[test]
    fn test_exact_distance() {
        let d = sdf_sphere(Vec3::new(0.0, -2.0, 0.0), 0.6);
        assert!((d - 1.4).abs() < 1e-6);
        let d = sdf_sphere(Vec3::new(0.3, 0.0, 0.0), 0.6);
        assert!((d + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_surface_is_zero() {
        let p = Vec3::new(0.6, 0.0, 0.0);
        assert!(sdf_sphere(p, 0.6).abs() < 1e-6);
    }
}
