//! Builder constructors for FieldNode
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use std::sync::Arc;

use super::FieldNode;

impl FieldNode {
    // === Primitive constructors ===

    /// Create a sphere with the given radius
    #[must_use]
    #[inline]
    pub fn sphere(radius: f32) -> Self {
        FieldNode::Sphere { radius }
    }

    /// Create an axis-aligned box with the given dimensions
    #[must_use]
    #[inline]
    pub fn box3d(width: f32, height: f32, depth: f32) -> Self {
        FieldNode::Box3d {
            half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5),
        }
    }

    /// Create a torus in the XZ plane
    #[must_use]
    #[inline]
    pub fn torus(major_radius: f32, minor_radius: f32) -> Self {
        FieldNode::Torus {
            major_radius,
            minor_radius,
        }
    }

    /// Create an infinite plane
    #[must_use]
    #[inline]
    pub fn plane(normal: Vec3, distance: f32) -> Self {
        FieldNode::Plane {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Create a uniform field with the same distance everywhere
    #[must_use]
    #[inline]
    pub fn constant(value: f32) -> Self {
        FieldNode::Constant { value }
    }

    /// Create the Mandelbulb reference field
    #[must_use]
    #[inline]
    pub fn mandelbulb() -> Self {
        FieldNode::Mandelbulb
    }

    // === Operation methods ===

    /// Union with another field
    #[inline]
    pub fn union(self, other: FieldNode) -> Self {
        FieldNode::Union {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Intersection with another field
    #[inline]
    pub fn intersection(self, other: FieldNode) -> Self {
        FieldNode::Intersection {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Subtract another field from this one
    #[inline]
    pub fn subtract(self, other: FieldNode) -> Self {
        FieldNode::Subtraction {
            a: Arc::new(self),
            b: Arc::new(other),
        }
    }

    /// Smooth union with another field over blend radius `k`
    #[inline]
    pub fn smooth_union(self, other: FieldNode, k: f32) -> Self {
        FieldNode::SmoothUnion {
            a: Arc::new(self),
            b: Arc::new(other),
            k,
        }
    }

    // === Transform methods ===

    /// Translate by offset
    #[inline]
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        FieldNode::Translate {
            child: Arc::new(self),
            offset: Vec3::new(x, y, z),
        }
    }

    /// Translate by vector
    #[inline]
    pub fn translate_vec(self, offset: Vec3) -> Self {
        FieldNode::Translate {
            child: Arc::new(self),
            offset,
        }
    }

    /// Uniform scale (factor must be non-zero)
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        FieldNode::Scale {
            child: Arc::new(self),
            factor,
        }
    }

    // === Time-varying methods ===

    /// Inflate and deflate the surface over time
    ///
    /// The resulting field offsets this field's distance by
    /// `amplitude * sin(speed * time)`.
    #[inline]
    pub fn pulse(self, amplitude: f32, speed: f32) -> Self {
        FieldNode::Pulse {
            child: Arc::new(self),
            amplitude,
            speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_constructor() {
        match FieldNode::sphere(2.5) {
            FieldNode::Sphere { radius } => assert_eq!(radius, 2.5),
            _ => panic!("expected sphere"),
        }
    }

    #[test]
    fn test_box_halves_dimensions() {
        match FieldNode::box3d(2.0, 4.0, 6.0) {
            FieldNode::Box3d { half_extents } => {
                assert_eq!(half_extents, Vec3::new(1.0, 2.0, 3.0));
            }
            _ => panic!("expected box"),
        }
    }

    #[test]
    fn test_plane_normalizes() {
        match FieldNode::plane(Vec3::new(0.0, 10.0, 0.0), 1.0) {
            FieldNode::Plane { normal, .. } => {
                assert!((normal.length() - 1.0).abs() < 1e-6);
            }
            _ => panic!("expected plane"),
        }
    }

    #[test]
    fn test_operations_nest() {
        let node = FieldNode::sphere(1.0)
            .subtract(FieldNode::box3d(1.0, 1.0, 1.0))
            .pulse(0.1, 1.0);
        match node {
            FieldNode::Pulse { child, .. } => match child.as_ref() {
                FieldNode::Subtraction { .. } => {}
                _ => panic!("expected subtraction under pulse"),
            },
            _ => panic!("expected pulse"),
        }
    }
}
