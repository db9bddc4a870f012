//! Primitive distance fields (Deep Fried Edition)
//!
//! Leaf evaluators for the FieldNode tree. Every function here is a pure
//! distance formula over a point, kept free of allocation and branching
//! where the math allows.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: leaves sit at the bottom of the eval recursion,
//!   so each is `#[inline(always)]`.
//!
//! Author: Moroya Sakamoto

mod sphere;
mod box3d;
mod torus;
mod plane;
mod mandelbulb;

pub use sphere::sdf_sphere;
pub use box3d::sdf_box3d;
pub use torus::sdf_torus;
pub use plane::sdf_plane;
pub use mandelbulb::sdf_mandelbulb;
