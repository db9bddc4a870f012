//! Boolean and blending operations over distances (Deep Fried Edition)
//!
//! Combinators take already-evaluated distances, so composition cost is
//! independent of the operand trees.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: `#[inline(always)]` on every combinator.
//!
//! Author: Moroya Sakamoto

mod boolean;
mod smooth;

pub use boolean::{sdf_intersection, sdf_subtraction, sdf_union};
pub use smooth::{sdf_smooth_union, smooth_min};
