//! Mandelbulb fractal distance estimator (Deep Fried Edition)
//!
//! Power-8 Mandelbulb through the polynomial iteration (no
//! trigonometrics), with distance recovered from the Hubbard-Douady
//! potential. This is the numeric reference field for the mesher: the
//! expression structure below is load-bearing and must not be
//! "simplified", since tests pin its float32 outputs.
//!
//! # Deep Fried Optimizations
//! - **Polynomial Iteration**: the trig-free power-8 update (k1..k4
//!   factoring), all in f32.
//! - **Early Escape**: bails out of the fixed 4-iteration loop once the
//!   squared magnitude passes 256.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance estimate to the power-8 Mandelbulb at origin
///
/// Four fixed iterations, escape radius 256 (squared magnitude), then
/// `0.25 * ln(m) * sqrt(m) / dz`.
///
/// Known edge case: on the polar axis (`x == 0 && z == 0`, origin
/// included) the polynomial divides by `sqrt(0)`, and `0 * inf` turns the
/// iterate into NaN. The classifier's `d < 0` test reads NaN as outside,
/// so axis-aligned sample corners carve a one-cell-wide seam through the
/// bulb on even grids. That is the behavior of the estimator, preserved
/// rather than patched; fields of your own are expected to stay finite.
#[inline(always)]
pub fn sdf_mandelbulb(point: Vec3) -> f32 {
    let mut w = point;
    let mut m = w.dot(w);
    let mut dz = 1.0f32;

    for _ in 0..4 {
        // dz = 8*|w|^7*dz + 1, using m = |w|^2 from the previous round
        let m2 = m * m;
        let m4 = m2 * m2;
        dz = 8.0 * (m4 * m2 * m).sqrt() * dz + 1.0;

        let x = w.x;
        let x2 = x * x;
        let x4 = x2 * x2;
        let y = w.y;
        let y2 = y * y;
        let y4 = y2 * y2;
        let z = w.z;
        let z2 = z * z;
        let z4 = z2 * z2;

        let k3 = x2 + z2;
        let k2 = 1.0 / (k3 * k3 * k3 * k3 * k3 * k3 * k3).sqrt();
        let k1 = x4 + y4 + z4 - 6.0 * y2 * z2 - 6.0 * x2 * y2 + 2.0 * z2 * x2;
        let k4 = x2 - y2 + z2;

        w.x = point.x
            + 64.0 * x * y * z * (x2 - z2) * k4 * (x4 - 6.0 * x2 * z2 + z4) * k1 * k2;
        w.y = point.y + -16.0 * y2 * k3 * k4 * k4 + k1 * k1;
        w.z = point.z
            + -8.0
                * y
                * k4
                * (x4 * x4 - 28.0 * x4 * x2 * z2 + 70.0 * x4 * z4 - 28.0 * x2 * z2 * z4
                    + z4 * z4)
                * k1
                * k2;

        m = w.dot(w);
        if m > 256.0 {
            break;
        }
    }

    // distance estimation through the Hubbard-Douady potential
    0.25 * m.ln() * m.sqrt() / dz
}
