//! Math types and scalar helpers used by the geometry engine.
//!
//! Vectors are the SIMD-friendly [`glam`] types. The helpers below fill the
//! gaps glam leaves for plain `f32` values.
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Vec2, Vec3, Vec4};

pub use std::f32::consts::{FRAC_PI_2 as HALF_PI, FRAC_PI_4 as QUARTER_PI, PI, TAU as TWO_PI};

/// Tolerance below which lengths are treated as zero.
pub const EPSILON: f32 = 1e-6;

/// Linear interpolation between `a` and `b`, unclamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where `value` lies between `a` and `b`.
///
/// Returns 0 when the range is empty.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let range = b - a;
    if range.abs() < EPSILON {
        0.0
    } else {
        (value - a) / range
    }
}

#[inline]
pub fn approx_eq(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}
