//! Shared primitives: unit-circle tables, angle math, edge-gradient state
//! and linear remaps.
//!
//! Unit positions are `(sin θ, cos θ)`, so θ = 0 points up (y-up) and a
//! positive direction winds clockwise.

use glam::Vec2;
use shapekit_core::math::{PI, TWO_PI};

/// Point on the unit circle for `angle` radians from "up", clockwise.
#[inline]
pub fn unit_position(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(sin, cos)
}

/// State of one draw pass: how far the solid interior shrinks and how wide
/// the alpha-faded ring around it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGradientData {
    pub is_active: bool,
    /// Fraction (0-1) the solid interior is scaled to make room for the fade.
    pub inner_scale: f32,
    /// Extra growth of the shape, used by shadows.
    pub shadow_offset: f32,
    /// Width of the faded ring.
    pub size_add: f32,
}

impl Default for EdgeGradientData {
    fn default() -> Self {
        Self::inactive()
    }
}

impl EdgeGradientData {
    pub const fn inactive() -> Self {
        Self {
            is_active: false,
            inner_scale: 1.0,
            shadow_offset: 0.0,
            size_add: 0.0,
        }
    }

    pub const fn active(inner_scale: f32, shadow_offset: f32, size_add: f32) -> Self {
        Self {
            is_active: true,
            inner_scale,
            shadow_offset,
            size_add,
        }
    }

    /// Gradient for a plain fill or outline pass with `anti_aliasing` pixels of fade.
    pub fn for_anti_aliasing(anti_aliasing: f32) -> Self {
        if anti_aliasing > 0.0 {
            Self::active(1.0, 0.0, anti_aliasing)
        } else {
            Self::inactive()
        }
    }

    pub fn set_active_data(&mut self, inner_scale: f32, shadow_offset: f32, size_add: f32) {
        *self = Self::active(inner_scale, shadow_offset, size_add);
    }

    pub fn reset(&mut self) {
        *self = Self::inactive();
    }
}

/// Memoized table of unit-circle positions.
///
/// Regenerated only when the resolution, base angle or direction changes.
#[derive(Debug, Clone, Default)]
pub struct UnitPositionData {
    positions: Vec<Vec2>,
    key: Option<(f32, f32)>,
}

impl UnitPositionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure the table holds `resolution` points starting at `base_angle`,
    /// stepping `2π / resolution * direction`. Returns `true` if it was rebuilt.
    pub fn update(&mut self, resolution: usize, base_angle: f32, direction: f32) -> bool {
        let key = Some((base_angle, direction));
        if self.positions.len() == resolution && self.key == key {
            return false;
        }

        self.key = key;
        self.positions.clear();
        if resolution == 0 {
            return true;
        }
        let step = TWO_PI / resolution as f32 * direction;
        self.positions
            .extend((0..resolution).map(|i| unit_position(base_angle + step * i as f32)));
        true
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Signed shortest angular delta from `a1` to `a2`, in `(-π, π]`.
pub fn radian_angle_difference(a1: f32, a2: f32) -> f32 {
    let diff = (a2 - a1).rem_euclid(TWO_PI);
    if diff > PI { diff - TWO_PI } else { diff }
}

/// Scale `x` from `[0, in_max]` to `[0, out_max]` with integer division.
///
/// `in_max` must be non-zero.
#[inline]
pub fn simple_map(x: usize, in_max: usize, out_max: usize) -> usize {
    debug_assert!(in_max != 0, "simple_map with an empty input range");
    x * out_max / in_max
}

/// Like [`simple_map`] but rounds up.
#[inline]
pub fn simple_map_ceil(x: usize, in_max: usize, out_max: usize) -> usize {
    debug_assert!(in_max != 0, "simple_map_ceil with an empty input range");
    (x * out_max).div_ceil(in_max)
}

#[inline]
pub fn simple_map_f32(x: f32, in_max: f32, out_max: f32) -> f32 {
    x * out_max / in_max
}

/// Linear remap of `x` from `[in_min, in_max]` to `[out_min, out_max]`. Unclamped.
#[inline]
pub fn map(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Anti-aliasing width in canvas units for a canvas scale factor.
#[inline]
pub fn adjusted_anti_aliasing(anti_aliasing: f32, scale_factor: f32) -> f32 {
    if scale_factor > 0.0 {
        anti_aliasing / scale_factor
    } else {
        anti_aliasing
    }
}

/// Grow a width/height pair by `offset` on each side.
#[inline]
pub fn add_offset(width: f32, height: f32, offset: f32) -> (f32, f32) {
    (width + offset * 2.0, height + offset * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
    }

    #[test]
    fn test_unit_table_starts_up_and_winds_clockwise() {
        let mut data = UnitPositionData::new();
        assert!(data.update(4, 0.0, 1.0));
        let p = data.positions();
        assert_close(p[0].x, 0.0);
        assert_close(p[0].y, 1.0);
        assert_close(p[1].x, 1.0);
        assert_close(p[2].y, -1.0);
        assert_close(p[3].x, -1.0);
    }

    #[test]
    fn test_unit_table_memoized() {
        let mut data = UnitPositionData::new();
        assert!(data.update(8, 0.5, 1.0));
        assert!(!data.update(8, 0.5, 1.0));
        assert!(data.update(8, 0.5, -1.0));
        assert!(data.update(8, 0.25, -1.0));
        assert!(data.update(9, 0.25, -1.0));
        assert_eq!(data.len(), 9);
    }

    #[test]
    fn test_radian_angle_difference_range() {
        assert_close(radian_angle_difference(0.0, PI), PI);
        assert_close(radian_angle_difference(PI, 0.0), PI);
        assert_close(radian_angle_difference(0.1, TWO_PI - 0.1), -0.2);
        assert_close(radian_angle_difference(TWO_PI - 0.1, 0.1), 0.2);
        for i in 0..64 {
            let d = radian_angle_difference(0.3, i as f32 * 0.37 - 10.0);
            assert!(d > -PI && d <= PI, "{} out of range", d);
        }
    }

    #[test]
    fn test_simple_map_stays_in_range() {
        for outer in 1..40 {
            for inner in 1..40 {
                for i in 0..outer {
                    let mapped = simple_map(i, outer, inner);
                    assert!(mapped < inner, "{} -> {} (outer {}, inner {})", i, mapped, outer, inner);
                }
            }
        }
    }

    #[test]
    fn test_simple_map_ceil() {
        assert_eq!(simple_map_ceil(1, 4, 10), 3);
        assert_eq!(simple_map_ceil(2, 4, 10), 5);
        assert_eq!(simple_map_ceil(4, 4, 10), 10);
    }

    #[test]
    fn test_map() {
        assert_close(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
        assert_close(map(15.0, 10.0, 20.0, 1.0, 0.0), 0.5);
        assert_close(simple_map_f32(2.0, 4.0, 1.0), 0.5);
    }

    #[test]
    fn test_edge_gradient() {
        assert!(!EdgeGradientData::for_anti_aliasing(0.0).is_active);
        let aa = EdgeGradientData::for_anti_aliasing(1.25);
        assert_eq!(aa, EdgeGradientData::active(1.0, 0.0, 1.25));

        let mut data = aa;
        data.reset();
        assert_eq!(data, EdgeGradientData::inactive());
        data.set_active_data(0.5, 5.0, 1.0);
        assert!(data.is_active);
        assert_eq!(data.inner_scale, 0.5);
    }

    #[test]
    fn test_adjusted_anti_aliasing() {
        assert_close(adjusted_anti_aliasing(2.0, 2.0), 1.0);
        assert_close(adjusted_anti_aliasing(2.0, 0.0), 2.0);
        assert_eq!(add_offset(10.0, 4.0, 1.5), (13.0, 7.0));
    }
}
