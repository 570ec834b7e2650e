use shapekit_core::math::TWO_PI;

/// Radius below which a corner collapses to a sharp corner.
pub const SHARP_CORNER_RADIUS: f32 = 1e-3;
/// Smallest allowed arc length per segment.
pub const MIN_MAX_DISTANCE: f32 = 0.1;
/// Upper bound on any computed resolution.
pub const MAX_RESOLUTION: usize = 4096;

/// How the number of segments along a curve is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolutionMode {
    /// Derived from the arc length so no segment exceeds `max_distance`.
    Calculated { max_distance: f32 },
    /// Explicit segment count.
    Fixed { resolution: usize },
}

/// Adaptive tessellation settings for a rounded corner or line cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingProperties {
    pub mode: ResolutionMode,
}

/// Resolution derived from [`RoundingProperties`] for one radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustedRounding {
    pub resolution: usize,
    /// The radius is too small to be worth an arc.
    pub make_sharp_corner: bool,
}

impl Default for RoundingProperties {
    fn default() -> Self {
        Self::calculated(4.0)
    }
}

impl RoundingProperties {
    pub const MIN_RESOLUTION: usize = 2;
    pub const DEFAULT_FIXED_RESOLUTION: usize = 10;

    pub fn calculated(max_distance: f32) -> Self {
        Self {
            mode: ResolutionMode::Calculated { max_distance },
        }
    }

    pub fn fixed(resolution: usize) -> Self {
        Self {
            mode: ResolutionMode::Fixed { resolution },
        }
    }

    /// Clamp the settings into their legal ranges.
    pub fn validated(self) -> Self {
        let mode = match self.mode {
            ResolutionMode::Calculated { max_distance } => ResolutionMode::Calculated {
                max_distance: max_distance.max(MIN_MAX_DISTANCE),
            },
            ResolutionMode::Fixed { resolution } => ResolutionMode::Fixed {
                resolution: resolution.max(Self::MIN_RESOLUTION),
            },
        };
        Self { mode }
    }

    /// Resolution for a corner of `radius` grown by `offset`, where a full
    /// circle's circumference is shared by `num_corners` corners.
    pub fn adjusted(&self, radius: f32, offset: f32, num_corners: f32) -> AdjustedRounding {
        let resolution = match self.mode {
            ResolutionMode::Calculated { max_distance } => resolution_for_length(
                TWO_PI * (radius + offset),
                max_distance,
                num_corners,
                Self::MIN_RESOLUTION,
            ),
            ResolutionMode::Fixed { resolution } => {
                resolution.clamp(Self::MIN_RESOLUTION, MAX_RESOLUTION)
            }
        };

        AdjustedRounding {
            resolution,
            make_sharp_corner: radius < SHARP_CORNER_RADIUS,
        }
    }
}

/// `ceil(length / max_distance / divisor)`, floored at `min`.
pub(crate) fn resolution_for_length(length: f32, max_distance: f32, divisor: f32, min: usize) -> usize {
    let steps = (length / max_distance.max(MIN_MAX_DISTANCE) / divisor).ceil();
    if steps.is_finite() && steps > min as f32 {
        (steps as usize).min(MAX_RESOLUTION)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculated_resolution() {
        let rounding = RoundingProperties::calculated(4.0);
        // 2π·15 / 4 / 4 ≈ 5.9
        assert_eq!(rounding.adjusted(15.0, 0.0, 4.0).resolution, 6);
        assert_eq!(rounding.adjusted(15.0, 5.0, 4.0).resolution, 8);
    }

    #[test]
    fn test_resolution_monotonic_and_floored() {
        let rounding = RoundingProperties::calculated(4.0);
        let mut last = 0;
        for i in 0..500 {
            let radius = i as f32 * 0.37;
            let res = rounding.adjusted(radius, 0.0, 4.0).resolution;
            assert!(res >= RoundingProperties::MIN_RESOLUTION);
            assert!(res >= last, "resolution dropped at radius {}", radius);
            last = res;
        }
    }

    #[test]
    fn test_sharp_corner() {
        let rounding = RoundingProperties::default();
        assert!(rounding.adjusted(0.0, 3.0, 4.0).make_sharp_corner);
        assert!(!rounding.adjusted(0.01, 0.0, 4.0).make_sharp_corner);
    }

    #[test]
    fn test_fixed_floored() {
        let rounding = RoundingProperties::fixed(1);
        assert_eq!(rounding.adjusted(100.0, 0.0, 4.0).resolution, 2);
        assert_eq!(
            RoundingProperties::fixed(0).validated().mode,
            ResolutionMode::Fixed { resolution: 2 }
        );
    }

    #[test]
    fn test_zero_max_distance_does_not_divide_by_zero() {
        let rounding = RoundingProperties::calculated(0.0);
        let res = rounding.adjusted(10.0, 0.0, 4.0).resolution;
        assert_eq!(res, 158);
    }
}
