use glam::Vec2;
use shapekit_core::math::{PI, TWO_PI};

use super::rounding::{MAX_RESOLUTION, ResolutionMode, resolution_for_length};

/// How an ellipse is fitted into its layout rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EllipseFitting {
    /// Stretch to the rect.
    Ellipse,
    /// Circle touching the shorter side.
    #[default]
    UniformInner,
    /// Circle touching the longer side.
    UniformOuter,
}

super::impl_try_from_i32!(EllipseFitting {
    Ellipse = 0,
    UniformInner = 1,
    UniformOuter = 2,
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseProperties {
    pub fitting: EllipseFitting,
    /// Angle of the first ring vertex, radians clockwise from up.
    pub base_angle: f32,
    pub resolution: ResolutionMode,
}

impl Default for EllipseProperties {
    fn default() -> Self {
        Self {
            fitting: EllipseFitting::UniformInner,
            base_angle: 0.0,
            resolution: ResolutionMode::Calculated { max_distance: 4.0 },
        }
    }
}

impl EllipseProperties {
    pub const MIN_RESOLUTION: usize = 3;
    pub const DEFAULT_FIXED_RESOLUTION: usize = 50;

    pub fn with_fitting(mut self, fitting: EllipseFitting) -> Self {
        self.fitting = fitting;
        self
    }

    pub fn with_base_angle(mut self, base_angle: f32) -> Self {
        self.base_angle = base_angle;
        self
    }

    pub fn with_resolution(mut self, resolution: ResolutionMode) -> Self {
        self.resolution = resolution;
        self
    }

    /// Radii for a layout rect of `width` x `height`.
    pub fn fit_radius(&self, width: f32, height: f32) -> Vec2 {
        let half_width = width * 0.5;
        let half_height = height * 0.5;
        match self.fitting {
            EllipseFitting::Ellipse => Vec2::new(half_width, half_height),
            EllipseFitting::UniformInner => Vec2::splat(half_width.min(half_height)),
            EllipseFitting::UniformOuter => Vec2::splat(half_width.max(half_height)),
        }
    }

    /// Ring resolution for `radius` grown by `offset`.
    pub fn adjusted_resolution(&self, radius: Vec2, offset: f32) -> usize {
        match self.resolution {
            ResolutionMode::Calculated { max_distance } => {
                let radius = radius + Vec2::splat(offset);
                resolution_for_length(circumference(radius), max_distance, 1.0, Self::MIN_RESOLUTION)
            }
            ResolutionMode::Fixed { resolution } => {
                resolution.clamp(Self::MIN_RESOLUTION, MAX_RESOLUTION)
            }
        }
    }
}

/// Circumference of an ellipse (Ramanujan's first approximation).
pub(crate) fn circumference(radius: Vec2) -> f32 {
    let (a, b) = (radius.x.abs(), radius.y.abs());
    if a == b {
        TWO_PI * a
    } else {
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }
}
