use glam::Vec2;
use shapekit_core::math::{HALF_PI, PI};

use super::rounding::{AdjustedRounding, RoundingProperties};

/// Corner of a rectangle. Arrays indexed by corner use this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Corners in the order the outline ring visits them.
    pub const RING_ORDER: [Corner; 4] = [
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopLeft,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Angle at which this corner's arc starts.
    pub fn base_angle(self) -> f32 {
        match self {
            Corner::TopLeft => HALF_PI + PI,
            Corner::TopRight => 0.0,
            Corner::BottomRight => HALF_PI,
            Corner::BottomLeft => PI,
        }
    }

    /// Direction from the rect center towards this corner.
    pub fn sign(self) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(-1.0, 1.0),
            Corner::TopRight => Vec2::new(1.0, 1.0),
            Corner::BottomRight => Vec2::new(1.0, -1.0),
            Corner::BottomLeft => Vec2::new(-1.0, -1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundedType {
    /// Plain rectangle.
    None,
    /// The same radius on every corner. `use_max_radius` rounds to half the
    /// shorter side (a pill or circle).
    Uniform { radius: f32, use_max_radius: bool },
    /// One radius per corner, indexed by [`Corner`].
    Individual { radii: [f32; 4] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundedResolution {
    /// One resolution setting shared by all corners.
    Uniform(RoundingProperties),
    /// One resolution setting per corner, indexed by [`Corner`].
    Individual([RoundingProperties; 4]),
}

/// Corner rounding of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedProperties {
    pub rounded: RoundedType,
    pub resolution: RoundedResolution,
}

impl Default for RoundedProperties {
    fn default() -> Self {
        Self {
            rounded: RoundedType::None,
            resolution: RoundedResolution::Uniform(RoundingProperties::default()),
        }
    }
}

/// Radii and resolutions derived for one rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedRounded {
    pub radii: [f32; 4],
    pub corners: [AdjustedRounding; 4],
}

impl AdjustedRounded {
    pub fn radius(&self, corner: Corner) -> f32 {
        self.radii[corner.index()]
    }

    pub fn rounding(&self, corner: Corner) -> AdjustedRounding {
        self.corners[corner.index()]
    }

    /// Number of ring vertices across all four corners.
    pub fn total_resolution(&self) -> usize {
        self.corners.iter().map(|c| c.resolution).sum()
    }
}

impl RoundedProperties {
    pub fn uniform(radius: f32) -> Self {
        Self {
            rounded: RoundedType::Uniform {
                radius,
                use_max_radius: false,
            },
            ..Self::default()
        }
    }

    pub fn max_radius() -> Self {
        Self {
            rounded: RoundedType::Uniform {
                radius: 0.0,
                use_max_radius: true,
            },
            ..Self::default()
        }
    }

    /// Radii in [`Corner`] order: top-left, top-right, bottom-right, bottom-left.
    pub fn individual(radii: [f32; 4]) -> Self {
        Self {
            rounded: RoundedType::Individual { radii },
            ..Self::default()
        }
    }

    pub fn with_resolution(mut self, resolution: RoundingProperties) -> Self {
        self.resolution = RoundedResolution::Uniform(resolution);
        self
    }

    pub fn with_corner_resolutions(mut self, resolutions: [RoundingProperties; 4]) -> Self {
        self.resolution = RoundedResolution::Individual(resolutions);
        self
    }

    pub fn is_rounded(&self) -> bool {
        !matches!(self.rounded, RoundedType::None)
    }

    /// Clamp radii so they fit a rect of `size` and resolutions into range.
    pub fn validated(mut self, size: Vec2) -> Self {
        let half_shorter_side = size.x.min(size.y).max(0.0) * 0.5;
        match &mut self.rounded {
            RoundedType::None => {}
            RoundedType::Uniform { radius, .. } => {
                *radius = radius.clamp(0.0, half_shorter_side);
            }
            RoundedType::Individual { radii } => {
                for radius in radii.iter_mut() {
                    *radius = radius.max(0.0);
                }
            }
        }
        self.resolution = match self.resolution {
            RoundedResolution::Uniform(r) => RoundedResolution::Uniform(r.validated()),
            RoundedResolution::Individual(rs) => {
                RoundedResolution::Individual(rs.map(RoundingProperties::validated))
            }
        };
        self
    }

    /// Radii for a rect of `size` and the corner resolutions for those radii
    /// grown by `offset`.
    ///
    /// Radii are clamped to half the shorter side so opposite corners can
    /// never overlap.
    pub fn adjusted(&self, size: Vec2, offset: f32) -> AdjustedRounded {
        let half_shorter_side = size.x.min(size.y).max(0.0) * 0.5;
        let radii = match self.rounded {
            RoundedType::None => [0.0; 4],
            RoundedType::Uniform {
                use_max_radius: true,
                ..
            } => [half_shorter_side; 4],
            RoundedType::Uniform { radius, .. } => [radius; 4],
            RoundedType::Individual { radii } => radii,
        }
        .map(|r| r.clamp(0.0, half_shorter_side));

        let corners = Corner::ALL.map(|corner| {
            let rounding = match &self.resolution {
                RoundedResolution::Uniform(r) => r,
                RoundedResolution::Individual(rs) => &rs[corner.index()],
            };
            rounding.adjusted(radii[corner.index()], offset, 4.0)
        });

        AdjustedRounded { radii, corners }
    }
}
