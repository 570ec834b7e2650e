use glam::Vec2;
use shapekit_core::math::{PI, TWO_PI};

/// Inner hole that turns a filled polygon into an annulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutProperties {
    pub resolution: usize,
    pub radius: f32,
    /// Rotation of the hole ring, `-π..=π`.
    pub rotation_offset: f32,
}

impl Default for CutoutProperties {
    fn default() -> Self {
        Self {
            resolution: 4,
            radius: 1.0,
            rotation_offset: 0.0,
        }
    }
}

impl CutoutProperties {
    pub const MIN_RESOLUTION: usize = 3;

    pub fn new(resolution: usize, radius: f32) -> Self {
        Self {
            resolution,
            radius,
            ..Self::default()
        }
    }

    pub fn with_rotation_offset(mut self, rotation_offset: f32) -> Self {
        self.rotation_offset = rotation_offset;
        self
    }

    pub fn validated(self) -> Self {
        Self {
            resolution: self.resolution.max(Self::MIN_RESOLUTION),
            radius: self.radius.max(0.0),
            rotation_offset: self.rotation_offset.clamp(-PI, PI),
        }
    }

    /// Start angle of the hole ring: the rotation reduced to one step and
    /// centered on it, so the ring straddles "up".
    pub fn base_angle(&self) -> f32 {
        let resolution = self.resolution.max(Self::MIN_RESOLUTION);
        let step = TWO_PI / resolution as f32;
        let mut offset = self.rotation_offset;
        if offset < 0.0 {
            offset += TWO_PI;
        }
        offset % step - step * 0.5
    }
}

/// Where the polygon fan is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PolygonCenter {
    /// Mean of the points.
    #[default]
    Calculated,
    /// Mean of the points plus an offset.
    Offset(Vec2),
    /// Fixed position relative to the shape.
    Custom(Vec2),
    /// Mean of the points plus an offset, with a hole around it.
    Cutout { offset: Vec2, cutout: CutoutProperties },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolygonProperties {
    pub center: PolygonCenter,
}

impl PolygonProperties {
    pub fn with_center(mut self, center: PolygonCenter) -> Self {
        self.center = center;
        self
    }

    pub fn cutout(&self) -> Option<&CutoutProperties> {
        match &self.center {
            PolygonCenter::Cutout { cutout, .. } => Some(cutout),
            _ => None,
        }
    }

    /// Fan anchor for a polygon through `positions`.
    pub fn adjusted_center(&self, positions: &[Vec2]) -> Vec2 {
        let mean = || {
            if positions.is_empty() {
                Vec2::ZERO
            } else {
                positions.iter().copied().sum::<Vec2>() / positions.len() as f32
            }
        };
        match self.center {
            PolygonCenter::Calculated => mean(),
            PolygonCenter::Offset(offset) => mean() + offset,
            PolygonCenter::Custom(position) => position,
            PolygonCenter::Cutout { offset, .. } => mean() + offset,
        }
    }
}
