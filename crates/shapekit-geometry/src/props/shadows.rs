use glam::Vec2;
use shapekit_core::math::PI;

use crate::color::Color32;
use crate::geo_utils::EdgeGradientData;

/// One drop shadow layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowProperties {
    pub color: Color32,
    pub offset: Vec2,
    /// How far the shadow grows past the shape.
    pub size: f32,
    /// 0 keeps a hard edge, 1 fades across the whole shape.
    pub softness: f32,
}

impl Default for ShadowProperties {
    fn default() -> Self {
        Self {
            color: Color32::from_rgba(0, 0, 0, 120),
            offset: Vec2::ZERO,
            size: 5.0,
            softness: 0.5,
        }
    }
}

impl ShadowProperties {
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    pub fn with_softness(mut self, softness: f32) -> Self {
        self.softness = softness.clamp(0.0, 1.0);
        self
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Gradient for this shadow: softness shrinks the solid core, size grows
    /// the shape and the anti-aliasing width becomes the fade ring.
    pub fn edge_gradient(&self, anti_aliasing: f32) -> EdgeGradientData {
        EdgeGradientData::active(1.0 - self.softness, self.size, anti_aliasing)
    }
}

/// Shadow stack drawn underneath a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowsProperties {
    pub show_shape: bool,
    pub show_shadows: bool,
    /// Direction of the shared offset in half turns, `-1..=1`.
    pub angle: f32,
    pub distance: f32,
    pub shadows: Vec<ShadowProperties>,
}

impl Default for ShadowsProperties {
    fn default() -> Self {
        Self {
            show_shape: true,
            show_shadows: true,
            angle: 0.0,
            distance: 0.0,
            shadows: Vec::new(),
        }
    }
}

/// Parameters for one shadow triangulation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPass {
    pub center: Vec2,
    pub color: Color32,
    pub edge_gradient: EdgeGradientData,
}

impl ShadowsProperties {
    pub fn with_shadow(mut self, shadow: ShadowProperties) -> Self {
        self.shadows.push(shadow);
        self
    }

    pub fn with_angle(mut self, angle: f32, distance: f32) -> Self {
        self.angle = angle;
        self.distance = distance;
        self
    }

    pub fn validated(mut self) -> Self {
        self.angle = self.angle.clamp(-1.0, 1.0);
        self.distance = self.distance.max(0.0);
        for shadow in &mut self.shadows {
            shadow.size = shadow.size.max(0.0);
            shadow.softness = shadow.softness.clamp(0.0, 1.0);
        }
        self
    }

    pub fn shadows_enabled(&self) -> bool {
        self.show_shadows && !self.shadows.is_empty()
    }

    /// Offset shared by all shadows, from `angle` and `distance`.
    pub fn offset(&self) -> Vec2 {
        let (sin, cos) = (self.angle * PI - PI).sin_cos();
        Vec2::new(sin, cos) * self.distance
    }

    /// Center of shadow `index` for a shape centered on `center`.
    pub fn center_offset(&self, center: Vec2, index: usize) -> Vec2 {
        let own = self.shadows.get(index).map_or(Vec2::ZERO, |s| s.offset);
        center + self.offset() + own
    }

    /// One pass per shadow, in draw order. Empty when shadows are disabled.
    pub fn passes(&self, center: Vec2, anti_aliasing: f32) -> impl Iterator<Item = ShadowPass> + '_ {
        let enabled = self.shadows_enabled();
        let shared = self.offset();
        self.shadows
            .iter()
            .filter(move |_| enabled)
            .map(move |shadow| ShadowPass {
                center: center + shared + shadow.offset,
                color: shadow.color,
                edge_gradient: shadow.edge_gradient(anti_aliasing),
            })
    }
}
