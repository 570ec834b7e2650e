use shapekit_core::math::TWO_PI;

/// Which way an arc grows from its base angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcDirection {
    /// Clockwise from the base angle.
    #[default]
    Forward,
    /// Centered on the base angle.
    Centered,
    /// Counter-clockwise from the base angle.
    Backward,
}

super::impl_try_from_i32!(ArcDirection {
    Forward = 0,
    Centered = 1,
    Backward = 2,
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcProperties {
    pub direction: ArcDirection,
    /// Fraction of a full turn, `0..=1`.
    pub length: f32,
}

impl Default for ArcProperties {
    fn default() -> Self {
        Self {
            direction: ArcDirection::Forward,
            length: 0.5,
        }
    }
}

/// Start angle, winding and step count of an arc for one rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedArc {
    pub start_angle: f32,
    /// `1.0` clockwise, `-1.0` counter-clockwise.
    pub direction: f32,
    /// Total sweep in radians, always positive.
    pub sweep: f32,
    /// Number of segments along the arc. The arc has `steps + 1` points.
    pub steps: usize,
}

impl AdjustedArc {
    /// Angle of arc point `i`.
    #[inline]
    pub fn angle(&self, i: usize) -> f32 {
        self.start_angle + self.sweep / self.steps as f32 * i as f32 * self.direction
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep >= TWO_PI - 1e-4
    }
}

impl ArcProperties {
    pub fn new(direction: ArcDirection, length: f32) -> Self {
        Self { direction, length }
    }

    pub fn validated(self) -> Self {
        Self {
            length: self.length.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Derive the arc for a full-circle `resolution` around `base_angle`.
    pub fn adjusted(&self, resolution: usize, base_angle: f32) -> AdjustedArc {
        let length = self.length.clamp(0.0, 1.0);
        let sweep = length * TWO_PI;
        let steps = ((resolution as f32 * length).ceil() as usize).max(1);
        let (start_angle, direction) = match self.direction {
            ArcDirection::Forward => (base_angle, 1.0),
            ArcDirection::Centered => (base_angle + sweep * 0.5, -1.0),
            ArcDirection::Backward => (base_angle, -1.0),
        };
        AdjustedArc {
            start_angle,
            direction,
            sweep,
            steps,
        }
    }
}
