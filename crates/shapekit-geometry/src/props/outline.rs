/// Where the line weight sits relative to the nominal shape boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineType {
    /// Drawn entirely inside the boundary.
    Inner,
    /// Centered on the boundary.
    #[default]
    Center,
    /// Drawn entirely outside the boundary.
    Outer,
}

super::impl_try_from_i32!(LineType {
    Inner = 0,
    Center = 1,
    Outer = 2,
});

/// Line weight and anchoring for outlines and polylines.
///
/// The distance getters are signed offsets from the nominal boundary,
/// positive pointing outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineProperties {
    pub line_type: LineType,
    pub line_weight: f32,
}

impl Default for OutlineProperties {
    fn default() -> Self {
        Self {
            line_type: LineType::Center,
            line_weight: 2.0,
        }
    }
}

impl OutlineProperties {
    pub fn new(line_type: LineType, line_weight: f32) -> Self {
        Self {
            line_type,
            line_weight,
        }
    }

    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    pub fn with_line_weight(mut self, line_weight: f32) -> Self {
        self.line_weight = line_weight.max(0.0);
        self
    }

    pub fn half_line_weight(&self) -> f32 {
        self.line_weight * 0.5
    }

    pub fn outer_distance(&self) -> f32 {
        match self.line_type {
            LineType::Inner => 0.0,
            LineType::Center => self.half_line_weight(),
            LineType::Outer => self.line_weight,
        }
    }

    pub fn center_distance(&self) -> f32 {
        match self.line_type {
            LineType::Inner => -self.half_line_weight(),
            LineType::Center => 0.0,
            LineType::Outer => self.half_line_weight(),
        }
    }

    pub fn inner_distance(&self) -> f32 {
        match self.line_type {
            LineType::Inner => -self.line_weight,
            LineType::Center => -self.half_line_weight(),
            LineType::Outer => 0.0,
        }
    }
}
