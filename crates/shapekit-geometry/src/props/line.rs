use super::rounding::RoundingProperties;

/// How open polylines are finished at their ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// End flush with the last point.
    #[default]
    Close,
    /// Extend by half the line weight along the end tangent.
    Projected,
    /// Half-disc around the end point.
    Round,
}

super::impl_try_from_i32!(LineCap {
    Close = 0,
    Projected = 1,
    Round = 2,
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProperties {
    pub line_cap: LineCap,
    /// Join the last point back to the first. Needs at least 3 points.
    pub closed: bool,
    pub rounded_cap_resolution: RoundingProperties,
}

impl Default for LineProperties {
    fn default() -> Self {
        Self {
            line_cap: LineCap::Close,
            closed: false,
            rounded_cap_resolution: RoundingProperties::default(),
        }
    }
}

impl LineProperties {
    pub fn with_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_cap_resolution(mut self, resolution: RoundingProperties) -> Self {
        self.rounded_cap_resolution = resolution;
        self
    }
}
