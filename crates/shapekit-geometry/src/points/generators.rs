//! Procedural point generators feeding the polyline pipeline.

use glam::Vec2;
use shapekit_core::math::{TWO_PI, inverse_lerp};

use super::curve::CurveGenerator;
use crate::error::{GeometryError, GeometryResult, require_points};
use crate::geo_utils::unit_position;

/// A generator writes a fresh set of positions around `center`.
///
/// On error the previous contents of `positions` are left untouched.
pub trait GeneratePoints {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()>;
}

fn require_resolution(name: &'static str, resolution: usize, min: usize) -> GeometryResult<()> {
    if resolution < min {
        Err(GeometryError::InvalidParameter {
            name,
            value: resolution as f32,
        })
    } else {
        Ok(())
    }
}

/// The four corners of a rectangle, starting top-left and going clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectGenerator {
    pub size: Vec2,
    /// Index of the corner emitted first; wraps in both directions.
    pub start_corner: i32,
}

impl Default for RectGenerator {
    fn default() -> Self {
        Self {
            size: Vec2::splat(10.0),
            start_corner: 0,
        }
    }
}

impl GeneratePoints for RectGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        let half = self.size * 0.5;
        let corners = [
            Vec2::new(-half.x, half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(-half.x, -half.y),
        ];
        let offset = self.start_corner.rem_euclid(4) as usize;

        positions.clear();
        positions.extend((0..4).map(|i| center + corners[(i + offset) % 4]));
        Ok(())
    }
}

/// Points along an ellipse, optionally partial, tapered into a spiral or
/// closed with a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundGenerator {
    pub size: Vec2,
    /// Sign selects the winding: positive is clockwise.
    pub direction: f32,
    /// Start angle in turns.
    pub start_offset: f32,
    /// Portion of a full turn, `-1..=1`.
    pub length: f32,
    /// Radius growth at the end of the sweep, relative to the start radius.
    pub end_radius: f32,
    /// Points per full turn.
    pub resolution: usize,
    /// Append the center as a final point.
    pub center_point: bool,
    /// Leave out the point that would coincide with the first on a full turn.
    pub skip_last_position: bool,
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self {
            size: Vec2::splat(10.0),
            direction: 1.0,
            start_offset: 0.0,
            length: 1.0,
            end_radius: 0.0,
            resolution: 10,
            center_point: false,
            skip_last_position: false,
        }
    }
}

impl GeneratePoints for RoundGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_resolution("round resolution", self.resolution, 2)?;

        let steps = self.resolution as f32 * self.length.abs();
        let num_full_steps = steps.ceil() as usize;
        let part_step = 1.0 + (steps - num_full_steps as f32);
        let add_partial_step = part_step >= 1e-4;

        let mut count = num_full_steps;
        if add_partial_step {
            count += 1;
        }
        if self.center_point {
            count += 1;
        }

        let half = (self.size * 0.5).max(Vec2::splat(0.001));
        let divisions = if self.skip_last_position {
            self.resolution as f32 + 1.0
        } else {
            self.resolution as f32
        };
        let increment = TWO_PI / divisions * self.direction.signum();
        let start = self.start_offset * TWO_PI;

        let point = |step: f32, completion: f32| {
            center + unit_position(start + increment * step) * (half + half * self.end_radius * completion)
        };

        positions.clear();
        for i in 0..num_full_steps {
            positions.push(point(i as f32, i as f32 / count as f32));
        }

        if add_partial_step {
            let completion = (num_full_steps as f32 + part_step) / count as f32;
            let full = point(num_full_steps as f32, completion);
            let previous = positions.last().copied().unwrap_or(full);
            positions.push(previous.lerp(full, part_step));
        }

        if self.center_point {
            positions.push(center);
        }
        Ok(())
    }
}

/// Radar chart: one point per value, at a radius proportional to the value.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGraphGenerator {
    pub values: Vec<f32>,
    pub min_value: f32,
    pub max_value: f32,
    pub radius: f32,
    /// Start angle in turns.
    pub start_offset: f32,
}

impl Default for RadialGraphGenerator {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            min_value: 0.0,
            max_value: 1.0,
            radius: 10.0,
            start_offset: 0.0,
        }
    }
}

impl GeneratePoints for RadialGraphGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_points(self.values.len(), 3)?;

        let start = self.start_offset * TWO_PI;
        let increment = TWO_PI / self.values.len() as f32;

        positions.clear();
        positions.extend(self.values.iter().enumerate().map(|(i, &value)| {
            let t = inverse_lerp(self.min_value, self.max_value, value).clamp(0.0, 1.0);
            center + unit_position(start + increment * i as f32) * t * self.radius
        }));
        Ok(())
    }
}

/// Line chart spread across `size.x`, values mapped onto `size.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineGraphGenerator {
    pub values: Vec<f32>,
    pub min_value: f32,
    pub max_value: f32,
    pub size: Vec2,
    /// Close the graph down to the bottom corners, for filled area charts.
    pub close_to_bottom: bool,
}

impl Default for LineGraphGenerator {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            min_value: 0.0,
            max_value: 1.0,
            size: Vec2::splat(10.0),
            close_to_bottom: false,
        }
    }
}

impl GeneratePoints for LineGraphGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_points(self.values.len(), 2)?;

        let left = center.x - self.size.x * 0.5;
        let step = self.size.x / (self.values.len() - 1) as f32;

        positions.clear();
        positions.extend(self.values.iter().enumerate().map(|(i, &value)| {
            let t = inverse_lerp(self.min_value, self.max_value, value).clamp(0.0, 1.0);
            Vec2::new(left + step * i as f32, center.y + (t - 0.5) * self.size.y)
        }));

        if self.close_to_bottom {
            let bottom = center.y - self.size.y * 0.5;
            positions.push(Vec2::new(center.x + self.size.x * 0.5, bottom));
            positions.push(Vec2::new(left, bottom));
        }
        Ok(())
    }
}

/// Two-point line leaving the center at an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleLineGenerator {
    /// Direction in turns, clockwise from up.
    pub angle: f32,
    pub length: f32,
    /// Gap before the line starts, relative to `length`.
    pub start_offset: f32,
}

impl Default for AngleLineGenerator {
    fn default() -> Self {
        Self {
            angle: 0.0,
            length: 10.0,
            start_offset: 0.0,
        }
    }
}

impl GeneratePoints for AngleLineGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        let direction = unit_position(self.angle * TWO_PI);
        let start = self.length * self.start_offset;

        positions.clear();
        positions.push(center + direction * start);
        positions.push(center + direction * (self.length + start));
        Ok(())
    }
}

/// Star polygon alternating between the outer radius and `inner_scale` of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGenerator {
    pub radius: Vec2,
    pub inner_scale: f32,
    /// Number of outer points.
    pub points: usize,
    /// Portion of a full turn to cover.
    pub length: f32,
    /// Start angle in turns.
    pub start_offset: f32,
}

impl Default for StarGenerator {
    fn default() -> Self {
        Self {
            radius: Vec2::splat(10.0),
            inner_scale: 0.5,
            points: 5,
            length: 1.0,
            start_offset: 0.0,
        }
    }
}

impl GeneratePoints for StarGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_resolution("star points", self.points, 2)?;

        let count = self.points * 2;
        let start = self.start_offset * TWO_PI;
        let increment = TWO_PI * self.length / count as f32;
        let inner = self.radius * self.inner_scale;

        positions.clear();
        positions.extend((0..count).map(|i| {
            let radius = if i % 2 == 0 { self.radius } else { inner };
            center + unit_position(start + increment * i as f32) * radius
        }));
        Ok(())
    }
}

/// Gear outline: each tooth is two inner and two outer points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearGenerator {
    pub radius: Vec2,
    /// Root radius relative to `radius`.
    pub inner_scale: f32,
    pub teeth: usize,
    /// Width of a tooth's base, relative to its slot.
    pub inner_scaler: f32,
    /// Width of a tooth's tip, relative to its slot.
    pub outer_scaler: f32,
    /// Start angle in turns.
    pub start_offset: f32,
}

impl Default for GearGenerator {
    fn default() -> Self {
        Self {
            radius: Vec2::splat(10.0),
            inner_scale: 0.8,
            teeth: 10,
            inner_scaler: 0.8,
            outer_scaler: 0.5,
            start_offset: 0.0,
        }
    }
}

impl GeneratePoints for GearGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_resolution("gear teeth", self.teeth, 2)?;

        let start = self.start_offset * TWO_PI;
        let increment = TWO_PI / self.teeth as f32;
        let inner = self.radius * self.inner_scale;
        let bottom = increment * 0.49 * self.inner_scaler;
        let top = increment * 0.49 * self.outer_scaler;

        positions.clear();
        for i in 0..self.teeth {
            let angle = start + increment * i as f32;
            positions.push(center + unit_position(angle - bottom) * inner);
            positions.push(center + unit_position(angle - top) * self.radius);
            positions.push(center + unit_position(angle + top) * self.radius);
            positions.push(center + unit_position(angle + bottom) * inner);
        }
        Ok(())
    }
}

/// Source of a point list's positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PointsGenerator {
    /// Positions are supplied directly.
    #[default]
    Custom,
    Rect(RectGenerator),
    Round(RoundGenerator),
    RadialGraph(RadialGraphGenerator),
    LineGraph(LineGraphGenerator),
    AngleLine(AngleLineGenerator),
    Star(StarGenerator),
    Gear(GearGenerator),
    Curve(CurveGenerator),
}

impl PointsGenerator {
    pub fn is_custom(&self) -> bool {
        matches!(self, PointsGenerator::Custom)
    }

    /// Run the generator. `Custom` leaves `positions` as they are.
    pub fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        match self {
            PointsGenerator::Custom => Ok(()),
            PointsGenerator::Rect(g) => g.generate(center, positions),
            PointsGenerator::Round(g) => g.generate(center, positions),
            PointsGenerator::RadialGraph(g) => g.generate(center, positions),
            PointsGenerator::LineGraph(g) => g.generate(center, positions),
            PointsGenerator::AngleLine(g) => g.generate(center, positions),
            PointsGenerator::Star(g) => g.generate(center, positions),
            PointsGenerator::Gear(g) => g.generate(center, positions),
            PointsGenerator::Curve(g) => g.generate(center, positions),
        }
    }
}
