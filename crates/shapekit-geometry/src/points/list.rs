use glam::Vec2;
use lyon::geom::QuadraticBezierSegment;
use lyon::math::point;
use shapekit_core::math::{EPSILON, PI, TWO_PI};

use super::generators::PointsGenerator;
use crate::error::GeometryResult;
use crate::props::RoundingProperties;

/// Cosine at or below which a point is considered to lie on a straight line.
const STRAIGHT_COS: f32 = -0.9999;
/// Share of the shorter adjacent segment a rounded corner may consume.
const MAX_ROUNDING_SHARE: f32 = 0.49;

/// Input of one polyline: either explicit positions or a generator that
/// writes them.
#[derive(Debug, Clone, PartialEq)]
pub struct PointListProperties {
    pub generator: PointsGenerator,
    /// Center handed to the generator.
    pub generator_center: Vec2,
    pub positions: Vec<Vec2>,
    /// Corners sharper than this (radians) are split into two points.
    pub max_angle: f32,
    /// Radius-like distance used to round every corner. 0 disables rounding.
    pub rounding_distance: f32,
    pub corner_rounding: RoundingProperties,
    generator_dirty: bool,
}

impl Default for PointListProperties {
    fn default() -> Self {
        Self {
            generator: PointsGenerator::Custom,
            generator_center: Vec2::ZERO,
            positions: vec![
                Vec2::new(-20.0, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(20.0, -20.0),
            ],
            max_angle: 0.2,
            rounding_distance: 0.0,
            corner_rounding: RoundingProperties::default(),
            generator_dirty: true,
        }
    }
}

impl PointListProperties {
    pub fn new(positions: Vec<Vec2>) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }

    pub fn from_generator(generator: PointsGenerator, center: Vec2) -> Self {
        Self {
            generator,
            generator_center: center,
            positions: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_rounding(mut self, rounding_distance: f32, corner_rounding: RoundingProperties) -> Self {
        self.rounding_distance = rounding_distance.max(0.0);
        self.corner_rounding = corner_rounding;
        self
    }

    pub fn with_max_angle(mut self, max_angle: f32) -> Self {
        self.max_angle = max_angle.clamp(0.0, PI);
        self
    }

    /// Replace the generator; positions are regenerated on the next
    /// [`set_points`](Self::set_points).
    pub fn set_generator(&mut self, generator: PointsGenerator, center: Vec2) {
        if self.generator != generator || self.generator_center != center {
            self.generator = generator;
            self.generator_center = center;
            self.generator_dirty = true;
        }
    }

    pub fn mark_generator_dirty(&mut self) {
        self.generator_dirty = true;
    }

    /// Run the generator if it changed since the last call.
    ///
    /// Returns `true` when `positions` were rewritten.
    pub fn set_points(&mut self) -> GeometryResult<bool> {
        if !self.generator_dirty || self.generator.is_custom() {
            self.generator_dirty = false;
            return Ok(false);
        }
        self.generator
            .generate(self.generator_center, &mut self.positions)?;
        self.generator_dirty = false;
        Ok(true)
    }

    /// Corner handling for `position` between `prev` and `next`, appended to `out`.
    ///
    /// Near-straight points are dropped, very sharp corners are split in
    /// two and, with a rounding distance, corners become a quadratic arc.
    pub(crate) fn interpolate_point(&self, prev: Vec2, position: Vec2, next: Vec2, out: &mut Vec<Vec2>) {
        let back = prev - position;
        let forward = next - position;
        let back_length = back.length();
        let forward_length = forward.length();
        if back_length < EPSILON || forward_length < EPSILON {
            out.push(position);
            return;
        }
        let back = back / back_length;
        let forward = forward / forward_length;

        let cos = back.dot(forward);
        if cos <= STRAIGHT_COS {
            return;
        }
        let angle = cos.clamp(-1.0, 1.0).acos();

        if self.rounding_distance > 0.0 {
            let distance = self
                .rounding_distance
                .min(back_length.min(forward_length) * MAX_ROUNDING_SHARE);
            self.add_rounded_points(back, position, forward, angle, distance, out);
        } else if angle < self.max_angle {
            out.push(position + back * 0.5);
            out.push(position + forward * 0.5);
        } else {
            out.push(position);
        }
    }

    fn add_rounded_points(
        &self,
        back: Vec2,
        position: Vec2,
        forward: Vec2,
        angle: f32,
        distance: f32,
        out: &mut Vec<Vec2>,
    ) {
        let from = position + back * distance;
        let to = position + forward * distance;
        let resolution = self
            .corner_rounding
            .adjusted(distance / 4.0, 0.0, (TWO_PI - angle) / PI)
            .resolution;

        let curve = QuadraticBezierSegment {
            from: point(from.x, from.y),
            ctrl: point(position.x, position.y),
            to: point(to.x, to.y),
        };
        let last = (resolution - 1) as f32;
        out.reserve(resolution);
        for i in 0..resolution {
            let p = curve.sample(i as f32 / last);
            out.push(Vec2::new(p.x, p.y));
        }
    }
}

/// Collapse pairs of adjacent points closer than `min_distance` into their
/// midpoint. Open polylines keep both end points; closed ones also merge
/// across the seam.
pub(crate) fn merge_close_points(input: &[Vec2], min_distance: f32, closed: bool, out: &mut Vec<Vec2>) {
    out.clear();
    let Some(&first) = input.first() else {
        return;
    };
    let count = input.len();
    let min_sqr = min_distance * min_distance;
    let end = if closed { count } else { count - 1 };

    out.push(first);
    let mut i = 1;
    while i < end {
        if i + 1 < end && input[i].distance_squared(input[i + 1]) < min_sqr {
            out.push(input[i].lerp(input[i + 1], 0.5));
            i += 2;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }

    if !closed {
        if count > 1 {
            out.push(input[count - 1]);
        }
    } else if out.len() > 1 {
        let last = out[out.len() - 1];
        if last.distance_squared(out[0]) < min_sqr {
            out[0] = out[0].lerp(last, 0.5);
            out.pop();
        }
    }
}

/// Drop points that coincide with their predecessor.
pub(crate) fn remove_coincident(points: &mut Vec<Vec2>, closed: bool) {
    let min_sqr = EPSILON * EPSILON;
    points.dedup_by(|b, a| a.distance_squared(*b) < min_sqr);
    if closed {
        while points.len() > 1 && points[points.len() - 1].distance_squared(points[0]) < min_sqr {
            points.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::generators::RectGenerator;

    #[test]
    fn test_merge_open_keeps_ends() {
        let input = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.5, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.2, 0.0),
        ];
        let mut out = Vec::new();
        merge_close_points(&input, 2.0, false, &mut out);
        assert_eq!(
            out,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(10.25, 0.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(20.2, 0.0),
            ]
        );
    }

    #[test]
    fn test_merge_closed_wraps_seam() {
        let input = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.5, 0.0),
        ];
        let mut out = Vec::new();
        merge_close_points(&input, 2.0, true, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Vec2::new(0.25, 0.0));
    }

    #[test]
    fn test_remove_coincident() {
        let mut points = vec![Vec2::ZERO, Vec2::ZERO, Vec2::ONE, Vec2::ZERO];
        remove_coincident(&mut points, true);
        assert_eq!(points, vec![Vec2::ZERO, Vec2::ONE]);
    }

    #[test]
    fn test_straight_points_are_dropped() {
        let props = PointListProperties::default();
        let mut out = Vec::new();
        props.interpolate_point(Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::new(1.0, 0.0), &mut out);
        assert!(out.is_empty());
        props.interpolate_point(Vec2::new(-1.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 1.0), &mut out);
        assert_eq!(out, vec![Vec2::ZERO]);
    }

    #[test]
    fn test_sharp_corner_is_split() {
        let props = PointListProperties::default();
        let mut out = Vec::new();
        props.interpolate_point(Vec2::new(10.0, 0.0), Vec2::ZERO, Vec2::new(10.0, 0.5), &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_rounded_corner_is_clamped() {
        let props = PointListProperties::default().with_rounding(100.0, RoundingProperties::fixed(5));
        let mut out = Vec::new();
        props.interpolate_point(Vec2::new(-10.0, 0.0), Vec2::ZERO, Vec2::new(0.0, 20.0), &mut out);
        assert_eq!(out.len(), 5);
        // 49% of the shorter segment.
        assert!((out[0] - Vec2::new(-4.9, 0.0)).length() < 1e-4);
        assert!((out[4] - Vec2::new(0.0, 4.9)).length() < 1e-4);
    }

    #[test]
    fn test_set_points_runs_generator_once() {
        let mut props = PointListProperties::from_generator(
            PointsGenerator::Rect(RectGenerator::default()),
            Vec2::ZERO,
        );
        assert!(props.set_points().unwrap());
        assert_eq!(props.positions.len(), 4);
        assert!(!props.set_points().unwrap());

        props.set_generator(PointsGenerator::Rect(RectGenerator::default()), Vec2::ZERO);
        assert!(!props.set_points().unwrap());
        props.set_generator(PointsGenerator::Rect(RectGenerator::default()), Vec2::ONE);
        assert!(props.set_points().unwrap());
    }
}
