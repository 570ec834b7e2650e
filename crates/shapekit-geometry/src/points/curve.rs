//! Bezier-interpolated polylines built from control points.

use glam::Vec2;
use lyon::geom::{CubicBezierSegment, LineSegment, QuadraticBezierSegment};
use lyon::math::{Point, point};

use super::generators::GeneratePoints;
use crate::error::{GeometryError, GeometryResult, require_points};

/// Samples per segment when a point does not say otherwise.
pub const DEFAULT_CURVE_DIVISIONS: usize = 10;

#[inline]
fn to_point(v: Vec2) -> Point {
    point(v.x, v.y)
}

#[inline]
fn to_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// A point a curve passes through, with optional handles on either side.
///
/// Handles are positions in the same space as `position`, not offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub position: Vec2,
    /// Handle pulling the segment that arrives at this point.
    pub in_control: Option<Vec2>,
    /// Handle pulling the segment that leaves this point.
    pub out_control: Option<Vec2>,
    /// Samples taken along the segment leaving this point.
    pub divisions: usize,
}

impl CurvePoint {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            in_control: None,
            out_control: None,
            divisions: DEFAULT_CURVE_DIVISIONS,
        }
    }

    pub fn with_in_control(mut self, control: Vec2) -> Self {
        self.in_control = Some(control);
        self
    }

    pub fn with_out_control(mut self, control: Vec2) -> Self {
        self.out_control = Some(control);
        self
    }

    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }
}

/// Shape of the path between two consecutive [`CurvePoint`]s.
///
/// Both handles give a cubic, one handle a quadratic and none a straight
/// segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSegment {
    Line(LineSegment<f32>),
    Quadratic(QuadraticBezierSegment<f32>),
    Cubic(CubicBezierSegment<f32>),
}

impl CurveSegment {
    pub fn between(from: &CurvePoint, to: &CurvePoint) -> Self {
        let (start, end) = (to_point(from.position), to_point(to.position));
        match (from.out_control, to.in_control) {
            (Some(c0), Some(c1)) => CurveSegment::Cubic(CubicBezierSegment {
                from: start,
                ctrl1: to_point(c0),
                ctrl2: to_point(c1),
                to: end,
            }),
            (Some(ctrl), None) | (None, Some(ctrl)) => CurveSegment::Quadratic(QuadraticBezierSegment {
                from: start,
                ctrl: to_point(ctrl),
                to: end,
            }),
            (None, None) => CurveSegment::Line(LineSegment { from: start, to: end }),
        }
    }

    pub fn sample(&self, t: f32) -> Vec2 {
        to_vec2(match self {
            CurveSegment::Line(s) => s.sample(t),
            CurveSegment::Quadratic(s) => s.sample(t),
            CurveSegment::Cubic(s) => s.sample(t),
        })
    }

    /// The same path as a cubic, for code that only handles cubics.
    pub fn to_cubic(&self) -> CubicBezierSegment<f32> {
        match self {
            CurveSegment::Line(s) => CubicBezierSegment {
                from: s.from,
                ctrl1: s.sample(1.0 / 3.0),
                ctrl2: s.sample(2.0 / 3.0),
                to: s.to,
            },
            CurveSegment::Quadratic(s) => s.to_cubic(),
            CurveSegment::Cubic(s) => *s,
        }
    }

    pub fn is_straight(&self) -> bool {
        matches!(self, CurveSegment::Line(_))
    }
}

/// Samples a chain of curve segments into a polyline, optionally keeping
/// only part of it.
///
/// `start_ratio` and `length_ratio` are fractions of the sampled length: the
/// polyline runs from `start_ratio` to `length_ratio` of the way along.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGenerator {
    pub points: Vec<CurvePoint>,
    pub start_ratio: f32,
    pub length_ratio: f32,
}

impl Default for CurveGenerator {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            start_ratio: 0.0,
            length_ratio: 1.0,
        }
    }
}

impl CurveGenerator {
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start_ratio: f32, length_ratio: f32) -> Self {
        self.start_ratio = start_ratio;
        self.length_ratio = length_ratio;
        self
    }

    /// Whether the visible range is non-empty.
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2 && self.length_ratio.clamp(0.0, 1.0) > self.start_ratio.clamp(0.0, 1.0)
    }

    pub fn segments(&self) -> impl Iterator<Item = CurveSegment> + '_ {
        self.points
            .windows(2)
            .map(|pair| CurveSegment::between(&pair[0], &pair[1]))
    }

    /// Every sample of the full curve, end points included.
    fn sample_all(&self, center: Vec2, out: &mut Vec<Vec2>) {
        out.clear();
        for (point, segment) in self.points.iter().zip(self.segments()) {
            let divisions = point.divisions.max(1);
            out.extend((0..divisions).map(|k| center + segment.sample(k as f32 / divisions as f32)));
        }
        if let Some(last) = self.points.last() {
            out.push(center + last.position);
        }
    }
}

/// Keep the part of `samples` between the distances `start` and `end` along
/// it, cutting the first and last segments where those distances fall.
fn trim_polyline(samples: &[Vec2], start: f32, end: f32, out: &mut Vec<Vec2>) {
    out.clear();
    let mut travelled = 0.0;
    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = a.distance(b);
        let next = travelled + length;
        if next > start && length > 0.0 {
            let at = |distance: f32| a.lerp(b, ((distance - travelled) / length).clamp(0.0, 1.0));
            if out.is_empty() {
                out.push(at(start));
            }
            if next >= end {
                out.push(at(end));
                return;
            }
            out.push(b);
        }
        travelled = next;
    }
}

impl GeneratePoints for CurveGenerator {
    fn generate(&self, center: Vec2, positions: &mut Vec<Vec2>) -> GeometryResult<()> {
        require_points(self.points.len(), 2)?;
        if !self.is_visible() {
            return Err(GeometryError::InvalidParameter {
                name: "curve length ratio",
                value: self.length_ratio,
            });
        }

        let mut samples = Vec::new();
        self.sample_all(center, &mut samples);

        let start = self.start_ratio.clamp(0.0, 1.0);
        let end = self.length_ratio.clamp(0.0, 1.0);
        if start <= 0.0 && end >= 1.0 {
            *positions = samples;
            return Ok(());
        }

        let total: f32 = samples.windows(2).map(|pair| pair[0].distance(pair[1])).sum();
        trim_polyline(&samples, start * total, end * total, positions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < 1e-3, "{:?} != {:?}", a, b);
    }

    fn arch() -> CurveGenerator {
        CurveGenerator::new(vec![
            CurvePoint::new(Vec2::ZERO)
                .with_out_control(Vec2::new(0.0, 10.0))
                .with_divisions(4),
            CurvePoint::new(Vec2::new(10.0, 0.0)).with_in_control(Vec2::new(10.0, 10.0)),
        ])
    }

    #[test]
    fn test_segment_kind_follows_handles() {
        let a = CurvePoint::new(Vec2::ZERO);
        let b = CurvePoint::new(Vec2::X);
        assert!(CurveSegment::between(&a, &b).is_straight());
        assert!(matches!(
            CurveSegment::between(&a.with_out_control(Vec2::Y), &b),
            CurveSegment::Quadratic(_)
        ));
        assert!(matches!(
            CurveSegment::between(&a, &b.with_in_control(Vec2::Y)),
            CurveSegment::Quadratic(_)
        ));
        assert!(matches!(arch().segments().next(), Some(CurveSegment::Cubic(_))));
    }

    #[test]
    fn test_cubic_samples() {
        let mut positions = Vec::new();
        arch().generate(Vec2::new(100.0, 0.0), &mut positions).unwrap();

        assert_eq!(positions.len(), 5);
        assert_vec_close(positions[0], Vec2::new(100.0, 0.0));
        // Symmetric arch peaks at t = 0.5.
        assert_vec_close(positions[2], Vec2::new(105.0, 7.5));
        assert_vec_close(positions[4], Vec2::new(110.0, 0.0));
    }

    #[test]
    fn test_straight_segments_are_evenly_divided() {
        let curve = CurveGenerator::new(vec![
            CurvePoint::new(Vec2::ZERO).with_divisions(2),
            CurvePoint::new(Vec2::new(10.0, 0.0)).with_divisions(0),
            CurvePoint::new(Vec2::new(10.0, 10.0)),
        ]);
        let mut positions = Vec::new();
        curve.generate(Vec2::ZERO, &mut positions).unwrap();

        // Zero divisions still emits the segment's start point.
        assert_eq!(
            positions,
            vec![
                Vec2::ZERO,
                Vec2::new(5.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(10.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_range_trims_by_length() {
        let curve = CurveGenerator::new(vec![
            CurvePoint::new(Vec2::ZERO).with_divisions(1),
            CurvePoint::new(Vec2::new(10.0, 0.0)).with_divisions(1),
            CurvePoint::new(Vec2::new(10.0, 10.0)),
        ])
        .with_range(0.25, 0.75);
        let mut positions = Vec::new();
        curve.generate(Vec2::ZERO, &mut positions).unwrap();

        assert_eq!(positions.len(), 3);
        assert_vec_close(positions[0], Vec2::new(5.0, 0.0));
        assert_vec_close(positions[1], Vec2::new(10.0, 0.0));
        assert_vec_close(positions[2], Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_empty_range_and_short_input_keep_positions() {
        let mut positions = vec![Vec2::ONE];

        let hidden = arch().with_range(0.5, 0.5);
        assert!(!hidden.is_visible());
        assert!(matches!(
            hidden.generate(Vec2::ZERO, &mut positions),
            Err(GeometryError::InvalidParameter { .. })
        ));

        let single = CurveGenerator::new(vec![CurvePoint::new(Vec2::ZERO)]);
        assert_eq!(
            single.generate(Vec2::ZERO, &mut positions),
            Err(GeometryError::TooFewPoints {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(positions, vec![Vec2::ONE]);
    }

    #[test]
    fn test_to_cubic_keeps_the_path() {
        let segment = CurveSegment::between(
            &CurvePoint::new(Vec2::ZERO).with_out_control(Vec2::new(5.0, 10.0)),
            &CurvePoint::new(Vec2::new(10.0, 0.0)),
        );
        let cubic = segment.to_cubic();
        for t in [0.0, 0.3, 0.5, 0.9] {
            assert_vec_close(to_vec2(cubic.sample(t)), segment.sample(t));
        }

        let line = CurveSegment::between(&CurvePoint::new(Vec2::ZERO), &CurvePoint::new(Vec2::X));
        assert_vec_close(to_vec2(line.to_cubic().sample(0.5)), Vec2::new(0.5, 0.0));
    }
}
