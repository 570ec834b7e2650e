//! Shear applied to finished mesh positions.

use glam::Vec2;

use crate::rect::Rect;
use crate::vertex::{UiVertex, VertexSink};

/// Largest skew angle in degrees; the shear grows without bound near 90.
pub const MAX_SKEW_DEGREES: f32 = 89.0;

/// Horizontal and vertical skew angles in degrees.
///
/// `angles.x` leans vertical edges: points move along x in proportion to
/// their height above the rect's bottom edge. `angles.y` does the same for
/// horizontal edges, along y by the distance from the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkewProperties {
    pub angles: Vec2,
}

impl SkewProperties {
    pub fn new(x_degrees: f32, y_degrees: f32) -> Self {
        Self {
            angles: Vec2::new(x_degrees, y_degrees),
        }
    }

    pub fn validated(self) -> Self {
        Self {
            angles: self
                .angles
                .clamp(Vec2::splat(-MAX_SKEW_DEGREES), Vec2::splat(MAX_SKEW_DEGREES)),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.angles == Vec2::ZERO
    }

    /// Shear factors `(tan x, tan y)` of the clamped angles.
    pub fn factors(&self) -> Vec2 {
        let angles = self.validated().angles;
        Vec2::new(angles.x.to_radians().tan(), angles.y.to_radians().tan())
    }

    /// `position` sheared around the bottom-left corner of `rect`.
    #[inline]
    pub fn apply(&self, position: Vec2, rect: &Rect) -> Vec2 {
        let local = position - rect.min();
        position + Vec2::new(local.y, local.x) * self.factors()
    }
}

/// Skew every vertex of an already built mesh in place.
pub fn skew_vertices(vertices: &mut [UiVertex], rect: &Rect, skew: &SkewProperties) {
    if skew.is_identity() {
        return;
    }
    for vertex in vertices {
        let position = skew.apply(vertex.position_2d(), rect);
        vertex.position[0] = position.x;
        vertex.position[1] = position.y;
    }
}

/// A sink that skews vertices on their way into `inner`.
pub struct SkewSink<'a> {
    inner: &'a mut dyn VertexSink,
    origin: Vec2,
    factors: Vec2,
}

impl<'a> SkewSink<'a> {
    pub fn new(inner: &'a mut dyn VertexSink, rect: &Rect, skew: &SkewProperties) -> Self {
        Self {
            inner,
            origin: rect.min(),
            factors: skew.factors(),
        }
    }
}

impl VertexSink for SkewSink<'_> {
    fn vertex_count(&self) -> u32 {
        self.inner.vertex_count()
    }

    fn add_vertex(&mut self, mut vertex: UiVertex) {
        let local = vertex.position_2d() - self.origin;
        let shift = Vec2::new(local.y, local.x) * self.factors;
        vertex.position[0] += shift.x;
        vertex.position[1] += shift.y;
        self.inner.add_vertex(vertex);
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.inner.add_triangle(i0, i1, i2);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color32;
    use crate::vertex::MeshBuffer;

    fn rect() -> Rect {
        Rect::new(10.0, 20.0, 40.0, 30.0)
    }

    #[test]
    fn test_horizontal_skew_leans_by_height() {
        let skew = SkewProperties::new(45.0, 0.0);
        let r = rect();
        // Bottom edge stays, the top edge moves by the height.
        assert!(skew.apply(Vec2::new(10.0, 20.0), &r).distance(Vec2::new(10.0, 20.0)) < 1e-4);
        assert!(skew.apply(Vec2::new(10.0, 50.0), &r).distance(Vec2::new(40.0, 50.0)) < 1e-4);
        assert!(skew.apply(Vec2::new(30.0, 35.0), &r).distance(Vec2::new(45.0, 35.0)) < 1e-4);
    }

    #[test]
    fn test_vertical_skew_uses_unskewed_x() {
        let skew = SkewProperties::new(45.0, -45.0);
        let moved = skew.apply(Vec2::new(50.0, 20.0), &rect());
        assert!(moved.distance(Vec2::new(50.0, -20.0)) < 1e-4, "{:?}", moved);
    }

    #[test]
    fn test_angles_are_clamped() {
        let skew = SkewProperties::new(90.0, -120.0).validated();
        assert_eq!(skew.angles, Vec2::new(MAX_SKEW_DEGREES, -MAX_SKEW_DEGREES));
        assert!(SkewProperties::new(90.0, 0.0).factors().x.is_finite());
    }

    #[test]
    fn test_sink_matches_post_pass() {
        let skew = SkewProperties::new(20.0, 10.0);
        let r = rect();
        let points = [Vec2::new(10.0, 20.0), Vec2::new(50.0, 20.0), Vec2::new(30.0, 50.0)];

        let mut direct = MeshBuffer::new();
        {
            let mut sink = SkewSink::new(&mut direct, &r, &skew);
            for p in points {
                sink.add_vert(p, Color32::WHITE, Vec2::ZERO);
            }
            sink.add_triangle(0, 1, 2);
        }

        let mut post = MeshBuffer::new();
        for p in points {
            post.add_vert(p, Color32::WHITE, Vec2::ZERO);
        }
        post.add_triangle(0, 1, 2);
        skew_vertices(&mut post.vertices, &r, &skew);

        assert_eq!(direct.indices, post.indices);
        for (a, b) in direct.vertices.iter().zip(&post.vertices) {
            assert!(a.position_2d().distance(b.position_2d()) < 1e-4);
        }
    }
}
