//! Test utilities for shapekit.
//!
//! - [`RecordingSink`] - a [`VertexSink`] that records every call and checks
//!   the index contract as triangles arrive
//! - Mesh inspection helpers for asserting on finished buffers
//!
//! # Example
//!
//! ```rust
//! use shapekit_geometry::{EllipseShape, MeshContext, MeshShape, Rect};
//! use shapekit_test_utils::{RecordingSink, assert_indices_valid};
//!
//! let mut sink = RecordingSink::new();
//! let mut shape = EllipseShape::default();
//! shape
//!     .populate_mesh(&mut sink, &MeshContext::new(Rect::new(0.0, 0.0, 40.0, 40.0)))
//!     .unwrap();
//!
//! assert_eq!(sink.clear_count(), 1);
//! assert_indices_valid(&sink.mesh);
//! ```

use glam::Vec2;
use shapekit_geometry::{MeshBuffer, UiVertex, VertexSink};

/// A call made on a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkCall {
    AddVertex { index: u32 },
    AddTriangle { indices: [u32; 3] },
    Clear,
}

/// Vertex sink that keeps a log of calls next to the mesh it builds.
///
/// Panics as soon as a triangle references a vertex that was not appended
/// yet, so the failing triangulator shows up in the backtrace.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub mesh: MeshBuffer,
    calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since creation or the last [`reset_calls`](Self::reset_calls).
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, SinkCall::Clear)).count()
    }

    pub fn vertex_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::AddVertex { .. }))
            .count()
    }

    pub fn triangle_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SinkCall::AddTriangle { .. }))
            .count()
    }

    /// Forget the call log, keeping the mesh.
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }
}

impl VertexSink for RecordingSink {
    fn vertex_count(&self) -> u32 {
        self.mesh.vertex_count()
    }

    fn add_vertex(&mut self, vertex: UiVertex) {
        let index = self.mesh.vertex_count();
        self.calls.push(SinkCall::AddVertex { index });
        self.mesh.add_vertex(vertex);
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        let count = self.mesh.vertex_count();
        assert!(
            i0 < count && i1 < count && i2 < count,
            "triangle ({}, {}, {}) emitted with only {} vertices",
            i0,
            i1,
            i2,
            count
        );
        self.calls.push(SinkCall::AddTriangle { indices: [i0, i1, i2] });
        self.mesh.add_triangle(i0, i1, i2);
    }

    fn clear(&mut self) {
        self.calls.push(SinkCall::Clear);
        self.mesh.clear();
    }
}

/// Sum of the absolute triangle areas of `mesh`.
///
/// Equals the covered area when no two triangles overlap.
pub fn triangle_area_sum(mesh: &MeshBuffer) -> f32 {
    mesh.triangles()
        .map(|[a, b, c]| {
            let a = mesh.vertices[a as usize].position_2d();
            let b = mesh.vertices[b as usize].position_2d();
            let c = mesh.vertices[c as usize].position_2d();
            ((b - a).perp_dot(c - a) * 0.5).abs()
        })
        .sum()
}

/// Sum of triangle areas restricted to triangles whose vertices are all opaque.
pub fn solid_area_sum(mesh: &MeshBuffer) -> f32 {
    let solid = MeshBuffer {
        vertices: mesh.vertices.clone(),
        indices: mesh
            .triangles()
            .filter(|t| t.iter().all(|i| mesh.vertices[*i as usize].alpha() > 0))
            .flatten()
            .collect(),
    };
    triangle_area_sum(&solid)
}

pub fn assert_indices_valid(mesh: &MeshBuffer) {
    assert_eq!(mesh.indices.len() % 3, 0, "index count is not a multiple of 3");
    let count = mesh.vertices.len() as u32;
    for (t, [a, b, c]) in mesh.triangles().enumerate() {
        assert!(
            a < count && b < count && c < count,
            "triangle {} ({}, {}, {}) out of range for {} vertices",
            t,
            a,
            b,
            c,
            count
        );
    }
}

pub fn assert_all_finite(mesh: &MeshBuffer) {
    for (i, v) in mesh.vertices.iter().enumerate() {
        let p = v.position_2d();
        assert!(p.is_finite(), "vertex {} has a non-finite position {:?}", i, p);
    }
}

/// Number of vertices with zero alpha (AA and shadow fade rings).
pub fn count_transparent(mesh: &MeshBuffer) -> usize {
    mesh.vertices.iter().filter(|v| v.alpha() == 0).count()
}

/// Axis-aligned bounds of the mesh positions as `(min, max)`.
pub fn bounds(mesh: &MeshBuffer) -> (Vec2, Vec2) {
    mesh.vertices.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(min, max), v| (min.min(v.position_2d()), max.max(v.position_2d())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_geometry::Color32;

    #[test]
    fn test_recording_sink_logs_calls() {
        let mut sink = RecordingSink::new();
        sink.add_vert(Vec2::ZERO, Color32::WHITE, Vec2::ZERO);
        sink.add_vert(Vec2::X, Color32::WHITE, Vec2::ZERO);
        sink.add_vert(Vec2::Y, Color32::TRANSPARENT, Vec2::ZERO);
        sink.add_triangle(0, 1, 2);

        assert_eq!(sink.vertex_calls(), 3);
        assert_eq!(sink.triangle_calls(), 1);
        assert_eq!(triangle_area_sum(&sink.mesh), 0.5);
        assert_eq!(count_transparent(&sink.mesh), 1);
        assert_eq!(bounds(&sink.mesh), (Vec2::ZERO, Vec2::ONE));

        sink.clear();
        assert_eq!(sink.clear_count(), 1);
        assert!(sink.mesh.vertices.is_empty());
    }

    #[test]
    #[should_panic(expected = "emitted with only 1 vertices")]
    fn test_early_triangle_panics() {
        let mut sink = RecordingSink::new();
        sink.add_vert(Vec2::ZERO, Color32::WHITE, Vec2::ZERO);
        sink.add_triangle(0, 1, 2);
    }
}
