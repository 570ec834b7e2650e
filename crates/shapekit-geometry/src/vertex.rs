//! Vertex format and the append-only sink the triangulators write into.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};
use static_assertions::const_assert_eq;

use crate::color::Color32;

/// Normal written for every UI vertex.
pub const UI_NORMAL: Vec3 = Vec3::new(0.0, 0.0, -1.0);
/// Tangent written for every UI vertex.
pub const UI_TANGENT: Vec4 = Vec4::new(1.0, 0.0, 0.0, -1.0);

/// Vertex emitted by the shape triangulators.
///
/// Position is 2D embedded in 3D (z is always 0).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
    pub uv0: [f32; 2],
    pub normal: [f32; 3],
    pub tangent: [f32; 4],
}

const_assert_eq!(std::mem::size_of::<UiVertex>(), 52);

impl UiVertex {
    pub fn new(position: Vec2, color: Color32, uv: Vec2) -> Self {
        Self {
            position: [position.x, position.y, 0.0],
            color: color.to_array(),
            uv0: uv.to_array(),
            normal: UI_NORMAL.to_array(),
            tangent: UI_TANGENT.to_array(),
        }
    }

    #[inline]
    pub fn position_2d(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.color[3]
    }
}

/// Append-only vertex and triangle buffer.
///
/// This is the only contract the triangulators need from a host. Indices
/// passed to [`add_triangle`](VertexSink::add_triangle) must refer to
/// vertices that were already appended.
pub trait VertexSink {
    /// Number of vertices appended since the last clear.
    fn vertex_count(&self) -> u32;

    fn add_vertex(&mut self, vertex: UiVertex);

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Drop all vertices and triangles.
    fn clear(&mut self);

    /// Append a vertex with the UI normal and tangent.
    #[inline]
    fn add_vert(&mut self, position: Vec2, color: Color32, uv: Vec2) {
        self.add_vertex(UiVertex::new(position, color, uv));
    }
}

/// Owned vertex/index buffers.
///
/// Capacity is retained across [`clear`](VertexSink::clear) so a shape that
/// rebuilds every frame stops allocating once it has reached its steady size.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    /// Vertex data
    pub vertices: Vec<UiVertex>,
    /// Index data (triangles)
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Raw vertex bytes for a GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl VertexSink for MeshBuffer {
    #[inline]
    fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    fn add_vertex(&mut self, vertex: UiVertex) {
        self.vertices.push(vertex);
    }

    #[inline]
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        debug_assert!(
            i0.max(i1).max(i2) < self.vertex_count(),
            "triangle ({}, {}, {}) references a vertex that was not appended yet",
            i0,
            i1,
            i2
        );
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
