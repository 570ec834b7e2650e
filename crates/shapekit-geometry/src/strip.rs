//! Index stitching shared by the triangulators.

use crate::vertex::VertexSink;

/// Vertices of one ring inside the sink: element `i` is at `base + i * stride`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ring {
    pub base: u32,
    pub stride: u32,
}

impl Ring {
    pub fn new(base: u32, stride: u32) -> Self {
        Self { base, stride }
    }

    /// Ring of consecutive vertices.
    pub fn packed(base: u32) -> Self {
        Self { base, stride: 1 }
    }

    #[inline]
    pub fn at(&self, i: usize) -> u32 {
        self.base + i as u32 * self.stride
    }
}

/// Fan from `center` over `count` ring vertices. A closed fan also connects
/// the last vertex back to the first.
pub(crate) fn fan(vh: &mut dyn VertexSink, center: u32, ring: Ring, count: usize, closed: bool) {
    if count < 2 {
        return;
    }
    let segments = if closed { count } else { count - 1 };
    for i in 0..segments {
        vh.add_triangle(center, ring.at(i), ring.at((i + 1) % count));
    }
}

/// Quads between two rings of equal length.
pub(crate) fn strip(vh: &mut dyn VertexSink, a: Ring, b: Ring, count: usize, closed: bool) {
    strip_by(vh, count, closed, |i| a.at(i), |i| b.at(i));
}

/// Quads between two index chains of `count` vertices given by `a` and `b`.
pub(crate) fn strip_by(
    vh: &mut dyn VertexSink,
    count: usize,
    closed: bool,
    a: impl Fn(usize) -> u32,
    b: impl Fn(usize) -> u32,
) {
    if count < 2 {
        return;
    }
    let segments = if closed { count } else { count - 1 };
    for i in 0..segments {
        let j = (i + 1) % count;
        vh.add_triangle(a(i), b(i), b(j));
        vh.add_triangle(a(i), b(j), a(j));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::MeshBuffer;
    use crate::Color32;
    use glam::Vec2;

    fn buffer(vertices: usize) -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        for _ in 0..vertices {
            mesh.add_vert(Vec2::ZERO, Color32::WHITE, Vec2::ZERO);
        }
        mesh
    }

    #[test]
    fn test_closed_fan_wraps() {
        let mut mesh = buffer(5);
        fan(&mut mesh, 0, Ring::packed(1), 4, true);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.indices[9..], &[0, 4, 1]);
    }

    #[test]
    fn test_interleaved_strip() {
        let mut mesh = buffer(6);
        strip(&mut mesh, Ring::new(0, 2), Ring::new(1, 2), 3, false);
        assert_eq!(mesh.indices, vec![0, 1, 3, 0, 3, 2, 2, 3, 5, 2, 5, 4]);
    }
}
