//! Axis-aligned rectangles, rectangular outlines and two-color gradient
//! strips.

use glam::Vec2;

use crate::color::Color32;
use crate::geo_utils::EdgeGradientData;
use crate::props::{Corner, OutlineProperties};
use crate::strip::{Ring, strip};
use crate::vertex::VertexSink;

/// Texture coordinate of `position` inside a rect of `size` centered on `center`.
#[inline]
pub(crate) fn rect_uv(position: Vec2, center: Vec2, size: Vec2) -> Vec2 {
    (position - center) / size.max(Vec2::splat(f32::EPSILON)) + Vec2::splat(0.5)
}

/// Filled rectangle of `size` centered on `center`.
///
/// Corners are emitted clockwise from the top right. With an active gradient
/// a faded ring is stitched around the (shrunk) solid quad.
pub fn add_rect(
    vh: &mut dyn VertexSink,
    center: Vec2,
    size: Vec2,
    color: Color32,
    edge: &EdgeGradientData,
) {
    let shrink = size.min_element() * (1.0 - edge.inner_scale);
    let solid_half = (size - Vec2::splat(shrink)) * 0.5 + Vec2::splat(edge.shadow_offset * edge.inner_scale);

    let solid = Ring::packed(vh.vertex_count());
    for corner in Corner::RING_ORDER {
        let position = center + corner.sign() * solid_half;
        vh.add_vert(position, color, rect_uv(position, center, size));
    }
    vh.add_triangle(solid.at(0), solid.at(1), solid.at(2));
    vh.add_triangle(solid.at(0), solid.at(2), solid.at(3));

    if edge.is_active {
        let fade_half = size * 0.5 + Vec2::splat(edge.shadow_offset + edge.size_add);
        let faded = color.transparent();
        let fade = Ring::packed(vh.vertex_count());
        for corner in Corner::RING_ORDER {
            let position = center + corner.sign() * fade_half;
            vh.add_vert(position, faded, rect_uv(position, center, size));
        }
        strip(vh, solid, fade, 4, true);
    }
}

/// Rectangular outline around a rect of `size`, placed by `outline`.
pub fn add_rect_ring(
    vh: &mut dyn VertexSink,
    center: Vec2,
    size: Vec2,
    outline: &OutlineProperties,
    color: Color32,
    edge: &EdgeGradientData,
) {
    let uv_size = size + Vec2::splat(outline.outer_distance() * 2.0);
    let center_half = size * 0.5 + Vec2::splat(outline.center_distance());
    let half = outline.half_line_weight() + edge.shadow_offset;

    let solid_inner = (center_half - Vec2::splat(half * edge.inner_scale)).max(Vec2::ZERO);
    let solid_outer = center_half + Vec2::splat(half * edge.inner_scale);
    let fade_inner = (center_half - Vec2::splat(half + edge.size_add)).max(Vec2::ZERO);
    let fade_outer = center_half + Vec2::splat(half + edge.size_add);

    let stride = if edge.is_active { 4 } else { 2 };
    let base = vh.vertex_count();
    let faded = color.transparent();
    for corner in Corner::RING_ORDER {
        let sign = corner.sign();
        let mut add = |extent: Vec2, color: Color32| {
            let position = center + sign * extent;
            vh.add_vert(position, color, rect_uv(position, center, uv_size));
        };
        add(solid_inner, color);
        add(solid_outer, color);
        if edge.is_active {
            add(fade_inner, faded);
            add(fade_outer, faded);
        }
    }

    let inner = Ring::new(base, stride);
    let outer = Ring::new(base + 1, stride);
    strip(vh, inner, outer, 4, true);
    if edge.is_active {
        strip(vh, Ring::new(base + 2, stride), inner, 4, true);
        strip(vh, outer, Ring::new(base + 3, stride), 4, true);
    }
}

/// Quad whose top edge is `top_color` and bottom edge `bottom_color`.
///
/// `top_left` is the top-left corner; the quad extends `height` down and
/// `width` right, shifted by `offset`.
pub fn add_vertical_two_color_rect(
    vh: &mut dyn VertexSink,
    top_left: Vec2,
    height: f32,
    width: f32,
    top_color: Color32,
    bottom_color: Color32,
    offset: Vec2,
) {
    let origin = top_left + offset;
    add_two_color_quad(
        vh,
        [
            (origin, top_color, Vec2::new(0.0, 1.0)),
            (origin + Vec2::new(width, 0.0), top_color, Vec2::new(1.0, 1.0)),
            (origin + Vec2::new(width, -height), bottom_color, Vec2::new(1.0, 0.0)),
            (origin + Vec2::new(0.0, -height), bottom_color, Vec2::new(0.0, 0.0)),
        ],
    );
}

/// Quad whose left edge is `left_color` and right edge `right_color`.
pub fn add_horizontal_two_color_rect(
    vh: &mut dyn VertexSink,
    top_left: Vec2,
    height: f32,
    width: f32,
    left_color: Color32,
    right_color: Color32,
    offset: Vec2,
) {
    let origin = top_left + offset;
    add_two_color_quad(
        vh,
        [
            (origin, left_color, Vec2::new(0.0, 1.0)),
            (origin + Vec2::new(width, 0.0), right_color, Vec2::new(1.0, 1.0)),
            (origin + Vec2::new(width, -height), right_color, Vec2::new(1.0, 0.0)),
            (origin + Vec2::new(0.0, -height), left_color, Vec2::new(0.0, 0.0)),
        ],
    );
}

fn add_two_color_quad(vh: &mut dyn VertexSink, corners: [(Vec2, Color32, Vec2); 4]) {
    let base = vh.vertex_count();
    for (position, color, uv) in corners {
        vh.add_vert(position, color, uv);
    }
    vh.add_triangle(base, base + 1, base + 2);
    vh.add_triangle(base, base + 2, base + 3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::MeshBuffer;

    #[test]
    fn test_plain_rect() {
        let mut mesh = MeshBuffer::new();
        add_rect(
            &mut mesh,
            Vec2::new(50.0, 30.0),
            Vec2::new(100.0, 60.0),
            Color32::WHITE,
            &EdgeGradientData::inactive(),
        );
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.vertices[0].position_2d(), Vec2::new(100.0, 60.0));
        assert_eq!(mesh.vertices[0].uv0, [1.0, 1.0]);
        assert_eq!(mesh.vertices[2].uv0, [0.0, 0.0]);
    }

    #[test]
    fn test_soft_shadow_shrinks_solid_quad() {
        let mut mesh = MeshBuffer::new();
        add_rect(
            &mut mesh,
            Vec2::ZERO,
            Vec2::new(40.0, 20.0),
            Color32::BLACK,
            &EdgeGradientData::active(0.5, 4.0, 6.0),
        );
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 2 + 8);
        // shrink = 20 * 0.5, solid half = (30, 10) / 2 + 2
        assert_eq!(mesh.vertices[0].position_2d(), Vec2::new(17.0, 7.0));
        assert_eq!(mesh.vertices[4].position_2d(), Vec2::new(30.0, 20.0));
        assert_eq!(mesh.vertices[4].alpha(), 0);
    }

    #[test]
    fn test_rect_ring() {
        let outline = OutlineProperties::default().with_line_weight(4.0);
        let mut mesh = MeshBuffer::new();
        add_rect_ring(
            &mut mesh,
            Vec2::ZERO,
            Vec2::new(20.0, 20.0),
            &outline,
            Color32::WHITE,
            &EdgeGradientData::inactive(),
        );
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertices[0].position_2d(), Vec2::new(8.0, 8.0));
        assert_eq!(mesh.vertices[1].position_2d(), Vec2::new(12.0, 12.0));
    }

    #[test]
    fn test_two_color_rects() {
        let mut mesh = MeshBuffer::new();
        add_vertical_two_color_rect(
            &mut mesh,
            Vec2::new(0.0, 10.0),
            10.0,
            50.0,
            Color32::WHITE,
            Color32::BLACK,
            Vec2::ZERO,
        );
        assert_eq!(mesh.vertices[0].color, Color32::WHITE.to_array());
        assert_eq!(mesh.vertices[3].position_2d(), Vec2::ZERO);
        assert_eq!(mesh.vertices[3].color, Color32::BLACK.to_array());

        mesh.clear();
        add_horizontal_two_color_rect(
            &mut mesh,
            Vec2::new(0.0, 10.0),
            10.0,
            5.0,
            Color32::WHITE,
            Color32::BLACK,
            Vec2::ZERO,
        );
        assert_eq!(mesh.vertices[1].color, Color32::BLACK.to_array());
        assert_eq!(mesh.vertices[3].color, Color32::WHITE.to_array());
        assert_eq!(mesh.triangle_count(), 2);
    }
}
