//! Rectangles with four independently rounded corners.
//!
//! The ring visits the corners top right, bottom right, bottom left, top
//! left (clockwise). It has no duplicated closing vertex; fans and strips
//! wrap around to the first vertex instead.

use glam::Vec2;
use shapekit_core::math::{HALF_PI, QUARTER_PI};

use crate::color::Color32;
use crate::error::{GeometryResult, require_points};
use crate::geo_utils::{EdgeGradientData, unit_position};
use crate::props::{AdjustedRounded, AdjustedRounding, Corner, OutlineProperties, RoundedProperties};
use crate::rects::{add_rect, add_rect_ring, rect_uv};
use crate::strip::{Ring, fan, strip};
use crate::vertex::VertexSink;

/// Memoized corner arcs, one table per [`Corner`].
#[derive(Debug, Clone, Default)]
pub struct RoundedCornerUnitPositions {
    corners: [Vec<Vec2>; 4],
    keys: [Option<AdjustedRounding>; 4],
}

impl RoundedCornerUnitPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the tables whose resolution or sharpness changed.
    pub fn update(&mut self, adjusted: &AdjustedRounded) {
        for corner in Corner::ALL {
            let rounding = adjusted.rounding(corner);
            let index = corner.index();
            if self.keys[index] == Some(rounding) {
                continue;
            }
            self.keys[index] = Some(rounding);
            set_corner_positions(&mut self.corners[index], corner.base_angle(), rounding);
        }
    }

    pub fn corner(&self, corner: Corner) -> &[Vec2] {
        &self.corners[corner.index()]
    }

    /// Vertices in one ring.
    pub fn ring_len(&self) -> usize {
        self.corners.iter().map(Vec::len).sum()
    }
}

/// Quarter circle starting at `base_angle`. A sharp corner puts every point
/// on the diagonal, far enough out to reach the rectangle corner.
fn set_corner_positions(positions: &mut Vec<Vec2>, base_angle: f32, rounding: AdjustedRounding) {
    positions.clear();
    let resolution = rounding.resolution.max(2);
    if rounding.make_sharp_corner {
        let position = unit_position(base_angle + QUARTER_PI) * std::f32::consts::SQRT_2;
        positions.resize(resolution, position);
    } else {
        let step = HALF_PI / (resolution - 1) as f32;
        positions.extend((0..resolution).map(|i| unit_position(base_angle + step * i as f32)));
    }
}

/// Layout of one ring: the box the corner centers are inset from and the
/// per-corner radius of the ring around them.
struct RingLayout {
    center: Vec2,
    size: Vec2,
    uv_size: Vec2,
    radii: [f32; 4],
    offset: f32,
    scale: f32,
}

fn add_ring_vertices(
    vh: &mut dyn VertexSink,
    layout: &RingLayout,
    units: &RoundedCornerUnitPositions,
    color: Color32,
) -> Ring {
    let ring = Ring::packed(vh.vertex_count());
    let half = layout.size * 0.5;
    for corner in Corner::RING_ORDER {
        let radius = layout.radii[corner.index()];
        let sign = corner.sign();
        let mut corner_center = layout.center + sign * (half - Vec2::splat(radius * layout.scale));
        let mut outer = (radius + layout.offset) * layout.scale;
        if outer < 0.0 {
            corner_center += sign * outer;
            outer = 0.0;
        }
        for unit in units.corner(corner) {
            let position = corner_center + *unit * outer;
            vh.add_vert(position, color, rect_uv(position, layout.center, layout.uv_size));
        }
    }
    ring
}

/// Filled rounded rectangle fanned from `center`.
///
/// Emits one center vertex plus a ring, so the fill has `vertex count - 1`
/// triangles. Falls back to [`add_rect`] when nothing is rounded.
#[allow(clippy::too_many_arguments)]
pub fn add_rounded_rect(
    vh: &mut dyn VertexSink,
    center: Vec2,
    size: Vec2,
    rounded: &RoundedProperties,
    adjusted: &AdjustedRounded,
    color: Color32,
    units: &mut RoundedCornerUnitPositions,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    if !rounded.is_rounded() {
        add_rect(vh, center, size, color, edge);
        return Ok(());
    }
    units.update(adjusted);
    let count = units.ring_len();
    require_points(count, 3)?;

    let center_index = vh.vertex_count();
    vh.add_vert(center, color, Vec2::splat(0.5));

    let shrink = size.min_element() * (1.0 - edge.inner_scale);
    let solid = add_ring_vertices(
        vh,
        &RingLayout {
            center,
            size: size - Vec2::splat(shrink),
            uv_size: size,
            radii: adjusted.radii,
            offset: edge.shadow_offset,
            scale: edge.inner_scale,
        },
        units,
        color,
    );
    fan(vh, center_index, solid, count, true);

    if edge.is_active {
        let fade = add_ring_vertices(
            vh,
            &RingLayout {
                center,
                size,
                uv_size: size,
                radii: adjusted.radii,
                offset: edge.shadow_offset + edge.size_add,
                scale: 1.0,
            },
            units,
            color.transparent(),
        );
        strip(vh, solid, fade, count, true);
    }
    Ok(())
}

/// Outline of a rounded rectangle: up to four concentric rings (faded
/// inner, solid inner, solid outer, faded outer) stitched pairwise.
#[allow(clippy::too_many_arguments)]
pub fn add_rounded_rect_line(
    vh: &mut dyn VertexSink,
    center: Vec2,
    size: Vec2,
    outline: &OutlineProperties,
    rounded: &RoundedProperties,
    adjusted: &AdjustedRounded,
    color: Color32,
    units: &mut RoundedCornerUnitPositions,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    if !rounded.is_rounded() {
        add_rect_ring(vh, center, size, outline, color, edge);
        return Ok(());
    }
    units.update(adjusted);
    let count = units.ring_len();
    require_points(count, 3)?;

    let center_distance = outline.center_distance();
    let half = outline.half_line_weight() + edge.shadow_offset;
    let layout = |offset: f32| RingLayout {
        center,
        size,
        uv_size: size + Vec2::splat(outline.outer_distance() * 2.0),
        radii: adjusted.radii,
        offset,
        scale: 1.0,
    };
    let faded = color.transparent();

    let fade_inner = edge.is_active.then(|| {
        add_ring_vertices(vh, &layout(center_distance - half - edge.size_add), units, faded)
    });
    let solid_inner = add_ring_vertices(vh, &layout(center_distance - half * edge.inner_scale), units, color);
    let solid_outer = add_ring_vertices(vh, &layout(center_distance + half * edge.inner_scale), units, color);

    if let Some(fade_inner) = fade_inner {
        strip(vh, fade_inner, solid_inner, count, true);
    }
    strip(vh, solid_inner, solid_outer, count, true);
    if edge.is_active {
        let fade_outer = add_ring_vertices(vh, &layout(center_distance + half + edge.size_add), units, faded);
        strip(vh, solid_outer, fade_outer, count, true);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::RoundingProperties;
    use crate::vertex::MeshBuffer;

    fn rounded(radius: f32) -> RoundedProperties {
        RoundedProperties::uniform(radius).with_resolution(RoundingProperties::calculated(4.0))
    }

    #[test]
    fn test_corner_tables_are_memoized() {
        let props = rounded(15.0);
        let adjusted = props.adjusted(Vec2::new(100.0, 60.0), 0.0);
        let mut units = RoundedCornerUnitPositions::new();
        units.update(&adjusted);
        assert_eq!(units.ring_len(), 24);

        let first = units.corner(Corner::TopRight).as_ptr();
        units.update(&adjusted);
        assert_eq!(units.corner(Corner::TopRight).as_ptr(), first);

        // Top right arc runs from "up" to "right".
        let arc = units.corner(Corner::TopRight);
        assert!((arc[0] - Vec2::Y).length() < 1e-6);
        assert!((arc[arc.len() - 1] - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_zero_resolution_corners_still_close_the_ring() {
        let props = rounded(10.0);
        let size = Vec2::new(40.0, 40.0);
        let adjusted = AdjustedRounded {
            radii: [10.0; 4],
            corners: [AdjustedRounding {
                resolution: 0,
                make_sharp_corner: false,
            }; 4],
        };
        let mut units = RoundedCornerUnitPositions::new();
        let mut mesh = MeshBuffer::new();
        add_rounded_rect(
            &mut mesh,
            Vec2::ZERO,
            size,
            &props,
            &adjusted,
            Color32::WHITE,
            &mut units,
            &EdgeGradientData::inactive(),
        )
        .unwrap();

        // Each corner keeps both of its end points.
        assert_eq!(units.ring_len(), 8);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_sharp_corner_reaches_rect_corner() {
        let props = RoundedProperties::individual([0.0, 10.0, 10.0, 10.0]);
        let size = Vec2::new(40.0, 40.0);
        let adjusted = props.adjusted(size, 0.0);
        let mut units = RoundedCornerUnitPositions::new();
        let mut mesh = MeshBuffer::new();
        add_rounded_rect(
            &mut mesh,
            Vec2::ZERO,
            size,
            &props,
            &adjusted,
            Color32::WHITE,
            &mut units,
            &EdgeGradientData::inactive(),
        )
        .unwrap();
        let top_left = mesh.vertices.last().unwrap().position_2d();
        assert!((top_left - Vec2::new(-20.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn test_fill_fan_has_one_triangle_per_ring_vertex() {
        let props = rounded(15.0);
        let size = Vec2::new(100.0, 60.0);
        let adjusted = props.adjusted(size, 0.0);
        let mut units = RoundedCornerUnitPositions::new();
        let mut mesh = MeshBuffer::new();
        add_rounded_rect(
            &mut mesh,
            Vec2::ZERO,
            size,
            &props,
            &adjusted,
            Color32::WHITE,
            &mut units,
            &EdgeGradientData::inactive(),
        )
        .unwrap();
        assert_eq!(mesh.vertices.len(), 25);
        assert_eq!(mesh.triangle_count(), mesh.vertices.len() - 1);
    }

    #[test]
    fn test_outline_ring_counts() {
        let props = rounded(10.0);
        let size = Vec2::new(60.0, 60.0);
        let adjusted = props.adjusted(size, 0.0);
        let outline = OutlineProperties::default().with_line_weight(2.0);
        let mut units = RoundedCornerUnitPositions::new();
        let mut mesh = MeshBuffer::new();
        add_rounded_rect_line(
            &mut mesh,
            Vec2::ZERO,
            size,
            &outline,
            &props,
            &adjusted,
            Color32::WHITE,
            &mut units,
            &EdgeGradientData::for_anti_aliasing(1.0),
        )
        .unwrap();
        let ring = units.ring_len();
        assert_eq!(mesh.vertices.len(), ring * 4);
        assert_eq!(mesh.triangle_count(), ring * 6);
        // First vertex of each solid ring sits on the top edge.
        assert!((mesh.vertices[ring].position_2d().y - 29.0).abs() < 1e-4);
        assert!((mesh.vertices[ring * 2].position_2d().y - 31.0).abs() < 1e-4);
    }
}
