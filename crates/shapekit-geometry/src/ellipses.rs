//! Filled ellipses and elliptical outlines.

use glam::Vec2;

use crate::color::Color32;
use crate::error::{GeometryResult, require_points};
use crate::geo_utils::{EdgeGradientData, UnitPositionData};
use crate::props::OutlineProperties;
use crate::strip::{Ring, fan, strip};
use crate::vertex::VertexSink;

/// Texture coordinate of `offset` from the center of an ellipse spanning
/// `extent` in each direction.
#[inline]
pub(crate) fn radial_uv(offset: Vec2, extent: Vec2) -> Vec2 {
    Vec2::splat(0.5) + offset / extent.max(Vec2::splat(f32::EPSILON)) * 0.5
}

/// Filled ellipse as a fan around `center`, one ring vertex per unit position.
///
/// With an active gradient the solid ring shrinks by `inner_scale` and an
/// alpha-faded ring is stitched around it. Fails without writing anything
/// when the unit table has fewer than 3 positions.
pub fn add_circle(
    vh: &mut dyn VertexSink,
    center: Vec2,
    radius: Vec2,
    color: Color32,
    unit_positions: &UnitPositionData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    let units = unit_positions.positions();
    let count = units.len();
    require_points(count, 3)?;

    let solid_radius = (radius + Vec2::splat(edge.shadow_offset)) * edge.inner_scale;
    let uv_extent = radius + Vec2::splat(edge.shadow_offset + edge.size_add);

    let center_index = vh.vertex_count();
    vh.add_vert(center, color, Vec2::splat(0.5));

    let solid = Ring::packed(vh.vertex_count());
    for unit in units {
        let offset = *unit * solid_radius;
        vh.add_vert(center + offset, color, radial_uv(offset, uv_extent));
    }
    fan(vh, center_index, solid, count, true);

    if edge.is_active {
        let fade_radius = radius + Vec2::splat(edge.shadow_offset + edge.size_add);
        let faded = color.transparent();
        let fade = Ring::packed(vh.vertex_count());
        for unit in units {
            let offset = *unit * fade_radius;
            vh.add_vert(center + offset, faded, radial_uv(offset, uv_extent));
        }
        strip(vh, solid, fade, count, true);
    }
    Ok(())
}

/// Elliptical outline around an ellipse of `radius`, placed by `outline`.
///
/// Emits the solid band and, with an active gradient, a faded band on each
/// side of it.
pub fn add_ring(
    vh: &mut dyn VertexSink,
    center: Vec2,
    radius: Vec2,
    outline: &OutlineProperties,
    color: Color32,
    unit_positions: &UnitPositionData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    let units = unit_positions.positions();
    let count = units.len();
    require_points(count, 3)?;

    let center_radius = radius + Vec2::splat(outline.center_distance());
    let half = outline.half_line_weight() + edge.shadow_offset;
    let solid_inner = (center_radius - Vec2::splat(half * edge.inner_scale)).max(Vec2::ZERO);
    let solid_outer = center_radius + Vec2::splat(half * edge.inner_scale);
    let fade_inner = (center_radius - Vec2::splat(half + edge.size_add)).max(Vec2::ZERO);
    let fade_outer = center_radius + Vec2::splat(half + edge.size_add);
    let uv_extent = fade_outer;

    let stride = if edge.is_active { 4 } else { 2 };
    let base = vh.vertex_count();
    let faded = color.transparent();
    for unit in units {
        let inner = *unit * solid_inner;
        let outer = *unit * solid_outer;
        vh.add_vert(center + inner, color, radial_uv(inner, uv_extent));
        vh.add_vert(center + outer, color, radial_uv(outer, uv_extent));
        if edge.is_active {
            let inner = *unit * fade_inner;
            let outer = *unit * fade_outer;
            vh.add_vert(center + inner, faded, radial_uv(inner, uv_extent));
            vh.add_vert(center + outer, faded, radial_uv(outer, uv_extent));
        }
    }

    let inner = Ring::new(base, stride);
    let outer = Ring::new(base + 1, stride);
    strip(vh, inner, outer, count, true);
    if edge.is_active {
        strip(vh, Ring::new(base + 2, stride), inner, count, true);
        strip(vh, outer, Ring::new(base + 3, stride), count, true);
    }
    Ok(())
}
