//! Pie sectors and annular arc bands.
//!
//! Arc points are sampled directly from [`AdjustedArc::angle`]. Full turns
//! fall back to the ellipse triangulators, which use the memoized unit table.

use glam::Vec2;

use crate::color::Color32;
use crate::ellipses::{add_circle, add_ring, radial_uv};
use crate::error::GeometryResult;
use crate::geo_utils::{EdgeGradientData, UnitPositionData, unit_position};
use crate::props::{AdjustedArc, OutlineProperties};
use crate::strip::{Ring, fan, strip};
use crate::vertex::VertexSink;

/// Longest the apex offset of a sector may get, in multiples of the growth.
pub const SEGMENT_MITER_LIMIT: f32 = 4.0;

/// Direction of travel along the arc at `angle`.
#[inline]
fn arc_tangent(angle: f32, direction: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, -sin) * direction
}

/// Sector outline grown outward by `distance`: the apex and the arc points.
struct SectorOutline {
    apex: Vec2,
    points: Vec<Vec2>,
}

impl SectorOutline {
    fn new(center: Vec2, radius: Vec2, arc: &AdjustedArc, distance: f32) -> Self {
        let half_sweep = arc.sweep * 0.5;
        let middle = unit_position(arc.start_angle + half_sweep * arc.direction);
        let miter = (1.0 / half_sweep.sin().max(f32::EPSILON)).min(SEGMENT_MITER_LIMIT);
        let apex = center - middle * distance * miter;

        let grown = radius + Vec2::splat(distance);
        let mut points: Vec<Vec2> = (0..=arc.steps)
            .map(|i| center + unit_position(arc.angle(i)) * grown)
            .collect();

        // The straight edges move outward along the arc's end tangents.
        let last = arc.steps;
        points[0] -= arc_tangent(arc.angle(0), arc.direction) * distance;
        points[last] += arc_tangent(arc.angle(last), arc.direction) * distance;

        Self { apex, points }
    }
}

/// Filled pie sector of `arc` around `center`.
///
/// The apex is mitred so that shadows and the faded ring grow evenly along
/// both straight edges. A full turn is drawn as a circle. A zero sweep draws
/// nothing.
pub fn add_segment(
    vh: &mut dyn VertexSink,
    center: Vec2,
    radius: Vec2,
    arc: &AdjustedArc,
    color: Color32,
    unit_positions: &mut UnitPositionData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    shapekit_core::profiling::profile_function!();

    if arc.is_full_circle() {
        unit_positions.update(arc.steps, arc.start_angle, arc.direction);
        return add_circle(vh, center, radius, color, unit_positions, edge);
    }
    if arc.sweep <= f32::EPSILON {
        return Ok(());
    }

    let uv_extent = radius + Vec2::splat(edge.shadow_offset + edge.size_add);
    let uv = |position: Vec2| radial_uv(position - center, uv_extent);
    let count = arc.steps + 1;

    let solid_outline = SectorOutline::new(center, radius, arc, edge.shadow_offset);
    let scale = |p: Vec2| center + (p - center) * edge.inner_scale;

    let solid_apex = vh.vertex_count();
    let apex = scale(solid_outline.apex);
    vh.add_vert(apex, color, uv(apex));
    for point in &solid_outline.points {
        let position = scale(*point);
        vh.add_vert(position, color, uv(position));
    }
    fan(vh, solid_apex, Ring::packed(solid_apex + 1), count, false);

    if edge.is_active {
        let fade_outline = SectorOutline::new(center, radius, arc, edge.shadow_offset + edge.size_add);
        let faded = color.transparent();
        let fade_apex = vh.vertex_count();
        vh.add_vert(fade_outline.apex, faded, uv(fade_outline.apex));
        for point in &fade_outline.points {
            vh.add_vert(*point, faded, uv(*point));
        }
        // Apex and arc form one closed loop in both sets.
        strip(vh, Ring::packed(solid_apex), Ring::packed(fade_apex), count + 1, true);
    }

    tracing::trace!(steps = arc.steps, faded = edge.is_active, "sector appended");
    Ok(())
}

/// Annular band along `arc`, placed around `radius` by `outline`.
///
/// The ends are closed flat. With an active gradient the faded band also
/// wraps around both ends, pushed out along the end tangents. A full turn is
/// drawn as an elliptical ring.
#[allow(clippy::too_many_arguments)]
pub fn add_arc_ring(
    vh: &mut dyn VertexSink,
    center: Vec2,
    radius: Vec2,
    arc: &AdjustedArc,
    outline: &OutlineProperties,
    color: Color32,
    unit_positions: &mut UnitPositionData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    shapekit_core::profiling::profile_function!();

    if arc.is_full_circle() {
        unit_positions.update(arc.steps, arc.start_angle, arc.direction);
        return add_ring(vh, center, radius, outline, color, unit_positions, edge);
    }
    if arc.sweep <= f32::EPSILON {
        return Ok(());
    }

    let center_radius = radius + Vec2::splat(outline.center_distance());
    let half = outline.half_line_weight() + edge.shadow_offset;
    let solid_inner = (center_radius - Vec2::splat(half * edge.inner_scale)).max(Vec2::ZERO);
    let solid_outer = center_radius + Vec2::splat(half * edge.inner_scale);
    let fade_inner = (center_radius - Vec2::splat(half + edge.size_add)).max(Vec2::ZERO);
    let fade_outer = center_radius + Vec2::splat(half + edge.size_add);
    let uv_extent = fade_outer;

    let count = arc.steps + 1;
    let last = arc.steps;
    let end_shift = |i: usize, amount: f32| {
        if i == 0 {
            -arc_tangent(arc.angle(0), arc.direction) * amount
        } else if i == last {
            arc_tangent(arc.angle(last), arc.direction) * amount
        } else {
            Vec2::ZERO
        }
    };
    let body_shift = edge.shadow_offset * (edge.inner_scale * 2.0 - 1.0);
    let fade_shift = edge.shadow_offset + edge.size_add;

    let stride = if edge.is_active { 4 } else { 2 };
    let base = vh.vertex_count();
    let faded = color.transparent();
    for i in 0..count {
        let unit = unit_position(arc.angle(i));
        let mut add = |extent: Vec2, shift: f32, color: Color32| {
            let offset = unit * extent + end_shift(i, shift);
            vh.add_vert(center + offset, color, radial_uv(offset, uv_extent));
        };
        add(solid_inner, body_shift, color);
        add(solid_outer, body_shift, color);
        if edge.is_active {
            add(fade_inner, fade_shift, faded);
            add(fade_outer, fade_shift, faded);
        }
    }

    let inner = Ring::new(base, stride);
    let outer = Ring::new(base + 1, stride);
    strip(vh, inner, outer, count, false);
    if edge.is_active {
        let fade_in = Ring::new(base + 2, stride);
        let fade_out = Ring::new(base + 3, stride);
        strip(vh, fade_in, inner, count, false);
        strip(vh, outer, fade_out, count, false);
        // Faded quads across both flat ends.
        for i in [0, last] {
            vh.add_triangle(inner.at(i), outer.at(i), fade_out.at(i));
            vh.add_triangle(inner.at(i), fade_out.at(i), fade_in.at(i));
        }
    }

    tracing::trace!(steps = arc.steps, faded = edge.is_active, "arc band appended");
    Ok(())
}
