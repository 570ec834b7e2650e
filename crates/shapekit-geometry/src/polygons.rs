//! Closed polygons, filled as a fan or, with a cutout, as an annulus.

use glam::Vec2;
use shapekit_core::math::TWO_PI;

use crate::color::Color32;
use crate::error::GeometryResult;
use crate::geo_utils::{EdgeGradientData, UnitPositionData, simple_map, simple_map_ceil};
use crate::points::{PointListProperties, PointsData, set_line_data};
use crate::props::{CutoutProperties, PolygonProperties};
use crate::strip::{Ring, fan, strip};
use crate::vertex::VertexSink;

/// Twice the signed area (shoelace). Positive for counter-clockwise points.
pub(crate) fn signed_area_x2(positions: &[Vec2]) -> f32 {
    let count = positions.len();
    (0..count)
        .map(|i| positions[i].perp_dot(positions[(i + 1) % count]))
        .sum()
}

/// Axis-aligned bounds of `positions` as `(min, size)`.
fn bounds(positions: &[Vec2]) -> (Vec2, Vec2) {
    let (min, max) = positions.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    (min, (max - min).max(Vec2::splat(f32::EPSILON)))
}

/// Fill a closed polygon through `point_list`.
///
/// Runs the polyline pipeline (closed, no line weight) into `points_data`,
/// then emits either a fan around the adjusted center or, for a cutout, a
/// zipper between the outline and a hole ring. Both windings are accepted;
/// edge offsets always point out of the polygon.
#[allow(clippy::too_many_arguments)]
pub fn add_polygon(
    vh: &mut dyn VertexSink,
    props: &PolygonProperties,
    point_list: &mut PointListProperties,
    offset: Vec2,
    color: Color32,
    points_data: &mut PointsData,
    cutout_units: &mut UnitPositionData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    shapekit_core::profiling::profile_function!();

    points_data.configure(true, 0.0, None);
    set_line_data(point_list, points_data)?;

    let positions = points_data.positions();
    let count = positions.len();
    // Left normals point outward on clockwise polygons.
    let outward = if signed_area_x2(positions) > 0.0 { -1.0 } else { 1.0 };
    let normals = points_data.normals();
    let center = props.adjusted_center(&point_list.positions);
    let (uv_min, uv_size) = bounds(positions);
    let uv = |p: Vec2| (p - uv_min) / uv_size;

    let cutout = props.cutout().map(|c| c.validated());
    let hole = cutout.map(|cutout| {
        add_hole_ring(
            vh,
            &cutout,
            center,
            offset,
            (positions[0], normals[0].length()),
            outward,
            cutout_units,
            color,
            &uv,
            edge,
        )
    });
    let center_index = if hole.is_none() {
        let index = vh.vertex_count();
        vh.add_vert(center + offset, color, uv(center));
        Some(index)
    } else {
        None
    };

    let solid = Ring::packed(vh.vertex_count());
    for (p, n) in positions.iter().zip(normals) {
        let edge_position = *p + *n * outward * edge.shadow_offset;
        let position = center.lerp(edge_position, edge.inner_scale);
        vh.add_vert(position + offset, color, uv(position));
    }

    match (hole, center_index) {
        (Some((hole_ring, hole_count)), _) => zip_rings(vh, solid, count, hole_ring, hole_count),
        (None, Some(center_index)) => fan(vh, center_index, solid, count, true),
        (None, None) => {}
    }

    if edge.is_active {
        let distance = edge.size_add + edge.shadow_offset;
        let faded = color.transparent();
        let fade = Ring::packed(vh.vertex_count());
        for (p, n) in positions.iter().zip(normals) {
            let position = *p + *n * outward * distance;
            vh.add_vert(position + offset, faded, uv(position));
        }
        strip(vh, solid, fade, count, true);

        if let (Some(cutout), Some((hole_ring, hole_count))) = (cutout, hole) {
            let radius = (cutout.radius - distance).max(0.0);
            let start = hole_start(cutout_units.positions(), positions[0] - center, outward);
            let units = cutout_units.positions();
            let hole_fade = Ring::packed(vh.vertex_count());
            for j in 0..hole_count {
                let position = center + units[(start + j) % hole_count] * radius;
                vh.add_vert(position + offset, faded, uv(position));
            }
            strip(vh, hole_fade, hole_ring, hole_count, true);
        }
    }

    Ok(())
}

/// Index of the first hole vertex at or after `towards` in winding order.
fn hole_start(units: &[Vec2], towards: Vec2, direction: f32) -> usize {
    let reference = towards.x.atan2(towards.y);
    units
        .iter()
        .enumerate()
        .map(|(i, u)| (i, ((u.x.atan2(u.y) - reference) * direction).rem_euclid(TWO_PI)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(0, |(i, _)| i)
}

/// Emit the hole ring with the same winding as the outline, starting at the
/// first vertex past the first outline point.
#[allow(clippy::too_many_arguments)]
fn add_hole_ring(
    vh: &mut dyn VertexSink,
    cutout: &CutoutProperties,
    center: Vec2,
    offset: Vec2,
    (first_position, first_normal_length): (Vec2, f32),
    direction: f32,
    cutout_units: &mut UnitPositionData,
    color: Color32,
    uv: &dyn Fn(Vec2) -> Vec2,
    edge: &EdgeGradientData,
) -> (Ring, usize) {
    cutout_units.update(cutout.resolution, cutout.base_angle(), direction);
    let units = cutout_units.positions();
    let count = units.len();

    let shadow_grow = first_normal_length * edge.shadow_offset * 3.0 * (1.0 - edge.inner_scale);
    let radius = (cutout.radius - edge.shadow_offset + shadow_grow).max(0.0);
    let start = hole_start(units, first_position - center, direction);

    let ring = Ring::packed(vh.vertex_count());
    for j in 0..count {
        let position = center + units[(start + j) % count] * radius;
        vh.add_vert(position + offset, color, uv(position));
    }
    (ring, count)
}

/// Triangulate the band between an outline of `outer_count` vertices and a
/// hole ring of `hole_count` vertices with the same winding and aligned
/// starts. Produces `outer_count + hole_count` triangles.
fn zip_rings(vh: &mut dyn VertexSink, outer: Ring, outer_count: usize, hole: Ring, hole_count: usize) {
    for i in 0..outer_count {
        vh.add_triangle(
            hole.at(simple_map(i, outer_count, hole_count)),
            outer.at(i),
            outer.at((i + 1) % outer_count),
        );
    }
    for j in 1..=hole_count {
        vh.add_triangle(
            hole.at(j - 1),
            hole.at(j % hole_count),
            outer.at(simple_map_ceil(j, hole_count, outer_count) % outer_count),
        );
    }
}
