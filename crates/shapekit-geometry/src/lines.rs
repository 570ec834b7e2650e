//! Stroked polylines with close, projected or round caps.
//!
//! Vertex layout: one (inner, outer) pair per point, then with an active
//! gradient one faded pair per point, then the caps. "Outer" is the side the
//! normals point to. Closed lines repeat the first pair at the end so the
//! texture wraps cleanly.

use glam::Vec2;

use crate::color::Color32;
use crate::error::GeometryResult;
use crate::geo_utils::EdgeGradientData;
use crate::points::{PointListProperties, PointsData, set_line_data};
use crate::props::{LineCap, LineProperties, OutlineProperties};
use crate::strip::{Ring, strip, strip_by};
use crate::vertex::VertexSink;

/// Offsets of a stroke across the line for one draw pass.
#[derive(Debug, Clone, Copy)]
struct StrokeOffsets {
    center: f32,
    inner: f32,
    outer: f32,
    fade_inner: f32,
    fade_outer: f32,
    /// How far the solid stroke extends past an end point.
    solid_extent: f32,
    /// How far the faded stroke extends past an end point.
    fade_extent: f32,
}

impl StrokeOffsets {
    fn new(outline: &OutlineProperties, edge: &EdgeGradientData) -> Self {
        let center = outline.center_distance();
        let half = outline.half_line_weight() + edge.shadow_offset;
        Self {
            center,
            inner: center - half * edge.inner_scale,
            outer: center + half * edge.inner_scale,
            fade_inner: center - half - edge.size_add,
            fade_outer: center + half + edge.size_add,
            solid_extent: half * edge.inner_scale,
            fade_extent: half + edge.size_add,
        }
    }
}

/// Which end of an open line a cap belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapEnd {
    Start,
    End,
}

/// Indices of the body vertices touching one end of the line.
#[derive(Debug, Clone, Copy)]
struct EndIndices {
    inner: u32,
    outer: u32,
    fade_inner: Option<u32>,
    fade_outer: Option<u32>,
}

/// Stroke the polyline in `point_list`.
///
/// The closed flag only applies to lines with more than two points. Open
/// lines get `line.line_cap` at both ends: close caps reuse the end pairs,
/// projected caps add two vertices per end and round caps add the cap
/// resolution per end. An active gradient doubles every vertex set.
#[allow(clippy::too_many_arguments)]
pub fn add_line(
    vh: &mut dyn VertexSink,
    line: &LineProperties,
    point_list: &mut PointListProperties,
    offset: Vec2,
    outline: &OutlineProperties,
    color: Color32,
    points_data: &mut PointsData,
    edge: &EdgeGradientData,
) -> GeometryResult<()> {
    shapekit_core::profiling::profile_function!();

    point_list.set_points()?;
    let closed = line.closed && point_list.positions.len() > 2;
    let rounded_caps = (line.line_cap == LineCap::Round).then_some(line.rounded_cap_resolution);
    points_data.configure(closed, outline.line_weight, rounded_caps);
    set_line_data(point_list, points_data)?;

    let data = &*points_data;
    let count = data.len();
    let pairs = if closed { count + 1 } else { count };
    let offsets = StrokeOffsets::new(outline, edge);
    let close_caps = !closed && line.line_cap == LineCap::Close;

    // Texture x runs along the line; caps that extend it take a share. A
    // line shorter than its weight leaves the body a sliver in the middle.
    let (uv_min, uv_length) = if !closed && line.line_cap != LineCap::Close && data.total_length() > 0.0 {
        let start = (outline.line_weight / data.total_length() * 0.5).min(0.5);
        (start, (1.0 - start * 2.0).max(f32::EPSILON))
    } else {
        (0.0, 1.0)
    };
    let uv_x = |k: usize| {
        if k == count {
            1.0
        } else {
            uv_min + data.normalized_distances()[k] * uv_length
        }
    };

    // Close caps move the end pairs along the line instead of adding vertices.
    let end_shift = |i: usize, amount: f32| {
        if !close_caps {
            Vec2::ZERO
        } else if i == 0 {
            data.start_cap_offset() * amount
        } else if i == count - 1 {
            data.end_cap_offset() * amount
        } else {
            Vec2::ZERO
        }
    };

    let add_pairs = |vh: &mut dyn VertexSink, inner: f32, outer: f32, shift: f32, color: Color32| {
        let base = vh.vertex_count();
        for k in 0..pairs {
            let i = k % count;
            let position = data.positions()[i] + offset + end_shift(i, shift);
            let normal = data.normals()[i];
            let x = uv_x(k);
            vh.add_vert(position + normal * inner, color, Vec2::new(x, 0.0));
            vh.add_vert(position + normal * outer, color, Vec2::new(x, 1.0));
        }
        (Ring::new(base, 2), Ring::new(base + 1, 2))
    };

    let body_shift = edge.shadow_offset * (edge.inner_scale * 2.0 - 1.0);
    let (inner, outer) = add_pairs(vh, offsets.inner, offsets.outer, body_shift, color);
    strip(vh, inner, outer, pairs, false);

    let fade = if edge.is_active {
        let (fade_inner, fade_outer) = add_pairs(
            vh,
            offsets.fade_inner,
            offsets.fade_outer,
            edge.shadow_offset + edge.size_add,
            color.transparent(),
        );
        strip(vh, fade_inner, inner, pairs, false);
        strip(vh, outer, fade_outer, pairs, false);
        Some((fade_inner, fade_outer))
    } else {
        None
    };

    if closed {
        return Ok(());
    }

    let ends = |i: usize| EndIndices {
        inner: inner.at(i),
        outer: outer.at(i),
        fade_inner: fade.map(|(r, _)| r.at(i)),
        fade_outer: fade.map(|(_, r)| r.at(i)),
    };
    let start = ends(0);
    let end = ends(count - 1);

    match line.line_cap {
        LineCap::Close => {
            for indices in [start, end] {
                add_close_cap(vh, indices);
            }
        }
        LineCap::Projected => {
            for (cap, indices) in [(CapEnd::Start, start), (CapEnd::End, end)] {
                add_projected_cap(vh, cap, indices, data, offset, &offsets, color, edge);
            }
        }
        LineCap::Round => {
            let caps = [(CapEnd::Start, start, uv_min), (CapEnd::End, end, uv_min + uv_length)];
            for (cap, indices, uv_end) in caps {
                add_rounded_cap(vh, cap, indices, uv_end, data, offset, &offsets, color, edge);
            }
        }
    }

    Ok(())
}

/// Faded quad across the end of a line with close caps.
fn add_close_cap(vh: &mut dyn VertexSink, ends: EndIndices) {
    if let (Some(fade_inner), Some(fade_outer)) = (ends.fade_inner, ends.fade_outer) {
        vh.add_triangle(ends.inner, ends.outer, fade_outer);
        vh.add_triangle(ends.inner, fade_outer, fade_inner);
    }
}

fn cap_frame(cap: CapEnd, data: &PointsData) -> (Vec2, Vec2, Vec2) {
    match cap {
        CapEnd::Start => (data.positions()[0], data.normals()[0], data.start_cap_offset()),
        CapEnd::End => {
            let last = data.len() - 1;
            (data.positions()[last], data.normals()[last], data.end_cap_offset())
        }
    }
}

/// Square cap extending half the line weight past the end point.
#[allow(clippy::too_many_arguments)]
fn add_projected_cap(
    vh: &mut dyn VertexSink,
    cap: CapEnd,
    ends: EndIndices,
    data: &PointsData,
    offset: Vec2,
    offsets: &StrokeOffsets,
    color: Color32,
    edge: &EdgeGradientData,
) {
    let (position, normal, direction) = cap_frame(cap, data);
    let position = position + offset;
    let x = if cap == CapEnd::Start { 0.0 } else { 1.0 };

    let solid = vh.vertex_count();
    let tip = position + direction * offsets.solid_extent;
    vh.add_vert(tip + normal * offsets.inner, color, Vec2::new(x, 0.0));
    vh.add_vert(tip + normal * offsets.outer, color, Vec2::new(x, 1.0));
    vh.add_triangle(ends.inner, ends.outer, solid + 1);
    vh.add_triangle(ends.inner, solid + 1, solid);

    if let (Some(fade_inner), Some(fade_outer)) = (ends.fade_inner, ends.fade_outer) {
        let faded = color.transparent();
        let fade = vh.vertex_count();
        let tip = position + direction * offsets.fade_extent;
        vh.add_vert(tip + normal * offsets.fade_inner, faded, Vec2::new(x, 0.0));
        vh.add_vert(tip + normal * offsets.fade_outer, faded, Vec2::new(x, 1.0));

        // Across the tip, then down each side.
        vh.add_triangle(solid, solid + 1, fade + 1);
        vh.add_triangle(solid, fade + 1, fade);
        vh.add_triangle(fade_inner, ends.inner, solid);
        vh.add_triangle(fade_inner, solid, fade);
        vh.add_triangle(ends.outer, fade_outer, fade + 1);
        vh.add_triangle(ends.outer, fade + 1, solid + 1);
    }
}

/// Half-disc cap fanned from the inner end vertex.
#[allow(clippy::too_many_arguments)]
fn add_rounded_cap(
    vh: &mut dyn VertexSink,
    cap: CapEnd,
    ends: EndIndices,
    uv_end: f32,
    data: &PointsData,
    offset: Vec2,
    offsets: &StrokeOffsets,
    color: Color32,
    edge: &EdgeGradientData,
) {
    let (position, normal, _) = cap_frame(cap, data);
    let (cap_offsets, cap_uvs, uv_tip) = match cap {
        CapEnd::Start => (data.start_cap_offsets(), data.start_cap_uvs(), 0.0),
        CapEnd::End => (data.end_cap_offsets(), data.end_cap_uvs(), 1.0),
    };
    let resolution = cap_offsets.len();
    if resolution == 0 {
        return;
    }
    let center = position + offset + normal * offsets.center;
    let uv = |k: usize| {
        let cap_uv = cap_uvs[k];
        Vec2::new(uv_end + (uv_tip - uv_end) * cap_uv.x, cap_uv.y)
    };

    let solid = vh.vertex_count();
    for (k, unit) in cap_offsets.iter().enumerate() {
        vh.add_vert(center + *unit * offsets.solid_extent, color, uv(k));
    }

    // The start arc runs from the inner side to the outer side, the end arc
    // the other way round. Fan from the inner end vertex.
    let fan_vertex = |k: usize| match cap {
        CapEnd::Start if k < resolution => solid + k as u32,
        CapEnd::Start => ends.outer,
        CapEnd::End if k == 0 => ends.outer,
        CapEnd::End => solid + (k - 1) as u32,
    };
    for k in 0..resolution {
        vh.add_triangle(ends.inner, fan_vertex(k), fan_vertex(k + 1));
    }

    if let (Some(fade_inner), Some(fade_outer)) = (ends.fade_inner, ends.fade_outer) {
        let faded = color.transparent();
        let fade = vh.vertex_count();
        for (k, unit) in cap_offsets.iter().enumerate() {
            vh.add_vert(center + *unit * offsets.fade_extent, faded, uv(k));
        }
        // Solid and faded boundaries, each running end pair, arc, end pair.
        let (first, last, fade_first, fade_last) = match cap {
            CapEnd::Start => (ends.inner, ends.outer, fade_inner, fade_outer),
            CapEnd::End => (ends.outer, ends.inner, fade_outer, fade_inner),
        };
        let chain = |k: usize, first: u32, arc: u32, last: u32| match k {
            0 => first,
            k if k <= resolution => arc + (k - 1) as u32,
            _ => last,
        };
        strip_by(
            vh,
            resolution + 2,
            false,
            |k| chain(k, first, solid, last),
            |k| chain(k, fade_first, fade, fade_last),
        );
    }
}
