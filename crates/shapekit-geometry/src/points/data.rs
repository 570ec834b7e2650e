use glam::Vec2;
use shapekit_core::math::{EPSILON, PI};

use super::list::{PointListProperties, merge_close_points, remove_coincident};
use crate::error::{GeometryError, GeometryResult, require_points};
use crate::geo_utils::unit_position;
use crate::props::RoundingProperties;

/// Longest mitred normal allowed before a joint is considered a spike.
pub const MAX_MITRE_LENGTH: f32 = 100.0;

bitflags::bitflags! {
    /// Stages of [`PointsData`] that must be recomputed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointsDirtyFlags: u8 {
        /// Input positions changed: merge and interpolate again.
        const POSITIONS = 0b0000_0001;
        /// Tangents, normals and distances are stale.
        const GEOMETRY  = 0b0000_0010;
        /// Rounded-cap fans are stale.
        const CAPS      = 0b0000_0100;
    }
}

impl PointsDirtyFlags {
    pub fn needs_geometry(&self) -> bool {
        self.intersects(Self::POSITIONS | Self::GEOMETRY)
    }
}

/// Input snapshot used to detect edits made directly to a point list.
#[derive(Debug, Clone, PartialEq, Default)]
struct SourceKey {
    positions: Vec<Vec2>,
    max_angle: f32,
    rounding_distance: f32,
    corner_rounding: Option<RoundingProperties>,
}

impl SourceKey {
    fn matches(&self, props: &PointListProperties) -> bool {
        self.positions == props.positions
            && self.max_angle == props.max_angle
            && self.rounding_distance == props.rounding_distance
            && self.corner_rounding == Some(props.corner_rounding)
    }

    fn store(&mut self, props: &PointListProperties) {
        self.positions.clear();
        self.positions.extend_from_slice(&props.positions);
        self.max_angle = props.max_angle;
        self.rounding_distance = props.rounding_distance;
        self.corner_rounding = Some(props.corner_rounding);
    }
}

/// Derived geometry of one polyline.
///
/// Owned by the shape that draws it and reused across rebuilds. Buffers keep
/// their capacity, so a rebuild with the same point count does not allocate.
#[derive(Debug, Clone)]
pub struct PointsData {
    dirty: PointsDirtyFlags,
    is_closed: bool,
    line_weight: f32,
    generate_rounded_caps: bool,
    rounded_cap_resolution: RoundingProperties,
    source: SourceKey,

    positions: Vec<Vec2>,
    tangents: Vec<Vec2>,
    normals: Vec<Vec2>,
    distances: Vec<f32>,
    normalized_distances: Vec<f32>,
    total_length: f32,

    start_cap_offset: Vec2,
    end_cap_offset: Vec2,
    start_cap_offsets: Vec<Vec2>,
    end_cap_offsets: Vec<Vec2>,
    start_cap_uvs: Vec<Vec2>,
    end_cap_uvs: Vec<Vec2>,

    scratch: Vec<Vec2>,
}

impl Default for PointsData {
    fn default() -> Self {
        Self {
            dirty: PointsDirtyFlags::all(),
            is_closed: false,
            line_weight: 0.0,
            generate_rounded_caps: false,
            rounded_cap_resolution: RoundingProperties::default(),
            source: SourceKey::default(),
            positions: Vec::new(),
            tangents: Vec::new(),
            normals: Vec::new(),
            distances: Vec::new(),
            normalized_distances: Vec::new(),
            total_length: 0.0,
            start_cap_offset: Vec2::ZERO,
            end_cap_offset: Vec2::ZERO,
            start_cap_offsets: Vec::new(),
            end_cap_offsets: Vec::new(),
            start_cap_uvs: Vec::new(),
            end_cap_uvs: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl PointsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameters the derived data depends on. Anything that changes
    /// marks the affected stages dirty.
    pub fn configure(
        &mut self,
        is_closed: bool,
        line_weight: f32,
        rounded_caps: Option<RoundingProperties>,
    ) {
        if self.is_closed != is_closed || self.line_weight != line_weight {
            self.is_closed = is_closed;
            self.line_weight = line_weight;
            self.dirty |= PointsDirtyFlags::all();
        }

        let generate = rounded_caps.is_some();
        let resolution = rounded_caps.unwrap_or(self.rounded_cap_resolution);
        if self.generate_rounded_caps != generate || self.rounded_cap_resolution != resolution {
            self.generate_rounded_caps = generate;
            self.rounded_cap_resolution = resolution;
            self.dirty |= PointsDirtyFlags::CAPS;
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = PointsDirtyFlags::all();
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn dirty_flags(&self) -> PointsDirtyFlags {
        self.dirty
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn line_weight(&self) -> f32 {
        self.line_weight
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Unit direction of travel at each point.
    pub fn tangents(&self) -> &[Vec2] {
        &self.tangents
    }

    /// Mitred normals on the left of the direction of travel. Offsetting by
    /// `normal * half_weight` keeps a constant stroke width.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Arc length from the first point.
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// Arc length divided by [`total_length`](Self::total_length).
    pub fn normalized_distances(&self) -> &[f32] {
        &self.normalized_distances
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Unit vector pointing away from the line at its first point.
    pub fn start_cap_offset(&self) -> Vec2 {
        self.start_cap_offset
    }

    /// Unit vector pointing away from the line at its last point.
    pub fn end_cap_offset(&self) -> Vec2 {
        self.end_cap_offset
    }

    pub fn start_cap_offsets(&self) -> &[Vec2] {
        &self.start_cap_offsets
    }

    pub fn end_cap_offsets(&self) -> &[Vec2] {
        &self.end_cap_offsets
    }

    /// Per cap vertex: `x` is how far past the line end it reaches (0-1 of
    /// the half weight) and `y` is its across-line texture coordinate.
    pub fn start_cap_uvs(&self) -> &[Vec2] {
        &self.start_cap_uvs
    }

    pub fn end_cap_uvs(&self) -> &[Vec2] {
        &self.end_cap_uvs
    }

    /// Number of vertices in each rounded cap fan.
    pub fn rounded_cap_resolution(&self) -> usize {
        self.start_cap_offsets.len()
    }

    fn rebuild_positions(&mut self, props: &PointListProperties) -> GeometryResult<()> {
        merge_close_points(
            &props.positions,
            self.line_weight * 0.5,
            self.is_closed,
            &mut self.scratch,
        );

        let input = &self.scratch;
        let count = input.len();
        self.positions.clear();
        if self.is_closed {
            for i in 0..count {
                let prev = input[(i + count - 1) % count];
                let next = input[(i + 1) % count];
                props.interpolate_point(prev, input[i], next, &mut self.positions);
            }
        } else if count > 0 {
            self.positions.push(input[0]);
            for i in 1..count.saturating_sub(1) {
                props.interpolate_point(input[i - 1], input[i], input[i + 1], &mut self.positions);
            }
            if count > 1 {
                self.positions.push(input[count - 1]);
            }
        }

        remove_coincident(&mut self.positions, self.is_closed);
        require_points(self.positions.len(), if self.is_closed { 3 } else { 2 })
    }

    fn rebuild_geometry(&mut self) -> GeometryResult<()> {
        let count = self.positions.len();
        self.tangents.resize(count, Vec2::ZERO);
        self.normals.resize(count, Vec2::ZERO);
        self.distances.resize(count, 0.0);
        self.normalized_distances.resize(count, 0.0);

        let p = &self.positions;
        let segment = |from: usize, to: usize| -> GeometryResult<(Vec2, f32)> {
            let delta = p[to] - p[from];
            let length = delta.length();
            if length < EPSILON || !length.is_finite() {
                return Err(GeometryError::DegenerateGeometry("zero-length polyline segment"));
            }
            Ok((delta / length, length))
        };

        let mut accumulated = 0.0;
        for i in 0..count {
            let is_first = i == 0;
            let is_last = i + 1 == count;
            self.distances[i] = accumulated;

            if !self.is_closed && (is_first || is_last) {
                let (dir, length) = if is_first {
                    segment(0, 1)?
                } else {
                    segment(i - 1, i)?
                };
                self.tangents[i] = dir;
                self.normals[i] = dir.perp();
                if is_first {
                    self.start_cap_offset = -dir;
                    accumulated += length;
                } else {
                    self.end_cap_offset = dir;
                }
                continue;
            }

            let (in_dir, _) = segment((i + count - 1) % count, i)?;
            let (out_dir, out_length) = segment(i, (i + 1) % count)?;
            self.tangents[i] = (in_dir + out_dir).normalize_or(out_dir);
            self.normals[i] = mitred_normal(in_dir, out_dir, i);
            if !is_last || self.is_closed {
                accumulated += out_length;
            }
        }

        self.total_length = accumulated;
        if self.total_length > 0.0 {
            let total = self.total_length;
            for (normalized, distance) in self.normalized_distances.iter_mut().zip(&self.distances) {
                *normalized = distance / total;
            }
        } else {
            self.normalized_distances.fill(0.0);
        }

        if self.is_closed {
            self.start_cap_offset = -self.tangents[0];
            self.end_cap_offset = self.tangents[count - 1];
        }
        Ok(())
    }

    fn rebuild_caps(&mut self) {
        self.start_cap_offsets.clear();
        self.end_cap_offsets.clear();
        self.start_cap_uvs.clear();
        self.end_cap_uvs.clear();
        if !self.generate_rounded_caps || self.is_closed || self.normals.is_empty() {
            return;
        }

        let resolution = self
            .rounded_cap_resolution
            .adjusted(self.line_weight * 0.5, 0.0, 2.0)
            .resolution;
        let increment = PI / (resolution + 1) as f32;

        // Start cap sweeps from the right side of the line to the left, end
        // cap from the left side to the right; both clockwise.
        let start_normal = -self.normals[0];
        let end_normal = self.normals[self.normals.len() - 1];
        let start_angle = start_normal.x.atan2(start_normal.y);
        let end_angle = end_normal.x.atan2(end_normal.y);

        for i in 0..resolution {
            let angle = increment * (i + 1) as f32;
            let (sin, cos) = angle.sin_cos();
            self.start_cap_offsets
                .push(unit_position(start_angle + angle));
            self.end_cap_offsets.push(unit_position(end_angle + angle));
            self.start_cap_uvs.push(Vec2::new(sin, 0.5 - cos * 0.5));
            self.end_cap_uvs.push(Vec2::new(sin, 0.5 + cos * 0.5));
        }
    }
}

/// Mitred normal at a joint entering along `in_dir` and leaving along
/// `out_dir`, on the left of the direction of travel.
///
/// Its length is `1 / sin(θ / 2)` where θ is the angle between the back and
/// forward segments, capped at [`MAX_MITRE_LENGTH`].
pub(crate) fn mitred_normal(in_dir: Vec2, out_dir: Vec2, index: usize) -> Vec2 {
    let mut normal = in_dir - out_dir;
    if normal.length_squared() < EPSILON * EPSILON {
        return in_dir.perp();
    }
    if in_dir.perp_dot(normal) < 0.0 {
        normal = -normal;
    }

    let half_angle = (-in_dir).dot(out_dir).clamp(-1.0, 1.0).acos() * 0.5;
    let sin = half_angle.sin();
    let length = if sin * MAX_MITRE_LENGTH < 1.0 {
        tracing::warn!(index, "Polyline joint too sharp, clamping mitre length");
        MAX_MITRE_LENGTH
    } else {
        1.0 / sin
    };
    normal.normalize() * length
}

/// Run the polyline pipeline for `props` into `data`.
///
/// Each stage only runs if it is dirty or its inputs changed, so calling this
/// twice with the same inputs leaves `data` untouched.
pub fn set_line_data(props: &mut PointListProperties, data: &mut PointsData) -> GeometryResult<()> {
    if props.set_points()? || !data.source.matches(props) {
        data.dirty |= PointsDirtyFlags::all();
    }
    if data.dirty.is_empty() {
        return Ok(());
    }

    shapekit_core::profiling::profile_function!();

    require_points(props.positions.len(), 2)?;

    if data.dirty.contains(PointsDirtyFlags::POSITIONS) {
        data.rebuild_positions(props)?;
        data.source.store(props);
        data.dirty.remove(PointsDirtyFlags::POSITIONS);
        data.dirty |= PointsDirtyFlags::GEOMETRY | PointsDirtyFlags::CAPS;
    }

    if data.dirty.contains(PointsDirtyFlags::GEOMETRY) {
        data.rebuild_geometry()?;
        data.dirty.remove(PointsDirtyFlags::GEOMETRY);
        data.dirty |= PointsDirtyFlags::CAPS;
    }

    if data.dirty.contains(PointsDirtyFlags::CAPS) {
        data.rebuild_caps();
        data.dirty.remove(PointsDirtyFlags::CAPS);
    }

    tracing::trace!(
        points = data.positions.len(),
        length = data.total_length,
        "Rebuilt polyline data"
    );
    Ok(())
}
