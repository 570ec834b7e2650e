use glam::Vec2;
use shapekit_core::math::TWO_PI;

use crate::arcs::{add_arc_ring, add_segment};
use crate::error::GeometryResult;
use crate::geo_utils::UnitPositionData;
use crate::lines::add_line;
use crate::points::{PointListProperties, PointsData, PointsGenerator, RoundGenerator};
use crate::props::{
    AdjustedArc, AntiAliasingProperties, ArcProperties, EllipseProperties, LineCap, LineProperties, LineType,
    OutlineProperties, ShadowsProperties, ShapeProperties,
};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, draw_passes, trace_mesh};

/// Stroked arc around an ellipse fitted into the layout rect.
///
/// Close caps draw a flat-ended band. Projected and round caps stroke a
/// generated polyline instead. A line weight that reaches past the center
/// turns the arc into a filled sector.
#[derive(Debug, Clone)]
pub struct ArcShape {
    pub shape: ShapeProperties,
    pub ellipse: EllipseProperties,
    pub arc: ArcProperties,
    pub line: LineProperties,
    pub outline: OutlineProperties,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    point_list: PointListProperties,
    points_data: PointsData,
    unit_positions: UnitPositionData,
    clean: bool,
}

impl Default for ArcShape {
    fn default() -> Self {
        Self {
            shape: ShapeProperties::default(),
            ellipse: EllipseProperties::default(),
            arc: ArcProperties::default(),
            line: LineProperties::default(),
            outline: OutlineProperties::default(),
            shadows: ShadowsProperties::default(),
            anti_aliasing: AntiAliasingProperties::default(),
            point_list: PointListProperties::from_generator(
                PointsGenerator::Round(RoundGenerator::default()),
                Vec2::ZERO,
            ),
            points_data: PointsData::new(),
            unit_positions: UnitPositionData::new(),
            clean: false,
        }
    }
}

/// How an arc is drawn for one rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ArcMode {
    Sector { radius: Vec2 },
    Band,
    Stroke,
}

impl ArcShape {
    pub fn new(arc: ArcProperties) -> Self {
        Self {
            arc,
            ..Self::default()
        }
    }

    pub fn with_ellipse(mut self, ellipse: EllipseProperties) -> Self {
        self.ellipse = ellipse;
        self
    }

    pub fn with_line(mut self, line: LineProperties) -> Self {
        self.line = line;
        self
    }

    pub fn with_outline(mut self, outline: OutlineProperties) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_shadows(mut self, shadows: ShadowsProperties) -> Self {
        self.shadows = shadows.validated();
        self
    }

    pub fn with_anti_aliasing(mut self, anti_aliasing: AntiAliasingProperties) -> Self {
        self.anti_aliasing = anti_aliasing;
        self
    }

    pub fn with_fill(mut self, shape: ShapeProperties) -> Self {
        self.shape = shape;
        self
    }

    fn mode(&self, radius: Vec2) -> ArcMode {
        let inner = self.outline.inner_distance();
        let overshoots = matches!(self.outline.line_type, LineType::Center | LineType::Inner)
            && (radius.x + inner < 0.0 || radius.y + inner < 0.0);
        if overshoots {
            ArcMode::Sector {
                radius: radius + Vec2::splat(self.outline.outer_distance()),
            }
        } else if self.line.line_cap == LineCap::Close {
            ArcMode::Band
        } else {
            ArcMode::Stroke
        }
    }

    /// Point the round generator at the arc. Only an actual change marks the
    /// polyline stale.
    fn update_generator(&mut self, radius: Vec2, arc: &AdjustedArc, resolution: usize) {
        let generator = RoundGenerator {
            size: radius * 2.0,
            direction: arc.direction,
            start_offset: arc.start_angle / TWO_PI,
            length: self.arc.validated().length,
            resolution,
            ..RoundGenerator::default()
        };
        self.point_list
            .set_generator(PointsGenerator::Round(generator), Vec2::ZERO);
    }
}

impl MeshShape for ArcShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("ArcShape");
        vh.clear();

        let center = ctx.rect.center();
        let size = ctx.rect.size();
        let radius = self.ellipse.fit_radius(size.x, size.y);
        let resolution = self
            .ellipse
            .adjusted_resolution(radius, self.outline.outer_distance());
        let arc = self.arc.validated().adjusted(resolution, self.ellipse.base_angle);
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);
        let mode = self.mode(radius);
        if mode == ArcMode::Stroke {
            self.update_generator(radius, &arc, resolution);
        }

        let fill = self.shape.fill_color;
        let Self {
            line,
            outline,
            shadows,
            point_list,
            points_data,
            unit_positions,
            ..
        } = self;

        draw_passes(shadows, center, aa, true, true, fill, |center, color, edge| match mode {
            ArcMode::Sector { radius } => add_segment(vh, center, radius, &arc, color, unit_positions, edge),
            ArcMode::Band => add_arc_ring(vh, center, radius, &arc, outline, color, unit_positions, edge),
            ArcMode::Stroke => add_line(vh, line, point_list, center, outline, color, points_data, edge),
        })?;

        self.clean = true;
        trace_mesh(self.debug_name(), vh);
        Ok(())
    }

    fn force_mesh_update(&mut self) {
        self.point_list.mark_generator_dirty();
        self.points_data.mark_dirty();
        self.clean = false;
    }

    fn is_dirty(&self) -> bool {
        !self.clean
    }

    fn debug_name(&self) -> &str {
        "ArcShape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{ArcDirection, ResolutionMode, RoundingProperties};
    use crate::rect::Rect;
    use crate::vertex::MeshBuffer;

    fn arc_shape(line_cap: LineCap, weight: f32) -> ArcShape {
        ArcShape::new(ArcProperties::new(ArcDirection::Forward, 0.5))
            .with_ellipse(EllipseProperties::default().with_resolution(ResolutionMode::Fixed { resolution: 20 }))
            .with_line(
                LineProperties::default()
                    .with_cap(line_cap)
                    .with_cap_resolution(RoundingProperties::fixed(4)),
            )
            .with_outline(OutlineProperties::default().with_line_weight(weight))
            .with_anti_aliasing(AntiAliasingProperties::disabled())
    }

    fn ctx() -> MeshContext {
        MeshContext::new(Rect::new(0.0, 0.0, 20.0, 20.0))
    }

    #[test]
    fn test_close_caps_draw_a_band() {
        let mut shape = arc_shape(LineCap::Close, 2.0);
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();
        assert_eq!(mesh.vertices.len(), 22);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_round_caps_stroke_the_generated_arc() {
        let mut shape = arc_shape(LineCap::Round, 2.0);
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();

        // Eleven points along the half turn, two per point, four per cap.
        assert_eq!(mesh.vertices.len(), 22 + 8);
        // Every vertex lies within the (mitred) stroke around radius 10.
        for v in &mesh.vertices {
            let distance = v.position_2d().distance(Vec2::splat(10.0));
            assert!(distance > 8.9 && distance < 11.1, "{}", distance);
        }
    }

    #[test]
    fn test_overshooting_weight_fills_a_sector() {
        let mut shape = arc_shape(LineCap::Close, 30.0);
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();

        // Apex plus eleven arc points at radius 10 + 15.
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.vertices[0].position_2d(), Vec2::splat(10.0));
        assert!((mesh.vertices[1].position_2d().distance(Vec2::splat(10.0)) - 25.0).abs() < 1e-3);
    }
}
