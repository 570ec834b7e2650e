use glam::Vec2;

use crate::error::GeometryResult;
use crate::geo_utils::EdgeGradientData;
use crate::hit_test::{point_on_cubic_bezier, point_on_polyline};
use crate::lines::add_line;
use crate::points::{CurveGenerator, CurveSegment, PointListProperties, PointsData, PointsGenerator};
use crate::props::{AntiAliasingProperties, LineProperties, OutlineProperties, ShadowsProperties, ShapeProperties};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, trace_mesh};

/// A stroked path through curve points, drawn partially by
/// [`CurveGenerator::start_ratio`] and [`CurveGenerator::length_ratio`].
///
/// Positions are relative to the center of the layout rect. An empty
/// visible range draws nothing.
#[derive(Debug, Clone, Default)]
pub struct CurvedLineShape {
    pub shape: ShapeProperties,
    pub line: LineProperties,
    pub outline: OutlineProperties,
    pub curve: CurveGenerator,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    point_list: PointListProperties,
    points_data: PointsData,
    origin: Vec2,
    clean: bool,
}

impl CurvedLineShape {
    pub fn new(curve: CurveGenerator) -> Self {
        Self {
            curve,
            ..Self::default()
        }
    }

    pub fn with_line(mut self, line: LineProperties) -> Self {
        self.line = line;
        self
    }

    pub fn with_outline(mut self, outline: OutlineProperties) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_fill(mut self, shape: ShapeProperties) -> Self {
        self.shape = shape;
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

    /// Move the visible range and mark the mesh stale.
    pub fn set_range(&mut self, start_ratio: f32, length_ratio: f32) {
        self.curve.start_ratio = start_ratio;
        self.curve.length_ratio = length_ratio;
        self.force_mesh_update();
    }

    /// Sampled polyline as of the last rebuild.
    pub fn points_data(&self) -> &PointsData {
        &self.points_data
    }

    /// Whether `point` (in rect space) lies within the stroke of the full
    /// curve, ignoring the visible range.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let local = point - self.origin;
        let width = self.outline.line_weight;
        self.curve.segments().any(|segment| match segment {
            CurveSegment::Line(line) => point_on_polyline(
                &[Vec2::new(line.from.x, line.from.y), Vec2::new(line.to.x, line.to.y)],
                width,
                local,
            ),
            curved => {
                let cubic = curved.to_cubic();
                let v = |p: lyon::math::Point| Vec2::new(p.x, p.y);
                point_on_cubic_bezier(v(cubic.from), v(cubic.ctrl1), v(cubic.ctrl2), v(cubic.to), width, local)
            }
        })
    }
}

impl MeshShape for CurvedLineShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("CurvedLineShape");
        vh.clear();

        self.origin = ctx.rect.center();
        if !self.curve.is_visible() {
            tracing::trace!("curve range is empty, nothing to draw");
            self.clean = true;
            trace_mesh(self.debug_name(), vh);
            return Ok(());
        }

        self.point_list
            .set_generator(PointsGenerator::Curve(self.curve.clone()), Vec2::ZERO);
        let origin = self.origin;
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);

        for pass in self.shadows.passes(origin, aa) {
            add_line(
                vh,
                &self.line,
                &mut self.point_list,
                pass.center,
                &self.outline,
                pass.color,
                &mut self.points_data,
                &pass.edge_gradient,
            )?;
        }

        if self.shadows.show_shape {
            add_line(
                vh,
                &self.line,
                &mut self.point_list,
                origin,
                &self.outline,
                self.shape.fill_color,
                &mut self.points_data,
                &EdgeGradientData::for_anti_aliasing(aa),
            )?;
        }

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
        "CurvedLineShape"
    }
}
