use glam::Vec2;

use crate::error::GeometryResult;
use crate::geo_utils::EdgeGradientData;
use crate::hit_test::{point_on_closed_polyline, point_on_polyline};
use crate::lines::add_line;
use crate::points::{PointListProperties, PointsData};
use crate::props::{AntiAliasingProperties, LineProperties, OutlineProperties, ShadowsProperties, ShapeProperties};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, trace_mesh};

/// One or more stroked polylines. Positions are relative to the center of
/// the layout rect.
#[derive(Debug, Clone, Default)]
pub struct LineShape {
    pub shape: ShapeProperties,
    pub line: LineProperties,
    pub outline: OutlineProperties,
    pub point_lists: Vec<PointListProperties>,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    points_data: Vec<PointsData>,
    origin: Vec2,
    clean: bool,
}

impl LineShape {
    pub fn new(point_list: PointListProperties) -> Self {
        Self {
            point_lists: vec![point_list],
            ..Self::default()
        }
    }

    pub fn with_point_list(mut self, point_list: PointListProperties) -> Self {
        self.point_lists.push(point_list);
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

    /// Derived polyline data of each point list as of the last rebuild.
    pub fn points_data(&self) -> &[PointsData] {
        &self.points_data
    }

    /// Whether `point` (in rect space) lies on any stroke drawn by the last
    /// rebuild.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let local = point - self.origin;
        let width = self.outline.line_weight;
        self.points_data.iter().any(|data| {
            if data.is_closed() {
                point_on_closed_polyline(data.positions(), width, local)
            } else {
                point_on_polyline(data.positions(), width, local)
            }
        })
    }
}

impl MeshShape for LineShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("LineShape");
        vh.clear();

        self.points_data.resize_with(self.point_lists.len(), PointsData::new);
        self.origin = ctx.rect.center();
        let origin = self.origin;
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);

        // All shadows go underneath every line.
        for pass in self.shadows.passes(origin, aa) {
            for (list, data) in self.point_lists.iter_mut().zip(&mut self.points_data) {
                add_line(
                    vh,
                    &self.line,
                    list,
                    pass.center,
                    &self.outline,
                    pass.color,
                    data,
                    &pass.edge_gradient,
                )?;
            }
        }

        if self.shadows.show_shape {
            let edge = EdgeGradientData::for_anti_aliasing(aa);
            for (list, data) in self.point_lists.iter_mut().zip(&mut self.points_data) {
                add_line(
                    vh,
                    &self.line,
                    list,
                    origin,
                    &self.outline,
                    self.shape.fill_color,
                    data,
                    &edge,
                )?;
            }
        }

        self.clean = true;
        trace_mesh(self.debug_name(), vh);
        Ok(())
    }

    fn force_mesh_update(&mut self) {
        for list in &mut self.point_lists {
            list.mark_generator_dirty();
        }
        for data in &mut self.points_data {
            data.mark_dirty();
        }
        self.clean = false;
    }

    fn is_dirty(&self) -> bool {
        !self.clean
    }

    fn debug_name(&self) -> &str {
        "LineShape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;
    use crate::props::{LineCap, ShadowProperties};
    use crate::rect::Rect;
    use crate::vertex::MeshBuffer;

    fn zigzag() -> PointListProperties {
        PointListProperties::new(vec![
            Vec2::new(-20.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 20.0),
            Vec2::new(20.0, 20.0),
        ])
    }

    fn ctx() -> MeshContext {
        MeshContext::new(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn test_lines_are_drawn_around_the_rect_center() {
        let mut shape = LineShape::new(zigzag()).with_anti_aliasing(AntiAliasingProperties::disabled());
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.vertices[0].position_2d(), Vec2::new(30.0, 49.0));

        assert!(shape.contains_point(Vec2::new(40.0, 50.5)));
        assert!(!shape.contains_point(Vec2::new(40.0, 55.0)));
    }

    #[test]
    fn test_closed_line_hits_its_closing_segment() {
        let square = PointListProperties::new(vec![
            Vec2::new(-10.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(-10.0, -10.0),
        ])
        .with_max_angle(0.0);
        let left_edge = Vec2::new(40.3, 50.0);

        let mut open = LineShape::new(square.clone()).with_anti_aliasing(AntiAliasingProperties::disabled());
        let mut closed = LineShape::new(square)
            .with_line(LineProperties::default().closed(true))
            .with_anti_aliasing(AntiAliasingProperties::disabled());
        let mut mesh = MeshBuffer::new();
        open.populate_mesh(&mut mesh, &ctx()).unwrap();
        closed.populate_mesh(&mut mesh, &ctx()).unwrap();

        assert!(!open.contains_point(left_edge));
        assert!(closed.contains_point(left_edge));
        assert!(!closed.contains_point(Vec2::splat(50.0)));
    }

    #[test]
    fn test_shadows_for_every_list_come_first() {
        let second = PointListProperties::new(vec![Vec2::new(-10.0, -30.0), Vec2::new(10.0, -30.0)]);
        let mut shape = LineShape::new(zigzag())
            .with_point_list(second)
            .with_line(LineProperties::default().with_cap(LineCap::Projected))
            .with_shadows(ShadowsProperties::default().with_shadow(ShadowProperties::default()))
            .with_anti_aliasing(AntiAliasingProperties::disabled());
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();

        // Shadow passes are always faded, which doubles body and cap vertices.
        let shadow = (8 + 4) * 2 + 8 * 2;
        let plain = (8 + 4) + 8;
        assert_eq!(mesh.vertices.len(), shadow + plain);
        let shadow_alpha = ShadowProperties::default().color.a;
        assert!(mesh.vertices[..shadow].iter().all(|v| v.alpha() == shadow_alpha || v.alpha() == 0));
        assert!(mesh.vertices[shadow..].iter().all(|v| v.alpha() == 255));
    }

    #[test]
    fn test_too_few_points_is_an_error() {
        let mut shape = LineShape::new(PointListProperties::new(vec![Vec2::ZERO]));
        let mut mesh = MeshBuffer::new();
        assert!(matches!(
            shape.populate_mesh(&mut mesh, &ctx()),
            Err(GeometryError::TooFewPoints { .. })
        ));
        assert!(shape.is_dirty());
    }
}
