use crate::error::GeometryResult;
use crate::geo_utils::{EdgeGradientData, UnitPositionData};
use crate::points::{PointListProperties, PointsData, PointsGenerator};
use crate::polygons::add_polygon;
use crate::props::{AntiAliasingProperties, PolygonProperties, ShadowsProperties, ShapeProperties};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, trace_mesh};

/// Per-list caches kept across rebuilds.
#[derive(Debug, Clone, Default)]
struct PolygonCache {
    points: PointsData,
    cutout: UnitPositionData,
}

/// One or more filled polygons. Positions are relative to the center of the
/// layout rect.
#[derive(Debug, Clone, Default)]
pub struct PolygonShape {
    pub shape: ShapeProperties,
    pub polygon: PolygonProperties,
    pub point_lists: Vec<PointListProperties>,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    caches: Vec<PolygonCache>,
    clean: bool,
}

impl PolygonShape {
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

    pub fn with_polygon(mut self, polygon: PolygonProperties) -> Self {
        self.polygon = polygon;
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

    /// Round outlines are closed loops; drop the point that would repeat the
    /// first one.
    fn close_round_generators(&mut self) {
        for list in &mut self.point_lists {
            if let PointsGenerator::Round(generator) = &mut list.generator
                && !generator.skip_last_position
            {
                generator.skip_last_position = true;
                list.mark_generator_dirty();
            }
        }
    }
}

impl MeshShape for PolygonShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("PolygonShape");
        vh.clear();

        self.close_round_generators();
        self.caches.resize_with(self.point_lists.len(), PolygonCache::default);
        let center = ctx.rect.center();
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);

        for pass in self.shadows.passes(center, aa) {
            for (list, cache) in self.point_lists.iter_mut().zip(&mut self.caches) {
                add_polygon(
                    vh,
                    &self.polygon,
                    list,
                    pass.center,
                    pass.color,
                    &mut cache.points,
                    &mut cache.cutout,
                    &pass.edge_gradient,
                )?;
            }
        }

        if self.shadows.show_shape {
            let edge = EdgeGradientData::for_anti_aliasing(aa);
            for (list, cache) in self.point_lists.iter_mut().zip(&mut self.caches) {
                add_polygon(
                    vh,
                    &self.polygon,
                    list,
                    center,
                    self.shape.fill_color,
                    &mut cache.points,
                    &mut cache.cutout,
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
        for cache in &mut self.caches {
            cache.points.mark_dirty();
        }
        self.clean = false;
    }

    fn is_dirty(&self) -> bool {
        !self.clean
    }

    fn debug_name(&self) -> &str {
        "PolygonShape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::{RoundGenerator, StarGenerator};
    use crate::rect::Rect;
    use crate::vertex::MeshBuffer;
    use glam::Vec2;

    fn ctx() -> MeshContext {
        MeshContext::new(Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    #[test]
    fn test_round_generator_skips_the_closing_point() {
        let generator = RoundGenerator {
            size: Vec2::splat(40.0),
            resolution: 12,
            ..RoundGenerator::default()
        };
        let list = PointListProperties::from_generator(PointsGenerator::Round(generator), Vec2::ZERO);
        let mut shape = PolygonShape::new(list).with_anti_aliasing(AntiAliasingProperties::disabled());
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();

        // A center vertex plus the ring, without a duplicate of the first point.
        let ring = shape.caches[0].points.len();
        assert_eq!(mesh.vertices.len(), ring + 1);
        assert_eq!(mesh.triangle_count(), ring);
        let first = mesh.vertices[1].position_2d();
        let last = mesh.vertices[ring].position_2d();
        assert!(first.distance(last) > 1.0);
    }

    #[test]
    fn test_star_fills_around_the_rect_center() {
        let list = PointListProperties::from_generator(PointsGenerator::Star(StarGenerator::default()), Vec2::ZERO);
        let mut shape = PolygonShape::new(list).with_anti_aliasing(AntiAliasingProperties::new(1.0));
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx()).unwrap();

        assert!(mesh.vertices[0].position_2d().distance(Vec2::splat(50.0)) < 1e-3);
        assert!(mesh.vertices.iter().any(|v| v.alpha() == 0));
    }
}
