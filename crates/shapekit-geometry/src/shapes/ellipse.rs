use crate::ellipses::{add_circle, add_ring};
use crate::error::GeometryResult;
use crate::geo_utils::UnitPositionData;
use crate::props::{
    AntiAliasingProperties, EllipseProperties, OutlineProperties, OutlineShapeProperties, ShadowsProperties,
};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, draw_passes, trace_mesh};

/// Ellipse fitted into the layout rect, with optional outline.
#[derive(Debug, Clone, Default)]
pub struct EllipseShape {
    pub shape: OutlineShapeProperties,
    pub ellipse: EllipseProperties,
    pub outline: OutlineProperties,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    unit_positions: UnitPositionData,
    clean: bool,
}

impl EllipseShape {
    pub fn new(ellipse: EllipseProperties) -> Self {
        Self {
            ellipse,
            ..Self::default()
        }
    }

    pub fn with_shape(mut self, shape: OutlineShapeProperties) -> Self {
        self.shape = shape;
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
}

impl MeshShape for EllipseShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("EllipseShape");
        vh.clear();

        let center = ctx.rect.center();
        let size = ctx.rect.size();
        let radius = self.ellipse.fit_radius(size.x, size.y);
        let resolution = self.ellipse.adjusted_resolution(radius, 0.0);
        self.unit_positions.update(resolution, self.ellipse.base_angle, 1.0);
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);
        let shape = self.shape;
        let units = &self.unit_positions;

        draw_passes(
            &self.shadows,
            center,
            aa,
            shape.draw_fill && shape.draw_fill_shadow,
            shape.draw_fill,
            shape.fill_color,
            |center, color, edge| add_circle(vh, center, radius, color, units, edge),
        )?;
        draw_passes(
            &self.shadows,
            center,
            aa,
            shape.draw_outline && shape.draw_outline_shadow,
            shape.draw_outline,
            shape.outline_color,
            |center, color, edge| add_ring(vh, center, radius, &self.outline, color, units, edge),
        )?;

        self.clean = true;
        trace_mesh(self.debug_name(), vh);
        Ok(())
    }

    fn force_mesh_update(&mut self) {
        self.clean = false;
    }

    fn is_dirty(&self) -> bool {
        !self.clean
    }

    fn debug_name(&self) -> &str {
        "EllipseShape"
    }
}
