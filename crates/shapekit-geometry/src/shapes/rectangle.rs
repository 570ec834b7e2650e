use crate::error::GeometryResult;
use crate::props::{
    AntiAliasingProperties, OutlineProperties, OutlineShapeProperties, RoundedProperties, ShadowsProperties,
};
use crate::rounded_rects::{RoundedCornerUnitPositions, add_rounded_rect, add_rounded_rect_line};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, draw_passes, trace_mesh};

/// Rectangle filling the layout rect, optionally with rounded corners and an
/// outline.
#[derive(Debug, Clone, Default)]
pub struct RectangleShape {
    pub shape: OutlineShapeProperties,
    pub rounded: RoundedProperties,
    pub outline: OutlineProperties,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    corner_units: RoundedCornerUnitPositions,
    clean: bool,
}

impl RectangleShape {
    pub fn new(rounded: RoundedProperties) -> Self {
        Self {
            rounded,
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

impl MeshShape for RectangleShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("RectangleShape");
        vh.clear();

        let center = ctx.rect.center();
        let size = ctx.rect.size();
        let rounded = self.rounded.validated(size);
        let adjusted = rounded.adjusted(size, 0.0);
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);
        let shape = self.shape;
        let outline = self.outline;
        let units = &mut self.corner_units;

        draw_passes(
            &self.shadows,
            center,
            aa,
            shape.draw_fill && shape.draw_fill_shadow,
            shape.draw_fill,
            shape.fill_color,
            |center, color, edge| add_rounded_rect(vh, center, size, &rounded, &adjusted, color, units, edge),
        )?;
        draw_passes(
            &self.shadows,
            center,
            aa,
            shape.draw_outline && shape.draw_outline_shadow,
            shape.draw_outline,
            shape.outline_color,
            |center, color, edge| add_rounded_rect_line(vh, center, size, &outline, &rounded, &adjusted, color, units, edge),
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
        "RectangleShape"
    }
}
