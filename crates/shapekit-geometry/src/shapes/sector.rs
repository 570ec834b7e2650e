use crate::arcs::add_segment;
use crate::error::GeometryResult;
use crate::geo_utils::UnitPositionData;
use crate::props::{AntiAliasingProperties, ArcProperties, EllipseProperties, ShadowsProperties, ShapeProperties};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, draw_passes, trace_mesh};

/// Filled pie slice of an ellipse fitted into the layout rect.
#[derive(Debug, Clone, Default)]
pub struct SectorShape {
    pub shape: ShapeProperties,
    pub ellipse: EllipseProperties,
    pub arc: ArcProperties,
    pub shadows: ShadowsProperties,
    pub anti_aliasing: AntiAliasingProperties,
    unit_positions: UnitPositionData,
    clean: bool,
}

impl SectorShape {
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
}

impl MeshShape for SectorShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("SectorShape");
        vh.clear();

        let center = ctx.rect.center();
        let size = ctx.rect.size();
        let radius = self.ellipse.fit_radius(size.x, size.y);
        let resolution = self.ellipse.adjusted_resolution(radius, 0.0);
        let arc = self.arc.validated().adjusted(resolution, self.ellipse.base_angle);
        let aa = self.anti_aliasing.adjusted(ctx.scale_factor);
        let units = &mut self.unit_positions;

        draw_passes(
            &self.shadows,
            center,
            aa,
            true,
            true,
            self.shape.fill_color,
            |center, color, edge| add_segment(vh, center, radius, &arc, color, units, edge),
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
        "SectorShape"
    }
}
