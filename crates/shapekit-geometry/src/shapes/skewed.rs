use crate::error::GeometryResult;
use crate::skew::{SkewProperties, SkewSink};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, Shape, trace_mesh};

/// Wraps another component and shears its finished mesh around the bottom
/// left corner of the layout rect.
#[derive(Debug, Clone)]
pub struct SkewedShape {
    pub skew: SkewProperties,
    pub shape: Box<Shape>,
    clean: bool,
}

impl SkewedShape {
    pub fn new(shape: impl Into<Shape>, skew: SkewProperties) -> Self {
        Self {
            skew: skew.validated(),
            shape: Box::new(shape.into()),
            clean: false,
        }
    }

    pub fn set_skew(&mut self, skew: SkewProperties) {
        self.skew = skew.validated();
        self.clean = false;
    }
}

impl MeshShape for SkewedShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("SkewedShape");
        if self.skew.is_identity() {
            self.shape.populate_mesh(vh, ctx)?;
        } else {
            let mut sink = SkewSink::new(vh, &ctx.rect, &self.skew);
            self.shape.populate_mesh(&mut sink, ctx)?;
        }
        self.clean = true;
        trace_mesh(self.debug_name(), vh);
        Ok(())
    }

    fn force_mesh_update(&mut self) {
        self.shape.force_mesh_update();
        self.clean = false;
    }

    fn is_dirty(&self) -> bool {
        !self.clean || self.shape.is_dirty()
    }

    fn debug_name(&self) -> &str {
        "SkewedShape"
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::props::{AntiAliasingProperties, RoundedProperties};
    use crate::rect::Rect;
    use crate::shapes::RectangleShape;
    use crate::vertex::MeshBuffer;

    fn plain_rect() -> RectangleShape {
        RectangleShape::new(RoundedProperties::default()).with_anti_aliasing(AntiAliasingProperties::disabled())
    }

    #[test]
    fn test_rect_becomes_parallelogram() {
        let ctx = MeshContext::new(Rect::new(0.0, 0.0, 40.0, 20.0));
        let mut plain = MeshBuffer::new();
        plain_rect().populate_mesh(&mut plain, &ctx).unwrap();

        let mut shape = SkewedShape::new(plain_rect(), SkewProperties::new(45.0, 0.0));
        let mut skewed = MeshBuffer::new();
        shape.populate_mesh(&mut skewed, &ctx).unwrap();

        assert!(!shape.is_dirty());
        assert_eq!(skewed.vertices.len(), plain.vertices.len());
        assert_eq!(skewed.indices, plain.indices);
        for (before, after) in plain.vertices.iter().zip(&skewed.vertices) {
            let p = before.position_2d();
            let expected = Vec2::new(p.x + p.y, p.y);
            assert!(after.position_2d().distance(expected) < 1e-3, "{:?}", after.position_2d());
        }
    }

    #[test]
    fn test_zero_skew_leaves_mesh_alone() {
        let ctx = MeshContext::new(Rect::new(5.0, 5.0, 30.0, 30.0));
        let mut plain = MeshBuffer::new();
        plain_rect().populate_mesh(&mut plain, &ctx).unwrap();

        let mut shape = SkewedShape::new(plain_rect(), SkewProperties::default());
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx).unwrap();
        assert_eq!(mesh.vertices, plain.vertices);
    }

    #[test]
    fn test_skew_change_marks_dirty() {
        let ctx = MeshContext::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut shape = SkewedShape::new(plain_rect(), SkewProperties::new(10.0, 0.0));
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx).unwrap();
        assert!(!shape.is_dirty());

        shape.set_skew(SkewProperties::new(0.0, 120.0));
        assert!(shape.is_dirty());
        assert_eq!(shape.skew.angles.y, crate::skew::MAX_SKEW_DEGREES);
    }
}
