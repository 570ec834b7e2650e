use glam::Vec2;

use crate::color::Color32;
use crate::error::GeometryResult;
use crate::geo_utils::EdgeGradientData;
use crate::props::impl_try_from_i32;
use crate::rects::add_rect;
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, trace_mesh};

/// Edge of the layout rect a pixel line is snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnappedPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl_try_from_i32!(SnappedPosition {
    Center = 0,
    Top = 1,
    Bottom = 2,
    Left = 3,
    Right = 4,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnappedOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl_try_from_i32!(SnappedOrientation {
    Horizontal = 0,
    Vertical = 1,
});

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnappedProperties {
    pub position: SnappedPosition,
    pub orientation: SnappedOrientation,
}

impl SnappedProperties {
    pub fn new(position: SnappedPosition, orientation: SnappedOrientation) -> Self {
        Self { position, orientation }
    }
}

/// Hairline spanning the layout rect whose weight is given in physical
/// pixels, so it stays crisp at any scale factor.
#[derive(Debug, Clone)]
pub struct PixelLineShape {
    pub snapped: SnappedProperties,
    /// Weight in physical pixels.
    pub line_weight: f32,
    pub color: Color32,
    clean: bool,
}

impl Default for PixelLineShape {
    fn default() -> Self {
        Self {
            snapped: SnappedProperties::default(),
            line_weight: 1.0,
            color: Color32::WHITE,
            clean: false,
        }
    }
}

impl PixelLineShape {
    pub fn new(snapped: SnappedProperties) -> Self {
        Self {
            snapped,
            ..Self::default()
        }
    }

    pub fn with_line_weight(mut self, line_weight: f32) -> Self {
        self.line_weight = line_weight.max(0.0);
        self
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }
}

impl MeshShape for PixelLineShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("PixelLineShape");
        vh.clear();

        let rect = &ctx.rect;
        let weight = self.line_weight / ctx.scale();
        let half = weight * 0.5;
        let (min, max) = (rect.min(), rect.max());
        let mut center = rect.center();
        match self.snapped.position {
            SnappedPosition::Center => {}
            SnappedPosition::Top => center.y = max.y - half,
            SnappedPosition::Bottom => center.y = min.y + half,
            SnappedPosition::Left => center.x = min.x + half,
            SnappedPosition::Right => center.x = max.x - half,
        }
        let size = match self.snapped.orientation {
            SnappedOrientation::Horizontal => Vec2::new(rect.width, weight),
            SnappedOrientation::Vertical => Vec2::new(weight, rect.height),
        };

        add_rect(vh, center, size, self.color, &EdgeGradientData::inactive());

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
        "PixelLineShape"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use crate::vertex::MeshBuffer;

    fn bounds(mesh: &MeshBuffer) -> (Vec2, Vec2) {
        mesh.vertices.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), v| (min.min(v.position_2d()), max.max(v.position_2d())),
        )
    }

    #[test]
    fn test_top_line_is_one_physical_pixel() {
        let mut shape = PixelLineShape::new(SnappedProperties::new(
            SnappedPosition::Top,
            SnappedOrientation::Horizontal,
        ));
        let ctx = MeshContext::new(Rect::new(0.0, 0.0, 100.0, 20.0)).with_scale_factor(2.0);
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx).unwrap();

        assert_eq!(mesh.vertices.len(), 4);
        let (min, max) = bounds(&mesh);
        assert_eq!(min, Vec2::new(0.0, 19.5));
        assert_eq!(max, Vec2::new(100.0, 20.0));
    }

    #[test]
    fn test_vertical_left_line_spans_the_height() {
        let mut shape = PixelLineShape::new(SnappedProperties::new(
            SnappedPosition::Left,
            SnappedOrientation::Vertical,
        ))
        .with_line_weight(3.0);
        let ctx = MeshContext::new(Rect::new(10.0, 10.0, 50.0, 40.0));
        let mut mesh = MeshBuffer::new();
        shape.populate_mesh(&mut mesh, &ctx).unwrap();

        let (min, max) = bounds(&mesh);
        assert_eq!(min, Vec2::new(10.0, 10.0));
        assert_eq!(max, Vec2::new(13.0, 50.0));
    }

    #[test]
    fn test_snapping_from_index() {
        assert_eq!(SnappedPosition::try_from(4).unwrap(), SnappedPosition::Right);
        assert_eq!(SnappedOrientation::try_from(1).unwrap(), SnappedOrientation::Vertical);
        assert!(SnappedOrientation::try_from(2).is_err());
    }
}
