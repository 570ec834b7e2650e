use glam::Vec2;

use crate::color::Color32;
use crate::error::GeometryResult;
use crate::props::impl_try_from_i32;
use crate::rect::Rect;
use crate::rects::{add_horizontal_two_color_rect, add_vertical_two_color_rect};
use crate::vertex::VertexSink;

use super::{MeshContext, MeshShape, trace_mesh};

/// Edge of the layout rect a gradient strip hugs.
///
/// Plain positions fade inward from inside the rect. `Outer*` positions sit
/// just outside it and fade away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeGradientPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    OuterTop,
    OuterBottom,
    OuterLeft,
    OuterRight,
}

impl_try_from_i32!(EdgeGradientPosition {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
    OuterTop = 4,
    OuterBottom = 5,
    OuterLeft = 6,
    OuterRight = 7,
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGradientProperties {
    /// Depth of the strip, perpendicular to its edge.
    pub size: f32,
    pub color: Color32,
    pub position: EdgeGradientPosition,
}

impl Default for EdgeGradientProperties {
    fn default() -> Self {
        Self {
            size: 20.0,
            color: Color32::from_rgba(127, 127, 127, 255),
            position: EdgeGradientPosition::Top,
        }
    }
}

impl EdgeGradientProperties {
    pub fn new(position: EdgeGradientPosition, size: f32, color: Color32) -> Self {
        Self { size, color, position }
    }

    fn add_to(&self, vh: &mut dyn VertexSink, rect: &Rect) {
        let min = rect.min();
        let max = rect.max();
        let size = self.size;
        let solid = self.color;
        let clear = solid.transparent();
        let (w, h) = (rect.width, rect.height);

        use EdgeGradientPosition::*;
        match self.position {
            Top => add_vertical_two_color_rect(vh, Vec2::new(min.x, max.y), size, w, solid, clear, Vec2::ZERO),
            Bottom => add_vertical_two_color_rect(vh, Vec2::new(min.x, min.y + size), size, w, clear, solid, Vec2::ZERO),
            Left => add_horizontal_two_color_rect(vh, Vec2::new(min.x, max.y), h, size, solid, clear, Vec2::ZERO),
            Right => add_horizontal_two_color_rect(vh, Vec2::new(max.x - size, max.y), h, size, clear, solid, Vec2::ZERO),
            OuterTop => add_vertical_two_color_rect(vh, Vec2::new(min.x, max.y + size), size, w, clear, solid, Vec2::ZERO),
            OuterBottom => add_vertical_two_color_rect(vh, Vec2::new(min.x, min.y), size, w, solid, clear, Vec2::ZERO),
            OuterLeft => add_horizontal_two_color_rect(vh, Vec2::new(min.x - size, max.y), h, size, clear, solid, Vec2::ZERO),
            OuterRight => add_horizontal_two_color_rect(vh, Vec2::new(max.x, max.y), h, size, solid, clear, Vec2::ZERO),
        }
    }
}

/// Linear fades along the edges of the layout rect. Each entry draws one
/// quad.
#[derive(Debug, Clone, Default)]
pub struct EdgeGradientShape {
    pub gradients: Vec<EdgeGradientProperties>,
    clean: bool,
}

impl EdgeGradientShape {
    pub fn new(gradient: EdgeGradientProperties) -> Self {
        Self {
            gradients: vec![gradient],
            clean: false,
        }
    }

    pub fn with_gradient(mut self, gradient: EdgeGradientProperties) -> Self {
        self.gradients.push(gradient);
        self
    }
}

impl MeshShape for EdgeGradientShape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        shapekit_core::profiling::profile_scope!("EdgeGradientShape");
        vh.clear();

        for gradient in &self.gradients {
            gradient.add_to(vh, &ctx.rect);
        }

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
        "EdgeGradientShape"
    }
}
