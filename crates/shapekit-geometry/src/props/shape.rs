use crate::color::Color32;

/// Fill color shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeProperties {
    pub fill_color: Color32,
}

/// Fill and outline toggles for shapes that can draw both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineShapeProperties {
    pub fill_color: Color32,
    pub draw_fill: bool,
    pub draw_fill_shadow: bool,
    pub draw_outline: bool,
    pub outline_color: Color32,
    pub draw_outline_shadow: bool,
}

impl Default for OutlineShapeProperties {
    fn default() -> Self {
        Self {
            fill_color: Color32::WHITE,
            draw_fill: true,
            draw_fill_shadow: true,
            draw_outline: false,
            outline_color: Color32::WHITE,
            draw_outline_shadow: false,
        }
    }
}

impl OutlineShapeProperties {
    pub fn with_fill(mut self, color: Color32) -> Self {
        self.fill_color = color;
        self.draw_fill = true;
        self
    }

    pub fn with_outline(mut self, color: Color32) -> Self {
        self.outline_color = color;
        self.draw_outline = true;
        self
    }

    pub fn without_fill(mut self) -> Self {
        self.draw_fill = false;
        self
    }
}
