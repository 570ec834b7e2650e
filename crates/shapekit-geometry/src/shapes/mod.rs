//! Shape components.
//!
//! Each component owns its properties and the per-instance caches its
//! triangulators reuse across rebuilds (unit tables, polyline data). A host
//! calls [`MeshShape::populate_mesh`] with the element's layout rect whenever
//! [`MeshShape::is_dirty`] reports stale geometry, and calls
//! [`MeshShape::force_mesh_update`] after editing any property.
//!
//! Every component draws in the same order: fill shadows, fill, outline
//! shadows, outline.

mod arc;
mod curved_line;
mod edge_gradient;
mod ellipse;
mod line;
mod pixel_line;
mod polygon;
mod rectangle;
mod sector;
mod skewed;

pub use arc::ArcShape;
pub use curved_line::CurvedLineShape;
pub use edge_gradient::{EdgeGradientPosition, EdgeGradientProperties, EdgeGradientShape};
pub use ellipse::EllipseShape;
pub use line::LineShape;
pub use pixel_line::{PixelLineShape, SnappedOrientation, SnappedPosition, SnappedProperties};
pub use polygon::PolygonShape;
pub use rectangle::RectangleShape;
pub use sector::SectorShape;
pub use skewed::SkewedShape;

use glam::Vec2;

use crate::color::Color32;
use crate::error::GeometryResult;
use crate::geo_utils::EdgeGradientData;
use crate::props::ShadowsProperties;
use crate::rect::Rect;
use crate::vertex::VertexSink;

/// Per-rebuild input handed to a shape by its host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeshContext {
    /// Pixel rect of the UI element.
    pub rect: Rect,
    /// Canvas scale factor. `None` means 1.
    pub scale_factor: Option<f32>,
}

impl MeshContext {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            scale_factor: None,
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub fn scale(&self) -> f32 {
        self.scale_factor.filter(|s| *s > 0.0).unwrap_or(1.0)
    }
}

/// A component that can write its mesh into a [`VertexSink`].
pub trait MeshShape {
    /// Clear `vh` and write the full mesh for `ctx`.
    ///
    /// On error the sink holds whatever was written before the failing pass.
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()>;

    /// Mark every cached derived value stale so the next rebuild recomputes it.
    fn force_mesh_update(&mut self);

    /// Whether properties changed since the last successful rebuild.
    fn is_dirty(&self) -> bool;

    /// Name used in logs and profiler scopes.
    fn debug_name(&self) -> &str {
        "Shape"
    }
}

/// Run `draw` once per shadow pass when `with_shadows` is set, then once for
/// the shape itself when `with_shape` is set and the shadows allow it.
///
/// Shadow passes use each shadow's color and softened gradient; the shape
/// pass uses `color` and a plain anti-aliasing gradient.
pub(crate) fn draw_passes(
    shadows: &ShadowsProperties,
    center: Vec2,
    anti_aliasing: f32,
    with_shadows: bool,
    with_shape: bool,
    color: Color32,
    mut draw: impl FnMut(Vec2, Color32, &EdgeGradientData) -> GeometryResult<()>,
) -> GeometryResult<()> {
    if with_shadows {
        for pass in shadows.passes(center, anti_aliasing) {
            draw(pass.center, pass.color, &pass.edge_gradient)?;
        }
    }
    if with_shape && shadows.show_shape {
        draw(center, color, &EdgeGradientData::for_anti_aliasing(anti_aliasing))?;
    }
    Ok(())
}

/// Tagged union over every shape component.
#[derive(Debug, Clone)]
pub enum Shape {
    Ellipse(EllipseShape),
    Rectangle(RectangleShape),
    Arc(ArcShape),
    Sector(SectorShape),
    Line(LineShape),
    Polygon(PolygonShape),
    EdgeGradient(EdgeGradientShape),
    PixelLine(PixelLineShape),
    CurvedLine(CurvedLineShape),
    Skewed(SkewedShape),
}

impl Shape {
    fn inner(&self) -> &dyn MeshShape {
        match self {
            Shape::Ellipse(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Arc(s) => s,
            Shape::Sector(s) => s,
            Shape::Line(s) => s,
            Shape::Polygon(s) => s,
            Shape::EdgeGradient(s) => s,
            Shape::PixelLine(s) => s,
            Shape::CurvedLine(s) => s,
            Shape::Skewed(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn MeshShape {
        match self {
            Shape::Ellipse(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Arc(s) => s,
            Shape::Sector(s) => s,
            Shape::Line(s) => s,
            Shape::Polygon(s) => s,
            Shape::EdgeGradient(s) => s,
            Shape::PixelLine(s) => s,
            Shape::CurvedLine(s) => s,
            Shape::Skewed(s) => s,
        }
    }

    /// Rebuild into `vh` only when the shape is dirty. Returns whether it did.
    pub fn rebuild_if_dirty(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<bool> {
        if !self.is_dirty() {
            return Ok(false);
        }
        self.populate_mesh(vh, ctx)?;
        Ok(true)
    }
}

impl MeshShape for Shape {
    fn populate_mesh(&mut self, vh: &mut dyn VertexSink, ctx: &MeshContext) -> GeometryResult<()> {
        self.inner_mut().populate_mesh(vh, ctx)
    }

    fn force_mesh_update(&mut self) {
        self.inner_mut().force_mesh_update();
    }

    fn is_dirty(&self) -> bool {
        self.inner().is_dirty()
    }

    fn debug_name(&self) -> &str {
        self.inner().debug_name()
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Shape::$variant(shape)
                }
            }
        )+
    };
}

impl_from_shape!(
    Ellipse(EllipseShape),
    Rectangle(RectangleShape),
    Arc(ArcShape),
    Sector(SectorShape),
    Line(LineShape),
    Polygon(PolygonShape),
    EdgeGradient(EdgeGradientShape),
    PixelLine(PixelLineShape),
    CurvedLine(CurvedLineShape),
    Skewed(SkewedShape),
);

/// Log the size of a finished mesh.
pub(crate) fn trace_mesh(name: &str, vh: &dyn VertexSink) {
    tracing::trace!(shape = name, vertices = vh.vertex_count(), "mesh populated");
}
