//! Shapekit - procedural meshes for UI shapes
//!
//! Shapekit turns high-level shape descriptions (rounded rectangles,
//! ellipses, arcs, sectors, polylines, bezier curves, polygons, edge
//! gradients and pixel lines) into triangle meshes ready for a GPU upload:
//!
//! - **Anti-aliasing**: every edge can carry a thin alpha fade
//! - **Shadows**: soft drop shadows reuse the same edge-gradient machinery
//! - **Caching**: components keep unit tables and polyline data across rebuilds
//! - **Hosts**: anything implementing [`VertexSink`](geometry::VertexSink)
//!   can receive the mesh
//!
//! # Quick Start
//!
//! ```ignore
//! use shapekit::prelude::*;
//!
//! shapekit::core::init(&Config::default());
//!
//! let mut shape = Shape::from(
//!     EllipseShape::default().with_shadows(ShadowsProperties::default().with_shadow(ShadowProperties::default())),
//! );
//! let mut mesh = MeshBuffer::new();
//! shape.rebuild_if_dirty(&mut mesh, &MeshContext::new(Rect::new(0.0, 0.0, 64.0, 64.0)))?;
//! ```

// Re-export sub-crates
pub use shapekit_core as core;
pub use shapekit_core::math;
pub use shapekit_geometry as geometry;

pub use shapekit_core::{BenchmarkMode, Config};

/// Prelude module for convenient imports
pub mod prelude {
    pub use shapekit_core::math::{Vec2, Vec3, Vec4};
    pub use shapekit_core::{BenchmarkMode, Config};

    // Sinks and errors
    pub use shapekit_geometry::{
        Color32, GeometryError, GeometryResult, MeshBuffer, Rect, UiVertex, VertexSink,
    };

    // Properties
    pub use shapekit_geometry::{
        AntiAliasingProperties, ArcDirection, ArcProperties, CutoutProperties, EllipseFitting,
        EllipseProperties, LineCap, LineProperties, LineType, OutlineProperties,
        OutlineShapeProperties, PolygonCenter, PolygonProperties, ResolutionMode,
        RoundedProperties, RoundingProperties, ShadowProperties, ShadowsProperties,
        ShapeProperties, SkewProperties,
    };

    // Points
    pub use shapekit_geometry::{CurveGenerator, CurvePoint, PointListProperties, PointsGenerator};

    // Components
    pub use shapekit_geometry::{
        ArcShape, CurvedLineShape, EdgeGradientPosition, EdgeGradientProperties,
        EdgeGradientShape, EllipseShape, LineShape, MeshContext, MeshShape, PixelLineShape,
        PolygonShape, RectangleShape, SectorShape, Shape, SkewedShape, SnappedOrientation,
        SnappedPosition, SnappedProperties,
    };
}
