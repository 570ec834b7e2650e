//! Shapekit Geometry - procedural meshes for UI shapes
//!
//! This crate provides:
//! - Triangulators for rects, rounded rects, ellipses, rings, arcs, sectors,
//!   polylines and polygons, writing into any [`VertexSink`]
//! - Edge gradients for anti-aliasing and soft drop shadows
//! - Point generators (round, star, gear, graphs, bezier curves) and a
//!   polyline pipeline with corner rounding, mitres and caps
//! - Skew applied to finished meshes
//! - Shape components that own their properties and caches and rebuild on
//!   demand
//!
//! # Example
//!
//! ```ignore
//! use shapekit_geometry::*;
//!
//! let mut shape = RectangleShape::new(RoundedProperties::uniform(8.0))
//!     .with_anti_aliasing(AntiAliasingProperties::new(1.0));
//!
//! let mut mesh = MeshBuffer::new();
//! shape.populate_mesh(&mut mesh, &MeshContext::new(Rect::new(0.0, 0.0, 120.0, 40.0)))?;
//! upload(mesh.vertex_bytes(), &mesh.indices);
//! ```

// Core primitives
mod color;
mod error;
mod geo_utils;
mod rect;
mod skew;
mod strip;
mod vertex;

// Properties and point lists
pub mod points;
pub mod props;

// Triangulators
mod arcs;
mod ellipses;
mod lines;
mod polygons;
mod rects;
mod rounded_rects;


// Components
pub mod shapes;

// Re-exports
pub use color::*;
pub use error::*;
pub use geo_utils::*;
pub use rect::*;
pub use skew::*;
pub use vertex::*;

pub use arcs::*;
pub use ellipses::*;
pub use lines::*;
pub use polygons::add_polygon;
pub use rects::*;
pub use rounded_rects::*;

pub use hit_test::*;

pub use points::*;
pub use props::*;
pub use shapes::*;
