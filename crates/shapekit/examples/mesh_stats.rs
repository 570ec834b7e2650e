//! Builds one of every shape component and logs the size of its mesh.
//!
//! Run with: cargo run -p shapekit --example mesh_stats
//! Set RUST_LOG=trace to also see the per-triangulator counts.

use shapekit::prelude::*;

fn shapes() -> Vec<Shape> {
    let shadow = ShadowsProperties::default().with_shadow(ShadowProperties::default());

    let star = PointListProperties::from_generator(
        PointsGenerator::Star(shapekit::geometry::StarGenerator {
            radius: Vec2::splat(40.0),
            ..Default::default()
        }),
        Vec2::ZERO,
    );
    let zigzag = PointListProperties::new(vec![
        Vec2::new(-40.0, -20.0),
        Vec2::new(-10.0, 20.0),
        Vec2::new(10.0, -20.0),
        Vec2::new(40.0, 20.0),
    ]);

    vec![
        RectangleShape::new(RoundedProperties::uniform(12.0))
            .with_shadows(shadow.clone())
            .into(),
        EllipseShape::default()
            .with_shape(OutlineShapeProperties::default().with_outline(Color32::BLACK))
            .into(),
        ArcShape::new(ArcProperties::new(ArcDirection::Centered, 0.75))
            .with_line(LineProperties::default().with_cap(LineCap::Round))
            .into(),
        SectorShape::new(ArcProperties::new(ArcDirection::Forward, 0.3)).into(),
        LineShape::new(zigzag)
            .with_outline(OutlineProperties::default().with_line_weight(4.0))
            .into(),
        PolygonShape::new(star).with_shadows(shadow).into(),
        EdgeGradientShape::new(EdgeGradientProperties::default())
            .with_gradient(EdgeGradientProperties::new(
                EdgeGradientPosition::OuterBottom,
                8.0,
                Color32::BLACK,
            ))
            .into(),
        PixelLineShape::new(SnappedProperties::new(
            SnappedPosition::Bottom,
            SnappedOrientation::Horizontal,
        ))
        .into(),
        CurvedLineShape::new(CurveGenerator::new(vec![
            CurvePoint::new(Vec2::new(-40.0, 0.0)).with_out_control(Vec2::new(-20.0, 40.0)),
            CurvePoint::new(Vec2::new(40.0, 0.0)).with_in_control(Vec2::new(20.0, -40.0)),
        ]))
        .with_outline(OutlineProperties::default().with_line_weight(3.0))
        .into(),
        SkewedShape::new(
            RectangleShape::new(RoundedProperties::uniform(8.0)),
            SkewProperties::new(20.0, 0.0),
        )
        .into(),
    ]
}

fn main() -> Result<(), GeometryError> {
    shapekit::core::init(&Config::default());

    let ctx = MeshContext::new(Rect::new(0.0, 0.0, 120.0, 80.0)).with_scale_factor(2.0);
    let mut mesh = MeshBuffer::new();

    for mut shape in shapes() {
        shapekit::core::profiling::new_frame();
        shape.rebuild_if_dirty(&mut mesh, &ctx)?;
        tracing::info!(
            shape = shape.debug_name(),
            vertices = mesh.vertices.len(),
            triangles = mesh.triangle_count(),
            bytes = mesh.vertex_bytes().len(),
            "built mesh"
        );
    }

    Ok(())
}
