//! Mesh-level properties of the shape components.
//!
//! These tests drive the public component API through a recording sink and
//! check coverage, topology and edge placement of the resulting meshes.

use glam::Vec2;
use shapekit_geometry::{
    AntiAliasingProperties, Corner, EllipseFitting, EllipseProperties, EllipseShape, GeometryError,
    LineCap, LineProperties, LineShape, MeshBuffer, MeshContext, MeshShape, OutlineProperties,
    PointListProperties, PolygonShape, RectangleShape, ResolutionMode, RoundedCornerUnitPositions,
    RoundedProperties, RoundingProperties, Shape,
};
use shapekit_test_utils::{
    RecordingSink, assert_all_finite, assert_indices_valid, bounds, count_transparent, triangle_area_sum,
};

fn build(shape: &mut impl MeshShape, rect: shapekit_geometry::Rect) -> MeshBuffer {
    let mut sink = RecordingSink::new();
    shape.populate_mesh(&mut sink, &MeshContext::new(rect)).unwrap();
    assert_eq!(sink.clear_count(), 1, "populate_mesh must clear exactly once");
    assert_indices_valid(&sink.mesh);
    assert_all_finite(&sink.mesh);
    sink.mesh
}

fn rect(width: f32, height: f32) -> shapekit_geometry::Rect {
    shapekit_geometry::Rect::new(0.0, 0.0, width, height)
}

// ====================
// Rounded rectangles
// ====================

#[test]
fn test_rounded_rect_area_matches_analytic() {
    let size = Vec2::new(100.0, 60.0);
    let rounded = RoundedProperties::uniform(15.0).with_resolution(RoundingProperties::fixed(8));

    let mut units = RoundedCornerUnitPositions::new();
    units.update(&rounded.validated(size).adjusted(size, 0.0));
    for corner in Corner::ALL {
        assert!(units.corner(corner).len() >= 8, "{:?}", corner);
    }

    let mut shape = RectangleShape::new(rounded)
        .with_anti_aliasing(AntiAliasingProperties::disabled());
    let mesh = build(&mut shape, rect(size.x, size.y));

    let expected = 100.0 * 60.0 - (4.0 - std::f32::consts::PI) * 15.0 * 15.0;
    let area = triangle_area_sum(&mesh);
    assert!(
        ((area - expected) / expected).abs() < 0.01,
        "area {} too far from {}",
        area,
        expected
    );
}

#[test]
fn test_rounded_rect_fill_is_a_fan() {
    let mut shape = RectangleShape::new(RoundedProperties::uniform(15.0))
        .with_anti_aliasing(AntiAliasingProperties::disabled());
    let mesh = build(&mut shape, rect(100.0, 60.0));
    assert_eq!(mesh.triangle_count(), mesh.vertices.len() - 1);
}

#[test]
fn test_uniform_corners_have_equal_counts() {
    let size = Vec2::new(100.0, 60.0);
    let rounded = RoundedProperties::uniform(15.0)
        .with_resolution(RoundingProperties::calculated(4.0))
        .validated(size);
    let mut units = RoundedCornerUnitPositions::new();
    units.update(&rounded.adjusted(size, 0.0));

    let first = units.corner(Corner::TopLeft).len();
    assert!(first >= 2);
    for corner in Corner::ALL {
        assert_eq!(units.corner(corner).len(), first, "{:?}", corner);
    }
    assert_eq!(units.ring_len(), first * 4);
}

#[test]
fn test_anti_aliasing_doubles_the_ring() {
    let rounded = RoundedProperties::uniform(10.0).with_resolution(RoundingProperties::fixed(8));
    let mut plain = RectangleShape::new(rounded).with_anti_aliasing(AntiAliasingProperties::disabled());
    let mut smooth = RectangleShape::new(rounded).with_anti_aliasing(AntiAliasingProperties::new(1.0));
    let plain = build(&mut plain, rect(80.0, 40.0));
    let smooth = build(&mut smooth, rect(80.0, 40.0));

    let ring = plain.vertices.len() - 1;
    assert_eq!(smooth.vertices.len(), 1 + ring * 2);
    assert_eq!(count_transparent(&smooth), ring);
    assert_eq!(smooth.triangle_count(), ring * 3);
}

// ====================
// Ellipses
// ====================

#[test]
fn test_uniform_inner_ellipse_fits_the_short_side() {
    let ellipse = EllipseProperties::default()
        .with_fitting(EllipseFitting::UniformInner)
        .with_resolution(ResolutionMode::Fixed { resolution: 16 });
    let mut shape = EllipseShape::new(ellipse).with_anti_aliasing(AntiAliasingProperties::disabled());
    let mesh = build(&mut shape, rect(40.0, 20.0));

    let center = Vec2::new(20.0, 10.0);
    assert_eq!(mesh.vertices.len(), 17);
    for v in &mesh.vertices[1..] {
        assert!((v.position_2d().distance(center) - 10.0).abs() < 1e-3);
    }
    let (min, max) = bounds(&mesh);
    assert!(min.distance(Vec2::new(10.0, 0.0)) < 1e-3);
    assert!(max.distance(Vec2::new(30.0, 20.0)) < 1e-3);
}

// ====================
// Lines
// ====================

fn two_point_line(cap: LineCap, anti_aliasing: AntiAliasingProperties) -> MeshBuffer {
    let points = PointListProperties::new(vec![Vec2::new(-20.0, 0.0), Vec2::new(20.0, 0.0)]);
    let mut shape = LineShape::new(points)
        .with_line(
            LineProperties::default()
                .with_cap(cap)
                .with_cap_resolution(RoundingProperties::fixed(6)),
        )
        .with_anti_aliasing(anti_aliasing);
    build(&mut shape, rect(100.0, 100.0))
}

#[test]
fn test_cap_vertex_counts() {
    let off = AntiAliasingProperties::disabled();
    assert_eq!(two_point_line(LineCap::Close, off).vertices.len(), 4);
    assert_eq!(two_point_line(LineCap::Projected, off).vertices.len(), 4 + 2 * 2);

    let round = two_point_line(LineCap::Round, off);
    assert_eq!(round.vertices.len(), 4 + 6 * 2);
    assert_eq!(round.triangle_count(), 2 + 6 * 2);
}

#[test]
fn test_anti_aliasing_doubles_line_vertices() {
    let on = AntiAliasingProperties::new(1.0);
    let off = AntiAliasingProperties::disabled();
    for cap in [LineCap::Close, LineCap::Projected, LineCap::Round] {
        let plain = two_point_line(cap, off);
        let smooth = two_point_line(cap, on);
        assert_eq!(smooth.vertices.len(), plain.vertices.len() * 2, "{:?}", cap);
        assert_eq!(count_transparent(&smooth), plain.vertices.len(), "{:?}", cap);
    }
}

#[test]
fn test_right_angle_mitre_length() {
    let points = PointListProperties::new(vec![
        Vec2::new(-20.0, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 20.0),
    ]);
    let mut shape = LineShape::new(points)
        .with_outline(OutlineProperties::default().with_line_weight(2.0))
        .with_anti_aliasing(AntiAliasingProperties::disabled());
    let mesh = build(&mut shape, rect(100.0, 100.0));

    let corner = Vec2::splat(50.0);
    let near: Vec<f32> = mesh
        .vertices
        .iter()
        .map(|v| v.position_2d().distance(corner))
        .filter(|d| *d < 5.0)
        .collect();
    assert_eq!(near.len(), 2);
    for d in near {
        assert!((d - std::f32::consts::SQRT_2).abs() < 1e-3, "{}", d);
    }
}

#[test]
fn test_near_reversal_stays_bounded() {
    let points = PointListProperties::new(vec![
        Vec2::new(-20.0, 0.0),
        Vec2::new(20.0, 0.0),
        Vec2::new(-20.0, 0.001),
    ])
    .with_max_angle(0.0);
    let mut shape = LineShape::new(points).with_anti_aliasing(AntiAliasingProperties::new(1.0));
    let mesh = build(&mut shape, rect(100.0, 100.0));

    let (min, max) = bounds(&mesh);
    assert!((max - min).max_element() < 1000.0);
}

// ====================
// Polygons
// ====================

fn square(clockwise: bool) -> PointListProperties {
    let mut corners = vec![
        Vec2::new(-10.0, 10.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, -10.0),
        Vec2::new(-10.0, -10.0),
    ];
    if !clockwise {
        corners.reverse();
    }
    PointListProperties::new(corners)
}

#[test]
fn test_polygon_fade_points_out_for_either_winding() {
    for clockwise in [true, false] {
        let mut shape = PolygonShape::new(square(clockwise)).with_anti_aliasing(AntiAliasingProperties::new(1.0));
        let mesh = build(&mut shape, rect(100.0, 100.0));

        let (min, max) = bounds(&mesh);
        assert!(min.distance(Vec2::splat(39.0)) < 1e-3, "clockwise {}: {:?}", clockwise, min);
        assert!(max.distance(Vec2::splat(61.0)) < 1e-3, "clockwise {}: {:?}", clockwise, max);
        assert_eq!(count_transparent(&mesh), 4);
    }
}

#[test]
fn test_polygon_needs_three_points() {
    let points = PointListProperties::new(vec![Vec2::ZERO, Vec2::X]);
    let mut shape = PolygonShape::new(points);
    let mut sink = RecordingSink::new();
    let result = shape.populate_mesh(&mut sink, &MeshContext::new(rect(10.0, 10.0)));

    assert!(matches!(result, Err(GeometryError::TooFewPoints { .. })));
    assert!(sink.mesh.vertices.is_empty());
    assert!(shape.is_dirty());
}

// ====================
// Rebuilds
// ====================

#[test]
fn test_rebuild_is_idempotent() {
    let mut shape: Shape = LineShape::new(square(true))
        .with_line(LineProperties::default().with_cap(LineCap::Round))
        .into();
    let ctx = MeshContext::new(rect(64.0, 64.0));

    let mut first = MeshBuffer::new();
    let mut second = MeshBuffer::new();
    shape.populate_mesh(&mut first, &ctx).unwrap();
    shape.force_mesh_update();
    assert!(shape.is_dirty());
    assert!(shape.rebuild_if_dirty(&mut second, &ctx).unwrap());

    assert_eq!(first.vertices, second.vertices);
    assert_eq!(first.indices, second.indices);
    assert!(!shape.rebuild_if_dirty(&mut second, &ctx).unwrap());
}

#[test]
fn test_every_component_emits_a_valid_mesh() {
    use shapekit_geometry::{
        ArcDirection, ArcProperties, ArcShape, CurveGenerator, CurvePoint, CurvedLineShape, EdgeGradientProperties,
        EdgeGradientShape, PixelLineShape, PointsGenerator, SectorShape, ShadowProperties, ShadowsProperties,
        SkewProperties, SkewedShape, StarGenerator,
    };

    let shadows = ShadowsProperties::default().with_shadow(ShadowProperties::default());
    let star = PointListProperties::from_generator(PointsGenerator::Star(StarGenerator::default()), Vec2::ZERO);
    let mut shapes: Vec<Shape> = vec![
        RectangleShape::new(RoundedProperties::uniform(6.0))
            .with_shadows(shadows.clone())
            .into(),
        EllipseShape::default().with_shadows(shadows.clone()).into(),
        ArcShape::new(ArcProperties::new(ArcDirection::Backward, 0.4)).into(),
        ArcShape::new(ArcProperties::new(ArcDirection::Centered, 0.6))
            .with_line(LineProperties::default().with_cap(LineCap::Projected))
            .into(),
        SectorShape::new(ArcProperties::new(ArcDirection::Forward, 0.7))
            .with_shadows(shadows.clone())
            .into(),
        LineShape::new(square(false)).with_shadows(shadows.clone()).into(),
        PolygonShape::new(star).with_shadows(shadows).into(),
        EdgeGradientShape::new(EdgeGradientProperties::default()).into(),
        PixelLineShape::default().into(),
        CurvedLineShape::new(CurveGenerator::new(vec![
            CurvePoint::new(Vec2::new(-15.0, -8.0)).with_out_control(Vec2::new(0.0, 12.0)),
            CurvePoint::new(Vec2::new(15.0, -8.0)),
        ]))
        .into(),
        SkewedShape::new(EllipseShape::default(), SkewProperties::new(15.0, -5.0)).into(),
    ];

    for shape in &mut shapes {
        let mesh = build(shape, rect(48.0, 32.0));
        assert!(!mesh.is_empty(), "{} produced no triangles", shape.debug_name());
        assert!(!shape.is_dirty());
    }
}
