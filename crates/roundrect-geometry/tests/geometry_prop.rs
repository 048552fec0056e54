use proptest::prelude::*;
use roundrect_core::{GeometryConstants, Point2};
use roundrect_geometry::{
    generate_curve, generate_mesh, tessellate_boundary, Corner, CornerInsets, CornerPolicy,
    CurveRequest, MeshRequest, PolygonMode, Rectangle, UvMapper, UvProfile, Variant,
};

fn polygon_mode() -> impl Strategy<Value = PolygonMode> {
    prop_oneof![
        Just(PolygonMode::Ngon),
        Just(PolygonMode::Quad),
        Just(PolygonMode::Triangle),
    ]
}

fn uv_profile() -> impl Strategy<Value = UvProfile> {
    prop_oneof![
        Just(UvProfile::Stretch),
        Just(UvProfile::Contain),
        Just(UvProfile::Cover),
    ]
}

fn policy() -> impl Strategy<Value = CornerPolicy> {
    prop_oneof![Just(CornerPolicy::SharpFallback), Just(CornerPolicy::ForceRound)]
}

fn factor_or_zero() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.05f64..0.95]
}

proptest! {
    #[test]
    fn normalization_is_idempotent(
        ax in -100.0f64..100.0,
        ay in -100.0f64..100.0,
        bx in -100.0f64..100.0,
        by in -100.0f64..100.0,
    ) {
        let c = GeometryConstants::default();
        let rect = Rectangle::from_corners(Point2::new(ax, ay), Point2::new(bx, by), &c);
        prop_assert!(rect.left < rect.right);
        prop_assert!(rect.bottom < rect.top);
        let again = Rectangle::from_corners(
            rect.corner(Corner::TopLeft),
            rect.corner(Corner::BottomRight),
            &c,
        );
        prop_assert_eq!(again, rect);
    }

    #[test]
    fn insets_never_exceed_half_short_side(
        w in 0.01f64..50.0,
        h in 0.01f64..50.0,
        factors in prop::array::uniform4(-2.0f64..2.0),
        resolutions in prop::array::uniform4(-3i32..20),
        policy in policy(),
        mesh in any::<bool>(),
    ) {
        let c = GeometryConstants::default();
        let rect = Rectangle::new(0.0, w, h, 0.0);
        let variant = if mesh { Variant::Mesh } else { Variant::Curve };
        let insets = CornerInsets::compute(&rect, factors, resolutions, policy, variant, &c);
        let ceiling = rect.short_side_half();
        for corner in insets.corners {
            prop_assert!(corner.inset >= 0.0);
            prop_assert!(corner.inset < ceiling);
            prop_assert!(corner.radius <= corner.inset);
        }
        prop_assert!(insets.edges.top.length() > 0.0);
        prop_assert!(insets.edges.left.length() > 0.0);
    }

    #[test]
    fn curve_knot_count(
        factors in prop::array::uniform4(factor_or_zero()),
    ) {
        let request = CurveRequest { rounding: factors, ..CurveRequest::default() };
        let curve = generate_curve(&request, &GeometryConstants::default());
        let round = factors.iter().filter(|&&f| f > 0.0).count();
        prop_assert_eq!(curve.profile.knot_count(), 4 + round);
    }

    #[test]
    fn mesh_counts_follow_closed_form(
        factors in prop::array::uniform4(0.05f64..0.95),
        resolutions in prop::array::uniform4(0i32..16),
        mode in polygon_mode(),
    ) {
        let request = MeshRequest {
            rounding: factors,
            resolutions,
            polygon_mode: mode,
            ..MeshRequest::default()
        };
        let geometry = generate_mesh(&request, &GeometryConstants::default());
        let mesh = &geometry.mesh;
        let total: usize = resolutions.iter().map(|&r| r as usize).sum();

        let (vertices, faces) = match mode {
            PolygonMode::Ngon => (8 + total, 1),
            PolygonMode::Quad => (12 + total, 5 + total + 4),
            PolygonMode::Triangle => (12 + total, 10 + total + 4),
        };
        prop_assert_eq!(mesh.vertex_count(), vertices);
        prop_assert_eq!(mesh.face_count(), faces);
        prop_assert!(mesh.validate().is_ok());
        prop_assert_eq!(&mesh.uv_indices, &mesh.vertex_indices);
    }

    #[test]
    fn faces_wind_counter_clockwise(
        w in 0.5f64..20.0,
        h in 0.5f64..20.0,
        factors in prop::array::uniform4(factor_or_zero()),
        resolutions in prop::array::uniform4(0i32..12),
        mode in polygon_mode(),
        policy in policy(),
    ) {
        let request = MeshRequest {
            corner_a: Point2::new(-w, h),
            corner_b: Point2::new(w, -h),
            rounding: factors,
            resolutions,
            polygon_mode: mode,
            corner_policy: policy,
            ..MeshRequest::default()
        };
        let geometry = generate_mesh(&request, &GeometryConstants::default());
        for i in 0..geometry.mesh.face_count() {
            let area = geometry.mesh.face_signed_area(i).unwrap_or(-1.0);
            prop_assert!(area > 0.0, "face {} has area {}", i, area);
        }
    }

    #[test]
    fn arc_samples_lie_on_their_circle(
        factors in prop::array::uniform4(0.05f64..0.95),
        resolutions in prop::array::uniform4(0i32..24),
    ) {
        let c = GeometryConstants::default();
        let rect = Rectangle::new(-3.0, 5.0, 2.0, -1.0);
        let insets = CornerInsets::compute(
            &rect,
            factors,
            resolutions,
            CornerPolicy::ForceRound,
            Variant::Mesh,
            &c,
        );
        let boundary = tessellate_boundary(&insets, UvProfile::Stretch);
        for span in &boundary.corners {
            let g = insets.corner(span.corner);
            let center = insets.hub_point(span.corner);
            prop_assert_eq!(span.ids.len(), g.resolution + 2);
            for &id in &span.ids {
                let p = boundary.arena.position(id).map(|p| p.xy()).unwrap_or(center);
                let d = p.distance_to(&center);
                prop_assert!((d - g.radius).abs() <= 1e-9 * g.radius);
            }
        }
    }

    #[test]
    fn uv_center_is_invariant(
        w in 0.01f64..100.0,
        h in 0.01f64..100.0,
        profile in uv_profile(),
    ) {
        let rect = Rectangle::new(-w, w, h, -h);
        let uv = UvMapper::new(rect, profile).map(rect.center());
        prop_assert!((uv.x - 0.5).abs() < 1e-12);
        prop_assert!((uv.y - 0.5).abs() < 1e-12);
    }
}
