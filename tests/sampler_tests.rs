//! Surface Sampler & Bounds Tests
//!
//! Tests for:
//! - Points landing on the sampled triangle (plane and hull)
//! - Area-proportional triangle selection
//! - Jitter limits
//! - Missing / empty / zero-area groups
//! - Determinism under a seeded generator
//! - Per-group ranges and byte view of the buffer
//! - BoundingBox aggregation

use glam::{Affine3A, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

use scooter_reveal::particles::SurfaceSampler;
use scooter_reveal::resources::geometry::{BoundingBox, Triangle};
use scooter_reveal::scene::{GroupTriangles, MeshGroup};
use scooter_reveal::settings::ParticleCounts;

const EPSILON: f32 = 1e-4;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn unit_triangle() -> Triangle {
    Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)
}

fn counts(steer: usize, wheels_front: usize, wheels_rear: usize, body: usize) -> ParticleCounts {
    ParticleCounts {
        steer,
        wheels_front,
        wheels_rear,
        body,
    }
}

// ============================================================================
// Single triangle
// ============================================================================

#[test]
fn points_lie_on_the_triangle_plane_and_inside_it() {
    let triangle = Triangle::new(
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(4.0, 2.5, 3.0),
        Vec3::new(2.0, 5.0, 2.0),
    );
    let normal = triangle.normal();
    let sampler = SurfaceSampler::new(0.0);

    let points = sampler.sample_triangles(&[triangle], 1000, &mut rng());
    assert_eq!(points.len(), 1000);

    for p in points {
        let height = (p - triangle.vertices[0]).dot(normal);
        assert!(height.abs() < EPSILON, "off plane by {height}");

        let weights = triangle.barycentric(p).unwrap();
        assert!(weights.min_element() > -EPSILON, "outside hull: {weights:?}");
        assert!(weights.max_element() < 1.0 + EPSILON, "outside hull: {weights:?}");
    }
}

#[test]
fn jitter_stays_within_bounds() {
    let sampler = SurfaceSampler::new(0.01);
    let points = sampler.sample_triangles(&[unit_triangle()], 2000, &mut rng());

    for p in points {
        assert!(p.z.abs() <= 0.01 + 1e-6);
        assert!(p.x >= -0.01 - 1e-6 && p.y >= -0.01 - 1e-6);
        assert!(p.x + p.y <= 1.0 + 0.02 + 1e-6);
    }
}

#[test]
fn zero_count_yields_nothing() {
    let sampler = SurfaceSampler::default();
    assert!(sampler.sample_triangles(&[unit_triangle()], 0, &mut rng()).is_empty());
}

// ============================================================================
// Area weighting
// ============================================================================

#[test]
fn selection_is_proportional_to_area() {
    // Same shape scaled so the second has three times the area, far apart in Z.
    let small = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
    let s = 3.0f32.sqrt();
    let large = Triangle::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(s, 0.0, 10.0), Vec3::new(0.0, s, 10.0));
    assert!((large.area / small.area - 3.0).abs() < 1e-4);

    let sampler = SurfaceSampler::new(0.0);
    let points = sampler.sample_triangles(&[small, large], 20_000, &mut rng());
    let on_large = points.iter().filter(|p| p.z > 5.0).count();
    let on_small = points.len() - on_large;

    let ratio = on_large as f32 / on_small as f32;
    assert!((ratio - 3.0).abs() < 0.2, "ratio {ratio}");
}

#[test]
fn zero_area_triangles_are_never_selected() {
    let degenerate = Triangle::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 0.0, 10.0), Vec3::new(2.0, 0.0, 10.0));
    assert_eq!(degenerate.area, 0.0);

    let sampler = SurfaceSampler::new(0.0);
    let points = sampler.sample_triangles(&[degenerate, unit_triangle(), degenerate], 2000, &mut rng());
    assert_eq!(points.len(), 2000);
    assert!(points.iter().all(|p| p.z.abs() < EPSILON));
}

#[test]
fn all_zero_area_group_yields_nothing() {
    init_logger();
    let degenerate = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
    let sampler = SurfaceSampler::default();
    assert!(sampler.sample_triangles(&[degenerate], 100, &mut rng()).is_empty());
}

// ============================================================================
// Groups
// ============================================================================

fn groups() -> Vec<GroupTriangles> {
    let offset = |x: f32| {
        let m = Affine3A::from_translation(Vec3::new(x, 0.0, 0.0));
        let t = unit_triangle();
        Triangle::new(
            m.transform_point3(t.vertices[0]),
            m.transform_point3(t.vertices[1]),
            m.transform_point3(t.vertices[2]),
        )
    };
    vec![
        GroupTriangles {
            group: MeshGroup::Steer,
            triangles: vec![offset(0.0)],
        },
        GroupTriangles {
            group: MeshGroup::FrontWheel,
            triangles: vec![offset(10.0)],
        },
        GroupTriangles {
            group: MeshGroup::RearWheel,
            triangles: Vec::new(),
        },
        GroupTriangles {
            group: MeshGroup::Body,
            triangles: vec![offset(20.0), offset(30.0)],
        },
    ]
}

#[test]
fn groups_occupy_contiguous_ranges() {
    init_logger();
    let buffer = SurfaceSampler::new(0.0).sample(&groups(), &counts(15, 5, 2, 8), &mut rng());

    assert_eq!(buffer.len(), 15 + 5 + 8);
    assert_eq!(buffer.range(MeshGroup::Steer), Some(0..15));
    assert_eq!(buffer.range(MeshGroup::FrontWheel), Some(15..20));
    assert_eq!(buffer.range(MeshGroup::RearWheel), None);
    assert_eq!(buffer.range(MeshGroup::Body), Some(20..28));

    assert!(buffer.group_positions(MeshGroup::FrontWheel).iter().all(|p| p.x >= 10.0 && p.x <= 11.0));
    assert!(buffer.group_positions(MeshGroup::RearWheel).is_empty());
}

#[test]
fn missing_groups_are_skipped() {
    init_logger();
    let only_body: Vec<GroupTriangles> = groups().into_iter().filter(|g| g.group == MeshGroup::Body).collect();
    let buffer = SurfaceSampler::default().sample(&only_body, &ParticleCounts::default(), &mut rng());
    assert_eq!(buffer.len(), ParticleCounts::default().body);
    assert_eq!(buffer.range(MeshGroup::Steer), None);
}

#[test]
fn default_counts_match_the_tuned_values() {
    let counts = ParticleCounts::default();
    assert_eq!(counts.get(MeshGroup::Steer), 1500);
    assert_eq!(counts.get(MeshGroup::FrontWheel), 500);
    assert_eq!(counts.get(MeshGroup::RearWheel), 200);
    assert_eq!(counts.get(MeshGroup::Body), 800);
    assert_eq!(counts.total(), 3000);
}

#[test]
fn sampling_is_deterministic_for_a_seed() {
    let sampler = SurfaceSampler::default();
    let a = sampler.sample(&groups(), &ParticleCounts::default(), &mut rng());
    let b = sampler.sample(&groups(), &ParticleCounts::default(), &mut rng());
    assert_eq!(a, b);

    let c = sampler.sample(&groups(), &ParticleCounts::default(), &mut StdRng::seed_from_u64(7));
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn buffer_bytes_are_packed_floats() {
    let buffer = SurfaceSampler::default().sample(&groups(), &counts(3, 0, 0, 0), &mut rng());
    let bytes = buffer.as_bytes();
    assert_eq!(bytes.len(), 3 * 12);

    let first: &[f32] = bytemuck::cast_slice(&bytes[..12]);
    assert_eq!(first, &buffer.positions()[0].to_array());
}

// ============================================================================
// BoundingBox
// ============================================================================

#[test]
fn bounds_of_nothing_is_the_unit_box() {
    let bounds = BoundingBox::from_points(&[]);
    assert_eq!(bounds.min, Vec3::ZERO);
    assert_eq!(bounds.max, Vec3::ONE);
    assert_eq!(bounds.size(), Vec3::ONE);
    assert_eq!(bounds.center(), Vec3::splat(0.5));
}

#[test]
fn bounds_contain_every_point() {
    let points = SurfaceSampler::default()
        .sample(&groups(), &ParticleCounts::default(), &mut rng())
        .positions()
        .to_vec();
    let bounds = BoundingBox::from_points(&points);

    assert!(bounds.min.cmple(bounds.max).all());
    assert!(points.iter().all(|&p| bounds.contains(p)));
    assert!((bounds.size() - (bounds.max - bounds.min)).length() < 1e-6);
}

#[test]
fn bounds_of_one_point_are_degenerate() {
    let p = Vec3::new(1.0, -2.0, 3.0);
    let bounds = BoundingBox::from_points(&[p]);
    assert_eq!(bounds.min, p);
    assert_eq!(bounds.max, p);
    assert_eq!(bounds.size(), Vec3::ZERO);
}
