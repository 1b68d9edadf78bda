//! Settings Tests
//!
//! Tests for:
//! - Default values of every section
//! - Partial JSON overrides
//! - Serde names of curve types and easings
//! - Error mapping for malformed JSON, missing files and invalid paths

use glam::Vec3;

use scooter_reveal::animation::easing::Easing;
use scooter_reveal::animation::sequencer::Sequencer;
use scooter_reveal::errors::ScooterError;
use scooter_reveal::math::CurveType;
use scooter_reveal::settings::ShowcaseSettings;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn defaults_carry_the_tuned_values() {
    let s = ShowcaseSettings::default();

    assert_eq!(s.paths.entry.len(), 6);
    assert_eq!(s.paths.camera.len(), 7);
    assert_eq!(s.paths.target.len(), 7);
    assert_eq!(s.paths.curve_type, CurveType::Centripetal);

    assert_eq!(s.entry.duration, 10.0);
    assert_eq!(s.entry.easing, Easing::CubicOut);
    assert_eq!(s.entry.look_back_distance, 0.03);
    assert_eq!(s.entry.body_lag_epsilon, 0.001);
    assert!((s.entry.wheel_radius - 0.055_831_5).abs() < 1e-7);

    assert_eq!(s.camera.smooth_time, 0.2);
    assert_eq!(s.camera.tolerance, 1e-6);
    assert_eq!(s.camera.scroll_grace_delay, 0.5);

    assert_eq!(s.reveal.duration, 4.0);
    assert_eq!(s.reveal.fade_duration, 3.0);
    assert_eq!(s.reveal.emissive_intensity, 5.0);

    assert_eq!(s.particles.jitter, 0.01);
    assert_eq!(s.particles.point_size, 10.0);
    assert_eq!(s.particles.mouse_smooth_time, 0.1);
    assert_eq!(s.particles.pointer_plane_center, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(s.particles.pointer_plane_size, 5.0);
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn empty_object_is_all_defaults() {
    let s = ShowcaseSettings::from_json_str("{}").unwrap();
    assert_eq!(s, ShowcaseSettings::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let s = ShowcaseSettings::from_json_str(
        r#"{
            "entry": { "duration": 6.0, "easing": "cubic_in_out" },
            "particles": { "counts": { "steer": 10 } }
        }"#,
    )
    .unwrap();

    assert_eq!(s.entry.duration, 6.0);
    assert_eq!(s.entry.easing, Easing::CubicInOut);
    assert_eq!(s.entry.look_back_distance, 0.03);
    assert_eq!(s.particles.counts.steer, 10);
    assert_eq!(s.particles.counts.body, 800);
    assert_eq!(s.camera, ShowcaseSettings::default().camera);
}

#[test]
fn curve_types_use_snake_case() {
    let s = ShowcaseSettings::from_json_str(r#"{ "paths": { "curve_type": "chordal" } }"#).unwrap();
    assert_eq!(s.paths.curve_type, CurveType::Chordal);

    let s = ShowcaseSettings::from_json_str(r#"{ "paths": { "curve_type": { "uniform": { "tension": 0.3 } } } }"#)
        .unwrap();
    assert_eq!(s.paths.curve_type, CurveType::Uniform { tension: 0.3 });
}

#[test]
fn control_points_are_arrays() {
    let s = ShowcaseSettings::from_json_str(r#"{ "paths": { "entry": [[0, 0, 0], [1, 2, 3]] } }"#).unwrap();
    assert_eq!(s.paths.entry, vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)]);
    assert!(s.paths.entry_path().is_ok());
}

#[test]
fn malformed_json_is_a_settings_error() {
    let err = ShowcaseSettings::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ScooterError::Settings(_)));

    let err = ShowcaseSettings::from_json_str(r#"{ "entry": { "duration": "long" } }"#).unwrap_err();
    assert!(matches!(err, ScooterError::Settings(_)));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn missing_file_is_an_io_error() {
    let err = ShowcaseSettings::load("/definitely/not/here/settings.json").unwrap_err();
    assert!(matches!(err, ScooterError::Io(_)));
    assert_eq!(
        ShowcaseSettings::load_or_default("/definitely/not/here/settings.json"),
        ShowcaseSettings::default()
    );
}

#[test]
fn load_reads_a_file() {
    let path = std::env::temp_dir().join(format!("scooter_settings_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "reveal": { "duration": 2.5 } }"#).unwrap();

    let s = ShowcaseSettings::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(s.reveal.duration, 2.5);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn single_point_path_fails_to_build_a_sequencer() {
    let s = ShowcaseSettings::from_json_str(r#"{ "paths": { "camera": [[0, 0, 0]] } }"#).unwrap();
    let err = Sequencer::new(&s).unwrap_err();
    assert!(matches!(err, ScooterError::InvalidPath { count: 1 }));
}
