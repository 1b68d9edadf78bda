//! Camera Rig Tests
//!
//! Tests for:
//! - Inactive rig ignores input and ticks
//! - Activation seeds current and goal
//! - Monotonic convergence and snapping
//! - Frame-rate independent damping
//! - Goals on the closed loops

use glam::Vec3;

use scooter_reveal::animation::camera_rig::{CameraPose, CameraRig};
use scooter_reveal::settings::{CameraSettings, PathSettings};

fn rig() -> CameraRig {
    CameraRig::from_settings(&PathSettings::default(), &CameraSettings::default()).unwrap()
}

fn snapshot() -> CameraPose {
    CameraPose::new(Vec3::new(0.0, 0.5, 1.5), Vec3::new(0.0, 0.3, 0.0))
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn inactive_rig_is_inert() {
    let mut rig = rig();
    let before = rig.current();
    assert!(!rig.is_active());
    assert!(!rig.on_scroll(0.5));
    assert!(!rig.tick(0.016));
    assert_eq!(rig.current(), before);
    assert_eq!(rig.goal(), before);
}

#[test]
fn activation_seeds_current_and_goal() {
    let mut rig = rig();
    let pose = CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
    rig.activate(pose);

    assert!(rig.is_active());
    assert_eq!(rig.current(), pose);
    assert_eq!(rig.goal(), pose);
    assert!(!rig.tick(0.016), "nothing moves until scroll input arrives");
}

#[test]
fn deactivation_freezes_the_pose() {
    let mut rig = rig();
    rig.activate(snapshot());
    rig.on_scroll(0.4);
    rig.tick(0.016);
    let frozen = rig.current();

    rig.deactivate();
    assert!(!rig.tick(0.016));
    assert_eq!(rig.current(), frozen);
}

// ============================================================================
// Goals
// ============================================================================

#[test]
fn goal_comes_from_both_loops() {
    let mut rig = rig();
    rig.activate(snapshot());
    assert!(rig.on_scroll(0.3));

    let goal = rig.goal();
    assert_eq!(goal.position, rig.camera_path().point_at(0.3));
    assert_eq!(goal.look_at, rig.target_path().point_at(0.3));
    assert!(!rig.on_scroll(0.3), "same progress leaves the goal unchanged");
}

#[test]
fn loop_ends_meet() {
    let rig = rig();
    assert_eq!(rig.goal_at(0.0), rig.goal_at(1.0));
}

#[test]
fn scroll_start_matches_the_initial_camera() {
    let rig = rig();
    let start = rig.goal_at(0.0);
    assert!((start.position - snapshot().position).length() < 1e-5);
    assert!((start.look_at - snapshot().look_at).length() < 1e-5);
}

// ============================================================================
// Damping
// ============================================================================

#[test]
fn convergence_is_strictly_monotonic_then_idle() {
    let mut rig = rig();
    rig.activate(snapshot());
    rig.on_scroll(0.5);

    let mut distance = rig.current().distance(&rig.goal());
    let mut ticks = 0;
    while rig.tick(1.0 / 60.0) {
        let next = rig.current().distance(&rig.goal());
        assert!(next < distance, "distance grew at tick {ticks}: {distance} -> {next}");
        distance = next;
        ticks += 1;
        assert!(ticks < 10_000, "rig never settled");
    }

    assert_eq!(rig.current(), rig.goal());
    for _ in 0..10 {
        assert!(!rig.tick(1.0 / 60.0));
    }
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut fast = rig();
    let mut slow = rig();
    for rig in [&mut fast, &mut slow] {
        rig.activate(snapshot());
        rig.on_scroll(0.25);
    }

    for _ in 0..60 {
        fast.tick(1.0 / 120.0);
    }
    for _ in 0..15 {
        slow.tick(1.0 / 30.0);
    }

    assert!(fast.current().max_difference(&slow.current()) < 1e-4);
}

#[test]
fn goal_change_mid_flight_retargets() {
    let mut rig = rig();
    rig.activate(snapshot());
    rig.on_scroll(0.5);
    for _ in 0..5 {
        rig.tick(1.0 / 60.0);
    }
    rig.on_scroll(0.1);

    let mut distance = rig.current().distance(&rig.goal());
    for _ in 0..20 {
        rig.tick(1.0 / 60.0);
        let next = rig.current().distance(&rig.goal());
        assert!(next < distance);
        distance = next;
    }
}

#[test]
fn zero_dt_does_not_move() {
    let mut rig = rig();
    rig.activate(snapshot());
    rig.on_scroll(0.5);
    let before = rig.current();
    assert!(!rig.tick(0.0));
    assert_eq!(rig.current(), before);
}
