//! Reveal Tests
//!
//! Tests for:
//! - RevealRamp same-target no-ops and eased progress
//! - Continuous retargeting mid-ramp
//! - MaterialFade opacity / emissive targets
//! - Transparency hysteresis and pipeline-change flags
//! - Cancellation

use glam::Vec3;

use scooter_reveal::animation::easing::Easing;
use scooter_reveal::animation::reveal::{MaterialFade, RevealRamp};
use scooter_reveal::resources::material::FadeMaterial;
use scooter_reveal::settings::RevealSettings;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// One extra step so accumulated rounding cannot stop just short of the end.
fn run(ramp: &mut RevealRamp, seconds: f32) {
    let steps = (seconds / 0.05).round() as usize + 1;
    for _ in 0..steps {
        ramp.tick(0.05);
    }
}

fn run_fade(fade: &mut MaterialFade, material: &mut FadeMaterial, seconds: f32) {
    let steps = (seconds / 0.05).round() as usize + 1;
    for _ in 0..steps {
        fade.tick(0.05, material);
    }
}

// ============================================================================
// RevealRamp
// ============================================================================

#[test]
fn ramp_starts_hidden() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    assert_eq!(ramp.value(), 0.0);
    assert!(!ramp.target());
    assert!(!ramp.request(false), "already hidden");
    assert!(!ramp.tick(0.1));
}

#[test]
fn same_target_request_is_a_no_op() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    assert!(ramp.request(true));
    ramp.tick(1.0);
    let mid = ramp.value();

    assert!(!ramp.request(true), "in flight toward the same target");
    assert_eq!(ramp.value(), mid);
    ramp.tick(0.5);
    assert!(ramp.value() > mid, "the original ramp keeps running");

    run(&mut ramp, 4.0);
    assert_eq!(ramp.value(), 1.0);
    assert!(!ramp.request(true), "already reached");
}

#[test]
fn show_ramp_eases_out() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    ramp.request(true);
    ramp.tick(2.0);
    // Cubic ease-out at half time.
    assert!(approx(ramp.value(), Easing::CubicOut.apply(0.5)));
    assert!(approx(ramp.value(), 0.875));

    ramp.tick(2.0);
    assert_eq!(ramp.value(), 1.0);
    assert!(!ramp.is_animating());
}

#[test]
fn opposite_request_mid_ramp_is_continuous() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    ramp.request(true);
    ramp.tick(1.3);
    let at_flip = ramp.value();

    assert!(ramp.request(false));
    assert_eq!(ramp.value(), at_flip);

    ramp.tick(0.001);
    assert!((ramp.value() - at_flip).abs() < 1e-3, "jumped from {at_flip} to {}", ramp.value());
    assert!(ramp.value() <= at_flip);

    run(&mut ramp, 4.0);
    assert_eq!(ramp.value(), 0.0);
}

#[test]
fn hide_ramp_uses_in_out_easing() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    ramp.request(true);
    run(&mut ramp, 4.0);

    ramp.request(false);
    ramp.tick(2.0);
    assert!(approx(ramp.value(), 0.5));
}

#[test]
fn cancel_freezes_the_value() {
    let mut ramp = RevealRamp::new(&RevealSettings::default());
    ramp.request(true);
    ramp.tick(1.0);
    let frozen = ramp.value();

    ramp.cancel();
    assert!(!ramp.tick(1.0));
    assert_eq!(ramp.value(), frozen);
}

// ============================================================================
// MaterialFade
// ============================================================================

#[test]
fn fade_out_dissolves_into_emission() {
    let settings = RevealSettings::default();
    let mut fade = MaterialFade::new(&settings);
    let mut material = FadeMaterial::opaque();

    assert!(fade.request(true, &mut material));
    assert!(material.is_transparent());
    assert!(material.alpha_hash());
    assert_eq!(material.emissive, Vec3::new(0.0, 1.0, 0.0));
    assert!(material.take_needs_update());

    fade.tick(1.5, &mut material);
    assert!(approx(material.opacity, 0.5));
    assert!(approx(material.emissive_intensity, 2.5));

    run_fade(&mut fade, &mut material, 2.0);
    assert_eq!(material.opacity, 0.0);
    assert_eq!(material.emissive_intensity, settings.emissive_intensity);
    assert!(material.is_transparent());
    assert!(!fade.is_animating());
}

#[test]
fn fade_in_clears_flags_only_at_full_opacity() {
    let mut fade = MaterialFade::new(&RevealSettings::default());
    let mut material = FadeMaterial::opaque();
    fade.request(true, &mut material);
    run_fade(&mut fade, &mut material, 3.0);
    material.take_needs_update();
    let version = material.version();

    assert!(fade.request(false, &mut material));
    fade.tick(2.9, &mut material);
    assert!(material.opacity < 1.0);
    assert!(material.is_transparent(), "still blending while fading in");
    assert!(!material.take_needs_update());

    fade.tick(0.2, &mut material);
    assert_eq!(material.opacity, 1.0);
    assert_eq!(material.emissive_intensity, 0.0);
    assert!(!material.is_transparent());
    assert!(!material.alpha_hash());
    assert!(material.take_needs_update());
    assert_eq!(material.version(), version + 1);
}

#[test]
fn interrupted_fade_in_keeps_transparency() {
    let mut fade = MaterialFade::new(&RevealSettings::default());
    let mut material = FadeMaterial::opaque();

    fade.request(true, &mut material);
    fade.tick(1.0, &mut material);
    fade.request(false, &mut material);
    fade.tick(1.0, &mut material);
    let version = material.version();

    fade.request(true, &mut material);
    run_fade(&mut fade, &mut material, 3.0);
    assert!(material.is_transparent());
    assert_eq!(material.version(), version, "flags never toggled off in between");
}

#[test]
fn fade_retarget_starts_from_current_values() {
    let mut fade = MaterialFade::new(&RevealSettings::default());
    let mut material = FadeMaterial::opaque();
    fade.request(true, &mut material);
    fade.tick(1.0, &mut material);
    let (opacity, intensity) = (material.opacity, material.emissive_intensity);

    fade.request(false, &mut material);
    fade.tick(0.0, &mut material);
    assert_eq!(material.opacity, opacity);
    assert_eq!(material.emissive_intensity, intensity);
}

#[test]
fn same_fade_request_is_a_no_op() {
    let mut fade = MaterialFade::new(&RevealSettings::default());
    let mut material = FadeMaterial::opaque();
    assert!(!fade.request(false, &mut material));
    assert!(!material.is_transparent());
    assert!(!fade.tick(0.1, &mut material));

    fade.request(true, &mut material);
    fade.tick(0.5, &mut material);
    let opacity = material.opacity;
    assert!(!fade.request(true, &mut material));
    assert_eq!(material.opacity, opacity);
}
