//! Reveal ramps
//!
//! Two independent timelines react to the reveal toggle:
//! - [`RevealRamp`]: the scalar handed to the particle shader
//! - [`MaterialFade`]: the body material dissolving into emission
//!
//! Both retarget from their current value, so flipping the toggle mid-ramp
//! never jumps. Requesting the state that is already targeted does nothing.

use crate::animation::easing::Easing;
use crate::animation::tween::Tween;
use crate::resources::material::{FadeMaterial, MaterialFlags};
use crate::settings::RevealSettings;

/// Particle reveal scalar in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct RevealRamp {
    value: f32,
    target: bool,
    tween: Option<Tween>,
    duration: f32,
    show_easing: Easing,
    hide_easing: Easing,
}

impl RevealRamp {
    #[must_use]
    pub fn new(settings: &RevealSettings) -> Self {
        Self {
            value: 0.0,
            target: false,
            tween: None,
            duration: settings.duration,
            show_easing: settings.show_easing,
            hide_easing: settings.hide_easing,
        }
    }

    /// Targets revealed (`true`) or hidden. Returns whether a new ramp started.
    pub fn request(&mut self, on: bool) -> bool {
        if on == self.target {
            return false;
        }
        self.target = on;
        let (end, easing) = if on {
            (1.0, self.show_easing)
        } else {
            (0.0, self.hide_easing)
        };
        self.tween = Some(Tween::new(self.value, end, self.duration, easing));
        true
    }

    /// Advances the ramp. Returns whether the value changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let previous = self.value;
        self.value = tween.advance(dt);
        if tween.is_finished() {
            self.tween = None;
        }
        self.value != previous
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> bool {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

/// Cross-fade of the body material between solid and dissolved.
///
/// Starting a fade-out switches the material to hashed transparency and sets
/// the emissive color. The blend flags are cleared only once a fade-in has
/// completed at full opacity.
#[derive(Debug, Clone)]
pub struct MaterialFade {
    target: bool,
    opacity: Option<Tween>,
    emissive: Option<Tween>,
    duration: f32,
    easing: Easing,
    emissive_intensity: f32,
    emissive_color: glam::Vec3,
}

impl MaterialFade {
    #[must_use]
    pub fn new(settings: &RevealSettings) -> Self {
        Self {
            target: false,
            opacity: None,
            emissive: None,
            duration: settings.fade_duration,
            easing: settings.fade_easing,
            emissive_intensity: settings.emissive_intensity,
            emissive_color: settings.emissive_color,
        }
    }

    /// Starts fading `material` out (`true`) or back in. Returns whether a fade started.
    pub fn request(&mut self, dissolve: bool, material: &mut FadeMaterial) -> bool {
        if dissolve == self.target {
            return false;
        }
        self.target = dissolve;

        let (opacity, intensity) = if dissolve {
            material.set_flags(MaterialFlags::TRANSPARENT | MaterialFlags::ALPHA_HASH, true);
            material.emissive = self.emissive_color;
            (0.0, self.emissive_intensity)
        } else {
            (1.0, 0.0)
        };

        self.opacity = Some(Tween::new(material.opacity, opacity, self.duration, self.easing));
        self.emissive = Some(Tween::new(
            material.emissive_intensity,
            intensity,
            self.duration,
            self.easing,
        ));
        true
    }

    /// Advances the fade and writes it into `material`. Returns whether anything changed.
    pub fn tick(&mut self, dt: f32, material: &mut FadeMaterial) -> bool {
        let mut changed = false;

        if let Some(tween) = self.opacity.as_mut() {
            let value = tween.advance(dt);
            changed |= material.opacity != value;
            material.opacity = value;
            if tween.is_finished() {
                self.opacity = None;
                if !self.target && material.opacity >= 1.0 {
                    material.set_flags(MaterialFlags::TRANSPARENT | MaterialFlags::ALPHA_HASH, false);
                    changed = true;
                }
            }
        }

        if let Some(tween) = self.emissive.as_mut() {
            let value = tween.advance(dt);
            changed |= material.emissive_intensity != value;
            material.emissive_intensity = value;
            if tween.is_finished() {
                self.emissive = None;
            }
        }

        changed
    }

    pub fn cancel(&mut self) {
        self.opacity = None;
        self.emissive = None;
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> bool {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity.is_some() || self.emissive.is_some()
    }
}
