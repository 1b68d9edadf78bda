//! Showcase Settings
//!
//! Every tunable constant of the showcase, grouped by the subsystem that
//! consumes it. All sections default to the tuned values, and every field is
//! optional in JSON, so a settings file only needs to name what it changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scooter_reveal::settings::ShowcaseSettings;
//!
//! // Defaults
//! let settings = ShowcaseSettings::default();
//!
//! // Partial override from JSON
//! let settings = ShowcaseSettings::from_json_str(r#"{ "entry": { "duration": 6.0 } }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;
use crate::errors::Result;
use crate::math::{ControlPath, CurveType};
use crate::scene::MeshGroup;

/// Root settings object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSettings {
    pub paths: PathSettings,
    pub entry: EntrySettings,
    pub camera: CameraSettings,
    pub reveal: RevealSettings,
    pub particles: ParticleSettings,
}

impl ShowcaseSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Loads `path`, falling back to defaults (with a warning) if it cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Settings load error for {}: {err}. Falling back to defaults.", path.display());
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// Control points of the three curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Open path flown by the vehicle during the intro.
    pub entry: Vec<Vec3>,
    /// Closed loop the camera follows while scrolling.
    pub camera: Vec<Vec3>,
    /// Closed loop the camera looks at while scrolling.
    pub target: Vec<Vec3>,
    pub curve_type: CurveType,
}

impl PathSettings {
    pub fn entry_path(&self) -> Result<ControlPath> {
        ControlPath::new(self.entry.clone(), false, self.curve_type)
    }

    pub fn camera_path(&self) -> Result<ControlPath> {
        ControlPath::new(self.camera.clone(), true, self.curve_type)
    }

    pub fn target_path(&self) -> Result<ControlPath> {
        ControlPath::new(self.target.clone(), true, self.curve_type)
    }
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            entry: vec![
                Vec3::new(5.0, 0.0, -6.0),
                Vec3::new(-2.0, 0.0, -2.08),
                Vec3::new(-1.03, 0.0, -1.01),
                Vec3::new(0.33, 0.0, -2.11),
                Vec3::new(1.13, 0.0, -1.28),
                Vec3::new(0.0, 0.0, 0.0),
            ],
            camera: vec![
                Vec3::new(0.0, 0.5, 1.5),
                Vec3::new(-0.0, 0.94, 0.71),
                Vec3::new(1.14, 0.62, 0.18),
                Vec3::new(0.91, 0.08, -0.94),
                Vec3::new(-0.47, 0.53, -1.05),
                Vec3::new(-0.94, 0.48, 0.08),
                Vec3::new(-0.65, 0.27, 0.64),
            ],
            target: vec![
                Vec3::new(0.0, 0.3, 0.0),
                Vec3::new(0.01, 0.35, -0.04),
                Vec3::new(0.14, 0.28, -0.16),
                Vec3::new(0.14, 0.27, -0.16),
                Vec3::new(0.13, 0.28, -0.15),
                Vec3::new(0.13, 0.28, -0.15),
                Vec3::new(0.12, 0.35, -0.16),
            ],
            curve_type: CurveType::Centripetal,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry flight
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrySettings {
    /// Seconds from mount to the end of the entry path.
    pub duration: f32,
    pub easing: Easing,
    /// How far back along the path (normalized) the body looks. 0 disables the lag.
    pub look_back_distance: f32,
    /// Lag directions shorter than this keep the previous body facing.
    pub body_lag_epsilon: f32,
    /// Effective rolling radius of both wheels, in scene units.
    pub wheel_radius: f32,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            duration: 10.0,
            easing: Easing::CubicOut,
            look_back_distance: 0.03,
            body_lag_epsilon: 0.001,
            wheel_radius: 0.111_663 / 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub initial_position: Vec3,
    pub initial_look_at: Vec3,
    /// Damping smooth time in seconds.
    pub smooth_time: f32,
    /// Per-component gap under which damping stops.
    pub tolerance: f32,
    /// Seconds between the intro finishing and scroll input being honoured.
    pub scroll_grace_delay: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 0.5, 1.5),
            initial_look_at: Vec3::new(0.0, 0.3, 0.0),
            smooth_time: 0.2,
            tolerance: 1e-6,
            scroll_grace_delay: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Seconds for the particle reveal scalar to ramp either way.
    pub duration: f32,
    /// Easing toward fully revealed.
    pub show_easing: Easing,
    /// Easing back toward hidden.
    pub hide_easing: Easing,
    /// Seconds for the body material cross-fade.
    pub fade_duration: f32,
    pub fade_easing: Easing,
    /// Emissive intensity reached while the body is dissolved.
    pub emissive_intensity: f32,
    /// Emissive color applied when a fade-out starts.
    pub emissive_color: Vec3,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            duration: 4.0,
            show_easing: Easing::CubicOut,
            hide_easing: Easing::CubicInOut,
            fade_duration: 3.0,
            fade_easing: Easing::CubicInOut,
            emissive_intensity: 5.0,
            emissive_color: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Particles
// ---------------------------------------------------------------------------

/// Particles requested per mesh group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleCounts {
    pub steer: usize,
    pub wheels_front: usize,
    pub wheels_rear: usize,
    pub body: usize,
}

impl ParticleCounts {
    #[must_use]
    pub fn get(&self, group: MeshGroup) -> usize {
        match group {
            MeshGroup::Steer => self.steer,
            MeshGroup::FrontWheel => self.wheels_front,
            MeshGroup::RearWheel => self.wheels_rear,
            MeshGroup::Body => self.body,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.steer + self.wheels_front + self.wheels_rear + self.body
    }
}

impl Default for ParticleCounts {
    fn default() -> Self {
        Self {
            steer: 1500,
            wheels_front: 500,
            wheels_rear: 200,
            body: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub counts: ParticleCounts,
    /// Maximum per-axis offset added to each sampled point.
    pub jitter: f32,
    /// Seed for the sampling generator.
    pub seed: u64,

    pub point_size: f32,
    pub color: Vec3,
    pub time_speed: f32,
    pub sway_amplitude: f32,
    pub noise_scale: f32,
    pub mouse_sway_amplitude: f32,
    pub mouse_threshold: f32,
    pub mouse_noise_scale: f32,

    /// Smooth time of the pointer's world position.
    pub mouse_smooth_time: f32,
    /// Center of the invisible pointer-capture plane (facing +Z).
    pub pointer_plane_center: Vec3,
    /// Edge length of the pointer-capture plane.
    pub pointer_plane_size: f32,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            counts: ParticleCounts::default(),
            jitter: 0.01,
            seed: 0x5C00_7E2,

            point_size: 10.0,
            color: Vec3::new(15.0 / 255.0, 1.0, 0.0),
            time_speed: 1.0,
            sway_amplitude: 0.05,
            noise_scale: 2.0,
            mouse_sway_amplitude: 2.0,
            mouse_threshold: 0.2,
            mouse_noise_scale: 10.0,

            mouse_smooth_time: 0.1,
            pointer_plane_center: Vec3::new(0.0, 1.0, 0.0),
            pointer_plane_size: 5.0,
        }
    }
}
