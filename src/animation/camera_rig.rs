//! Camera Rig
//!
//! Maps main-track scroll progress onto two closed loops (camera position and
//! look-at target) and damps the current pose toward that goal every frame.
//! The rig stays inert until the intro hands over a snapshot of the camera.

use glam::Vec3;

use crate::animation::damp::damp3;
use crate::errors::Result;
use crate::math::ControlPath;
use crate::settings::{CameraSettings, PathSettings};

/// A camera position and the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    #[must_use]
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Largest per-component gap between two poses.
    #[must_use]
    pub fn max_difference(&self, other: &CameraPose) -> f32 {
        let dp = (self.position - other.position).abs().max_element();
        let dl = (self.look_at - other.look_at).abs().max_element();
        dp.max(dl)
    }

    /// Euclidean distance over both vectors.
    #[must_use]
    pub fn distance(&self, other: &CameraPose) -> f32 {
        let dp = self.position.distance_squared(other.position);
        let dl = self.look_at.distance_squared(other.look_at);
        (dp + dl).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    camera_path: ControlPath,
    target_path: ControlPath,

    goal: CameraPose,
    current: CameraPose,
    active: bool,

    smooth_time: f32,
    tolerance: f32,
}

impl CameraRig {
    #[must_use]
    pub fn new(camera_path: ControlPath, target_path: ControlPath, settings: &CameraSettings) -> Self {
        let initial = CameraPose::new(settings.initial_position, settings.initial_look_at);
        Self {
            camera_path,
            target_path,
            goal: initial,
            current: initial,
            active: false,
            smooth_time: settings.smooth_time,
            tolerance: settings.tolerance,
        }
    }

    pub fn from_settings(paths: &PathSettings, camera: &CameraSettings) -> Result<Self> {
        Ok(Self::new(paths.camera_path()?, paths.target_path()?, camera))
    }

    /// Seeds both the current pose and the goal, then starts responding to input.
    pub fn activate(&mut self, snapshot: CameraPose) {
        self.current = snapshot;
        self.goal = snapshot;
        self.active = true;
        log::debug!("Camera rig active at {:?}", snapshot.position);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Retargets the goal from scroll `progress`. Returns whether the goal moved.
    ///
    /// Ignored while inactive.
    pub fn on_scroll(&mut self, progress: f32) -> bool {
        if !self.active {
            return false;
        }
        let goal = self.goal_at(progress);
        let moved = goal != self.goal;
        self.goal = goal;
        moved
    }

    /// Goal pose for `progress` on the closed loops.
    #[must_use]
    pub fn goal_at(&self, progress: f32) -> CameraPose {
        CameraPose::new(self.camera_path.point_at(progress), self.target_path.point_at(progress))
    }

    /// Damps the current pose toward the goal. Returns whether it moved.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        let position = damp3(
            &mut self.current.position,
            self.goal.position,
            self.smooth_time,
            dt,
            self.tolerance,
        );
        let look_at = damp3(
            &mut self.current.look_at,
            self.goal.look_at,
            self.smooth_time,
            dt,
            self.tolerance,
        );
        position || look_at
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> CameraPose {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn goal(&self) -> CameraPose {
        self.goal
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn camera_path(&self) -> &ControlPath {
        &self.camera_path
    }

    #[inline]
    #[must_use]
    pub fn target_path(&self) -> &ControlPath {
        &self.target_path
    }
}
