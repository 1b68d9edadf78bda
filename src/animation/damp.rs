//! Frame-rate independent exponential damping.
//!
//! `current` approaches `target` with retention `exp(-2·dt / smooth_time)`,
//! so one step of `2·dt` equals two steps of `dt`. There is no velocity
//! term: the approach is monotonic and never overshoots. Once the remaining
//! gap is within `eps` the value snaps onto the target and the call reports
//! no change, which lets on-demand renderers stop requesting frames.

use glam::Vec3;

/// Smallest accepted smoothing time, in seconds.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Fraction of the remaining gap left after `dt` seconds.
#[inline]
#[must_use]
pub fn retention(smooth_time: f32, dt: f32) -> f32 {
    let omega = 2.0 / smooth_time.max(MIN_SMOOTH_TIME);
    (-omega * dt.max(0.0)).exp()
}

/// Damps a scalar toward `target`. Returns whether the value moved.
pub fn damp(current: &mut f32, target: f32, smooth_time: f32, dt: f32, eps: f32) -> bool {
    if (*current - target).abs() <= eps {
        *current = target;
        return false;
    }
    if dt <= 0.0 {
        return false;
    }
    *current = target + (*current - target) * retention(smooth_time, dt);
    true
}

/// Component-wise [`damp`] on a `Vec3`. Returns whether any component moved.
pub fn damp3(current: &mut Vec3, target: Vec3, smooth_time: f32, dt: f32, eps: f32) -> bool {
    let x = damp(&mut current.x, target.x, smooth_time, dt, eps);
    let y = damp(&mut current.y, target.y, smooth_time, dt, eps);
    let z = damp(&mut current.z, target.z, smooth_time, dt, eps);
    x || y || z
}
