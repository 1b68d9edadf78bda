use crate::animation::easing::Easing;

/// Value of an eased ramp from `start` to `end` after `elapsed` seconds.
///
/// A non-positive `duration` jumps straight to `end`.
#[must_use]
pub fn interpolate(start: f32, end: f32, duration: f32, easing: Easing, elapsed: f32) -> f32 {
    if duration <= 0.0 || elapsed >= duration {
        return end;
    }
    let t = easing.apply(elapsed.max(0.0) / duration);
    start + (end - start) * t
}

/// A scalar ramp advanced by elapsed time.
///
/// Tweens own nothing but numbers, so dropping one mid-flight is always safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    #[must_use]
    pub fn new(start: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Jumps to `elapsed` seconds (clamped to the duration).
    pub fn seek(&mut self, elapsed: f32) -> f32 {
        self.elapsed = elapsed.clamp(0.0, self.duration);
        self.value()
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        interpolate(self.start, self.end, self.duration, self.easing, self.elapsed)
    }

    /// Linear time fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    #[must_use]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}
