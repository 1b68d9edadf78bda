/// On-demand redraw bookkeeping.
///
/// Every mutating call in the crate reports whether it changed something
/// visible. The host feeds those answers here and renders a frame only when
/// the flag is set.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    dirty: bool,
    frames_requested: u64,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally requests a frame (resize, first mount).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Requests a frame if `changed`. Returns `changed` so calls can be chained.
    pub fn request(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }

    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consumes the pending request. Returns whether a frame should be rendered.
    pub fn take_redraw(&mut self) -> bool {
        let dirty = std::mem::take(&mut self.dirty);
        if dirty {
            self.frames_requested += 1;
        }
        dirty
    }

    /// Frames rendered through [`take_redraw`](Self::take_redraw) so far.
    #[inline]
    #[must_use]
    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }
}
