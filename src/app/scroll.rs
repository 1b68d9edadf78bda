use serde::{Deserialize, Serialize};

/// The two scroll-driven regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRegion {
    /// Drives the camera loop.
    MainTrack,
    /// Toggles the reveal once its progress leaves zero.
    EndTrack,
}

/// Most-recent-wins mailbox of scroll progress per region.
///
/// Producers push as often as scroll events arrive; the consumer takes at
/// most one value per region per frame and never sees stale ones.
#[derive(Debug, Clone, Default)]
pub struct ScrollInput {
    main_track: Option<f32>,
    end_track: Option<f32>,
}

impl ScrollInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `progress` (clamped to `[0, 1]`), replacing any unread value.
    pub fn push(&mut self, region: ScrollRegion, progress: f32) {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            log::warn!("Ignoring non-finite scroll progress for {region:?}");
            return;
        };
        *self.slot_mut(region) = Some(progress);
    }

    /// Takes the latest unread value for `region`.
    pub fn take(&mut self, region: ScrollRegion) -> Option<f32> {
        self.slot_mut(region).take()
    }

    #[must_use]
    pub fn peek(&self, region: ScrollRegion) -> Option<f32> {
        match region {
            ScrollRegion::MainTrack => self.main_track,
            ScrollRegion::EndTrack => self.end_track,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_track.is_none() && self.end_track.is_none()
    }

    fn slot_mut(&mut self, region: ScrollRegion) -> &mut Option<f32> {
        match region {
            ScrollRegion::MainTrack => &mut self.main_track,
            ScrollRegion::EndTrack => &mut self.end_track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_value_wins() {
        let mut input = ScrollInput::new();
        input.push(ScrollRegion::MainTrack, 0.2);
        input.push(ScrollRegion::MainTrack, 0.7);
        assert_eq!(input.take(ScrollRegion::MainTrack), Some(0.7));
        assert_eq!(input.take(ScrollRegion::MainTrack), None);
    }

    #[test]
    fn regions_are_independent() {
        let mut input = ScrollInput::new();
        input.push(ScrollRegion::EndTrack, 1.5);
        assert_eq!(input.peek(ScrollRegion::MainTrack), None);
        assert_eq!(input.take(ScrollRegion::EndTrack), Some(1.0));
        assert!(input.is_empty());
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let mut input = ScrollInput::new();
        input.push(ScrollRegion::MainTrack, 0.3);
        input.push(ScrollRegion::MainTrack, f32::NAN);
        assert_eq!(input.take(ScrollRegion::MainTrack), Some(0.3));
    }
}
