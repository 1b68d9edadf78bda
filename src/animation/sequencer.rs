//! Animation Sequencer
//!
//! Owns the showcase timeline and every piece of animation state:
//!
//! ```text
//! Idle ──mount──▶ EntryRunning ──progress = 1──▶ EntryComplete ──grace──▶ ScrollArmed
//!                                                                          │
//!                                                        RevealOff ◀──────▶ RevealOn
//! ```
//!
//! The sequencer never touches the scene directly. Each [`tick`](Sequencer::tick)
//! returns a [`TickReport`] carrying the redraw flag and the events raised
//! during the tick; the host applies [`Sequencer::vehicle_frame`] and
//! [`Sequencer::camera_pose`] to its own objects.

use smallvec::SmallVec;

use crate::animation::camera_rig::{CameraPose, CameraRig};
use crate::animation::easing::Easing;
use crate::animation::path_animator::{BodyAttachment, PathAnimator, VehicleFrame};
use crate::animation::reveal::{MaterialFade, RevealRamp};
use crate::animation::tween::Tween;
use crate::app::scroll::{ScrollInput, ScrollRegion};
use crate::errors::Result;
use crate::resources::material::FadeMaterial;
use crate::settings::ShowcaseSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    EntryRunning,
    EntryComplete,
    ScrollArmed,
    /// Torn down by [`Sequencer::abort`]; terminal.
    Aborted,
}

/// Signals raised for the page and visual-effect collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The entry flight finished. Raised exactly once.
    IntroCompleted,
    /// Scroll input is now honoured.
    ScrollArmed,
    /// The reveal target flipped.
    RevealChanged(bool),
}

/// Outcome of one [`Sequencer::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Something visible changed.
    pub redraw: bool,
    /// The vehicle frame was recomputed and should be written to the scene.
    pub vehicle_moved: bool,
    pub events: SmallVec<[SequencerEvent; 4]>,
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    state: SequencerState,

    entry: Option<Tween>,
    entry_duration: f32,
    entry_easing: Easing,
    entry_progress: f32,
    intro_completed: bool,

    grace_delay: f32,
    grace_remaining: f32,

    animator: PathAnimator,
    frame: VehicleFrame,

    intro_camera: CameraPose,
    camera: CameraRig,

    scroll: ScrollInput,

    reveal: RevealRamp,
    fade: MaterialFade,
    material: FadeMaterial,
}

impl Sequencer {
    pub fn new(settings: &ShowcaseSettings) -> Result<Self> {
        let mut animator = PathAnimator::new(settings.paths.entry_path()?, &settings.entry);
        let frame = animator.update(0.0);
        let camera = CameraRig::from_settings(&settings.paths, &settings.camera)?;

        Ok(Self {
            state: SequencerState::Idle,

            entry: None,
            entry_duration: settings.entry.duration,
            entry_easing: settings.entry.easing,
            entry_progress: 0.0,
            intro_completed: false,

            grace_delay: settings.camera.scroll_grace_delay.max(0.0),
            grace_remaining: 0.0,

            animator,
            frame,

            intro_camera: CameraPose::new(
                settings.camera.initial_position,
                settings.camera.initial_look_at,
            ),
            camera,

            scroll: ScrollInput::new(),

            reveal: RevealRamp::new(&settings.reveal),
            fade: MaterialFade::new(&settings.reveal),
            material: FadeMaterial::opaque(),
        })
    }

    /// Uses the body's rest attachment captured by a resolved vehicle rig.
    #[must_use]
    pub fn with_body_attachment(mut self, attachment: BodyAttachment) -> Self {
        self.animator = self.animator.with_attachment(attachment);
        self.frame = self.animator.update(self.entry_progress);
        self
    }

    /// Starts the entry flight. Only the first call has an effect.
    pub fn mount(&mut self) -> bool {
        if self.state != SequencerState::Idle {
            return false;
        }
        self.state = SequencerState::EntryRunning;
        self.entry = Some(Tween::new(0.0, 1.0, self.entry_duration, self.entry_easing));
        self.frame = self.animator.update(0.0);
        log::info!("Entry flight started ({:.1}s)", self.entry_duration);
        true
    }

    /// Records scroll progress for `region`. Consumed on the next armed tick.
    pub fn push_scroll(&mut self, region: ScrollRegion, progress: f32) {
        if self.state == SequencerState::Aborted {
            return;
        }
        self.scroll.push(region, progress);
    }

    /// Advances every timeline by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();
        let dt = dt.max(0.0);

        match self.state {
            SequencerState::Idle | SequencerState::Aborted => return report,
            SequencerState::EntryRunning => self.tick_entry(dt, &mut report),
            SequencerState::EntryComplete => self.tick_grace(dt, &mut report),
            SequencerState::ScrollArmed => {}
        }

        if self.state == SequencerState::ScrollArmed {
            self.apply_scroll(&mut report);
        }

        report.redraw |= self.camera.tick(dt);
        report.redraw |= self.reveal.tick(dt);
        report.redraw |= self.fade.tick(dt, &mut self.material);
        report
    }

    fn tick_entry(&mut self, dt: f32, report: &mut TickReport) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        self.entry_progress = entry.advance(dt);
        let finished = entry.is_finished();

        self.frame = self.animator.update(self.entry_progress);
        report.redraw = true;
        report.vehicle_moved = true;

        if finished {
            self.entry = None;
            self.complete_intro(report);
        }
    }

    fn complete_intro(&mut self, report: &mut TickReport) {
        self.state = SequencerState::EntryComplete;
        if !self.intro_completed {
            self.intro_completed = true;
            report.events.push(SequencerEvent::IntroCompleted);
            log::info!("Intro completed");
        }
        self.camera.activate(self.intro_camera);
        self.grace_remaining = self.grace_delay;
        if self.grace_remaining <= 0.0 {
            self.arm_scroll(report);
        }
    }

    fn tick_grace(&mut self, dt: f32, report: &mut TickReport) {
        self.grace_remaining -= dt;
        if self.grace_remaining <= 0.0 {
            self.arm_scroll(report);
        }
    }

    fn arm_scroll(&mut self, report: &mut TickReport) {
        self.state = SequencerState::ScrollArmed;
        self.grace_remaining = 0.0;
        report.events.push(SequencerEvent::ScrollArmed);
        log::info!("Scroll armed");
    }

    fn apply_scroll(&mut self, report: &mut TickReport) {
        if let Some(progress) = self.scroll.take(ScrollRegion::MainTrack) {
            report.redraw |= self.camera.on_scroll(progress);
        }

        if let Some(progress) = self.scroll.take(ScrollRegion::EndTrack) {
            let on = progress > 0.0;
            if self.reveal.request(on) {
                self.fade.request(on, &mut self.material);
                report.events.push(SequencerEvent::RevealChanged(on));
                report.redraw = true;
                log::info!("Reveal {}", if on { "on" } else { "off" });
            }
        }
    }

    /// Reports where the host camera actually is before the rig takes over.
    ///
    /// The pose is snapshotted into the camera rig when the intro completes.
    /// Ignored once the rig is active or after [`abort`](Self::abort).
    pub fn sync_camera(&mut self, pose: CameraPose) {
        if self.camera.is_active() || self.state == SequencerState::Aborted {
            return;
        }
        self.intro_camera = pose;
    }

    /// Cancels every in-flight tween. Later ticks do nothing.
    pub fn abort(&mut self) {
        if self.state == SequencerState::Aborted {
            return;
        }
        self.entry = None;
        self.reveal.cancel();
        self.fade.cancel();
        self.camera.deactivate();
        self.state = SequencerState::Aborted;
        log::debug!("Sequencer aborted");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn entry_progress(&self) -> f32 {
        self.entry_progress
    }

    #[inline]
    #[must_use]
    pub fn intro_completed(&self) -> bool {
        self.intro_completed
    }

    #[inline]
    #[must_use]
    pub fn vehicle_frame(&self) -> &VehicleFrame {
        &self.frame
    }

    /// The pose the host camera should use this frame.
    ///
    /// Before the intro completes this is the configured initial pose, or the
    /// last pose passed to [`sync_camera`](Self::sync_camera). Afterwards it
    /// is the rig's damped pose.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        if self.camera.is_active() {
            self.camera.current()
        } else {
            self.intro_camera
        }
    }

    #[inline]
    #[must_use]
    pub fn camera_rig(&self) -> &CameraRig {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn reveal_value(&self) -> f32 {
        self.reveal.value()
    }

    #[inline]
    #[must_use]
    pub fn reveal_target(&self) -> bool {
        self.reveal.target()
    }

    #[inline]
    #[must_use]
    pub fn material(&self) -> &FadeMaterial {
        &self.material
    }

    /// Mutable access for the renderer to consume `needs_update`.
    pub fn material_mut(&mut self) -> &mut FadeMaterial {
        &mut self.material
    }
}
