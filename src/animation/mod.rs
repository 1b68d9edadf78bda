//! Animation System
//!
//! Everything that moves over time, leaves first:
//!
//! - [`easing`], [`tween`], [`damp`]: interpolation primitives
//! - [`PathAnimator`]: vehicle pose, lagging body and wheel spin from entry progress
//! - [`CameraRig`]: scroll-keyed camera goal with damped follow
//! - [`RevealRamp`] / [`MaterialFade`]: the two reveal timelines
//! - [`Sequencer`]: the showcase timeline tying them together
//!
//! # Example
//!
//! ```rust,ignore
//! use scooter_reveal::animation::Sequencer;
//! use scooter_reveal::app::ScrollRegion;
//!
//! let mut sequencer = Sequencer::new(&settings)?;
//! sequencer.mount();
//!
//! // every frame
//! sequencer.push_scroll(ScrollRegion::MainTrack, progress);
//! let report = sequencer.tick(dt);
//! if report.vehicle_moved {
//!     rig.apply(&mut scene, sequencer.vehicle_frame());
//! }
//! ```

pub mod camera_rig;
pub mod damp;
pub mod easing;
pub mod path_animator;
pub mod reveal;
pub mod sequencer;
pub mod tween;

pub use camera_rig::{CameraPose, CameraRig};
pub use easing::Easing;
pub use path_animator::{BodyAttachment, PathAnimator, Pose, VehicleFrame, VehicleRig};
pub use reveal::{MaterialFade, RevealRamp};
pub use sequencer::{Sequencer, SequencerEvent, SequencerState, TickReport};
pub use tween::Tween;
