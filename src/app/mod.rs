//! Host-side plumbing
//!
//! Pieces a host loop needs around the animation core:
//! - [`FrameClock`]: wall-clock frame deltas
//! - [`FrameScheduler`]: dirty-flag redraw requests
//! - [`ScrollInput`]: most-recent-wins scroll mailboxes

pub mod clock;
pub mod scheduler;
pub mod scroll;

pub use clock::FrameClock;
pub use scheduler::FrameScheduler;
pub use scroll::{ScrollInput, ScrollRegion};
