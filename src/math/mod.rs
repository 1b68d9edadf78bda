//! Math Module
//!
//! Curve evaluation shared by the path animator and the camera rig:
//!
//! - [`ControlPath`]: Catmull-Rom path through fixed control points, queried
//!   by normalized arc length
//! - [`CurveType`]: centripetal, chordal or uniform (tensioned) knot spacing
//!
//! Everything else builds on [`glam`] directly.

pub mod curve;

pub use curve::{ControlPath, CurveType};
