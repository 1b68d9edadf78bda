//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`ScooterError`] covers the few failure modes the core
//! treats as fatal:
//! - Curves built from too few control points
//! - Settings files that cannot be read or parsed
//! - Scene nodes that a rig requires but the loaded scene lacks
//!
//! Recoverable conditions (a mesh group that is missing or has no area, a
//! camera tick before the intro finished) are logged and skipped instead.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, ScooterError>`.
//!
//! ```rust,ignore
//! use scooter_reveal::errors::Result;
//! use scooter_reveal::math::ControlPath;
//!
//! fn build() -> Result<ControlPath> {
//!     ControlPath::open(vec![glam::Vec3::ZERO, glam::Vec3::X])
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum ScooterError {
    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// A control path needs at least two points to interpolate between.
    #[error("Invalid control path: expected at least 2 control points, got {count}")]
    InvalidPath {
        /// Number of control points that were supplied
        count: usize,
    },

    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// A node required by a rig was not found in the scene.
    #[error("Scene node not found: {0}")]
    MissingNode(String),

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// File I/O error while reading settings.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Alias for `Result<T, ScooterError>`.
pub type Result<T> = std::result::Result<T, ScooterError>;
