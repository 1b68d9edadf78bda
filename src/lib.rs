#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod app;
pub mod errors;
pub mod math;
pub mod particles;
pub mod resources;
pub mod scene;
pub mod settings;

pub use animation::{CameraPose, CameraRig, PathAnimator, Sequencer, SequencerEvent, VehicleFrame, VehicleRig};
pub use app::{FrameClock, FrameScheduler, ScrollInput, ScrollRegion};
pub use errors::{Result, ScooterError};
pub use math::{ControlPath, CurveType};
pub use particles::{ParticleBuffer, ParticleField, SurfaceSampler};
pub use resources::primitives::*;
pub use resources::{BoundingBox, FadeMaterial, Triangle, TriangleMesh};
pub use scene::{MeshGroup, MeshRegistry, Node, NodeHandle, Scene};
pub use settings::ShowcaseSettings;
