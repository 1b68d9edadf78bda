//! Resource definitions
//!
//! CPU-side data the core consumes, independent of any GPU backend:
//! - TriangleMesh / Triangle: indexed triangle lists and world-space triangles
//! - BoundingBox: axis-aligned bounds (also feeds the reveal effect)
//! - FadeMaterial: the body material parameters driven by the reveal cross-fade
//! - primitives: procedural meshes for tests and demos

pub mod geometry;
pub mod material;
pub mod primitives;

pub use geometry::{BoundingBox, Triangle, TriangleMesh};
pub use material::{FadeMaterial, MaterialFlags};
