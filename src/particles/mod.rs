//! Particle system
//!
//! - [`SurfaceSampler`]: area-weighted points over mesh groups
//! - [`ParticleField`]: the sampled cloud, its bounds and effect uniforms
//! - [`GpuParticleUniforms`]: `#[repr(C)]` layout for upload

pub mod field;
pub mod sampler;
pub mod uniforms;

pub use field::{InteractionPlane, ParticleField, Ray};
pub use sampler::{ParticleBuffer, SurfaceSampler};
pub use uniforms::{GpuParticleUniforms, ParticleUniforms};
