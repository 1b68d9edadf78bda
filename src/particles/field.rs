//! Particle Field
//!
//! The particle cloud handed to the visual-effect stage: a buffer sampled
//! once when the model becomes ready, its bounds, and the uniform block the
//! effect reads each frame. Pointer input is captured on an invisible plane
//! and damped into `mouse_world`.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::camera_rig::CameraPose;
use crate::animation::damp::damp3;
use crate::particles::sampler::{ParticleBuffer, SurfaceSampler};
use crate::particles::uniforms::{OFFSCREEN_POINTER, ParticleUniforms};
use crate::resources::geometry::BoundingBox;
use crate::scene::{GroupTriangles, MeshRegistry, Scene};
use crate::settings::ParticleSettings;

const POINTER_TOLERANCE: f32 = 1e-5;

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray through normalized device coordinates `ndc` (`[-1, 1]`, +Y up) of a
    /// perspective camera.
    #[must_use]
    pub fn from_camera(pose: &CameraPose, ndc: Vec2, fov_y: f32, aspect: f32) -> Self {
        let forward = (pose.look_at - pose.position).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);

        let half_height = (fov_y * 0.5).tan();
        let half_width = half_height * aspect;
        let direction = forward + right * (ndc.x * half_width) + up * (ndc.y * half_height);
        Self::new(pose.position, direction)
    }
}

/// Square pointer-capture plane facing +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionPlane {
    pub center: Vec3,
    pub size: f32,
}

impl InteractionPlane {
    #[must_use]
    pub fn new(center: Vec3, size: f32) -> Self {
        Self { center, size }
    }

    /// Hit point of `ray` on the plane, if it lands inside the square.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = ray.direction.z;
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (self.center.z - ray.origin.z) / denom;
        if t < 0.0 {
            return None;
        }

        let hit = ray.origin + ray.direction * t;
        let half = self.size * 0.5;
        let local = hit - self.center;
        (local.x.abs() <= half && local.y.abs() <= half).then_some(hit)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    buffer: ParticleBuffer,
    bounds: BoundingBox,
    uniforms: ParticleUniforms,
    plane: InteractionPlane,
    pointer_target: Vec3,
    mouse_smooth_time: f32,
}

impl ParticleField {
    /// Samples the registry's groups from `scene`. Run once per loaded model.
    pub fn from_scene(scene: &mut Scene, registry: &MeshRegistry, settings: &ParticleSettings) -> Self {
        scene.update_matrix_world();
        let groups = registry.world_triangles(scene);
        Self::from_triangles(&groups, settings)
    }

    #[must_use]
    pub fn from_triangles(groups: &[GroupTriangles], settings: &ParticleSettings) -> Self {
        let mut rng = StdRng::seed_from_u64(settings.seed);
        let sampler = SurfaceSampler::new(settings.jitter);
        let buffer = sampler.sample(groups, &settings.counts, &mut rng);
        let bounds = BoundingBox::from_points(buffer.positions());

        log::info!(
            "Particle field: {} particles, bounds {:?}..{:?}",
            buffer.len(),
            bounds.min,
            bounds.max
        );

        Self {
            uniforms: ParticleUniforms::new(settings, &bounds),
            buffer,
            bounds,
            plane: InteractionPlane::new(settings.pointer_plane_center, settings.pointer_plane_size),
            pointer_target: OFFSCREEN_POINTER,
            mouse_smooth_time: settings.mouse_smooth_time,
        }
    }

    /// Retargets the pointer from a picking ray. Returns whether the ray hit the plane.
    pub fn set_pointer(&mut self, ray: &Ray) -> bool {
        match self.plane.intersect(ray) {
            Some(hit) => {
                self.pointer_target = hit;
                true
            }
            None => false,
        }
    }

    /// Advances the effect. Returns whether the uniforms changed.
    ///
    /// Time and pointer are only refreshed while `reveal > 0`; a hidden
    /// field only tracks the reveal value itself.
    pub fn tick(&mut self, elapsed: f32, dt: f32, reveal: f32) -> bool {
        let reveal_changed = self.uniforms.reveal != reveal;
        self.uniforms.reveal = reveal;
        if reveal <= 0.0 {
            return reveal_changed;
        }

        self.uniforms.time = elapsed;
        damp3(
            &mut self.uniforms.mouse_world,
            self.pointer_target,
            self.mouse_smooth_time,
            dt,
            POINTER_TOLERANCE,
        );
        true
    }

    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    #[inline]
    #[must_use]
    pub fn uniforms(&self) -> &ParticleUniforms {
        &self.uniforms
    }

    #[inline]
    #[must_use]
    pub fn plane(&self) -> &InteractionPlane {
        &self.plane
    }

    #[inline]
    #[must_use]
    pub fn pointer_target(&self) -> Vec3 {
        self.pointer_target
    }
}
