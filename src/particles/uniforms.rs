use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::resources::geometry::BoundingBox;
use crate::settings::ParticleSettings;

/// Parameters of the particle visual effect.
///
/// Static values come from [`ParticleSettings`]; `time`, `mouse_world` and
/// `reveal` are refreshed by [`ParticleField::tick`](crate::particles::ParticleField::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleUniforms {
    pub time: f32,
    pub time_speed: f32,
    pub sway_amplitude: f32,
    pub mouse_sway_amplitude: f32,
    pub mouse_threshold: f32,
    pub mouse_noise_scale: f32,
    pub noise_scale: f32,
    pub point_size: f32,
    pub color: Vec3,
    pub mouse_world: Vec3,
    pub reveal: f32,
    pub bounding_min: Vec3,
    pub bounding_max: Vec3,
    pub bounding_size: Vec3,
}

/// Pointer position before any pointer event, far outside the model.
pub const OFFSCREEN_POINTER: Vec3 = Vec3::splat(-10.0);

impl ParticleUniforms {
    #[must_use]
    pub fn new(settings: &ParticleSettings, bounds: &BoundingBox) -> Self {
        Self {
            time: 0.0,
            time_speed: settings.time_speed,
            sway_amplitude: settings.sway_amplitude,
            mouse_sway_amplitude: settings.mouse_sway_amplitude,
            mouse_threshold: settings.mouse_threshold,
            mouse_noise_scale: settings.mouse_noise_scale,
            noise_scale: settings.noise_scale,
            point_size: settings.point_size,
            color: settings.color,
            mouse_world: OFFSCREEN_POINTER,
            reveal: 0.0,
            bounding_min: bounds.min,
            bounding_max: bounds.max,
            bounding_size: bounds.size(),
        }
    }

    #[must_use]
    pub fn to_gpu(&self) -> GpuParticleUniforms {
        GpuParticleUniforms {
            color: self.color.to_array(),
            point_size: self.point_size,
            mouse_world: self.mouse_world.to_array(),
            reveal: self.reveal,
            bounding_min: self.bounding_min.to_array(),
            time: self.time,
            bounding_max: self.bounding_max.to_array(),
            time_speed: self.time_speed,
            bounding_size: self.bounding_size.to_array(),
            sway_amplitude: self.sway_amplitude,
            mouse_sway_amplitude: self.mouse_sway_amplitude,
            mouse_threshold: self.mouse_threshold,
            mouse_noise_scale: self.mouse_noise_scale,
            noise_scale: self.noise_scale,
        }
    }
}

impl Default for ParticleUniforms {
    fn default() -> Self {
        Self::new(&ParticleSettings::default(), &BoundingBox::default())
    }
}

/// Uniform block layout. Every `vec3` is followed by a scalar so each row
/// fills one 16-byte slot.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuParticleUniforms {
    pub color: [f32; 3],
    pub point_size: f32,
    pub mouse_world: [f32; 3],
    pub reveal: f32,
    pub bounding_min: [f32; 3],
    pub time: f32,
    pub bounding_max: [f32; 3],
    pub time_speed: f32,
    pub bounding_size: [f32; 3],
    pub sway_amplitude: f32,
    pub mouse_sway_amplitude: f32,
    pub mouse_threshold: f32,
    pub mouse_noise_scale: f32,
    pub noise_scale: f32,
}

const WGSL_FIELDS: [(&str, &str); 14] = [
    ("color", "vec3<f32>"),
    ("point_size", "f32"),
    ("mouse_world", "vec3<f32>"),
    ("reveal", "f32"),
    ("bounding_min", "vec3<f32>"),
    ("time", "f32"),
    ("bounding_max", "vec3<f32>"),
    ("time_speed", "f32"),
    ("bounding_size", "vec3<f32>"),
    ("sway_amplitude", "f32"),
    ("mouse_sway_amplitude", "f32"),
    ("mouse_threshold", "f32"),
    ("mouse_noise_scale", "f32"),
    ("noise_scale", "f32"),
];

impl GpuParticleUniforms {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// WGSL declaration matching this layout.
    #[must_use]
    pub fn wgsl_struct_def(struct_name: &str) -> String {
        let mut code = format!("struct {struct_name} {{\n");
        for (name, ty) in WGSL_FIELDS {
            code.push_str(&format!("    {name}: {ty},\n"));
        }
        code.push_str("};\n");
        code
    }
}
