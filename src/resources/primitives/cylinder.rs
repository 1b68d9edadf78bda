use glam::Vec3;

use crate::resources::geometry::TriangleMesh;

/// Options for [`create_cylinder`]. The axis runs along X, matching a wheel's rolling axis.
#[derive(Debug, Clone, Copy)]
pub struct CylinderOptions {
    pub radius: f32,
    pub width: f32,
    pub radial_segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            width: 0.2,
            radial_segments: 24,
        }
    }
}

/// Capped cylinder centered on the origin.
#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> TriangleMesh {
    let segments = options.radial_segments.max(3);
    let half = options.width / 2.0;

    let mut positions = Vec::with_capacity((segments as usize + 1) * 2);
    let mut indices = Vec::with_capacity(segments as usize * 12);

    // Ring vertices: left ring at even slots, right ring at odd slots.
    for i in 0..segments {
        let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();
        let y = cos * options.radius;
        let z = sin * options.radius;
        positions.push(Vec3::new(-half, y, z));
        positions.push(Vec3::new(half, y, z));
    }
    let left_center = positions.len() as u32;
    positions.push(Vec3::new(-half, 0.0, 0.0));
    let right_center = positions.len() as u32;
    positions.push(Vec3::new(half, 0.0, 0.0));

    for i in 0..segments {
        let next = (i + 1) % segments;
        let (l0, r0) = (i * 2, i * 2 + 1);
        let (l1, r1) = (next * 2, next * 2 + 1);

        // Side
        indices.extend_from_slice(&[l0, r0, r1, l0, r1, l1]);
        // Caps
        indices.extend_from_slice(&[left_center, l1, l0]);
        indices.extend_from_slice(&[right_center, r0, r1]);
    }

    TriangleMesh::new(positions, indices)
}
