use glam::Vec3;

use crate::resources::geometry::TriangleMesh;

#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> TriangleMesh {
    let w = width / 2.0;
    let h = height / 2.0;
    let d = depth / 2.0;

    // 24 vertices (4 per face)
    let positions = [
        // Front face (+Z)
        [-w, -h, d],
        [w, -h, d],
        [w, h, d],
        [-w, h, d],
        // Back face (-Z)
        [-w, -h, -d],
        [-w, h, -d],
        [w, h, -d],
        [w, -h, -d],
        // Top face (+Y)
        [-w, h, -d],
        [-w, h, d],
        [w, h, d],
        [w, h, -d],
        // Bottom face (-Y)
        [-w, -h, -d],
        [w, -h, -d],
        [w, -h, d],
        [-w, -h, d],
        // Right face (+X)
        [w, -h, -d],
        [w, h, -d],
        [w, h, d],
        [w, -h, d],
        // Left face (-X)
        [-w, -h, -d],
        [-w, -h, d],
        [-w, h, d],
        [-w, h, -d],
    ];

    // 2 triangles per face, CCW: 0, 1, 2,  0, 2, 3
    let indices: Vec<u32> = (0..6)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    TriangleMesh::new(positions.iter().map(|&p| Vec3::from_array(p)).collect(), indices)
}
