use glam::{Affine3A, Vec3};

/// CPU-side indexed triangle list in the mesh's local space.
///
/// Only positions are kept: sampling and bounds never need normals or UVs.
/// An empty `indices` buffer means the positions are already laid out as
/// consecutive triangles.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    #[must_use]
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Number of whole triangles described by the buffers.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.positions.len() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Decomposes the mesh into triangles placed by `matrix`.
    ///
    /// Triangles referencing out-of-range vertices are skipped.
    #[must_use]
    pub fn world_triangles(&self, matrix: &Affine3A) -> Vec<Triangle> {
        let mut out = Vec::with_capacity(self.triangle_count());
        let mut skipped = 0usize;

        for i in 0..self.triangle_count() {
            let [a, b, c] = if self.indices.is_empty() {
                [i * 3, i * 3 + 1, i * 3 + 2]
            } else {
                let tri = &self.indices[i * 3..i * 3 + 3];
                [tri[0] as usize, tri[1] as usize, tri[2] as usize]
            };

            match (self.positions.get(a), self.positions.get(b), self.positions.get(c)) {
                (Some(&a), Some(&b), Some(&c)) => out.push(Triangle::new(
                    matrix.transform_point3(a),
                    matrix.transform_point3(b),
                    matrix.transform_point3(c),
                )),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} triangles with out-of-range indices");
        }
        out
    }
}

/// A world-space triangle with its area cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub area: f32,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let area = (b - a).cross(c - a).length() * 0.5;
        Self {
            vertices: [a, b, c],
            area,
        }
    }

    /// Weighted sum `u·A + v·B + w·C`.
    #[inline]
    #[must_use]
    pub fn point_from_weights(&self, u: f32, v: f32, w: f32) -> Vec3 {
        let [a, b, c] = self.vertices;
        a * u + b * v + c * w
    }

    /// Barycentric weights of `p` projected onto the triangle's plane.
    ///
    /// Returns `None` for degenerate triangles.
    #[must_use]
    pub fn barycentric(&self, p: Vec3) -> Option<Vec3> {
        let [a, b, c] = self.vertices;
        let v0 = b - a;
        let v1 = c - a;
        let v2 = p - a;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);
        let denom = d00 * d11 - d01 * d01;
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        Some(Vec3::new(1.0 - v - w, v, w))
    }

    /// Unit normal, zero for degenerate triangles.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).normalize_or_zero()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoundingBox {
    /// The unit box used when there is nothing to bound.
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ONE,
        }
    }
}

impl BoundingBox {
    /// Bounds of a point set by linear expansion.
    ///
    /// An empty set yields the unit box `(0,0,0)..(1,1,1)` so that consumers
    /// normalizing by [`size`](Self::size) never divide by zero.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some((&first, rest)) = points.split_first() else {
            return Self::default();
        };

        let mut bounds = Self {
            min: first,
            max: first,
        };
        for &p in rest {
            bounds.expand(p);
        }
        bounds
    }

    #[inline]
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
