//! Surface Sampler
//!
//! Scatters points over mesh surfaces with probability proportional to
//! triangle area. Sampling is pure: the same triangles, counts and generator
//! state always yield the same buffer.

use std::ops::Range;

use glam::Vec3;
use rand::RngExt;
use smallvec::SmallVec;

use crate::resources::geometry::Triangle;
use crate::scene::{GroupTriangles, MeshGroup};
use crate::settings::ParticleCounts;

/// Flat particle positions, partitioned into one contiguous range per group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    ranges: SmallVec<[(MeshGroup, Range<usize>); 4]>,
}

impl ParticleBuffer {
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Index range of `group`, or `None` if the group produced no particles.
    #[must_use]
    pub fn range(&self, group: MeshGroup) -> Option<Range<usize>> {
        self.ranges
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, r)| r.clone())
    }

    /// Positions belonging to `group` (empty if it produced none).
    #[must_use]
    pub fn group_positions(&self, group: MeshGroup) -> &[Vec3] {
        match self.range(group) {
            Some(range) => &self.positions[range],
            None => &[],
        }
    }

    /// Tightly packed `[f32; 3]` bytes, ready for a vertex buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}

/// Area-weighted surface sampler with per-axis jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSampler {
    jitter: f32,
}

impl Default for SurfaceSampler {
    fn default() -> Self {
        Self { jitter: 0.01 }
    }
}

impl SurfaceSampler {
    #[must_use]
    pub fn new(jitter: f32) -> Self {
        Self {
            jitter: jitter.abs(),
        }
    }

    #[inline]
    #[must_use]
    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    /// Samples every group in `groups` with the count requested for it.
    ///
    /// Groups without triangles or without area contribute nothing and are
    /// logged; the remaining groups are unaffected.
    pub fn sample<R: RngExt>(
        &self,
        groups: &[GroupTriangles],
        counts: &ParticleCounts,
        rng: &mut R,
    ) -> ParticleBuffer {
        let mut buffer = ParticleBuffer {
            positions: Vec::with_capacity(counts.total()),
            ranges: SmallVec::new(),
        };

        for group in groups {
            let count = counts.get(group.group);
            let start = buffer.positions.len();
            self.sample_into(&group.triangles, count, rng, &mut buffer.positions);
            let end = buffer.positions.len();

            if end > start {
                log::debug!("{}: sampled {} particles", group.group, end - start);
                buffer.ranges.push((group.group, start..end));
            } else if count > 0 {
                log::warn!("{}: no surface to sample, 0 of {count} particles", group.group);
            }
        }

        buffer
    }

    /// Samples `count` points over `triangles`.
    pub fn sample_triangles<R: RngExt>(&self, triangles: &[Triangle], count: usize, rng: &mut R) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(count);
        self.sample_into(triangles, count, rng, &mut out);
        out
    }

    fn sample_into<R: RngExt>(&self, triangles: &[Triangle], count: usize, rng: &mut R, out: &mut Vec<Vec3>) {
        if count == 0 {
            return;
        }
        let cumulative = cumulative_areas(triangles);
        let Some(&total) = cumulative.last() else {
            return;
        };
        if total.is_nan() || total <= 0.0 {
            return;
        }

        for _ in 0..count {
            let draw = rng.random_range(0.0..total);
            let index = select_triangle(&cumulative, draw);
            let mut point = sample_point(&triangles[index], rng);

            if self.jitter > 0.0 {
                let j = self.jitter;
                point += Vec3::new(
                    rng.random_range(-j..=j),
                    rng.random_range(-j..=j),
                    rng.random_range(-j..=j),
                );
            }
            out.push(point);
        }
    }
}

/// Running sum of triangle areas.
#[must_use]
pub fn cumulative_areas(triangles: &[Triangle]) -> Vec<f32> {
    triangles
        .iter()
        .scan(0.0f32, |acc, tri| {
            *acc += tri.area.max(0.0);
            Some(*acc)
        })
        .collect()
}

/// Index of the first cumulative area strictly greater than `draw`.
///
/// Clamped to the last triangle so rounding at the top end cannot overrun.
#[must_use]
pub fn select_triangle(cumulative: &[f32], draw: f32) -> usize {
    let index = cumulative.partition_point(|&c| c <= draw);
    index.min(cumulative.len().saturating_sub(1))
}

fn sample_point<R: RngExt>(triangle: &Triangle, rng: &mut R) -> Vec3 {
    let r1: f32 = rng.random_range(0.0..1.0);
    let r2: f32 = rng.random_range(0.0..1.0);
    let u = r1.sqrt();
    let v = r2 * (1.0 - u);
    let w = 1.0 - u - v;
    triangle.point_from_weights(u, v, w)
}
