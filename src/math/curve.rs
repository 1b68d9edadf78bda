use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ScooterError};

/// Number of segments used to build the cumulative arc-length table.
const ARC_LENGTH_DIVISIONS: usize = 200;

/// Half-width of the finite-difference window used for tangents (spline parameter).
const TANGENT_DELTA: f32 = 1e-4;

/// Knot spans shorter than this are treated as degenerate.
const MIN_KNOT_SPAN: f32 = 1e-4;

/// Catmull-Rom parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    /// Knot spacing `|Δp|^0.5`. Avoids cusps and self-intersections.
    Centripetal,
    /// Knot spacing `|Δp|`.
    Chordal,
    /// Uniform knots; `tension` scales the tangents.
    Uniform { tension: f32 },
}

impl Default for CurveType {
    #[inline]
    fn default() -> Self {
        Self::Centripetal
    }
}

/// A smooth path through a fixed list of control points.
///
/// The curve passes through every control point and is tangent-continuous at
/// interior points. Public queries take a normalized *distance* along the
/// path (`point_at`, `tangent_at`); an arc-length table built at construction
/// converts that into the raw spline parameter.
///
/// Open paths clamp parameters to `[0, 1]`; closed paths wrap them modulo 1.
#[derive(Debug, Clone)]
pub struct ControlPath {
    points: Vec<Vec3>,
    closed: bool,
    curve_type: CurveType,
    /// Cumulative length at `i / ARC_LENGTH_DIVISIONS` of the spline parameter.
    arc_lengths: Vec<f32>,
}

impl ControlPath {
    /// Builds a path. Fails with [`ScooterError::InvalidPath`] for fewer than two points.
    pub fn new(points: Vec<Vec3>, closed: bool, curve_type: CurveType) -> Result<Self> {
        if points.len() < 2 {
            return Err(ScooterError::InvalidPath { count: points.len() });
        }

        let mut path = Self {
            points,
            closed,
            curve_type,
            arc_lengths: Vec::new(),
        };
        path.arc_lengths = path.build_arc_lengths();
        Ok(path)
    }

    /// Open centripetal path.
    pub fn open(points: Vec<Vec3>) -> Result<Self> {
        Self::new(points, false, CurveType::Centripetal)
    }

    /// Closed centripetal loop.
    pub fn closed(points: Vec<Vec3>) -> Result<Self> {
        Self::new(points, true, CurveType::Centripetal)
    }

    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Total arc length (approximated by the arc-length table).
    #[inline]
    #[must_use]
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Point at normalized distance `u` along the path.
    #[must_use]
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    /// Unit direction of travel at normalized distance `u`.
    #[must_use]
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        self.tangent(self.u_to_t(u))
    }

    /// `n` points evenly spaced by arc length.
    ///
    /// Open paths include both endpoints; closed paths cover the whole loop
    /// once without repeating the start point.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.point_at(0.0)],
            _ => {
                let denominator = if self.closed { n } else { n - 1 } as f32;
                (0..n)
                    .map(|i| self.point_at(i as f32 / denominator))
                    .collect()
            }
        }
    }

    /// Point at raw spline parameter `t`.
    #[must_use]
    pub fn point(&self, t: f32) -> Vec3 {
        let t = self.normalize_parameter(t);
        let len = self.points.len();

        let segment_count = if self.closed { len } else { len - 1 };
        let p = segment_count as f32 * t;
        let mut index = p.floor() as usize;
        let mut weight = p - index as f32;

        if self.closed {
            index %= len;
        } else if index >= len - 1 {
            // t == 1 on an open path: the exact last control point.
            return self.points[len - 1];
        }

        if weight <= 0.0 {
            return self.points[index];
        }
        weight = weight.min(1.0);

        let (p0, p1, p2, p3) = self.segment_points(index);
        self.evaluate_segment(p0, p1, p2, p3, weight)
    }

    /// Unit tangent at raw spline parameter `t`, by central finite difference.
    #[must_use]
    pub fn tangent(&self, t: f32) -> Vec3 {
        let t = self.normalize_parameter(t);

        let mut delta = TANGENT_DELTA;
        for _ in 0..4 {
            let (t1, t2) = if self.closed {
                (t - delta, t + delta)
            } else {
                ((t - delta).max(0.0), (t + delta).min(1.0))
            };
            let diff = self.point(t2) - self.point(t1);
            if diff.length_squared() > f32::EPSILON * f32::EPSILON {
                return diff.normalize();
            }
            // Cusp or stationary span: widen the window.
            delta *= 10.0;
        }

        (self.points[1] - self.points[0]).normalize_or_zero()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn normalize_parameter(&self, t: f32) -> f32 {
        if !t.is_finite() {
            return 0.0;
        }
        if self.closed {
            t.rem_euclid(1.0)
        } else {
            t.clamp(0.0, 1.0)
        }
    }

    /// The four points that shape segment `index` (from `points[index]` to the next).
    fn segment_points(&self, index: usize) -> (Vec3, Vec3, Vec3, Vec3) {
        let points = &self.points;
        let len = points.len();

        let p1 = points[index % len];
        let p2 = points[(index + 1) % len];

        let p0 = if self.closed || index > 0 {
            points[(index + len - 1) % len]
        } else {
            // Reflect the first span to fabricate a leading point.
            2.0 * points[0] - points[1]
        };

        let p3 = if self.closed || index + 2 < len {
            points[(index + 2) % len]
        } else {
            2.0 * points[len - 1] - points[len - 2]
        };

        (p0, p1, p2, p3)
    }

    fn evaluate_segment(&self, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, weight: f32) -> Vec3 {
        let (m1, m2) = match self.curve_type {
            CurveType::Uniform { tension } => (tension * (p2 - p0), tension * (p3 - p1)),
            CurveType::Centripetal => nonuniform_tangents(p0, p1, p2, p3, 0.25),
            CurveType::Chordal => nonuniform_tangents(p0, p1, p2, p3, 0.5),
        };
        hermite(p1, p2, m1, m2, weight)
    }

    fn build_arc_lengths(&self) -> Vec<f32> {
        let mut lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        lengths.push(0.0);

        let mut last = self.point(0.0);
        let mut sum = 0.0;
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let current = self.point(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        lengths
    }

    /// Maps normalized distance `u` to the spline parameter covering that distance.
    fn u_to_t(&self, u: f32) -> f32 {
        let u = self.normalize_parameter(u);
        let lengths = &self.arc_lengths;
        let last = lengths.len() - 1;
        let total = lengths[last];

        if total <= 0.0 {
            return u;
        }

        let target = u * total;
        // First entry not below the target distance.
        let idx = lengths.partition_point(|&l| l < target);
        if idx > last {
            return 1.0;
        }
        if lengths[idx] == target {
            return idx as f32 / last as f32;
        }

        let i = idx.saturating_sub(1);
        let before = lengths[i];
        let segment = lengths[i + 1] - before;
        let fraction = if segment > 0.0 { (target - before) / segment } else { 0.0 };

        (i as f32 + fraction) / last as f32
    }
}

/// Tangents of a non-uniform Catmull-Rom segment, scaled to the `p1 → p2` span.
///
/// `power` is applied to squared distances, so 0.25 is centripetal and 0.5 chordal.
fn nonuniform_tangents(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, power: f32) -> (Vec3, Vec3) {
    let mut dt0 = p0.distance_squared(p1).powf(power);
    let mut dt1 = p1.distance_squared(p2).powf(power);
    let mut dt2 = p2.distance_squared(p3).powf(power);

    if dt1 < MIN_KNOT_SPAN {
        dt1 = 1.0;
    }
    if dt0 < MIN_KNOT_SPAN {
        dt0 = dt1;
    }
    if dt2 < MIN_KNOT_SPAN {
        dt2 = dt1;
    }

    let t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
    let t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;

    (t1 * dt1, t2 * dt1)
}

/// Cubic Hermite basis on the unit interval.
#[inline]
fn hermite(p1: Vec3, p2: Vec3, m1: Vec3, m2: Vec3, t: f32) -> Vec3 {
    let c0 = p1;
    let c1 = m1;
    let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2;
    let c3 = 2.0 * p1 - 2.0 * p2 + m1 + m2;

    let t2 = t * t;
    let t3 = t2 * t;
    c0 + c1 * t + c2 * t2 + c3 * t3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hermite_hits_both_ends() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert!(hermite(a, b, Vec3::X, Vec3::Y, 0.0).abs_diff_eq(a, 1e-6));
        assert!(hermite(a, b, Vec3::X, Vec3::Y, 1.0).abs_diff_eq(b, 1e-5));
    }

    #[test]
    fn degenerate_spans_fall_back_to_unit_knots() {
        let p = Vec3::ONE;
        let (m1, m2) = nonuniform_tangents(p, p, p, p, 0.25);
        assert!(m1.is_finite() && m2.is_finite());
        assert_eq!(m1, Vec3::ZERO);
    }

    #[test]
    fn arc_length_table_is_monotonic() {
        let path = ControlPath::open(vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0)]).unwrap();
        assert_eq!(path.arc_lengths.len(), ARC_LENGTH_DIVISIONS + 1);
        assert!(path.arc_lengths.windows(2).all(|w| w[1] >= w[0]));
    }
}
