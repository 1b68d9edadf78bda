use serde::{Deserialize, Serialize};

/// Easing curves mapping linear time `t ∈ [0, 1]` onto eased progress.
///
/// The cubic family is the one used by every timeline in the showcase:
/// the entry flight and the particle reveal ease out, the hide ramp and the
/// material cross-fade ease in and out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    QuadOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`; output hits 0 and 1 exactly at the ends.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = -2.0 * t + 2.0;
                    1.0 - f * f * f / 2.0
                }
            }
        }
    }
}
