use core::f64::consts::PI;

use crate::math;

/// Easing curves for animated parallax moves.
///
/// `sample` maps normalized time `t` in `[0, 1]` to normalized progress; every curve returns
/// `0` at `t = 0` and `1` at `t = 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Half a cosine wave; the usual default for DOM animations.
    #[default]
    Swing,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Swing => 0.5 - math::cos(t * PI) / 2.0,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
