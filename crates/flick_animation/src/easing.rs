//! Easing curves
//!
//! Interpolation curves for animating between two offsets over normalized
//! time. Curves are total functions: the input is clamped to `[0, 1]` and the
//! endpoints are exact, so an animation that reaches alpha 1 lands on its
//! target with no residual error.

use std::f32::consts::PI;

/// An interpolation curve selector.
///
/// The `Power*` variants are shaped by a blend exponent (2.0 gives the
/// familiar quadratic ease); the other families ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Snaps from 0 to 1 at the halfway point.
    Step,
    SineIn,
    SineOut,
    SineInOut,
    PowerIn,
    PowerOut,
    PowerInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircularIn,
    CircularOut,
    #[default]
    CircularInOut,
}

impl Easing {
    /// Evaluate the curve at normalized time `t`.
    ///
    /// `t` is clamped to `[0, 1]`; `apply(0.0) == 0.0` and `apply(1.0) == 1.0`
    /// exactly for every variant. A non-finite or non-positive `blend_exp`
    /// falls back to 1.0 (linear shape for the power family).
    pub fn apply(self, t: f32, blend_exp: f32) -> f32 {
        if !t.is_finite() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let exp = if blend_exp.is_finite() && blend_exp > 0.0 {
            blend_exp
        } else {
            1.0
        };

        match self {
            Easing::Linear => t,
            Easing::Step => {
                if t < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::PowerIn => t.powf(exp),
            Easing::PowerOut => 1.0 - (1.0 - t).powf(exp),
            Easing::PowerInOut => {
                if t < 0.5 {
                    0.5 * (2.0 * t).powf(exp)
                } else {
                    1.0 - 0.5 * (2.0 - 2.0 * t).powf(exp)
                }
            }
            Easing::ExpoIn => 2.0_f32.powf(10.0 * t - 10.0),
            Easing::ExpoOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Easing::ExpoInOut => {
                if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::CircularIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::CircularOut => (1.0 - (t - 1.0) * (t - 1.0)).sqrt(),
            Easing::CircularInOut => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t) * (2.0 * t)).sqrt()) / 2.0
                } else {
                    let u = -2.0 * t + 2.0;
                    ((1.0 - u * u).sqrt() + 1.0) / 2.0
                }
            }
        }
    }

    /// Eased blend from `from` to `to` at normalized time `alpha`.
    ///
    /// `alpha >= 1.0` returns exactly `to`.
    pub fn interpolate(self, from: f32, to: f32, alpha: f32, blend_exp: f32) -> f32 {
        from + (to - from) * self.apply(alpha, blend_exp)
    }
}
