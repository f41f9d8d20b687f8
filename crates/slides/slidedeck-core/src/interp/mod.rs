//! Easing curves and scalar interpolation.
//!
//! Curve names follow the power/back families used by web animation
//! libraries: `power1` is quadratic, `power2` cubic, and `back` overshoots
//! its target before settling.

pub mod functions;

use serde::{Deserialize, Serialize};

pub use functions::lerp_f32;

/// Easing curve applied to normalized tween progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    Power1Out,
    Power1InOut,
    Power2In,
    #[default]
    Power2Out,
    Power2InOut,
    /// Overshoots by `overshoot` before settling on the target.
    BackOut(f32),
}

impl Ease {
    /// Map linear progress `t` in [0, 1] to eased progress.
    ///
    /// Input is clamped; `BackOut` may return values slightly above 1.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => functions::out_pow(t, 2),
            Ease::Power1InOut => functions::in_out_pow(t, 2),
            Ease::Power2In => functions::in_pow(t, 3),
            Ease::Power2Out => functions::out_pow(t, 3),
            Ease::Power2InOut => functions::in_out_pow(t, 3),
            Ease::BackOut(overshoot) => functions::back_out(t, overshoot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() <= 1e-5, "left={a} right={b}");
    }

    #[test]
    fn default_is_power2_out() {
        assert_eq!(Ease::default(), Ease::Power2Out);
    }

    #[test]
    fn endpoints_are_fixed() {
        for ease in [
            Ease::Linear,
            Ease::Power1Out,
            Ease::Power1InOut,
            Ease::Power2In,
            Ease::Power2Out,
            Ease::Power2InOut,
            Ease::BackOut(1.2),
        ] {
            approx(ease.apply(0.0), 0.0);
            approx(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn in_out_is_symmetric_at_midpoint() {
        approx(Ease::Power2InOut.apply(0.5), 0.5);
        approx(Ease::Power1InOut.apply(0.5), 0.5);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.2).apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::Power2In.apply(0.3) < 0.3);
    }

    #[test]
    fn deserializes_from_snake_case() {
        let e: Ease = serde_json::from_str("\"power2_in_out\"").unwrap();
        assert_eq!(e, Ease::Power2InOut);
        let e: Ease = serde_json::from_str("{\"back_out\": 1.1}").unwrap();
        assert_eq!(e, Ease::BackOut(1.1));
    }
}
