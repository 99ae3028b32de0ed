//! Easing curves.
//!
//! Names follow the `family.direction` convention used in animation tooling
//! (`power3.out`, `back.out(1.7)`, ...), so motion specs read the same in
//! code and in design notes. `powerN` is a polynomial of degree `N + 1`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::MotionError;

/// Default overshoot for [`Ease::BackOut`].
pub const DEFAULT_OVERSHOOT: f64 = 1.7;

/// An easing curve mapping linear progress onto eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    /// No easing
    Linear,
    /// Cubic deceleration
    Power2Out,
    /// Quartic deceleration
    #[default]
    Power3Out,
    /// Quartic acceleration then deceleration
    Power3InOut,
    /// Sinusoidal acceleration then deceleration
    SineInOut,
    /// Deceleration overshooting the target by the given amount before settling
    BackOut(f64),
}

impl Ease {
    /// Eased progress for `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "none" | "linear" => return Ok(Ease::Linear),
            "power2.out" => return Ok(Ease::Power2Out),
            "power3.out" => return Ok(Ease::Power3Out),
            "power3.inOut" => return Ok(Ease::Power3InOut),
            "sine.inOut" => return Ok(Ease::SineInOut),
            "back.out" => return Ok(Ease::BackOut(DEFAULT_OVERSHOOT)),
            _ => {}
        }

        name.strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|arg| arg.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite())
            .map(Ease::BackOut)
            .ok_or_else(|| MotionError::UnknownEase(name.to_string()))
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => f.write_str("none"),
            Ease::Power2Out => f.write_str("power2.out"),
            Ease::Power3Out => f.write_str("power3.out"),
            Ease::Power3InOut => f.write_str("power3.inOut"),
            Ease::SineInOut => f.write_str("sine.inOut"),
            Ease::BackOut(s) => write!(f, "back.out({s})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::SineInOut,
        Ease::BackOut(DEFAULT_OVERSHOOT),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(7.5), 1.0);
        assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
    }

    #[test]
    fn in_out_curves_are_symmetric() {
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Ease::Power3InOut.apply(0.2);
        let b = Ease::Power3InOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(DEFAULT_OVERSHOOT).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("power3.out".parse::<Ease>(), Ok(Ease::Power3Out));
        assert_eq!("power3.inOut".parse::<Ease>(), Ok(Ease::Power3InOut));
        assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
        assert_eq!("back.out".parse::<Ease>(), Ok(Ease::BackOut(1.7)));
        assert_eq!("back.out(2.5)".parse::<Ease>(), Ok(Ease::BackOut(2.5)));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "elastic.out".parse::<Ease>(),
            Err(MotionError::UnknownEase("elastic.out".into()))
        );
        assert!("back.out(abc)".parse::<Ease>().is_err());
        assert!("back.out(1.7".parse::<Ease>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for ease in ALL {
            assert_eq!(ease.to_string().parse::<Ease>(), Ok(ease));
        }
    }
}
