//! Hard sources driving `Ez[0]`.

use crate::constants::{DEFAULT_SOURCE_PEAK_TIME, DEFAULT_SOURCE_SDV};
use crate::math::Scalar;

/// Value written over `Ez[0]` at each time index.
///
/// Implementations must be pure: the same `q` always yields the same value. Any
/// `Fn(usize) -> Scalar` closure is a hard source.
pub trait HardSource {
    /// Source value for time index `q` (0-based).
    fn value(&self, q: usize) -> Scalar;
}

impl<F> HardSource for F
where
    F: Fn(usize) -> Scalar,
{
    fn value(&self, q: usize) -> Scalar {
        self(q)
    }
}

/// Gaussian pulse `exp(-(q - peak_time)² / sigma)` with `sigma = 2 sdv²`, switched off
/// from `q >= sigma` onwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianPulse {
    /// Time index of the pulse maximum.
    pub peak_time: Scalar,
    /// Standard deviation in time steps.
    pub sdv: Scalar,
}

impl GaussianPulse {
    /// Creates a pulse peaking at `peak_time` with standard deviation `sdv`.
    #[must_use]
    pub const fn new(peak_time: Scalar, sdv: Scalar) -> Self {
        Self { peak_time, sdv }
    }

    /// Exponent denominator `2 sdv²`; also the time index at which the pulse is cut off.
    #[must_use]
    pub const fn sigma(&self) -> Scalar {
        2.0 * self.sdv * self.sdv
    }

    /// True if the pulse is identically zero (`sigma <= 0` or undefined).
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        let sigma = self.sigma();
        sigma.is_nan() || sigma <= 0.0
    }
}

impl Default for GaussianPulse {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_PEAK_TIME, DEFAULT_SOURCE_SDV)
    }
}

impl HardSource for GaussianPulse {
    fn value(&self, q: usize) -> Scalar {
        if self.is_silent() {
            return 0.0;
        }
        let sigma = self.sigma();
        let t = q as Scalar;
        if t < sigma {
            let d = t - self.peak_time;
            (-(d * d) / sigma).exp()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reference_pulse_peaks_at_peak_time() {
        let pulse = GaussianPulse::default();
        assert_relative_eq!(pulse.sigma(), 98.0);
        assert_relative_eq!(pulse.value(30), 1.0);
        assert!(pulse.value(29) < 1.0);
        assert_relative_eq!(pulse.value(29), pulse.value(31));
        assert_relative_eq!(pulse.value(0), (-900.0_f64 / 98.0).exp());
    }

    #[test]
    fn pulse_switches_off_at_sigma() {
        let pulse = GaussianPulse::default();
        assert!(pulse.value(97) > 0.0);
        assert_eq!(pulse.value(98), 0.0);
        assert_eq!(pulse.value(10_000), 0.0);
    }

    #[test]
    fn non_positive_sigma_never_fires() {
        for sdv in [0.0, Scalar::NAN] {
            let pulse = GaussianPulse::new(0.0, sdv);
            assert!(pulse.is_silent());
            assert!((0..50).all(|q| pulse.value(q) == 0.0));
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let pulse = GaussianPulse::new(12.0, 3.0);
        let a: Vec<_> = (0..40).map(|q| pulse.value(q)).collect();
        let b: Vec<_> = (0..40).map(|q| pulse.value(q)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn closures_are_sources() {
        let step = |q: usize| if q < 3 { 1.0 } else { 0.0 };
        assert_eq!(step.value(2), 1.0);
        assert_eq!(step.value(3), 0.0);
    }
}
