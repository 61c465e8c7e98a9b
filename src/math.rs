//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::DVector;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for spectra.
pub type CScalar = num_complex::Complex<Scalar>;
/// Dynamically sized real vector holding one value per grid cell.
pub type Field = DVector<Scalar>;

/// Returns the index of the first non-finite entry of `values`, if any.
#[must_use]
pub fn first_non_finite(values: &Field) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn finds_first_nan() {
        let f = Field::from_vec(vec![0.0, 1.0, Scalar::NAN, Scalar::INFINITY]);
        assert_eq!(first_non_finite(&f), Some(2));
        assert_eq!(first_non_finite(&Field::zeros(4)), None);
    }

    #[test]
    fn phasor_has_unit_magnitude() {
        assert_relative_eq!(phasor(0.7).norm(), 1.0, epsilon = 1.0e-12);
    }
}
