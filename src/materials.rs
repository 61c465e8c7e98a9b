//! Relative permittivity regions and material presets.

use crate::constants::{GLASS_RELATIVE_PERMITTIVITY, VACUUM_RELATIVE_PERMITTIVITY};
use crate::math::Scalar;

/// Lossless, non-magnetic dielectric described by its relative permittivity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Relative permittivity εᵣ.
    pub relative_permittivity: Scalar,
}

impl Material {
    /// Creates a material with the given relative permittivity.
    #[must_use]
    pub const fn new(relative_permittivity: Scalar) -> Self {
        Self { relative_permittivity }
    }

    /// Free space (εᵣ = 1).
    #[must_use]
    pub const fn vacuum() -> Self {
        Self::new(VACUUM_RELATIVE_PERMITTIVITY)
    }

    /// Glass as used in the slab experiments (εᵣ = 4.7).
    #[must_use]
    pub const fn glass() -> Self {
        Self::new(GLASS_RELATIVE_PERMITTIVITY)
    }

    /// Refractive index n = √εᵣ.
    #[must_use]
    pub fn refractive_index(&self) -> Scalar {
        self.relative_permittivity.sqrt()
    }

    /// Normal-incidence field reflection coefficient going from `self` into `other`.
    #[must_use]
    pub fn reflection_coefficient(&self, other: &Self) -> Scalar {
        let (n1, n2) = (self.refractive_index(), other.refractive_index());
        (n1 - n2) / (n1 + n2)
    }

    /// Normal-incidence field transmission coefficient going from `self` into `other`.
    #[must_use]
    pub fn transmission_coefficient(&self, other: &Self) -> Scalar {
        1.0 + self.reflection_coefficient(other)
    }

    /// Fills cells `[lo, hi)` with this material.
    #[must_use]
    pub const fn slab(&self, lo: usize, hi: usize) -> PermittivityRange {
        PermittivityRange::new(lo, hi, self.relative_permittivity)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::vacuum()
    }
}

/// Override of `epsR` over the half-open cell range `[lo, hi)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermittivityRange {
    /// First cell (inclusive).
    pub lo: usize,
    /// End cell (exclusive).
    pub hi: usize,
    /// Relative permittivity assigned to every cell of the range.
    pub value: Scalar,
}

impl PermittivityRange {
    /// Creates a range override.
    #[must_use]
    pub const fn new(lo: usize, hi: usize, value: Scalar) -> Self {
        Self { lo, hi, value }
    }

    /// Number of cells covered (zero for an empty or inverted range).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    /// True if the range covers no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn glass_slows_and_reflects() {
        let glass = Material::glass();
        assert_relative_eq!(glass.refractive_index(), 4.7_f64.sqrt());

        let r = Material::vacuum().reflection_coefficient(&glass);
        assert!(r < 0.0 && r > -1.0);
        let round_trip = Material::vacuum().transmission_coefficient(&glass)
            * glass.transmission_coefficient(&Material::vacuum());
        assert!(round_trip > 0.0 && round_trip < 1.0);
    }

    #[test]
    fn slab_carries_material_permittivity() {
        let slab = Material::glass().slab(150, 200);
        assert_eq!(slab, PermittivityRange::new(150, 200, 4.7));
        assert_eq!(slab.len(), 50);
        assert!(PermittivityRange::new(7, 3, 2.0).is_empty());
    }
}
