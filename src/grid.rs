//! Field storage for the one-dimensional Yee grid.
//!
//! `Ez[m]` and `Hy[m]` share the index `m`, but `Hy[m]` lives half a cell to the right of
//! `Ez[m]` and half a time step later. `epsR[m]` scales the electric update of cell `m`.

use log::trace;

use crate::constants::VACUUM_RELATIVE_PERMITTIVITY;
use crate::materials::PermittivityRange;
use crate::math::{Field, Scalar};

/// Errors raised while allocating a grid or assigning permittivity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Raised when a grid of zero cells is requested.
    #[error("grid must contain at least one cell")]
    EmptyGrid,
    /// Raised when a permittivity range does not satisfy `lo <= hi <= size`.
    #[error("invalid cell range [{lo}, {hi}) for grid of {size} cells")]
    InvalidRange {
        /// First cell of the range (inclusive).
        lo: usize,
        /// End of the range (exclusive).
        hi: usize,
        /// Grid length.
        size: usize,
    },
    /// Raised when a relative permittivity is non-finite or below one.
    #[error("relative permittivity must be finite and >= 1.0, got {value}")]
    InvalidPermittivity {
        /// Offending value.
        value: Scalar,
    },
}

/// Electric field, magnetic field and relative permittivity of every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    ez: Field,
    hy: Field,
    eps_r: Field,
}

impl Grid {
    /// Allocates a free-space grid of `size` cells with both fields at rest.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            ez: Field::zeros(size),
            hy: Field::zeros(size),
            eps_r: Field::from_element(size, VACUUM_RELATIVE_PERMITTIVITY),
        })
    }

    /// Allocates a grid and applies every permittivity range in order.
    pub fn with_ranges(size: usize, ranges: &[PermittivityRange]) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        grid.apply_ranges(ranges)?;
        Ok(grid)
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.ez.len()
    }

    /// Electric field `Ez`.
    #[must_use]
    pub const fn ez(&self) -> &Field {
        &self.ez
    }

    /// Magnetic field `Hy`.
    #[must_use]
    pub const fn hy(&self) -> &Field {
        &self.hy
    }

    /// Relative permittivity `epsR`.
    #[must_use]
    pub const fn eps_r(&self) -> &Field {
        &self.eps_r
    }

    /// Sets `epsR[i] = value` for every `i` in `[lo, hi)`.
    ///
    /// Out-of-order or out-of-bounds ranges are rejected, never clamped. An empty range
    /// (`lo == hi`) is accepted and changes nothing.
    pub fn set_permittivity(&mut self, lo: usize, hi: usize, value: Scalar) -> Result<(), GridError> {
        self.check_range(lo, hi, value)?;
        if lo == hi {
            return Ok(());
        }
        trace!("epsR[{lo}..{hi}) = {value}");
        self.eps_r.rows_mut(lo, hi - lo).fill(value);
        Ok(())
    }

    /// Applies `ranges` in order, later ranges overriding earlier ones where they overlap.
    ///
    /// Every range is checked before the first write, so a rejected list leaves the grid
    /// untouched.
    pub fn apply_ranges(&mut self, ranges: &[PermittivityRange]) -> Result<(), GridError> {
        for r in ranges {
            self.check_range(r.lo, r.hi, r.value)?;
        }
        for r in ranges {
            self.set_permittivity(r.lo, r.hi, r.value)?;
        }
        Ok(())
    }

    /// Zeroes both fields, keeping the permittivity profile.
    pub fn reset_fields(&mut self) {
        self.ez.fill(0.0);
        self.hy.fill(0.0);
    }

    /// Split borrow used by the field updater: `(Ez, Hy, epsR)`.
    pub(crate) fn fields_mut(&mut self) -> (&mut Field, &mut Field, &Field) {
        (&mut self.ez, &mut self.hy, &self.eps_r)
    }

    fn check_range(&self, lo: usize, hi: usize, value: Scalar) -> Result<(), GridError> {
        let size = self.size();
        if lo > hi || hi > size {
            return Err(GridError::InvalidRange { lo, hi, size });
        }
        if !value.is_finite() || value < VACUUM_RELATIVE_PERMITTIVITY {
            return Err(GridError::InvalidPermittivity { value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn new_grid_is_free_space_at_rest() {
        let grid = Grid::new(8).expect("valid size");
        assert_eq!(grid.size(), 8);
        assert!(grid.ez().iter().all(|&v| v == 0.0));
        assert!(grid.hy().iter().all(|&v| v == 0.0));
        assert!(grid.eps_r().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn zero_cells_is_rejected() {
        assert_eq!(Grid::new(0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn slab_covers_half_open_range() {
        let mut grid = Grid::new(10).expect("valid size");
        grid.set_permittivity(3, 6, 4.7).expect("valid slab");
        let eps: Vec<_> = grid.eps_r().iter().copied().collect();
        assert_eq!(eps, vec![1.0, 1.0, 1.0, 4.7, 4.7, 4.7, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn range_may_touch_the_far_edge() {
        let mut grid = Grid::new(5).expect("valid size");
        grid.set_permittivity(0, 5, 2.0).expect("full range");
        assert_relative_eq!(grid.eps_r().sum(), 10.0);
        grid.set_permittivity(5, 5, 3.0).expect("empty range at the edge");
    }

    #[test]
    fn bad_ranges_are_reported_not_clamped() {
        let mut grid = Grid::new(5).expect("valid size");
        assert_eq!(
            grid.set_permittivity(2, 6, 2.0),
            Err(GridError::InvalidRange { lo: 2, hi: 6, size: 5 })
        );
        assert_eq!(
            grid.set_permittivity(4, 3, 2.0),
            Err(GridError::InvalidRange { lo: 4, hi: 3, size: 5 })
        );
        assert!(grid.eps_r().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn degenerate_permittivity_is_rejected() {
        let mut grid = Grid::new(5).expect("valid size");
        for value in [0.0, -2.0, 0.5, Scalar::NAN, Scalar::INFINITY] {
            assert!(matches!(
                grid.set_permittivity(0, 2, value),
                Err(GridError::InvalidPermittivity { .. })
            ));
        }
    }

    #[test]
    fn rejected_range_list_leaves_grid_untouched() {
        let mut grid = Grid::new(5).expect("valid size");
        let ranges = [PermittivityRange::new(0, 2, 3.0), PermittivityRange::new(3, 9, 3.0)];
        assert!(grid.apply_ranges(&ranges).is_err());
        assert!(grid.eps_r().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn later_ranges_override_earlier_ones() {
        let ranges = [PermittivityRange::new(0, 4, 2.0), PermittivityRange::new(2, 3, 9.0)];
        let grid = Grid::with_ranges(4, &ranges).expect("valid ranges");
        assert_eq!(grid.eps_r()[1], 2.0);
        assert_eq!(grid.eps_r()[2], 9.0);
        assert_eq!(grid.eps_r()[3], 2.0);
    }
}
