//! Leapfrog update of `Hy` and `Ez`.
//!
//! One time step is three passes in a fixed order:
//!
//! 1. `Hy[m] += (Ez[m+1] - Ez[m]) / imp0` for `m` in `0..size-1`. The last cell has no
//!    right neighbour and is left alone.
//! 2. `Ez[m] += (Hy[m] - Hy[m-1]) * imp0 / epsR[m]` for every cell, with the value left of
//!    the first cell pinned to [`LEFT_BOUNDARY_HY`].
//! 3. `Ez[0]` is overwritten with the source value for the current time index.
//!
//! Swapping the passes breaks the half-step staggering between the two fields.

use crate::grid::Grid;
use crate::math::Scalar;
use crate::source::HardSource;

/// Magnetic field just left of cell zero. Fixed, never read from the array.
pub const LEFT_BOUNDARY_HY: Scalar = 0.0;

/// Advances `Hy` by one step from the current `Ez`.
pub fn update_magnetic(grid: &mut Grid, imp0: Scalar) {
    let (ez, hy, _) = grid.fields_mut();
    let n = ez.len();
    for m in 0..n.saturating_sub(1) {
        hy[m] += (ez[m + 1] - ez[m]) / imp0;
    }
}

/// Advances `Ez` by one step from the current `Hy` and the permittivity profile.
pub fn update_electric(grid: &mut Grid, imp0: Scalar) {
    let (ez, hy, eps_r) = grid.fields_mut();
    let mut hy_left = LEFT_BOUNDARY_HY;
    for m in 0..ez.len() {
        ez[m] += (hy[m] - hy_left) * imp0 / eps_r[m];
        hy_left = hy[m];
    }
}

/// Overwrites `Ez[0]` with `value` (hard source).
pub fn inject_source(grid: &mut Grid, value: Scalar) {
    let (ez, _, _) = grid.fields_mut();
    ez[0] = value;
}

/// Runs one full time step `q`: magnetic pass, electric pass, then source injection.
pub fn step<S>(grid: &mut Grid, imp0: Scalar, q: usize, source: &S)
where
    S: HardSource + ?Sized,
{
    update_magnetic(grid, imp0);
    update_electric(grid, imp0);
    inject_source(grid, source.value(q));
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::GRID_IMPEDANCE;

    fn impulse_grid(size: usize, at: usize) -> Grid {
        let mut grid = Grid::new(size).expect("valid size");
        grid.fields_mut().0[at] = 1.0;
        grid
    }

    #[test]
    fn magnetic_pass_skips_last_cell() {
        let mut grid = impulse_grid(4, 3);
        update_magnetic(&mut grid, GRID_IMPEDANCE);
        assert_relative_eq!(grid.hy()[2], 1.0 / GRID_IMPEDANCE);
        assert_eq!(grid.hy()[3], 0.0);
        assert_eq!(grid.hy()[0], 0.0);
    }

    #[test]
    fn left_boundary_is_zero_not_wraparound() {
        let mut grid = Grid::new(4).expect("valid size");
        {
            let (_, hy, _) = grid.fields_mut();
            hy[0] = 2.0;
            hy[3] = 100.0;
        }
        update_electric(&mut grid, 1.0);
        // Ez[0] sees Hy[0] - 0, not Hy[0] - Hy[3].
        assert_relative_eq!(grid.ez()[0], 2.0);
        assert_relative_eq!(grid.ez()[1], -2.0);
        assert_relative_eq!(grid.ez()[3], 100.0);
    }

    #[test]
    fn electric_pass_scales_by_permittivity() {
        let mut grid = Grid::new(3).expect("valid size");
        grid.set_permittivity(1, 2, 4.0).expect("valid slab");
        grid.fields_mut().1[1] = 1.0;
        update_electric(&mut grid, 2.0);
        assert_relative_eq!(grid.ez()[1], 0.5);
        assert_relative_eq!(grid.ez()[2], -2.0);
    }

    #[test]
    fn source_overwrites_instead_of_adding() {
        let mut grid = Grid::new(3).expect("valid size");
        grid.fields_mut().1[0] = 1.0;
        step(&mut grid, GRID_IMPEDANCE, 0, &|_: usize| 0.25);
        assert_eq!(grid.ez()[0], 0.25);
    }

    #[test]
    fn free_space_pulse_moves_one_cell_per_step() {
        let mut grid = Grid::new(10).expect("valid size");
        let source = |q: usize| if q == 0 { 1.0 } else { 0.0 };
        for q in 0..5 {
            step(&mut grid, GRID_IMPEDANCE, q, &source);
        }
        assert_relative_eq!(grid.ez()[4], 1.0, max_relative = 1.0e-12);
        assert!(grid.ez().iter().skip(5).all(|&v| v == 0.0));
    }

    #[test]
    fn single_cell_grid_only_sees_source() {
        let mut grid = Grid::new(1).expect("valid size");
        step(&mut grid, GRID_IMPEDANCE, 0, &|_: usize| 3.0);
        assert_eq!(grid.ez()[0], 3.0);
        assert_eq!(grid.hy()[0], 0.0);
    }
}
