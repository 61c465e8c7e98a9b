//! Grid constants and the parameters of the reference slab experiment.
//!
//! The update equations work in normalized units: the spatial step and the time step are
//! tied together by the Courant number, and the only physical constant left in the
//! equations is the impedance of free space, rounded to [`GRID_IMPEDANCE`] as in the
//! classic textbook formulation.
//!
//! ## References
//!
//! - J. B. Schneider, *Understanding the Finite-Difference Time-Domain Method*, ch. 3.

use crate::math::Scalar;

/// Impedance of free space used by the update equations, in ohms (Ω).
pub const GRID_IMPEDANCE: Scalar = 377.0;
/// Courant number `c Δt / Δx` of the scheme. One cell per time step in free space.
pub const COURANT_NUMBER: Scalar = 1.0;
/// Relative permittivity of free space.
pub const VACUUM_RELATIVE_PERMITTIVITY: Scalar = 1.0;
/// Relative permittivity used for the glass slab experiments.
pub const GLASS_RELATIVE_PERMITTIVITY: Scalar = 4.7;

/// Grid length of the reference experiment.
pub const DEFAULT_SIZE: usize = 400;
/// Sensor cell of the reference experiment.
pub const DEFAULT_SENSOR_LOCATION: usize = 250;
/// Number of time steps of the reference experiment.
pub const DEFAULT_MAX_TIME: usize = 400;
/// Time index at which the Gaussian source peaks.
pub const DEFAULT_SOURCE_PEAK_TIME: Scalar = 30.0;
/// Standard deviation of the Gaussian source, in time steps.
pub const DEFAULT_SOURCE_SDV: Scalar = 7.0;

/// Number of time steps a wave needs to cross `cells` cells of material with relative
/// permittivity `eps_r`.
#[inline]
#[must_use]
pub fn transit_steps(cells: usize, eps_r: Scalar) -> Scalar {
    cells as Scalar * eps_r.sqrt() / COURANT_NUMBER
}
