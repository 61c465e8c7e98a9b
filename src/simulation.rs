//! Run orchestration for the 1D engine.
//!
//! [`run`] drives a caller-owned [`Grid`] through `max_time` steps and returns the sensor
//! record. Every run starts from whatever state the grid holds, so independent
//! experiments (free space vs. slab) each get their own grid. [`SimulationConfig`] bundles
//! the whole input surface and builds a fresh grid per call.

use log::{debug, warn};

use crate::constants::{DEFAULT_MAX_TIME, DEFAULT_SENSOR_LOCATION, DEFAULT_SIZE, GRID_IMPEDANCE};
use crate::grid::{Grid, GridError};
use crate::materials::PermittivityRange;
use crate::math::{first_non_finite, Scalar};
use crate::sensor::{Sensor, SensorRecord};
use crate::source::{GaussianPulse, HardSource};
use crate::update;

/// Errors that can occur while configuring or executing a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Raised when the grid or its permittivity profile is invalid.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Raised when the sensor cell lies outside the grid.
    #[error("sensor location {location} is outside a grid of {size} cells")]
    SensorOutOfRange {
        /// Requested sensor cell.
        location: usize,
        /// Grid length.
        size: usize,
    },
    /// Raised when the impedance is zero, negative or non-finite.
    #[error("impedance must be finite and > 0, got {0}")]
    InvalidImpedance(Scalar),
    /// Raised when a field value turns NaN or infinite during stepping.
    #[error("non-finite {field} at cell {index} after step {step}")]
    NonFinite {
        /// Time index of the step that produced the value.
        step: usize,
        /// `"Ez"` or `"Hy"`.
        field: &'static str,
        /// Offending cell.
        index: usize,
    },
}

/// Per-run parameters that are not stored on the grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Cell sampled after every step.
    pub sensor_location: usize,
    /// Number of time steps.
    pub max_time: usize,
    /// Impedance used by the update equations.
    pub imp0: Scalar,
}

impl SimulationParams {
    /// Parameters with the standard grid impedance.
    #[must_use]
    pub const fn new(sensor_location: usize, max_time: usize) -> Self {
        Self {
            sensor_location,
            max_time,
            imp0: GRID_IMPEDANCE,
        }
    }

    /// Checks the parameters against `grid` before any stepping.
    pub fn validate(&self, grid: &Grid) -> Result<(), SimulationError> {
        if !self.imp0.is_finite() || self.imp0 <= 0.0 {
            return Err(SimulationError::InvalidImpedance(self.imp0));
        }
        if !self.sensor().fits(grid) {
            return Err(SimulationError::SensorOutOfRange {
                location: self.sensor_location,
                size: grid.size(),
            });
        }
        Ok(())
    }

    /// Sensor at [`Self::sensor_location`].
    #[must_use]
    pub const fn sensor(&self) -> Sensor {
        Sensor::new(self.sensor_location)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(DEFAULT_SENSOR_LOCATION, DEFAULT_MAX_TIME)
    }
}

/// Steps `grid` `params.max_time` times and returns the sensor record.
pub fn run<S>(grid: &mut Grid, params: &SimulationParams, source: &S) -> Result<SensorRecord, SimulationError>
where
    S: HardSource + ?Sized,
{
    run_with_snapshots(grid, params, source, |_, _| {})
}

/// Like [`run`], calling `on_step(q, grid)` after step `q` has been injected and recorded.
pub fn run_with_snapshots<S, F>(
    grid: &mut Grid,
    params: &SimulationParams,
    source: &S,
    mut on_step: F,
) -> Result<SensorRecord, SimulationError>
where
    S: HardSource + ?Sized,
    F: FnMut(usize, &Grid),
{
    params.validate(grid)?;
    debug!(
        "fdtd run: {} cells, sensor at {}, {} steps",
        grid.size(),
        params.sensor_location,
        params.max_time
    );

    let sensor = params.sensor();
    let mut record = SensorRecord::with_capacity(params.max_time);
    for q in 0..params.max_time {
        update::step(grid, params.imp0, q, source);
        check_finite(grid, q)?;
        sensor.capture(grid, &mut record);
        on_step(q, grid);
    }

    debug!("fdtd run finished: {} samples, sum {:.6e}", record.len(), record.sum());
    Ok(record)
}

fn check_finite(grid: &Grid, step: usize) -> Result<(), SimulationError> {
    for (field, values) in [("Ez", grid.ez()), ("Hy", grid.hy())] {
        if let Some(index) = first_non_finite(values) {
            warn!("aborting run: non-finite {field}[{index}] at step {step}");
            return Err(SimulationError::NonFinite { step, field, index });
        }
    }
    Ok(())
}

/// Complete description of one experiment.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of grid cells.
    pub size: usize,
    /// Cell sampled after every step.
    pub sensor_location: usize,
    /// Number of time steps.
    pub max_time: usize,
    /// Impedance used by the update equations.
    pub imp0: Scalar,
    /// Hard source at cell zero.
    pub source: GaussianPulse,
    /// Permittivity overrides, applied in order on top of free space.
    pub permittivity: Vec<PermittivityRange>,
}

impl SimulationConfig {
    /// Free-space experiment with the given geometry and step count.
    #[must_use]
    pub fn new(size: usize, sensor_location: usize, max_time: usize) -> Self {
        Self {
            size,
            sensor_location,
            max_time,
            ..Self::default()
        }
    }

    /// Replaces the source.
    #[must_use]
    pub const fn with_source(mut self, source: GaussianPulse) -> Self {
        self.source = source;
        self
    }

    /// Replaces the step count.
    #[must_use]
    pub const fn with_max_time(mut self, max_time: usize) -> Self {
        self.max_time = max_time;
        self
    }

    /// Appends a permittivity override.
    #[must_use]
    pub fn with_range(mut self, range: PermittivityRange) -> Self {
        self.permittivity.push(range);
        self
    }

    /// Run parameters for this experiment.
    #[must_use]
    pub const fn params(&self) -> SimulationParams {
        SimulationParams {
            sensor_location: self.sensor_location,
            max_time: self.max_time,
            imp0: self.imp0,
        }
    }

    /// Builds a fresh grid with the permittivity profile applied.
    pub fn build_grid(&self) -> Result<Grid, SimulationError> {
        Ok(Grid::with_ranges(self.size, &self.permittivity)?)
    }

    /// Runs every setup check without stepping.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.params().validate(&self.build_grid()?)
    }

    /// Runs the experiment on a fresh grid.
    pub fn run(&self) -> Result<SensorRecord, SimulationError> {
        self.run_with_snapshots(|_, _| {})
    }

    /// Runs the experiment on a fresh grid, handing every post-step grid to `on_step`.
    pub fn run_with_snapshots<F>(&self, on_step: F) -> Result<SensorRecord, SimulationError>
    where
        F: FnMut(usize, &Grid),
    {
        let mut grid = self.build_grid()?;
        run_with_snapshots(&mut grid, &self.params(), &self.source, on_step)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            sensor_location: DEFAULT_SENSOR_LOCATION,
            max_time: DEFAULT_MAX_TIME,
            imp0: GRID_IMPEDANCE,
            source: GaussianPulse::default(),
            permittivity: Vec::new(),
        }
    }
}
