//! Convenience re-exports for building FDTD experiments.

pub use crate::analysis::{
    dft, relative_difference, spectral_transmission, transmission, AnalysisError, SpectralPoint,
    TransmissionReport, TransmissionSpectrum,
};
pub use crate::constants::*;
pub use crate::errors::EmFdtdError;
pub use crate::grid::{Grid, GridError};
pub use crate::io::{write_field_csv, write_sensor_csv, SnapshotWriter};
pub use crate::materials::{Material, PermittivityRange};
pub use crate::math::{CScalar, Field, Scalar};
pub use crate::sensor::{Sensor, SensorRecord};
pub use crate::simulation::{
    run, run_with_snapshots, SimulationConfig, SimulationError, SimulationParams,
};
pub use crate::source::{GaussianPulse, HardSource};
pub use crate::sweep::{frequency_axis, linspace, mag, mag_db, phase_deg};
pub use crate::update::{step, LEFT_BOUNDARY_HY};
