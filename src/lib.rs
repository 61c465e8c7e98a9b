#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Grid impedance, Courant number and reference experiment defaults.
pub mod constants;
/// Scalar aliases and field vector types.
pub mod math;
/// Electric, magnetic and permittivity storage on the 1D grid.
pub mod grid;
/// Relative permittivity regions and material presets.
pub mod materials;
/// Hard source generators.
pub mod source;
/// Leapfrog update of the magnetic and electric fields.
pub mod update;
/// Sensor sampling and the recorded output sequence.
pub mod sensor;
/// Run orchestration and experiment configuration.
pub mod simulation;
/// Transmission, reflectance and spectral post-processing.
pub mod analysis;
/// Frequency axis helpers and complex magnitude/phase conversions.
pub mod sweep;
/// CSV export of sensor records and field snapshots.
pub mod io;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
