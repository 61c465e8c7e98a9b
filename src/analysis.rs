//! Transmission and reflectance of a slab from two sensor records.
//!
//! Both records must come from runs with identical geometry, source and step count; the
//! only difference is the permittivity profile. The free-space run is the reference.

use crate::math::{phasor, CScalar, Scalar};
use crate::sensor::SensorRecord;
use crate::sweep::{mag, mag_db, phase_deg};

/// Errors raised while comparing sensor records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Raised when the two records have different lengths.
    #[error("record lengths differ: {sample} samples vs {reference} reference samples")]
    LengthMismatch {
        /// Length of the record under test.
        sample: usize,
        /// Length of the reference record.
        reference: usize,
    },
    /// Raised when the reference record sums to zero, leaving the ratio undefined.
    #[error("reference record sums to zero")]
    ZeroReference,
}

/// Summed-field transmission and its complement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionReport {
    /// `sum(slab) / sum(free space)`.
    pub transmission: Scalar,
    /// `1 - transmission`.
    pub reflectance: Scalar,
}

/// Ratio of the summed slab record to the summed free-space record.
pub fn transmission(slab: &SensorRecord, free_space: &SensorRecord) -> Result<TransmissionReport, AnalysisError> {
    check_lengths(slab, free_space)?;
    let reference = free_space.sum();
    if reference == 0.0 {
        return Err(AnalysisError::ZeroReference);
    }
    let transmission = slab.sum() / reference;
    Ok(TransmissionReport {
        transmission,
        reflectance: 1.0 - transmission,
    })
}

/// `|a - b| / |b|`.
///
/// A zero `b` gives `inf`, or NaN when `a` is zero as well.
#[must_use]
pub const fn relative_difference(a: Scalar, b: Scalar) -> Scalar {
    (a - b).abs() / b.abs()
}

/// Discrete-time Fourier transform `X(f) = Σ x[q] e^(-j 2π f q)` at each frequency
/// (cycles per step).
#[must_use]
pub fn dft(samples: &[Scalar], frequencies: &[Scalar]) -> Vec<CScalar> {
    frequencies
        .iter()
        .map(|&f| {
            let omega = 2.0 * std::f64::consts::PI * f;
            samples
                .iter()
                .enumerate()
                .map(|(q, &x)| phasor(-omega * q as Scalar) * x)
                .sum()
        })
        .collect()
}

/// Incident and transmitted spectra at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPoint {
    /// Frequency in cycles per step.
    pub frequency: Scalar,
    /// Spectrum of the free-space record.
    pub incident: CScalar,
    /// Spectrum of the slab record.
    pub transmitted: CScalar,
}

impl SpectralPoint {
    /// Complex transfer function `transmitted / incident`.
    #[must_use]
    pub fn ratio(&self) -> CScalar {
        self.transmitted / self.incident
    }

    /// `|transmitted| / |incident|`.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.ratio().norm()
    }
}

/// Transfer function of a slab split into columns for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransmissionSpectrum {
    /// Frequencies in cycles per step.
    pub frequency: Vec<Scalar>,
    /// `|T(f)|`.
    pub magnitude: Vec<Scalar>,
    /// `20 log10 |T(f)|`.
    pub magnitude_db: Vec<Scalar>,
    /// Phase of `T(f)` in degrees.
    pub phase_deg: Vec<Scalar>,
}

impl TransmissionSpectrum {
    /// Collects the transfer function of every point.
    #[must_use]
    pub fn from_points(points: &[SpectralPoint]) -> Self {
        let ratios: Vec<CScalar> = points.iter().map(SpectralPoint::ratio).collect();
        Self {
            frequency: points.iter().map(|p| p.frequency).collect(),
            magnitude: mag(ratios.iter().copied()),
            magnitude_db: mag_db(ratios.iter().copied()),
            phase_deg: phase_deg(ratios),
        }
    }

    /// Number of frequencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// True if the spectrum holds no frequencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

/// Frequency-resolved transmission of `slab` relative to `free_space`.
pub fn spectral_transmission(
    slab: &SensorRecord,
    free_space: &SensorRecord,
    frequencies: &[Scalar],
) -> Result<Vec<SpectralPoint>, AnalysisError> {
    check_lengths(slab, free_space)?;
    let incident = dft(free_space.samples(), frequencies);
    let transmitted = dft(slab.samples(), frequencies);
    Ok(frequencies
        .iter()
        .zip(incident.into_iter().zip(transmitted))
        .map(|(&frequency, (incident, transmitted))| SpectralPoint {
            frequency,
            incident,
            transmitted,
        })
        .collect())
}

fn check_lengths(sample: &SensorRecord, reference: &SensorRecord) -> Result<(), AnalysisError> {
    if sample.len() != reference.len() {
        return Err(AnalysisError::LengthMismatch {
            sample: sample.len(),
            reference: reference.len(),
        });
    }
    Ok(())
}
