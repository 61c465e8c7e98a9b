//! Point sensor on `Ez` and the output sequence it fills.

use std::ops::Index;

use crate::grid::Grid;
use crate::math::Scalar;

/// Samples `Ez` at a fixed cell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    location: usize,
}

impl Sensor {
    /// Sensor at cell `location`. The runner checks it against the grid before stepping.
    #[must_use]
    pub const fn new(location: usize) -> Self {
        Self { location }
    }

    /// Sampled cell.
    #[must_use]
    pub const fn location(&self) -> usize {
        self.location
    }

    /// True if the sensor cell exists on `grid`.
    #[must_use]
    pub fn fits(&self, grid: &Grid) -> bool {
        self.location < grid.size()
    }

    /// Reads `Ez` at the sensor cell.
    ///
    /// # Panics
    ///
    /// Panics if the sensor lies outside `grid`; see [`Sensor::fits`].
    #[must_use]
    pub fn read(&self, grid: &Grid) -> Scalar {
        grid.ez()[self.location]
    }

    /// Appends the current reading to `record`.
    ///
    /// # Panics
    ///
    /// Panics if the sensor lies outside `grid`; see [`Sensor::fits`].
    pub fn capture(&self, grid: &Grid, record: &mut SensorRecord) {
        record.samples.push(self.read(grid));
    }
}

/// `Ez` at the sensor, one sample per completed time step in time order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorRecord {
    samples: Vec<Scalar>,
}

impl SensorRecord {
    /// Empty record with room for `steps` samples.
    #[must_use]
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            samples: Vec::with_capacity(steps),
        }
    }

    /// Recorded samples; index `q` holds the reading after step `q`.
    #[must_use]
    pub const fn samples(&self) -> &[Scalar] {
        self.samples.as_slice()
    }

    /// Total captured samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum of every sample.
    #[must_use]
    pub fn sum(&self) -> Scalar {
        self.samples.iter().sum()
    }

    /// Index of the first sample that is not exactly zero.
    #[must_use]
    pub fn first_nonzero(&self) -> Option<usize> {
        self.samples.iter().position(|&v| v != 0.0)
    }

    /// Iterator over the samples.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.samples.iter()
    }

    /// Consumes the record and returns the samples.
    #[must_use]
    pub fn into_vec(self) -> Vec<Scalar> {
        self.samples
    }
}

impl From<Vec<Scalar>> for SensorRecord {
    fn from(samples: Vec<Scalar>) -> Self {
        Self { samples }
    }
}

impl Index<usize> for SensorRecord {
    type Output = Scalar;

    fn index(&self, q: usize) -> &Scalar {
        &self.samples[q]
    }
}

impl<'a> IntoIterator for &'a SensorRecord {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn capture_appends_without_touching_grid() {
        let mut grid = Grid::new(4).expect("valid size");
        crate::update::inject_source(&mut grid, 0.5);
        let before = grid.clone();

        let sensor = Sensor::new(0);
        let mut record = SensorRecord::with_capacity(2);
        sensor.capture(&grid, &mut record);
        sensor.capture(&grid, &mut record);

        assert_eq!(record.samples(), &[0.5, 0.5]);
        assert_eq!(grid, before);
    }

    #[test]
    fn fits_checks_grid_bounds() {
        let grid = Grid::new(4).expect("valid size");
        assert!(Sensor::new(3).fits(&grid));
        assert!(!Sensor::new(4).fits(&grid));
    }

    #[test]
    #[should_panic]
    fn capture_outside_grid_panics() {
        let grid = Grid::new(4).expect("valid size");
        let mut record = SensorRecord::default();
        Sensor::new(9).capture(&grid, &mut record);
    }

    #[test]
    fn record_statistics() {
        let record = SensorRecord::from(vec![0.0, 0.0, 0.25, 0.75]);
        assert_eq!(record.len(), 4);
        assert_eq!(record.first_nonzero(), Some(2));
        assert_relative_eq!(record.sum(), 1.0);
        assert_eq!(record[3], 0.75);
        assert!(SensorRecord::default().first_nonzero().is_none());
    }
}
