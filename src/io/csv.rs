//! CSV export of sensor records and field snapshots.

use std::io::{self, Write};

use crate::grid::Grid;
use crate::sensor::SensorRecord;

/// Writes a CSV of the sensor reading over time.
pub fn write_sensor_csv<W: Write>(mut w: W, record: &SensorRecord) -> io::Result<()> {
    writeln!(w, "step,ez")?;
    for (q, ez) in record.iter().enumerate() {
        writeln!(w, "{q},{ez:.16e}")?;
    }
    Ok(())
}

/// Writes a CSV of every cell of `grid`.
pub fn write_field_csv<W: Write>(mut w: W, grid: &Grid) -> io::Result<()> {
    writeln!(w, "cell,ez,hy,eps_r")?;
    for (m, ((ez, hy), eps)) in grid.ez().iter().zip(grid.hy().iter()).zip(grid.eps_r().iter()).enumerate() {
        writeln!(w, "{m},{ez:.16e},{hy:.16e},{eps}")?;
    }
    Ok(())
}

/// Streams `Ez` of every `stride`-th step as long-format CSV (`step,cell,ez`).
///
/// Meant to be driven from a snapshot callback, which cannot return errors: the first
/// write error is kept and every later call is a no-op. [`SnapshotWriter::finish`]
/// reports it.
#[derive(Debug)]
pub struct SnapshotWriter<W: Write> {
    writer: W,
    stride: usize,
    error: Option<io::Error>,
    header_written: bool,
}

impl<W: Write> SnapshotWriter<W> {
    /// Writer keeping every `stride`-th step (a stride of zero is treated as one).
    pub fn new(writer: W, stride: usize) -> Self {
        Self {
            writer,
            stride: stride.max(1),
            error: None,
            header_written: false,
        }
    }

    /// Appends the snapshot of step `q` if it falls on the stride.
    pub fn record(&mut self, q: usize, grid: &Grid) {
        if self.error.is_some() || !q.is_multiple_of(self.stride) {
            return;
        }
        if let Err(e) = self.write_rows(q, grid) {
            self.error = Some(e);
        }
    }

    /// Flushes and returns the inner writer, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn write_rows(&mut self, q: usize, grid: &Grid) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.writer, "step,cell,ez")?;
            self.header_written = true;
        }
        for (m, ez) in grid.ez().iter().enumerate() {
            writeln!(self.writer, "{q},{m},{ez:.16e}")?;
        }
        Ok(())
    }
}
