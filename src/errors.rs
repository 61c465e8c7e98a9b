//! Shared error types used across submodules.

use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::grid::GridError;
use crate::simulation::SimulationError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum EmFdtdError {
    /// Wraps grid allocation and permittivity errors.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Wraps simulation-related errors.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// Wraps errors raised while comparing sensor records.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    /// Raised when exporting results fails.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_mark_lifts_module_errors() {
        fn build() -> Result<(), EmFdtdError> {
            crate::grid::Grid::new(0)?;
            Ok(())
        }
        let err = build().unwrap_err();
        assert!(matches!(err, EmFdtdError::Grid(GridError::EmptyGrid)));
        assert_eq!(err.to_string(), "grid must contain at least one cell");
    }
}
