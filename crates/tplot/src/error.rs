//! Error types for the tplot crate

use thiserror::Error;

/// Errors that can occur when building or rendering a figure
#[derive(Error, Debug)]
pub enum PlotError {
    /// Invalid figure configuration or plot style
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// x and y sequences of a plot have different lengths
    #[error("Mismatched lengths: x has {x} values, y has {y} values")]
    MismatchedLength { x: usize, y: usize },

    /// Render requested with no registered plots
    #[error("Nothing to draw: no plots registered")]
    EmptyData,

    /// A scale was used before being fit to a domain
    #[error("Scale used before it was fit")]
    NotFitted,

    /// A categorical scale was asked for a label outside its domain
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    /// A numeric domain too narrow (or not finite) to place ticks on
    #[error("Degenerate domain [{min}, {max}]")]
    DegenerateDomain { min: f64, max: f64 },

    /// A canvas write outside the grid
    #[error("Canvas position ({row}, {col}) outside {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// IO error while writing the rendered figure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Whether this error signals a broken internal invariant rather than
    /// bad caller input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            PlotError::NotFitted
                | PlotError::UnknownCategory(_)
                | PlotError::DegenerateDomain { .. }
                | PlotError::OutOfBounds { .. }
        )
    }
}

/// Result type for plot operations
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlotError::MismatchedLength { x: 2, y: 3 };
        assert_eq!(
            err.to_string(),
            "Mismatched lengths: x has 2 values, y has 3 values"
        );
    }

    #[test]
    fn test_internal_classification() {
        assert!(PlotError::NotFitted.is_internal());
        assert!(PlotError::UnknownCategory("a".into()).is_internal());
        assert!(!PlotError::EmptyData.is_internal());
        assert!(!PlotError::Configuration("width".into()).is_internal());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: PlotError = io_err.into();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
