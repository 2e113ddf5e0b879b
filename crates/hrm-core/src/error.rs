//! Error handling for ECG heart-rate analysis
//!
//! Fatal conditions abort the whole analysis for one recording; advisory
//! conditions live in [`crate::diagnostics`] instead and never appear here.

use core::fmt;

/// Result type alias for analysis operations
pub type HrmResult<T> = Result<T, AnalysisError>;

/// Fatal error conditions for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// The raw record sequence contained no rows at all
    EmptyInput,

    /// A record had the wrong number of fields and cannot be repaired
    MalformedRecord {
        /// 1-based row number of the offending record
        row: usize,
        /// Number of fields found (expected exactly 2)
        fields: usize,
    },

    /// A record had corrupt field values and the repair preconditions
    /// (interior row, both neighbours well-formed) were not met
    UnrepairableRecord {
        /// 1-based row number of the offending record
        row: usize,
    },

    /// Scaled time values decreased between consecutive samples
    NonMonotonicTime {
        /// 1-based row number where time first went backwards
        row: usize,
    },

    /// Invalid analysis configuration
    InvalidConfig {
        /// Description of the configuration error
        reason: &'static str,
    },
}

impl AnalysisError {
    /// True for errors about input shape rather than field content.
    ///
    /// Callers use this to decide whether retrying with different input
    /// rows is meaningful.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput | AnalysisError::MalformedRecord { .. }
        )
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyInput => {
                write!(f, "Input contained no records")
            }
            AnalysisError::MalformedRecord { row, fields } => {
                write!(
                    f,
                    "Malformed record at row {}: found {} fields, expected 2",
                    row, fields
                )
            }
            AnalysisError::UnrepairableRecord { row } => {
                write!(f, "Unrepairable record at row {}", row)
            }
            AnalysisError::NonMonotonicTime { row } => {
                write!(f, "Time values decrease at row {}", row)
            }
            AnalysisError::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AnalysisError::MalformedRecord { row: 7, fields: 3 };
        let display = format!("{}", error);
        assert!(display.contains("row 7"));
        assert!(display.contains("3 fields"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = AnalysisError::UnrepairableRecord { row: 1 };
        let error2 = AnalysisError::UnrepairableRecord { row: 1 };
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_shape_error_classification() {
        assert!(AnalysisError::EmptyInput.is_shape_error());
        assert!(AnalysisError::MalformedRecord { row: 2, fields: 5 }.is_shape_error());
        assert!(!AnalysisError::UnrepairableRecord { row: 2 }.is_shape_error());
        assert!(!AnalysisError::NonMonotonicTime { row: 4 }.is_shape_error());
    }
}
