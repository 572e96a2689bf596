// src/types.rs

use thiserror::Error;

/// Error taxonomy for trajectory acquisition, parsing, and projection.
///
/// Every variant is fatal to the current invocation: downstream channel
/// extraction is positional, so a partially parsed or silently shifted
/// trajectory would mislabel every plotted series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    /// A retained record contained a field that is not a finite decimal
    /// number (includes empty fields, `NaN` and infinities).
    #[error("record {record}: field '{token}' is not a finite number")]
    Parse { record: usize, token: String },

    /// Two retained records disagree on field count.
    #[error("record {record}: expected {expected} fields, found {found}")]
    Schema {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// A channel projection requested a field index outside the common
    /// record width. Caller/config defect, not a data defect.
    #[error("channel index {index} out of range for record width {width}")]
    Index { index: usize, width: usize },

    /// The trajectory source could not be started or produced no output.
    #[error("trajectory source unavailable: {0}")]
    SourceUnavailable(String),
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

// src/types.rs
