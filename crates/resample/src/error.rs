//! Error types for the checkdam-resample crate.

/// Error type for all fallible operations in the checkdam-resample crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when there are no readings to aggregate.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when a reading is timestamped before its predecessor.
    #[error("readings are not sorted: reading {index} is earlier than the one before it")]
    Unsorted {
        /// Position of the first out-of-order reading.
        index: usize,
    },

    /// Returned when a reading contains NaN or infinity.
    #[error("non-finite {field} at reading {index}")]
    NonFiniteInput {
        /// Name of the offending field.
        field: &'static str,
        /// Position of the offending reading.
        index: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
