//! Error types for the checkdam-classify crate.

/// Error type for all fallible operations in the checkdam-classify crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// Returned when a daily rainfall total is negative or non-finite.
    #[error("invalid rainfall at row {index}: {value}")]
    InvalidRainfall {
        /// Row position in the input.
        index: usize,
        /// The rejected rainfall value (mm).
        value: f64,
    },
}
