//! Error types for the checkdam-calibration crate.

/// Error type for all fallible operations in the checkdam-calibration crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    /// Returned when there are not more pairs than the polynomial degree.
    #[error("insufficient points: got {n} pairs, need more than degree {degree}")]
    InsufficientPoints {
        /// Number of pairs provided.
        n: usize,
        /// Requested polynomial degree.
        degree: usize,
    },

    /// Returned when every `y` is identical, so R² is undefined.
    #[error("calibration targets are constant (zero variance)")]
    ZeroVariance,

    /// Returned when the design matrix is rank-deficient (e.g. all `x` equal).
    #[error("design matrix is rank-deficient at column {column}")]
    SingularDesign {
        /// Column of the Vandermonde matrix (0 is the highest power).
        column: usize,
    },

    /// Returned when a pair contains NaN or infinity.
    #[error("calibration pair {index} is non-finite")]
    NonFiniteData {
        /// Position of the offending pair.
        index: usize,
    },

    /// Returned when the `x` and `y` columns differ in length.
    #[error("length mismatch: {x} x values, {y} y values")]
    LengthMismatch {
        /// Number of `x` values.
        x: usize,
        /// Number of `y` values.
        y: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_points() {
        let err = CalibrationError::InsufficientPoints { n: 2, degree: 2 };
        assert_eq!(
            err.to_string(),
            "insufficient points: got 2 pairs, need more than degree 2"
        );
    }

    #[test]
    fn display_zero_variance() {
        assert_eq!(
            CalibrationError::ZeroVariance.to_string(),
            "calibration targets are constant (zero variance)"
        );
    }

    #[test]
    fn display_singular_design() {
        let err = CalibrationError::SingularDesign { column: 1 };
        assert_eq!(err.to_string(), "design matrix is rank-deficient at column 1");
    }

    #[test]
    fn display_non_finite() {
        let err = CalibrationError::NonFiniteData { index: 3 };
        assert_eq!(err.to_string(), "calibration pair 3 is non-finite");
    }

    #[test]
    fn display_length_mismatch() {
        let err = CalibrationError::LengthMismatch { x: 4, y: 5 };
        assert_eq!(err.to_string(), "length mismatch: 4 x values, 5 y values");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalibrationError>();
    }
}
