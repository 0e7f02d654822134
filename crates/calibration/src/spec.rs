//! Unfitted polynomial calibration: degree only, no data yet.

use ndarray::Array1;
use tracing::debug;

use crate::error::CalibrationError;
use crate::model::CalibrationModel;
use crate::pairs::CalibrationPairs;
use crate::qr;

/// An unfitted polynomial calibration of a given degree.
///
/// Create with [`PolynomialSpec::new()`], then call
/// [`PolynomialSpec::fit()`] to obtain a [`CalibrationModel`].
///
/// ```mermaid
/// graph LR
///     A["PolynomialSpec::new(d)"] -->|".fit(&pairs)?"| B["CalibrationModel"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolynomialSpec {
    degree: usize,
}

impl PolynomialSpec {
    /// Creates an unfitted polynomial of degree `degree`.
    ///
    /// # Example
    ///
    /// ```
    /// use checkdam_calibration::PolynomialSpec;
    ///
    /// let spec = PolynomialSpec::new(2);
    /// assert_eq!(spec.degree(), 2);
    /// ```
    pub fn new(degree: usize) -> Self {
        Self { degree }
    }

    /// Returns the polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fits the polynomial to `pairs` by least squares.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CalibrationError::InsufficientPoints`] | `pairs.len() <= degree` |
    /// | [`CalibrationError::ZeroVariance`] | all `y` identical |
    /// | [`CalibrationError::SingularDesign`] | too few distinct `x` for the degree |
    #[tracing::instrument(skip_all, fields(degree = self.degree, n = pairs.len()))]
    pub fn fit(&self, pairs: &CalibrationPairs) -> Result<CalibrationModel, CalibrationError> {
        let n = pairs.len();
        if n <= self.degree {
            return Err(CalibrationError::InsufficientPoints {
                n,
                degree: self.degree,
            });
        }
        if checkdam_stats::total_sum_of_squares(pairs.y()) == 0.0 {
            return Err(CalibrationError::ZeroVariance);
        }

        let design = qr::vandermonde(pairs.x(), self.degree);
        let target = Array1::from(pairs.y().to_vec());
        let coefficients = qr::least_squares(design, target)?.to_vec();

        let domain = pairs
            .domain()
            .ok_or(CalibrationError::InsufficientPoints { n, degree: self.degree })?;
        let model = CalibrationModel::from_fit(*self, coefficients, pairs, domain)?;
        debug!(r_squared = model.r_squared(), "calibration fitted");
        Ok(model)
    }
}
