//! Fitted calibration curves.

use serde::Serialize;

use crate::error::CalibrationError;
use crate::pairs::CalibrationPairs;
use crate::spec::PolynomialSpec;

/// Closed interval of `x` values a calibration was fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    pub(crate) fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `x` lies within `[min, max]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// A fitted polynomial produced by [`PolynomialSpec::fit()`].
///
/// Coefficients are stored highest degree first, so `coefficients()[0]`
/// multiplies `x^degree` and the last entry is the intercept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationModel {
    degree: usize,
    coefficients: Vec<f64>,
    r_squared: f64,
    domain: Domain,
    n_points: usize,
}

impl CalibrationModel {
    pub(crate) fn from_fit(
        spec: PolynomialSpec,
        coefficients: Vec<f64>,
        pairs: &CalibrationPairs,
        domain: Domain,
    ) -> Result<Self, CalibrationError> {
        let mut model = Self {
            degree: spec.degree(),
            coefficients,
            r_squared: f64::NAN,
            domain,
            n_points: pairs.len(),
        };
        let fitted = model.predict_many(pairs.x());
        model.r_squared = checkdam_stats::coefficient_of_determination(pairs.y(), &fitted)
            .ok_or(CalibrationError::ZeroVariance)?;
        Ok(model)
    }

    /// Polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// In-sample coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Range of `x` the model was fitted on.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of pairs used in the fit.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns `true` if `x` lies within the fitted domain.
    ///
    /// Prediction outside the domain is allowed; callers decide whether to
    /// warn.
    pub fn contains(&self, x: f64) -> bool {
        self.domain.contains(x)
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    pub fn predict(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluates the polynomial at every element of `xs`.
    pub fn predict_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }
}
