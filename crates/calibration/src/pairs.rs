//! Validated `(x, y)` calibration pairs.

use crate::error::CalibrationError;
use crate::model::Domain;

/// Ordered, finite `(x, y)` pairs used to fit a calibration curve.
///
/// Immutable once built. Input order is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationPairs {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl CalibrationPairs {
    /// Builds pairs from parallel `x` and `y` columns.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`CalibrationError::LengthMismatch`] | `x.len() != y.len()` |
    /// | [`CalibrationError::NonFiniteData`] | any value is NaN or infinite |
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, CalibrationError> {
        if x.len() != y.len() {
            return Err(CalibrationError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if let Some(index) = x
            .iter()
            .zip(&y)
            .position(|(a, b)| !a.is_finite() || !b.is_finite())
        {
            return Err(CalibrationError::NonFiniteData { index });
        }
        Ok(Self { x, y })
    }

    /// Builds pairs from an iterator of `(x, y)` tuples.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::NonFiniteData`] for NaN or infinite values.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CalibrationError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Self::new(x, y)
    }

    /// Returns the independent values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the dependent values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Range of `x` covered by the pairs, or `None` if empty.
    pub fn domain(&self) -> Option<Domain> {
        let first = *self.x.first()?;
        let (min, max) = self
            .x
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(Domain::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = CalibrationPairs::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, CalibrationError::LengthMismatch { x: 2, y: 1 });
    }

    #[test]
    fn rejects_nan_with_index() {
        let err = CalibrationPairs::new(vec![1.0, 2.0, 3.0], vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert_eq!(err, CalibrationError::NonFiniteData { index: 1 });
    }

    #[test]
    fn from_pairs_unzips() {
        let pairs = CalibrationPairs::from_pairs([(1.0, 10.0), (2.0, 20.0)]).unwrap();
        assert_eq!(pairs.x(), &[1.0, 2.0]);
        assert_eq!(pairs.y(), &[10.0, 20.0]);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn domain_spans_unsorted_x() {
        let pairs = CalibrationPairs::new(vec![3.0, -1.0, 7.0], vec![0.0, 1.0, 2.0]).unwrap();
        let domain = pairs.domain().unwrap();
        assert_eq!(domain.min(), -1.0);
        assert_eq!(domain.max(), 7.0);
    }

    #[test]
    fn empty_has_no_domain() {
        let pairs = CalibrationPairs::new(vec![], vec![]).unwrap();
        assert!(pairs.is_empty());
        assert!(pairs.domain().is_none());
    }
}
