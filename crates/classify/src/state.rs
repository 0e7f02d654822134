//! Day classes and the rainfall accessor used to assign them.

use crate::error::ClassifyError;

/// Two-state daily rainfall classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayClass {
    /// No rainfall recorded.
    Dry,
    /// Rainfall above zero.
    Rainy,
}

impl DayClass {
    /// Classifies a daily rainfall total (mm).
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidRainfall`] (with `index` 0) for
    /// negative or non-finite totals. Use [`crate::classify_days`] to get
    /// the row position.
    pub fn from_rainfall(rainfall: f64) -> Result<Self, ClassifyError> {
        if !rainfall.is_finite() || rainfall < 0.0 {
            return Err(ClassifyError::InvalidRainfall {
                index: 0,
                value: rainfall,
            });
        }
        if rainfall > 0.0 {
            Ok(Self::Rainy)
        } else {
            Ok(Self::Dry)
        }
    }

    /// Lower-case name, used in file names and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Rainy => "rainy",
        }
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rows that carry a daily rainfall total (mm).
pub trait Rainfall {
    /// Returns the daily rainfall total.
    fn rainfall(&self) -> f64;
}

impl Rainfall for f64 {
    fn rainfall(&self) -> f64 {
        *self
    }
}
