//! Partition of daily rows into dry and rainy subsets.

use tracing::debug;

use crate::error::ClassifyError;
use crate::state::{DayClass, Rainfall};

/// Daily rows split by [`DayClass`], each subset in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<T> {
    dry: Vec<T>,
    rainy: Vec<T>,
}

impl<T> Classified<T> {
    /// Returns the rows of one class.
    pub fn get(&self, class: DayClass) -> &[T] {
        match class {
            DayClass::Dry => &self.dry,
            DayClass::Rainy => &self.rainy,
        }
    }

    /// Returns the dry-day rows.
    pub fn dry(&self) -> &[T] {
        &self.dry
    }

    /// Returns the rainy-day rows.
    pub fn rainy(&self) -> &[T] {
        &self.rainy
    }

    /// Total number of rows across both classes.
    pub fn len(&self) -> usize {
        self.dry.len() + self.rainy.len()
    }

    /// Returns `true` if both classes are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the split and returns `(dry, rainy)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.dry, self.rainy)
    }
}

/// Splits daily rows into dry and rainy subsets.
///
/// Every rainfall value is validated before any row is moved, so an error
/// leaves no partial output.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidRainfall`] for the first row whose
/// rainfall is negative or non-finite.
pub fn classify_days<T: Rainfall>(rows: Vec<T>) -> Result<Classified<T>, ClassifyError> {
    let classes = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            DayClass::from_rainfall(row.rainfall()).map_err(|_| ClassifyError::InvalidRainfall {
                index,
                value: row.rainfall(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut dry = Vec::new();
    let mut rainy = Vec::new();
    for (row, class) in rows.into_iter().zip(classes) {
        match class {
            DayClass::Dry => dry.push(row),
            DayClass::Rainy => rainy.push(row),
        }
    }
    debug!(n_dry = dry.len(), n_rainy = rainy.len(), "days classified");
    Ok(Classified { dry, rainy })
}
