//! Day-of-year newtype for the Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Day-of-year in the Gregorian calendar (1..=366).
///
/// Leap years have 366 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

impl DayOfYear {
    /// Creates a new `DayOfYear` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the day-of-year of a calendar date.
    ///
    /// Infallible: chrono guarantees an ordinal in 1..=366.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the day-of-year as `f64` for use in trigonometric formulas.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}
