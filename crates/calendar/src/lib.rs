//! # checkdam-calendar
//!
//! Gregorian date helpers for daily series: a validated day-of-year
//! newtype used by the radiation model, and gap detection over the dates
//! that survive resampling.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"DayOfYear::from_date()"| B["DayOfYear (1..=366)"]
//!     B -->|".get() / .as_f64()"| C["u16 / f64"]
//!     F["observed dates"] -->|"missing_dates()"| G["gap days"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use checkdam_calendar::{DayOfYear, missing_dates};
//!
//! let date = NaiveDate::from_ymd_opt(2014, 5, 14).unwrap();
//! assert_eq!(DayOfYear::from_date(date).get(), 134);
//!
//! let observed = [date, date + chrono::Days::new(3)];
//! assert_eq!(missing_dates(&observed).len(), 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype |
//! | `gaps` | Gap detection |
//! | `error` | Error types |

mod doy;
mod error;
mod gaps;

pub use doy::DayOfYear;
pub use error::CalendarError;
pub use gaps::missing_dates;
