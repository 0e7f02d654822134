//! Dry/rainy day classification.
//!
//! Daily rows are split on their rainfall total: exactly zero is a dry day,
//! anything above zero is a rainy day. Every row lands in exactly one class
//! and each class keeps the input order.
//!
//! ```ignore
//! use checkdam_classify::{DayClass, Rainfall, classify_days};
//!
//! let split = classify_days(daily_rows)?;
//! for row in split.get(DayClass::Dry) { /* ... */ }
//! ```

mod classified;
mod error;
mod state;

pub use classified::{Classified, classify_days};
pub use error::ClassifyError;
pub use state::{DayClass, Rainfall};
