//! # checkdam-io
//!
//! Read weather-station exports, water-level logger blocks and calibration
//! pair tables from CSV, and write daily tables and reports back out.
//! Bridges the file formats into the typed readings of `checkdam-resample`.
//!
//! | Reader | Layout |
//! |--------|--------|
//! | [`read_weather_csv`] | header row, `Date` (`%d/%m/%y`) + `Time` + named value columns |
//! | [`read_stage_logger`] | preamble lines, header, `scan no, date, time, raw value, calibrated value` |
//! | [`read_pairs_csv`] | header row, two named numeric columns |
//!
//! Row-level problems (unparseable cells, bad timestamps) are accumulated
//! and reported together as one [`IoError::Validation`].

mod error;
mod pairs;
mod stage;
mod validate;
mod weather;
mod writer;

pub use error::IoError;
pub use pairs::read_pairs_csv;
pub use stage::{StageLoggerConfig, read_stage_blocks, read_stage_logger};
pub use weather::{WeatherColumns, read_weather_csv};
pub use writer::{write_csv, write_json};
