//! Daily aggregation of sub-daily telemetry.
//!
//! Weather station readings and water-level logger readings arrive every few
//! minutes. This crate buckets them by calendar date and reduces each bucket
//! to one daily row.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌─────────────┐     ┌───────────────┐
//!  │ sorted readings  │────▶│ group by    │────▶│ daily rows    │
//!  │ (timestamp, ...) │     │ date        │     │ (sum / mean)  │
//!  └──────────────────┘     └─────────────┘     └───────────────┘
//! ```
//!
//! | Variable | Daily reduction |
//! |----------|-----------------|
//! | rainfall | sum |
//! | temperature, humidity, pressure, wind, solar | mean |
//! | sunshine hours | nonzero solar readings / readings per hour |
//! | stage | mean |
//!
//! Days with no readings produce no row.
//!
//! # Quick start
//!
//! ```ignore
//! use checkdam_resample::{ResampleConfig, resample_weather, resample_stage};
//!
//! let config = ResampleConfig::new().with_readings_per_hour(2);
//! let daily = resample_weather(&readings, &config)?;
//! let stage = resample_stage(&stage_readings)?;
//! ```

mod aggregate;
mod config;
mod daily;
mod error;
mod reading;

pub use aggregate::{resample_stage, resample_weather, sunshine_hours};
pub use config::ResampleConfig;
pub use daily::{DailyStage, DailyWeather};
pub use error::ResampleError;
pub use reading::{StageReading, Timestamped, WeatherReading};
