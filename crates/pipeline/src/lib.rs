//! # checkdam-pipeline
//!
//! Turns raw weather-station readings and water-level logger scans into
//! per-class daily tables of open-water evaporation, pond stage and pond
//! surface area.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     W["weather readings"] -->|sort, resample| D["daily weather"]
//!     D -->|classify| C{"dry / rainy"}
//!     C -->|"pressure, Rext, N, units, E0"| R["daily records"]
//!     S["stage scans"] -->|"sensor fit, /100, daily mean"| G["daily stage (m)"]
//!     G -->|left join on date| R
//!     R -->|"area fit, truncate"| T["DailyTable x2"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use checkdam_pipeline::{PipelineInputs, SiteConfig, run_pipeline};
//!
//! let site = SiteConfig::new(13.260196, 799.0);
//! let output = run_pipeline(inputs, &site)?;
//! println!("{} dry days, {} rainy days", output.dry.len(), output.rainy.len());
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `config` | [`SiteConfig`] builder |
//! | `record` | [`DailyRecord`] output rows and [`DailyTable`] |
//! | `enrich` | per-class unit conversion and evaporation |
//! | `stage` | sensor calibration, daily stage and joins |
//! | `report` | [`CalibrationReport`] and [`PipelineWarnings`] |
//! | `run` | [`run_pipeline`] |

mod config;
mod enrich;
mod error;
mod record;
mod report;
mod run;
mod stage;

pub use config::SiteConfig;
pub use error::PipelineError;
pub use record::{DailyRecord, DailyTable};
pub use report::{CalibrationReport, PipelineWarnings};
pub use run::{PipelineInputs, PipelineOutput, run_pipeline};

pub use checkdam_classify::DayClass;
