//! Run summary: fitted calibrations and data-quality warnings.

use checkdam_calibration::CalibrationModel;
use chrono::NaiveDate;
use serde::Serialize;

/// Non-fatal data-quality findings from a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineWarnings {
    /// Logger scans whose raw count lies outside the sensor calibration
    /// pairs.
    pub sensor_out_of_domain: usize,
    /// Daily stages outside the stage-area calibration pairs.
    pub area_out_of_domain: usize,
    /// Calendar days with no weather readings between the first and last
    /// weather date.
    pub missing_weather_days: Vec<NaiveDate>,
}

impl PipelineWarnings {
    /// Returns `true` if nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.sensor_out_of_domain == 0
            && self.area_out_of_domain == 0
            && self.missing_weather_days.is_empty()
    }
}

/// Serializable summary of both calibrations and the run's warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationReport {
    pub sensor: CalibrationModel,
    pub area: CalibrationModel,
    pub n_dry_days: usize,
    pub n_rainy_days: usize,
    pub warnings: PipelineWarnings,
}
