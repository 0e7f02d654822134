//! Site configuration for a pipeline run.

use checkdam_resample::ResampleConfig;

use crate::error::PipelineError;

/// Site constants and fit settings for one check dam.
///
/// # Example
///
/// ```
/// use checkdam_pipeline::SiteConfig;
///
/// let site = SiteConfig::new(13.260196, 799.0).with_area_degree(2);
/// assert!(site.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    latitude: f64,
    elevation: f64,
    sensor_degree: usize,
    area_degree: usize,
    stage_divisor: f64,
    resample: ResampleConfig,
}

impl SiteConfig {
    /// Creates a configuration for a site at `latitude` (degrees, negative
    /// south) and `elevation` (m above sea level).
    ///
    /// Defaults: `sensor_degree = 1`, `area_degree = 2`,
    /// `stage_divisor = 100.0` (cm to m), default [`ResampleConfig`].
    pub fn new(latitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            elevation,
            sensor_degree: 1,
            area_degree: 2,
            stage_divisor: 100.0,
            resample: ResampleConfig::new(),
        }
    }

    /// Sets the degree of the sensor count to stage polynomial.
    pub fn with_sensor_degree(mut self, d: usize) -> Self {
        self.sensor_degree = d;
        self
    }

    /// Sets the degree of the stage to area polynomial.
    pub fn with_area_degree(mut self, d: usize) -> Self {
        self.area_degree = d;
        self
    }

    /// Sets the divisor applied to calibrated stage before daily averaging.
    pub fn with_stage_divisor(mut self, divisor: f64) -> Self {
        self.stage_divisor = divisor;
        self
    }

    /// Sets the daily resampling configuration.
    pub fn with_resample(mut self, resample: ResampleConfig) -> Self {
        self.resample = resample;
        self
    }

    /// Returns the site latitude (degrees).
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the site elevation (m).
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Returns the sensor calibration degree.
    pub fn sensor_degree(&self) -> usize {
        self.sensor_degree
    }

    /// Returns the area calibration degree.
    pub fn area_degree(&self) -> usize {
        self.area_degree
    }

    /// Returns the stage divisor.
    pub fn stage_divisor(&self) -> f64 {
        self.stage_divisor
    }

    /// Returns the resampling configuration.
    pub fn resample(&self) -> &ResampleConfig {
        &self.resample
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PipelineError::InvalidConfig {
                reason: format!("latitude must be within -90..=90, got {}", self.latitude),
            });
        }
        if !self.elevation.is_finite() {
            return Err(PipelineError::InvalidConfig {
                reason: format!("elevation must be finite, got {}", self.elevation),
            });
        }
        if !self.stage_divisor.is_finite() || self.stage_divisor <= 0.0 {
            return Err(PipelineError::InvalidConfig {
                reason: format!(
                    "stage_divisor must be finite and positive, got {}",
                    self.stage_divisor
                ),
            });
        }
        self.resample
            .validate()
            .map_err(|e| PipelineError::InvalidConfig {
                reason: e.to_string(),
            })
    }
}
