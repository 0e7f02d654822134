//! Configuration for daily aggregation.

use crate::error::ResampleError;

/// Configuration for the daily aggregator.
///
/// # Example
///
/// ```
/// use checkdam_resample::ResampleConfig;
///
/// let config = ResampleConfig::new().with_readings_per_hour(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleConfig {
    readings_per_hour: u32,
}

impl ResampleConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `readings_per_hour = 2` (a 30-minute station interval).
    pub fn new() -> Self {
        Self {
            readings_per_hour: 2,
        }
    }

    /// Sets the number of weather readings logged per hour. Sunshine hours
    /// are the count of nonzero solar readings divided by this value.
    pub fn with_readings_per_hour(mut self, n: u32) -> Self {
        self.readings_per_hour = n;
        self
    }

    /// Returns the number of readings per hour.
    pub fn readings_per_hour(&self) -> u32 {
        self.readings_per_hour
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.readings_per_hour == 0 {
            return Err(ResampleError::InvalidConfig {
                reason: "readings_per_hour must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self::new()
    }
}
