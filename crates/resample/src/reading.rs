//! Sub-daily telemetry readings.

use chrono::{NaiveDate, NaiveDateTime};

/// Readings that carry a local timestamp.
pub trait Timestamped {
    /// Returns the reading timestamp.
    fn timestamp(&self) -> NaiveDateTime;

    /// Returns the calendar date of the reading.
    fn date(&self) -> NaiveDate {
        self.timestamp().date()
    }
}

/// One weather station reading.
///
/// Units are as logged by the station: °C, %, kPa, km/h, W/mm², mm.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Local timestamp.
    pub timestamp: NaiveDateTime,
    /// Air temperature (°C).
    pub air_temperature: f64,
    /// Relative humidity (%).
    pub humidity: f64,
    /// Station barometric pressure (kPa).
    pub pressure: f64,
    /// Wind speed (km/h).
    pub wind_speed: f64,
    /// Solar radiation, in the station's logged unit.
    pub solar_radiation: f64,
    /// Rainfall collected since the previous reading (mm).
    pub rainfall: f64,
}

impl WeatherReading {
    pub(crate) fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("air_temperature", self.air_temperature),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
            ("wind_speed", self.wind_speed),
            ("solar_radiation", self.solar_radiation),
            ("rainfall", self.rainfall),
        ]
    }
}

impl Timestamped for WeatherReading {
    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// One water-level logger reading.
///
/// `value` is the raw sensor count as read from the logger, or a stage once
/// a calibration has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageReading {
    /// Local timestamp.
    pub timestamp: NaiveDateTime,
    /// Sensor count or stage.
    pub value: f64,
}

impl Timestamped for StageReading {
    fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}
