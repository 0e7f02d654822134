//! Daily aggregate rows.

use chrono::NaiveDate;

/// One day of aggregated weather.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWeather {
    /// Calendar date.
    pub date: NaiveDate,
    /// Mean air temperature (°C).
    pub air_temperature: f64,
    /// Mean relative humidity (%).
    pub humidity: f64,
    /// Mean station pressure (kPa).
    pub pressure: f64,
    /// Mean wind speed (km/h).
    pub wind_speed: f64,
    /// Mean solar radiation, in the station's logged unit.
    pub solar_radiation: f64,
    /// Total rainfall (mm).
    pub rainfall: f64,
    /// Whole hours with nonzero solar radiation.
    pub sunshine_hours: u32,
    /// Number of readings that went into this day.
    pub n_readings: usize,
}

/// One day of mean stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyStage {
    /// Calendar date.
    pub date: NaiveDate,
    /// Mean of the day's stage values.
    pub stage: f64,
    /// Number of readings that went into this day.
    pub n_readings: usize,
}
