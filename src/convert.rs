//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use checkdam_calibration::CalibrationPairs;
use checkdam_io::{StageLoggerConfig, WeatherColumns};
use checkdam_pipeline::SiteConfig;
use checkdam_resample::ResampleConfig;

/// Builds a validated [`SiteConfig`] from the `[site]`, `[calibration]` and
/// `[resample]` tables.
pub fn build_site_config(config: &CheckdamConfig) -> Result<SiteConfig> {
    let resample = ResampleConfig::new().with_readings_per_hour(config.resample.readings_per_hour);
    let site = SiteConfig::new(config.site.latitude, config.site.elevation)
        .with_sensor_degree(config.calibration.sensor_degree)
        .with_area_degree(config.calibration.area_degree)
        .with_stage_divisor(config.calibration.stage_divisor)
        .with_resample(resample);
    site.validate().context("invalid [site] / [calibration] / [resample] settings")?;
    Ok(site)
}

/// Builds [`WeatherColumns`] from the `[columns]` table.
pub fn build_weather_columns(columns: &ColumnsToml) -> WeatherColumns {
    WeatherColumns::default()
        .with_date(&columns.date)
        .with_time(&columns.time)
        .with_air_temperature(&columns.air_temperature)
        .with_humidity(&columns.humidity)
        .with_pressure(&columns.pressure)
        .with_wind_speed(&columns.wind_speed)
        .with_solar_radiation(&columns.solar_radiation)
        .with_rainfall(&columns.rainfall)
}

/// Builds a [`StageLoggerConfig`] from the `[input]` table.
pub fn build_logger_config(input: &InputToml) -> StageLoggerConfig {
    StageLoggerConfig::default().with_skip_rows(input.stage_skip_rows)
}

/// Converts inline `[x, y]` pairs into [`CalibrationPairs`].
pub fn parse_inline_pairs(pairs: &[[f64; 2]]) -> Result<CalibrationPairs> {
    CalibrationPairs::from_pairs(pairs.iter().map(|&[x, y]| (x, y)))
        .context("invalid inline calibration pairs")
}

/// Where the sensor calibration pairs come from.
#[derive(Debug, PartialEq)]
pub enum SensorPairsSource<'a> {
    File(&'a std::path::Path),
    Inline(&'a [[f64; 2]]),
}

/// Resolves the sensor pair source.
///
/// Exactly one of `[input].sensor_calibration` or
/// `[calibration].sensor_pairs` must be set.
pub fn sensor_pairs_source(config: &CheckdamConfig) -> Result<SensorPairsSource<'_>> {
    match (
        config.input.sensor_calibration.as_deref(),
        config.calibration.sensor_pairs.as_deref(),
    ) {
        (Some(path), None) => Ok(SensorPairsSource::File(path)),
        (None, Some(pairs)) => Ok(SensorPairsSource::Inline(pairs)),
        (Some(_), Some(_)) => bail!(
            "sensor calibration must come from exactly one of [input].sensor_calibration \
             or [calibration].sensor_pairs, got both"
        ),
        (None, None) => bail!(
            "sensor calibration must come from exactly one of [input].sensor_calibration \
             or [calibration].sensor_pairs, got neither"
        ),
    }
}
