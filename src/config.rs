use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level checkdam configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckdamConfig {
    /// Site constants.
    pub site: SiteToml,

    /// Input files.
    pub input: InputToml,

    /// Weather CSV column names.
    #[serde(default)]
    pub columns: ColumnsToml,

    /// Calibration settings.
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Resample settings.
    #[serde(default)]
    pub resample: ResampleToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl CheckdamConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteToml {
    pub latitude: f64,
    pub elevation: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub weather: PathBuf,
    /// CSV of raw count / stage (cm) pairs; alternative to inline pairs.
    #[serde(default)]
    pub sensor_calibration: Option<PathBuf>,
    pub stage_blocks: Vec<PathBuf>,
    pub stage_area: PathBuf,
    #[serde(default = "default_stage_skip_rows")]
    pub stage_skip_rows: usize,
}

fn default_stage_skip_rows() -> usize {
    9
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnsToml {
    #[serde(default = "default_date_col")]
    pub date: String,
    #[serde(default = "default_time_col")]
    pub time: String,
    #[serde(default = "default_air_temperature_col")]
    pub air_temperature: String,
    #[serde(default = "default_humidity_col")]
    pub humidity: String,
    #[serde(default = "default_pressure_col")]
    pub pressure: String,
    #[serde(default = "default_wind_speed_col")]
    pub wind_speed: String,
    #[serde(default = "default_solar_radiation_col")]
    pub solar_radiation: String,
    #[serde(default = "default_rainfall_col")]
    pub rainfall: String,
}

impl Default for ColumnsToml {
    fn default() -> Self {
        Self {
            date: default_date_col(),
            time: default_time_col(),
            air_temperature: default_air_temperature_col(),
            humidity: default_humidity_col(),
            pressure: default_pressure_col(),
            wind_speed: default_wind_speed_col(),
            solar_radiation: default_solar_radiation_col(),
            rainfall: default_rainfall_col(),
        }
    }
}

fn default_date_col() -> String {
    "Date".to_string()
}
fn default_time_col() -> String {
    "Time".to_string()
}
fn default_air_temperature_col() -> String {
    "Air Temperature (C)".to_string()
}
fn default_humidity_col() -> String {
    "Humidity (%)".to_string()
}
fn default_pressure_col() -> String {
    "Barometric Pressure (KPa)".to_string()
}
fn default_wind_speed_col() -> String {
    "Wind Speed (kmph)".to_string()
}
fn default_solar_radiation_col() -> String {
    "Solar Radiation (W/mm2)".to_string()
}
fn default_rainfall_col() -> String {
    "Rain Collection (mm)".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_sensor_degree")]
    pub sensor_degree: usize,
    #[serde(default = "default_area_degree")]
    pub area_degree: usize,
    #[serde(default = "default_stage_divisor")]
    pub stage_divisor: f64,
    /// Inline `[count, stage_cm]` pairs; alternative to `[input].sensor_calibration`.
    #[serde(default)]
    pub sensor_pairs: Option<Vec<[f64; 2]>>,
    #[serde(default = "default_sensor_x_col")]
    pub sensor_x_col: String,
    #[serde(default = "default_sensor_y_col")]
    pub sensor_y_col: String,
    #[serde(default = "default_area_x_col")]
    pub area_x_col: String,
    #[serde(default = "default_area_y_col")]
    pub area_y_col: String,
}

impl Default for CalibrationToml {
    fn default() -> Self {
        Self {
            sensor_degree: default_sensor_degree(),
            area_degree: default_area_degree(),
            stage_divisor: default_stage_divisor(),
            sensor_pairs: None,
            sensor_x_col: default_sensor_x_col(),
            sensor_y_col: default_sensor_y_col(),
            area_x_col: default_area_x_col(),
            area_y_col: default_area_y_col(),
        }
    }
}

fn default_sensor_degree() -> usize {
    1
}
fn default_area_degree() -> usize {
    2
}
fn default_stage_divisor() -> f64 {
    100.0
}
fn default_sensor_x_col() -> String {
    "raw value".to_string()
}
fn default_sensor_y_col() -> String {
    "stage (cm)".to_string()
}
fn default_area_x_col() -> String {
    "Z (m)".to_string()
}
fn default_area_y_col() -> String {
    "Area (m2)".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResampleToml {
    #[serde(default = "default_readings_per_hour")]
    pub readings_per_hour: u32,
}

impl Default for ResampleToml {
    fn default() -> Self {
        Self {
            readings_per_hour: default_readings_per_hour(),
        }
    }
}

fn default_readings_per_hour() -> u32 {
    2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_dry_file")]
    pub dry_file: String,
    #[serde(default = "default_rainy_file")]
    pub rainy_file: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            dry_file: default_dry_file(),
            rainy_file: default_rainy_file(),
            report_file: default_report_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_dry_file() -> String {
    "dry_stage_weather.csv".to_string()
}
fn default_rainy_file() -> String {
    "rain_stage_weather.csv".to_string()
}
fn default_report_file() -> String {
    "calibration_report.json".to_string()
}
