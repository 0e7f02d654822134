//! End-to-end orchestration.

use std::collections::BTreeMap;

use checkdam_calendar::missing_dates;
use checkdam_calibration::{CalibrationModel, CalibrationPairs, PolynomialSpec};
use checkdam_classify::{DayClass, Rainfall, classify_days};
use checkdam_pet::air_pressure_from_elevation;
use checkdam_resample::{DailyWeather, StageReading, WeatherReading, resample_weather};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::enrich::enrich;
use crate::error::PipelineError;
use crate::record::DailyTable;
use crate::report::{CalibrationReport, PipelineWarnings};
use crate::stage::{apply_area, daily_stage, join_stage};

/// Everything a run reads, already parsed.
#[derive(Debug, Clone)]
pub struct PipelineInputs {
    /// Weather-station readings in any order.
    pub weather: Vec<WeatherReading>,
    /// Logger scans carrying raw sensor counts, in any order.
    pub stage: Vec<StageReading>,
    /// Raw count to stage (cm) pairs.
    pub sensor_pairs: CalibrationPairs,
    /// Stage (m) to surface area (m²) pairs.
    pub area_pairs: CalibrationPairs,
}

/// Result of [`run_pipeline`].
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Dry days from the first day with stage onwards.
    pub dry: DailyTable,
    /// Rainy days from the first day with stage onwards.
    pub rainy: DailyTable,
    /// Raw count to stage (cm) fit.
    pub sensor_model: CalibrationModel,
    /// Stage (m) to surface area (m²) fit.
    pub area_model: CalibrationModel,
    /// Data-quality counts collected during the run.
    pub warnings: PipelineWarnings,
}

impl PipelineOutput {
    /// Builds the serializable run summary.
    pub fn report(&self) -> CalibrationReport {
        CalibrationReport {
            sensor: self.sensor_model.clone(),
            area: self.area_model.clone(),
            n_dry_days: self.dry.len(),
            n_rainy_days: self.rainy.len(),
            warnings: self.warnings.clone(),
        }
    }
}

struct WeatherDay(DailyWeather);

impl Rainfall for WeatherDay {
    fn rainfall(&self) -> f64 {
        self.0.rainfall
    }
}

/// Runs the full pipeline for one site.
///
/// 1. Sort weather readings (stable) and resample to daily rows.
/// 2. Split days into dry and rainy.
/// 3. Per class: site pressure, Rext, daylight hours, unit conversion and
///    open-water evaporation.
/// 4. Fit the sensor calibration, convert every scan to stage (m) and
///    average per day.
/// 5. Left-join daily stage onto both classes by date.
/// 6. Fit the stage-area calibration and fill pond area where stage exists.
/// 7. Drop each class's rows before its first day with stage.
///
/// Identical inputs give identical outputs.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`PipelineError::InvalidConfig`] | `site` fails validation |
/// | [`PipelineError::Resample`] | no, unsortable or non-finite readings |
/// | [`PipelineError::Classify`] | negative daily rainfall |
/// | [`PipelineError::Pet`] | radiation or evaporation inputs out of domain |
/// | [`PipelineError::SensorCalibration`] | count-stage pairs cannot be fitted |
/// | [`PipelineError::AreaCalibration`] | stage-area pairs cannot be fitted |
#[tracing::instrument(
    skip_all,
    fields(n_weather = inputs.weather.len(), n_stage = inputs.stage.len())
)]
pub fn run_pipeline(
    inputs: PipelineInputs,
    site: &SiteConfig,
) -> Result<PipelineOutput, PipelineError> {
    site.validate()?;
    let PipelineInputs {
        mut weather,
        stage,
        sensor_pairs,
        area_pairs,
    } = inputs;

    weather.sort_by_key(|r| r.timestamp);
    let daily = resample_weather(&weather, site.resample())?;

    let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
    let missing_weather_days = missing_dates(&dates);
    if !missing_weather_days.is_empty() {
        warn!(n = missing_weather_days.len(), "days without weather readings");
    }

    let split = classify_days(daily.into_iter().map(WeatherDay).collect())?;
    let (dry, rainy) = split.into_parts();
    let dry: Vec<DailyWeather> = dry.into_iter().map(|d| d.0).collect();
    let rainy: Vec<DailyWeather> = rainy.into_iter().map(|d| d.0).collect();

    let air_pressure = air_pressure_from_elevation(site.elevation())?;
    let mut dry = DailyTable::new(DayClass::Dry, enrich(&dry, site, air_pressure)?);
    let mut rainy = DailyTable::new(DayClass::Rainy, enrich(&rainy, site, air_pressure)?);

    let sensor_model = PolynomialSpec::new(site.sensor_degree())
        .fit(&sensor_pairs)
        .map_err(PipelineError::SensorCalibration)?;
    info!(
        r_squared = sensor_model.r_squared(),
        "sensor calibration fitted"
    );
    let series = daily_stage(&stage, &sensor_model, site.stage_divisor())?;
    let stage_by_date: BTreeMap<NaiveDate, f64> =
        series.daily.iter().map(|d| (d.date, d.stage)).collect();
    join_stage(&mut dry, &stage_by_date);
    join_stage(&mut rainy, &stage_by_date);

    let area_model = PolynomialSpec::new(site.area_degree())
        .fit(&area_pairs)
        .map_err(PipelineError::AreaCalibration)?;
    info!(r_squared = area_model.r_squared(), "area calibration fitted");
    let area_out_of_domain = apply_area(&mut dry, &area_model) + apply_area(&mut rainy, &area_model);
    if area_out_of_domain > 0 {
        warn!(
            n = area_out_of_domain,
            "daily stages outside stage-area calibration range"
        );
    }

    for table in [&mut dry, &mut rainy] {
        table.truncate_to_first_stage();
        if table.is_empty() {
            warn!(class = %table.class(), "no days with stage data");
        }
    }
    info!(
        n_dry = dry.len(),
        n_rainy = rainy.len(),
        "daily tables ready"
    );

    Ok(PipelineOutput {
        dry,
        rainy,
        sensor_model,
        area_model,
        warnings: PipelineWarnings {
            sensor_out_of_domain: series.out_of_domain,
            area_out_of_domain,
            missing_weather_days,
        },
    })
}
