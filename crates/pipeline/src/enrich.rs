//! Per-class enrichment: unit conversion, radiation and evaporation.

use checkdam_calendar::DayOfYear;
use checkdam_pet::{
    EvaporationInputs, daylight_hours, extraterrestrial_radiation, kmph_to_mps,
    open_water_evaporation, solar_to_daily_energy,
};
use checkdam_resample::DailyWeather;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::PipelineError;
use crate::record::DailyRecord;

/// Derives the evaporation columns for one class of days.
///
/// `air_pressure` (Pa) is the site constant. An empty class yields no rows.
pub(crate) fn enrich(
    days: &[DailyWeather],
    site: &SiteConfig,
    air_pressure: f64,
) -> Result<Vec<DailyRecord>, PipelineError> {
    if days.is_empty() {
        return Ok(Vec::new());
    }

    let doys: Vec<DayOfYear> = days.iter().map(|d| DayOfYear::from_date(d.date)).collect();
    let rext = extraterrestrial_radiation(site.latitude(), &doys)?;
    let daylight = daylight_hours(site.latitude(), &doys)?;

    let temperature: Vec<f64> = days.iter().map(|d| d.air_temperature).collect();
    let humidity: Vec<f64> = days.iter().map(|d| d.humidity).collect();
    let pressure = vec![air_pressure; days.len()];
    let solar: Vec<f64> = days
        .iter()
        .map(|d| solar_to_daily_energy(d.solar_radiation))
        .collect();
    let sunshine: Vec<f64> = days.iter().map(|d| f64::from(d.sunshine_hours)).collect();
    let wind: Vec<f64> = days.iter().map(|d| kmph_to_mps(d.wind_speed)).collect();

    let evaporation = open_water_evaporation(&EvaporationInputs {
        air_temperature: &temperature,
        relative_humidity: &humidity,
        air_pressure: &pressure,
        solar_radiation: &solar,
        sunshine_hours: &sunshine,
        daylight_hours: &daylight,
        extraterrestrial_radiation: &rext,
        wind_speed: &wind,
        elevation: site.elevation(),
    })?;

    let records: Vec<DailyRecord> = days
        .iter()
        .enumerate()
        .map(|(i, d)| DailyRecord {
            date: d.date,
            air_temperature: d.air_temperature,
            humidity: d.humidity,
            station_pressure_kpa: d.pressure,
            wind_speed_kmph: d.wind_speed,
            solar_radiation: d.solar_radiation,
            rainfall: d.rainfall,
            air_pressure_pa: air_pressure,
            sunshine_hours: d.sunshine_hours,
            daylight_hours: daylight[i],
            rext_j_m2: rext[i],
            wind_speed_mps: wind[i],
            solar_radiation_j_m2_day: solar[i],
            evaporation_mm_day: evaporation[i],
            stage_m: None,
            area_m2: None,
        })
        .collect();
    debug!(n_days = records.len(), "class enriched");
    Ok(records)
}
