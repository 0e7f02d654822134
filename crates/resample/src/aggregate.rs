//! Date-bucketed reductions of sorted readings.

use tracing::debug;

use crate::config::ResampleConfig;
use crate::daily::{DailyStage, DailyWeather};
use crate::error::ResampleError;
use crate::reading::{StageReading, Timestamped, WeatherReading};

/// Resamples sorted weather readings to one row per calendar date.
///
/// Rainfall is summed, sunshine hours are counted with [`sunshine_hours`],
/// and every other variable is averaged. Dates without readings are
/// skipped. Readings sharing a timestamp are all kept.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ResampleError::InvalidConfig`] | `config` fails validation |
/// | [`ResampleError::EmptyData`] | `readings` is empty |
/// | [`ResampleError::Unsorted`] | timestamps decrease anywhere |
/// | [`ResampleError::NonFiniteInput`] | any value is NaN or infinite |
#[tracing::instrument(skip_all, fields(n_readings = readings.len()))]
pub fn resample_weather(
    readings: &[WeatherReading],
    config: &ResampleConfig,
) -> Result<Vec<DailyWeather>, ResampleError> {
    config.validate()?;
    check_sorted(readings)?;
    for (index, reading) in readings.iter().enumerate() {
        if let Some((field, _)) = reading.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ResampleError::NonFiniteInput { field, index });
        }
    }

    let days: Vec<DailyWeather> = readings
        .chunk_by(|a, b| a.date() == b.date())
        .map(|day| daily_weather(day, config.readings_per_hour()))
        .collect();
    debug!(n_days = days.len(), "weather resampled to daily");
    Ok(days)
}

/// Resamples sorted stage readings to one mean value per calendar date.
///
/// # Errors
///
/// Same as [`resample_weather`], without the configuration check.
#[tracing::instrument(skip_all, fields(n_readings = readings.len()))]
pub fn resample_stage(readings: &[StageReading]) -> Result<Vec<DailyStage>, ResampleError> {
    check_sorted(readings)?;
    if let Some(index) = readings.iter().position(|r| !r.value.is_finite()) {
        return Err(ResampleError::NonFiniteInput {
            field: "value",
            index,
        });
    }

    let days: Vec<DailyStage> = readings
        .chunk_by(|a, b| a.date() == b.date())
        .map(|day| DailyStage {
            date: day[0].date(),
            stage: mean_of(day, |r| r.value),
            n_readings: day.len(),
        })
        .collect();
    debug!(n_days = days.len(), "stage resampled to daily");
    Ok(days)
}

/// Whole hours of sunshine in one day of solar readings.
///
/// Counts readings with nonzero radiation and integer-divides by
/// `readings_per_hour`. Returns 0 when `readings_per_hour` is 0.
///
/// # Example
///
/// ```
/// use checkdam_resample::sunshine_hours;
///
/// assert_eq!(sunshine_hours(&[0.0, 5.0, 0.0, 3.0], 2), 1);
/// assert_eq!(sunshine_hours(&[0.0, 5.0, 0.0], 2), 0);
/// ```
pub fn sunshine_hours(solar: &[f64], readings_per_hour: u32) -> u32 {
    let lit = solar.iter().filter(|&&s| s != 0.0).count();
    let hours = lit.checked_div(readings_per_hour as usize).unwrap_or(0);
    u32::try_from(hours).unwrap_or(u32::MAX)
}

fn check_sorted<T: Timestamped>(readings: &[T]) -> Result<(), ResampleError> {
    if readings.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    if let Some(i) = readings
        .windows(2)
        .position(|w| w[1].timestamp() < w[0].timestamp())
    {
        return Err(ResampleError::Unsorted { index: i + 1 });
    }
    Ok(())
}

fn daily_weather(day: &[WeatherReading], readings_per_hour: u32) -> DailyWeather {
    let solar: Vec<f64> = day.iter().map(|r| r.solar_radiation).collect();
    DailyWeather {
        date: day[0].date(),
        air_temperature: mean_of(day, |r| r.air_temperature),
        humidity: mean_of(day, |r| r.humidity),
        pressure: mean_of(day, |r| r.pressure),
        wind_speed: mean_of(day, |r| r.wind_speed),
        solar_radiation: checkdam_stats::mean(&solar).unwrap_or_default(),
        rainfall: day.iter().map(|r| r.rainfall).sum(),
        sunshine_hours: sunshine_hours(&solar, readings_per_hour),
        n_readings: day.len(),
    }
}

// Groups from `chunk_by` are never empty.
fn mean_of<T>(day: &[T], field: impl Fn(&T) -> f64) -> f64 {
    let values: Vec<f64> = day.iter().map(field).collect();
    checkdam_stats::mean(&values).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 5, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn reading(ts: NaiveDateTime, temp: f64, solar: f64, rain: f64) -> WeatherReading {
        WeatherReading {
            timestamp: ts,
            air_temperature: temp,
            humidity: 60.0,
            pressure: 92.0,
            wind_speed: 8.0,
            solar_radiation: solar,
            rainfall: rain,
        }
    }

    fn one_day() -> Vec<WeatherReading> {
        vec![
            reading(at(1, 6, 0), 20.0, 0.0, 0.0),
            reading(at(1, 6, 30), 22.0, 5.0, 2.0),
            reading(at(1, 7, 0), 24.0, 0.0, 0.0),
            reading(at(1, 7, 30), 26.0, 3.0, 3.0),
        ]
    }

    #[test]
    fn rainfall_sums() {
        let days = resample_weather(&one_day(), &ResampleConfig::new()).unwrap();
        assert_eq!(days.len(), 1);
        assert_relative_eq!(days[0].rainfall, 5.0);
    }

    #[test]
    fn temperature_means() {
        let days = resample_weather(&one_day(), &ResampleConfig::new()).unwrap();
        assert_relative_eq!(days[0].air_temperature, 23.0);
        assert_relative_eq!(days[0].humidity, 60.0);
        assert_relative_eq!(days[0].solar_radiation, 2.0);
    }

    #[test]
    fn sunshine_counts_nonzero_solar() {
        let days = resample_weather(&one_day(), &ResampleConfig::new()).unwrap();
        assert_eq!(days[0].sunshine_hours, 1);
        assert_eq!(days[0].n_readings, 4);
    }

    #[test]
    fn sunshine_divisor_is_configurable() {
        let cfg = ResampleConfig::new().with_readings_per_hour(1);
        let days = resample_weather(&one_day(), &cfg).unwrap();
        assert_eq!(days[0].sunshine_hours, 2);
    }

    #[test]
    fn sunshine_zero_divisor() {
        assert_eq!(sunshine_hours(&[1.0, 1.0], 0), 0);
    }

    #[test]
    fn empty_is_error() {
        let err = resample_weather(&[], &ResampleConfig::new()).unwrap_err();
        assert_eq!(err, ResampleError::EmptyData);
    }

    #[test]
    fn unsorted_reports_index() {
        let mut readings = one_day();
        readings.swap(1, 2);
        let err = resample_weather(&readings, &ResampleConfig::new()).unwrap_err();
        assert_eq!(err, ResampleError::Unsorted { index: 2 });
    }

    #[test]
    fn duplicate_timestamps_are_kept() {
        let readings = vec![
            reading(at(1, 6, 0), 20.0, 0.0, 1.0),
            reading(at(1, 6, 0), 22.0, 0.0, 1.0),
        ];
        let days = resample_weather(&readings, &ResampleConfig::new()).unwrap();
        assert_eq!(days[0].n_readings, 2);
        assert_relative_eq!(days[0].rainfall, 2.0);
    }

    #[test]
    fn non_finite_names_field() {
        let mut readings = one_day();
        readings[3].humidity = f64::NAN;
        let err = resample_weather(&readings, &ResampleConfig::new()).unwrap_err();
        assert_eq!(
            err,
            ResampleError::NonFiniteInput {
                field: "humidity",
                index: 3
            }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = ResampleConfig::new().with_readings_per_hour(0);
        let err = resample_weather(&one_day(), &cfg).unwrap_err();
        assert!(matches!(err, ResampleError::InvalidConfig { .. }));
    }

    #[test]
    fn stage_means() {
        let readings = [
            StageReading { timestamp: at(1, 0, 0), value: 1.0 },
            StageReading { timestamp: at(1, 12, 0), value: 2.0 },
            StageReading { timestamp: at(2, 0, 0), value: 4.0 },
        ];
        let days = resample_stage(&readings).unwrap();
        assert_eq!(days.len(), 2);
        assert_relative_eq!(days[0].stage, 1.5);
        assert_eq!(days[0].n_readings, 2);
        assert_relative_eq!(days[1].stage, 4.0);
    }

    #[test]
    fn stage_non_finite() {
        let readings = [StageReading { timestamp: at(1, 0, 0), value: f64::INFINITY }];
        let err = resample_stage(&readings).unwrap_err();
        assert!(matches!(err, ResampleError::NonFiniteInput { field: "value", index: 0 }));
    }
}
