use approx::assert_relative_eq;
use checkdam_resample::{ResampleConfig, WeatherReading, resample_weather};
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Half-hourly readings with daylight between 06:00 and 18:00 and 0.5 mm of
/// rain in every reading on odd days.
fn half_hourly(days: i64) -> Vec<WeatherReading> {
    (0..days * 48)
        .map(|i| {
            let ts = start() + Duration::minutes(30 * i);
            let hour = i % 48 / 2;
            let day = i / 48;
            WeatherReading {
                timestamp: ts,
                air_temperature: 20.0 + (hour as f64 - 12.0).abs() * -0.5,
                humidity: 55.0,
                pressure: 92.1,
                wind_speed: 7.2,
                solar_radiation: if (6..18).contains(&hour) { 400.0 } else { 0.0 },
                rainfall: if day % 2 == 1 { 0.5 } else { 0.0 },
            }
        })
        .collect()
}

#[test]
fn one_row_per_date_in_order() {
    let days = resample_weather(&half_hourly(5), &ResampleConfig::new()).unwrap();
    assert_eq!(days.len(), 5);
    for (i, d) in days.iter().enumerate() {
        assert_eq!(d.date, start().date() + Duration::days(i as i64));
        assert_eq!(d.n_readings, 48);
    }
}

#[test]
fn sunshine_matches_daylight_window() {
    let days = resample_weather(&half_hourly(2), &ResampleConfig::new()).unwrap();
    for d in &days {
        assert_eq!(d.sunshine_hours, 12);
    }
}

#[test]
fn rainfall_totals_per_day() {
    let days = resample_weather(&half_hourly(4), &ResampleConfig::new()).unwrap();
    let totals: Vec<f64> = days.iter().map(|d| d.rainfall).collect();
    assert_relative_eq!(totals[0], 0.0);
    assert_relative_eq!(totals[1], 24.0);
    assert_relative_eq!(totals[2], 0.0);
    assert_relative_eq!(totals[3], 24.0);
}

#[test]
fn gap_days_produce_no_row() {
    let mut readings = half_hourly(5);
    readings.retain(|r| r.timestamp.date() != start().date() + Duration::days(2));
    let days = resample_weather(&readings, &ResampleConfig::new()).unwrap();
    assert_eq!(days.len(), 4);
    assert_eq!(days[2].date, start().date() + Duration::days(3));
}

#[test]
fn resampling_is_deterministic() {
    let readings = half_hourly(3);
    let a = resample_weather(&readings, &ResampleConfig::new()).unwrap();
    let b = resample_weather(&readings, &ResampleConfig::new()).unwrap();
    assert_eq!(a, b);
}
