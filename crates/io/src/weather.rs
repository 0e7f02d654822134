//! Weather-station CSV export reader.

use std::path::Path;

use checkdam_resample::WeatherReading;
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::IoError;
use crate::validate::{
    ValidationCollector, column_index, csv_error, parse_number, parse_timestamp, read_text,
};

/// Timestamp layout of the station export once `Date` and `Time` are joined.
const DATE_TIME_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Header names of the columns read from a weather-station export.
///
/// The [`Default`] implementation matches the station's own export. Columns
/// not named here are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherColumns {
    date: String,
    time: String,
    air_temperature: String,
    humidity: String,
    pressure: String,
    wind_speed: String,
    solar_radiation: String,
    rainfall: String,
}

impl Default for WeatherColumns {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            time: "Time".into(),
            air_temperature: "Air Temperature (C)".into(),
            humidity: "Humidity (%)".into(),
            pressure: "Barometric Pressure (KPa)".into(),
            wind_speed: "Wind Speed (kmph)".into(),
            solar_radiation: "Solar Radiation (W/mm2)".into(),
            rainfall: "Rain Collection (mm)".into(),
        }
    }
}

impl WeatherColumns {
    /// Set the date column name.
    pub fn with_date(mut self, name: impl Into<String>) -> Self {
        self.date = name.into();
        self
    }

    /// Set the time column name.
    pub fn with_time(mut self, name: impl Into<String>) -> Self {
        self.time = name.into();
        self
    }

    /// Set the air temperature column name.
    pub fn with_air_temperature(mut self, name: impl Into<String>) -> Self {
        self.air_temperature = name.into();
        self
    }

    /// Set the relative humidity column name.
    pub fn with_humidity(mut self, name: impl Into<String>) -> Self {
        self.humidity = name.into();
        self
    }

    /// Set the barometric pressure column name.
    pub fn with_pressure(mut self, name: impl Into<String>) -> Self {
        self.pressure = name.into();
        self
    }

    /// Set the wind speed column name.
    pub fn with_wind_speed(mut self, name: impl Into<String>) -> Self {
        self.wind_speed = name.into();
        self
    }

    /// Set the solar radiation column name.
    pub fn with_solar_radiation(mut self, name: impl Into<String>) -> Self {
        self.solar_radiation = name.into();
        self
    }

    /// Set the rainfall column name.
    pub fn with_rainfall(mut self, name: impl Into<String>) -> Self {
        self.rainfall = name.into();
        self
    }

    fn value_columns(&self) -> [&str; 6] {
        [
            self.air_temperature.as_str(),
            self.humidity.as_str(),
            self.pressure.as_str(),
            self.wind_speed.as_str(),
            self.solar_radiation.as_str(),
            self.rainfall.as_str(),
        ]
    }
}

/// Read a weather-station CSV export.
///
/// Readings are returned in file order; sorting is left to the caller.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::MissingColumn`] | a configured column is absent from the header |
/// | [`IoError::Validation`] | one or more rows have bad timestamps or values |
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_weather_csv(
    path: &Path,
    columns: &WeatherColumns,
) -> Result<Vec<WeatherReading>, IoError> {
    let text = read_text(path)?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();

    let date_idx = column_index(&headers, &columns.date, path)?;
    let time_idx = column_index(&headers, &columns.time, path)?;
    let names = columns.value_columns();
    let mut value_idx = [0usize; 6];
    for (slot, name) in value_idx.iter_mut().zip(names) {
        *slot = column_index(&headers, name, path)?;
    }

    let mut collector = ValidationCollector::new();
    let mut readings = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = i + 2;
        let timestamp = parse_timestamp(
            record.get(date_idx).unwrap_or(""),
            record.get(time_idx).unwrap_or(""),
            DATE_TIME_FORMAT,
            line,
            &mut collector,
        );
        let mut values = [0.0; 6];
        let mut ok = true;
        for ((value, &idx), name) in values.iter_mut().zip(&value_idx).zip(names) {
            match parse_number(&record, idx, name, line, &mut collector) {
                Some(v) => *value = v,
                None => ok = false,
            }
        }
        if let Some(timestamp) = timestamp
            && ok
        {
            let [air_temperature, humidity, pressure, wind_speed, solar_radiation, rainfall] =
                values;
            readings.push(WeatherReading {
                timestamp,
                air_temperature,
                humidity,
                pressure,
                wind_speed,
                solar_radiation,
                rainfall,
            });
        }
    }
    collector.finish()?;

    debug!(n_readings = readings.len(), "weather csv read");
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_match_station_export() {
        let cols = WeatherColumns::default();
        assert_eq!(cols.date, "Date");
        assert_eq!(cols.rainfall, "Rain Collection (mm)");
        assert_eq!(cols.solar_radiation, "Solar Radiation (W/mm2)");
    }

    #[test]
    fn builder_overrides() {
        let cols = WeatherColumns::default()
            .with_air_temperature("Temp")
            .with_rainfall("Rain");
        assert_eq!(cols.value_columns()[0], "Temp");
        assert_eq!(cols.value_columns()[5], "Rain");
    }
}
