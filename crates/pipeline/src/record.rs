//! Output rows and per-class tables.

use checkdam_classify::DayClass;
use chrono::NaiveDate;
use serde::Serialize;

/// One output day: the daily weather aggregate plus derived columns.
///
/// Field names serialise to the column headers of the output CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Air Temperature (C)")]
    pub air_temperature: f64,
    #[serde(rename = "Humidity (%)")]
    pub humidity: f64,
    #[serde(rename = "Barometric Pressure (KPa)")]
    pub station_pressure_kpa: f64,
    #[serde(rename = "Wind Speed (kmph)")]
    pub wind_speed_kmph: f64,
    #[serde(rename = "Solar Radiation (W/mm2)")]
    pub solar_radiation: f64,
    #[serde(rename = "Rain Collection (mm)")]
    pub rainfall: f64,
    /// Site pressure from elevation, constant for the run.
    #[serde(rename = "AirPr(Pa)")]
    pub air_pressure_pa: f64,
    #[serde(rename = "sunshine hours (h)")]
    pub sunshine_hours: u32,
    #[serde(rename = "daylight hours (h)")]
    pub daylight_hours: f64,
    #[serde(rename = "Rext (J/m2)")]
    pub rext_j_m2: f64,
    #[serde(rename = "Wind Speed (mps)")]
    pub wind_speed_mps: f64,
    #[serde(rename = "Solar Radiation (J/m2/day)")]
    pub solar_radiation_j_m2_day: f64,
    #[serde(rename = "Evaporation (mm/day)")]
    pub evaporation_mm_day: f64,
    /// Mean pond stage; `None` on days without logger scans.
    #[serde(rename = "stage(m)")]
    pub stage_m: Option<f64>,
    /// Pond surface area at `stage_m`.
    #[serde(rename = "Area (m2)")]
    pub area_m2: Option<f64>,
}

impl DailyRecord {
    /// Serialised column names, in field order.
    pub const COLUMNS: [&'static str; 16] = [
        "Date",
        "Air Temperature (C)",
        "Humidity (%)",
        "Barometric Pressure (KPa)",
        "Wind Speed (kmph)",
        "Solar Radiation (W/mm2)",
        "Rain Collection (mm)",
        "AirPr(Pa)",
        "sunshine hours (h)",
        "daylight hours (h)",
        "Rext (J/m2)",
        "Wind Speed (mps)",
        "Solar Radiation (J/m2/day)",
        "Evaporation (mm/day)",
        "stage(m)",
        "Area (m2)",
    ];
}

/// Daily records of one [`DayClass`], in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTable {
    class: DayClass,
    rows: Vec<DailyRecord>,
}

impl DailyTable {
    pub(crate) fn new(class: DayClass, rows: Vec<DailyRecord>) -> Self {
        Self { class, rows }
    }

    /// Returns the class of every row in this table.
    pub fn class(&self) -> DayClass {
        self.class
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[DailyRecord] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<DailyRecord> {
        &mut self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows with a stage value.
    pub fn n_with_stage(&self) -> usize {
        self.rows.iter().filter(|r| r.stage_m.is_some()).count()
    }

    /// Drops every row before the first one with a stage value. A table with
    /// no stage at all becomes empty.
    pub(crate) fn truncate_to_first_stage(&mut self) {
        let first = self
            .rows
            .iter()
            .position(|r| r.stage_m.is_some())
            .unwrap_or(self.rows.len());
        self.rows.drain(..first);
    }
}
