//! Stage calibration, daily averaging and joins onto the daily tables.

use std::collections::BTreeMap;

use checkdam_calibration::CalibrationModel;
use checkdam_resample::{DailyStage, StageReading, resample_stage};
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::record::DailyTable;

/// Daily mean stage (m) and the number of scans outside the sensor
/// calibration domain.
pub(crate) struct StageSeries {
    pub(crate) daily: Vec<DailyStage>,
    pub(crate) out_of_domain: usize,
}

/// Applies the sensor calibration to every scan, divides by `divisor` and
/// averages per day.
pub(crate) fn daily_stage(
    readings: &[StageReading],
    sensor: &CalibrationModel,
    divisor: f64,
) -> Result<StageSeries, PipelineError> {
    let mut calibrated: Vec<StageReading> = readings
        .iter()
        .map(|r| StageReading {
            timestamp: r.timestamp,
            value: sensor.predict(r.value) / divisor,
        })
        .collect();
    calibrated.sort_by_key(|r| r.timestamp);

    let out_of_domain = readings.iter().filter(|r| !sensor.contains(r.value)).count();
    if out_of_domain > 0 {
        warn!(
            n = out_of_domain,
            min = sensor.domain().min(),
            max = sensor.domain().max(),
            "stage scans outside sensor calibration range"
        );
    }

    let daily = resample_stage(&calibrated)?;
    debug!(n_days = daily.len(), "daily stage computed");
    Ok(StageSeries {
        daily,
        out_of_domain,
    })
}

/// Left-joins daily stage onto `table` by date.
pub(crate) fn join_stage(table: &mut DailyTable, stage: &BTreeMap<NaiveDate, f64>) {
    for row in table.rows_mut() {
        row.stage_m = stage.get(&row.date).copied();
    }
}

/// Fills `area_m2` for every row with a stage and returns how many of those
/// stages fall outside the area calibration domain.
pub(crate) fn apply_area(table: &mut DailyTable, area: &CalibrationModel) -> usize {
    let mut out_of_domain = 0;
    for row in table.rows_mut() {
        if let Some(stage) = row.stage_m {
            if !area.contains(stage) {
                out_of_domain += 1;
            }
            row.area_m2 = Some(area.predict(stage));
        }
    }
    out_of_domain
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use checkdam_calibration::{CalibrationPairs, PolynomialSpec};
    use chrono::NaiveDateTime;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    // stage_cm = 0.1 * count - 100
    fn sensor() -> CalibrationModel {
        let pairs = CalibrationPairs::new(vec![1000.0, 2000.0, 3000.0], vec![0.0, 100.0, 200.0])
            .unwrap();
        PolynomialSpec::new(1).fit(&pairs).unwrap()
    }

    #[test]
    fn calibrates_divides_and_averages() {
        let readings = [
            StageReading { timestamp: ts(1, 0), value: 2000.0 },
            StageReading { timestamp: ts(1, 12), value: 3000.0 },
            StageReading { timestamp: ts(2, 0), value: 4000.0 },
        ];
        let series = daily_stage(&readings, &sensor(), 100.0).unwrap();
        assert_eq!(series.daily.len(), 2);
        assert_relative_eq!(series.daily[0].stage, 1.5, epsilon = 1e-9);
        assert_relative_eq!(series.daily[1].stage, 3.0, epsilon = 1e-9);
        assert_eq!(series.out_of_domain, 1);
    }

    #[test]
    fn unsorted_scans_are_sorted_first() {
        let readings = [
            StageReading { timestamp: ts(2, 0), value: 2000.0 },
            StageReading { timestamp: ts(1, 0), value: 2000.0 },
        ];
        let series = daily_stage(&readings, &sensor(), 100.0).unwrap();
        assert_eq!(series.daily[0].date, NaiveDate::from_ymd_opt(2014, 5, 1).unwrap());
    }

    #[test]
    fn no_scans_is_error() {
        assert!(daily_stage(&[], &sensor(), 100.0).is_err());
    }
}
