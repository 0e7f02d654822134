use chrono::NaiveDate;
use checkdam_calendar::DayOfYear;
use checkdam_pet::{
    EvaporationInputs, PetError, air_pressure_from_elevation, daylight_hours,
    extraterrestrial_radiation, kmph_to_mps, open_water_evaporation, solar_to_daily_energy,
};

const LATITUDE: f64 = 13.260196;
const ELEVATION: f64 = 799.0;

fn may_days(n: u32) -> Vec<DayOfYear> {
    (0..n)
        .map(|i| DayOfYear::from_date(NaiveDate::from_ymd_opt(2014, 5, 14 + i).unwrap()))
        .collect()
}

#[test]
fn station_week_produces_plausible_evaporation() {
    let doys = may_days(7);
    let rext = extraterrestrial_radiation(LATITUDE, &doys).unwrap();
    let daylight = daylight_hours(LATITUDE, &doys).unwrap();
    let pressure = vec![air_pressure_from_elevation(ELEVATION).unwrap(); 7];

    let temp = [24.1, 25.3, 26.0, 23.8, 24.9, 25.5, 26.2];
    let rh = [62.0, 58.0, 55.0, 70.0, 64.0, 60.0, 57.0];
    let wind: Vec<f64> = [8.0, 9.5, 7.2, 12.0, 10.1, 6.5, 8.8]
        .iter()
        .map(|&k| kmph_to_mps(k))
        .collect();
    let solar: Vec<f64> = [220.0, 240.0, 250.0, 180.0, 210.0, 235.0, 245.0]
        .iter()
        .map(|&w| solar_to_daily_energy(w))
        .collect();
    let sunshine = [10.0, 11.0, 11.0, 7.0, 9.0, 10.0, 11.0];

    let inputs = EvaporationInputs {
        air_temperature: &temp,
        relative_humidity: &rh,
        air_pressure: &pressure,
        solar_radiation: &solar,
        sunshine_hours: &sunshine,
        daylight_hours: &daylight,
        extraterrestrial_radiation: &rext,
        wind_speed: &wind,
        elevation: ELEVATION,
    };
    let e0 = open_water_evaporation(&inputs).unwrap();
    assert_eq!(e0.len(), 7);
    for (i, e) in e0.iter().enumerate() {
        assert!(e.is_finite() && *e > 0.0 && *e < 15.0, "day {i}: {e}");
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let doys = may_days(3);
    let rext = extraterrestrial_radiation(LATITUDE, &doys).unwrap();
    let daylight = daylight_hours(LATITUDE, &doys).unwrap();
    let p = [92_000.0; 3];
    let t = [25.0; 3];
    let rh = [60.0; 3];
    let rs = [20.0e6; 3];
    let n = [10.0; 3];
    let u = [2.0; 3];
    let inputs = EvaporationInputs {
        air_temperature: &t,
        relative_humidity: &rh,
        air_pressure: &p,
        solar_radiation: &rs,
        sunshine_hours: &n,
        daylight_hours: &daylight,
        extraterrestrial_radiation: &rext,
        wind_speed: &u,
        elevation: ELEVATION,
    };
    let a = open_water_evaporation(&inputs).unwrap();
    let b = open_water_evaporation(&inputs).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shape_mismatch_fails_before_computation() {
    let t = [25.0, 26.0, 27.0];
    let short = [1.0, 2.0];
    let inputs = EvaporationInputs {
        air_temperature: &t,
        relative_humidity: &t,
        air_pressure: &t,
        solar_radiation: &t,
        sunshine_hours: &t,
        daylight_hours: &short,
        extraterrestrial_radiation: &t,
        wind_speed: &t,
        elevation: 0.0,
    };
    assert_eq!(
        open_water_evaporation(&inputs).unwrap_err(),
        PetError::LengthMismatch {
            field: "daylight_hours",
            expected: 3,
            got: 2,
        }
    );
}

#[test]
fn empty_series_is_rejected() {
    let empty: [f64; 0] = [];
    let inputs = EvaporationInputs {
        air_temperature: &empty,
        relative_humidity: &empty,
        air_pressure: &empty,
        solar_radiation: &empty,
        sunshine_hours: &empty,
        daylight_hours: &empty,
        extraterrestrial_radiation: &empty,
        wind_speed: &empty,
        elevation: 0.0,
    };
    assert_eq!(
        open_water_evaporation(&inputs).unwrap_err(),
        PetError::EmptyInput
    );
}
