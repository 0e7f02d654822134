//! Penman open-water evaporation after Valiantzas (2006).
//!
//! Valiantzas, J.D. (2006). Simplified versions for the Penman evaporation
//! equation using routine weather data. J. Hydrology 331: 690-702.

use tracing::debug;

use crate::error::PetError;

/// Albedo of an open water surface.
pub const OPEN_WATER_ALBEDO: f64 = 0.06;

/// Stefan-Boltzmann constant [J m⁻² K⁻⁴ day⁻¹].
const STEFAN_BOLTZMANN: f64 = 4.903e-3;

/// Specific heat of moist air at constant pressure [J kg⁻¹ K⁻¹].
const SPECIFIC_HEAT_AIR: f64 = 1013.0;

/// Ratio of molecular weights of water vapour and dry air.
const EPSILON: f64 = 0.622;

/// Penman wind-function scale; yields mm/day with `Ea` in kPa and λ in J/kg.
const WIND_FUNCTION_SCALE: f64 = 6.43e6;

/// Ångström coefficients for shortwave estimated from relative sunshine.
const ANGSTROM_A: f64 = 0.25;
const ANGSTROM_B: f64 = 0.50;

/// Per-day meteorological inputs for [`open_water_evaporation`].
///
/// Every slice holds one value per day and all must have the same length.
#[derive(Debug, Clone, Copy)]
pub struct EvaporationInputs<'a> {
    /// Daily mean air temperature [°C].
    pub air_temperature: &'a [f64],
    /// Daily mean relative humidity [%].
    pub relative_humidity: &'a [f64],
    /// Air pressure [Pa].
    pub air_pressure: &'a [f64],
    /// Incoming solar radiation [J m⁻² day⁻¹].
    pub solar_radiation: &'a [f64],
    /// Measured sunshine hours [h].
    pub sunshine_hours: &'a [f64],
    /// Maximum possible daylight hours [h].
    pub daylight_hours: &'a [f64],
    /// Extraterrestrial radiation [J m⁻² day⁻¹].
    pub extraterrestrial_radiation: &'a [f64],
    /// Wind speed at 2 m [m s⁻¹].
    pub wind_speed: &'a [f64],
    /// Site elevation [m a.s.l.].
    pub elevation: f64,
}

impl EvaporationInputs<'_> {
    fn series(&self) -> [(&'static str, &[f64]); 8] {
        [
            ("air_temperature", self.air_temperature),
            ("relative_humidity", self.relative_humidity),
            ("air_pressure", self.air_pressure),
            ("solar_radiation", self.solar_radiation),
            ("sunshine_hours", self.sunshine_hours),
            ("daylight_hours", self.daylight_hours),
            ("extraterrestrial_radiation", self.extraterrestrial_radiation),
            ("wind_speed", self.wind_speed),
        ]
    }

    /// Checks shapes and values, returning the common series length.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PetError::EmptyInput`] | `air_temperature` is empty |
    /// | [`PetError::LengthMismatch`] | any series differs in length from `air_temperature` |
    /// | [`PetError::NonFiniteInput`] | any value is NaN or infinite |
    /// | [`PetError::NoDaylight`] | daylight hours or Rext not positive on some day |
    /// | [`PetError::InvalidElevation`] | elevation is non-finite or has no clear-sky shortwave |
    pub fn validate(&self) -> Result<usize, PetError> {
        let n = self.air_temperature.len();
        if n == 0 {
            return Err(PetError::EmptyInput);
        }
        let series = self.series();
        for (field, values) in series {
            if values.len() != n {
                return Err(PetError::LengthMismatch {
                    field,
                    expected: n,
                    got: values.len(),
                });
            }
        }
        for (field, values) in series {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(PetError::NonFiniteInput { field, index });
            }
        }
        if let Some(index) = self
            .daylight_hours
            .iter()
            .zip(self.extraterrestrial_radiation)
            .position(|(&n, &rext)| n <= 0.0 || rext <= 0.0)
        {
            return Err(PetError::NoDaylight { index });
        }
        if !self.elevation.is_finite() || clear_sky_fraction(self.elevation) <= 0.0 {
            return Err(PetError::InvalidElevation {
                elevation: self.elevation,
            });
        }
        Ok(n)
    }
}

/// Fraction of Rext reaching the surface under a clear sky.
fn clear_sky_fraction(elevation: f64) -> f64 {
    0.75 + 2.0e-5 * elevation
}

/// Saturation vapour pressure es [Pa] over water at `t` °C (Tetens).
pub fn saturation_vapour_pressure(t: f64) -> f64 {
    610.8 * (17.27 * t / (t + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve Δ [Pa K⁻¹] at `t` °C.
pub fn vapour_pressure_slope(t: f64) -> f64 {
    4098.0 * saturation_vapour_pressure(t) / ((t + 237.3) * (t + 237.3))
}

/// Latent heat of vaporisation λ [J kg⁻¹] at `t` °C.
pub fn latent_heat(t: f64) -> f64 {
    2.501e6 - 2361.0 * t
}

/// Psychrometric constant γ [Pa K⁻¹] at `t` °C and air pressure `p` [Pa].
pub fn psychrometric_constant(t: f64, p: f64) -> f64 {
    SPECIFIC_HEAT_AIR * p / (EPSILON * latent_heat(t))
}

/// One day of the Penman combination equation.
#[allow(clippy::too_many_arguments)]
fn penman_day(
    t: f64,
    rh: f64,
    p: f64,
    rs: f64,
    sunshine: f64,
    daylight: f64,
    rext: f64,
    u: f64,
    elevation: f64,
) -> f64 {
    let es = saturation_vapour_pressure(t);
    let ea = es * rh / 100.0;
    let delta = vapour_pressure_slope(t);
    let gamma = psychrometric_constant(t, p);
    let lambda = latent_heat(t);

    // Net shortwave from the measured flux.
    let rns = (1.0 - OPEN_WATER_ALBEDO) * rs;

    // Cloudiness from relative sunshine against the clear-sky fraction of Rext.
    // `validate` guarantees daylight, Rext and the clear-sky fraction are positive.
    let relative_sunshine = (sunshine / daylight).clamp(0.0, 1.0);
    let rs_sunshine = (ANGSTROM_A + ANGSTROM_B * relative_sunshine) * rext;
    let rs_clear = clear_sky_fraction(elevation) * rext;
    let cloudiness = 1.35 * (rs_sunshine / rs_clear).min(1.0) - 0.35;

    let emissivity = 0.34 - 0.14 * (ea / 1000.0).sqrt();
    let tk = t + 273.16;
    let rnl = cloudiness * emissivity * STEFAN_BOLTZMANN * tk.powi(4);
    let rn = rns - rnl;

    let aerodynamic = (1.0 + 0.536 * u) * (es - ea) / 1000.0;

    delta / (delta + gamma) * rn / lambda
        + gamma / (delta + gamma) * WIND_FUNCTION_SCALE * aerodynamic / lambda
}

/// Computes daily open-water evaporation E0 [mm day⁻¹], one value per day.
///
/// Inputs are validated in full before any day is computed.
///
/// # Errors
///
/// See [`EvaporationInputs::validate`].
#[tracing::instrument(skip_all, fields(n_days = inputs.air_temperature.len()))]
pub fn open_water_evaporation(inputs: &EvaporationInputs<'_>) -> Result<Vec<f64>, PetError> {
    let n = inputs.validate()?;
    let e0: Vec<f64> = (0..n)
        .map(|i| {
            penman_day(
                inputs.air_temperature[i],
                inputs.relative_humidity[i],
                inputs.air_pressure[i],
                inputs.solar_radiation[i],
                inputs.sunshine_hours[i],
                inputs.daylight_hours[i],
                inputs.extraterrestrial_radiation[i],
                inputs.wind_speed[i],
                inputs.elevation,
            )
        })
        .collect();
    debug!(n_days = n, "open-water evaporation computed");
    Ok(e0)
}
