//! Standard-atmosphere air pressure from elevation.

use crate::error::PetError;

const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// Returns air pressure [Pa] at `elevation` metres above sea level:
/// `P = 101325 · (1 − 2.25577e-5 · z)^5.25588`.
///
/// # Errors
///
/// Returns [`PetError::InvalidElevation`] if `elevation` is non-finite or high
/// enough that the base of the power term is not positive.
pub fn air_pressure_from_elevation(elevation: f64) -> Result<f64, PetError> {
    let base = 1.0 - 2.25577e-5 * elevation;
    if !elevation.is_finite() || base <= 0.0 {
        return Err(PetError::InvalidElevation { elevation });
    }
    Ok(SEA_LEVEL_PRESSURE * base.powf(5.25588))
}
