//! Unit conversions applied to daily station aggregates.

/// Kilometres per hour to metres per second, as the station pipeline has
/// always rounded it.
pub const KMPH_TO_MPS: f64 = 0.277778;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts wind speed from km/h to m/s.
pub fn kmph_to_mps(kmph: f64) -> f64 {
    kmph * KMPH_TO_MPS
}

/// Converts a daily mean solar flux reading to a daily energy total
/// (J m⁻² day⁻¹) by multiplying by the seconds in a day.
pub fn solar_to_daily_energy(flux: f64) -> f64 {
    flux * SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_conversion() {
        assert!((kmph_to_mps(36.0) - 10.000008).abs() < 1e-6);
        assert_eq!(kmph_to_mps(0.0), 0.0);
    }

    #[test]
    fn solar_conversion_is_exact() {
        assert_eq!(solar_to_daily_energy(2.5), 216_000.0);
        assert_eq!(solar_to_daily_energy(0.0), 0.0);
    }
}
