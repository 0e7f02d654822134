//! Error types for the checkdam-pet crate.

/// Error type for all fallible operations in the checkdam-pet crate.
///
/// Covers domain failures of the radiation geometry and shape or value
/// problems in evaporation inputs. No variant is ever replaced by a NaN
/// result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PetError {
    /// Returned when an input series is empty.
    #[error("input series is empty")]
    EmptyInput,

    /// Returned when latitude is non-finite or outside -90..=90 degrees.
    #[error("invalid latitude: {latitude} (must be finite and within -90..=90)")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        latitude: f64,
    },

    /// Returned when the sun never rises or never sets for the given
    /// latitude and day (`|tan(lat) * tan(decl)| > 1`).
    #[error("no sunset hour angle at latitude {latitude} on day {doy}")]
    NoSunsetAngle {
        /// Latitude in degrees.
        latitude: f64,
        /// Day-of-year.
        doy: u16,
    },

    /// Returned when evaporation input series differ in length.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched series.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when an input series contains NaN or infinity.
    #[error("non-finite value in {field} at index {index}")]
    NonFiniteInput {
        /// Name of the series.
        field: &'static str,
        /// Position of the first offending element.
        index: usize,
    },

    /// Returned when a day has no daylight or no extraterrestrial
    /// radiation, leaving relative sunshine and cloudiness undefined.
    #[error("no daylight on day {index} (daylight hours and Rext must be positive)")]
    NoDaylight {
        /// Position of the first offending day.
        index: usize,
    },

    /// Returned when elevation is non-finite or above the height at which the
    /// barometric formula reaches zero pressure.
    #[error("invalid elevation: {elevation} m")]
    InvalidElevation {
        /// The rejected elevation in metres.
        elevation: f64,
    },
}
