//! # checkdam-pet
//!
//! Radiation and open-water evaporation models for daily weather series.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["latitude, &[DayOfYear]"] -->|"extraterrestrial_radiation()"| B["Rext (J/m2/day)"]
//!     A -->|"daylight_hours()"| C["N (h)"]
//!     D["elevation"] -->|"air_pressure_from_elevation()"| E["P (Pa)"]
//!     B --> F["EvaporationInputs"]
//!     C --> F
//!     E --> F
//!     F -->|"open_water_evaporation()"| G["E0 (mm/day)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use checkdam_calendar::DayOfYear;
//! use checkdam_pet::{air_pressure_from_elevation, extraterrestrial_radiation};
//!
//! let doys = [DayOfYear::new(134)?, DayOfYear::new(135)?];
//! let rext = extraterrestrial_radiation(13.260196, &doys)?;
//! let pressure = air_pressure_from_elevation(799.0)?;
//! ```
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | Radiation | J m⁻² day⁻¹ |
//! | Pressure | Pa |
//! | Temperature | °C |
//! | Wind speed | m s⁻¹ at 2 m |
//! | Evaporation | mm day⁻¹ |

mod error;
mod evaporation;
mod pressure;
mod radiation;
mod units;

pub use error::PetError;
pub use evaporation::{
    EvaporationInputs, OPEN_WATER_ALBEDO, latent_heat, open_water_evaporation,
    psychrometric_constant, saturation_vapour_pressure, vapour_pressure_slope,
};
pub use pressure::air_pressure_from_elevation;
pub use radiation::{
    SOLAR_CONSTANT, daylight_hours, extraterrestrial_radiation, extraterrestrial_radiation_day,
};
pub use units::{KMPH_TO_MPS, SECONDS_PER_DAY, kmph_to_mps, solar_to_daily_energy};
