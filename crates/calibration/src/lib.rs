//! Least-squares polynomial calibration.
//!
//! Fits `y = c_d x^d + ... + c_1 x + c_0` to a set of paired observations and
//! reports the in-sample coefficient of determination. Used twice by the
//! pipeline: once to turn raw logger counts into stage (cm) and once to turn
//! stage (m) into pond surface area (m²).
//!
//! # Workflow
//!
//! ```mermaid
//! graph LR
//!     A["CalibrationPairs::new(x, y)?"] --> B["PolynomialSpec::new(d)"]
//!     B -->|".fit(&pairs)?"| C["CalibrationModel"]
//!     C --> D[".predict(x)"]
//!     C --> E[".r_squared()"]
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use checkdam_calibration::{CalibrationPairs, PolynomialSpec};
//!
//! let pairs = CalibrationPairs::new(raw_counts, stage_cm)?;
//! let model = PolynomialSpec::new(1).fit(&pairs)?;
//! println!("R² = {:.4}", model.r_squared());
//! let cm = model.predict(4000.0);
//! ```
//!
//! The solver runs Householder QR on a column-equilibrated Vandermonde
//! matrix rather than forming the normal equations.

mod error;
mod model;
mod pairs;
mod qr;
mod spec;

pub use error::CalibrationError;
pub use model::{CalibrationModel, Domain};
pub use pairs::CalibrationPairs;
pub use spec::PolynomialSpec;
