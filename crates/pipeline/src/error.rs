//! Error types for the checkdam-pipeline crate.

use checkdam_calibration::CalibrationError;
use checkdam_classify::ClassifyError;
use checkdam_pet::PetError;
use checkdam_resample::ResampleError;

/// Error type for all fallible operations in the checkdam-pipeline crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    /// Returned when the site configuration is invalid.
    #[error("invalid site configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Resampling error.
    #[error(transparent)]
    Resample(#[from] ResampleError),

    /// Classification error.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// Radiation or evaporation error.
    #[error(transparent)]
    Pet(#[from] PetError),

    /// Returned when the sensor count to stage calibration cannot be fitted.
    #[error("sensor calibration failed")]
    SensorCalibration(#[source] CalibrationError),

    /// Returned when the stage to area calibration cannot be fitted.
    #[error("area calibration failed")]
    AreaCalibration(#[source] CalibrationError),
}
