//! Calibrate command: fit one polynomial from a pair table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use checkdam_calibration::{CalibrationPairs, PolynomialSpec};
use checkdam_io::read_pairs_csv;

use crate::cli::CalibrateArgs;

/// Fit and print the model as pretty JSON on stdout.
pub fn run(args: CalibrateArgs) -> Result<()> {
    let _cmd = info_span!("calibrate").entered();
    let (x, y) = read_pairs_csv(&args.pairs, &args.x_col, &args.y_col)
        .with_context(|| format!("failed to read pairs: {}", args.pairs.display()))?;
    let pairs = CalibrationPairs::new(x, y).context("invalid calibration pairs")?;

    let model = PolynomialSpec::new(args.degree)
        .fit(&pairs)
        .with_context(|| format!("degree-{} fit failed", args.degree))?;
    info!(r_squared = model.r_squared(), "calibration fitted");

    let json = serde_json::to_string_pretty(&model).context("failed to serialise model")?;
    println!("{json}");
    Ok(())
}
