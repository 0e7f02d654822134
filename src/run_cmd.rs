//! Run command: full pipeline from raw files to daily tables.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use checkdam_calibration::CalibrationPairs;
use checkdam_io::{read_pairs_csv, read_stage_blocks, read_weather_csv, write_csv, write_json};
use checkdam_pipeline::{DailyRecord, PipelineInputs, run_pipeline};

use crate::cli::RunArgs;
use crate::config::CheckdamConfig;
use crate::convert::{self, SensorPairsSource};

/// Run the full pipeline and write its outputs.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    // 1. Load project TOML
    let config = CheckdamConfig::from_path(&args.config)?;
    let site = convert::build_site_config(&config)?;

    // 2. Read inputs
    let columns = convert::build_weather_columns(&config.columns);
    info!(path = %config.input.weather.display(), "reading weather export");
    let weather = read_weather_csv(&config.input.weather, &columns).with_context(|| {
        format!(
            "failed to read weather CSV: {}",
            config.input.weather.display()
        )
    })?;

    let logger = convert::build_logger_config(&config.input);
    info!(n_blocks = config.input.stage_blocks.len(), "reading stage logger blocks");
    let stage = read_stage_blocks(config.input.stage_blocks.as_slice(), &logger)
        .context("failed to read stage logger blocks")?;

    let sensor_pairs = match convert::sensor_pairs_source(&config)? {
        SensorPairsSource::File(path) => {
            let (x, y) = read_pairs_csv(
                path,
                &config.calibration.sensor_x_col,
                &config.calibration.sensor_y_col,
            )
            .with_context(|| format!("failed to read sensor pairs: {}", path.display()))?;
            CalibrationPairs::new(x, y).context("invalid sensor calibration pairs")?
        }
        SensorPairsSource::Inline(pairs) => convert::parse_inline_pairs(pairs)?,
    };

    let area_path = &config.input.stage_area;
    let (x, y) = read_pairs_csv(
        area_path,
        &config.calibration.area_x_col,
        &config.calibration.area_y_col,
    )
    .with_context(|| format!("failed to read stage-area table: {}", area_path.display()))?;
    let area_pairs = CalibrationPairs::new(x, y).context("invalid stage-area pairs")?;

    // 3. Run pipeline
    let inputs = PipelineInputs {
        weather,
        stage,
        sensor_pairs,
        area_pairs,
    };
    let output = run_pipeline(inputs, &site).context("pipeline failed")?;
    if !output.warnings.is_empty() {
        warn!(
            sensor_out_of_domain = output.warnings.sensor_out_of_domain,
            area_out_of_domain = output.warnings.area_out_of_domain,
            missing_weather_days = output.warnings.missing_weather_days.len(),
            "run finished with data-quality warnings"
        );
    }

    // 4. Write outputs
    let dir = args.output_dir.unwrap_or(config.output.dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

    let dry_path = dir.join(&config.output.dry_file);
    write_csv(&dry_path, &DailyRecord::COLUMNS, output.dry.rows())
        .with_context(|| format!("failed to write {}", dry_path.display()))?;
    let rainy_path = dir.join(&config.output.rainy_file);
    write_csv(&rainy_path, &DailyRecord::COLUMNS, output.rainy.rows())
        .with_context(|| format!("failed to write {}", rainy_path.display()))?;
    let report_path = dir.join(&config.output.report_file);
    write_json(&report_path, &output.report())
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    info!(
        dir = %dir.display(),
        n_dry = output.dry.len(),
        n_rainy = output.rainy.len(),
        "outputs written"
    );
    Ok(())
}
