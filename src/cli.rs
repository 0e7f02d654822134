use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check-dam evaporation and stage processing.
#[derive(Parser)]
#[command(
    name = "checkdam",
    version,
    about = "Daily evaporation and check-dam stage series from weather and water-level telemetry"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline and write the dry/rainy daily tables.
    Run(RunArgs),
    /// Fit a single polynomial calibration and print it as JSON.
    Calibrate(CalibrateArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "checkdam.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `calibrate` subcommand.
#[derive(clap::Args)]
pub struct CalibrateArgs {
    /// CSV file with a header row holding the pairs.
    #[arg(short, long)]
    pub pairs: PathBuf,

    /// Column holding the independent values.
    #[arg(long)]
    pub x_col: String,

    /// Column holding the dependent values.
    #[arg(long)]
    pub y_col: String,

    /// Polynomial degree.
    #[arg(short, long, default_value_t = 1)]
    pub degree: usize,
}
