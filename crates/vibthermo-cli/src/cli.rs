use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "VibThermo CLI - Vibrational partition functions, heat capacities, energies and entropies under the harmonic-oscillator and quasi-RRHO models.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every vibrational property of a model over a set of temperatures.
    Eval(EvalArgs),
    /// Write the model described by a run file as a JSON mapping.
    Export(ExportArgs),
}

/// Model selection shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Path to the run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load the model from a JSON mapping file instead of the `[model]` section.
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S model.alpha=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Temperature in K. Can be repeated; replaces the temperatures of the config file.
    #[arg(short = 'T', long = "temperature", value_name = "KELVIN")]
    pub temperatures: Vec<f64>,

    /// Also write the property table as CSV.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Path for the JSON model file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}
