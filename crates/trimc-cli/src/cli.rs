use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "trimc - Metropolis Monte Carlo simulation of polydisperse trimer glass formers.",
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
    /// Run a simulation from an initial configuration.
    Run(RunArgs),
    /// Recompute the observable table of a finished run from its saved snapshots.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Initial configuration: one `diameter x y z` (or `id diameter x y z`) line per particle.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub init: PathBuf,

    /// Run parameters in JSON or TOML format (chosen by file extension).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Observables to record, comma separated. Any of U, MSD, Fs, Cs.
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub observables: Vec<String>,

    /// Seed of the random number generator. A random seed is drawn and logged if omitted.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a run parameter, overriding the parameter file.
    /// Can be used multiple times. Example: -S T=0.45
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Do not draw a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Run parameters of the finished run.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub params: PathBuf,

    /// Observables to compute, comma separated. Any of U, MSD, Fs, Cs.
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub observables: Vec<String>,

    /// Destination of the observable table. Defaults to `<rootdir>/obs.txt`.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a run parameter, overriding the parameter file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Do not draw a progress bar.
    #[arg(long)]
    pub no_progress: bool,
}
