use super::progress_reporter;
use crate::cli::AnalyzeArgs;
use crate::config::PartialRunParams;
use crate::error::Result;
use tracing::info;
use trimc::core::io::output::OutputLayout;
use trimc::workflows::analyze::{self, AnalysisSummary};

pub fn run(args: AnalyzeArgs) -> Result<AnalysisSummary> {
    info!("Starting analysis of saved snapshots.");
    let config = PartialRunParams::from_file(&args.params)?
        .merge_with_cli(&args.observables, &args.set_values)?;

    let output = args
        .output
        .unwrap_or_else(|| OutputLayout::new(&config.output.root_dir).observables_path());

    let reporter = progress_reporter(!args.no_progress);
    let summary = analyze::run(&config, &output, &reporter)?;

    println!(
        "Read {} snapshots, wrote {} rows to {}",
        summary.snapshots_read,
        summary.rows_written,
        output.display()
    );
    Ok(summary)
}
