use super::progress_reporter;
use crate::cli::RunArgs;
use crate::config::PartialRunParams;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use trimc::core::io::output::OutputLayout;
use trimc::workflows::simulate::{self, RunSummary, load_configuration};

pub fn run(args: RunArgs) -> Result<RunSummary> {
    info!("Starting simulation run.");
    let config = PartialRunParams::from_file(&args.params)?
        .merge_with_cli(&args.observables, &args.set_values)?;
    debug!("Resolved run configuration: {:?}", &config);

    let layout = OutputLayout::new(&config.output.root_dir);
    layout.prepare(Some(args.params.as_path()))?;

    info!("Loading initial configuration from {:?}", &args.init);
    let initial = load_configuration(&args.init, &config.system)?;

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(seed, "Seeding random number generator.");
    let mut rng = StdRng::seed_from_u64(seed);

    let reporter = progress_reporter(!args.no_progress);
    let summary = simulate::run(initial, &config, &mut rng, &reporter)?;

    info!(
        sweeps = summary.sweeps,
        rows = summary.rows_written,
        snapshots = summary.snapshots_written,
        "Run finished."
    );
    println!(
        "Completed {} sweeps: {} observable rows, {} snapshots in {}",
        summary.sweeps,
        summary.rows_written,
        summary.snapshots_written,
        layout.root().display()
    );
    println!(
        "Acceptance: displacement {:.3}, flip {:.3}; neighbour list rebuilds: {}; final U = {:.6}",
        summary.moves.displacement_acceptance(),
        summary.moves.flip_acceptance(),
        summary.neighbour_rebuilds,
        summary.final_energy_per_particle
    );
    Ok(summary)
}
