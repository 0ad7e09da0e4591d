use crate::core::forcefield::energy::EnergyCalculator;
use crate::core::io::observables::ObservableLog;
use crate::core::io::output::OutputLayout;
use crate::core::io::traits::SnapshotFile;
use crate::core::io::trimer::TrimerFile;
use crate::core::models::configuration::Configuration;
use crate::core::utils::geometry::PeriodicBox;
use crate::engine::config::{SimulationConfig, SystemConfig};
use crate::engine::error::EngineError;
use crate::engine::moves::{MoveKernels, MoveStatistics};
use crate::engine::neighbours::{VerletList, build_bond_list};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::schedule::{LogSchedule, linear_schedule};
use rand::Rng;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Outcome of a completed simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sweeps: u64,
    pub rows_written: usize,
    pub snapshots_written: usize,
    pub neighbour_rebuilds: usize,
    pub moves: MoveStatistics,
    pub final_energy_per_particle: f64,
}

/// Reads a snapshot file and places it in the periodic box implied by `N` and the density.
///
/// The file must hold exactly `N` particles.
pub fn load_configuration(path: &Path, system: &SystemConfig) -> Result<Configuration, EngineError> {
    let snapshot =
        TrimerFile::read_from_path(path).map_err(|source| EngineError::ConfigurationFile {
            path: path.to_path_buf(),
            source,
        })?;
    if snapshot.len() != system.num_particles {
        return Err(EngineError::ParticleCount {
            expected: system.num_particles,
            found: snapshot.len(),
        });
    }
    let periodic_box = PeriodicBox::from_density(system.num_particles, system.density);
    Ok(snapshot.into_configuration(periodic_box))
}

/// Builds the bond and neighbour lists of a freshly loaded configuration.
pub(crate) fn build_interaction_lists(
    cfg: &mut Configuration,
    verlet: &mut VerletList,
) -> Result<(), EngineError> {
    build_bond_list(cfg)?;
    verlet.rebuild(cfg);
    cfg.update_center_of_mass();
    Ok(())
}

/// Writes `cfg_<t>.xy` unless it already exists. Returns whether a file was written.
pub(crate) fn write_snapshot_if_absent(
    layout: &OutputLayout,
    t: u64,
    cfg: &Configuration,
) -> Result<bool, EngineError> {
    let path = layout.snapshot_path(t);
    if path.exists() {
        debug!(t, path = %path.display(), "Snapshot already present, skipping write");
        return Ok(false);
    }
    TrimerFile::write_to_path(cfg, &path)
        .map_err(|source| EngineError::Snapshot { path, source })?;
    Ok(true)
}

#[instrument(skip_all, name = "simulation_workflow")]
pub fn run<R: Rng + ?Sized>(
    initial: Configuration,
    config: &SimulationConfig,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<RunSummary, EngineError> {
    // === Phase 1: Warm-up ===
    reporter.report(Progress::PhaseStart { name: "Warm-up" });
    config.validate()?;
    if initial.len() != config.system.num_particles {
        return Err(EngineError::ParticleCount {
            expected: config.system.num_particles,
            found: initial.len(),
        });
    }

    let mut cfg = initial;
    let mut verlet = VerletList::default();
    build_interaction_lists(&mut cfg, &mut verlet)?;

    if let Some((i, j)) = EnergyCalculator::find_broken_bond(&cfg) {
        return Err(EngineError::BrokenBond { i, j });
    }
    let initial_energy = EnergyCalculator::energy_per_particle(&cfg);
    if !initial_energy.is_finite() {
        return Err(EngineError::NonFiniteEnergy {
            energy: initial_energy,
        });
    }

    let layout = OutputLayout::new(&config.output.root_dir);
    layout.prepare(None).map_err(|source| EngineError::Io {
        path: layout.root().to_path_buf(),
        source,
    })?;

    let schedule = &config.schedule;
    let log_schedule = LogSchedule::from_config(schedule);
    let linear_times: BTreeSet<u64> = linear_schedule(
        schedule.tau,
        schedule.waiting_time,
        schedule.cycles,
        schedule.lin_points,
    )
    .into_iter()
    .collect();
    let total_sweeps = schedule.total_sweeps();

    let mut observable_log =
        ObservableLog::create(layout.observables_path(), &config.output.observables)?;
    let mut moves = MoveKernels::new(&config.metropolis);
    let mut references: Vec<Configuration> = Vec::with_capacity(schedule.cycles);
    let mut snapshots_written = 0;

    info!(
        particles = cfg.len(),
        box_length = cfg.periodic_box().length(),
        energy_per_particle = initial_energy,
        sweeps = total_sweeps,
        checkpoints = log_schedule.len(),
        "Initial configuration ready."
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Sweeping ===
    reporter.report(Progress::PhaseStart { name: "Sweeping" });
    reporter.report(Progress::TaskStart {
        total_steps: total_sweeps,
    });

    for t in 1..=total_sweeps {
        verlet.update(&mut cfg);

        if (t - 1) % schedule.waiting_time == 0 && references.len() < schedule.cycles {
            cfg.update_center_of_mass();
            references.push(cfg.clone());
            debug!(t, cycle = references.len() - 1, "Captured cycle reference");
        }

        if linear_times.contains(&t) && write_snapshot_if_absent(&layout, t, &cfg)? {
            snapshots_written += 1;
        }

        let entries = log_schedule.entries_at(t);
        if !entries.is_empty() {
            cfg.update_center_of_mass();
            if write_snapshot_if_absent(&layout, t, &cfg)? {
                snapshots_written += 1;
            }
            for &cycle in &log_schedule.cycles()[entries] {
                let reference = references.get(cycle).ok_or_else(|| {
                    EngineError::Internal(format!(
                        "checkpoint t = {t} refers to cycle {cycle} before its reference was captured"
                    ))
                })?;
                observable_log.append(t, cycle, &cfg, reference)?;
            }
        }

        moves.sweep(&mut cfg, rng);
        reporter.report(Progress::TaskIncrement);
    }

    observable_log.flush()?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let summary = RunSummary {
        sweeps: total_sweeps,
        rows_written: observable_log.rows(),
        snapshots_written,
        neighbour_rebuilds: verlet.rebuilds(),
        moves: *moves.statistics(),
        final_energy_per_particle: EnergyCalculator::energy_per_particle(&cfg),
    };
    info!(
        rows = summary.rows_written,
        snapshots = summary.snapshots_written,
        rebuilds = summary.neighbour_rebuilds,
        "Simulation complete."
    );
    Ok(summary)
}
