use super::simulate::{build_interaction_lists, load_configuration};
use crate::core::io::observables::ObservableLog;
use crate::core::io::output::OutputLayout;
use crate::core::models::configuration::Configuration;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::neighbours::VerletList;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::schedule::LogSchedule;
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub snapshots_read: usize,
    pub rows_written: usize,
}

/// Rebuilds the observable table of a finished run from `rootdir/configs/cfg_<t>.xy`.
///
/// Walks the log schedule in order. The snapshot at `t = tw·c + 1` becomes the reference of
/// cycle `c`; every entry is evaluated against its cycle's reference and written to `output`.
#[instrument(skip_all, name = "analysis_workflow")]
pub fn run(
    config: &SimulationConfig,
    output: &Path,
    reporter: &ProgressReporter,
) -> Result<AnalysisSummary, EngineError> {
    config.validate()?;
    let layout = OutputLayout::new(&config.output.root_dir);
    let schedule = &config.schedule;
    let log_schedule = LogSchedule::from_config(schedule);

    let mut observable_log = ObservableLog::create(output, &config.output.observables)?;
    let mut references: Vec<Configuration> = Vec::with_capacity(schedule.cycles);
    let mut current: Option<(u64, Configuration)> = None;
    let mut snapshots_read = 0;

    reporter.report(Progress::PhaseStart { name: "Analysis" });
    reporter.report(Progress::TaskStart {
        total_steps: log_schedule.len() as u64,
    });
    info!(
        checkpoints = log_schedule.len(),
        root = %layout.root().display(),
        "Recomputing observables from saved snapshots."
    );

    for (t, cycle) in log_schedule.iter() {
        let cfg = match current.take() {
            Some((loaded_t, cfg)) if loaded_t == t => cfg,
            _ => {
                let path = layout.snapshot_path(t);
                if !path.is_file() {
                    return Err(EngineError::MissingSnapshot { t, path });
                }
                let mut cfg = load_configuration(&path, &config.system)?;
                build_interaction_lists(&mut cfg, &mut VerletList::default())?;
                snapshots_read += 1;

                let captured = references.len() as u64;
                if references.len() < schedule.cycles && t == schedule.waiting_time * captured + 1
                {
                    references.push(cfg.clone());
                    debug!(t, cycle = captured, "Captured cycle reference");
                }
                cfg
            }
        };

        let reference = references.get(cycle).ok_or_else(|| {
            EngineError::Internal(format!(
                "checkpoint t = {t} refers to cycle {cycle} before its reference was captured"
            ))
        })?;
        observable_log.append(t, cycle, &cfg, reference)?;
        current = Some((t, cfg));
        reporter.report(Progress::TaskIncrement);
    }

    observable_log.flush()?;
    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let summary = AnalysisSummary {
        snapshots_read,
        rows_written: observable_log.rows(),
    };
    info!(
        snapshots = summary.snapshots_read,
        rows = summary.rows_written,
        "Analysis complete."
    );
    Ok(summary)
}
