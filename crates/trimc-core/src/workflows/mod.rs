//! # Workflows Module
//!
//! Top-level entry points that drive complete runs.
//!
//! - **Simulation Workflow** ([`simulate`]) - Sweeps a configuration through the full schedule,
//!   writing snapshots and observables at the checkpoints.
//! - **Analysis Workflow** ([`analyze`]) - Recomputes the observable table of a finished run from
//!   its saved snapshots, without any dynamics.
//!
//! Both report progress through a [`ProgressReporter`](crate::engine::progress::ProgressReporter)
//! and return [`EngineError`](crate::engine::error::EngineError) on failure.

pub mod analyze;
pub mod simulate;
