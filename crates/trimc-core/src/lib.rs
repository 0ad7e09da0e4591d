//! # TRIMC Core Library
//!
//! A Metropolis Monte Carlo engine for dense systems of three-bead "trimer" molecules with
//! heterogeneous bead diameters in a periodic cubic box. It samples equilibrium and aging
//! ensembles through particle displacements and intra-molecular diameter flips, and records
//! energy, mean-square displacement and self-scattering observables on logarithmic and
//! linear time grids across repeated aging cycles.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: periodic geometry, the
//!   `Configuration` data model, the WCA/FENE potential model, observables and the flat-file
//!   formats for snapshots and observable tables.
//!
//! - **[`engine`]: The Logic Core.** Stateful machinery that advances a configuration: the
//!   Verlet neighbour engine, the Metropolis move kernels, the sampling schedules, run
//!   configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on top of the engine: a full
//!   aging simulation (`simulate`) and an observables-only re-analysis of saved snapshots
//!   (`analyze`).

pub mod core;
pub mod engine;
pub mod workflows;
