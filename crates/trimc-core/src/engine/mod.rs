//! # Engine Module
//!
//! Monte Carlo machinery that evolves a [`Configuration`](crate::core::models::configuration::Configuration)
//! in simulated time.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters, builder and validation
//! - **Neighbour Engine** ([`neighbours`]) - Verlet lists with a skin and the fixed trimer bonds
//! - **Move Kernels** ([`moves`]) - Metropolis displacement and diameter-flip trials
//! - **Schedules** ([`schedule`]) - Log-spaced measurement and linear snapshot times
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error type shared by the workflows
//!
//! Everything here is single-threaded and deterministic for a given random number generator;
//! the generator is always passed in explicitly.

pub mod config;
pub mod error;
pub mod moves;
pub mod neighbours;
pub mod progress;
pub mod schedule;
