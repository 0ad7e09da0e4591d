//! Flat-file input and output of trimer simulations.
//!
//! Snapshots use a whitespace-separated `diameter x y z` layout (see [`trimer`]), observables are
//! appended to a space-delimited table (see [`observables`]), and [`output`] fixes where both
//! live under a run's root directory.

pub mod observables;
pub mod output;
pub mod traits;
pub mod trimer;
