//! # Force Field Module
//!
//! Energy model of the trimer system.
//!
//! ## Overview
//!
//! Two pair interactions act between beads:
//!
//! - **WCA repulsion** between every pair of beads closer than `2^{1/6} σ_ij`, with the
//!   additive mixing rule `σ_ij = (σ_i + σ_j) / 2`
//! - **FENE bonds** between the three beads of a molecule, with spring constant and maximum
//!   extension chosen by the unordered pair of bead diameters
//!
//! ## Key Components
//!
//! - [`params`] - Cutoff constants and the FENE parameter table
//! - [`potentials`] - Pure pair potentials evaluated on squared distances
//! - [`energy`] - Per-particle and total energies of a [`Configuration`](crate::core::models::configuration::Configuration)

pub mod energy;
pub mod params;
pub(crate) mod potentials;
