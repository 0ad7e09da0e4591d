//! # Core Module
//!
//! Fundamental, stateless building blocks of the trimer Monte Carlo engine.
//!
//! ## Architecture
//!
//! - **Geometry** ([`utils::geometry`]) - Periodic box, minimum-image separation and wrapping
//! - **Data Model** ([`models`]) - Particle diameters and the evolving `Configuration`
//! - **Energy Calculations** ([`forcefield`]) - WCA and FENE pair potentials and energy sums
//! - **Observables** ([`observables`]) - Energy, MSD, self-scattering and diameter correlation
//! - **File I/O** ([`io`]) - Trimer snapshot files, observable tables and output layout
//!
//! Everything in this layer is a pure function of its inputs or a plain data container; the
//! mutation of a configuration over time belongs to the [`crate::engine`] layer.

pub mod forcefield;
pub mod io;
pub mod models;
pub mod observables;
pub mod utils;
