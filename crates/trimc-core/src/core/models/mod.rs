//! # Core Models Module
//!
//! Data structures describing the state of a trimer system.
//!
//! ## Key Components
//!
//! - [`diameter`] - The three allowed bead diameters and their numeric values
//! - [`configuration`] - Per-particle positions, diameters, neighbour and bond lists
//!
//! A [`configuration::Configuration`] is created from a snapshot file (see
//! [`crate::core::io::trimer`]) or by cloning a live configuration when a cycle reference is
//! captured. Everything that changes it over simulated time lives in [`crate::engine`].

pub mod configuration;
pub mod diameter;
