use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::observables::ObservableLogError;
use crate::core::io::trimer::TrimerFileError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigurationFile {
        path: PathBuf,
        source: TrimerFileError,
    },

    #[error("Failed to write snapshot '{path}': {source}")]
    Snapshot {
        path: PathBuf,
        source: TrimerFileError,
    },

    #[error("Missing snapshot for t = {t}: '{path}'")]
    MissingSnapshot { t: u64, path: PathBuf },

    #[error("Observable output failed: {source}")]
    ObservableLog {
        #[from]
        source: ObservableLogError,
    },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Particle count {found} is not a multiple of 3")]
    Topology { found: usize },

    #[error("Configuration holds {found} particles, expected {expected}")]
    ParticleCount { expected: usize, found: usize },

    #[error("Bond between particles {i} and {j} is stretched beyond its maximum extension")]
    BrokenBond { i: usize, j: usize },

    #[error("Initial configuration has non-finite energy per particle ({energy})")]
    NonFiniteEnergy { energy: f64 },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
