use super::neighbours::SKIN;
use crate::core::models::configuration::BEADS_PER_MOLECULE;
use crate::core::observables::Observable;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_DENSITY: f64 = 1.2;
pub const DEFAULT_MAX_DISPLACEMENT: f64 = 0.17;
pub const DEFAULT_OBSERVABLES: [Observable; 3] = [
    Observable::Energy,
    Observable::MeanSquareDisplacement,
    Observable::SelfScattering,
];

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub num_particles: usize,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetropolisConfig {
    pub temperature: f64,
    /// Probability that a trial is a diameter flip rather than a displacement.
    pub flip_probability: f64,
    /// Edge length `δmax` of the cube from which displacement trials are drawn.
    pub max_displacement: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    /// Length of one cycle in sweeps.
    pub tau: u64,
    /// Sweeps between the starts of consecutive cycles.
    pub waiting_time: u64,
    pub cycles: usize,
    pub log_points: usize,
    pub lin_points: usize,
}

impl ScheduleConfig {
    /// Total number of sweeps: `tw · (cycles − 1) + tau`.
    pub fn total_sweeps(&self) -> u64 {
        self.waiting_time * (self.cycles as u64 - 1) + self.tau
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub root_dir: PathBuf,
    pub observables: Vec<Observable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub system: SystemConfig,
    pub metropolis: MetropolisConfig,
    pub schedule: ScheduleConfig,
    pub output: OutputConfig,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    num_particles: Option<usize>,
    density: Option<f64>,
    temperature: Option<f64>,
    flip_probability: Option<f64>,
    max_displacement: Option<f64>,
    tau: Option<u64>,
    waiting_time: Option<u64>,
    cycles: Option<usize>,
    log_points: Option<usize>,
    lin_points: Option<usize>,
    root_dir: Option<PathBuf>,
    observables: Option<Vec<Observable>>,
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_particles(mut self, n: usize) -> Self {
        self.num_particles = Some(n);
        self
    }
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn flip_probability(mut self, p: f64) -> Self {
        self.flip_probability = Some(p);
        self
    }
    pub fn max_displacement(mut self, delta: f64) -> Self {
        self.max_displacement = Some(delta);
        self
    }
    pub fn tau(mut self, tau: u64) -> Self {
        self.tau = Some(tau);
        self
    }
    pub fn waiting_time(mut self, tw: u64) -> Self {
        self.waiting_time = Some(tw);
        self
    }
    pub fn cycles(mut self, cycles: usize) -> Self {
        self.cycles = Some(cycles);
        self
    }
    pub fn log_points(mut self, n: usize) -> Self {
        self.log_points = Some(n);
        self
    }
    pub fn lin_points(mut self, n: usize) -> Self {
        self.lin_points = Some(n);
        self
    }
    pub fn root_dir(mut self, path: PathBuf) -> Self {
        self.root_dir = Some(path);
        self
    }
    pub fn observables(mut self, observables: Vec<Observable>) -> Self {
        self.observables = Some(observables);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let system = SystemConfig {
            num_particles: self
                .num_particles
                .ok_or(ConfigError::MissingParameter("N"))?,
            density: self.density.unwrap_or(DEFAULT_DENSITY),
        };
        let metropolis = MetropolisConfig {
            temperature: self.temperature.ok_or(ConfigError::MissingParameter("T"))?,
            flip_probability: self
                .flip_probability
                .ok_or(ConfigError::MissingParameter("p_flip"))?,
            max_displacement: self.max_displacement.unwrap_or(DEFAULT_MAX_DISPLACEMENT),
        };
        let schedule = ScheduleConfig {
            tau: self.tau.ok_or(ConfigError::MissingParameter("tau"))?,
            waiting_time: self.waiting_time.ok_or(ConfigError::MissingParameter("tw"))?,
            cycles: self.cycles.ok_or(ConfigError::MissingParameter("cycles"))?,
            log_points: self
                .log_points
                .ok_or(ConfigError::MissingParameter("logPoints"))?,
            lin_points: self
                .lin_points
                .ok_or(ConfigError::MissingParameter("linPoints"))?,
        };
        let output = OutputConfig {
            root_dir: self
                .root_dir
                .ok_or(ConfigError::MissingParameter("rootdir"))?,
            observables: self
                .observables
                .unwrap_or_else(|| DEFAULT_OBSERVABLES.to_vec()),
        };
        let config = SimulationConfig {
            system,
            metropolis,
            schedule,
            output,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SimulationConfig {
    /// Checks parameter ranges. Called by [`SimulationConfigBuilder::build`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.system.num_particles;
        if n == 0 || n % BEADS_PER_MOLECULE != 0 {
            return Err(invalid("N", format!("{n} is not a positive multiple of 3")));
        }
        if !(self.system.density > 0.0 && self.system.density.is_finite()) {
            return Err(invalid("density", "must be positive and finite"));
        }

        let m = &self.metropolis;
        if !(m.temperature > 0.0) {
            return Err(invalid("T", "must be positive"));
        }
        if !(0.0..=1.0).contains(&m.flip_probability) {
            return Err(invalid("p_flip", "must lie in [0, 1]"));
        }
        if !(m.max_displacement > 0.0) {
            return Err(invalid("maxDisplacement", "must be positive"));
        }
        // Per-trial sanity bound: one displacement, at most half the cube diagonal, stays below
        // half the skin. Repeated moves of one particle within a sweep can still exceed it.
        if m.max_displacement * 3f64.sqrt() / 2.0 >= SKIN / 2.0 {
            return Err(invalid(
                "maxDisplacement",
                format!("a single trial may move a particle beyond half the skin ({SKIN})"),
            ));
        }

        let s = &self.schedule;
        if s.tau < 1 {
            return Err(invalid("tau", "must be at least 1"));
        }
        if s.waiting_time < 1 {
            return Err(invalid("tw", "must be at least 1"));
        }
        if s.cycles < 1 {
            return Err(invalid("cycles", "must be at least 1"));
        }
        if s.log_points < 2 {
            return Err(invalid("logPoints", "must be at least 2"));
        }
        if self.output.observables.is_empty() {
            return Err(invalid("observables", "at least one observable is required"));
        }
        Ok(())
    }
}
