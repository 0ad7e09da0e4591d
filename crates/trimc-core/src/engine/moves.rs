use super::config::MetropolisConfig;
use crate::core::forcefield::energy::EnergyCalculator;
use crate::core::models::configuration::Configuration;
use nalgebra::Vector3;
use rand::Rng;

/// Metropolis acceptance for an energy change at temperature `temperature`.
///
/// Downhill moves are accepted without consuming a random number. Otherwise one uniform
/// `U ∈ [0, 1)` is drawn and the move is accepted iff `exp(-ΔE / T) > U`, so an infinite `ΔE`
/// is always rejected.
#[inline]
pub fn metropolis_accept<R: Rng + ?Sized>(delta_e: f64, temperature: f64, rng: &mut R) -> bool {
    if delta_e < 0.0 {
        return true;
    }
    (-delta_e / temperature).exp() > rng.r#gen::<f64>()
}

/// Attempt and acceptance counters of both trial kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStatistics {
    pub displacement_attempts: u64,
    pub displacement_accepted: u64,
    pub flip_attempts: u64,
    pub flip_accepted: u64,
}

impl MoveStatistics {
    pub fn displacement_acceptance(&self) -> f64 {
        ratio(self.displacement_accepted, self.displacement_attempts)
    }

    pub fn flip_acceptance(&self) -> f64 {
        ratio(self.flip_accepted, self.flip_attempts)
    }
}

fn ratio(accepted: u64, attempts: u64) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        accepted as f64 / attempts as f64
    }
}

/// Metropolis trial moves on a [`Configuration`].
///
/// Every trial consumes random numbers in a fixed order: the branch draw, the particle index,
/// then either the three displacement components (x, y, z) or the partner slot of a flip, and
/// finally the acceptance draw when the move is not downhill.
#[derive(Debug, Clone)]
pub struct MoveKernels {
    temperature: f64,
    flip_probability: f64,
    max_displacement: f64,
    statistics: MoveStatistics,
}

impl MoveKernels {
    pub fn new(config: &MetropolisConfig) -> Self {
        Self {
            temperature: config.temperature,
            flip_probability: config.flip_probability,
            max_displacement: config.max_displacement,
            statistics: MoveStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &MoveStatistics {
        &self.statistics
    }

    /// Attempts to displace particle `j` by a vector drawn uniformly from a cube of edge
    /// `max_displacement`. A rejected move restores both position representations exactly.
    pub fn try_displacement<R: Rng + ?Sized>(
        &mut self,
        cfg: &mut Configuration,
        j: usize,
        rng: &mut R,
    ) -> bool {
        self.statistics.displacement_attempts += 1;

        let old_wrapped = *cfg.position(j);
        let old_unwrapped = *cfg.unwrapped_position(j);
        let old_energy = EnergyCalculator::particle_energy(cfg, j);

        let delta = Vector3::new(
            (rng.r#gen::<f64>() - 0.5) * self.max_displacement,
            (rng.r#gen::<f64>() - 0.5) * self.max_displacement,
            (rng.r#gen::<f64>() - 0.5) * self.max_displacement,
        );
        let new_wrapped = cfg.periodic_box().wrap_vector(&(old_wrapped + delta));
        cfg.set_position(j, new_wrapped, old_unwrapped + delta);

        let new_energy = EnergyCalculator::particle_energy(cfg, j);
        if metropolis_accept(new_energy - old_energy, self.temperature, rng) {
            self.statistics.displacement_accepted += 1;
            true
        } else {
            cfg.set_position(j, old_wrapped, old_unwrapped);
            false
        }
    }

    /// Attempts to exchange the diameter of particle `j` with one of its two bonded partners.
    pub fn try_flip<R: Rng + ?Sized>(
        &mut self,
        cfg: &mut Configuration,
        j: usize,
        rng: &mut R,
    ) -> bool {
        let slot = rng.gen_range(0..2);
        let Some(&k) = cfg.bonded_neighbours(j).get(slot) else {
            return false;
        };
        self.statistics.flip_attempts += 1;

        let pair_energy = |cfg: &Configuration| {
            EnergyCalculator::particle_energy(cfg, j) + EnergyCalculator::particle_energy(cfg, k)
        };
        let old_energy = pair_energy(cfg);
        cfg.swap_diameters(j, k);
        let new_energy = pair_energy(cfg);

        if metropolis_accept(new_energy - old_energy, self.temperature, rng) {
            self.statistics.flip_accepted += 1;
            true
        } else {
            cfg.swap_diameters(j, k);
            false
        }
    }

    /// One trial: a displacement with probability `1 - p_flip`, otherwise a flip, applied to a
    /// uniformly chosen particle.
    pub fn trial<R: Rng + ?Sized>(&mut self, cfg: &mut Configuration, rng: &mut R) -> bool {
        let n = cfg.len();
        if n == 0 {
            return false;
        }
        let branch = rng.r#gen::<f64>();
        let j = ((rng.r#gen::<f64>() * n as f64) as usize).min(n - 1);
        if branch > self.flip_probability {
            self.try_displacement(cfg, j, rng)
        } else {
            self.try_flip(cfg, j, rng)
        }
    }

    /// `N` consecutive trials.
    pub fn sweep<R: Rng + ?Sized>(&mut self, cfg: &mut Configuration, rng: &mut R) {
        for _ in 0..cfg.len() {
            self.trial(cfg, rng);
        }
    }
}
