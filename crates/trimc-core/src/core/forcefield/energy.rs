use super::params::{FeneParams, pair_sigma};
use super::potentials;
use crate::core::models::configuration::Configuration;

pub struct EnergyCalculator;

impl EnergyCalculator {
    /// WCA energy between particles `i` and `j` at their current wrapped positions.
    #[inline]
    pub fn wca_pair(cfg: &Configuration, i: usize, j: usize) -> f64 {
        let r2 = cfg
            .periodic_box()
            .distance_squared(cfg.position(i), cfg.position(j));
        potentials::wca(r2, pair_sigma(cfg.diameter(i), cfg.diameter(j)))
    }

    /// FENE energy of the bond between `i` and `j`; `+∞` for a broken bond.
    #[inline]
    pub fn fene_pair(cfg: &Configuration, i: usize, j: usize) -> f64 {
        let r2 = cfg
            .periodic_box()
            .distance_squared(cfg.position(i), cfg.position(j));
        let params = FeneParams::for_pair(cfg.diameter(i), cfg.diameter(j));
        potentials::fene(r2, params.stiffness, params.max_extension)
    }

    /// Energy of particle `j` with everything it interacts with: WCA over its neighbour list
    /// plus FENE over its two bonded partners.
    pub fn particle_energy(cfg: &Configuration, j: usize) -> f64 {
        let repulsive: f64 = cfg
            .neighbours(j)
            .iter()
            .map(|&i| Self::wca_pair(cfg, i, j))
            .sum();
        let bonded: f64 = cfg
            .bonded_neighbours(j)
            .iter()
            .map(|&i| Self::fene_pair(cfg, i, j))
            .sum();
        repulsive + bonded
    }

    /// Sum of [`EnergyCalculator::particle_energy`] over all particles. Every pair is counted
    /// twice.
    pub fn total_energy(cfg: &Configuration) -> f64 {
        (0..cfg.len()).map(|j| Self::particle_energy(cfg, j)).sum()
    }

    /// Potential energy per particle, `VTotal / (2N)`.
    pub fn energy_per_particle(cfg: &Configuration) -> f64 {
        if cfg.is_empty() {
            return 0.0;
        }
        Self::total_energy(cfg) / (2.0 * cfg.len() as f64)
    }

    /// First bonded pair `(i, j)` with `i < j` stretched to or beyond its maximum extension.
    pub fn find_broken_bond(cfg: &Configuration) -> Option<(usize, usize)> {
        (0..cfg.len()).find_map(|i| {
            cfg.bonded_neighbours(i)
                .iter()
                .copied()
                .filter(|&j| j > i)
                .find(|&j| Self::fene_pair(cfg, i, j).is_infinite())
                .map(|j| (i, j))
        })
    }
}
