use super::error::EngineError;
use crate::core::forcefield::params::WCA_CUTOFF_FACTOR;
use crate::core::models::configuration::{BEADS_PER_MOLECULE, Configuration};
use crate::core::models::diameter::SIGMA_MAX;
use tracing::debug;

/// Verlet skin added to the interaction cutoff when building neighbour lists.
pub const SKIN: f64 = 0.7;

/// Largest WCA cutoff over all diameter pairs, `2^{1/6} σ_max`.
pub const INTERACTION_CUTOFF: f64 = WCA_CUTOFF_FACTOR * SIGMA_MAX;

/// Verlet neighbour lists with skin-based rebuild decisions.
///
/// A rebuild stores every pair closer than `r_c + skin` and records the current positions as
/// reference. The lists remain a superset of the interacting pairs as long as no particle has
/// moved more than `skin / 2` from its reference.
#[derive(Debug, Clone)]
pub struct VerletList {
    list_radius_squared: f64,
    rebuild_threshold_squared: f64,
    rebuilds: usize,
}

impl Default for VerletList {
    fn default() -> Self {
        Self::new(INTERACTION_CUTOFF, SKIN)
    }
}

impl VerletList {
    pub fn new(cutoff: f64, skin: f64) -> Self {
        Self {
            list_radius_squared: (cutoff + skin) * (cutoff + skin),
            rebuild_threshold_squared: skin * skin / 4.0,
            rebuilds: 0,
        }
    }

    /// Number of rebuilds performed so far.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Rebuilds every neighbour list with an all-pairs scan and resets the reference positions.
    pub fn rebuild(&mut self, cfg: &mut Configuration) {
        let n = cfg.len();
        let mut lists = vec![Vec::new(); n];
        let periodic_box = *cfg.periodic_box();
        for i in 0..n {
            for j in (i + 1)..n {
                let r2 = periodic_box.distance_squared(cfg.position(i), cfg.position(j));
                if r2 < self.list_radius_squared {
                    lists[i].push(j);
                    lists[j].push(i);
                }
            }
        }
        cfg.set_neighbour_lists(lists);
        cfg.reset_reference_positions();
        self.rebuilds += 1;
    }

    /// Whether any particle has moved further than `skin / 2` since the last rebuild.
    pub fn needs_rebuild(&self, cfg: &Configuration) -> bool {
        let periodic_box = cfg.periodic_box();
        let max_displacement_squared = cfg
            .positions()
            .iter()
            .zip(cfg.reference_positions())
            .map(|(p, p0)| periodic_box.distance_squared(p, p0))
            .fold(0.0, f64::max);
        max_displacement_squared > self.rebuild_threshold_squared
    }

    /// Rebuilds if the lists are stale. Returns whether a rebuild happened.
    pub fn update(&mut self, cfg: &mut Configuration) -> bool {
        if !self.needs_rebuild(cfg) {
            return false;
        }
        self.rebuild(cfg);
        debug!(rebuilds = self.rebuilds, "Rebuilt neighbour lists");
        true
    }
}

/// Fills the fixed bond list: particle `i` is bonded to the other two members of molecule
/// `i / 3`.
pub fn build_bond_list(cfg: &mut Configuration) -> Result<(), EngineError> {
    let n = cfg.len();
    if n % BEADS_PER_MOLECULE != 0 {
        return Err(EngineError::Topology { found: n });
    }
    let bonds = (0..n)
        .map(|i| {
            let first = i - i % BEADS_PER_MOLECULE;
            match i % BEADS_PER_MOLECULE {
                0 => [first + 1, first + 2],
                1 => [first, first + 2],
                _ => [first, first + 1],
            }
        })
        .collect();
    cfg.set_bonds(bonds);
    Ok(())
}
