use super::diameter::Diameter;
use crate::core::utils::geometry::PeriodicBox;
use nalgebra::Vector3;

/// Number of beads in one molecule. Molecules occupy contiguous index blocks.
pub const BEADS_PER_MOLECULE: usize = 3;

/// The evolving state of an N-particle trimer system.
///
/// Positions are kept twice: wrapped into the periodic box (used for every energy and
/// neighbour computation) and unwrapped (accumulating raw displacements, used for transport
/// observables). `reference_positions` holds the wrapped positions at the last neighbour-list
/// rebuild and is only read by the staleness check.
///
/// Bond topology is implicit in the particle order: particle `i` belongs to molecule `i / 3`.
#[derive(Debug, Clone)]
pub struct Configuration {
    periodic_box: PeriodicBox,
    positions: Vec<Vector3<f64>>,
    unwrapped_positions: Vec<Vector3<f64>>,
    reference_positions: Vec<Vector3<f64>>,
    diameters: Vec<Diameter>,
    neighbours: Vec<Vec<usize>>,
    bonds: Vec<[usize; 2]>,
    center_of_mass: Vector3<f64>,
}

impl Configuration {
    /// Creates a configuration from unwrapped coordinates and diameters.
    ///
    /// Wrapped and reference positions are derived from the unwrapped ones. Neighbour and bond
    /// lists start empty; they are built by [`crate::engine::neighbours`].
    /// Callers pass one diameter per position; files are checked row by row when parsed.
    pub(crate) fn new(
        periodic_box: PeriodicBox,
        unwrapped_positions: Vec<Vector3<f64>>,
        diameters: Vec<Diameter>,
    ) -> Self {
        debug_assert_eq!(unwrapped_positions.len(), diameters.len());
        let positions: Vec<_> = unwrapped_positions
            .iter()
            .map(|p| periodic_box.wrap_vector(p))
            .collect();
        let n = positions.len();
        Self {
            periodic_box,
            reference_positions: positions.clone(),
            positions,
            unwrapped_positions,
            diameters,
            neighbours: vec![Vec::new(); n],
            bonds: Vec::new(),
            center_of_mass: Vector3::zeros(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn periodic_box(&self) -> &PeriodicBox {
        &self.periodic_box
    }

    #[inline]
    pub fn position(&self, i: usize) -> &Vector3<f64> {
        &self.positions[i]
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    #[inline]
    pub fn unwrapped_position(&self, i: usize) -> &Vector3<f64> {
        &self.unwrapped_positions[i]
    }

    pub fn unwrapped_positions(&self) -> &[Vector3<f64>] {
        &self.unwrapped_positions
    }

    pub fn reference_positions(&self) -> &[Vector3<f64>] {
        &self.reference_positions
    }

    #[inline]
    pub fn diameter(&self, i: usize) -> Diameter {
        self.diameters[i]
    }

    pub fn diameters(&self) -> &[Diameter] {
        &self.diameters
    }

    #[inline]
    pub fn neighbours(&self, i: usize) -> &[usize] {
        &self.neighbours[i]
    }

    /// Bonded partners of particle `i`; empty until the bond list has been built.
    #[inline]
    pub fn bonded_neighbours(&self, i: usize) -> &[usize] {
        match self.bonds.get(i) {
            Some(partners) => partners,
            None => &[],
        }
    }

    pub fn has_bonds(&self) -> bool {
        !self.bonds.is_empty()
    }

    /// Center of mass as of the last [`Configuration::update_center_of_mass`] call.
    #[inline]
    pub fn center_of_mass(&self) -> &Vector3<f64> {
        &self.center_of_mass
    }

    /// Recomputes the center of mass as the mean of the unwrapped positions.
    pub fn update_center_of_mass(&mut self) {
        if self.is_empty() {
            self.center_of_mass = Vector3::zeros();
            return;
        }
        let sum = self
            .unwrapped_positions
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p);
        self.center_of_mass = sum / self.len() as f64;
    }

    /// Overwrites both position representations of particle `i`.
    #[inline]
    pub(crate) fn set_position(&mut self, i: usize, wrapped: Vector3<f64>, unwrapped: Vector3<f64>) {
        self.positions[i] = wrapped;
        self.unwrapped_positions[i] = unwrapped;
    }

    #[inline]
    pub(crate) fn swap_diameters(&mut self, i: usize, j: usize) {
        self.diameters.swap(i, j);
    }

    pub(crate) fn set_neighbour_lists(&mut self, neighbours: Vec<Vec<usize>>) {
        debug_assert_eq!(neighbours.len(), self.len());
        self.neighbours = neighbours;
    }

    pub(crate) fn reset_reference_positions(&mut self) {
        self.reference_positions.clone_from(&self.positions);
    }

    pub(crate) fn set_bonds(&mut self, bonds: Vec<[usize; 2]>) {
        debug_assert_eq!(bonds.len(), self.len());
        self.bonds = bonds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_configuration() -> Configuration {
        Configuration::new(
            PeriodicBox::new(5.0),
            vec![
                Vector3::new(1.0, 4.0, 7.0),
                Vector3::new(2.0, 5.0, 8.0),
                Vector3::new(3.0, 6.0, -1.0),
            ],
            vec![Diameter::Small, Diameter::Medium, Diameter::Large],
        )
    }

    #[test]
    fn new_wraps_positions_and_keeps_unwrapped_coordinates() {
        let cfg = sample_configuration();
        assert_eq!(cfg.len(), 3);
        assert_eq!(*cfg.unwrapped_position(0), Vector3::new(1.0, 4.0, 7.0));
        assert_eq!(*cfg.position(0), Vector3::new(1.0, 4.0, 2.0));
        assert_eq!(*cfg.position(2), Vector3::new(3.0, 1.0, 4.0));
        assert_eq!(cfg.reference_positions(), cfg.positions());
    }

    #[test]
    fn update_center_of_mass_averages_unwrapped_positions() {
        let mut cfg = sample_configuration();
        assert_eq!(*cfg.center_of_mass(), Vector3::zeros());
        cfg.update_center_of_mass();
        let com = cfg.center_of_mass();
        assert!((com.x - 2.0).abs() < 1e-12);
        assert!((com.y - 5.0).abs() < 1e-12);
        assert!((com.z - 14.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn bonded_neighbours_are_empty_before_bonds_are_built() {
        let cfg = sample_configuration();
        assert!(!cfg.has_bonds());
        assert!(cfg.bonded_neighbours(1).is_empty());
    }

    #[test]
    fn swap_diameters_exchanges_two_particles() {
        let mut cfg = sample_configuration();
        cfg.swap_diameters(0, 2);
        assert_eq!(cfg.diameter(0), Diameter::Large);
        assert_eq!(cfg.diameter(2), Diameter::Small);
    }

    #[test]
    fn clone_is_independent_of_the_live_configuration() {
        let mut cfg = sample_configuration();
        let snapshot = cfg.clone();
        cfg.set_position(0, Vector3::new(0.5, 0.5, 0.5), Vector3::new(10.5, 0.5, 0.5));
        assert_eq!(*snapshot.unwrapped_position(0), Vector3::new(1.0, 4.0, 7.0));
    }
}
