use nalgebra::Vector3;

/// A cubic simulation box with periodic boundary conditions on every axis.
///
/// Wrapped coordinates live in the canonical range `[0, length)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicBox {
    length: f64,
}

impl PeriodicBox {
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    /// Builds the cubic box holding `num_particles` at the given number density.
    pub fn from_density(num_particles: usize, density: f64) -> Self {
        Self::new((num_particles as f64 / density).cbrt())
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Shortest separation between two periodic 1D coordinates, as a magnitude.
    ///
    /// Folds `|a - b|` onto the shortest path around the torus, so for wrapped inputs the
    /// result lies in `[0, length / 2]`.
    #[inline]
    pub fn minimum_image_delta(&self, a: f64, b: f64) -> f64 {
        let half = self.length / 2.0;
        half - ((a - b).abs() - half).abs()
    }

    /// Maps an arbitrary coordinate into `[0, length)`.
    #[inline]
    pub fn wrap_into_box(&self, a: f64) -> f64 {
        let wrapped = a.rem_euclid(self.length);
        // rem_euclid of a tiny negative value can round up to exactly `length`
        if wrapped >= self.length { 0.0 } else { wrapped }
    }

    pub fn wrap_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            self.wrap_into_box(v.x),
            self.wrap_into_box(v.y),
            self.wrap_into_box(v.z),
        )
    }

    /// Squared minimum-image distance between two wrapped positions.
    #[inline]
    pub fn distance_squared(&self, a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
        let dx = self.minimum_image_delta(a.x, b.x);
        let dy = self.minimum_image_delta(a.y, b.y);
        let dz = self.minimum_image_delta(a.z, b.z);
        dx * dx + dy * dy + dz * dz
    }
}
