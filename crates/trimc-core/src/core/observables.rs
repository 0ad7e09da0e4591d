use crate::core::forcefield::energy::EnergyCalculator;
use crate::core::models::configuration::Configuration;
use crate::core::models::diameter::SIGMA_MAX;
use nalgebra::Vector3;
use phf::{Map, phf_map};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A scalar measured on the live configuration, optionally against a cycle reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observable {
    /// Potential energy per particle.
    Energy,
    /// Center-of-mass corrected mean-square displacement.
    MeanSquareDisplacement,
    /// Self-intermediate scattering function at `q = 2π / σ_max`.
    SelfScattering,
    /// Normalized autocorrelation of the bead diameters.
    DiameterCorrelation,
}

static OBSERVABLE_NAMES: Map<&'static str, Observable> = phf_map! {
    "U" => Observable::Energy,
    "MSD" => Observable::MeanSquareDisplacement,
    "Fs" => Observable::SelfScattering,
    "Cs" => Observable::DiameterCorrelation,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown observable '{0}' (expected one of U, MSD, Fs, Cs)")]
pub struct UnknownObservableError(pub String);

impl Observable {
    /// Column name used in observable files and accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Observable::Energy => "U",
            Observable::MeanSquareDisplacement => "MSD",
            Observable::SelfScattering => "Fs",
            Observable::DiameterCorrelation => "Cs",
        }
    }

    /// Evaluates the observable.
    ///
    /// Both configurations must have an up-to-date center of mass. `reference` is ignored by
    /// [`Observable::Energy`].
    pub fn evaluate(self, current: &Configuration, reference: &Configuration) -> f64 {
        match self {
            Observable::Energy => EnergyCalculator::energy_per_particle(current),
            Observable::MeanSquareDisplacement => mean_square_displacement(current, reference),
            Observable::SelfScattering => self_scattering(current, reference),
            Observable::DiameterCorrelation => diameter_correlation(current, reference),
        }
    }
}

impl FromStr for Observable {
    type Err = UnknownObservableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OBSERVABLE_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| UnknownObservableError(s.to_string()))
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wave number of the self-scattering function.
pub fn scattering_wave_number() -> f64 {
    2.0 * PI / SIGMA_MAX
}

fn relative_displacements<'a>(
    current: &'a Configuration,
    reference: &'a Configuration,
) -> impl Iterator<Item = Vector3<f64>> + 'a {
    let drift = current.center_of_mass() - reference.center_of_mass();
    current
        .unwrapped_positions()
        .iter()
        .zip(reference.unwrapped_positions())
        .map(move |(r, r0)| (r - r0) - drift)
}

fn mean_square_displacement(current: &Configuration, reference: &Configuration) -> f64 {
    if current.is_empty() {
        return 0.0;
    }
    let sum: f64 = relative_displacements(current, reference)
        .map(|d| d.norm_squared())
        .sum();
    sum / current.len() as f64
}

fn self_scattering(current: &Configuration, reference: &Configuration) -> f64 {
    if current.is_empty() {
        return 0.0;
    }
    let q = scattering_wave_number();
    let sum: f64 = relative_displacements(current, reference)
        .map(|d| d.iter().map(|&x| (q * x).cos()).sum::<f64>())
        .sum();
    sum / (3.0 * current.len() as f64)
}

fn diameter_correlation(current: &Configuration, reference: &Configuration) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let mean = reference.diameters().iter().map(|d| d.value()).sum::<f64>()
        / reference.len() as f64;
    let (numerator, denominator) = current
        .diameters()
        .iter()
        .zip(reference.diameters())
        .fold((0.0, 0.0), |(num, den), (s, s0)| {
            let ds0 = s0.value() - mean;
            (num + (s.value() - mean) * ds0, den + ds0 * ds0)
        });
    if denominator <= f64::EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::diameter::Diameter;
    use crate::core::utils::geometry::PeriodicBox;

    const TOLERANCE: f64 = 1e-12;

    fn configuration(positions: Vec<Vector3<f64>>, diameters: Vec<Diameter>) -> Configuration {
        let mut cfg = Configuration::new(PeriodicBox::new(20.0), positions, diameters);
        cfg.update_center_of_mass();
        cfg
    }

    fn reference() -> Configuration {
        configuration(
            vec![
                Vector3::new(1.0, 1.0, 1.0),
                Vector3::new(2.0, 1.0, 1.0),
                Vector3::new(1.5, 2.0, 1.0),
            ],
            vec![Diameter::Small, Diameter::Medium, Diameter::Large],
        )
    }

    #[test]
    fn names_round_trip_through_the_static_map() {
        for name in ["U", "MSD", "Fs", "Cs"] {
            let obs: Observable = name.parse().unwrap();
            assert_eq!(obs.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "msd".parse::<Observable>(),
            Err(UnknownObservableError("msd".to_string()))
        );
    }

    #[test]
    fn identical_configurations_give_zero_msd_and_unit_fs() {
        let r = reference();
        let c = r.clone();
        assert_eq!(Observable::MeanSquareDisplacement.evaluate(&c, &r), 0.0);
        assert!((Observable::SelfScattering.evaluate(&c, &r) - 1.0).abs() < TOLERANCE);
        assert!((Observable::DiameterCorrelation.evaluate(&c, &r) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn rigid_translation_is_removed_by_center_of_mass_correction() {
        let r = reference();
        let shift = Vector3::new(7.3, -2.1, 0.4);
        let c = configuration(
            r.unwrapped_positions().iter().map(|p| p + shift).collect(),
            r.diameters().to_vec(),
        );
        assert!(Observable::MeanSquareDisplacement.evaluate(&c, &r).abs() < TOLERANCE);
        assert!((Observable::SelfScattering.evaluate(&c, &r) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn msd_of_a_single_displaced_particle_accounts_for_drift() {
        let r = reference();
        let mut positions = r.unwrapped_positions().to_vec();
        positions[0].x += 3.0;
        let c = configuration(positions, r.diameters().to_vec());
        // Drift is (1, 0, 0): relative displacements are 2, -1, -1 along x.
        let expected = (4.0 + 1.0 + 1.0) / 3.0;
        assert!((Observable::MeanSquareDisplacement.evaluate(&c, &r) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn fs_averages_cosines_over_axes_and_particles() {
        let r = reference();
        let mut positions = r.unwrapped_positions().to_vec();
        positions[0].x += 3.0;
        let c = configuration(positions, r.diameters().to_vec());
        let q = scattering_wave_number();
        let expected = ((q * 2.0).cos() + 2.0 * (q * -1.0).cos() + 6.0) / 9.0;
        assert!((Observable::SelfScattering.evaluate(&c, &r) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn diameter_correlation_is_negative_after_swapping_extremes() {
        let r = reference();
        let c = configuration(
            r.unwrapped_positions().to_vec(),
            vec![Diameter::Large, Diameter::Medium, Diameter::Small],
        );
        assert!((Observable::DiameterCorrelation.evaluate(&c, &r) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn diameter_correlation_is_zero_for_monodisperse_reference() {
        let r = configuration(
            vec![Vector3::zeros(); 3],
            vec![Diameter::Medium, Diameter::Medium, Diameter::Medium],
        );
        assert_eq!(Observable::DiameterCorrelation.evaluate(&r, &r), 0.0);
    }
}
