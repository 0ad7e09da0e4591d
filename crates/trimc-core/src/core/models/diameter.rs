use std::fmt;

/// Largest bead diameter present in the model; sets the interaction cutoff scale.
pub const SIGMA_MAX: f64 = 1.1;

const MATCH_TOLERANCE: f64 = 1e-6;

/// The discrete bead diameters of the trimer model.
///
/// Polydispersity is driven by flip moves that exchange diameters between bonded beads, so a
/// bead's diameter is always one of these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Diameter {
    /// σ = 0.9
    Small,
    /// σ = 1.0
    Medium,
    /// σ = 1.1
    Large,
}

impl Diameter {
    pub const ALL: [Diameter; 3] = [Diameter::Small, Diameter::Medium, Diameter::Large];

    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Diameter::Small => 0.9,
            Diameter::Medium => 1.0,
            Diameter::Large => 1.1,
        }
    }

    /// Matches a diameter read from a file to one of the allowed values.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| (d.value() - value).abs() < MATCH_TOLERANCE)
    }
}

impl fmt::Display for Diameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_matches_each_allowed_diameter() {
        for d in Diameter::ALL {
            assert_eq!(Diameter::from_value(d.value()), Some(d));
        }
    }

    #[test]
    fn from_value_tolerates_round_trip_formatting_noise() {
        assert_eq!(Diameter::from_value(1.10000000), Some(Diameter::Large));
        assert_eq!(Diameter::from_value(0.8999999999), Some(Diameter::Small));
    }

    #[test]
    fn from_value_rejects_unknown_diameters() {
        assert_eq!(Diameter::from_value(1.05), None);
        assert_eq!(Diameter::from_value(2.0), None);
    }

    #[test]
    fn largest_diameter_matches_sigma_max() {
        let largest = Diameter::ALL.iter().map(|d| d.value()).fold(0.0, f64::max);
        assert_eq!(largest, SIGMA_MAX);
    }
}
