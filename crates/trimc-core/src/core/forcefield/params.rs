use crate::core::models::diameter::Diameter;

/// `2^{1/3}`: ratio between the squared WCA cutoff and the squared pair diameter.
pub const WCA_CUTOFF_FACTOR_SQUARED: f64 = 1.259_921_049_894_873_2;

/// `2^{1/6}`: ratio between the WCA cutoff and the pair diameter.
pub const WCA_CUTOFF_FACTOR: f64 = 1.122_462_048_309_373;

/// Parameters of one FENE bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeneParams {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Maximum bond extension `R₀`; the bond energy diverges as the separation approaches it.
    pub max_extension: f64,
}

impl FeneParams {
    /// FENE parameters for a bond between beads of diameters `a` and `b`.
    ///
    /// The three mixed pairs present in a trimer are tabulated. They follow
    /// `k = 30 / σ_ij²` and `R₀ = 1.5 σ_ij`, which is also used for beads of equal diameter.
    pub fn for_pair(a: Diameter, b: Diameter) -> Self {
        use Diameter::*;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        match (lo, hi) {
            (Small, Medium) => Self {
                stiffness: 33.241,
                max_extension: 1.425,
            },
            (Medium, Large) => Self {
                stiffness: 27.210884,
                max_extension: 1.575,
            },
            (Small, Large) => Self {
                stiffness: 30.0,
                max_extension: 1.5,
            },
            _ => {
                let sigma = pair_sigma(a, b);
                Self {
                    stiffness: 30.0 / (sigma * sigma),
                    max_extension: 1.5 * sigma,
                }
            }
        }
    }
}

/// Additive pair diameter `σ_ij = (σ_i + σ_j) / 2`.
#[inline]
pub fn pair_sigma(a: Diameter, b: Diameter) -> f64 {
    (a.value() + b.value()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_factors_are_consistent() {
        assert!((WCA_CUTOFF_FACTOR * WCA_CUTOFF_FACTOR - WCA_CUTOFF_FACTOR_SQUARED).abs() < 1e-15);
        assert!((WCA_CUTOFF_FACTOR_SQUARED - 2.0f64.powf(1.0 / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn fene_lookup_is_symmetric_in_the_diameter_pair() {
        for a in Diameter::ALL {
            for b in Diameter::ALL {
                assert_eq!(FeneParams::for_pair(a, b), FeneParams::for_pair(b, a));
            }
        }
    }

    #[test]
    fn tabulated_fene_parameters_follow_the_generating_rule() {
        let pairs = [
            (Diameter::Small, Diameter::Medium),
            (Diameter::Medium, Diameter::Large),
            (Diameter::Small, Diameter::Large),
        ];
        for (a, b) in pairs {
            let params = FeneParams::for_pair(a, b);
            let sigma = pair_sigma(a, b);
            assert!((params.stiffness - 30.0 / (sigma * sigma)).abs() < 1e-3);
            assert!((params.max_extension - 1.5 * sigma).abs() < 1e-12);
        }
    }

    #[test]
    fn equal_diameter_pairs_use_the_generating_rule() {
        let params = FeneParams::for_pair(Diameter::Medium, Diameter::Medium);
        assert_eq!(params.stiffness, 30.0);
        assert_eq!(params.max_extension, 1.5);
    }
}
