use super::params::WCA_CUTOFF_FACTOR_SQUARED;

/// Shifted, truncated Lennard-Jones repulsion (Weeks-Chandler-Andersen).
///
/// Takes the squared separation `r2` and the pair diameter `sigma`. Returns exactly `0.0` at
/// and beyond the cutoff `r_c² = 2^{1/3} σ²`.
#[inline]
pub fn wca(r2: f64, sigma: f64) -> f64 {
    let sigma2 = sigma * sigma;
    if r2 >= WCA_CUTOFF_FACTOR_SQUARED * sigma2 {
        return 0.0;
    }
    let a2 = sigma2 / r2;
    let a6 = a2 * a2 * a2;
    4.0 * (a6 * a6 - a6 + 0.25)
}

/// Finitely extensible nonlinear elastic bond energy at squared separation `r2`.
///
/// Returns `+∞` once the bond reaches its maximum extension `r0`.
#[inline]
pub fn fene(r2: f64, stiffness: f64, r0: f64) -> f64 {
    let r02 = r0 * r0;
    if r2 >= r02 {
        return f64::INFINITY;
    }
    -0.5 * stiffness * r02 * (1.0 - r2 / r02).ln()
}
