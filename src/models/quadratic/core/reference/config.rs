use twine_solvers::equation::bisection;

/// Solver configuration for [`super::reference_root`].
#[derive(Debug, Clone, Copy)]
pub struct ReferenceConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the root.
    pub x_abs_tol: f64,

    /// Tolerance on the root relative to its magnitude.
    ///
    /// Roots of an ill-scaled quadratic can differ by many orders of
    /// magnitude, so this is the tolerance that usually ends the search.
    pub x_rel_tol: f64,

    /// Absolute tolerance on the sign-normalized residual.
    pub residual_tol: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 0.0,
            x_rel_tol: 1e-14,
            residual_tol: 1e-12,
        }
    }
}

impl ReferenceConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.x_abs_tol,
            x_rel_tol: self.x_rel_tol,
            residual_tol: self.residual_tol,
        }
    }
}
