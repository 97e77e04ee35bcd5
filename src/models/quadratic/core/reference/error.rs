use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while bisecting for a reference root.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Residual at the best point found.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
