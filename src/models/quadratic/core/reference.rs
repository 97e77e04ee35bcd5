//! Reference roots found by bisection on the polynomial residual.
//!
//! Bisection never forms the quadratic formula, so its result is an
//! independent check on either closed-form solver.

mod config;
mod error;
mod problem;

pub use config::ReferenceConfig;
pub use error::ReferenceError;

use twine_solvers::equation::bisection;

use super::QuadraticProblem;

use problem::{PolynomialModel, ResidualProblem};

/// Finds the root of `problem` that lies inside `bracket`.
///
/// The polynomial must change sign across the bracket.
///
/// # Errors
///
/// Returns [`ReferenceError::Bisection`] if the bracket is invalid, or
/// [`ReferenceError::MaxIters`] if the solver does not converge.
pub fn reference_root(
    problem: &QuadraticProblem,
    bracket: [f64; 2],
    config: ReferenceConfig,
) -> Result<f64, ReferenceError> {
    let model = PolynomialModel::new(problem);
    let residual = ResidualProblem::new(problem);

    let solution = bisection::solve(
        &model,
        &residual,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The polynomial overflowed far from any root. The normalized
            // residual grows like +x² there, so steer back toward the bracket.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(ReferenceError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.input)
}
