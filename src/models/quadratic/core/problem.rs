use crate::support::constraint::{ConstraintError, NonNegative, NonZero};

use super::SolveError;

/// Coefficients of the quadratic `a·x² + b·x + c = 0`.
///
/// A problem is a plain value: solvers take it by reference and never
/// modify it, and nothing derived from it is cached.
///
/// # Example
///
/// ```
/// use quadratic_precision::models::quadratic::QuadraticProblem;
///
/// let problem = QuadraticProblem::new(1.0, -3.0, 2.0);
/// assert_eq!(problem.discriminant(), 1.0);
/// assert_eq!(problem.evaluate(2.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticProblem {
    /// Leading (quadratic) coefficient.
    pub a: f64,

    /// Linear coefficient.
    pub b: f64,

    /// Constant term.
    pub c: f64,
}

impl QuadraticProblem {
    /// Creates a problem from its three coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the discriminant `b² − 4ac`.
    ///
    /// Evaluated left to right without fused operations so every caller sees
    /// the same rounding.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates the polynomial at `x` in Horner form.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Checks that the problem has two real roots.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegenerateEquation`] when `a` is zero,
    /// [`SolveError::ComplexRoots`] when the discriminant is negative, and
    /// [`SolveError::NotANumber`] when a coefficient or the discriminant is `NaN`.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.b.is_nan() || self.c.is_nan() {
            return Err(SolveError::NotANumber);
        }

        match NonZero::new(self.a) {
            Ok(_) => {}
            Err(ConstraintError::Zero) => return Err(SolveError::DegenerateEquation),
            Err(_) => return Err(SolveError::NotANumber),
        }

        let discriminant = self.discriminant();
        match NonNegative::new(discriminant) {
            Ok(_) => Ok(()),
            Err(ConstraintError::Negative) => Err(SolveError::ComplexRoots { discriminant }),
            Err(_) => Err(SolveError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_of_the_demonstration_rounds_to_b_squared() {
        // 60 is below half an ulp of 1e18, so the 4ac term vanishes entirely.
        let problem = QuadraticProblem::new(3.0, 1.0e9, 5.0);
        assert_eq!(problem.discriminant(), 1.0e18);
    }

    #[test]
    fn evaluate_vanishes_at_exact_roots() {
        let problem = QuadraticProblem::new(2.0, 5.0, -3.0);
        assert_eq!(problem.evaluate(0.5), 0.0);
        assert_eq!(problem.evaluate(-3.0), 0.0);
        assert_eq!(problem.evaluate(0.0), -3.0);
    }

    #[test]
    fn validate_accepts_real_roots() {
        assert!(QuadraticProblem::new(1.0, -3.0, 2.0).validate().is_ok());
        assert!(QuadraticProblem::new(1.0, 2.0, 1.0).validate().is_ok());
        assert!(QuadraticProblem::new(3.0, 1.0e9, 5.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_linear_equation() {
        let err = QuadraticProblem::new(0.0, 2.0, 1.0).validate().unwrap_err();
        assert_eq!(err, SolveError::DegenerateEquation);
    }

    #[test]
    fn validate_reports_negative_discriminant() {
        let err = QuadraticProblem::new(1.0, 0.0, 1.0).validate().unwrap_err();
        assert_eq!(err, SolveError::ComplexRoots { discriminant: -4.0 });
    }

    #[test]
    fn validate_rejects_nan_anywhere() {
        for problem in [
            QuadraticProblem::new(f64::NAN, 1.0, 1.0),
            QuadraticProblem::new(1.0, f64::NAN, 1.0),
            QuadraticProblem::new(1.0, 1.0, f64::NAN),
            // inf - inf
            QuadraticProblem::new(1.0, f64::INFINITY, f64::INFINITY),
        ] {
            assert_eq!(problem.validate(), Err(SolveError::NotANumber));
        }
    }
}
