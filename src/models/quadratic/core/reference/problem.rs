//! Problem formulation for reference root bisection.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};

use crate::models::quadratic::core::QuadraticProblem;

/// The polynomial value could not be represented.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("polynomial is not finite at x={x}")]
pub(super) struct NonFiniteValue {
    x: f64,
}

/// Model adapter that evaluates the polynomial at a trial point.
pub(super) struct PolynomialModel<'a> {
    problem: &'a QuadraticProblem,
}

impl<'a> PolynomialModel<'a> {
    pub(super) fn new(problem: &'a QuadraticProblem) -> Self {
        Self { problem }
    }
}

impl Model for PolynomialModel<'_> {
    type Input = f64;
    type Output = f64;
    type Error = NonFiniteValue;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let value = self.problem.evaluate(*input);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NonFiniteValue { x: *input })
        }
    }
}

/// Equation problem whose residual is the polynomial scaled by `sign(a)`.
///
/// The scaling makes the residual positive far from the roots regardless of
/// the sign of the leading coefficient.
pub(super) struct ResidualProblem {
    sign: f64,
}

impl ResidualProblem {
    pub(super) fn new(problem: &QuadraticProblem) -> Self {
        Self {
            sign: problem.a.signum(),
        }
    }
}

impl EquationProblem<1> for ResidualProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([self.sign * output])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_evaluates_polynomial() {
        let problem = QuadraticProblem::new(2.0, 5.0, -3.0);
        let model = PolynomialModel::new(&problem);
        assert_eq!(model.call(&0.5), Ok(0.0));
        assert_eq!(model.call(&1.0), Ok(4.0));
    }

    #[test]
    fn model_rejects_overflow() {
        let problem = QuadraticProblem::new(1.0, 0.0, 0.0);
        let model = PolynomialModel::new(&problem);
        assert_eq!(model.call(&1e200), Err(NonFiniteValue { x: 1e200 }));
    }

    #[test]
    fn residual_is_sign_normalized() {
        let problem = QuadraticProblem::new(-1.0, 1.0, 6.0);
        let residual = ResidualProblem::new(&problem);
        let far = PolynomialModel::new(&problem).call(&100.0).unwrap();
        assert!(far < 0.0);
        assert_eq!(residual.residuals(&100.0, &far), Ok([-far]));
    }
}
