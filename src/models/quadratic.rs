//! Quadratic root models.
//!
//! This module provides [`twine_core::Model`] implementations that solve
//! `a·x² + b·x + c = 0` for two real roots. The arithmetic is in the internal
//! `core` module.
//!
//! [`NaiveSolver`] and [`StableSolver`] reject degenerate input with a
//! [`SolveError`] and otherwise return exactly what [`naive_roots`] and
//! [`stable_roots`] return. Validation never changes the arithmetic, so the
//! precision loss of the textbook formula is still visible through the
//! adapter.

mod core;

pub use self::core::{
    QuadraticProblem, ReferenceConfig, ReferenceError, RootPair, SolveError, naive_roots,
    reference_root, stable_roots,
};

use twine_core::Model;

/// Solver using the textbook quadratic formula.
///
/// See [`naive_roots`] for the formula and its failure mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSolver;

impl Model for NaiveSolver {
    type Input = QuadraticProblem;
    type Output = RootPair;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.validate()?;
        Ok(naive_roots(input))
    }
}

/// Solver using the sign-aware, cancellation-free formulation.
///
/// See [`stable_roots`] for the formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableSolver;

impl Model for StableSolver {
    type Input = QuadraticProblem;
    type Output = RootPair;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.validate()?;
        Ok(stable_roots(input))
    }
}
