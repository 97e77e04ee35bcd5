use thiserror::Error;

/// Reasons a quadratic problem has no pair of real roots.
///
/// Only the guarded solver adapters return these errors. The underlying
/// formulas let the same inputs produce infinities or `NaN` instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// The leading coefficient is zero, so the equation is linear.
    #[error("leading coefficient is zero; the equation is not quadratic")]
    DegenerateEquation,

    /// The discriminant is negative, so both roots are complex.
    #[error("complex roots: discriminant={discriminant}")]
    ComplexRoots {
        /// Computed discriminant `b² − 4ac`.
        discriminant: f64,
    },

    /// A coefficient or the discriminant is not a number.
    #[error("coefficient or discriminant is not a number")]
    NotANumber,
}
