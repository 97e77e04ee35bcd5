use super::QuadraticProblem;

/// Problems whose roots are of similar magnitude, so neither formula cancels.
///
/// Every entry has `b != 0` and a positive discriminant.
pub(crate) const WELL_CONDITIONED: [QuadraticProblem; 7] = [
    QuadraticProblem::new(1.0, -3.0, 2.0),
    QuadraticProblem::new(2.0, 5.0, -3.0),
    QuadraticProblem::new(1.0, -5.0, 6.0),
    QuadraticProblem::new(-1.0, 1.0, 6.0),
    QuadraticProblem::new(4.0, 4.0, -3.0),
    QuadraticProblem::new(0.5, -2.5, 2.0),
    QuadraticProblem::new(1.0, 1.0, -1.0),
];

/// `3x² + 10⁹x + 5 = 0`, where `b² ≫ 4ac`.
pub(crate) const DEMONSTRATION: QuadraticProblem = QuadraticProblem::new(3.0, 1.0e9, 5.0);

/// Small root of [`DEMONSTRATION`], `-c/b - a·c²/b³` to leading order.
pub(crate) const DEMONSTRATION_SMALL_ROOT: f64 = -5.0e-9 - 7.5e-26;
