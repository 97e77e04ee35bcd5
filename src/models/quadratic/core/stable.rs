use super::{QuadraticProblem, RootPair};

/// Computes both roots without subtracting nearly equal magnitudes.
///
/// The larger-magnitude root comes from `q`, whose two terms always share a
/// sign. The smaller one follows from the product identity `r1·r2 = c/a`:
///
/// ```text
/// q  = -(b + sign(b)·√d) / 2
/// r1 = q / a
/// r2 = c / q
/// ```
///
/// `sign(b)` follows the sign bit of `b`, so `-0.0` counts as negative.
/// For `b > 0` the result is bit-identical to the two-line reformulation
/// `r1 = (-b - √d) / 2a`, `r2 = -2c / (b + √d)`.
///
/// When `q` and `c` are both zero the equation is `a·x² = 0` and both roots
/// are `0.0`. Any other zero `q` divides through to infinities or `NaN`.
///
/// # Example
///
/// ```
/// use quadratic_precision::models::quadratic::{QuadraticProblem, stable_roots};
///
/// let roots = stable_roots(&QuadraticProblem::new(3.0, 1.0e9, 5.0));
/// assert_eq!(roots.r2, -5.0e-9);
/// ```
#[must_use]
pub fn stable_roots(problem: &QuadraticProblem) -> RootPair {
    let QuadraticProblem { a, b, c } = *problem;
    let sqrt_d = problem.discriminant().sqrt();

    let q = -0.5 * (b + sqrt_d.copysign(b));

    if q == 0.0 && c == 0.0 {
        return RootPair { r1: 0.0, r2: 0.0 };
    }

    RootPair {
        r1: q / a,
        r2: c / q,
    }
}
