use super::{QuadraticProblem, RootPair};

/// Computes both roots with the textbook quadratic formula.
///
/// ```text
/// r1 = (-b - √d) / 2a
/// r2 = (-b + √d) / 2a
/// ```
///
/// When `b² ≫ 4ac` the square root of the discriminant is nearly `|b|`, and
/// the root whose numerator subtracts the two loses almost every significant
/// digit. That loss is kept here on purpose: it is what [`super::stable_roots`]
/// is measured against.
///
/// # Example
///
/// ```
/// use quadratic_precision::models::quadratic::{QuadraticProblem, naive_roots};
///
/// let roots = naive_roots(&QuadraticProblem::new(3.0, 1.0e9, 5.0));
/// assert_eq!(roots.r2, 0.0); // the true root is about -5e-9
/// ```
#[must_use]
pub fn naive_roots(problem: &QuadraticProblem) -> RootPair {
    let QuadraticProblem { a, b, .. } = *problem;
    let sqrt_d = problem.discriminant().sqrt();

    RootPair {
        r1: (-b - sqrt_d) / (2.0 * a),
        r2: (-b + sqrt_d) / (2.0 * a),
    }
}
