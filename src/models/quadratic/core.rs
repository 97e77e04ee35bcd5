//! Closed-form roots of `a·x² + b·x + c = 0` in double precision.
//!
//! Two formulations are provided. [`naive_roots`] is the textbook formula and
//! keeps its cancellation failure when `b² ≫ 4ac`. [`stable_roots`] computes
//! the larger-magnitude root with an addition of same-signed terms and derives
//! the other through the product identity `r1·r2 = c/a`.
//!
//! Neither function guards its input. A zero leading coefficient or a negative
//! discriminant flows through as infinities or `NaN`.

mod error;
mod naive;
mod problem;
mod reference;
mod roots;
mod stable;

#[cfg(test)]
pub(super) mod test_support;

pub use error::SolveError;
pub use naive::naive_roots;
pub use problem::QuadraticProblem;
pub use reference::{ReferenceConfig, ReferenceError, reference_root};
pub use roots::RootPair;
pub use stable::stable_roots;
