//! # Quadratic Precision
//!
//! Two ways to compute the real roots of `a·x² + b·x + c = 0` in double
//! precision, and a report that puts them side by side.
//!
//! The textbook formula subtracts `√(b² − 4ac)` from `-b`. When `b² ≫ 4ac`
//! those two values agree in nearly every digit and the smaller root is lost.
//! The stable formulation computes the larger root by addition and recovers
//! the smaller one from `r1·r2 = c/a`.
//!
//! ## Crate layout
//!
//! - [`models`]: The root formulas and their [`twine_core::Model`] adapters.
//! - [`support`]: Numeric constraints used to validate solver input.
//! - [`demo`]: The side-by-side report printed by the binary.
//!
//! ```
//! use quadratic_precision::models::quadratic::{QuadraticProblem, naive_roots, stable_roots};
//!
//! let problem = QuadraticProblem::new(3.0, 1.0e9, 5.0);
//!
//! assert_eq!(naive_roots(&problem).r2, 0.0);
//! assert_eq!(stable_roots(&problem).r2, -5.0e-9);
//! ```

pub mod demo;
pub mod models;
pub mod support;
