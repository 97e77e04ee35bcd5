//! Side-by-side report of both formulations on one problem.
//!
//! [`Demonstration::run`] solves the problem with both unguarded formulas and
//! returns a [`Report`]; formatting happens only in the report's
//! [`Display`](fmt::Display) impl.

use std::fmt;

use crate::models::quadratic::{QuadraticProblem, RootPair, naive_roots, stable_roots};

/// The problem to demonstrate.
///
/// The default is `3x² + 10⁹x + 5 = 0`, where `b² ≫ 4ac` and the textbook
/// formula loses the small root entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demonstration {
    /// Coefficients to solve.
    pub problem: QuadraticProblem,
}

impl Default for Demonstration {
    fn default() -> Self {
        Self {
            problem: QuadraticProblem::new(3.0, 1.0e9, 5.0),
        }
    }
}

impl Demonstration {
    /// Solves the problem with both formulations.
    ///
    /// The unguarded formulas are used so that infinities and `NaN` reach the
    /// report rather than being turned into errors.
    #[must_use]
    pub fn run(&self) -> Report {
        Report {
            problem: self.problem,
            naive: naive_roots(&self.problem),
            stable: stable_roots(&self.problem),
        }
    }
}

/// Roots from both formulations, ready to print.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Coefficients that were solved.
    pub problem: QuadraticProblem,

    /// Roots from [`naive_roots`].
    pub naive: RootPair,

    /// Roots from [`stable_roots`].
    pub stable: RootPair,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let QuadraticProblem { a, b, c } = self.problem;
        let lead = if a.is_sign_negative() { "-" } else { "" };

        writeln!(
            f,
            "Calculate the roots of: {lead}{} * x^2 {} {} * x {} {} = 0",
            Coefficient(a),
            sign(b),
            Coefficient(b),
            sign(c),
            Coefficient(c),
        )?;
        writeln!(f)?;
        writeln!(f, "=== Basic Calculation ===")?;
        write_roots(f, &self.naive)?;
        writeln!(f, "===== Re-formulate =====")?;
        write_roots(f, &self.stable)
    }
}

fn write_roots(f: &mut fmt::Formatter<'_>, roots: &RootPair) -> fmt::Result {
    writeln!(f, "\tRoot 1 (r1): {:.10}", roots.r1)?;
    writeln!(f, "\tRoot 2 (r2): {:.10}", roots.r2)
}

fn sign(value: f64) -> char {
    if value.is_sign_negative() { '-' } else { '+' }
}

/// Magnitude of a coefficient as written in the report header.
///
/// Exact powers of ten from `10^3` upward print as `10^k`.
struct Coefficient(f64);

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude >= 1e3 && magnitude.is_finite() {
            // exponent is bounded by f64 range
            #[allow(clippy::cast_possible_truncation)]
            let exponent = magnitude.log10().round() as i32;
            if 10f64.powi(exponent) == magnitude {
                return write!(f, "10^{exponent}");
            }
        }
        write!(f, "{magnitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report() {
        let report = Demonstration::default().run().to_string();
        assert_eq!(
            report,
            "Calculate the roots of: 3 * x^2 + 10^9 * x + 5 = 0\n\
             \n\
             === Basic Calculation ===\n\
             \tRoot 1 (r1): -333333333.3333333135\n\
             \tRoot 2 (r2): 0.0000000000\n\
             ===== Re-formulate =====\n\
             \tRoot 1 (r1): -333333333.3333333135\n\
             \tRoot 2 (r2): -0.0000000050\n"
        );
    }

    #[test]
    fn header_signs_and_plain_coefficients() {
        let demo = Demonstration {
            problem: QuadraticProblem::new(-0.5, -2.5, 2.0),
        };
        let report = demo.run().to_string();
        assert!(report.starts_with("Calculate the roots of: -0.5 * x^2 - 2.5 * x + 2 = 0\n"));
    }

    #[test]
    fn coefficient_formatting() {
        assert_eq!(Coefficient(1.0e9).to_string(), "10^9");
        assert_eq!(Coefficient(-1.0e3).to_string(), "10^3");
        assert_eq!(Coefficient(100.0).to_string(), "100");
        assert_eq!(Coefficient(2.0e9).to_string(), "2000000000");
        assert_eq!(Coefficient(3.0).to_string(), "3");
    }

    #[test]
    fn degenerate_values_reach_the_report() {
        let demo = Demonstration {
            problem: QuadraticProblem::new(1.0, 0.0, 1.0),
        };
        let report = demo.run().to_string();
        assert!(report.contains("\tRoot 1 (r1): NaN\n"));
    }
}
