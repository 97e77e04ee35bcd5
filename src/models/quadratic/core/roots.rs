/// The two real roots returned by a solver.
///
/// The order of `r1` and `r2` is a property of the formula that produced
/// them, not of their values. Use [`RootPair::ordered`] before comparing the
/// output of different solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootPair {
    /// First root.
    pub r1: f64,

    /// Second root.
    pub r2: f64,
}

impl RootPair {
    /// Returns the pair sorted so that `r1 <= r2`.
    ///
    /// A pair containing `NaN` is returned unchanged.
    #[must_use]
    pub fn ordered(self) -> Self {
        if self.r2 < self.r1 {
            Self {
                r1: self.r2,
                r2: self.r1,
            }
        } else {
            self
        }
    }

    /// Returns `r1 + r2`, which should equal `-b/a`.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.r1 + self.r2
    }

    /// Returns `r1 · r2`, which should equal `c/a`.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.r1 * self.r2
    }
}
