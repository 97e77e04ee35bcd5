use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// A quadratic with a zero leading coefficient is linear, so the solvers
/// require `a` to satisfy this constraint before dividing by it.
///
/// # Examples
///
/// ```
/// use quadratic_precision::support::constraint::NonZero;
///
/// let a = NonZero::new(-5.0).unwrap();
/// assert_eq!(a.into_inner(), -5.0);
///
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(-0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_tiny_and_infinite_coefficients() {
        assert!(NonZero::new(f64::MIN_POSITIVE).is_ok());
        assert!(NonZero::new(-1e-300).is_ok());
        assert!(NonZero::new(f64::INFINITY).is_ok());
    }

    #[test]
    fn rejects_both_signed_zeros() {
        assert_eq!(NonZero::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(-0.0), Err(ConstraintError::Zero));
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            NonZero::new(f64::NAN).map(Constrained::into_inner),
            Err(ConstraintError::NotANumber)
        );
    }
}
