//! Alternative type class - failure and choice.
//!
//! `Alternative` extends [`Applicative`] with an identity computation
//! (`empty`) and an associative choice operation (`alt`). For the Rwst
//! transformer this is the capability behind `combine_k` and `empty_k`:
//! combining two whole computations as alternatives at the effect level.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty().alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty()) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with failure and choice.
///
/// # Examples
///
/// ```rust
/// use rwst::typeclass::Alternative;
///
/// let first: Option<i32> = None;
/// assert_eq!(first.alt(Some(42)), Some(42));
///
/// let first = Some(1);
/// assert_eq!(first.alt(Some(2)), Some(1));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`: the failed or empty
    /// computation.
    fn empty() -> Self;

    /// Chooses between two computations, preferring the first success.
    #[must_use]
    fn alt(self, other: Self) -> Self;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty() -> Self {
        None
    }

    #[inline]
    fn alt(self, other: Self) -> Self {
        self.or(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(42), Some(42))]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, None, None)]
    fn option_alt_prefers_first_success(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn option_empty_is_identity_for_alt() {
        let value = Some(7);
        assert_eq!(<Option<i32>>::empty().alt(value), value);
        assert_eq!(value.alt(<Option<i32>>::empty()), value);
    }
}
