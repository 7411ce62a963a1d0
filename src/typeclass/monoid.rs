//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds an identity element `empty` to the associative `combine`
//! of [`Semigroup`]. The Rwst transformer leans on this in two places:
//! every log-free constructor starts from `W::empty()`, and the
//! `run_empty` family starts a run from `S::empty()`.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rwst::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//!
//! let vec: Vec<i32> = Vec::empty();
//! assert!(vec.is_empty());
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// In addition to the Semigroup laws, for all `a`:
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::typeclass::Monoid;
    ///
    /// assert_eq!(String::empty(), "");
    /// assert!(Vec::<i32>::empty().is_empty());
    /// ```
    fn empty() -> Self;
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}

impl<T: Semigroup> Monoid for Option<T> {
    #[inline]
    fn empty() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn string_empty_is_identity(a in ".*") {
            prop_assert_eq!(String::empty().combine(a.clone()), a.clone());
            prop_assert_eq!(a.clone().combine(String::empty()), a);
        }

        #[test]
        fn vec_empty_is_identity(a in proptest::collection::vec(any::<i32>(), 0..8)) {
            prop_assert_eq!(Vec::empty().combine(a.clone()), a.clone());
            prop_assert_eq!(a.clone().combine(Vec::empty()), a);
        }
    }

    #[test]
    fn option_empty_is_none() {
        assert_eq!(<Option<String>>::empty(), None);
    }
}
