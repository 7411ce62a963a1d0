//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a value and adds no behavior at all. It serves as:
//!
//! - The base case for effect transformer stacks ("no underlying effect")
//! - The simplest model for checking type class laws
//! - A way to run an [`crate::effect::Rwst`] computation purely

use super::TypeConstructor;
use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::{Monad, MonadRec};
use crate::control::Either;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use rwst::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> MonadRec for Identity<A> {
    fn tail_rec<T, B, F>(initial: T, step: F) -> Identity<B>
    where
        F: Fn(T) -> Identity<Either<T, B>>,
    {
        let mut current = initial;
        loop {
            match step(current).0 {
                Either::Left(next) => current = next,
                Either::Right(done) => break Identity(done),
            }
        }
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(42)]
    #[case(0)]
    #[case(-7)]
    fn identity_roundtrip(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[rstest]
    fn identity_fmap_applies_function() {
        assert_eq!(Identity(21).fmap(|x| x * 2), Identity(42));
    }

    #[rstest]
    fn identity_flat_map_sequences() {
        let result = Identity(5).flat_map(|x| Identity(x + 1)).flat_map(|x| Identity(x * 10));
        assert_eq!(result, Identity(60));
    }

    #[rstest]
    fn identity_tail_rec_counts_down() {
        let result: Identity<u64> = Identity::<()>::tail_rec(100_000u64, |n| {
            if n == 0 {
                Identity(Either::Right(0))
            } else {
                Identity(Either::Left(n - 1))
            }
        });
        assert_eq!(result, Identity(0));
    }
}
