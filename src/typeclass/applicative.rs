//! Applicative type class - lifting values and applying wrapped functions.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the context, and `apply`, which applies a wrapped function to a
//! wrapped argument.
//!
//! For the Rwst transformer, `pure` is the capability that every log-free
//! constructor (`pure`, `get`, `put`, `modify`, `ask`, `tell`, ...) needs
//! from the underlying effect: the ability to produce a triple without
//! performing any effect.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```

use super::functor::Functor;

/// A type class for functors that can lift plain values into the context.
///
/// # Examples
///
/// ```rust
/// use rwst::typeclass::Applicative;
///
/// let value: Option<i32> = <Option<i32>>::pure(42);
/// assert_eq!(value, Some(42));
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x * 2);
/// assert_eq!(function.apply(Some(21)), Some(42));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::typeclass::Applicative;
    ///
    /// let value: Option<&str> = <Option<i32>>::pure("hello");
    /// assert_eq!(value, Some("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> String> = Some(|x| x.to_string());
    /// assert_eq!(function.apply(Some(5)), Some("5".to_string()));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.and_then(|function| other.map(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn option_pure_lifts_value() {
        assert_eq!(<Option<()>>::pure(42), Some(42));
    }

    #[rstest]
    fn option_apply_short_circuits_on_none() {
        let function: Option<fn(i32) -> i32> = None;
        assert_eq!(function.apply(Some(5)), None);

        let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
        assert_eq!(function.apply(None), None);
    }

    #[rstest]
    fn result_apply_keeps_first_error() {
        let function: Result<fn(i32) -> i32, &str> = Err("no function");
        assert_eq!(function.apply(Err("no value")), Err("no function"));
    }

    #[rstest]
    fn identity_homomorphism_law() {
        let lifted: Identity<fn(i32) -> i32> = Identity::<()>::pure(|x: i32| x * 2);
        assert_eq!(lifted.apply(Identity::<()>::pure(21)), Identity(42));
    }
}
