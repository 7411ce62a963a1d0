//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which lets the result of
//! one computation decide what computation runs next. [`MonadRec`] extends
//! `Monad` with `tail_rec`, a stack-safe iteration primitive: the loop lives
//! in the effect's own interpreter rather than on the call stack.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rwst::typeclass::Monad;
//!
//! let result = Some("42")
//!     .flat_map(|s| s.parse::<i32>().ok())
//!     .flat_map(|n| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use crate::control::Either;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// let y = x.flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(y, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// Failure in `self` propagates and `next` is never produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// let none: Option<i32> = None;
    /// assert_eq!(none.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// A monad with a stack-safe iteration primitive.
///
/// `tail_rec` repeatedly invokes `step` on successive values until it yields
/// an [`Either::Right`], without growing the call stack with the number of
/// iterations. Every implementation must be an explicit loop, never native
/// recursion.
///
/// # Examples
///
/// ```rust
/// use rwst::control::Either;
/// use rwst::typeclass::MonadRec;
///
/// // Counts down from 100_000 without overflowing the stack.
/// let result: Option<u64> = <Option<()>>::tail_rec(100_000u64, |n| {
///     if n == 0 {
///         Some(Either::Right(n))
///     } else {
///         Some(Either::Left(n - 1))
///     }
/// });
/// assert_eq!(result, Some(0));
/// ```
pub trait MonadRec: Monad {
    /// Iterates `step`, starting from `initial`, until it produces a
    /// [`Either::Right`] value.
    ///
    /// An [`Either::Left`] feeds the next iteration; failure in the effect
    /// short-circuits the whole loop.
    fn tail_rec<T, B, F>(initial: T, step: F) -> Self::WithType<B>
    where
        F: Fn(T) -> Self::WithType<Either<T, B>>;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> MonadRec for Option<A> {
    fn tail_rec<T, B, F>(initial: T, step: F) -> Option<B>
    where
        F: Fn(T) -> Option<Either<T, B>>,
    {
        let mut current = initial;
        loop {
            match step(current)? {
                Either::Left(next) => current = next,
                Either::Right(done) => break Some(done),
            }
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

impl<T, E> MonadRec for Result<T, E> {
    fn tail_rec<U, B, F>(initial: U, step: F) -> Result<B, E>
    where
        F: Fn(U) -> Result<Either<U, B>, E>,
    {
        let mut current = initial;
        loop {
            match step(current)? {
                Either::Left(next) => current = next,
                Either::Right(done) => break Ok(done),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_chains() {
        let result = Some(5).flat_map(|n| Some(n * 2)).flat_map(|n| Some(n + 1));
        assert_eq!(result, Some(11));
    }

    #[rstest]
    fn option_then_discards_first_result() {
        assert_eq!(Some(1).then(Some("next")), Some("next"));
    }

    #[rstest]
    fn result_flat_map_short_circuits() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failed.flat_map(|n| Ok(n + 1)), Err("boom".to_string()));
    }

    #[rstest]
    fn option_tail_rec_deep_loop_is_stack_safe() {
        let result: Option<u64> = <Option<()>>::tail_rec(0u64, |n| {
            if n >= 500_000 {
                Some(Either::Right(n))
            } else {
                Some(Either::Left(n + 1))
            }
        });
        assert_eq!(result, Some(500_000));
    }

    #[rstest]
    fn result_tail_rec_propagates_failure() {
        let result: Result<u64, &str> = <Result<(), &str>>::tail_rec(0u64, |n| {
            if n == 10 {
                Err("hit ten")
            } else {
                Ok(Either::Left(n + 1))
            }
        });
        assert_eq!(result, Err("hit ten"));
    }

    #[rstest]
    fn identity_monad_left_identity_law() {
        let f = |x: i32| Identity(x + 1);
        assert_eq!(Identity::<()>::pure(5).flat_map(f), f(5));
    }
}
