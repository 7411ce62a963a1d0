//! `MonadError` type class - raising and catching failure within an effect.
//!
//! The transformer's `raise_error` / `handle_error_with` operations are
//! derived from this capability of the underlying effect: raising builds a
//! failed effect directly, catching runs a recovery computation against the
//! original environment and state.
//!
//! # Laws
//!
//! ## Throw-Catch
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch-Pure
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rwst::effect::MonadError;
//!
//! let failed: Result<i32, String> = <Result<i32, String>>::throw_error("boom".to_string());
//! assert_eq!(failed, Err("boom".to_string()));
//!
//! let recovered = <Result<i32, String>>::catch_error(failed, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(4));
//! ```

use crate::typeclass::Monad;

/// A type class for monads that can throw and catch errors of type `E`.
///
/// The generic methods operate at any inner type `A`, so a computation can
/// be failed or recovered regardless of what it would have produced.
///
/// # Laws
///
/// ```text
/// catch_error(throw_error(e), handler) == handler(e)
/// catch_error(pure(a), handler)        == pure(a)
/// throw_error(e).flat_map(f)           == throw_error(e)
/// ```
pub trait MonadError<E>: Monad {
    /// Builds a failed computation carrying `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::MonadError;
    ///
    /// let failed: Result<i32, &str> = <Result<i32, &str>>::throw_error("oops");
    /// assert_eq!(failed, Err("oops"));
    /// ```
    fn throw_error<A>(error: E) -> Self::WithType<A>
    where
        A: 'static;

    /// Recovers from failure by running the handler on the error.
    ///
    /// A successful computation passes through untouched and the handler is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::MonadError;
    ///
    /// let failing: Result<i32, String> = Err("error".to_string());
    /// let recovered = <Result<i32, String>>::catch_error(failing, |e| Ok(e.len() as i32));
    /// assert_eq!(recovered, Ok(5));
    /// ```
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>,
        A: 'static;

    /// Converts failure into success by mapping the error to a plain value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::MonadError;
    ///
    /// let failing: Result<i32, String> = Err("error".to_string());
    /// assert_eq!(<Result<i32, String>>::handle_error(failing, |_| 0), Ok(0));
    /// ```
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        Self: Sized,
        F: FnOnce(E) -> A,
        A: 'static;

    /// Lifts a `Result` into this effect; `Ok` succeeds, `Err` is thrown.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::MonadError;
    ///
    /// let lifted: Result<i32, String> = <Result<i32, String>>::from_result(Ok(42));
    /// assert_eq!(lifted, Ok(42));
    /// ```
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>
    where
        A: 'static,
        E: 'static;
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> MonadError<E> for Result<T, E> {
    fn throw_error<A>(error: E) -> Result<A, E>
    where
        A: 'static,
    {
        Err(error)
    }

    fn catch_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> Result<A, E>,
        A: 'static,
    {
        match computation {
            Ok(value) => Ok(value),
            Err(error) => handler(error),
        }
    }

    fn handle_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> A,
        A: 'static,
    {
        match computation {
            Ok(value) => Ok(value),
            Err(error) => Ok(handler(error)),
        }
    }

    fn from_result<A>(result: Result<A, E>) -> Result<A, E>
    where
        A: 'static,
        E: 'static,
    {
        result
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

/// `Option` carries no error payload, so its error type is `()`.
impl<T> MonadError<()> for Option<T> {
    fn throw_error<A>((): ()) -> Option<A>
    where
        A: 'static,
    {
        None
    }

    fn catch_error<A, F>(computation: Option<A>, handler: F) -> Option<A>
    where
        F: FnOnce(()) -> Option<A>,
        A: 'static,
    {
        match computation {
            Some(value) => Some(value),
            None => handler(()),
        }
    }

    fn handle_error<A, F>(computation: Option<A>, handler: F) -> Option<A>
    where
        F: FnOnce(()) -> A,
        A: 'static,
    {
        computation.or_else(|| Some(handler(())))
    }

    fn from_result<A>(result: Result<A, ()>) -> Option<A>
    where
        A: 'static,
    {
        result.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Applicative;
    use rstest::rstest;

    #[rstest]
    fn result_throw_error_creates_err() {
        let failed: Result<i32, String> = <Result<i32, String>>::throw_error("boom".to_string());
        assert_eq!(failed, Err("boom".to_string()));
    }

    #[rstest]
    fn result_throw_catch_law() {
        let handler = |e: String| Ok::<usize, String>(e.len());
        let left = <Result<usize, String>>::catch_error(
            <Result<usize, String>>::throw_error("test".to_string()),
            handler,
        );
        assert_eq!(left, handler("test".to_string()));
    }

    #[rstest]
    fn result_catch_pure_law() {
        let pure_value: Result<i32, String> = <Result<(), String>>::pure(42);
        let caught = <Result<i32, String>>::catch_error(pure_value.clone(), |_| Ok(0));
        assert_eq!(caught, pure_value);
    }

    #[rstest]
    fn result_throw_short_circuit_law() {
        let thrown: Result<i32, String> = <Result<i32, String>>::throw_error("e".to_string());
        let chained = thrown.flat_map(|n| Ok(n + 1));
        assert_eq!(chained, Err("e".to_string()));
    }

    #[rstest]
    fn result_handle_error_converts_to_ok() {
        let failing: Result<i32, String> = Err("error".to_string());
        assert_eq!(<Result<i32, String>>::handle_error(failing, |_| 0), Ok(0));
    }

    #[rstest]
    #[case(Ok(42), Some(42))]
    #[case(Err(()), None)]
    fn option_from_result(#[case] input: Result<i32, ()>, #[case] expected: Option<i32>) {
        assert_eq!(<Option<i32>>::from_result(input), expected);
    }

    #[rstest]
    fn option_throw_error_is_none() {
        let failed: Option<i32> = <Option<i32>>::throw_error(());
        assert_eq!(failed, None);
    }

    #[rstest]
    fn option_catch_error_recovers_none() {
        let recovered = <Option<i32>>::catch_error(None, |()| Some(7));
        assert_eq!(recovered, Some(7));
    }

    #[rstest]
    fn option_catch_error_preserves_some() {
        let untouched = <Option<i32>>::catch_error(Some(42), |()| Some(0));
        assert_eq!(untouched, Some(42));
    }
}
