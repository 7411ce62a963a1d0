//! A value that is one of two types.
//!
//! `Either<L, R>` is the step type for stack-safe iteration: a `Left`
//! carries the next loop input, a `Right` carries the terminal value.
//! Unlike `Result` it attaches no error meaning to either side.

use std::fmt;

/// A value holding either an `L` or an `R`.
///
/// # Examples
///
/// ```rust
/// use rwst::control::Either;
///
/// let left: Either<i32, &str> = Either::Left(42);
/// let right: Either<i32, &str> = Either::Right("done");
///
/// assert!(left.is_left());
/// assert_eq!(right.right(), Some("done"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left value; by convention, "continue with this".
    Left(L),
    /// The right value; by convention, "finished with this".
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Extracts the left value, if present.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Extracts the right value, if present.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::control::Either;
    ///
    /// let step: Either<i32, &str> = Either::Left(1);
    /// assert_eq!(step.map_left(|n| n * 10), Either::Left(10));
    /// ```
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value, leaving a `Left` untouched.
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both sides into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::control::Either;
    ///
    /// let size: Either<Vec<i32>, &str> = Either::Right("four");
    /// assert_eq!(size.fold(|v| v.len(), |s| s.len()), 4);
    /// ```
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the two sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_and_right_accessors() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(left.left(), Some(1));
        assert_eq!(right.left(), None);
        assert!(left.is_left());
        assert!(right.is_right());
    }

    #[rstest]
    fn map_left_skips_right() {
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(right.map_left(|n| n + 1), Either::Right("r"));
    }

    #[rstest]
    fn fold_collapses_both_sides() {
        let left: Either<i32, i32> = Either::Left(2);
        let right: Either<i32, i32> = Either::Right(3);
        assert_eq!(left.fold(|n| n * 10, |n| n), 20);
        assert_eq!(right.fold(|n| n * 10, |n| n), 3);
    }

    #[rstest]
    fn result_conversions_roundtrip() {
        let ok: Result<i32, &str> = Ok(5);
        let either: Either<&str, i32> = ok.into();
        assert_eq!(either, Either::Right(5));
        let back: Result<i32, &str> = either.into();
        assert_eq!(back, Ok(5));
    }

    #[rstest]
    fn swap_flips_sides() {
        let left: Either<i32, &str> = Either::Left(1);
        assert_eq!(left.swap(), Either::Right(1));
    }
}
