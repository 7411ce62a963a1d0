//! Control structures used by the effect transformer.
//!
//! - [`Either`]: a value of one of two types; the step type driving
//!   stack-safe iteration (`tail_rec` / `tail_rec_m`)
//! - [`Lazy`]: memoized deferral; the operand type of `map2_eval`
//!
//! # Examples
//!
//! ```rust
//! use rwst::control::{Either, Lazy};
//!
//! let step: Either<i32, &str> = Either::Left(41);
//! assert_eq!(step.map_left(|n| n + 1), Either::Left(42));
//!
//! let lazy = Lazy::new(|| "expensive".len());
//! assert!(!lazy.is_initialized());
//! assert_eq!(*lazy.force(), 9);
//! ```

mod either;
mod lazy;

pub use either::Either;
pub use lazy::Lazy;
