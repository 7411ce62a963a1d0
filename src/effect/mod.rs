//! The Reader-Writer-State effect transformer and effect-level type classes.
//!
//! # The transformer
//!
//! [`Rwst<E, S, M>`] wraps a function `(E, S) -> M`, where `M` is an
//! arbitrary underlying effect applied to the triple `(A, S, W)` — result,
//! updated state, accumulated log. One sequential program can therefore
//! simultaneously consult a read-only environment, thread state forward,
//! append log entries, and delegate to the underlying effect for failure or
//! absence.
//!
//! ```rust
//! use rwst::effect::Rwst;
//!
//! let program: Rwst<i32, i32, Option<(i32, i32, Vec<String>)>> =
//!     Rwst::ask().flat_map(|cfg| {
//!         Rwst::modify(move |count: i32| count + cfg)
//!             .then(Rwst::tell(vec!["added".to_string()]))
//!             .then(Rwst::get())
//!     });
//!
//! assert_eq!(program.run(10, 0), Some((10, 10, vec!["added".to_string()])));
//! ```
//!
//! # Effect-level type classes
//!
//! [`MonadError`] abstracts raising and catching failure within an effect;
//! `Result` and `Option` implement it, and the transformer's `raise_error` /
//! `handle_error_with` are derived from it.

mod monad_error;

pub use monad_error::MonadError;

mod rwst;

pub use rwst::Rwst;
