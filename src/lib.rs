//! # rwst
//!
//! A composable Reader-Writer-State effect transformer for Rust.
//!
//! ## Overview
//!
//! The crate is built around [`effect::Rwst`], a single wrapper that combines
//! three orthogonal capabilities around an arbitrary underlying effect:
//!
//! - **Reader**: read-only access to an environment
//! - **Writer**: an append-only, associatively combined log
//! - **State**: a value threaded sequentially from step to step
//!
//! The underlying effect is any type constructor — [`typeclass::Identity`]
//! for pure computation, `Option` for absence, `Result` for failure — and the
//! wrapper derives exactly the operations the effect's own capabilities
//! support, expressed through the type class traits in [`typeclass`].
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (Functor, Monad, Semigroup, etc.)
//! - `control`: control structures (Either, Lazy)
//! - `effect`: the Rwst transformer and effect-level type classes
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use rwst::effect::Rwst;
//!
//! // Read a config value, fold it into the state, log what happened.
//! let step: Rwst<i32, i32, Option<(i32, i32, Vec<String>)>> =
//!     Rwst::ask().flat_map(|cfg| {
//!         Rwst::modify(move |count: i32| count + cfg)
//!             .then(Rwst::tell(vec![format!("added {cfg}")]))
//!             .then(Rwst::get())
//!     });
//!
//! let (result, state, log) = step.run(10, 0).unwrap();
//! assert_eq!(result, 10);
//! assert_eq!(state, 10);
//! assert_eq!(log, vec!["added 10"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rwst::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
