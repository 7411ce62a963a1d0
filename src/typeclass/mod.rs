//! Type classes describing the capabilities of an underlying effect.
//!
//! Every operation on [`crate::effect::Rwst`] names the minimal capability it
//! needs from the underlying effect as a trait bound from this module. The
//! traits form a ladder, each extending the previous one:
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation via GAT
//! - [`Functor`]: mapping over the wrapped value
//! - [`Applicative`]: lifting plain values (`pure`) and applying wrapped functions
//! - [`Monad`]: sequencing dependent computations (`flat_map`)
//! - [`MonadRec`]: stack-safe iteration (`tail_rec`)
//! - [`Alternative`]: failure and choice (`empty` / `alt`)
//!
//! Alongside the ladder, two algebraic classes describe the log and state
//! types rather than the effect:
//!
//! - [`Semigroup`]: associative combination (log accumulation)
//! - [`Monoid`]: a semigroup with an identity element (the empty log)
//!
//! [`Identity`] is the no-op effect: the base case for transformer stacks and
//! the simplest model for checking laws.

mod higher;

pub use higher::TypeConstructor;

mod identity;

pub use identity::Identity;

mod functor;

pub use functor::Functor;

mod applicative;

pub use applicative::Applicative;

mod monad;

pub use monad::{Monad, MonadRec};

mod alternative;

pub use alternative::Alternative;

mod semigroup;

pub use semigroup::Semigroup;

mod monoid;

pub use monoid::Monoid;
