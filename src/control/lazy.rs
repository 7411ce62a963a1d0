//! Lazy evaluation with memoization.
//!
//! `Lazy<T, F>` defers a computation until it is first demanded, then caches
//! the value for every later access. The effect transformer uses it for
//! deferred combination (`map2_eval`): the second operand of the combination
//! is only built if and when the first operand's effect succeeds.

use std::cell::{Ref, RefCell};
use std::fmt;

enum LazyState<T, F> {
    Uninit(F),
    Init(T),
    Poisoned,
}

/// A deferred, memoized computation.
///
/// The initializer runs at most once, on the first call to [`force`].
/// If it panics, the cell is poisoned and later accesses panic too.
///
/// [`force`]: Lazy::force
///
/// # Examples
///
/// ```rust
/// use rwst::control::Lazy;
///
/// let lazy = Lazy::new(|| 21 * 2);
/// assert!(!lazy.is_initialized());
/// assert_eq!(*lazy.force(), 42);
/// assert!(lazy.is_initialized());
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new `Lazy` from an initializer that has not yet run.
    pub const fn new(initializer: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Uninit(initializer)),
        }
    }

    /// Demands the value, running the initializer on first access.
    ///
    /// Returns a borrow of the cached value; the borrow must be released
    /// before `force` is called again from the same scope.
    ///
    /// # Panics
    ///
    /// Panics if the initializer previously panicked (the cell is
    /// poisoned), or if called while a returned borrow is still live
    /// across an initialization.
    pub fn force(&self) -> Ref<'_, T> {
        {
            let mut state = self.state.borrow_mut();
            if matches!(&*state, LazyState::Uninit(_)) {
                // Poison while the initializer runs; replaced on success.
                if let LazyState::Uninit(initializer) =
                    std::mem::replace(&mut *state, LazyState::Poisoned)
                {
                    *state = LazyState::Init(initializer());
                }
            }
        }
        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => value,
            LazyState::Uninit(_) | LazyState::Poisoned => {
                panic!("Lazy::force: initializer panicked; the cell is poisoned")
            }
        })
    }
}

impl<T> Lazy<T> {
    /// Creates an already-initialized `Lazy` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::control::Lazy;
    ///
    /// let lazy = Lazy::pure(7);
    /// assert!(lazy.is_initialized());
    /// assert_eq!(*lazy.force(), 7);
    /// ```
    pub const fn pure(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Init(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns the cached value if the initializer has already run.
    pub fn get(&self) -> Option<Ref<'_, T>> {
        Ref::filter_map(self.state.borrow(), |state| match state {
            LazyState::Init(value) => Some(value),
            LazyState::Uninit(_) | LazyState::Poisoned => None,
        })
        .ok()
    }

    /// Returns `true` if the value has been computed.
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Init(_))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            LazyState::Init(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Uninit(_) => formatter.write_str("Lazy(<uninit>)"),
            LazyState::Poisoned => formatter.write_str("Lazy(<poisoned>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn force_runs_initializer_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let lazy = Lazy::new(move || {
            counter.set(counter.get() + 1);
            42
        });

        assert_eq!(*lazy.force(), 42);
        assert_eq!(*lazy.force(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn get_before_force_is_none() {
        let lazy = Lazy::new(|| "value");
        assert!(lazy.get().is_none());
        lazy.force();
        assert_eq!(*lazy.get().unwrap(), "value");
    }

    #[rstest]
    fn pure_is_initialized_immediately() {
        let lazy = Lazy::pure(vec![1, 2, 3]);
        assert!(lazy.is_initialized());
        assert_eq!(lazy.force().len(), 3);
    }
}
