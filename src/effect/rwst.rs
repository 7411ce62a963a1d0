//! Rwst - the Reader-Writer-State effect transformer.
//!
//! `Rwst<E, S, M>` layers three capabilities over an arbitrary underlying
//! effect:
//! - **Reader**: read-only access to an environment `E`
//! - **Writer**: an accumulated log `W`
//! - **State**: state `S` threaded through the computation
//!
//! # Overview
//!
//! An `Rwst<E, S, M>` encapsulates a function `(E, S) -> M`, where `M` is the
//! underlying effect applied to the triple `(A, S, W)`:
//! - Takes an environment `E` and initial state `S`
//! - Produces, inside the effect, a result `A`, new state `S`, and log `W`
//!
//! With `M = Identity<(A, S, W)>` this is an ordinary RWS monad; with
//! `M = Option<...>` or `M = Result<..., Err>` the same program additionally
//! short-circuits on absence or failure.
//!
//! # Note on Type Classes
//!
//! `Rwst` provides its own `fmap`, `flat_map`, `map2`, etc. methods directly
//! on the type rather than implementing the `Functor`/`Applicative`/`Monad`
//! traits. Each operation instead names, in its `where` clause, the exact
//! capability it demands of the underlying effect: `fmap` needs `M: Functor`,
//! `flat_map` needs `M: Monad`, `handle_error_with` needs `M: MonadError`,
//! `tail_rec_m` needs `M: MonadRec`, and so on. An effect type unlocks
//! exactly the operations whose evidence it can supply, and coherence makes
//! the chosen code path unique.
//!
//! # Laws
//!
//! `Rwst` satisfies the Functor, Applicative, and Monad laws, plus the laws
//! of its Reader, Writer, and State surfaces, whenever the underlying effect
//! is lawful.
//!
//! ## Functor Laws
//!
//! - Identity: `rwst.fmap(|x| x) == rwst`
//! - Composition: `rwst.fmap(f).fmap(g) == rwst.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Rwst::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Rwst::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! ## Reader Laws
//!
//! - Ask Local Identity: `Rwst::local(|e| e, m) == m`
//! - Ask Local Composition: `Rwst::local(f, Rwst::local(g, m)) == Rwst::local(|e| g(f(e)), m)`
//!
//! ## Writer Laws
//!
//! - Tell Monoid Law: `tell(w1).then(tell(w2)) == tell(w1.combine(w2))`
//! - Reset Identity Law: `m.reset()` always carries `W::empty()`
//!
//! ## State Laws
//!
//! - Get Put Law: `get().flat_map(|s| put(s)) == pure(())`
//! - Put Get Law: `put(s).then(get())` returns `s`
//! - Put Put Law: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use rwst::effect::Rwst;
//!
//! // Reads config, updates state, logs, and can fail via Option.
//! #[derive(Clone)]
//! struct Config {
//!     multiplier: i32,
//! }
//!
//! let computation: Rwst<Config, i32, Option<(i32, i32, Vec<String>)>> =
//!     Rwst::ask().flat_map(|config: Config| {
//!         Rwst::get().flat_map(move |state: i32| {
//!             let result = state * config.multiplier;
//!             Rwst::put(state + 1)
//!                 .then(Rwst::tell(vec![format!("result: {result}")]))
//!                 .then(Rwst::pure(result))
//!         })
//!     });
//!
//! let outcome = computation.run(Config { multiplier: 3 }, 10);
//! assert_eq!(outcome, Some((30, 11, vec!["result: 30".to_string()])));
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use super::monad_error::MonadError;
use crate::control::{Either, Lazy};
use crate::typeclass::{
    Alternative, Applicative, Functor, Monad, MonadRec, Monoid, Semigroup, TypeConstructor,
};

/// A Reader-Writer-State computation over an underlying effect.
///
/// `Rwst<E, S, M>` represents a computation that:
/// - Reads from an environment of type `E`
/// - Threads state of type `S`
/// - Produces, inside the effect `M`, a triple of result, new state, and
///   accumulated log
///
/// # Type Parameters
///
/// - `E`: Environment type (read-only)
/// - `S`: State type
/// - `M`: The underlying effect applied to the triple, e.g.
///   `Option<(A, S, W)>` or `Result<(A, S, W), Err>`
///
/// # Examples
///
/// ```rust
/// use rwst::effect::Rwst;
///
/// let program: Rwst<i32, i32, Option<(i32, i32, Vec<String>)>> =
///     Rwst::new(|environment, state| {
///         let result = environment + state;
///         Some((result, state + 1, vec![format!("computed: {result}")]))
///     });
///
/// assert_eq!(
///     program.run(10, 5),
///     Some((15, 6, vec!["computed: 15".to_string()]))
/// );
/// ```
pub struct Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    run_function: Rc<dyn Fn(E, S) -> M>,
}

// --- Basic Constructors and Executors ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a new `Rwst` from a function producing the effect directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, i32, Option<(i32, i32, String)>> =
    ///     Rwst::new(|environment, state| {
    ///         Some((environment + state, state + 1, String::new()))
    ///     });
    /// assert_eq!(program.run(40, 1), Some((41, 2, String::new())));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E, S) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Creates an `Rwst` whose run function itself lives inside the effect.
    ///
    /// This is the primitive constructor: the outer effect layer holding the
    /// function and the inner layer it produces are merged through the
    /// effect's `Monad` instance, so a failed outer layer fails every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, i32, Option<(i32, i32, String)>> =
    ///     Rwst::from_effect_function(Some(|environment: i32, state: i32| {
    ///         Some((environment + state, state, String::new()))
    ///     }));
    /// assert_eq!(program.run(40, 2), Some((42, 2, String::new())));
    /// ```
    pub fn from_effect_function<A, W, N, G>(effect_function: N) -> Self
    where
        N: Monad<Inner = G, WithType<(A, S, W)> = M> + Clone + 'static,
        G: FnOnce(E, S) -> M + 'static,
        A: 'static,
        W: 'static,
    {
        Self::new(move |environment, state| {
            effect_function
                .clone()
                .flat_map::<(A, S, W), _>(|function| function(environment, state))
        })
    }

    /// Creates an `Rwst` that returns a constant value without touching
    /// state or log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, i32, Option<(i32, i32, Vec<String>)>> = Rwst::pure(42);
    /// assert_eq!(program.run(0, 7), Some((42, 7, Vec::new())));
    /// ```
    pub fn pure<A, W>(value: A) -> Self
    where
        M: Applicative<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        A: Clone + 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state| M::pure((value.clone(), state, W::empty())))
    }

    /// Lifts a plain effect value into the transformer.
    ///
    /// The effect's result becomes the computation's result; state passes
    /// through and the log starts empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, Vec<String>)>> = Rwst::lift(Some(42));
    /// assert_eq!(program.run((), 7), Some((42, 7, Vec::new())));
    ///
    /// let absent: Rwst<(), i32, Option<(i32, i32, Vec<String>)>> = Rwst::lift(None);
    /// assert_eq!(absent.run((), 7), None);
    /// ```
    pub fn lift<A, W, FA>(effect: FA) -> Self
    where
        FA: Functor<Inner = A, WithType<(A, S, W)> = M> + Clone + 'static,
        A: 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state: S| {
            effect.clone().fmap(move |value| (value, state, W::empty()))
        })
    }

    /// Runs the computation with the given environment and initial state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, i32, Option<(i32, i32, String)>> =
    ///     Rwst::new(|environment, state| {
    ///         Some((environment + state, state * 2, format!("env={environment}")))
    ///     });
    /// assert_eq!(program.run(10, 5), Some((15, 10, "env=10".to_string())));
    /// ```
    pub fn run(&self, environment: E, initial_state: S) -> M {
        (self.run_function)(environment, initial_state)
    }

    /// Runs the computation and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, String)>> = Rwst::pure(42);
    /// assert_eq!(program.run_result((), 0), Some(42));
    /// ```
    pub fn run_result<A, W, MA>(&self, environment: E, initial_state: S) -> MA
    where
        M: Functor<Inner = (A, S, W), WithType<A> = MA>,
        MA: TypeConstructor<Inner = A> + 'static,
        A: 'static,
        W: 'static,
    {
        self.run(environment, initial_state)
            .fmap(|(result, _, _)| result)
    }

    /// Runs the computation and keeps only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::modify(|n| n + 1);
    /// assert_eq!(program.run_state((), 41), Some(42));
    /// ```
    pub fn run_state<A, W, MS>(&self, environment: E, initial_state: S) -> MS
    where
        M: Functor<Inner = (A, S, W), WithType<S> = MS>,
        MS: TypeConstructor<Inner = S> + 'static,
        A: 'static,
        W: 'static,
    {
        self.run(environment, initial_state)
            .fmap(|(_, state, _)| state)
    }

    /// Runs the computation and keeps only the accumulated log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<((), (), String)>> = Rwst::tell("entry".to_string());
    /// assert_eq!(program.run_written((), ()), Some("entry".to_string()));
    /// ```
    pub fn run_written<A, W, MW>(&self, environment: E, initial_state: S) -> MW
    where
        M: Functor<Inner = (A, S, W), WithType<W> = MW>,
        MW: TypeConstructor<Inner = W> + 'static,
        A: 'static,
        W: 'static,
    {
        self.run(environment, initial_state)
            .fmap(|(_, _, output)| output)
    }

    /// Runs the computation starting from the state monoid's identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), Vec<i32>, Option<((), Vec<i32>, String)>> =
    ///     Rwst::modify(|mut items: Vec<i32>| {
    ///         items.push(1);
    ///         items
    ///     });
    /// assert_eq!(program.run_empty(()), Some(((), vec![1], String::new())));
    /// ```
    pub fn run_empty(&self, environment: E) -> M
    where
        S: Monoid,
    {
        self.run(environment, S::empty())
    }

    /// Like [`run_result`](Self::run_result), starting from `S::empty()`.
    pub fn run_empty_result<A, W, MA>(&self, environment: E) -> MA
    where
        M: Functor<Inner = (A, S, W), WithType<A> = MA>,
        MA: TypeConstructor<Inner = A> + 'static,
        S: Monoid,
        A: 'static,
        W: 'static,
    {
        self.run_result(environment, S::empty())
    }

    /// Like [`run_state`](Self::run_state), starting from `S::empty()`.
    pub fn run_empty_state<A, W, MS>(&self, environment: E) -> MS
    where
        M: Functor<Inner = (A, S, W), WithType<S> = MS>,
        MS: TypeConstructor<Inner = S> + 'static,
        S: Monoid,
        A: 'static,
        W: 'static,
    {
        self.run_state(environment, S::empty())
    }

    /// Like [`run_written`](Self::run_written), starting from `S::empty()`.
    pub fn run_empty_written<A, W, MW>(&self, environment: E) -> MW
    where
        M: Functor<Inner = (A, S, W), WithType<W> = MW>,
        MW: TypeConstructor<Inner = W> + 'static,
        S: Monoid,
        A: 'static,
        W: 'static,
    {
        self.run_written(environment, S::empty())
    }
}

// --- Functor-Monad Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Maps a function over the result (Functor operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, String)>> = Rwst::pure(5);
    /// let doubled = program.fmap(|n| n * 2);
    /// assert_eq!(doubled.run((), 0), Some((10, 0, String::new())));
    /// ```
    pub fn fmap<A, B, W, MB, F>(self, function: F) -> Rwst<E, S, MB>
    where
        M: Functor<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(A, S, W)> = M> + 'static,
        F: Fn(A) -> B + 'static,
        A: 'static,
        B: 'static,
        W: 'static,
    {
        self.transform(move |(result, state, output)| (function(result), state, output))
    }

    /// Adapts the environment with a contravariant pre-transformation.
    ///
    /// The resulting computation accepts a different environment type and
    /// converts it before running. No effect capability is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<usize, (), Option<(usize, (), String)>> = Rwst::ask();
    /// let sized = program.contramap(|text: &'static str| text.len());
    /// assert_eq!(sized.run("hello", ()), Some((5, (), String::new())));
    /// ```
    pub fn contramap<E0, F>(self, function: F) -> Rwst<E0, S, M>
    where
        F: Fn(E0) -> E + 'static,
        E0: 'static,
    {
        let original_function = self.run_function;
        Rwst::new(move |environment, state| (original_function)(function(environment), state))
    }

    /// Adapts the environment and maps the result in one step (Profunctor
    /// operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<usize, (), Option<(usize, (), String)>> = Rwst::ask();
    /// let adapted = program.dimap(|text: &'static str| text.len(), |n| n * 2);
    /// assert_eq!(adapted.run("hello", ()), Some((10, (), String::new())));
    /// ```
    pub fn dimap<E0, A, B, W, MB, F, G>(self, pre: F, post: G) -> Rwst<E0, S, MB>
    where
        M: Functor<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(A, S, W)> = M> + 'static,
        F: Fn(E0) -> E + 'static,
        G: Fn(A) -> B + 'static,
        E0: 'static,
        A: 'static,
        B: 'static,
        W: 'static,
    {
        self.fmap(post).contramap(pre)
    }

    /// Maps a function over the log, possibly changing its type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<((), (), String)>> = Rwst::tell("log".to_string());
    /// let counted = program.map_written(|output| output.len());
    /// assert_eq!(counted.run((), ()), Some(((), (), 3)));
    /// ```
    pub fn map_written<A, W, W2, M2, F>(self, function: F) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(A, S, W2)> = M2>,
        M2: Functor<Inner = (A, S, W2), WithType<(A, S, W)> = M> + 'static,
        F: Fn(W) -> W2 + 'static,
        A: 'static,
        W: 'static,
        W2: 'static,
    {
        self.transform(move |(result, state, output)| (result, state, function(output)))
    }

    /// Maps over log and result at once (Bifunctor operation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), String)>> =
    ///     Rwst::new(|(), ()| Some((21, (), "x".to_string())));
    /// let mapped = program.bimap(|output| output.len(), |result| result * 2);
    /// assert_eq!(mapped.run((), ()), Some((42, (), 1)));
    /// ```
    pub fn bimap<A, B, W, W2, M2, F, G>(self, log_function: F, result_function: G) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(B, S, W2)> = M2>,
        M2: Functor<Inner = (B, S, W2), WithType<(A, S, W)> = M> + 'static,
        F: Fn(W) -> W2 + 'static,
        G: Fn(A) -> B + 'static,
        A: 'static,
        B: 'static,
        W: 'static,
        W2: 'static,
    {
        self.transform(move |(result, state, output)| {
            (result_function(result), state, log_function(output))
        })
    }

    /// Transforms the whole result triple inside the effect.
    ///
    /// Result and log types may change; the state type is fixed by the
    /// wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, String)>> = Rwst::pure(21);
    /// let reshaped = program.transform(|(result, state, output): (i32, i32, String)| {
    ///     (result * 2, state + 1, output.len())
    /// });
    /// assert_eq!(reshaped.run((), 0), Some((42, 1, 0)));
    /// ```
    pub fn transform<A, B, W, W2, M2, F>(self, function: F) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(B, S, W2)> = M2>,
        M2: Functor<Inner = (B, S, W2), WithType<(A, S, W)> = M> + 'static,
        F: Fn((A, S, W)) -> (B, S, W2) + 'static,
        A: 'static,
        B: 'static,
        W: 'static,
        W2: 'static,
    {
        let original_function = self.run_function;
        let function = Rc::new(function);
        Rwst::new(move |environment, state| {
            let function = Rc::clone(&function);
            (original_function)(environment, state).fmap(move |triple| function(triple))
        })
    }

    /// Transforms the underlying effect value itself, possibly changing the
    /// effect type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), String)>> = Rwst::pure(42);
    /// let as_result: Rwst<(), (), Result<(i32, (), String), String>> =
    ///     program.transform_f(|effect| effect.ok_or_else(|| "missing".to_string()));
    /// assert_eq!(as_result.run((), ()), Ok((42, (), String::new())));
    /// ```
    pub fn transform_f<M2, F>(self, function: F) -> Rwst<E, S, M2>
    where
        F: Fn(M) -> M2 + 'static,
        M2: 'static,
    {
        let original_function = self.run_function;
        Rwst::new(move |environment, state| function((original_function)(environment, state)))
    }

    /// Chains this computation with a function producing the next one
    /// (Monad operation).
    ///
    /// State threads left to right; logs combine through `Semigroup`,
    /// first operand's entries first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, i32, Option<(i32, i32, Vec<String>)>> =
    ///     Rwst::ask().flat_map(|environment| {
    ///         Rwst::modify(move |state: i32| state + environment)
    ///             .then(Rwst::get())
    ///     });
    /// assert_eq!(program.run(10, 5), Some((15, 15, Vec::new())));
    /// ```
    pub fn flat_map<A, B, W, MB, F>(self, function: F) -> Rwst<E, S, MB>
    where
        M: Monad<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(B, S, W)> = MB, WithType<(A, S, W)> = M> + 'static,
        F: Fn(A) -> Rwst<E, S, MB> + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        let function = Rc::new(function);
        Rwst::new(move |environment: E, state: S| {
            let function = Rc::clone(&function);
            let next_environment = environment.clone();
            (original_function)(environment, state).flat_map::<(B, S, W), _>(
                move |(result, intermediate_state, first_output)| {
                    function(result)
                        .run(next_environment, intermediate_state)
                        .fmap(move |(next_result, final_state, second_output)| {
                            (next_result, final_state, first_output.combine(second_output))
                        })
                },
            )
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<A, B, W, MB, F>(self, function: F) -> Rwst<E, S, MB>
    where
        M: Monad<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(B, S, W)> = MB, WithType<(A, S, W)> = M> + 'static,
        F: Fn(A) -> Rwst<E, S, MB> + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let first: Rwst<(), (), Option<((), (), Vec<String>)>> =
    ///     Rwst::tell(vec!["step 1".to_string()]);
    /// let second: Rwst<(), (), Option<(i32, (), Vec<String>)>> = Rwst::pure(42);
    /// let combined = first.then(second);
    /// assert_eq!(
    ///     combined.run((), ()),
    ///     Some((42, (), vec!["step 1".to_string()]))
    /// );
    /// ```
    #[must_use]
    pub fn then<A, B, W, MB>(self, next: Rwst<E, S, MB>) -> Rwst<E, S, MB>
    where
        M: Monad<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(B, S, W)> = MB, WithType<(A, S, W)> = M> + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Chains this computation with a function producing a plain effect
    /// value, which passes through state and log unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), Vec<String>)>> = Rwst::pure(5);
    /// let checked = program.flat_map_f(|n| if n > 0 { Some(n * 2) } else { None });
    /// assert_eq!(checked.run((), ()), Some((10, (), Vec::new())));
    /// ```
    pub fn flat_map_f<A, B, W, MB, FB, F>(self, function: F) -> Rwst<E, S, MB>
    where
        M: Monad<Inner = (A, S, W), WithType<(B, S, W)> = MB>,
        MB: Functor<Inner = (B, S, W), WithType<(A, S, W)> = M> + 'static,
        FB: Functor<Inner = B, WithType<(B, S, W)> = MB> + 'static,
        F: Fn(A) -> FB + 'static,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        let function = Rc::new(function);
        Rwst::new(move |environment, state| {
            let function = Rc::clone(&function);
            (original_function)(environment, state).flat_map::<(B, S, W), _>(
                move |(result, new_state, output)| {
                    function(result).fmap(move |next_result| (next_result, new_state, output))
                },
            )
        })
    }

    /// Combines two computations with a binary function.
    ///
    /// The first computation runs first; logs combine in that order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let first: Rwst<(), (), Option<(i32, (), String)>> =
    ///     Rwst::new(|(), ()| Some((1, (), "x".to_string())));
    /// let second = Rwst::new(|(), ()| Some((2, (), "y".to_string())));
    /// let combined = first.map2(second, |a, b| a + b);
    /// assert_eq!(combined.run((), ()), Some((3, (), "xy".to_string())));
    /// ```
    pub fn map2<A, B, C, W, MB, MC, F>(
        self,
        other: Rwst<E, S, MB>,
        function: F,
    ) -> Rwst<E, S, MC>
    where
        M: Monad<Inner = (A, S, W), WithType<(C, S, W)> = MC>,
        MB: Functor<Inner = (B, S, W), WithType<(C, S, W)> = MC> + 'static,
        MC: Functor<Inner = (C, S, W), WithType<(A, S, W)> = M, WithType<(B, S, W)> = MB>
            + 'static,
        F: Fn(A, B) -> C + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        let function = Rc::new(function);
        Rwst::new(move |environment: E, state| {
            let function = Rc::clone(&function);
            let other_function = Rc::clone(&other_function);
            let next_environment = environment.clone();
            (self_function)(environment, state).flat_map::<(C, S, W), _>(
                move |(first, intermediate_state, first_output)| {
                    (other_function)(next_environment, intermediate_state).fmap(
                        move |(second, final_state, second_output)| {
                            (
                                function(first, second),
                                final_state,
                                first_output.combine(second_output),
                            )
                        },
                    )
                },
            )
        })
    }

    /// Like [`map2`](Self::map2), but the second operand is deferred and
    /// only constructed if the first effect succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::control::Lazy;
    /// use rwst::effect::Rwst;
    ///
    /// let first: Rwst<(), (), Option<(i32, (), String)>> = Rwst::pure(1);
    /// let deferred: Lazy<Rwst<(), (), Option<(i32, (), String)>>, _> =
    ///     Lazy::new(|| Rwst::pure(2));
    /// let combined = first.map2_eval(deferred, |a, b| a + b);
    /// assert_eq!(combined.run((), ()), Some((3, (), String::new())));
    /// ```
    pub fn map2_eval<A, B, C, W, MB, MC, G, F>(
        self,
        deferred: Lazy<Rwst<E, S, MB>, G>,
        function: F,
    ) -> Rwst<E, S, MC>
    where
        M: Monad<Inner = (A, S, W), WithType<(C, S, W)> = MC>,
        MB: Functor<Inner = (B, S, W), WithType<(C, S, W)> = MC> + 'static,
        MC: Functor<Inner = (C, S, W), WithType<(A, S, W)> = M, WithType<(B, S, W)> = MB>
            + 'static,
        G: FnOnce() -> Rwst<E, S, MB> + 'static,
        F: Fn(A, B) -> C + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let deferred = Rc::new(deferred);
        let function = Rc::new(function);
        Rwst::new(move |environment: E, state| {
            let function = Rc::clone(&function);
            let deferred = Rc::clone(&deferred);
            let next_environment = environment.clone();
            (self_function)(environment, state).flat_map::<(C, S, W), _>(
                move |(first, intermediate_state, first_output)| {
                    let second_computation = deferred.force().clone();
                    second_computation
                        .run(next_environment, intermediate_state)
                        .fmap(move |(second, final_state, second_output)| {
                            (
                                function(first, second),
                                final_state,
                                first_output.combine(second_output),
                            )
                        })
                },
            )
        })
    }

    /// Combines two computations into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let first: Rwst<(), (), Option<(i32, (), String)>> = Rwst::pure(42);
    /// let second: Rwst<(), (), Option<(&str, (), String)>> = Rwst::pure("hello");
    /// let product = first.product(second);
    /// assert_eq!(product.run((), ()), Some(((42, "hello"), (), String::new())));
    /// ```
    #[must_use]
    pub fn product<A, B, W, MB, MC>(self, other: Rwst<E, S, MB>) -> Rwst<E, S, MC>
    where
        M: Monad<Inner = (A, S, W), WithType<((A, B), S, W)> = MC>,
        MB: Functor<Inner = (B, S, W), WithType<((A, B), S, W)> = MC> + 'static,
        MC: Functor<Inner = ((A, B), S, W), WithType<(A, S, W)> = M, WithType<(B, S, W)> = MB>
            + 'static,
        E: Clone,
        W: Semigroup + 'static,
        A: 'static,
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }
}

// --- MonadReader Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a computation that returns the entire environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<i32, (), Option<(i32, (), String)>> = Rwst::ask();
    /// assert_eq!(program.run(42, ()), Some((42, (), String::new())));
    /// ```
    #[must_use]
    pub fn ask<W>() -> Self
    where
        M: Applicative<Inner = (E, S, W), WithType<(E, S, W)> = M>,
        W: Monoid + 'static,
    {
        Self::new(|environment, state| M::pure((environment, state, W::empty())))
    }

    /// Creates a computation that projects a value from the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// #[derive(Clone)]
    /// struct Config {
    ///     port: u16,
    /// }
    ///
    /// let program: Rwst<Config, (), Option<(u16, (), String)>> =
    ///     Rwst::asks(|config: Config| config.port);
    /// assert_eq!(
    ///     program.run(Config { port: 8080 }, ()),
    ///     Some((8080, (), String::new()))
    /// );
    /// ```
    pub fn asks<A, W, F>(projection: F) -> Self
    where
        M: Applicative<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(E) -> A + 'static,
        A: 'static,
        W: Monoid + 'static,
    {
        Self::new(move |environment, state| M::pure((projection(environment), state, W::empty())))
    }

    /// Runs a computation against a locally modified environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let reader: Rwst<i32, (), Option<(i32, (), String)>> = Rwst::ask();
    /// let doubled = Rwst::local(|environment| environment * 2, reader);
    /// assert_eq!(doubled.run(21, ()), Some((42, (), String::new())));
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(E) -> E + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment, state| {
            (computation_function)(modifier(environment), state)
        })
    }
}

// --- MonadWriter Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a computation that appends to the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<((), (), Vec<String>)>> =
    ///     Rwst::tell(vec!["log message".to_string()]);
    /// assert_eq!(
    ///     program.run((), ()),
    ///     Some(((), (), vec!["log message".to_string()]))
    /// );
    /// ```
    pub fn tell<W>(output: W) -> Self
    where
        M: Applicative<Inner = ((), S, W), WithType<((), S, W)> = M>,
        W: Clone + 'static,
    {
        Self::new(move |_, state| M::pure(((), state, output.clone())))
    }

    /// Creates a computation whose log entry lives inside an effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<((), (), String)>> =
    ///     Rwst::tell_f(Some("entry".to_string()));
    /// assert_eq!(program.run((), ()), Some(((), (), "entry".to_string())));
    /// ```
    pub fn tell_f<W, FW>(effect_output: FW) -> Self
    where
        FW: Functor<Inner = W, WithType<((), S, W)> = M> + Clone + 'static,
        W: 'static,
    {
        Self::new(move |_, state| {
            effect_output
                .clone()
                .fmap(move |output| ((), state, output))
        })
    }

    /// Appends a log entry after this computation's own output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), String)>> =
    ///     Rwst::new(|(), ()| Some((42, (), "a".to_string())));
    /// assert_eq!(
    ///     program.and_tell("b".to_string()).run((), ()),
    ///     Some((42, (), "ab".to_string()))
    /// );
    /// ```
    pub fn and_tell<A, W>(self, output: W) -> Self
    where
        M: Functor<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        W: Semigroup + Clone + 'static,
        A: 'static,
    {
        self.transform(move |(result, state, log)| (result, state, log.combine(output.clone())))
    }

    /// Pairs the result with the log this computation produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), Vec<String>)>> =
    ///     Rwst::new(|(), ()| Some((42, (), vec!["computed".to_string()])));
    /// let listened = program.listen();
    /// assert_eq!(
    ///     listened.run((), ()),
    ///     Some(((42, vec!["computed".to_string()]), (), vec!["computed".to_string()]))
    /// );
    /// ```
    #[must_use]
    pub fn listen<A, W, M2>(self) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<((A, W), S, W)> = M2>,
        M2: Functor<Inner = ((A, W), S, W), WithType<(A, S, W)> = M> + 'static,
        W: Clone + 'static,
        A: 'static,
    {
        self.transform(|(result, state, output)| ((result, output.clone()), state, output))
    }

    /// Pairs the result with a projection of the log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), Vec<String>)>> =
    ///     Rwst::new(|(), ()| Some((42, (), vec!["a".to_string(), "b".to_string()])));
    /// let listened = program.listens(|output: &Vec<String>| output.len());
    /// assert_eq!(
    ///     listened.run((), ()),
    ///     Some(((42, 2), (), vec!["a".to_string(), "b".to_string()]))
    /// );
    /// ```
    pub fn listens<A, B, W, M2, F>(self, projection: F) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<((A, B), S, W)> = M2>,
        M2: Functor<Inner = ((A, B), S, W), WithType<(A, S, W)> = M> + 'static,
        F: Fn(&W) -> B + 'static,
        A: 'static,
        B: 'static,
        W: 'static,
    {
        self.transform(move |(result, state, output)| {
            let projected = projection(&output);
            ((result, projected), state, output)
        })
    }

    /// Rewrites the log without changing its type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), Vec<String>)>> =
    ///     Rwst::new(|(), ()| Some((42, (), vec!["hello".to_string()])));
    /// let censored = program.censor(|output| {
    ///     output.into_iter().map(|entry| entry.to_uppercase()).collect()
    /// });
    /// assert_eq!(censored.run((), ()), Some((42, (), vec!["HELLO".to_string()])));
    /// ```
    pub fn censor<A, W, F>(self, modifier: F) -> Self
    where
        M: Functor<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(W) -> W + 'static,
        A: 'static,
        W: 'static,
    {
        self.transform(move |(result, state, output)| (result, state, modifier(output)))
    }

    /// Replaces the result with the accumulated log.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<((), (), String)>> = Rwst::tell("entry".to_string());
    /// let observed = program.written();
    /// assert_eq!(
    ///     observed.run((), ()),
    ///     Some(("entry".to_string(), (), "entry".to_string()))
    /// );
    /// ```
    #[must_use]
    pub fn written<A, W, M2>(self) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(W, S, W)> = M2>,
        M2: Functor<Inner = (W, S, W), WithType<(A, S, W)> = M> + 'static,
        W: Clone + 'static,
        A: 'static,
    {
        self.transform(|(_, state, output)| (output.clone(), state, output))
    }

    /// Discards the accumulated log, restarting it at the monoid identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), (), Option<(i32, (), String)>> =
    ///     Rwst::new(|(), ()| Some((42, (), "noise".to_string())));
    /// assert_eq!(program.reset().run((), ()), Some((42, (), String::new())));
    /// ```
    #[must_use]
    pub fn reset<A, W>(self) -> Self
    where
        M: Functor<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        W: Monoid + 'static,
        A: 'static,
    {
        self.transform(|(result, state, _)| (result, state, W::empty()))
    }
}

// --- MonadState Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a computation that returns the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, String)>> = Rwst::get();
    /// assert_eq!(program.run((), 42), Some((42, 42, String::new())));
    /// ```
    #[must_use]
    pub fn get<W>() -> Self
    where
        M: Applicative<Inner = (S, S, W), WithType<(S, S, W)> = M>,
        S: Clone,
        W: Monoid + 'static,
    {
        Self::new(|_, state: S| M::pure((state.clone(), state, W::empty())))
    }

    /// Creates a computation that replaces the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::put(100);
    /// assert_eq!(program.run((), 42), Some(((), 100, String::new())));
    /// ```
    pub fn put<W>(new_state: S) -> Self
    where
        M: Applicative<Inner = ((), S, W), WithType<((), S, W)> = M>,
        S: Clone,
        W: Monoid + 'static,
    {
        Self::new(move |_, _| M::pure(((), new_state.clone(), W::empty())))
    }

    /// Creates a computation whose replacement state lives inside an effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::put_f(Some(100));
    /// assert_eq!(program.run((), 42), Some(((), 100, String::new())));
    /// ```
    pub fn put_f<W, FS>(effect_state: FS) -> Self
    where
        FS: Functor<Inner = S, WithType<((), S, W)> = M> + Clone + 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, _| {
            effect_state
                .clone()
                .fmap(|new_state| ((), new_state, W::empty()))
        })
    }

    /// Creates a computation that modifies the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::modify(|n| n * 2);
    /// assert_eq!(program.run((), 21), Some(((), 42, String::new())));
    /// ```
    pub fn modify<W, F>(modifier: F) -> Self
    where
        M: Applicative<Inner = ((), S, W), WithType<((), S, W)> = M>,
        F: Fn(S) -> S + 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state| M::pure(((), modifier(state), W::empty())))
    }

    /// Creates a computation whose state modification runs inside an effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> =
    ///     Rwst::modify_f(|n: i32| n.checked_mul(2));
    /// assert_eq!(program.run((), 21), Some(((), 42, String::new())));
    /// assert_eq!(program.run((), i32::MAX), None);
    /// ```
    pub fn modify_f<W, FS, F>(modifier: F) -> Self
    where
        F: Fn(S) -> FS + 'static,
        FS: Functor<Inner = S, WithType<((), S, W)> = M> + 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state| modifier(state).fmap(|new_state| ((), new_state, W::empty())))
    }

    /// Creates a computation that projects a value from the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), Vec<i32>, Option<(usize, Vec<i32>, String)>> =
    ///     Rwst::gets(|items: &Vec<i32>| items.len());
    /// assert_eq!(program.run((), vec![1, 2, 3]), Some((3, vec![1, 2, 3], String::new())));
    /// ```
    pub fn gets<A, W, F>(projection: F) -> Self
    where
        M: Applicative<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(&S) -> A + 'static,
        A: 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state| {
            let result = projection(&state);
            M::pure((result, state, W::empty()))
        })
    }

    /// Creates a computation whose state projection runs inside an effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), Vec<i32>, Option<(i32, Vec<i32>, String)>> =
    ///     Rwst::gets_f(|items: &Vec<i32>| items.first().copied());
    /// assert_eq!(program.run((), vec![7, 8]), Some((7, vec![7, 8], String::new())));
    /// assert_eq!(program.run((), Vec::new()), None);
    /// ```
    pub fn gets_f<A, W, FA, F>(projection: F) -> Self
    where
        F: Fn(&S) -> FA + 'static,
        FA: Functor<Inner = A, WithType<(A, S, W)> = M> + 'static,
        A: 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, state| {
            let projected = projection(&state);
            projected.fmap(move |value| (value, state, W::empty()))
        })
    }

    /// Creates a computation from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(String, i32, Vec<String>)>> =
    ///     Rwst::state(|n| (format!("was {n}"), n + 1));
    /// assert_eq!(
    ///     program.run((), 41),
    ///     Some(("was 41".to_string(), 42, Vec::new()))
    /// );
    /// ```
    pub fn state<A, W, F>(transition: F) -> Self
    where
        M: Applicative<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(S) -> (A, S) + 'static,
        A: 'static,
        W: Monoid + 'static,
    {
        Self::new(move |_, current_state| {
            let (result, new_state) = transition(current_state);
            M::pure((result, new_state, W::empty()))
        })
    }

    /// Modifies the output state of this computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<(i32, i32, String)>> = Rwst::pure(1);
    /// assert_eq!(
    ///     program.and_modify(|n| n + 10).run((), 0),
    ///     Some((1, 10, String::new()))
    /// );
    /// ```
    pub fn and_modify<A, W, F>(self, modifier: F) -> Self
    where
        M: Functor<Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(S) -> S + 'static,
        A: 'static,
        W: 'static,
    {
        self.transform(move |(result, state, output)| (result, modifier(state), output))
    }

    /// Replaces the result with the output state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::put(5);
    /// assert_eq!(program.and_get().run((), 0), Some((5, 5, String::new())));
    /// ```
    #[must_use]
    pub fn and_get<A, W, M2>(self) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(S, S, W)> = M2>,
        M2: Functor<Inner = (S, S, W), WithType<(A, S, W)> = M> + 'static,
        S: Clone,
        A: 'static,
        W: 'static,
    {
        self.transform(|(_, state, output)| (state.clone(), state, output))
    }

    /// Replaces the result with a projection of the output state, without
    /// modifying the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let program: Rwst<(), i32, Option<((), i32, String)>> = Rwst::put(21);
    /// let inspected = program.inspect(|state| state * 2);
    /// assert_eq!(inspected.run((), 0), Some((42, 21, String::new())));
    /// ```
    pub fn inspect<A, B, W, M2, F>(self, projection: F) -> Rwst<E, S, M2>
    where
        M: Functor<Inner = (A, S, W), WithType<(B, S, W)> = M2>,
        M2: Functor<Inner = (B, S, W), WithType<(A, S, W)> = M> + 'static,
        F: Fn(&S) -> B + 'static,
        A: 'static,
        B: 'static,
        W: 'static,
    {
        self.transform(move |(_, state, output)| {
            let result = projection(&state);
            (result, state, output)
        })
    }
}

// --- MonadError Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a computation that fails with the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let failed: Rwst<(), (), Result<(i32, (), String), String>> =
    ///     Rwst::raise_error("boom".to_string());
    /// assert_eq!(failed.run((), ()), Err("boom".to_string()));
    /// ```
    pub fn raise_error<A, W, Err>(error: Err) -> Self
    where
        M: MonadError<Err, Inner = (A, S, W), WithType<(A, S, W)> = M>,
        Err: Clone + 'static,
        A: 'static,
        W: 'static,
    {
        Self::new(move |_, _| M::throw_error::<(A, S, W)>(error.clone()))
    }

    /// Recovers from failure by running a handler computation against the
    /// original environment and the state as it was before this computation
    /// started.
    ///
    /// Any state change or log output produced inside the failed branch is
    /// lost with the failure; only the recovery branch's contributions
    /// survive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let failing: Rwst<(), i32, Result<(i32, i32, Vec<String>), String>> =
    ///     Rwst::tell(vec!["before".to_string()])
    ///         .then(Rwst::raise_error("boom".to_string()));
    /// let recovered = failing.handle_error_with(|_| {
    ///     Rwst::tell(vec!["recovered".to_string()]).then(Rwst::pure(0))
    /// });
    /// assert_eq!(
    ///     recovered.run((), 1),
    ///     Ok((0, 1, vec!["recovered".to_string()]))
    /// );
    /// ```
    pub fn handle_error_with<A, W, Err, F>(self, handler: F) -> Self
    where
        M: MonadError<Err, Inner = (A, S, W), WithType<(A, S, W)> = M>,
        F: Fn(Err) -> Rwst<E, S, M> + 'static,
        E: Clone,
        S: Clone,
        Err: 'static,
        A: 'static,
        W: 'static,
    {
        let original_function = self.run_function;
        let handler = Rc::new(handler);
        Rwst::new(move |environment: E, state: S| {
            let handler = Rc::clone(&handler);
            let recovery_environment = environment.clone();
            let recovery_state = state.clone();
            M::catch_error::<(A, S, W), _>(
                (original_function)(environment, state),
                move |error| handler(error).run(recovery_environment, recovery_state),
            )
        })
    }
}

// --- Alternative Operations ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Creates a computation that fails with the effect's empty value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let nothing: Rwst<(), (), Option<(i32, (), String)>> = Rwst::empty_k();
    /// assert_eq!(nothing.run((), ()), None);
    /// ```
    #[must_use]
    pub fn empty_k() -> Self
    where
        M: Alternative,
    {
        Self::new(|_, _| M::empty())
    }

    /// Tries this computation, falling back to `other` at the effect level.
    ///
    /// Both branches start from the same environment and state; the effect's
    /// `alt` decides which outcome survives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::effect::Rwst;
    ///
    /// let missing: Rwst<(), (), Option<(i32, (), String)>> = Rwst::empty_k();
    /// let fallback = Rwst::pure(7);
    /// assert_eq!(
    ///     missing.combine_k(fallback).run((), ()),
    ///     Some((7, (), String::new()))
    /// );
    /// ```
    #[must_use]
    pub fn combine_k(self, other: Self) -> Self
    where
        M: Alternative,
        E: Clone,
        S: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Rwst::new(move |environment: E, state: S| {
            let first = (self_function)(environment.clone(), state.clone());
            let second = (other_function)(environment, state);
            first.alt(second)
        })
    }
}

// --- Stack-Safe Iteration ---

impl<E, S, M> Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    /// Iterates a step function until it signals completion, threading state
    /// and combining logs across iterations.
    ///
    /// An [`Either::Left`] result feeds the next iteration; an
    /// [`Either::Right`] terminates with the final value. The loop is
    /// delegated to the effect's own `MonadRec::tail_rec`, so call depth
    /// stays constant no matter how many iterations run. Effect failure in
    /// any step short-circuits the whole loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rwst::control::Either;
    /// use rwst::effect::Rwst;
    ///
    /// let countdown: Rwst<(), i32, Option<(i32, i32, Vec<String>)>> =
    ///     Rwst::tail_rec_m(3, |n: i32| {
    ///         Rwst::new(move |(), total: i32| {
    ///             if n == 0 {
    ///                 Some((Either::Right(total), total, Vec::new()))
    ///             } else {
    ///                 Some((Either::Left(n - 1), total + n, vec![format!("add {n}")]))
    ///             }
    ///         })
    ///     });
    ///
    /// assert_eq!(
    ///     countdown.run((), 0),
    ///     Some((
    ///         6,
    ///         6,
    ///         vec!["add 3".to_string(), "add 2".to_string(), "add 1".to_string()]
    ///     ))
    /// );
    /// ```
    pub fn tail_rec_m<A, B, W, MS, MStep, F>(initial: A, step: F) -> Self
    where
        F: Fn(A) -> Rwst<E, S, MS> + 'static,
        MS: Functor<Inner = (Either<A, B>, S, W), WithType<Either<(A, S, W), (B, S, W)>> = MStep>
            + 'static,
        MStep: Functor<Inner = Either<(A, S, W), (B, S, W)>, WithType<(Either<A, B>, S, W)> = MS>
            + 'static,
        M: MonadRec<
                Inner = (B, S, W),
                WithType<(B, S, W)> = M,
                WithType<Either<(A, S, W), (B, S, W)>> = MStep,
            >,
        E: Clone,
        A: Clone + 'static,
        B: 'static,
        W: Monoid + 'static,
    {
        let step = Rc::new(step);
        Self::new(move |environment: E, state: S| {
            let step = Rc::clone(&step);
            M::tail_rec::<(A, S, W), (B, S, W), _>(
                (initial.clone(), state, W::empty()),
                move |(current, current_state, accumulated): (A, S, W)| {
                    step(current).run(environment.clone(), current_state).fmap(
                        move |(decision, next_state, output)| {
                            let combined = accumulated.combine(output);
                            match decision {
                                Either::Left(next) => Either::Left((next, next_state, combined)),
                                Either::Right(done) => Either::Right((done, next_state, combined)),
                            }
                        },
                    )
                },
            )
        })
    }
}

// --- Clone Implementation ---

impl<E, S, M> Clone for Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// --- Display Implementation ---

impl<E, S, M> std::fmt::Display for Rwst<E, S, M>
where
    E: 'static,
    S: 'static,
    M: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Rwst>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_rwst() {
        let program: Rwst<i32, i32, Option<(i32, i32, String)>> = Rwst::pure(42);
        assert_eq!(format!("{program}"), "<Rwst>");
    }

    #[rstest]
    fn test_clone_shares_behavior() {
        let program: Rwst<i32, i32, Option<(i32, i32, String)>> = Rwst::pure(42);
        let cloned = program.clone();
        assert_eq!(program.run(0, 0), cloned.run(0, 0));
    }

    #[rstest]
    fn test_run_is_repeatable() {
        let program: Rwst<i32, i32, Option<(i32, i32, String)>> =
            Rwst::new(|environment, state| Some((environment + state, state, String::new())));
        assert_eq!(program.run(1, 2), Some((3, 2, String::new())));
        assert_eq!(program.run(1, 2), Some((3, 2, String::new())));
    }
}
