//! Maybe - a composable wrapper that stops at the first failure.
//!
//! `Maybe<A>` is a [`Monad`] whose payload reports success through
//! [`Outcome`]. While the payload is live (success `true` or unset) binding
//! behaves exactly like `Monad::flat_map`. Once a step yields a payload
//! whose success is `false` the chain is halted: every later bind returns
//! the wrapper untouched and never calls its function, so the value that
//! halted the chain, error message included, reaches the end.
//!
//! ```text
//! Live   --(f yields success true/unset)--> Live
//! Live   --(f yields success false)-------> Halted
//! Halted --(any bind)---------------------> Halted (f not called)
//! ```
//!
//! Binding is endomorphic (`A -> Maybe<A>`) so that a halted value can be
//! carried through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::typeclass::Maybe;
//!
//! fn halve(n: Result<i32, String>) -> Maybe<Result<i32, String>> {
//!     Maybe::unit(n.and_then(|n| {
//!         if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
//!     }))
//! }
//!
//! let result = Maybe::unit(Ok(12)) >> halve >> halve >> halve;
//! assert_eq!(result.into_inner(), Err("3 is odd".to_string()));
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::ops::Shr;

use super::composable::{Composable, downcast_bound};
use super::monad::Monad;
use super::outcome::Outcome;
use crate::error::{ConstructionError, Error};

/// Whether a [`Maybe`] chain still runs its bound functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainState {
    /// The carried success indicator is `true` or unset.
    Live,
    /// The carried success indicator is `false`.
    Halted,
}

impl fmt::Display for ChainState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(formatter, "live"),
            Self::Halted => write!(formatter, "halted"),
        }
    }
}

/// A short-circuiting composable wrapper.
///
/// Construction requires the payload to implement [`Outcome`], so a value
/// without a success indicator is rejected at compile time. Loosely typed
/// values go through [`Maybe::try_unit`], which fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maybe<A>(Monad<A>);

impl<A: Outcome> Maybe<A> {
    /// Wraps a value that carries a success indicator.
    #[inline]
    pub const fn unit(value: A) -> Self {
        Self(Monad::new(value))
    }

    /// Converts a loosely typed value and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] when the conversion fails, typically
    /// [`ConstructionError::MissingSuccessIndicator`].
    pub fn try_unit<T>(value: T) -> Result<Self, Error>
    where
        T: TryInto<A, Error = ConstructionError>,
    {
        Ok(Self::unit(value.try_into()?))
    }

    /// Consumes the wrapper and returns the carried value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0.into_inner()
    }

    /// Returns a reference to the carried value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        self.0.as_inner()
    }

    /// Returns the wrapper unchanged.
    #[inline]
    #[must_use]
    pub fn identity(self) -> Self {
        self
    }

    /// Pre-binding transform; a pass-through, as for [`Monad`].
    #[inline]
    #[must_use]
    pub fn map(self) -> Self {
        Self(self.0.map())
    }

    /// Reports whether later binds will run.
    #[inline]
    pub fn state(&self) -> ChainState {
        if self.as_inner().is_failure() {
            ChainState::Halted
        } else {
            ChainState::Live
        }
    }

    /// Shorthand for `state() == ChainState::Halted`.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state() == ChainState::Halted
    }

    /// Binds `function` unless the chain is halted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::typeclass::Maybe;
    ///
    /// let halted = Maybe::unit(false);
    /// let result = halted.flat_map(|_| unreachable!());
    /// assert!(result.is_halted());
    /// ```
    #[must_use]
    pub fn flat_map<F>(self, function: F) -> Self
    where
        F: FnOnce(A) -> Self,
    {
        if self.is_halted() {
            skip::<F>();
            return self;
        }
        function(self.map().into_inner())
    }

    /// Like [`flat_map`](Maybe::flat_map), forwarding `extra` as the second
    /// argument.
    #[must_use]
    pub fn flat_map_with<X, F>(self, function: F, extra: X) -> Self
    where
        F: FnOnce(A, X) -> Self,
    {
        if self.is_halted() {
            skip::<F>();
            return self;
        }
        function(self.map().into_inner(), extra)
    }

    /// Alias for [`flat_map`](Maybe::flat_map).
    #[inline]
    #[must_use]
    pub fn and_then<F>(self, function: F) -> Self
    where
        F: FnOnce(A) -> Self,
    {
        self.flat_map(function)
    }

    /// Binds a function whose return type is only known at runtime.
    ///
    /// A halted chain returns `Ok(self)` without calling `function`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] naming `function` when it returns
    /// anything other than this `Maybe`.
    pub fn try_flat_map<F>(self, function: F) -> Result<Self, Error>
    where
        A: 'static,
        F: FnOnce(A) -> Box<dyn Any>,
    {
        if self.is_halted() {
            skip::<F>();
            return Ok(self);
        }
        downcast_bound::<Self, F>(function(self.map().into_inner()))
    }

    /// Runs the hook one last time without binding anything.
    #[inline]
    #[must_use]
    pub fn finalize(self) -> Self {
        Self::unit(self.map().into_inner())
    }
}

fn skip<F>() {
    tracing::trace!(
        function = type_name::<F>(),
        "chain halted, skipping bound function"
    );
}

/// `m >> f` is `m.flat_map(f)`.
impl<A, F> Shr<F> for Maybe<A>
where
    A: Outcome,
    F: FnOnce(A) -> Self,
{
    type Output = Self;

    #[inline]
    fn shr(self, function: F) -> Self {
        self.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Tally {
        outcome: i32,
        ok: bool,
    }

    impl Tally {
        fn new(outcome: i32) -> Self {
            Self { outcome, ok: true }
        }
    }

    impl Outcome for Tally {
        fn success(&self) -> Option<bool> {
            Some(self.ok)
        }
    }

    impl TryFrom<i32> for Tally {
        type Error = ConstructionError;

        fn try_from(value: i32) -> Result<Self, Self::Error> {
            Err(ConstructionError::MissingSuccessIndicator {
                found: format!("integer {value}"),
            })
        }
    }

    fn add_natural_number(tally: Tally, amount: i32) -> Maybe<Tally> {
        if amount > 0 {
            Maybe::unit(Tally::new(tally.outcome + amount))
        } else {
            Maybe::unit(Tally {
                outcome: tally.outcome,
                ok: false,
            })
        }
    }

    #[rstest]
    fn try_unit_without_success_indicator_fails() {
        let result = Maybe::<Tally>::try_unit(5);
        assert!(matches!(
            result,
            Err(Error::Construction(ConstructionError::MissingSuccessIndicator { .. }))
        ));
    }

    #[rstest]
    fn chain_stops_at_first_failure() {
        let result = Maybe::unit(Tally::new(1))
            .flat_map_with(add_natural_number, 1)
            .flat_map_with(add_natural_number, 0)
            .flat_map_with(add_natural_number, 1);

        assert_eq!(result.as_inner().outcome, 2);
        assert!(result.is_halted());
    }

    #[rstest]
    fn halted_chain_never_calls_function() {
        let calls = Cell::new(0);
        let counting = |tally: Tally| {
            calls.set(calls.get() + 1);
            Maybe::unit(tally)
        };

        let halted = Maybe::unit(Tally {
            outcome: 7,
            ok: false,
        });
        let result = halted.clone().flat_map(counting).flat_map(counting);

        assert_eq!(calls.get(), 0);
        assert_eq!(result, halted);
    }

    #[rstest]
    fn live_chain_calls_every_function() {
        let calls = Cell::new(0);
        let counting = |tally: Tally| {
            calls.set(calls.get() + 1);
            Maybe::unit(Tally::new(tally.outcome * 2))
        };

        let result = Maybe::unit(Tally::new(1)) >> counting >> counting >> counting;

        assert_eq!(calls.get(), 3);
        assert_eq!(result.into_inner().outcome, 8);
    }

    #[rstest]
    #[case(true, ChainState::Live)]
    #[case(false, ChainState::Halted)]
    fn state_follows_success_indicator(#[case] ok: bool, #[case] expected: ChainState) {
        assert_eq!(Maybe::unit(ok).state(), expected);
    }

    #[rstest]
    fn try_flat_map_on_halted_chain_returns_self() {
        let result = Maybe::unit(false).try_flat_map(|_| -> Box<dyn Any> { unreachable!() });
        assert_eq!(result, Ok(Maybe::unit(false)));
    }

    #[rstest]
    fn try_flat_map_rejects_plain_monad() {
        let result = Maybe::unit(true).try_flat_map(|ok| Box::new(Monad::new(ok)) as Box<dyn Any>);
        assert!(matches!(result, Err(Error::TypeMismatch(_))));
    }

    #[rstest]
    fn identity_and_finalize_keep_value() {
        let wrapped = Maybe::unit(Tally::new(3));
        assert_eq!(wrapped.clone().identity(), wrapped);
        assert_eq!(wrapped.clone().finalize(), wrapped);
    }

    #[rstest]
    fn chain_state_display() {
        assert_eq!(ChainState::Live.to_string(), "live");
        assert_eq!(ChainState::Halted.to_string(), "halted");
    }
}
