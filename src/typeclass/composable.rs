//! Composable type class - the binding protocol shared by every wrapper.
//!
//! A composable wrapper holds one value and offers four things:
//!
//! - `unit`: lift a raw value into the wrapper
//! - `identity`: hand the wrapper back unchanged
//! - `map`: a hook that runs right before every bind
//! - `flat_map`: thread the (hooked) value through a function that returns
//!   the same wrapper
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! M::unit(a).flat_map(f) == f(a)      (when map is the pass-through)
//! m.identity() == m
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(M::unit) == m
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
//! use stepwise::typeclass::{Composable, Monad, unwrap};
//!
//! let result = Monad::unit(1).flat_map(|a| Monad::unit(a + 1));
//! assert_eq!(unwrap(result), 2);
//! ```

use std::any::{Any, type_name};

use super::higher::TypeConstructor;
use crate::error::{Error, TypeMismatchError};

/// A type class for wrappers that sequence effectful steps.
///
/// Only [`unit`](Composable::unit) and [`into_inner`](Composable::into_inner)
/// are required; everything else has a default built from them. Override
/// [`map`](Composable::map) to add per-chain bookkeeping such as buffering
/// or counting. The hook must return a new wrapper.
///
/// # Examples
///
/// A wrapper whose hook increments the value before each step:
///
/// ```rust
/// use stepwise::typeclass::{Composable, TypeConstructor, unwrap};
///
/// struct Bumped<A>(A);
///
/// impl<A> TypeConstructor for Bumped<A> {
///     type Inner = A;
///     type WithType<B> = Bumped<B>;
/// }
///
/// impl Composable for Bumped<i32> {
///     fn unit(value: i32) -> Self {
///         Bumped(value)
///     }
///     fn into_inner(self) -> i32 {
///         self.0
///     }
///     fn map(self) -> Self {
///         Bumped(self.0 + 1)
///     }
/// }
///
/// let add_one = |a: i32| Bumped(a + 1);
/// let result = Bumped::unit(5).flat_map(add_one).flat_map(add_one).finalize();
/// assert_eq!(unwrap(result), 10);
/// ```
pub trait Composable: TypeConstructor + Sized {
    /// Wraps a raw value. Also known as `pure` or `return`.
    fn unit(value: Self::Inner) -> Self;

    /// Consumes the wrapper and returns the carried value.
    fn into_inner(self) -> Self::Inner;

    /// Returns the wrapper unchanged.
    #[inline]
    #[must_use]
    fn identity(self) -> Self {
        self
    }

    /// Pre-binding transform, run right before the bound function.
    ///
    /// The default is a pass-through.
    #[inline]
    #[must_use]
    fn map(self) -> Self {
        self
    }

    /// Passes the hooked value to `function` and returns its wrapper.
    ///
    /// The compiler enforces that `function` returns this wrapper type
    /// (applied to any payload).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::typeclass::{Composable, Monad};
    ///
    /// let length = Monad::unit("four").flat_map(|text| Monad::unit(text.len()));
    /// assert_eq!(length.into_inner(), 4);
    /// ```
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        function(self.map().into_inner())
    }

    /// Like [`flat_map`](Composable::flat_map), forwarding `extra` verbatim
    /// as the second argument. Pass a tuple for several arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::typeclass::{Composable, Monad};
    ///
    /// fn scale(value: i32, (factor, offset): (i32, i32)) -> Monad<i32> {
    ///     Monad::unit(value * factor + offset)
    /// }
    ///
    /// let result = Monad::unit(4).flat_map_with(scale, (3, 1));
    /// assert_eq!(result.into_inner(), 13);
    /// ```
    #[inline]
    fn flat_map_with<B, X, F>(self, function: F, extra: X) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner, X) -> Self::WithType<B>,
    {
        function(self.map().into_inner(), extra)
    }

    /// Alias for [`flat_map`](Composable::flat_map), matching
    /// `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Binds a function whose return type is only known at runtime.
    ///
    /// For reflective call sites that hold a `Box<dyn Any>`. The box must
    /// contain exactly `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] naming `function` when the box holds
    /// any other type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use stepwise::typeclass::{Composable, Monad};
    ///
    /// let result = Monad::unit(5).try_flat_map(|x| Box::new(x.to_string()) as Box<dyn Any>);
    /// assert!(result.is_err());
    /// ```
    fn try_flat_map<F>(self, function: F) -> Result<Self, Error>
    where
        Self: 'static,
        F: FnOnce(Self::Inner) -> Box<dyn Any>,
    {
        downcast_bound::<Self, F>(function(self.map().into_inner()))
    }

    /// Runs the hook one last time without binding anything.
    ///
    /// Use it to flush state that an overriding `map` accumulates.
    #[inline]
    #[must_use]
    fn finalize(self) -> Self {
        Self::unit(self.map().into_inner())
    }
}

/// Returns the carried value of any composable wrapper.
///
/// # Examples
///
/// ```rust
/// use stepwise::typeclass::{Composable, Monad, unwrap};
///
/// assert_eq!(unwrap(Monad::unit(5)), 5);
/// ```
#[inline]
pub fn unwrap<M: Composable>(wrapper: M) -> M::Inner {
    wrapper.into_inner()
}

/// Recovers `M` from the value a reflectively bound function `F` returned.
pub(crate) fn downcast_bound<M: 'static, F>(result: Box<dyn Any>) -> Result<M, Error> {
    result.downcast::<M>().map(|boxed| *boxed).map_err(|_| {
        TypeMismatchError {
            function: type_name::<F>().to_string(),
            expected: type_name::<M>(),
        }
        .into()
    })
}
