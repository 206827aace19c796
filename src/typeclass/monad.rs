//! Monad - the canonical composable wrapper.
//!
//! `Monad<A>` carries a single value and nothing else. It adds no effect of
//! its own: failure handling comes from the payload (usually a
//! [`ResultState`](crate::effect::ResultState)) and from the guards on the
//! functions bound to it.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::typeclass::{Composable, Monad, unwrap};
//!
//! fn add_one(a: i32) -> Monad<i32> {
//!     Monad::unit(a + 1)
//! }
//!
//! // `>>` is an alias for `flat_map`.
//! let result = Monad::unit(1) >> add_one >> add_one;
//! assert_eq!(unwrap(result), 3);
//! ```

use std::ops::Shr;

use super::composable::Composable;
use super::higher::TypeConstructor;

/// The base composable wrapper.
///
/// Every operation consumes the wrapper and returns a new one; the carried
/// value is replaced, never mutated in place. Two wrappers are equal when
/// their carried values are.
///
/// # Examples
///
/// ```rust
/// use stepwise::typeclass::{Composable, Monad};
///
/// let wrapped = Monad::new(42);
/// assert_eq!(wrapped.identity(), Monad::unit(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Monad<A>(A);

impl<A> Monad<A> {
    /// Creates a new `Monad` wrapping the given value.
    ///
    /// Same as [`Composable::unit`], usable in `const` contexts.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns a reference to the carried value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::typeclass::Monad;
    ///
    /// let wrapped = Monad::new(String::from("hello"));
    /// assert_eq!(wrapped.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Monad<A> {
    type Inner = A;
    type WithType<B> = Monad<B>;
}

impl<A> Composable for Monad<A> {
    #[inline]
    fn unit(value: A) -> Self {
        Self(value)
    }

    #[inline]
    fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Monad<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

static_assertions::assert_impl_all!(Monad<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Monad<std::rc::Rc<i32>>: Send, Sync);

/// `m >> f` is `m.flat_map(f)`.
impl<A, B, F> Shr<F> for Monad<A>
where
    F: FnOnce(A) -> Monad<B>,
{
    type Output = Monad<B>;

    #[inline]
    fn shr(self, function: F) -> Monad<B> {
        self.flat_map(function)
    }
}
