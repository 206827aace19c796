//! Composable wrappers and the binding protocol they share.
//!
//! - [`Composable`]: the type class: `unit`, `identity`, the `map` hook,
//!   `flat_map` and `finalize`
//! - [`Monad`]: the canonical wrapper, carrying one value
//! - [`Maybe`]: a wrapper that stops running steps once its payload reports
//!   failure through [`Outcome`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! A bound function must return the same wrapper, but may change the
//! payload. [`TypeConstructor`] names "this wrapper over another payload"
//! with a generic associated type, so the compiler checks the wrapper
//! identity that a dynamically typed implementation would check at runtime.
//! [`Composable::try_flat_map`] keeps that runtime check for call sites that
//! only have a `Box<dyn Any>`.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::typeclass::{Composable, Maybe, Monad, unwrap};
//!
//! let two = Monad::unit(1).flat_map(|a| Monad::unit(a + 1));
//! assert_eq!(unwrap(two), 2);
//!
//! let stopped = Maybe::unit(false).flat_map(|_| Maybe::unit(true));
//! assert!(stopped.is_halted());
//! ```

mod composable;
mod higher;
mod maybe;
mod monad;
mod outcome;

pub use composable::{Composable, unwrap};
pub use higher::TypeConstructor;
pub use maybe::{ChainState, Maybe};
pub use monad::Monad;
pub use outcome::Outcome;
