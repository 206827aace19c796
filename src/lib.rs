//! # stepwise
//!
//! Composable wrappers that make the sequencing and the failure of
//! side-effecting steps explicit.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Composable`](typeclass::Composable), the binding
//!   protocol; [`Monad`](typeclass::Monad), the canonical wrapper;
//!   [`Maybe`](typeclass::Maybe), a wrapper that halts at the first failure
//! - **Effects**: [`ResultState`](effect::ResultState), the outcome of one
//!   step, and guarded adapters for files, templates and random numbers
//! - **Errors**: [`Error`] for contract violations (wrong field types,
//!   foreign return types from bound functions)
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Composable`, `Monad`, `Maybe`, `Outcome`
//! - `effect`: `ResultState`, `guard`, `attempt`
//! - `file`: file adapters
//! - `template`: template adapters (`minijinja`)
//! - `random`: random number adapters (`rand`)
//! - `serde`: serialization of `ResultState`, construction from JSON
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use stepwise::prelude::*;
//!
//! fn add(total: ResultState<i32>, amount: i32) -> Maybe<ResultState<i32>> {
//!     let current = total.into_payload().unwrap_or_default();
//!     if amount > 0 {
//!         Maybe::unit(ResultState::ok(current + amount))
//!     } else {
//!         Maybe::unit(ResultState::new(Some(current), Some("zero".into()), Some(false)))
//!     }
//! }
//!
//! let result = Maybe::unit(ResultState::ok(1))
//!     .flat_map_with(add, 1)
//!     .flat_map_with(add, 0)
//!     .flat_map_with(add, 1);
//!
//! assert_eq!(result.as_inner().payload(), Some(&2));
//! assert_eq!(result.as_inner().error_message(), Some("zero"));
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
/// use stepwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConstructionError, Error, TypeMismatchError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::{ResultState, attempt, guard};

    #[cfg(all(feature = "effect", feature = "serde"))]
    pub use crate::effect::JsonOutcome;
}

mod error;

pub use error::{ConstructionError, Error, TypeMismatchError};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
