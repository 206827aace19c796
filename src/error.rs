//! Error types for contract violations.
//!
//! Two kinds of failure are reported as errors:
//!
//! - [`ConstructionError`]: a value could not be built because a field had
//!   the wrong type, or a short-circuit wrapper was built from a value that
//!   has no success indicator.
//! - [`TypeMismatchError`]: a function bound through a reflective call site
//!   returned something other than the wrapper doing the binding.
//!
//! Expected effect failures (a missing file, a bad template) are never
//! reported here. They travel through a chain as data inside a
//! `ResultState` whose success flag is false.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::{Error, TypeMismatchError};
//!
//! let error = Error::TypeMismatch(TypeMismatchError {
//!     function: "add_one".to_string(),
//!     expected: "Monad<i32>",
//! });
//! assert_eq!(
//!     error.to_string(),
//!     "bound function \"add_one\" did not return type Monad<i32>"
//! );
//! ```

use thiserror::Error;

/// Raised when a value is built from fields of the wrong type.
///
/// Always surfaced to the caller immediately; nothing in this crate
/// recovers from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A named field held a value of an unexpected kind.
    #[error("attribute '{field}' must be of type {expected}, found {found}")]
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// Human readable description of the accepted types.
        expected: &'static str,
        /// The kind of value that was supplied instead.
        found: String,
    },

    /// The value carries no success indicator, so it cannot drive a
    /// short-circuiting chain.
    #[error("value has no success indicator (found {found})")]
    MissingSuccessIndicator {
        /// The kind of value that was supplied.
        found: String,
    },

    /// The payload could not be decoded into the requested type.
    #[error("payload could not be decoded: {0}")]
    InvalidPayload(String),
}

/// Raised when a bound function returns a value that is not the wrapper
/// performing the binding.
///
/// The message names the offending function so that a failing chain can be
/// traced back to the step that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bound function \"{function}\" did not return type {expected}")]
pub struct TypeMismatchError {
    /// Name of the bound function.
    pub function: String,
    /// Name of the wrapper type the function should have returned.
    pub expected: &'static str,
}

/// Unified error type for every contract violation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was built with fields of the wrong type.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// A bound function returned a foreign type.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}
