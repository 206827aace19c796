//! Effect layer: the result of one step, and the adapters that produce it.
//!
//! - [`ResultState`]: payload, optional error message and tri-state success
//!   flag for one effectful step
//! - [`guard`] and [`attempt`]: the two rules every adapter follows (skip on
//!   incoming failure, record expected failures as data)
//! - Adapters, one module per Cargo feature:
//!   - `file`: open and read files
//!   - `template`: load and render templates
//!   - `random`: draw random integers
//!
//! # Design
//!
//! Contract violations are errors. Expected failures of an effect (a missing
//! file, data that does not fit a template) are not: they come back as a
//! `ResultState` whose success flag is `false`, and every guarded adapter
//! after it becomes a no-op.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::effect::{ResultState, file};
//! use stepwise::typeclass::{Composable, Monad};
//!
//! // A failed start means no file is ever opened.
//! let state = Monad::unit(ResultState::<()>::failed("offline"))
//!     .flat_map(|state| file::open_read(state, "/does/not/matter"))
//!     .flat_map(file::read_to_string)
//!     .into_inner();
//!
//! assert_eq!(state.error_message(), Some("offline"));
//! ```

mod guard;
mod result_state;

#[cfg(feature = "serde")]
mod json;

#[cfg(feature = "file")]
pub mod file;

#[cfg(feature = "template")]
pub mod template;

#[cfg(feature = "random")]
pub mod random;

pub use guard::{attempt, guard};
pub use result_state::ResultState;

#[cfg(feature = "serde")]
pub use json::{JsonOutcome, SUCCESS_FIELD};
