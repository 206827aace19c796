//! File I/O adapters.
//!
//! Each adapter takes the current [`ResultState`] plus its own arguments and
//! returns a `Monad<ResultState<_>>`. A failed incoming state skips the
//! operating-system call entirely, so pure code can be tested against an
//! I/O failure by passing a failed state, with no mocking.
//!
//! # Examples
//!
//! ```rust
//! use std::io::Write;
//! use stepwise::effect::{ResultState, file};
//! use stepwise::typeclass::{Composable, Monad};
//!
//! let mut scratch = tempfile::NamedTempFile::new().unwrap();
//! write!(scratch, "Another visitor!").unwrap();
//!
//! let contents = Monad::unit(ResultState::<()>::empty())
//!     .flat_map(|state| file::open_read(state, scratch.path()))
//!     .flat_map(file::read_to_string)
//!     .into_inner();
//!
//! assert_eq!(contents.payload().map(String::as_str), Some("Another visitor!"));
//! ```

use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::Path;

use super::guard::{attempt, guard};
use super::result_state::ResultState;
use crate::typeclass::{Composable, Monad};

/// Opens `path` with `options` and stores the handle as the payload.
///
/// The handle is owned by the returned state; it is closed when that state
/// (or the payload taken from it) is dropped. A failure is recorded as
/// `"<path>: <os error>"`.
pub fn open<P>(state: ResultState<P>, path: impl AsRef<Path>, options: &OpenOptions) -> Monad<ResultState<File>> {
    let path = path.as_ref();
    guard(|_| {
        tracing::debug!(path = %path.display(), "opening file");
        Monad::unit(attempt(
            || options.open(path),
            |error| format!("{}: {error}", path.display()),
        ))
    })(state)
}

/// Opens `path` for reading.
pub fn open_read<P>(state: ResultState<P>, path: impl AsRef<Path>) -> Monad<ResultState<File>> {
    open(state, path, OpenOptions::new().read(true))
}

/// Reads the payload reader to the end as UTF-8 text.
///
/// A state without a payload fails with `"nothing to read"`.
pub fn read_to_string<R: Read>(state: ResultState<R>) -> Monad<ResultState<String>> {
    guard(|state: ResultState<R>| {
        let Some(mut reader) = state.into_payload() else {
            return Monad::unit(ResultState::failed("nothing to read"));
        };
        tracing::debug!("reading to end");
        Monad::unit(attempt(
            || {
                let mut contents = String::new();
                reader.read_to_string(&mut contents).map(|_| contents)
            },
            |error| format!("read failed: {error}"),
        ))
    })(state)
}
