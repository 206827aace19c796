//! Guards shared by every effect adapter.
//!
//! An adapter is a plain function
//! `(ResultState<P>, args...) -> Monad<ResultState<Q>>`. Two rules apply to
//! all of them:
//!
//! 1. If the incoming state has failed, the effect is not performed and the
//!    failure is passed on. [`guard`] enforces this.
//! 2. The narrow set of expected failures (missing file, bad template) is
//!    turned into a failed `ResultState` instead of an error.
//!    [`attempt`] does the conversion.

use std::any::type_name;

use super::result_state::ResultState;
use crate::typeclass::{Composable, Monad, Outcome};

/// Wraps `effect` so that it only runs for a state that has not failed.
///
/// A failed state (success `Some(false)`) skips the effect and is returned
/// as an equivalent failure: same message and flag, no payload. States with
/// success `Some(true)` or `None` run the effect.
///
/// # Examples
///
/// ```rust
/// use stepwise::effect::{ResultState, guard};
/// use stepwise::typeclass::{Composable, Monad};
///
/// let shout = guard(|state: ResultState<&str>| {
///     Monad::unit(ResultState::ok(state.into_payload().unwrap_or_default().to_uppercase()))
/// });
///
/// let skipped = shout(ResultState::failed("upstream broke")).into_inner();
/// assert_eq!(skipped.error_message(), Some("upstream broke"));
/// ```
pub fn guard<P, Q, F>(effect: F) -> impl FnOnce(ResultState<P>) -> Monad<ResultState<Q>>
where
    F: FnOnce(ResultState<P>) -> Monad<ResultState<Q>>,
{
    move |state| {
        if state.is_failure() {
            tracing::trace!(
                effect = type_name::<F>(),
                error = state.error_message(),
                "incoming state failed, skipping effect"
            );
            return Monad::unit(state.into_failure());
        }
        effect(state)
    }
}

/// Runs `operation`, recording an expected failure as data.
///
/// `describe` turns the error into the message stored on the failed state.
///
/// # Examples
///
/// ```rust
/// use stepwise::effect::attempt;
///
/// let state = attempt(|| "12".parse::<u8>(), |error| error.to_string());
/// assert_eq!(state.into_payload(), Some(12));
///
/// let state = attempt(|| "x".parse::<u8>(), |error| format!("bad number: {error}"));
/// assert_eq!(state.error_message(), Some("bad number: invalid digit found in string"));
/// ```
pub fn attempt<T, E, F, D>(operation: F, describe: D) -> ResultState<T>
where
    F: FnOnce() -> Result<T, E>,
    D: FnOnce(E) -> String,
{
    match operation() {
        Ok(value) => ResultState::ok(value),
        Err(error) => {
            let message = describe(error);
            tracing::warn!(%message, "effect failed");
            ResultState::failed(message)
        }
    }
}
