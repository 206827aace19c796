//! ResultState - the outcome of one effectful step.
//!
//! Every adapter returns a fresh `ResultState` wrapped in a
//! [`Monad`](crate::typeclass::Monad). Failures of the effect itself are
//! recorded here as data (`success == Some(false)` plus a message) instead
//! of being raised, so later steps can inspect them or skip themselves.
//!
//! # Examples
//!
//! ```rust
//! use stepwise::effect::ResultState;
//!
//! let done = ResultState::ok(42);
//! assert!(done.is_ok());
//! assert_eq!(done.payload(), Some(&42));
//!
//! let broken: ResultState<i32> = ResultState::failed("disk on fire");
//! assert_eq!(broken.success(), Some(false));
//! assert_eq!(broken.error_message(), Some("disk on fire"));
//! ```

use crate::typeclass::Outcome;

/// An immutable record of payload, error message and tri-state success.
///
/// The fields are private; a `ResultState` never changes after it is built.
/// `success` is three-valued: `Some(true)`, `Some(false)` or `None`
/// (unknown).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultState<P> {
    payload: Option<P>,
    error_message: Option<String>,
    success: Option<bool>,
}

impl<P> ResultState<P> {
    /// Builds a state from all three fields.
    #[inline]
    pub const fn new(payload: Option<P>, error_message: Option<String>, success: Option<bool>) -> Self {
        Self {
            payload,
            error_message,
            success,
        }
    }

    /// A successful state with no payload. Same as `default()`.
    #[inline]
    pub const fn empty() -> Self {
        Self::new(None, None, Some(true))
    }

    /// A successful state carrying `payload`.
    #[inline]
    pub const fn ok(payload: P) -> Self {
        Self::new(Some(payload), None, Some(true))
    }

    /// A failed state with no payload.
    pub fn failed(error_message: impl Into<String>) -> Self {
        Self::new(None, Some(error_message.into()), Some(false))
    }

    /// A state whose outcome is not known yet.
    #[inline]
    pub const fn unknown(payload: Option<P>) -> Self {
        Self::new(payload, None, None)
    }

    /// Returns the payload, if any.
    #[inline]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Returns the error message, if any.
    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the tri-state success flag.
    #[inline]
    pub const fn success(&self) -> Option<bool> {
        self.success
    }

    /// Returns `true` only when success is explicitly `true`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self.success, Some(true))
    }

    /// Consumes the state and returns its payload.
    #[inline]
    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    /// Consumes the state and returns `(payload, error_message, success)`.
    #[inline]
    pub fn into_parts(self) -> (Option<P>, Option<String>, Option<bool>) {
        (self.payload, self.error_message, self.success)
    }

    /// Carries the error message and success flag over to a state for
    /// another payload type. The payload is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepwise::effect::ResultState;
    ///
    /// let failed: ResultState<u8> = ResultState::new(Some(1), Some("nope".into()), Some(false));
    /// let carried: ResultState<String> = failed.into_failure();
    /// assert_eq!(carried.error_message(), Some("nope"));
    /// assert_eq!(carried.payload(), None);
    /// ```
    #[inline]
    pub fn into_failure<Q>(self) -> ResultState<Q> {
        ResultState::new(None, self.error_message, self.success)
    }
}

impl<P> Default for ResultState<P> {
    fn default() -> Self {
        Self::empty()
    }
}

static_assertions::assert_impl_all!(ResultState<std::fs::File>: Send, Sync);

impl<P> Outcome for ResultState<P> {
    #[inline]
    fn success(&self) -> Option<bool> {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_matches_construction_defaults() {
        let state: ResultState<String> = ResultState::default();
        assert_eq!(state.into_parts(), (None, None, Some(true)));
    }

    #[rstest]
    #[case(Some(true), true, false)]
    #[case(Some(false), false, true)]
    #[case(None, false, false)]
    fn success_is_three_valued(#[case] success: Option<bool>, #[case] ok: bool, #[case] failure: bool) {
        let state = ResultState::new(Some(1), None, success);
        assert_eq!(state.is_ok(), ok);
        assert_eq!(state.is_failure(), failure);
    }

    #[rstest]
    fn failed_has_message_and_no_payload() {
        let state: ResultState<()> = ResultState::failed("missing");
        assert_eq!(state.error_message(), Some("missing"));
        assert_eq!(state.payload(), None);
        assert_eq!(state.success(), Some(false));
    }

    #[rstest]
    fn unknown_keeps_payload() {
        let state = ResultState::unknown(Some("draft"));
        assert_eq!(state.success(), None);
        assert_eq!(state.into_payload(), Some("draft"));
    }

    #[rstest]
    fn into_failure_keeps_unknown_flag() {
        let state: ResultState<i32> = ResultState::new(Some(3), Some("odd".into()), None);
        let carried: ResultState<()> = state.into_failure();
        assert_eq!(carried.into_parts(), (None, Some("odd".to_string()), None));
    }
}
