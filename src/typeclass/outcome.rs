//! Outcome capability - values that report whether their step succeeded.

/// A value exposing a three-valued success indicator.
///
/// `Some(true)` and `None` (unset) both mean "keep going"; only
/// `Some(false)` stops a [`Maybe`](super::Maybe) chain.
///
/// # Examples
///
/// ```rust
/// use stepwise::typeclass::Outcome;
///
/// struct Step {
///     total: i32,
///     ok: bool,
/// }
///
/// impl Outcome for Step {
///     fn success(&self) -> Option<bool> {
///         Some(self.ok)
///     }
/// }
///
/// assert!(Step { total: 1, ok: false }.is_failure());
/// ```
pub trait Outcome {
    /// Returns the success indicator.
    fn success(&self) -> Option<bool>;

    /// Returns `true` only when the indicator is explicitly `false`.
    #[inline]
    fn is_failure(&self) -> bool {
        self.success() == Some(false)
    }
}

impl Outcome for bool {
    #[inline]
    fn success(&self) -> Option<bool> {
        Some(*self)
    }
}

impl<T, E> Outcome for Result<T, E> {
    #[inline]
    fn success(&self) -> Option<bool> {
        Some(self.is_ok())
    }
}

impl<T: Outcome + ?Sized> Outcome for Box<T> {
    #[inline]
    fn success(&self) -> Option<bool> {
        (**self).success()
    }
}
