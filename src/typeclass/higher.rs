//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Binding must hand back "the same wrapper", but the payload inside that
//! wrapper is free to change from one step to the next: opening a file
//! turns a `Monad<ResultState<()>>` into a `Monad<ResultState<File>>`.
//! Rust has no native higher-kinded types, so [`TypeConstructor`] uses a
//! generic associated type to name "this wrapper, applied to another
//! payload".
//!
//! # Example
//!
//! ```rust
//! use stepwise::typeclass::{Monad, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_: T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let wrapped: Monad<i32> = Monad::new(1);
//! let nothing: Option<Monad<String>> = relabel(wrapped);
//! assert!(nothing.is_none());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the payload this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to payload `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type, for example `i32` in `Monad<i32>`.
    type Inner;

    /// The same wrapper applied to a different payload `B`.
    ///
    /// The bound keeps the result a type constructor so that chains can
    /// continue past any number of payload changes.
    type WithType<B>: TypeConstructor<Inner = B>;
}
