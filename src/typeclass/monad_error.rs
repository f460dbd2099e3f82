//! `MonadError` type class - error handling capability.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! throw_error(e).catch_error(handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! pure(a).catch_error(handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! Containers without an error slot (`Optional`) satisfy the laws up to the
//! error value: they throw by becoming empty and catch by handing the handler
//! an [`EmptyOptionalError`](crate::error::EmptyOptionalError).

use super::monad::Monad;

/// Monads that can fail with an `E` and recover from it.
///
/// # Examples
///
/// ```rust
/// use fp_containers::control::Try;
/// use fp_containers::error::TryError;
/// use fp_containers::typeclass::MonadError;
///
/// let error = TryError::msg("unreachable host");
/// let failed = <Try<i32> as MonadError<TryError>>::throw_error(error);
/// let recovered = failed.catch_error(|_| Try::success(0));
/// assert_eq!(recovered, Try::success(0));
/// ```
pub trait MonadError<E>: Monad {
    /// Builds the failed case carrying `error`.
    fn throw_error(error: E) -> Self;

    /// Replaces a failure with the result of `handler`; successes pass through.
    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self + Send + 'static;
}
