//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Try;
//! use fp_containers::typeclass::Monad;
//!
//! fn halve(n: i32) -> Try<i32> {
//!     if n % 2 == 0 {
//!         Try::success(n / 2)
//!     } else {
//!         Try::failure(fp_containers::error::TryError::msg("odd"))
//!     }
//! }
//!
//! let result = <Try<i32> as Monad>::pure(8)
//!     .flat_map(halve)
//!     .flat_map(halve);
//! assert_eq!(result.get().unwrap(), 2);
//! ```

use super::functor::Functor;

/// Containers that can lift a value and sequence dependent steps.
///
/// This is the protocol the [`Collector`](crate::collector::Collector) is
/// written against: any container implementing `Monad` (plus
/// [`MonadError`](super::MonadError)) can be collected.
pub trait Monad: Functor {
    /// Lifts a value into the container.
    fn pure(value: Self::Inner) -> Self;

    /// Applies `function` to the inner value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + Send + 'static,
        B: Send + 'static;

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    /// use fp_containers::typeclass::Monad;
    ///
    /// assert_eq!(Optional::some(1).then(Optional::some("next")), Optional::some("next"));
    /// assert_eq!(Optional::<i32>::empty().then(Optional::some("next")), Optional::empty());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }
}
