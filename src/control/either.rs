//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. It is right-biased: `map` and
//! `flat_map` operate on `Right` and pass `Left` through unchanged, while
//! `map_left` is the mirror image. Unlike [`Optional`](super::Optional) and
//! [`Try`](super::Try) it does no absence checks and captures no panics;
//! both sides can hold any payload.
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Either;
//!
//! let parsed: Either<String, i32> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//!
//! let message = parsed
//!     .map(|n| n * 2)
//!     .case(|error| format!("invalid: {error}"), |n| format!("doubled: {n}"));
//! assert_eq!(message, "doubled: 84");
//! ```

use std::fmt;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use fp_containers::control::Either;
///
/// let right: Either<String, i32> = Either::Right(42);
/// let left: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(right.map(|x| x * 2), Either::Right(84));
/// assert_eq!(left.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, discarding a right one.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, discarding a left one.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a right value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Alias for [`map`](Self::map).
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map(function)
    }

    /// Applies `function` to a left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies a function returning an `Either` to a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Either;
    ///
    /// fn positive(n: i32) -> Either<&'static str, i32> {
    ///     if n > 0 { Either::Right(n) } else { Either::Left("not positive") }
    /// }
    ///
    /// assert_eq!(Either::Right(3).flat_map(positive), Either::Right(3));
    /// assert_eq!(Either::Right(-3).flat_map(positive), Either::Left("not positive"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Alias for [`fold`](Self::fold).
    #[inline]
    pub fn case<T, F, G>(self, left: F, right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(left, right)
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn pure(value: R) -> Self {
        Self::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B> + Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left_ref(), Some(&42));
    }

    #[rstest]
    fn right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert_eq!(value.clone().right(), Some("hello".to_string()));
        assert_eq!(value.left(), None);
    }

    #[rstest]
    fn left_holds_falsy_payloads() {
        let value: Either<Option<i32>, i32> = Either::Left(None);
        assert!(value.is_left());
    }

    #[rstest]
    fn swap_exchanges_sides() {
        let value: Either<i32, &str> = Either::Left(1);
        assert_eq!(value.swap(), Either::Right(1));
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn debug_names_the_side() {
        let value: Either<i32, i32> = Either::Right(1);
        assert_eq!(format!("{value:?}"), "Right(1)");
    }
}
