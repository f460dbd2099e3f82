//! Optional type - a value that may be absent.
//!
//! `Optional<A>` is either `Some(A)` or `None`. It is a close relative of
//! `std::option::Option` with the combinator surface shared by every container
//! in this crate (`map`, `flat_map`, `ap`, `case`, `get_or_throw`, the static
//! `flatten` and `all`), so that `Optional`, [`Try`](super::Try) and the
//! asynchronous lenses compose the same way.
//!
//! Absence is structural: `Some` always holds a value, and falsy values such as
//! `0`, `""` or `false` are ordinary present values. Entry points that accept a
//! possibly missing value take an `Option<A>` and collapse `None`.
//!
//! Transformations do not capture panics. A panicking callback unwinds through
//! `map` and `flat_map`; wrap the step in a `Try` when that matters.
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Optional;
//!
//! let name = Optional::of(Some("ada"))
//!     .map(str::to_uppercase)
//!     .get_or_else(String::from("anonymous"));
//! assert_eq!(name, "ADA");
//!
//! let missing: Optional<&str> = Optional::of(None);
//! assert!(missing.map(str::len).is_empty());
//! ```

use std::collections::BTreeMap;

use crate::control::Try;
use crate::error::{EmptyOptionalError, TryError};
use crate::typeclass::{Functor, Monad, MonadError, TypeConstructor};

#[cfg(feature = "async")]
use crate::effect::OptionalAsync;
#[cfg(feature = "async")]
use std::future::Future;

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Examples
///
/// ```rust
/// use fp_containers::control::Optional;
///
/// let present = Optional::some(0);
/// assert!(present.is_present());
/// assert_eq!(present.get(), Ok(0));
///
/// let absent: Optional<i32> = Optional::empty();
/// assert!(absent.get().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Optional<A> {
    /// A present value.
    Some(A),
    /// No value.
    None,
}

impl<A> Optional<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a possibly missing value: `None` becomes the empty case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// assert_eq!(Optional::of(Some(1)), Optional::some(1));
    /// assert_eq!(Optional::<i32>::of(None), Optional::empty());
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Wraps a value that is known to be present.
    #[inline]
    pub const fn some(value: A) -> Self {
        Self::Some(value)
    }

    /// The empty case.
    #[inline]
    pub const fn empty() -> Self {
        Self::None
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if there is no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if there is a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Borrows the inner value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&A> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns `predicate(value)`, or `false` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// assert!(Optional::some(4).exists(|n| n % 2 == 0));
    /// assert!(!Optional::<i32>::empty().exists(|_| true));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// `function` is never called on `None`. Panics are not captured.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Like [`map`](Self::map), but the callback may report absence.
    ///
    /// A callback returning `None` collapses the result to the empty case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// let parsed = Optional::some("42").map_nullable(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, Optional::some(42));
    ///
    /// let collapsed = Optional::some("nope").map_nullable(|s| s.parse::<i32>().ok());
    /// assert!(collapsed.is_empty());
    /// ```
    #[inline]
    pub fn map_nullable<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Some(value) => Optional::of(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Applies a function returning an `Optional` and flattens the result.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.flat_map(function)
    }

    /// Applies a wrapped function to this value.
    ///
    /// Empty if either side is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// let add_one = Optional::some(|n: i32| n + 1);
    /// assert_eq!(Optional::some(1).ap(add_one), Optional::some(2));
    ///
    /// let no_function: Optional<fn(i32) -> i32> = Optional::empty();
    /// assert!(Optional::some(1).ap(no_function).is_empty());
    /// ```
    #[inline]
    pub fn ap<B, F>(self, functions: Optional<F>) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, functions) {
            (Self::Some(value), Optional::Some(function)) => Optional::Some(function(value)),
            _ => Optional::None,
        }
    }

    /// Keeps the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Dispatches to `some` or `none`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// let described = Optional::<i32>::empty().case(
    ///     |n| Optional::some(format!("got {n}")),
    ///     || Optional::some(String::from("nothing")),
    /// );
    /// assert_eq!(described, Optional::some(String::from("nothing")));
    /// ```
    #[inline]
    pub fn case<B, S, N>(self, some: S, none: N) -> Optional<B>
    where
        S: FnOnce(A) -> Optional<B>,
        N: FnOnce() -> Optional<B>,
    {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or [`EmptyOptionalError`] when empty.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if this is `None`.
    #[inline]
    pub fn get(self) -> Result<A, EmptyOptionalError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(EmptyOptionalError),
        }
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or computes one when empty.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Converts to a plain `Option`.
    #[doc(alias = "get_or_undefined")]
    #[inline]
    pub fn get_or_null(self) -> Option<A> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns the value, or hands back `error` untouched when empty.
    ///
    /// # Errors
    ///
    /// Returns `error` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct NotFound(&'static str);
    ///
    /// let user: Optional<&str> = Optional::empty();
    /// assert_eq!(user.get_or_throw(NotFound("user")), Err(NotFound("user")));
    /// ```
    #[inline]
    pub fn get_or_throw<E>(self, error: E) -> Result<A, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Converts to a [`Try`], failing with `error` when empty.
    #[inline]
    pub fn to_try<E>(self, error: E) -> Try<A>
    where
        E: Into<TryError>,
    {
        match self {
            Self::Some(value) => Try::Success(value),
            Self::None => Try::Failure(error.into()),
        }
    }

    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// Keeps the present values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// let values = vec![
    ///     Optional::some(1),
    ///     Optional::empty(),
    ///     Optional::some(2),
    ///     Optional::empty(),
    ///     Optional::some(3),
    /// ];
    /// assert_eq!(Optional::flatten(values), vec![1, 2, 3]);
    /// ```
    pub fn flatten<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().filter_map(Self::get_or_null).collect()
    }

    /// Collects every value, or `None` at the first empty element.
    ///
    /// Iteration stops at the first empty element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Optional;
    ///
    /// assert_eq!(
    ///     Optional::all(vec![Optional::some(1), Optional::some(2)]),
    ///     Optional::some(vec![1, 2])
    /// );
    /// assert!(Optional::all(vec![Optional::some(1), Optional::empty()]).is_empty());
    /// ```
    pub fn all<I>(items: I) -> Optional<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Self::Some(value) => values.push(value),
                Self::None => return Optional::None,
            }
        }
        Optional::Some(values)
    }

    /// Keeps the present entries of a keyed collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fp_containers::control::Optional;
    ///
    /// let fields = BTreeMap::from([
    ///     ("name", Optional::some("ada")),
    ///     ("nickname", Optional::empty()),
    /// ]);
    /// assert_eq!(Optional::flatten_fields(fields), BTreeMap::from([("name", "ada")]));
    /// ```
    pub fn flatten_fields<K>(fields: BTreeMap<K, Self>) -> BTreeMap<K, A>
    where
        K: Ord,
    {
        fields
            .into_iter()
            .filter_map(|(key, value)| value.get_or_null().map(|value| (key, value)))
            .collect()
    }
}

impl<A: PartialEq> Optional<A> {
    /// Returns `true` if the value is present and equal to `value`.
    #[inline]
    pub fn contains(&self, value: &A) -> bool {
        match self {
            Self::Some(inner) => inner == value,
            Self::None => false,
        }
    }
}

// =============================================================================
// Asynchronous Operations
// =============================================================================

#[cfg(feature = "async")]
impl<A: Send + 'static> Optional<A> {
    /// Lifts this value into an [`OptionalAsync`], preserving emptiness.
    #[inline]
    pub fn into_async(self) -> OptionalAsync<A> {
        OptionalAsync::from_optional(self)
    }

    /// Applies an asynchronous function to a present value.
    ///
    /// Resolves immediately to `None` when empty.
    #[deprecated(note = "use `into_async().map_async(...)` instead")]
    pub fn p_map<B, F, Fut>(self, function: F) -> impl Future<Output = Optional<B>>
    where
        F: FnOnce(A) -> Fut,
        Fut: Future<Output = B>,
    {
        async move {
            match self {
                Self::Some(value) => Optional::Some(function(value).await),
                Self::None => Optional::None,
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A> Default for Optional<A> {
    fn default() -> Self {
        Self::None
    }
}

impl<A> From<Option<A>> for Optional<A> {
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A> From<Optional<A>> for Option<A> {
    fn from(value: Optional<A>) -> Self {
        value.get_or_null()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B> + Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A> MonadError<TryError> for Optional<A> {
    fn throw_error(error: TryError) -> Self {
        tracing::debug!(%error, "discarding error into an empty Optional");
        Self::None
    }

    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(TryError) -> Self + Send + 'static,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => handler(TryError::new(EmptyOptionalError)),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Optional<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::of)
    }
}
