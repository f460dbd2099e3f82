//! Try type - a computation that either succeeded or failed.
//!
//! `Try<A>` is `Success(A)` or `Failure(TryError)`. Its distinguishing feature
//! is panic capture: [`Try::of`], [`Try::map`] and [`Try::flat_map`] run their
//! callbacks behind `catch_unwind`, so a panicking step turns into a `Failure`
//! instead of unwinding through the caller. Steps that report failure through
//! `Result` go through [`Try::of_result`] and [`Try::map_result`].
//!
//! Once a chain has failed, no further callbacks run and the original
//! [`TryError`] travels to the end unchanged (compare it with
//! [`TryError::ptr_eq`]).
//!
//! `recover` and `recover_with` do *not* capture panics raised by their own
//! handlers.
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Try;
//!
//! let length = Try::of(|| "hello")
//!     .map(|s| format!("{s} world"))
//!     .map(|s| s.len())
//!     .get_or_else(0);
//! assert_eq!(length, 11);
//!
//! let recovered = Try::of(|| -> i32 { panic!("you were unlucky") })
//!     .map(|n| n + 1)
//!     .recover(|_| 0)
//!     .get_or_else(-1);
//! assert_eq!(recovered, 0);
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::control::Optional;
use crate::error::TryError;
use crate::typeclass::{Functor, Monad, MonadError, TypeConstructor};

#[cfg(feature = "async")]
use crate::effect::TryAsync;
#[cfg(feature = "async")]
use futures::FutureExt;
#[cfg(feature = "async")]
use std::future::Future;

/// The result of a computation that may have failed.
///
/// # Examples
///
/// ```rust
/// use fp_containers::control::Try;
/// use fp_containers::error::TryError;
///
/// let error = TryError::msg("unreachable host");
/// let failed: Try<i32> = Try::failure(error.clone());
///
/// let result = failed.map(|n| n * 2).flat_map(|n| Try::success(n + 1));
/// assert!(result.error().is_some_and(|e| e.ptr_eq(&error)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Try<A> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed.
    Failure(TryError),
}

/// Runs `function`, turning a panic into a failure.
fn capture<A, F>(function: F) -> Try<A>
where
    F: FnOnce() -> A,
{
    match panic::catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Try::Success(value),
        Err(payload) => Try::Failure(TryError::from_panic(payload)),
    }
}

impl<A> Try<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `function`, capturing a panic as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    ///
    /// assert_eq!(Try::of(|| 1 + 1), Try::success(2));
    /// assert!(Try::of(|| -> i32 { panic!("boom") }).is_failure());
    /// ```
    #[inline]
    pub fn of<F>(function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        capture(function)
    }

    /// Runs a fallible `function`. Both `Err` and panics become a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    ///
    /// let parsed = Try::of_result(|| "12".parse::<i32>());
    /// assert_eq!(parsed, Try::success(12));
    ///
    /// let rejected = Try::of_result(|| "twelve".parse::<i32>());
    /// assert!(rejected.is_failure());
    /// ```
    pub fn of_result<E, F>(function: F) -> Self
    where
        F: FnOnce() -> Result<A, E>,
        E: Into<TryError>,
    {
        capture(function).flat_map(Self::from)
    }

    /// Wraps a value as a `Success`.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as a `Failure`.
    #[inline]
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<TryError>,
    {
        Self::Failure(error.into())
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the error of a `Failure`.
    #[inline]
    pub const fn error(&self) -> Option<&TryError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to a successful value, capturing a panic.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => capture(move || function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a fallible `function` to a successful value.
    ///
    /// An `Err` becomes a `Failure`, as does a panic.
    pub fn map_result<B, E, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Result<B, E>,
        E: Into<TryError>,
    {
        self.map(function).flat_map(Try::from)
    }

    /// Applies a function returning a `Try` and flattens, capturing a panic.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => match capture(move || function(value)) {
                Try::Success(inner) => inner,
                Try::Failure(error) => Try::Failure(error),
            },
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        self.flat_map(function)
    }

    /// Applies a wrapped function to this value.
    ///
    /// When both sides failed, the error of `self` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    /// use fp_containers::error::TryError;
    ///
    /// let add_one = Try::success(|n: i32| n + 1);
    /// assert_eq!(Try::success(1).ap(add_one), Try::success(2));
    ///
    /// let own = TryError::msg("own");
    /// let other = TryError::msg("other");
    /// let result = Try::<i32>::failure(own.clone()).ap(Try::<fn(i32) -> i32>::failure(other));
    /// assert_eq!(result.error(), Some(&own));
    /// ```
    pub fn ap<B, F>(self, functions: Try<F>) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => functions.map(move |function| function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Replaces a `Failure` with a value computed from its error.
    ///
    /// Panics raised by `function` are not captured.
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(function(error)),
        }
    }

    /// Replaces a `Failure` with the `Try` computed from its error.
    ///
    /// Panics raised by `function` are not captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    /// use fp_containers::error::TryError;
    ///
    /// let retry = |error: TryError| {
    ///     if error.to_string() == "bad bad bad" {
    ///         Try::success("okay")
    ///     } else {
    ///         Try::failure(TryError::msg("not okay"))
    ///     }
    /// };
    ///
    /// assert_eq!(Try::failure(TryError::msg("bad bad bad")).recover_with(retry), Try::success("okay"));
    /// assert!(Try::failure(TryError::msg("bad")).recover_with(retry).is_failure());
    /// ```
    #[inline]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Dispatches to `success` or `failure`.
    #[inline]
    pub fn case<B, S, E>(self, success: S, failure: E) -> Try<B>
    where
        S: FnOnce(A) -> Try<B>,
        E: FnOnce(TryError) -> Try<B>,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
        }
    }

    /// Discards the successful value, keeping a failure.
    #[inline]
    pub fn void(self) -> Try<()> {
        match self {
            Self::Success(_) => Try::Success(()),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, or the error of a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns the carried [`TryError`] if this is a `Failure`.
    #[inline]
    pub fn get(self) -> Result<A, TryError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the value, or `default` for a `Failure`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Converts to a `Result`. Same as [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns the carried [`TryError`] if this is a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<A, TryError> {
        self.get()
    }

    /// Converts to an [`Optional`], discarding the error.
    pub fn to_optional(self) -> Optional<A> {
        match self {
            Self::Success(value) => Optional::Some(value),
            Self::Failure(error) => {
                tracing::debug!(%error, "discarding failure into an empty Optional");
                Optional::None
            }
        }
    }

    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// Keeps the successful values, in order.
    pub fn flatten<I>(items: I) -> Vec<A>
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .filter_map(|item| match item {
                Self::Success(value) => Some(value),
                Self::Failure(_) => None,
            })
            .collect()
    }

    /// Collects every value, or the first failure in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    /// use fp_containers::error::TryError;
    ///
    /// assert_eq!(
    ///     Try::all(vec![Try::success(1), Try::success(2), Try::success(3)]),
    ///     Try::success(vec![1, 2, 3])
    /// );
    ///
    /// let first = TryError::msg("first");
    /// let second = TryError::msg("second");
    /// let result = Try::all(vec![
    ///     Try::success(1),
    ///     Try::failure(first.clone()),
    ///     Try::failure(second),
    /// ]);
    /// assert_eq!(result.error(), Some(&first));
    /// ```
    pub fn all<I>(items: I) -> Try<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => return Try::Failure(error),
            }
        }
        Try::Success(values)
    }
}

impl Try<()> {
    /// A `Success` carrying no information.
    #[inline]
    pub const fn unit() -> Self {
        Self::Success(())
    }
}

// =============================================================================
// Asynchronous Operations
// =============================================================================

#[cfg(feature = "async")]
impl<A: Send + 'static> Try<A> {
    /// Lifts this value into a [`TryAsync`].
    #[inline]
    pub fn into_async(self) -> TryAsync<A> {
        TryAsync::from_try(self)
    }

    /// Applies an asynchronous function, yielding a [`TryAsync`].
    ///
    /// Shorthand for `into_async().map_async(function)`.
    pub fn map_async<B, F, Fut>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        self.into_async().map_async(function)
    }

    /// Runs an asynchronous `function`, capturing a panic raised either while
    /// building the future or while polling it.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use fp_containers::control::Try;
    ///
    /// let result = Try::p_of(|| async { 1 }).await;
    /// assert_eq!(result, Try::success(1));
    /// ```
    pub fn p_of<F, Fut>(function: F) -> impl Future<Output = Self> + Send
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = A> + Send,
    {
        let started = capture(function);
        async move {
            match started {
                Try::Success(future) => match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(value) => Self::Success(value),
                    Err(payload) => Self::Failure(TryError::from_panic(payload)),
                },
                Try::Failure(error) => Self::Failure(error),
            }
        }
    }

    /// Applies an asynchronous function to a successful value.
    #[deprecated(note = "use `map_async` instead")]
    pub fn p_map<B, F, Fut>(self, function: F) -> impl Future<Output = Try<B>> + Send
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        self.map_async(function)
    }

    /// Applies an asynchronous function returning a `Try` to a successful value.
    #[deprecated(note = "use `into_async().flat_map_async(...)` instead")]
    pub fn p_flat_map<B, F, Fut>(self, function: F) -> impl Future<Output = Try<B>> + Send
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Try<B>> + Send + 'static,
        B: Send + 'static,
    {
        self.into_async().flat_map_async(function)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<A, E> From<Result<A, E>> for Try<A>
where
    E: Into<TryError>,
{
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<A> From<Try<A>> for Result<A, TryError> {
    fn from(value: Try<A>) -> Self {
        value.get()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}

impl<A> Functor for Try<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Self::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B> + Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A> MonadError<TryError> for Try<A> {
    #[inline]
    fn throw_error(error: TryError) -> Self {
        Self::Failure(error)
    }

    #[inline]
    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(TryError) -> Self + Send + 'static,
    {
        self.recover_with(handler)
    }
}
