//! `TryAsync` - a pending [`Try`].
//!
//! Every `TryAsync` guards its inner future with `catch_unwind`: a panic in
//! any chained callback, or while polling a future handed to the container,
//! settles as a `Failure` carrying a [`PanicError`](crate::error::PanicError).
//! Awaiting a `TryAsync` therefore never panics. This includes `recover` and
//! `recover_with`, whose handlers run inside the guarded future.

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, join_all};
use static_assertions::assert_impl_all;

use super::{BoxedFuture, OptionalAsync};
use crate::control::Try;
use crate::error::TryError;
use crate::typeclass::{Functor, Monad, MonadError, TypeConstructor};

/// A computation that will settle as a [`Try`].
///
/// # Examples
///
/// ```rust,ignore
/// use fp_containers::effect::TryAsync;
/// use fp_containers::error::TryError;
///
/// let error = TryError::msg("unreachable host");
/// let result = TryAsync::<i32>::failure(error.clone())
///     .map(|n| n + 1)
///     .recover(|_| 0)
///     .get()
///     .await;
/// assert_eq!(result.unwrap(), 0);
/// ```
#[must_use = "futures do nothing unless awaited"]
pub struct TryAsync<A> {
    value: BoxedFuture<Try<A>>,
}

assert_impl_all!(TryAsync<i32>: Send, Unpin);

impl<A: Send + 'static> TryAsync<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a future settling as a `Try`, guarding it against panics.
    pub fn wrap<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Try<A>> + Send + 'static,
    {
        Self {
            value: Box::pin(async move {
                match AssertUnwindSafe(future).catch_unwind().await {
                    Ok(settled) => settled,
                    Err(payload) => Try::Failure(TryError::from_panic(payload)),
                }
            }),
        }
    }

    /// Wraps a settled `Try`.
    pub fn from_try(value: Try<A>) -> Self {
        Self::wrap(future::ready(value))
    }

    /// Wraps a future whose value becomes a `Success`.
    ///
    /// A panic while polling `future` becomes a `Failure`.
    pub fn of<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::wrap(future.map(Try::Success))
    }

    /// Wraps a future settling as a `Result`; `Err` becomes a `Failure`.
    pub fn of_result<E, Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
        E: Into<TryError> + 'static,
    {
        Self::wrap(future.map(Try::from))
    }

    /// A settled `Success`.
    pub fn success(value: A) -> Self {
        Self::from_try(Try::Success(value))
    }

    /// A settled `Failure`.
    pub fn failure<E>(error: E) -> Self
    where
        E: Into<TryError>,
    {
        Self::from_try(Try::Failure(error.into()))
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the successful value.
    pub fn map<B, F>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        TryAsync::wrap(async move { self.await.map(function) })
    }

    /// Chains a step returning another `TryAsync`.
    pub fn flat_map<B, F>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> TryAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        TryAsync::wrap(async move {
            match self.await {
                Try::Success(value) => function(value).await,
                Try::Failure(error) => Try::Failure(error),
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn chain<B, F>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> TryAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Applies an asynchronous function to the successful value.
    pub fn map_async<B, F, Fut>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        TryAsync::wrap(async move {
            match self.await {
                Try::Success(value) => Try::Success(function(value).await),
                Try::Failure(error) => Try::Failure(error),
            }
        })
    }

    /// Applies an asynchronous function settling as a `Try`.
    pub fn flat_map_async<B, F, Fut>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Try<B>> + Send + 'static,
        B: Send + 'static,
    {
        TryAsync::wrap(async move {
            match self.await {
                Try::Success(value) => function(value).await,
                Try::Failure(error) => Try::Failure(error),
            }
        })
    }

    /// Replaces a failure with a value computed from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> A + Send + 'static,
    {
        Self::wrap(async move { self.await.recover(function) })
    }

    /// Replaces a failure with the `TryAsync` computed from its error.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> Self + Send + 'static,
    {
        Self::wrap(async move {
            match self.await {
                Try::Success(value) => Try::Success(value),
                Try::Failure(error) => function(error).await,
            }
        })
    }

    /// Applies a pending function to this value.
    ///
    /// `functions` settles first; when it failed, this container is never
    /// polled and its error is reported.
    pub fn ap<B, F>(self, functions: TryAsync<F>) -> TryAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        functions.flat_map(move |function| self.map(function))
    }

    /// Dispatches to `success` or `failure` once settled.
    pub fn case<B, S, E>(self, success: S, failure: E) -> TryAsync<B>
    where
        S: FnOnce(A) -> TryAsync<B> + Send + 'static,
        E: FnOnce(TryError) -> TryAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        TryAsync::wrap(async move {
            match self.await {
                Try::Success(value) => success(value).await,
                Try::Failure(error) => failure(error).await,
            }
        })
    }

    /// Discards the successful value.
    pub fn void(self) -> TryAsync<()> {
        self.map(|_| ())
    }

    /// Converts to an [`OptionalAsync`], discarding the error.
    pub fn to_optional(self) -> OptionalAsync<A> {
        OptionalAsync::wrap(async move { self.await.to_optional() })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Settles and returns the value, or the error of a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns the carried [`TryError`] if the computation failed.
    pub async fn get(self) -> Result<A, TryError> {
        self.await.get()
    }

    /// Settles and returns the value, or `default` for a failure.
    pub async fn get_or_else(self, default: A) -> A {
        self.await.get_or_else(default)
    }

    /// The underlying future.
    pub fn promise(self) -> Pin<Box<dyn Future<Output = Try<A>> + Send>> {
        self.value
    }

    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// Settles every element concurrently and keeps the successful values, in
    /// input order.
    pub fn flatten<I>(items: I) -> impl Future<Output = Vec<A>> + Send
    where
        I: IntoIterator<Item = Self>,
    {
        join_all(items).map(Try::<A>::flatten)
    }

    /// Settles every element concurrently; the failure with the lowest index
    /// wins.
    pub fn all<I>(items: I) -> TryAsync<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        TryAsync::wrap(join_all(items).map(Try::<A>::all))
    }
}

impl TryAsync<()> {
    /// A settled `Success` carrying no information.
    pub fn unit() -> Self {
        Self::success(())
    }
}

impl<A> Future for TryAsync<A> {
    type Output = Try<A>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.value.as_mut().poll(context)
    }
}

impl<A> fmt::Debug for TryAsync<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TryAsync").finish_non_exhaustive()
    }
}

impl<A: Send + 'static> From<Try<A>> for TryAsync<A> {
    fn from(value: Try<A>) -> Self {
        Self::from_try(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for TryAsync<A> {
    type Inner = A;
    type WithType<B> = TryAsync<B>;
}

impl<A: Send + 'static> Functor for TryAsync<A> {
    fn fmap<B, F>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<A: Send + 'static> Monad for TryAsync<A> {
    fn pure(value: A) -> Self {
        Self::success(value)
    }

    fn flat_map<B, F>(self, function: F) -> TryAsync<B>
    where
        F: FnOnce(A) -> TryAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A: Send + 'static> MonadError<TryError> for TryAsync<A> {
    fn throw_error(error: TryError) -> Self {
        Self::failure(error)
    }

    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(TryError) -> Self + Send + 'static,
    {
        self.recover_with(handler)
    }
}
