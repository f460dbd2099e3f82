//! `OptionalAsync` - a pending [`Optional`].
//!
//! Like [`Optional`], the synchronous combinators do not capture panics. The
//! asynchronous ones (`map_async`, `flat_map_async`) do: a callback that
//! panics, or a future that panics while polled, settles as `None`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, join_all};
use static_assertions::assert_impl_all;

use super::BoxedFuture;
use crate::control::{Optional, Try};
use crate::error::{EmptyOptionalError, TryError};
use crate::typeclass::{Functor, Monad, MonadError, TypeConstructor};

/// A computation that will settle as an [`Optional`].
///
/// # Examples
///
/// ```rust,ignore
/// use fp_containers::effect::OptionalAsync;
///
/// let lookup = async { Some(String::from("ada")) };
/// let name = OptionalAsync::from_future(lookup)
///     .map(|name| name.to_uppercase())
///     .get_or_else(String::from("anonymous"))
///     .await;
/// assert_eq!(name, "ADA");
/// ```
#[must_use = "futures do nothing unless awaited"]
pub struct OptionalAsync<A> {
    value: BoxedFuture<Optional<A>>,
}

assert_impl_all!(OptionalAsync<i32>: Send, Unpin);

impl<A: Send + 'static> OptionalAsync<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a future settling as an `Optional`.
    pub fn wrap<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Optional<A>> + Send + 'static,
    {
        Self {
            value: Box::pin(future),
        }
    }

    /// Wraps a settled `Optional`.
    pub fn from_optional(value: Optional<A>) -> Self {
        Self::wrap(future::ready(value))
    }

    /// Wraps a possibly missing value.
    pub fn of(value: Option<A>) -> Self {
        Self::from_optional(Optional::of(value))
    }

    /// Wraps a future settling as a possibly missing value.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<A>> + Send + 'static,
    {
        Self::wrap(future.map(Optional::of))
    }

    /// A settled present value.
    pub fn some(value: A) -> Self {
        Self::from_optional(Optional::Some(value))
    }

    /// A settled empty value.
    pub fn empty() -> Self {
        Self::from_optional(Optional::None)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies `function` to the present value.
    pub fn map<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(self.value.map(|settled| settled.map(function)))
    }

    /// Applies a callback that may report absence.
    pub fn map_nullable<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> Option<B> + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(self.value.map(|settled| settled.map_nullable(function)))
    }

    /// Chains a step returning another `OptionalAsync`.
    pub fn flat_map<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> OptionalAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(async move {
            match self.await {
                Optional::Some(value) => function(value).await,
                Optional::None => Optional::None,
            }
        })
    }

    /// Alias for [`flat_map`](Self::flat_map).
    pub fn chain<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> OptionalAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Applies an asynchronous function to the present value.
    ///
    /// A panic while calling `function` or polling its future settles as
    /// `None`.
    pub fn map_async<B, F, Fut>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(async move {
            match self.await {
                Optional::Some(value) => Try::p_of(move || function(value)).await.to_optional(),
                Optional::None => Optional::None,
            }
        })
    }

    /// Applies an asynchronous function settling as an `Optional`.
    ///
    /// A panic while calling `function` or polling its future settles as
    /// `None`.
    pub fn flat_map_async<B, F, Fut>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Optional<B>> + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(async move {
            match self.await {
                Optional::Some(value) => Try::p_of(move || function(value))
                    .await
                    .to_optional()
                    .flat_map(|inner| inner),
                Optional::None => Optional::None,
            }
        })
    }

    /// Applies a pending function to this value.
    ///
    /// `functions` settles first; when it is empty, this container is never
    /// polled.
    pub fn ap<B, F>(self, functions: OptionalAsync<F>) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        functions.flat_map(move |function| self.map(function))
    }

    /// Dispatches to `some` or `none` once settled.
    pub fn case<B, S, N>(self, some: S, none: N) -> OptionalAsync<B>
    where
        S: FnOnce(A) -> OptionalAsync<B> + Send + 'static,
        N: FnOnce() -> OptionalAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        OptionalAsync::wrap(async move {
            match self.await {
                Optional::Some(value) => some(value).await,
                Optional::None => none().await,
            }
        })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Settles and returns the value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if the settled value is empty.
    pub async fn get(self) -> Result<A, EmptyOptionalError> {
        self.await.get()
    }

    /// Settles and returns the value, or `default` when empty.
    pub async fn get_or_else(self, default: A) -> A {
        self.await.get_or_else(default)
    }

    /// Settles and returns the value, or `error` when empty.
    ///
    /// # Errors
    ///
    /// Returns `error` if the settled value is empty.
    pub async fn get_or_throw<E>(self, error: E) -> Result<A, E> {
        self.await.get_or_throw(error)
    }

    /// Settles into a plain `Option`.
    #[doc(alias = "get_or_undefined")]
    pub async fn get_or_null(self) -> Option<A> {
        self.await.get_or_null()
    }

    /// Settles and tests the value against `value`.
    pub async fn contains(self, value: &A) -> bool
    where
        A: PartialEq,
    {
        self.await.contains(value)
    }

    /// Settles and tests the value with `predicate`.
    pub async fn exists<P>(self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.await.exists(predicate)
    }

    /// Settles and reports emptiness.
    pub async fn is_empty(self) -> bool {
        self.await.is_empty()
    }

    /// The underlying future.
    pub fn promise(self) -> Pin<Box<dyn Future<Output = Optional<A>> + Send>> {
        self.value
    }

    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// Settles every element concurrently and keeps the present values, in
    /// input order.
    pub fn flatten<I>(items: I) -> impl Future<Output = Vec<A>> + Send
    where
        I: IntoIterator<Item = Self>,
    {
        join_all(items).map(Optional::<A>::flatten)
    }

    /// Settles every element concurrently; empty if any element is empty.
    pub fn all<I>(items: I) -> OptionalAsync<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        OptionalAsync::wrap(join_all(items).map(Optional::<A>::all))
    }
}

impl<A> Future for OptionalAsync<A> {
    type Output = Optional<A>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.value.as_mut().poll(context)
    }
}

impl<A> fmt::Debug for OptionalAsync<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("OptionalAsync").finish_non_exhaustive()
    }
}

impl<A: Send + 'static> From<Optional<A>> for OptionalAsync<A> {
    fn from(value: Optional<A>) -> Self {
        Self::from_optional(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for OptionalAsync<A> {
    type Inner = A;
    type WithType<B> = OptionalAsync<B>;
}

impl<A: Send + 'static> Functor for OptionalAsync<A> {
    fn fmap<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<A: Send + 'static> Monad for OptionalAsync<A> {
    fn pure(value: A) -> Self {
        Self::some(value)
    }

    fn flat_map<B, F>(self, function: F) -> OptionalAsync<B>
    where
        F: FnOnce(A) -> OptionalAsync<B> + Send + 'static,
        B: Send + 'static,
    {
        Self::flat_map(self, function)
    }
}

impl<A: Send + 'static> MonadError<TryError> for OptionalAsync<A> {
    fn throw_error(error: TryError) -> Self {
        Self::from_optional(<Optional<A> as MonadError<TryError>>::throw_error(error))
    }

    fn catch_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(TryError) -> Self + Send + 'static,
    {
        Self::wrap(async move {
            match self.await {
                Optional::Some(value) => Optional::Some(value),
                Optional::None => handler(TryError::new(EmptyOptionalError)).await,
            }
        })
    }
}
