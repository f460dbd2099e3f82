//! Asynchronous lenses over [`Optional`](crate::control::Optional) and
//! [`Try`](crate::control::Try).
//!
//! [`OptionalAsync<A>`] and [`TryAsync<A>`] hold a pending `Optional<A>` /
//! `Try<A>` and offer the same combinators as their synchronous counterparts.
//! Each combinator awaits the pending value, applies the synchronous
//! operation and wraps the result again, so a chain is a strict sequential
//! pipeline. Both types are themselves futures: awaiting them yields the
//! settled `Optional` / `Try`.
//!
//! Nothing runs until the container is polled. Any executor works; the
//! examples use tokio.
//!
//! The static `flatten` and `all` helpers poll their inputs concurrently and
//! report results in input order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fp_containers::effect::TryAsync;
//!
//! let length = TryAsync::of(async { "hello" })
//!     .map(|s| format!("{s} world"))
//!     .map_async(|s| async move { s.len() })
//!     .get()
//!     .await;
//! assert_eq!(length.unwrap(), 11);
//! ```

use std::future::Future;
use std::pin::Pin;

mod optional_async;
mod try_async;

pub use optional_async::OptionalAsync;
pub use try_async::TryAsync;

type BoxedFuture<A> = Pin<Box<dyn Future<Output = A> + Send>>;
