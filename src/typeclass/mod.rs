//! Type class traits shared by the containers.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over the inner value
//! - [`Monad`]: lifting values and sequencing dependent steps
//! - [`MonadError`]: throwing and catching failures
//!
//! Every container in the crate implements all four. The
//! [`Collector`](crate::collector::Collector) is generic over them, which is
//! what lets one `fold` implementation serve `Try`, `TryAsync` and `Optional`.
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::{Optional, Try};
//! use fp_containers::typeclass::Functor;
//!
//! fn increment<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Optional::some(1)), Optional::some(2));
//! assert_eq!(increment(Try::success(1)), Try::success(2));
//! ```

mod functor;
mod higher;
mod monad;
mod monad_error;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monad_error::MonadError;
