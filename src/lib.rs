//! # fp-containers
//!
//! Functional containers for Rust: [`Optional`](control::Optional),
//! [`Try`](control::Try), [`Either`](control::Either), their asynchronous
//! lenses [`OptionalAsync`](effect::OptionalAsync) and
//! [`TryAsync`](effect::TryAsync), a [`Collector`](collector::Collector) that
//! rolls dependent steps into one record, and a [`Match`](control::Match)
//! expression builder.
//!
//! ## Overview
//!
//! - **Control**: the synchronous containers and `Match`
//! - **Effect**: pending `Optional` / `Try` values built on futures
//! - **Collector**: sequential, short-circuiting record assembly
//! - **Type Classes**: `Functor`, `Monad`, `MonadError` over a GAT-based
//!   `TypeConstructor`
//!
//! ## Feature Flags
//!
//! - `async` (default): `OptionalAsync`, `TryAsync` and the `p_*` helpers
//! - `collector` (default): `Collector`
//! - `serde`: `Serialize` / `Deserialize` for `Optional` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_containers::prelude::*;
//!
//! let total = Try::of(|| "40")
//!     .map_result(|raw| raw.parse::<i32>())
//!     .map(|n| n + 2)
//!     .to_optional()
//!     .get_or_else(0);
//! assert_eq!(total, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type classes and the error types.
///
/// # Usage
///
/// ```rust
/// use fp_containers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;

    #[cfg(feature = "collector")]
    pub use crate::collector::*;
}

pub mod control;
pub mod error;
pub mod typeclass;

#[cfg(feature = "async")]
pub mod effect;

#[cfg(feature = "collector")]
pub mod collector;
