//! Synchronous containers.
//!
//! - [`Optional`]: a value that may be absent
//! - [`Try`]: a computation that succeeded or failed, with panic capture
//! - [`Either`]: a right-biased two-case union
//! - [`Match`]: an ordered case analysis that finalizes into a function
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::{Optional, Try};
//!
//! let port = Optional::of(std::env::var("FP_CONTAINERS_DOC_PORT").ok())
//!     .to_try(fp_containers::error::EmptyOptionalError)
//!     .map_result(|raw| raw.parse::<u16>())
//!     .get_or_else(8080);
//! assert_eq!(port, 8080);
//!
//! let doubled = Try::of(|| 21).map(|n| n * 2);
//! assert_eq!(doubled, Try::success(42));
//! ```

mod attempt;
mod either;
mod matcher;
mod optional;

pub use attempt::Try;
pub use either::Either;
pub use matcher::Match;
pub use optional::Optional;
