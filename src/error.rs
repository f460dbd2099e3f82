//! Error types shared by the containers.
//!
//! [`TryError`] is the single failure payload carried by [`Try`](crate::control::Try)
//! and [`TryAsync`](crate::effect::TryAsync). It is a shared handle: cloning it
//! keeps the identity of the underlying error, so a failure that travels
//! through a chain can be compared against the error that started it.
//!
//! # Panic normalization
//!
//! Panics captured at a `Try` boundary become a [`PanicError`]. String payloads
//! (what `panic!("...")` produces) are kept verbatim as the message; any other
//! payload type is reported as `"Box<dyn Any>"`.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Returned by `get` on an empty [`Optional`](crate::control::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("called get on an empty Optional")]
pub struct EmptyOptionalError;

/// A panic that was captured and turned into a failure value.
///
/// # Examples
///
/// ```rust
/// use fp_containers::control::Try;
/// use fp_containers::error::PanicError;
///
/// let failed: Try<i32> = Try::of(|| panic!("boom"));
/// let error = failed.get().unwrap_err();
/// assert_eq!(error.downcast_ref::<PanicError>().unwrap().message(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    /// Creates a panic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "Box<dyn Any>".to_string(),
            },
        };
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while building or decoding a collected record.
#[cfg(feature = "collector")]
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// The seed value could not be serialized.
    #[error("failed to serialize collector seed")]
    Seed(#[source] serde_json::Error),
    /// The seed value serialized to something other than a JSON object.
    #[error("collector seed must serialize to an object, found {found}")]
    NotAnObject {
        /// The JSON kind that was found instead.
        found: &'static str,
    },
    /// A folded value could not be serialized.
    #[error("failed to serialize field `{key}`")]
    Encode {
        /// The field being folded.
        key: String,
        /// The serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The final record does not match the requested type.
    #[error("failed to decode collected record")]
    Decode(#[source] serde_json::Error),
}

/// The failure payload of `Try` and `TryAsync`.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a `TryError`,
/// and the concrete type can be recovered with [`TryError::downcast_ref`].
/// Equality is identity: two `TryError`s are equal only when one is a clone of
/// the other.
///
/// Like `anyhow::Error`, this type does not implement `std::error::Error`
/// itself, which is what allows the blanket conversion from every error type.
/// It dereferences to `dyn Error` instead.
///
/// # Examples
///
/// ```rust
/// use fp_containers::error::{EmptyOptionalError, TryError};
///
/// let error = TryError::new(EmptyOptionalError);
/// let same = error.clone();
/// assert_eq!(error, same);
/// assert_ne!(error, TryError::new(EmptyOptionalError));
/// assert!(error.downcast_ref::<EmptyOptionalError>().is_some());
/// ```
#[derive(Clone)]
pub struct TryError {
    inner: Arc<anyhow::Error>,
}

impl TryError {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::new(error))
    }

    /// Creates an error from a printable message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::from_anyhow(anyhow::Error::msg(message))
    }

    /// Wraps an `anyhow::Error`, keeping its context chain.
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            inner: Arc::new(error),
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let error = PanicError::from_payload(payload);
        tracing::debug!(message = error.message(), "captured panic as a failure");
        Self::new(error)
    }

    /// Returns `true` if both handles point at the same error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the wrapped error as `E` if that is its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if this failure came from a captured panic.
    pub fn is_panic(&self) -> bool {
        self.downcast_ref::<PanicError>().is_some()
    }

    /// Borrows the underlying `anyhow::Error`.
    pub fn as_anyhow(&self) -> &anyhow::Error {
        &self.inner
    }
}

impl<E> From<E> for TryError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Deref for TryError {
    type Target = dyn StdError + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &**self.inner
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for TryError {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &**self
    }
}

impl PartialEq for TryError {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for TryError {}

impl fmt::Debug for TryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl fmt::Display for TryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}
