//! Collector - rolling a sequence of dependent steps into one record.
//!
//! A [`Collector`] threads a [`Record`] (a JSON object, insertion ordered)
//! through a chain of monadic steps. Each [`fold`](Collector::fold) runs a
//! step against the record built so far and stores its result under a new
//! key. The first failed (or empty) step stops the chain: later steps are
//! never called and the original error comes out of [`finish`](Collector::finish).
//!
//! The collector is generic over the container it runs in. Any type that
//! implements [`Monad`] and [`MonadError<TryError>`] works; constructors are
//! provided for [`Try`], [`Optional`] and [`TryAsync`].
//!
//! Field typing is dynamic inside the chain (steps read the record as JSON)
//! and is recovered at the end with [`finish_as`](Collector::finish_as).
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::collector::Collector;
//! use fp_containers::control::Try;
//! use serde_json::json;
//!
//! let result = Collector::for_try_from(&json!({ "input": "hello" }))
//!     .fold("output", |record| {
//!         let input = record["input"].as_str().unwrap_or_default();
//!         Try::success(format!("{input} world"))
//!     })
//!     .fold("len", |record| {
//!         Try::success(record["output"].as_str().map_or(0, str::len))
//!     })
//!     .finish();
//!
//! assert_eq!(
//!     serde_json::Value::Object(result.get().unwrap()),
//!     json!({ "input": "hello", "output": "hello world", "len": 11 })
//! );
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::control::{Optional, Try};
use crate::error::{CollectorError, TryError};
use crate::typeclass::{Monad, MonadError, TypeConstructor};

#[cfg(feature = "async")]
use crate::effect::TryAsync;
#[cfg(feature = "async")]
use std::future::Future;

/// The record accumulated by a [`Collector`].
pub type Record = serde_json::Map<String, Value>;

/// Accumulates the results of dependent steps into a [`Record`].
#[derive(Clone, Debug)]
#[must_use = "a Collector does nothing until finished"]
pub struct Collector<M> {
    output: M,
}

/// Serializes a seed, which has to be a JSON object.
fn seed<T>(init: &T) -> Result<Record, CollectorError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(init).map_err(CollectorError::Seed)? {
        Value::Object(record) => Ok(record),
        Value::Null => Err(CollectorError::NotAnObject { found: "null" }),
        Value::Bool(_) => Err(CollectorError::NotAnObject { found: "boolean" }),
        Value::Number(_) => Err(CollectorError::NotAnObject { found: "number" }),
        Value::String(_) => Err(CollectorError::NotAnObject { found: "string" }),
        Value::Array(_) => Err(CollectorError::NotAnObject { found: "array" }),
    }
}

fn extend<V>(mut record: Record, key: String, value: &V) -> Result<Record, CollectorError>
where
    V: Serialize,
{
    match serde_json::to_value(value) {
        Ok(encoded) => {
            record.insert(key, encoded);
            Ok(record)
        }
        Err(source) => Err(CollectorError::Encode { key, source }),
    }
}

impl Collector<Try<Record>> {
    /// A `Try` collector starting from an empty record.
    pub fn for_try() -> Self {
        Self {
            output: Try::Success(Record::new()),
        }
    }

    /// A `Try` collector seeded with the fields of `init`.
    ///
    /// If `init` does not serialize to a JSON object, the collector starts
    /// out failed with a [`CollectorError`].
    pub fn for_try_from<T>(init: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self {
            output: Try::from(seed(init)),
        }
    }
}

impl Collector<Optional<Record>> {
    /// An `Optional` collector starting from an empty record.
    pub fn for_optional() -> Self {
        Self {
            output: Optional::Some(Record::new()),
        }
    }

    /// An `Optional` collector seeded with the fields of `init`.
    ///
    /// If `init` does not serialize to a JSON object, the collector starts
    /// out empty.
    pub fn for_optional_from<T>(init: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self {
            output: Try::from(seed(init)).to_optional(),
        }
    }
}

#[cfg(feature = "async")]
impl Collector<TryAsync<Record>> {
    /// A `TryAsync` collector starting from an empty record.
    pub fn for_try_async() -> Self {
        Self {
            output: TryAsync::success(Record::new()),
        }
    }

    /// A `TryAsync` collector seeded with the fields of `init`.
    pub fn for_try_async_from<T>(init: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        Self {
            output: TryAsync::from_try(Try::from(seed(init))),
        }
    }

    /// A `TryAsync` collector seeded with the value `init` resolves to.
    pub fn for_try_async_from_future<T, Fut>(init: Fut) -> Self
    where
        Fut: Future<Output = T> + Send + 'static,
        T: Serialize + Send + 'static,
    {
        Self {
            output: TryAsync::wrap(async move { Try::from(seed(&init.await)) }),
        }
    }
}

impl<M> Collector<M>
where
    M: MonadError<TryError, Inner = Record> + TypeConstructor<WithType<Record> = M> + Send + 'static,
{
    /// Runs `function` against the current record and stores its value under
    /// `key`.
    ///
    /// `function` is not called once the chain has failed. A value that
    /// cannot be serialized fails the chain with [`CollectorError::Encode`].
    /// Folding an existing key replaces its value.
    pub fn fold<K, V, F>(self, key: K, function: F) -> Self
    where
        K: Into<String>,
        V: Serialize + Send + 'static,
        F: FnOnce(&Record) -> M::WithType<V> + Send + 'static,
        M::WithType<V>: Monad<Inner = V, WithType<Record> = M>,
    {
        let key = key.into();
        let output = self.output.flat_map::<Record, _>(move |record| {
            tracing::trace!(key = %key, "running collector step");
            function(&record).flat_map::<Record, _>(move |value| match extend(record, key, &value) {
                Ok(record) => M::pure(record),
                Err(error) => M::throw_error(TryError::new(error)),
            })
        });
        Self { output }
    }

    /// Ends the chain and returns the container holding the record.
    #[doc(alias = "yield")]
    pub fn finish(self) -> M {
        self.output
    }

    /// Ends the chain and decodes the record into `T`.
    ///
    /// A record that does not match `T` fails with [`CollectorError::Decode`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_containers::collector::Collector;
    /// use fp_containers::control::Try;
    /// use serde::Deserialize;
    ///
    /// #[derive(Debug, PartialEq, Deserialize)]
    /// struct Greeting {
    ///     name: String,
    ///     greeting: String,
    /// }
    ///
    /// let greeting = Collector::for_try()
    ///     .fold("name", |_| Try::success("ada"))
    ///     .fold("greeting", |record| {
    ///         Try::success(format!("hello, {}", record["name"].as_str().unwrap_or("?")))
    ///     })
    ///     .finish_as::<Greeting>();
    ///
    /// assert_eq!(
    ///     greeting.get().unwrap(),
    ///     Greeting { name: "ada".into(), greeting: "hello, ada".into() }
    /// );
    /// ```
    pub fn finish_as<T>(self) -> M::WithType<T>
    where
        T: DeserializeOwned + Send + 'static,
        M::WithType<T>: MonadError<TryError, Inner = T>,
    {
        self.output.flat_map::<T, _>(|record| {
            match serde_json::from_value::<T>(Value::Object(record)) {
                Ok(value) => <M::WithType<T> as Monad>::pure(value),
                Err(source) => <M::WithType<T> as MonadError<TryError>>::throw_error(
                    TryError::new(CollectorError::Decode(source)),
                ),
            }
        })
    }
}
