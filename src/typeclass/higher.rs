//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Try<_>` as type constructors
//! directly. [`TypeConstructor`] exposes the constructor through a GAT so that
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) can be written once
//! for every container in this crate.
//!
//! # Example
//!
//! ```rust
//! use fp_containers::control::Optional;
//! use fp_containers::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Optional<String> = empty_like(Optional::some(42));
//! assert!(emptied.is_empty());
//! ```

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Optional<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Try<i32>`, `WithType<String>` is `Try<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Optional, Try};

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn try_with_type_swaps_inner() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<WithType<bool> = Try<bool>>,
        {
        }
        assert_with_type::<Try<String>>();
    }

    #[test]
    fn either_with_type_keeps_left() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<char> = Either<String, char>>,
        {
        }
        assert_with_type::<Either<String, i32>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Optional<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }
}
