//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Optional;
//! use fp_containers::typeclass::Functor;
//!
//! let doubled = Optional::some(5).fmap(|n| n * 2);
//! assert_eq!(doubled, Optional::some(10));
//!
//! let empty: Optional<i32> = Optional::empty();
//! assert_eq!(empty.fmap(|n| n * 2), Optional::empty());
//! ```

use super::higher::TypeConstructor;

/// Types whose inner value can be transformed without changing their shape.
///
/// The callback bounds (`Send + 'static`) are shared by every implementor,
/// including the asynchronous containers, which move callbacks into boxed
/// futures. Each container keeps an inherent `map` with looser bounds; `fmap`
/// delegates to it, so the trait behaves exactly like the inherent method,
/// panic capture included.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the inner value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + Send + 'static,
        B: Send + 'static;

    /// Replaces the inner value with `value`.
    ///
    /// ```rust
    /// use fp_containers::control::Try;
    /// use fp_containers::typeclass::Functor;
    ///
    /// assert_eq!(Try::success(1).replace("replaced"), Try::success("replaced"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Send + 'static,
    {
        self.fmap(move |_| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Optional, Try};
    use rstest::rstest;

    #[rstest]
    #[case(Optional::some(3), Optional::some(6))]
    #[case(Optional::empty(), Optional::empty())]
    fn optional_fmap(#[case] input: Optional<i32>, #[case] expected: Optional<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn try_fmap_goes_through_panic_capture() {
        let result: Try<i32> = Try::success(1).fmap(|_| panic!("inside fmap"));
        assert!(result.is_failure());
    }

    #[rstest]
    fn either_fmap_is_right_biased() {
        let left: Either<&str, i32> = Either::Left("left");
        assert_eq!(left.fmap(|n| n + 1), Either::Left("left"));
        let right: Either<&str, i32> = Either::Right(1);
        assert_eq!(right.fmap(|n| n + 1), Either::Right(2));
    }

    #[rstest]
    fn replace_keeps_shape() {
        assert_eq!(Optional::some(1).replace('x'), Optional::some('x'));
        assert_eq!(Optional::<i32>::empty().replace('x'), Optional::empty());
    }
}
