//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Maybe<_>` and `Result<_>` as type constructors directly.
//! [`TypeConstructor`] works around this with a GAT that re-applies the same
//! constructor to a different inner type.
//!
//! # Example
//!
//! ```rust
//! use kinder::control::Maybe;
//! use kinder::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::of(42);
//! let absent: Maybe<String> = absent_like(&present);
//! assert!(absent.is_nothing());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be equivalent to `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a valid type constructor so that
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}
