//! Functor type class - mapping over the value held by a wrapper.
//!
//! A Functor is a type constructor that supports a mapping operation
//! preserving the structure of the wrapper. `Maybe<i32>` becomes
//! `Maybe<String>` without the caller having to look inside.
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
//! # Note on `Delay`, `Context` and `State`
//!
//! The deferred wrappers in [`effect`](crate::effect) hold `Rc<dyn Fn>`
//! callables, which forces `'static` bounds that this trait does not carry.
//! They provide their own `map` methods with identical semantics.

use super::higher::TypeConstructor;

/// A type class for wrappers that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use kinder::control::Maybe;
/// use kinder::typeclass::Functor;
///
/// let x = Maybe::of(5);
/// let y: Maybe<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Maybe::of("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// Short-circuiting variants (absent, failed) are returned unchanged and
    /// `function` is not called.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the wrapper must stay available afterwards.
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    /// use kinder::typeclass::Functor;
    ///
    /// let x = Maybe::of("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::of(5));
    /// assert_eq!(x, Maybe::of("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the inner value with a constant.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}
