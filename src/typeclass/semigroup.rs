//! Semigroup type class - wrappers with a caller-parameterised binary operation.
//!
//! Unlike a plain semigroup, the operation here is supplied by the caller:
//! `combined` decides *whether* the payloads meet (short-circuit rules of
//! the wrapper) and the operator decides *how* they are merged.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` and an associative operator `op`:
//!
//! ```text
//! a.combined(b, op).combined(c, op) == a.combined(b.combined(c, op), op)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kinder::control::Maybe;
//! use kinder::typeclass::Semigroup;
//!
//! let product = Semigroup::combined(Maybe::of(5), Maybe::of(10), |x, y| x * y);
//! assert_eq!(product, Maybe::of(50));
//! ```

/// A type class for wrappers whose payloads can be combined by an operator.
pub trait Semigroup: Sized {
    /// The value handed to the operator.
    type Payload;

    /// Combines two wrappers, applying `operator` to their payloads when the
    /// wrapper's rules allow it.
    #[must_use]
    fn combined<F>(self, other: Self, operator: F) -> Self
    where
        F: FnOnce(Self::Payload, Self::Payload) -> Self::Payload;

    /// Reduces all elements in an iterator left to right with `combined`.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kinder::control::Maybe;
    /// use kinder::typeclass::Semigroup;
    ///
    /// let values = vec![Maybe::of(2), Maybe::of(3), Maybe::of(6)];
    /// assert_eq!(Maybe::reduce_all(values, |x, y| x * y), Some(Maybe::of(36)));
    ///
    /// let empty: Vec<Maybe<i32>> = vec![];
    /// assert_eq!(Maybe::reduce_all(empty, |x, y| x * y), None);
    /// ```
    fn reduce_all<I, F>(iterator: I, mut operator: F) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(Self::Payload, Self::Payload) -> Self::Payload,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combined(element, &mut operator))
    }
}
