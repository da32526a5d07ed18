//! Truthiness of payload values.
//!
//! The fallback accessors of [`Maybe`](crate::control::Maybe)
//! (`or_else`, `or_else_get`, `or_else_throw`) treat a present but falsy
//! payload the same as an absent one: `Maybe::of(0).or_else(7)` yields `7`.
//! [`Truthy`] defines what "falsy" means for a payload type.
//!
//! | Type | Falsy when |
//! |------|------------|
//! | integers, floats | zero (floats: also NaN) |
//! | `bool` | `false` |
//! | `char` | `'\0'` |
//! | `str`, `String`, slices, `Vec`, maps, sets | empty |
//! | `Option<T>` | `None`, or `Some` of a falsy value |
//! | `()` | always |
//!
//! References and smart pointers delegate to the pointee. Non-empty tuples
//! are always truthy.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Types that know whether a value of theirs counts as "present enough".
///
/// # Examples
///
/// ```rust
/// use kinder::typeclass::Truthy;
///
/// assert!(5_i32.is_truthy());
/// assert!(!0_i32.is_truthy());
/// assert!(!"".is_truthy());
/// assert!("text".is_truthy());
/// assert!(!Option::<i32>::None.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_for_integers {
    ($($numeric:ty),*) => {
        $(
            impl Truthy for $numeric {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_floats {
    ($($numeric:ty),*) => {
        $(
            impl Truthy for $numeric {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthy_for_tuples {
    ($(($($element:ident),+)),*) => {
        $(
            impl<$($element),+> Truthy for ($($element,)+) {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_truthy_for_tuples!((A), (A, B), (A, B, C), (A, B, C, D));
