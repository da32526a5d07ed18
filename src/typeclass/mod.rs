//! Type class traits shared by every wrapper in the crate.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over the wrapped value
//! - [`Semigroup`]: combining two wrappers with a caller-supplied operator
//! - [`Monoid`]: semigroups with an identity element
//! - [`Truthy`]: what counts as a falsy payload for `Maybe`'s fallbacks
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This crate uses Generic Associated Types (GAT) to emulate HKT
//! behavior, so that `Functor` can change the payload type of
//! `Maybe<_>` or `Result<_>` generically.
//!
//! # Examples
//!
//! ```rust
//! use kinder::control::{Maybe, Result};
//! use kinder::typeclass::{Functor, Monoid, Semigroup};
//!
//! let doubled = Maybe::of(21).fmap(|x| x * 2);
//! assert_eq!(doubled, Maybe::of(42));
//!
//! let product = Semigroup::combined(Result::success(2), Result::success(3), |x, y| x * y);
//! assert_eq!(product, Result::success(6));
//!
//! let absorbed = Semigroup::combined(Result::identity(), Result::success(3), |x, y| x * y);
//! assert!(absorbed.is_failed());
//! ```

mod functor;
mod higher;
mod monoid;
mod semigroup;
mod truthy;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use truthy::Truthy;
