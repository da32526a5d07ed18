//! # kinder
//!
//! Composable wrapper types built over a shared Functor/Monoid contract.
//!
//! ## Overview
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor),
//!   [`Functor`](typeclass::Functor), [`Semigroup`](typeclass::Semigroup),
//!   [`Monoid`](typeclass::Monoid), [`Truthy`](typeclass::Truthy)
//! - **Immediate wrappers**: [`Maybe`](control::Maybe) for optional values,
//!   [`Result`](control::Result) for fallible computations
//! - **Deferred wrappers**: [`Delay`](effect::Delay) for suspended
//!   computations, [`Context`](effect::Context) for context injection,
//!   [`State`](effect::State) for explicit state threading
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: `Maybe` and `Result`
//! - `effect`: `Delay`, `Context` and `State`
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events when it discards or captures an
//! error (`Maybe::call`, `Result::wraps`, `Result::catch_unwind`). It never
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use kinder::prelude::*;
//!
//! let parse = Result::wraps(|text: &str| text.parse::<i32>());
//! let halve = Maybe::wraps(|x: i32| (x % 2 == 0).then_some(x / 2));
//!
//! let half = parse("42").map(halve).value_or(Maybe::nothing());
//! assert_eq!(half, Maybe::of(21));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits. Note that it brings
/// [`control::Result`] into scope, shadowing `std::result::Result`.
///
/// # Usage
///
/// ```rust
/// use kinder::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
