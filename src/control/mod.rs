//! Wrappers that are evaluated immediately.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Result`]: success with a value, or a captured [`Failure`]
//!
//! Both implement [`Functor`](crate::typeclass::Functor),
//! [`Semigroup`](crate::typeclass::Semigroup) and
//! [`Monoid`](crate::typeclass::Monoid).
//!
//! # Examples
//!
//! ## Optional Chaining
//!
//! ```rust
//! use kinder::control::Maybe;
//!
//! let lookup = Maybe::wraps(|key: &str| match key {
//!     "answer" => Some(42),
//!     _ => None,
//! });
//!
//! assert_eq!(lookup("answer").map(|x| x / 2), Maybe::of(21));
//! assert_eq!(lookup("question").map(|x| x / 2).or_else(-1), -1);
//! ```
//!
//! ## Fallible Chaining
//!
//! ```rust
//! use kinder::control::Result;
//!
//! let parse = Result::wraps(|text: &str| text.parse::<u8>());
//!
//! assert_eq!(parse("200").map(u32::from).value_or(0), 200);
//! assert_eq!(parse("300").map(u32::from).value_or(0), 0);
//! ```

mod failure;
mod maybe;
mod result;

pub use failure::{Failure, Panicked, Unidentified};
pub use maybe::Maybe;
pub use result::Result;
