//! Deferred computations.
//!
//! Each type here wraps a shared callable and runs it only at an explicit
//! trigger point:
//!
//! - [`Delay`]: a suspended computation, executed by `run`
//! - [`Context`]: a computation waiting for a context, executed by `call`
//! - [`State`]: a state transition, executed by `run`
//!
//! # Note on Type Classes
//!
//! These types provide their own `map` and `bind` methods directly on the
//! type rather than implementing [`Functor`](crate::typeclass::Functor).
//! Holding an `Rc<dyn Fn>` requires `'static` bounds that the trait does
//! not carry. `Delay<T, T>` does implement
//! [`Semigroup`](crate::typeclass::Semigroup) and
//! [`Monoid`](crate::typeclass::Monoid).
//!
//! None of them is `Send` or `Sync`.
//!
//! # Examples
//!
//! ```rust
//! use kinder::effect::{Context, Delay, State};
//!
//! let delayed = Delay::new(|x: i32| x + 1).bind(|x| Delay::new(move |()| x * 2));
//! assert_eq!(delayed.run(20), 42);
//!
//! let greeting = Context::new(|name: &'static str| name.len())
//!     .pipe(Context::new(|length: usize| format!("{length} letters")));
//! assert_eq!(greeting.call("kinder"), "6 letters");
//!
//! let counter: State<u32, u32> = State::modify(|n: u32| n + 1).then(State::get());
//! assert_eq!(counter.run(41), (42, 42));
//! ```

mod context;
mod delay;
mod state;

pub use context::Context;
pub use delay::{Delay, DelayedFn};
pub use state::State;
