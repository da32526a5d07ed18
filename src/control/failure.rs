//! Captured errors carried by [`Result::Failed`](super::Result::Failed).
//!
//! A [`Failure`] owns a type-erased error together with the *kind* of the
//! error that produced it (its concrete type). Two failures are equal when
//! their kinds match, whatever their messages say.
//!
//! `Failure` does not implement [`std::error::Error`] itself. Any
//! `E: Error + Send + Sync + 'static` converts into a `Failure` with `?` or
//! `.into()`.

use std::any::TypeId;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A captured error, compared by kind.
///
/// # Examples
///
/// ```rust
/// use kinder::control::Failure;
/// use std::num::ParseIntError;
///
/// let first: Failure = "x".parse::<i32>().unwrap_err().into();
/// let second: Failure = "".parse::<i32>().unwrap_err().into();
///
/// // Different messages, same kind.
/// assert_ne!(first.to_string(), second.to_string());
/// assert_eq!(first, second);
/// assert!(first.is::<ParseIntError>());
/// ```
#[derive(Clone)]
pub struct Failure {
    kind: TypeId,
    kind_name: &'static str,
    error: Arc<dyn Error + Send + Sync + 'static>,
}

impl Failure {
    /// Captures `error`, remembering its concrete type as the kind.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: TypeId::of::<E>(),
            kind_name: std::any::type_name::<E>(),
            error: Arc::new(error),
        }
    }

    /// Returns the type name of the captured error.
    pub const fn kind_name(&self) -> &'static str {
        self.kind_name
    }

    /// Returns `true` if the captured error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.kind == TypeId::of::<E>()
    }

    /// Returns `true` if both failures captured the same kind of error.
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    /// Returns a reference to the captured error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Returns the captured error as a trait object.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.same_kind(other)
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.error)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Failure")
            .field("kind", &self.kind_name)
            .field("error", &self.error)
            .finish()
    }
}

/// The kind carried by [`Result::identity`](crate::typeclass::Monoid::identity)
/// and by any `combined` that meets a failed side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unidentified failure")]
pub struct Unidentified;

/// A panic captured by [`Result::catch_unwind`](super::Result::catch_unwind).
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Panicked {
    /// The panic payload when it was a string, `"Unknown panic"` otherwise.
    pub message: String,
}
