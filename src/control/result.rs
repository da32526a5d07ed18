//! Result - success with a value, or a captured failure.
//!
//! `Result<T>` is either [`Success`](Result::Success) holding a `T` or
//! [`Failed`](Result::Failed) holding a [`Failure`]. Errors are first-class
//! values: once captured they travel down the chain untouched until the
//! caller asks for them with [`value_or_throw`](Result::value_or_throw) or
//! [`into_std`](Result::into_std).
//!
//! Capturing happens in exactly three places: functions lifted with
//! [`Result::wraps`] (or run once with [`Result::attempt`]), continuations
//! passed to [`Result::bind`], and panics inside [`Result::catch_unwind`].
//!
//! # Short-circuit
//!
//! ```rust
//! use kinder::control::Result;
//! use std::num::ParseIntError;
//!
//! let parse = Result::wraps(|text: &str| text.parse::<i32>());
//!
//! let doubled = parse("21").bind(|x| x.checked_mul(2).ok_or(std::fmt::Error));
//! assert_eq!(doubled, Result::success(42));
//!
//! let failed = parse("twenty-one").map(|x| x * 2);
//! assert!(failed.failure().is_some_and(|f| f.is::<ParseIntError>()));
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::failure::{Failure, Panicked, Unidentified};
use crate::typeclass::{Functor, Monoid, Semigroup, TypeConstructor};

type StdResult<T, E> = std::result::Result<T, E>;

/// Success with a value, or a captured failure.
///
/// Two `Failed` values are equal when their failures have the same kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Result<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the error is kept as data.
    Failed(Failure),
}

fn capture<E>(error: E) -> Failure
where
    E: Into<Failure>,
{
    let failure = error.into();
    tracing::trace!(kind = failure.kind_name(), error = %failure, "captured failure");
    failure
}

impl<T> Result<T> {
    /// Wraps a successful value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error (or an already captured [`Failure`]).
    #[inline]
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Failure>,
    {
        Self::Failed(error.into())
    }

    /// Runs `function` now, capturing its error.
    pub fn attempt<E, F>(function: F) -> Self
    where
        F: FnOnce() -> StdResult<T, E>,
        E: Into<Failure>,
    {
        match function() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed(capture(error)),
        }
    }

    /// Lifts a fallible function into one returning `Result`.
    ///
    /// Several parameters are passed as a tuple.
    ///
    /// ```rust
    /// use kinder::control::Result;
    ///
    /// let divide = Result::wraps(|(a, b): (i32, i32)| {
    ///     a.checked_div(b).ok_or(std::fmt::Error)
    /// });
    /// assert_eq!(divide((6, 3)), Result::success(2));
    /// assert!(divide((6, 0)).is_failed());
    /// ```
    pub fn wraps<P, E, F>(function: F) -> impl Fn(P) -> Self
    where
        F: Fn(P) -> StdResult<T, E>,
        E: Into<Failure>,
    {
        move |arguments| Self::attempt(|| function(arguments))
    }

    /// Runs `function` now, turning a panic into a [`Panicked`] failure.
    ///
    /// ```rust
    /// use kinder::control::{Panicked, Result};
    ///
    /// let result: Result<i32> = Result::catch_unwind(|| panic!("boom"));
    /// let failure = result.failure().unwrap();
    /// assert_eq!(failure.downcast_ref::<Panicked>().unwrap().message, "boom");
    /// ```
    pub fn catch_unwind<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|message| (*message).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "Unknown panic".to_string());
                tracing::debug!(%message, "Result::catch_unwind captured a panic");
                Self::Failed(Failure::new(Panicked { message }))
            }
        }
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failed`.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the value of a `Success`.
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure of a `Failed`.
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    /// Converts into a standard library result.
    pub fn into_std(self) -> StdResult<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(failure) => Err(failure),
        }
    }

    /// Chains a fallible continuation.
    ///
    /// On `Success`, `function` runs: `Ok` becomes `Success`, `Err` becomes
    /// `Failed`. On `Failed`, `function` is skipped and the same failure is
    /// returned.
    ///
    /// A continuation returning `Ok(Result<..>)` nests; use
    /// [`flat_bind`](Result::flat_bind) to flatten instead.
    pub fn bind<N, E, F>(self, function: F) -> Result<N>
    where
        F: FnOnce(T) -> StdResult<N, E>,
        E: Into<Failure>,
    {
        match self {
            Self::Success(value) => Result::attempt(|| function(value)),
            Self::Failed(failure) => Result::Failed(failure),
        }
    }

    /// Transforms the value of a `Success`.
    pub fn map<N, F>(self, function: F) -> Result<N>
    where
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failed(failure) => Result::Failed(failure),
        }
    }

    /// Chains a continuation that already returns a `Result`, without
    /// re-wrapping it.
    ///
    /// ```rust
    /// use kinder::control::Result;
    /// use std::num::ParseIntError;
    ///
    /// let parse = Result::wraps(|text: &str| text.parse::<i32>());
    /// let chained = Result::success("7").flat_bind(&parse);
    /// assert_eq!(chained, Result::success(7));
    ///
    /// let failed = Result::success("seven").flat_bind(&parse);
    /// assert!(failed.failure().unwrap().is::<ParseIntError>());
    /// ```
    pub fn flat_bind<N, F>(self, function: F) -> Result<N>
    where
        F: FnOnce(T) -> Result<N>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failed(failure) => Result::Failed(failure),
        }
    }

    /// Returns the value of a `Success`, `fallback` otherwise.
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failed(_) => fallback,
        }
    }

    /// Returns the value of a `Success`, otherwise the value produced by
    /// `producer`. `producer` is not called on `Success`.
    pub fn value_or_get<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failed(_) => producer(),
        }
    }

    /// Returns the value of a `Success`, `Err(error)` otherwise.
    pub fn value_or_throw<E>(self, error: E) -> StdResult<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(_) => Err(error),
        }
    }

    /// Like [`Result::value_or_throw`], with the error built from its kind.
    pub fn value_or_throw_default<E>(self) -> StdResult<T, E>
    where
        E: Default,
    {
        self.value_or_throw_with(E::default)
    }

    /// Like [`Result::value_or_throw`], with the error built by `factory`
    /// only when needed.
    pub fn value_or_throw_with<E, F>(self, factory: F) -> StdResult<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(_) => Err(factory()),
        }
    }

    /// Combines two successes with `operator`.
    ///
    /// If either side failed the result is the identity, a `Failed` of kind
    /// [`Unidentified`]; the original failures are dropped.
    pub fn combined<B, C, F>(self, other: Result<B>, operator: F) -> Result<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(left), Result::Success(right)) => Result::Success(operator(left, right)),
            _ => Result::Failed(Failure::new(Unidentified)),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T>
where
    E: Into<Failure>,
{
    fn from(result: StdResult<T, E>) -> Self {
        Self::attempt(|| result)
    }
}

impl<T> From<Result<T>> for StdResult<T, Failure> {
    fn from(result: Result<T>) -> Self {
        result.into_std()
    }
}

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failed(failure) => write!(formatter, "Failed({failure})"),
        }
    }
}

impl<T> TypeConstructor for Result<T> {
    type Inner = T;
    type WithType<B> = Result<B>;
}

impl<T> Functor for Result<T> {
    fn fmap<B, F>(self, function: F) -> Result<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Result<B>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failed(failure) => Result::Failed(failure.clone()),
        }
    }
}

impl<T> Semigroup for Result<T> {
    type Payload = T;

    fn combined<F>(self, other: Self, operator: F) -> Self
    where
        F: FnOnce(T, T) -> T,
    {
        Self::combined(self, other, operator)
    }
}

impl<T> Monoid for Result<T> {
    fn identity() -> Self {
        Self::Failed(Failure::new(Unidentified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::num::ParseIntError;

    #[derive(Debug, thiserror::Error)]
    #[error("import failed")]
    struct ImportError;

    #[derive(Debug, thiserror::Error)]
    #[error("division by zero")]
    struct ZeroDivisionError;

    #[rstest]
    fn attempt_captures_ok_as_success() {
        let result = Result::attempt(|| Ok::<_, ImportError>(1));
        assert_eq!(result, Result::Success(1));
    }

    #[rstest]
    fn attempt_captures_err_as_failed() {
        let result: Result<i32> = Result::attempt(|| Err(ImportError));
        assert!(matches!(result, Result::Failed(ref failure) if failure.is::<ImportError>()));
    }

    #[rstest]
    fn bind_on_failed_skips_continuation() {
        let called = Cell::new(false);
        let result = Result::<i32>::failed(ImportError).bind(|x| {
            called.set(true);
            Ok::<_, ZeroDivisionError>(x + 1)
        });
        assert!(!called.get());
        assert_eq!(result, Result::failed(ImportError));
    }

    #[rstest]
    fn bind_keeps_the_original_failure_kind() {
        let result = Result::<i32>::failed(ImportError).bind(|_| Err::<i32, _>(ZeroDivisionError));
        assert!(result.failure().unwrap().is::<ImportError>());
    }

    #[rstest]
    fn bind_converts_continuation_error() {
        let result = Result::success("x").bind(str::parse::<i32>);
        assert!(result.failure().unwrap().is::<ParseIntError>());
    }

    #[rstest]
    fn bind_returning_result_nests() {
        let nested = Result::success(1).bind(|_| Ok::<_, ImportError>(Result::success(1)));
        assert_eq!(nested, Result::success(Result::success(1)));
    }

    #[rstest]
    fn value_or_get_is_lazy_on_success() {
        assert_eq!(Result::success(1).value_or_get(|| panic!("must not run")), 1);
    }

    #[rstest]
    fn value_or_throw_returns_the_given_error() {
        let result: Result<i32> = Result::failed(ImportError);
        let thrown = result.value_or_throw("replacement");
        assert_eq!(thrown, Err("replacement"));
    }

    #[rstest]
    fn value_or_throw_default_builds_error_kind() {
        let result: Result<i32> = Result::failed(ImportError);
        assert_eq!(result.value_or_throw_default::<Unidentified>(), Err(Unidentified));
        assert_eq!(Result::success(2).value_or_throw_default::<Unidentified>(), Ok(2));
    }

    #[rstest]
    fn catch_unwind_passes_values_through() {
        assert_eq!(Result::catch_unwind(|| 3), Result::success(3));
    }

    #[rstest]
    fn catch_unwind_captures_formatted_panic_message() {
        let code = 7;
        let result: Result<()> = Result::catch_unwind(|| panic!("code {code}"));
        let panicked = result.failure().unwrap().downcast_ref::<Panicked>().unwrap();
        assert_eq!(panicked.message, "code 7");
    }

    #[rstest]
    fn combined_with_failure_yields_identity() {
        let combined = Result::success(2).combined(Result::<i32>::failed(ImportError), |a, b| a * b);
        assert_eq!(combined, Result::identity());
        assert!(combined.failure().unwrap().is::<Unidentified>());
    }

    #[rstest]
    fn converts_from_and_into_std() {
        let parsed: Result<i32> = "12".parse::<i32>().into();
        assert_eq!(parsed, Result::success(12));
        let back: StdResult<i32, Failure> = parsed.into();
        assert_eq!(back.ok(), Some(12));
    }

    #[rstest]
    fn display_formats_both_variants() {
        assert_eq!(Result::success(1).to_string(), "Success(1)");
        assert_eq!(
            Result::<i32>::failed(ZeroDivisionError).to_string(),
            "Failed(division by zero)"
        );
    }

    #[rstest]
    fn fmap_ref_clones_failure() {
        let failed: Result<i32> = Result::failed(ImportError);
        let mapped = failed.fmap_ref(|x| x + 1);
        assert_eq!(mapped, failed);
    }
}
