//! Two-variant outcome type used in place of exceptions for expected
//! failure paths.
//!
//! Fallible domain operations return an [`Outcome`] so callers are forced
//! into exhaustive case analysis: there is no third state and no default
//! value extraction that silently papers over a failure. Collaborator
//! faults (e.g. persistence errors) travel on a separate `Result` channel
//! and are not represented here.

use crate::domain::Error;

/// Result of a fallible domain operation.
///
/// ## Invariants
/// - A `Failure` always carries at least one [`Error`]; a failure must
///   explain itself.
/// - Values are immutable after construction.
///
/// # Examples
/// ```
/// use backend::domain::Outcome;
///
/// let outcome = Outcome::success(42);
/// match outcome {
///     Outcome::Success(value) => assert_eq!(value, 42),
///     Outcome::Failure(errors) => panic!("unexpected failure: {errors:?}"),
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation worked and produced a value.
    Success(T),
    /// The operation failed; the errors describe every violated rule in
    /// a stable order.
    Failure(Vec<Error>),
}

impl<T> Outcome<T> {
    /// Wrap a value in the success variant.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a non-empty error list in the failure variant.
    ///
    /// # Panics
    /// Panics when `errors` is empty. An unexplained failure indicates a
    /// broken invariant in the caller, not bad user input, so it aborts
    /// loudly instead of being reported as a recoverable error.
    pub fn failure(errors: Vec<Error>) -> Self {
        assert!(
            !errors.is_empty(),
            "failure outcomes must carry at least one error"
        );
        Self::Failure(errors)
    }

    /// Re-wrap a failure under a different success type parameter.
    ///
    /// Used when propagating a failure out of one operation into a
    /// differently typed caller without fabricating a value.
    ///
    /// # Panics
    /// Panics when called on a success: there is no value of the target
    /// type to produce, so casting a success is a programming error.
    pub fn cast<U>(self) -> Outcome<U> {
        match self {
            Self::Success(_) => panic!("success outcomes cannot be cast to another type"),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Whether this outcome is the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this outcome is the failure variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
