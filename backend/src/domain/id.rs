//! Nominally typed identifiers.
//!
//! [`Id`] wraps an opaque string with a type-level kind tag so an
//! identifier for one entity kind can never be passed where another kind
//! is expected; the mix-up becomes a compile error instead of a data bug.
//!
//! The conversion asymmetry is deliberate: rendering an identifier
//! outward (display, serialisation) is ergonomic, while reconstructing
//! one from plain text requires the named [`Id::from_string`] call so
//! every inward conversion is visible in review.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Marker for book identifiers.
#[derive(Debug)]
pub enum BookKind {}

/// Identifier of a persisted [`Book`](crate::domain::Book).
pub type BookId = Id<BookKind>;

/// Opaque string identifier tagged with the entity kind `K`.
///
/// # Examples
/// ```
/// use backend::domain::BookId;
///
/// let id = BookId::from_string("abc-123");
/// assert_eq!(id.to_string(), "abc-123");
/// ```
pub struct Id<K> {
    value: String,
    // `fn() -> K` keeps the wrapper Send + Sync regardless of the tag.
    _kind: PhantomData<fn() -> K>,
}

impl<K> Id<K> {
    /// Generate a fresh, globally unique identifier.
    ///
    /// Safe to call concurrently from multiple tasks; the generation
    /// source needs no external coordination.
    #[must_use]
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4().to_string(),
            _kind: PhantomData,
        }
    }

    /// Reconstruct an identifier from previously issued text.
    ///
    /// This is the only inward conversion from a plain string and it
    /// performs no format validation; callers own the decision to trust
    /// the source (storage, URL path segment).
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _kind: PhantomData,
        }
    }

    /// The wrapped opaque text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

// Manual impls: derives would put an unnecessary bound on the kind tag.

impl<K> Clone for Id<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Id<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for Id<K> {}

impl<K> Hash for Id<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K> fmt::Debug for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<K> fmt::Display for Id<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<K> From<Id<K>> for String {
    fn from(id: Id<K>) -> Self {
        id.value
    }
}

impl<K> Serialize for Id<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
