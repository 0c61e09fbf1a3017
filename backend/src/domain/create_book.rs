//! Create-book input types and the validation gate.
//!
//! [`CreateBook`] is the unstructured boundary shape and carries no
//! invariants. [`ValidCreateBook`] is the domain-safe shape: its fields
//! are private and the struct literal is only reachable inside this
//! module, so [`ValidCreateBook::from_input`] is the sole way to obtain
//! an instance. Code that accepts a `ValidCreateBook` can rely on the
//! checks having run; there is no `is_valid` flag to forget.

use serde::{Deserialize, Serialize};

use crate::domain::{Error, ErrorCode, Outcome};

/// Raw create-book input received from the outside world.
///
/// May contain missing, blank, or out-of-range values; it exists only to
/// be handed to [`ValidCreateBook::from_input`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBook {
    /// Book title as supplied by the caller.
    pub name: String,
    /// Author as supplied by the caller.
    pub author: String,
    /// Publication year as supplied by the caller.
    pub year: i32,
}

/// Create-book input with all field invariants enforced.
///
/// ## Invariants
/// - `name` and `author` are non-blank.
/// - `year >= 1`.
/// - Field values equal the raw input exactly; validation never trims or
///   otherwise transforms what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCreateBook {
    name: String,
    author: String,
    year: i32,
}

impl ValidCreateBook {
    /// Validate raw input, collecting one error per violated rule.
    ///
    /// Every rule is evaluated against the same input with no
    /// short-circuiting, so the caller receives the complete set of
    /// problems in field-declaration order in one round trip. The
    /// function is pure: equal inputs yield equal outcomes.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CreateBook, Outcome, ValidCreateBook};
    ///
    /// let outcome = ValidCreateBook::from_input(CreateBook {
    ///     name: "Dune".into(),
    ///     author: "Herbert".into(),
    ///     year: 1965,
    /// });
    /// assert!(outcome.is_success());
    /// ```
    pub fn from_input(input: CreateBook) -> Outcome<Self> {
        let mut errors = Vec::new();

        if input.name.trim().is_empty() {
            errors.push(Error::new(ErrorCode::NameIsRequired));
        }
        if input.author.trim().is_empty() {
            errors.push(Error::new(ErrorCode::AuthorIsRequired));
        }
        if input.year < 1 {
            errors.push(Error::new(ErrorCode::YearIsRequired));
        }

        if errors.is_empty() {
            Outcome::success(Self {
                name: input.name,
                author: input.author,
                year: input.year,
            })
        } else {
            Outcome::failure(errors)
        }
    }

    /// Validated book title.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validated author.
    #[must_use]
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Validated publication year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Decompose into owned field values for entity construction.
    pub(crate) fn into_fields(self) -> (String, String, i32) {
        (self.name, self.author, self.year)
    }
}
