//! Validation error values carried by failure outcomes.
//!
//! Errors are transport agnostic. Inbound adapters serialise them into
//! whatever envelope the protocol requires; clients branch on `code`,
//! never on `message`.

use serde::Serialize;

/// Stable machine-readable code for a violated validation rule.
///
/// Codes serialise to fixed snake_case tokens so clients can translate
/// them; the enum is closed, so producer and consumer share the same
/// set by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The book name was missing or blank.
    NameIsRequired,
    /// The author was missing or blank.
    AuthorIsRequired,
    /// The publication year was missing or below 1.
    YearIsRequired,
}

impl ErrorCode {
    /// Default human-readable message for untranslated clients.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::NameIsRequired => "Name is required.",
            Self::AuthorIsRequired => "Author is required.",
            Self::YearIsRequired => "Year is required.",
        }
    }
}

/// A single validation failure: a stable code plus a fallback message.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NameIsRequired);
/// assert_eq!(err.code(), ErrorCode::NameIsRequired);
/// assert_eq!(err.message(), "Name is required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Build an error carrying the code's default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_owned(),
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable fallback message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
