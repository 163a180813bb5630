//! The core failure taxonomy.
//!
//! Every failure the core hands to the rendering layer is classified into
//! one of three variants. The rendering layer maps them onto UI states:
//! `Validation` becomes field-level form feedback, `NotFound` becomes an
//! empty/"not found" view, and `Unexpected` becomes a generic failure
//! banner. The core never raises an unclassified error.
//!
//! Error display strings carry field names and shape information only.
//! User-entered content (incident descriptions, evidence links, donation
//! messages) is never embedded in an error or logged while handling one.

/// Errors produced by the catalog and submission services.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The submitted payload failed shape validation. Recoverable; the
    /// field name tells the form which input to highlight.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The payload field that failed validation.
        field: &'static str,
        /// Why the field was rejected.
        message: String,
    },

    /// A lookup matched nothing. Recoverable; surfaced as an empty state,
    /// not a fatal error.
    #[error("{entity} not found")]
    NotFound {
        /// What was being looked up ("lesson", "donation", ...).
        entity: &'static str,
    },

    /// A collaborator failed in a way the core cannot classify further
    /// (transport failure, malformed remote response).
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl CoreError {
    /// Creates a `Validation` error for the given field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a `NotFound` error for the given entity.
    pub fn not_found(entity: &'static str) -> Self {
        CoreError::NotFound { entity }
    }

    /// Creates an `Unexpected` error with the given description.
    pub fn unexpected(message: impl Into<String>) -> Self {
        CoreError::Unexpected(message.into())
    }

    /// Returns true if this error is recoverable user-input feedback
    /// rather than a collaborator failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::Validation { .. } | CoreError::NotFound { .. }
        )
    }
}

/// Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
