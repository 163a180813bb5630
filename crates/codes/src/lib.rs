//! Confirmation-code generation and validation.
//!
//! Every accepted submission is acknowledged with a confirmation code: an
//! opaque, human-shareable token the submitter can keep to reference the
//! submission later without exposing any personal data.
//!
//! To keep codes recognisable and transcribable, ShieldHer uses a *canonical*
//! code representation: `<prefix>-<year>-<suffix>`.
//!
//! This crate provides:
//! - A wrapper type ([`ConfirmationCode`]) that *guarantees* the canonical
//!   format once constructed.
//! - Generation of fresh codes with a uniformly random suffix.
//!
//! ## Canonical code form
//! - Prefix: `SH` for incident reports, `DON` for donations
//! - Year: four decimal digits (the UTC year of issue)
//! - Suffix: uppercase alphanumeric (`0-9`, `A-Z`); 6 characters for
//!   reports, 8 for donations
//! - Example: `SH-2026-K4QZ7A`, `DON-2026-9PFXQ2BM`
//!
//! Notes:
//! - Codes from external input (a lookup form, an API request) must be
//!   validated with [`ConfirmationCode::parse`] before use.
//! - Generation is collision-tolerant only statistically: no registry of
//!   issued codes is kept here. Uniqueness enforcement, if ever required,
//!   belongs to whatever stores the submissions.

mod service;

// Re-export public types
pub use service::{CodeKind, ConfirmationCode};

/// Error type for confirmation-code operations.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for confirmation-code operations.
pub type CodeResult<T> = Result<T, CodeError>;
