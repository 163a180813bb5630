//! # ShieldHer Core
//!
//! Core services for the ShieldHer support platform: a static catalog of
//! helplines, digital-literacy lessons, and support resources, plus the
//! anonymous-report and donation submission flows.
//!
//! This crate contains the two services the rendering layer calls:
//! - Catalog queries: filtering and id lookup over bundled, immutable
//!   content collections
//! - Submissions: validation, the per-submission state machine, and the
//!   swappable backend (deterministic mock or real HTTP client)
//!
//! **No UI concerns**: loading spinners, form state, routing, and
//! everything else presentational belong to the rendering layer, which
//! consumes these services and owns what the user sees.

pub mod catalog;
pub mod config;
pub mod error;
pub mod submission;

pub use config::{BackendChoice, CoreConfig};
pub use error::{CoreError, CoreResult};

// The confirmation-code types appear throughout the submission API;
// re-exported so callers need not depend on the codes crate directly.
pub use shieldher_codes::{CodeKind, ConfirmationCode};
