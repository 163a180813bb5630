//! The submission service.
//!
//! Handles the two write paths of the platform: anonymous incident
//! reports and donations. Submission is modelled as a remote, network-
//! bound asynchronous operation behind the [`SubmissionBackend`]
//! capability, with the deterministic [`MockBackend`] standing in until
//! the platform API is reachable and [`RemoteBackend`] speaking to it
//! once it is. The [`SubmissionService`] drives validation, the
//! per-submission state machine, and backend dispatch.

pub mod backend;
pub mod payload;
pub mod receipt;
pub mod remote;
pub mod service;

pub use backend::{MockBackend, MockLatency, SubmissionBackend};
pub use payload::{
    Donation, EvidenceLinks, IncidentReport, IncidentType, SubmissionPayload,
    DEFAULT_CURRENCY, MAX_DESCRIPTION_CHARS, MAX_PLATFORM_CONTEXT_CHARS,
};
pub use receipt::{DonationReceipt, DonationStatus, ReportReceipt, SubmissionReceipt};
pub use remote::RemoteBackend;
pub use service::{SubmissionPhase, SubmissionService};
