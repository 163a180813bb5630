//! The submission service and its per-submission state machine.
//!
//! Every submission moves through the same lifecycle:
//!
//! ```text
//! Idle -> Validating -> Rejected            (shape validation failed)
//!                    -> Pending -> Completed (backend accepted)
//!                               -> Failed    (backend failed)
//! ```
//!
//! `Rejected`, `Completed`, and `Failed` are terminal; there is no
//! retry-in-place. A fresh submission is a fresh instance of the machine.
//! The service drives one machine per call and returns exactly one
//! outcome, so the rendering layer clears its loading indicator exactly
//! once per submission regardless of how the call ends.
//!
//! Phase transitions are logged at debug level with the payload kind
//! only; user-entered content never reaches the log stream.

use std::sync::Arc;

use shieldher_codes::ConfirmationCode;

use crate::error::{CoreError, CoreResult};
use crate::submission::backend::SubmissionBackend;
use crate::submission::payload::{Donation, IncidentReport, SubmissionPayload};
use crate::submission::receipt::{DonationReceipt, ReportReceipt, SubmissionReceipt};

/// Lifecycle phase of a single submission.
///
/// Exposed so the rendering layer can mirror its loading/error/success
/// states onto the same vocabulary the service logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// No submission underway.
    Idle,
    /// Shape validation in progress.
    Validating,
    /// Validation failed; terminal.
    Rejected,
    /// In flight (the simulated or real round trip); shown as loading.
    Pending,
    /// Accepted with a receipt; terminal.
    Completed,
    /// The backend failed; terminal.
    Failed,
}

/// Submits payloads through the configured backend.
///
/// Cheap to clone; clones share the backend. Concurrent submissions are
/// independent: each drives its own state machine over its own payload,
/// and no state is shared between in-flight calls.
#[derive(Clone)]
pub struct SubmissionService {
    backend: Arc<dyn SubmissionBackend>,
}

impl SubmissionService {
    /// Creates a service over the given backend.
    ///
    /// Most callers obtain the backend from
    /// [`CoreConfig::build_backend`](crate::config::CoreConfig::build_backend)
    /// rather than constructing one directly.
    pub fn new(backend: Arc<dyn SubmissionBackend>) -> Self {
        Self { backend }
    }

    /// Validates and submits a payload, driving the full state machine.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the payload is rejected (the
    /// backend is never contacted), or whatever classified error the
    /// backend produced in flight.
    pub async fn submit(&self, payload: SubmissionPayload) -> CoreResult<SubmissionReceipt> {
        let kind = payload.kind();
        tracing::debug!(kind, phase = ?SubmissionPhase::Validating, "submission started");

        if let Err(err) = payload.validate() {
            tracing::debug!(kind, phase = ?SubmissionPhase::Rejected, "submission rejected");
            return Err(err);
        }

        tracing::debug!(kind, phase = ?SubmissionPhase::Pending, "submission in flight");
        match self.backend.submit(payload).await {
            Ok(receipt) => {
                tracing::debug!(kind, phase = ?SubmissionPhase::Completed, "submission completed");
                Ok(receipt)
            }
            Err(err) => {
                tracing::debug!(kind, phase = ?SubmissionPhase::Failed, "submission failed");
                Err(err)
            }
        }
    }

    /// Submits an incident report.
    ///
    /// Convenience wrapper over [`submit`](Self::submit) returning the
    /// concrete receipt type.
    pub async fn submit_report(&self, report: IncidentReport) -> CoreResult<ReportReceipt> {
        match self.submit(SubmissionPayload::Report(report)).await? {
            SubmissionReceipt::Report(receipt) => Ok(receipt),
            // A backend that answers a report with a donation receipt is
            // broken; classify rather than panic.
            SubmissionReceipt::Donation(_) => Err(CoreError::unexpected(
                "backend returned a donation receipt for a report",
            )),
        }
    }

    /// Submits a donation.
    ///
    /// Convenience wrapper over [`submit`](Self::submit) returning the
    /// concrete receipt type.
    pub async fn submit_donation(&self, donation: Donation) -> CoreResult<DonationReceipt> {
        match self.submit(SubmissionPayload::Donation(donation)).await? {
            SubmissionReceipt::Donation(receipt) => Ok(receipt),
            SubmissionReceipt::Report(_) => Err(CoreError::unexpected(
                "backend returned a report receipt for a donation",
            )),
        }
    }

    /// Looks up a previously submitted donation by confirmation code.
    ///
    /// The code arrives as user input (a lookup form), so it is parsed
    /// here; a malformed code is a `Validation` error before any backend
    /// contact.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] for a malformed code,
    /// [`CoreError::NotFound`] when the backend has no such donation.
    pub async fn find_donation(&self, code: &str) -> CoreResult<DonationReceipt> {
        let code = ConfirmationCode::parse(code.trim())
            .map_err(|e| CoreError::validation("confirmation_code", e.to_string()))?;

        self.backend.find_donation(&code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::backend::{MockBackend, MockLatency};
    use crate::submission::payload::{EvidenceLinks, IncidentType};
    use shieldher_codes::CodeKind;

    fn service() -> SubmissionService {
        SubmissionService::new(Arc::new(MockBackend::with_latency(MockLatency::none())))
    }

    fn sample_report() -> IncidentReport {
        IncidentReport {
            incident_type: IncidentType::Harassment,
            description: "Group chat used to coordinate harassment".into(),
            occurred_at: None,
            platform_context: None,
            evidence_links: EvidenceLinks::new(),
            consent_for_followup: false,
        }
    }

    #[tokio::test]
    async fn test_submit_report_returns_concrete_receipt() {
        let receipt = service().submit_report(sample_report()).await.unwrap();
        assert_eq!(receipt.confirmation_code.kind(), CodeKind::Report);
    }

    #[tokio::test]
    async fn test_submit_donation_returns_concrete_receipt() {
        let receipt = service()
            .submit_donation(Donation {
                amount: 25.5,
                currency: "USD".into(),
                message: None,
            })
            .await
            .unwrap();

        assert_eq!(receipt.amount, "25.50");
        assert_eq!(receipt.confirmation_code.kind(), CodeKind::Donation);
    }

    #[tokio::test]
    async fn test_rejected_submission_reports_the_field() {
        let mut report = sample_report();
        report.description = "".into();

        let err = service().submit_report(report).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                field: "description",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_every_submission_ends_in_exactly_one_outcome() {
        // The caller contract: one call, one terminal result, so loading
        // state is cleared exactly once whichever way the machine exits.
        let service = service();

        let ok = service.submit_report(sample_report()).await;
        assert!(ok.is_ok());

        let mut bad = sample_report();
        bad.description = " ".into();
        let rejected = service.submit_report(bad).await;
        assert!(rejected.is_err());
    }

    #[tokio::test]
    async fn test_find_donation_rejects_malformed_codes() {
        let err = service().find_donation("not-a-code").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                field: "confirmation_code",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_find_donation_tolerates_surrounding_whitespace() {
        let receipt = service()
            .find_donation("  DON-2026-A1B2C3D4  ")
            .await
            .unwrap();
        assert_eq!(
            receipt.confirmation_code.to_string(),
            "DON-2026-A1B2C3D4"
        );
    }
}
