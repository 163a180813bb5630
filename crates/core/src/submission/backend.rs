//! The submission backend capability and its deterministic mock.
//!
//! [`SubmissionBackend`] is the seam between the core and whatever
//! ultimately processes submissions. Two implementations exist:
//!
//! - [`MockBackend`] (this module): a deterministic fake that models a
//!   remote round trip with a single timed suspension and then fabricates
//!   the receipt locally. It never fails after validation, because there
//!   is nothing behind it to fail.
//! - [`RemoteBackend`](crate::submission::remote::RemoteBackend): the
//!   real HTTP client.
//!
//! Which one runs is decided by [`CoreConfig`](crate::config::CoreConfig)
//! at startup, never by code changes. Both validate payloads before
//! "sending", so a backend can always assume its wire bodies are
//! well-shaped.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use shieldher_codes::{CodeKind, ConfirmationCode};
use uuid::Uuid;

use crate::error::CoreResult;
use crate::submission::payload::{NormalisedDonation, NormalisedReport, SubmissionPayload};
use crate::submission::receipt::{
    DonationReceipt, DonationStatus, ReportReceipt, SubmissionReceipt,
};

/// The capability of submitting payloads and looking up donations.
///
/// Implementations are shared behind `Arc<dyn SubmissionBackend>`;
/// concurrent calls are independent (each owns its input and builds its
/// own result), so no interior synchronisation is required. Cancellation
/// is dropping the returned future: no external handle is held, nothing
/// leaks.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Validates and submits a payload, returning the matching receipt.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`](crate::CoreError::Validation) when the
    /// payload fails shape validation (before any send), or
    /// [`CoreError::Unexpected`](crate::CoreError::Unexpected) when the
    /// backend itself fails.
    async fn submit(&self, payload: SubmissionPayload) -> CoreResult<SubmissionReceipt>;

    /// Looks up a previously submitted donation by its confirmation code.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`](crate::CoreError::NotFound) when no
    /// donation carries the code.
    async fn find_donation(&self, code: &ConfirmationCode) -> CoreResult<DonationReceipt>;
}

/// Simulated round-trip latency for the mock backend.
///
/// The defaults reproduce the delays users saw against the staging
/// environment, so demo loading states feel realistic. Tests override
/// them with [`MockLatency::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLatency {
    pub report: Duration,
    pub donation: Duration,
    pub lookup: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            report: Duration::from_millis(1000),
            donation: Duration::from_millis(1500),
            lookup: Duration::from_millis(800),
        }
    }
}

impl MockLatency {
    /// Zero latency everywhere; submissions resolve immediately.
    pub fn none() -> Self {
        Self {
            report: Duration::ZERO,
            donation: Duration::ZERO,
            lookup: Duration::ZERO,
        }
    }
}

/// The deterministic fake backend.
///
/// Suspends for its configured latency (a plain `tokio::time::sleep`, so
/// nothing else on the runtime is blocked), then fabricates a receipt.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    latency: MockLatency,
}

impl MockBackend {
    /// Creates a mock backend with the default latency profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock backend with an explicit latency profile.
    pub fn with_latency(latency: MockLatency) -> Self {
        Self { latency }
    }

    fn report_receipt(&self, report: NormalisedReport) -> ReportReceipt {
        ReportReceipt {
            id: Uuid::new_v4(),
            confirmation_code: ConfirmationCode::generate(CodeKind::Report),
            incident_type: report.incident_type,
            evidence_links: report.evidence_links,
            consent_for_followup: report.consent_for_followup,
            submitted_at: Utc::now(),
        }
    }

    fn donation_receipt(&self, donation: NormalisedDonation) -> DonationReceipt {
        DonationReceipt {
            id: Uuid::new_v4(),
            confirmation_code: ConfirmationCode::generate(CodeKind::Donation),
            amount: donation.formatted_amount(),
            currency: donation.currency,
            status: DonationStatus::Completed,
            message: donation.message.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl SubmissionBackend for MockBackend {
    async fn submit(&self, payload: SubmissionPayload) -> CoreResult<SubmissionReceipt> {
        match payload {
            SubmissionPayload::Report(report) => {
                // Validate before modelling the round trip: rejected
                // payloads never see the latency window.
                let normalised = report.normalised()?;
                tokio::time::sleep(self.latency.report).await;

                let receipt = self.report_receipt(normalised);
                tracing::debug!(
                    code = %receipt.confirmation_code,
                    links = receipt.evidence_links.len(),
                    "mock report accepted"
                );
                Ok(SubmissionReceipt::Report(receipt))
            }
            SubmissionPayload::Donation(donation) => {
                let normalised = donation.normalised()?;
                tokio::time::sleep(self.latency.donation).await;

                let receipt = self.donation_receipt(normalised);
                tracing::debug!(code = %receipt.confirmation_code, "mock donation accepted");
                Ok(SubmissionReceipt::Donation(receipt))
            }
        }
    }

    async fn find_donation(&self, code: &ConfirmationCode) -> CoreResult<DonationReceipt> {
        tokio::time::sleep(self.latency.lookup).await;

        // The mock has no store to miss in; it fabricates a plausible
        // settled donation for whatever code it is asked about.
        Ok(DonationReceipt {
            id: Uuid::new_v4(),
            confirmation_code: code.clone(),
            amount: "50.00".into(),
            currency: "USD".into(),
            status: DonationStatus::Completed,
            message: "Thank you for supporting ShieldHer!".into(),
            created_at: Utc::now(),
        })
    }
}
