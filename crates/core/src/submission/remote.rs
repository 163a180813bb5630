//! The real submission backend.
//!
//! [`RemoteBackend`] speaks to the platform API over HTTPS, implementing
//! the same [`SubmissionBackend`] capability as the mock. Payloads are
//! validated locally before anything is sent, so the wire only ever
//! carries well-shaped bodies; server-side validation remains the API's
//! own concern.
//!
//! Endpoints:
//! - `POST {base}/api/reports/` with a report body, returning a report
//!   receipt.
//! - `POST {base}/api/donations/` with a donation body, returning an
//!   envelope around the donation receipt.
//! - `GET {base}/api/donations/{code}/` returning a donation receipt.
//!
//! Failures are classified, never passed through raw: a 404 on lookup is
//! the recoverable `NotFound`, anything else (transport errors, non-2xx
//! statuses, malformed bodies) is `Unexpected`. Error text carries the
//! status and endpoint, not the payload.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use shieldher_codes::ConfirmationCode;

use crate::error::{CoreError, CoreResult};
use crate::submission::backend::SubmissionBackend;
use crate::submission::payload::{NormalisedDonation, NormalisedReport, SubmissionPayload};
use crate::submission::receipt::{DonationReceipt, ReportReceipt, SubmissionReceipt};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("shieldher-core/", env!("CARGO_PKG_VERSION"));

/// Wire body for `POST /api/reports/`.
///
/// Field names match the platform API, which predates this crate; the
/// occurrence time travels as `timestamp` and the platform/context as
/// `location_free_text`.
#[derive(Debug, Serialize)]
struct ReportBody<'a> {
    incident_type: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location_free_text: Option<&'a str>,
    evidence_links: &'a [String],
    consent_for_followup: bool,
}

impl<'a> ReportBody<'a> {
    fn from_normalised(report: &'a NormalisedReport) -> Self {
        Self {
            incident_type: report.incident_type.as_str(),
            description: report.description.as_str(),
            timestamp: report.occurred_at,
            location_free_text: report.platform_context.as_ref().map(|c| c.as_str()),
            evidence_links: &report.evidence_links,
            consent_for_followup: report.consent_for_followup,
        }
    }
}

/// Wire body for `POST /api/donations/`.
#[derive(Debug, Serialize)]
struct DonationBody<'a> {
    amount: f64,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<'a> DonationBody<'a> {
    fn from_normalised(donation: &'a NormalisedDonation) -> Self {
        Self {
            amount: donation.amount,
            currency: &donation.currency,
            message: donation.message.as_deref(),
        }
    }
}

/// The donation endpoint wraps its receipt in an envelope.
#[derive(Debug, Deserialize)]
struct DonationEnvelope {
    donation: DonationReceipt,
}

/// HTTP implementation of [`SubmissionBackend`].
#[derive(Debug)]
pub struct RemoteBackend {
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl RemoteBackend {
    /// Creates a backend targeting the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin (and optional path prefix) of the platform
    ///   API, e.g. `https://api.example.org`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the URL does not parse or
    /// uses a scheme other than `http`/`https`, and
    /// [`CoreError::Unexpected`] when the HTTP client cannot be built.
    pub fn new(base_url: &str) -> CoreResult<Self> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| CoreError::validation("base_url", e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::validation(
                "base_url",
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| CoreError::unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// The configured API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Maps a transport-level failure. reqwest error text names the URL,
    /// never the request body.
    fn transport_error(context: &'static str, err: reqwest::Error) -> CoreError {
        CoreError::unexpected(format!("{context}: {err}"))
    }

    fn status_error(context: &'static str, status: StatusCode) -> CoreError {
        CoreError::unexpected(format!("{context}: server responded with {status}"))
    }
}

#[async_trait]
impl SubmissionBackend for RemoteBackend {
    async fn submit(&self, payload: SubmissionPayload) -> CoreResult<SubmissionReceipt> {
        match payload {
            SubmissionPayload::Report(report) => {
                let normalised = report.normalised()?;
                let body = ReportBody::from_normalised(&normalised);

                let response = self
                    .client
                    .post(self.endpoint("api/reports/"))
                    .json(&body)
                    .send()
                    .await
                    .map_err(|e| Self::transport_error("report submission failed", e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Self::status_error("report submission failed", status));
                }

                let receipt: ReportReceipt = response
                    .json()
                    .await
                    .map_err(|e| Self::transport_error("malformed report receipt", e))?;
                tracing::debug!(code = %receipt.confirmation_code, "report accepted");
                Ok(SubmissionReceipt::Report(receipt))
            }
            SubmissionPayload::Donation(donation) => {
                let normalised = donation.normalised()?;
                let body = DonationBody::from_normalised(&normalised);

                let response = self
                    .client
                    .post(self.endpoint("api/donations/"))
                    .json(&body)
                    .send()
                    .await
                    .map_err(|e| Self::transport_error("donation submission failed", e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Self::status_error("donation submission failed", status));
                }

                let envelope: DonationEnvelope = response
                    .json()
                    .await
                    .map_err(|e| Self::transport_error("malformed donation receipt", e))?;
                tracing::debug!(code = %envelope.donation.confirmation_code, "donation accepted");
                Ok(SubmissionReceipt::Donation(envelope.donation))
            }
        }
    }

    async fn find_donation(&self, code: &ConfirmationCode) -> CoreResult<DonationReceipt> {
        let response = self
            .client
            .get(self.endpoint(&format!("api/donations/{code}/")))
            .send()
            .await
            .map_err(|e| Self::transport_error("donation lookup failed", e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::not_found("donation"));
        }
        if !status.is_success() {
            return Err(Self::status_error("donation lookup failed", status));
        }

        response
            .json()
            .await
            .map_err(|e| Self::transport_error("malformed donation receipt", e))
    }
}
