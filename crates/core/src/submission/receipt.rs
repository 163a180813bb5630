//! Submission receipts.
//!
//! A receipt is what the rendering layer shows after a successful
//! submission: the confirmation code to save, plus echoed and derived
//! fields. Both backends return the same shapes; callers must not depend
//! on anything mock-specific.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shieldher_codes::ConfirmationCode;
use uuid::Uuid;

use crate::submission::payload::IncidentType;

/// Processing status of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    /// Accepted but not yet settled.
    Pending,
    /// Settled.
    Completed,
}

/// Acknowledgement of an accepted incident report.
///
/// Deliberately does not echo the description or platform context: the
/// reporter already has them, and a receipt that omits free text is safe
/// to display, store, or share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub id: Uuid,
    pub confirmation_code: ConfirmationCode,
    pub incident_type: IncidentType,
    /// The evidence links as actually submitted (blanks dropped).
    pub evidence_links: Vec<String>,
    pub consent_for_followup: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Acknowledgement of an accepted donation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub id: Uuid,
    pub confirmation_code: ConfirmationCode,
    /// The amount formatted to two decimal places (`"25.50"`).
    pub amount: String,
    pub currency: String,
    pub status: DonationStatus,
    /// The donor's message; empty when none was given.
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A receipt of either kind, matching [`SubmissionPayload`]'s variants.
///
/// [`SubmissionPayload`]: crate::submission::payload::SubmissionPayload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionReceipt {
    Report(ReportReceipt),
    Donation(DonationReceipt),
}

impl SubmissionReceipt {
    /// The confirmation code, independent of receipt kind.
    pub fn confirmation_code(&self) -> &ConfirmationCode {
        match self {
            SubmissionReceipt::Report(r) => &r.confirmation_code,
            SubmissionReceipt::Donation(d) => &d.confirmation_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_donation_receipt_serialises_with_wire_names() {
        let receipt = DonationReceipt {
            id: Uuid::nil(),
            confirmation_code: ConfirmationCode::parse("DON-2026-A1B2C3D4").unwrap(),
            amount: "25.50".into(),
            currency: "USD".into(),
            status: DonationStatus::Completed,
            message: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["confirmation_code"], "DON-2026-A1B2C3D4");
        assert_eq!(value["amount"], "25.50");
        assert_eq!(value["status"], "completed");
    }

    #[test]
    fn test_donation_receipt_message_defaults_when_absent() {
        // A remote body may omit the message entirely.
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "confirmation_code": "DON-2026-A1B2C3D4",
            "amount": "50.00",
            "currency": "USD",
            "status": "completed",
            "created_at": "2026-08-06T12:00:00Z"
        }"#;

        let receipt: DonationReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.message, "");
    }

    #[test]
    fn test_submission_receipt_exposes_code_for_both_kinds() {
        let code = ConfirmationCode::parse("SH-2026-A1B2C3").unwrap();
        let receipt = SubmissionReceipt::Report(ReportReceipt {
            id: Uuid::nil(),
            confirmation_code: code.clone(),
            incident_type: IncidentType::Threats,
            evidence_links: vec![],
            consent_for_followup: false,
            submitted_at: Utc::now(),
        });

        assert_eq!(receipt.confirmation_code(), &code);
    }
}
