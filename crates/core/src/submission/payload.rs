//! Submission payloads and their validation.
//!
//! Payloads hold user-entered form data exactly as the rendering layer
//! collected it; nothing is rejected at construction. Validation happens
//! when a payload is submitted, producing field-level [`CoreError`]
//! values the form can surface next to the offending input.
//!
//! Validation also normalises: evidence-link rows left blank are dropped,
//! surrounding whitespace is trimmed, and a blank donation currency falls
//! back to the platform default. Backends submit the normalised form, so
//! both the mock and the real client send identical shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shieldher_types::{is_blank, NonEmptyText};

use crate::error::{CoreError, CoreResult};

/// Maximum characters accepted for an incident description.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Maximum characters accepted for the platform/context field.
pub const MAX_PLATFORM_CONTEXT_CHARS: usize = 200;

/// Currency assumed when a donation does not specify one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// The closed set of incident categories a report can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
    Harassment,
    Stalking,
    Impersonation,
    Threats,
    Other,
}

impl IncidentType {
    /// The wire/display name of this incident type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentType::Harassment => "harassment",
            IncidentType::Stalking => "stalking",
            IncidentType::Impersonation => "impersonation",
            IncidentType::Threats => "threats",
            IncidentType::Other => "other",
        }
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of evidence URLs, capped at ten entries.
///
/// The cap is enforced at insertion: [`push`](EvidenceLinks::push) refuses
/// an eleventh entry and leaves the list unchanged. Blank entries are
/// accepted here (the form keeps empty rows around while the user edits)
/// and dropped later by [`sanitised`](EvidenceLinks::sanitised).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceLinks {
    links: Vec<String>,
}

impl EvidenceLinks {
    /// Maximum number of evidence links per report.
    pub const MAX_LINKS: usize = 10;

    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link, refusing once the cap is reached.
    ///
    /// Returns true if the link was added; false (with the list
    /// unchanged) if the list already holds [`Self::MAX_LINKS`] entries.
    pub fn push(&mut self, link: impl Into<String>) -> bool {
        if self.links.len() >= Self::MAX_LINKS {
            return false;
        }
        self.links.push(link.into());
        true
    }

    /// Number of entries, including blanks not yet sanitised away.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The raw entries in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.links
    }

    /// The entries as they will be submitted: blanks dropped, ends
    /// trimmed, order preserved, and the cap re-applied (deserialised
    /// payloads bypass [`push`](Self::push), so it is enforced here too).
    pub fn sanitised(&self) -> Vec<String> {
        self.links
            .iter()
            .filter(|link| !is_blank(link))
            .map(|link| link.trim().to_owned())
            .take(Self::MAX_LINKS)
            .collect()
    }
}

impl FromIterator<String> for EvidenceLinks {
    /// Collects entries up to the cap; the excess is discarded.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().take(Self::MAX_LINKS).collect(),
        }
    }
}

/// An anonymous incident report as entered in the reporting form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub incident_type: IncidentType,
    /// Required free-text description, at most
    /// [`MAX_DESCRIPTION_CHARS`] characters.
    pub description: String,
    /// When the incident occurred, if the reporter chose to say.
    pub occurred_at: Option<DateTime<Utc>>,
    /// The platform or context (never a physical location), at most
    /// [`MAX_PLATFORM_CONTEXT_CHARS`] characters.
    pub platform_context: Option<String>,
    pub evidence_links: EvidenceLinks,
    pub consent_for_followup: bool,
}

impl IncidentReport {
    /// Validates and normalises this report for submission.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`CoreError::Validation`] when the
    /// description is missing or over its limit, or the platform context
    /// is over its limit.
    pub fn normalised(&self) -> CoreResult<NormalisedReport> {
        let description = NonEmptyText::bounded(&self.description, MAX_DESCRIPTION_CHARS)
            .map_err(|e| CoreError::validation("description", e.to_string()))?;

        // A blank platform context is the same as an absent one.
        let platform_context = match self.platform_context.as_deref() {
            None => None,
            Some(raw) if is_blank(raw) => None,
            Some(raw) => Some(
                NonEmptyText::bounded(raw, MAX_PLATFORM_CONTEXT_CHARS)
                    .map_err(|e| CoreError::validation("platform_context", e.to_string()))?,
            ),
        };

        Ok(NormalisedReport {
            incident_type: self.incident_type,
            description,
            occurred_at: self.occurred_at,
            platform_context,
            evidence_links: self.evidence_links.sanitised(),
            consent_for_followup: self.consent_for_followup,
        })
    }
}

/// A report that has passed validation and is ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalisedReport {
    pub incident_type: IncidentType,
    pub description: NonEmptyText,
    pub occurred_at: Option<DateTime<Utc>>,
    pub platform_context: Option<NonEmptyText>,
    /// Blank-free, trimmed evidence links in their original order.
    pub evidence_links: Vec<String>,
    pub consent_for_followup: bool,
}

/// A donation as entered in the donation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// The donated amount, in units of `currency`.
    pub amount: f64,
    /// ISO-style currency code; blank falls back to [`DEFAULT_CURRENCY`].
    pub currency: String,
    /// Optional message from the donor.
    pub message: Option<String>,
}

impl Donation {
    /// Validates and normalises this donation for submission.
    ///
    /// # Errors
    ///
    /// Returns a field-level [`CoreError::Validation`] when the amount is
    /// not a strictly positive finite number.
    pub fn normalised(&self) -> CoreResult<NormalisedDonation> {
        if !self.amount.is_finite() {
            return Err(CoreError::validation("amount", "must be a number"));
        }
        if self.amount <= 0.0 {
            return Err(CoreError::validation("amount", "must be greater than zero"));
        }

        let currency = match self.currency.trim() {
            "" => DEFAULT_CURRENCY.to_owned(),
            trimmed => trimmed.to_owned(),
        };

        let message = self
            .message
            .as_deref()
            .filter(|m| !is_blank(m))
            .map(|m| m.trim().to_owned());

        Ok(NormalisedDonation {
            amount: self.amount,
            currency,
            message,
        })
    }
}

/// A donation that has passed validation and is ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalisedDonation {
    pub amount: f64,
    pub currency: String,
    pub message: Option<String>,
}

impl NormalisedDonation {
    /// The amount formatted to exactly two decimal places, as receipts
    /// and statements display it (`25.5` becomes `"25.50"`).
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

/// A submission payload of either kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionPayload {
    Report(IncidentReport),
    Donation(Donation),
}

impl SubmissionPayload {
    /// Validates the payload without submitting it.
    ///
    /// # Errors
    ///
    /// The same field-level errors the owning variant's `normalised`
    /// method produces.
    pub fn validate(&self) -> CoreResult<()> {
        match self {
            SubmissionPayload::Report(report) => report.normalised().map(|_| ()),
            SubmissionPayload::Donation(donation) => donation.normalised().map(|_| ()),
        }
    }

    /// The payload kind as a wire/display name.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionPayload::Report(_) => "report",
            SubmissionPayload::Donation(_) => "donation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_links(links: &[&str]) -> IncidentReport {
        IncidentReport {
            incident_type: IncidentType::Harassment,
            description: "Repeated unwanted messages across accounts".into(),
            occurred_at: None,
            platform_context: None,
            evidence_links: links.iter().map(|l| l.to_string()).collect(),
            consent_for_followup: false,
        }
    }

    #[test]
    fn test_blank_evidence_links_are_dropped_on_normalisation() {
        let report = report_with_links(&["", " ", "https://x.com/a"]);
        let normalised = report.normalised().unwrap();

        assert_eq!(normalised.evidence_links, vec!["https://x.com/a"]);
    }

    #[test]
    fn test_evidence_links_preserve_order() {
        let report = report_with_links(&["https://a.example", "", "https://b.example"]);
        let normalised = report.normalised().unwrap();

        assert_eq!(
            normalised.evidence_links,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_eleventh_evidence_link_is_refused() {
        let mut links = EvidenceLinks::new();
        for i in 0..EvidenceLinks::MAX_LINKS {
            assert!(links.push(format!("https://example.com/{i}")));
        }

        // The cap holds: push reports failure and the list is unchanged.
        assert!(!links.push("https://example.com/one-too-many"));
        assert_eq!(links.len(), EvidenceLinks::MAX_LINKS);
        assert!(!links
            .as_slice()
            .iter()
            .any(|l| l.contains("one-too-many")));
    }

    #[test]
    fn test_from_iterator_truncates_at_cap() {
        let links: EvidenceLinks = (0..20).map(|i| format!("https://example.com/{i}")).collect();
        assert_eq!(links.len(), EvidenceLinks::MAX_LINKS);
    }

    #[test]
    fn test_sanitised_enforces_cap_on_deserialised_lists() {
        // A wire payload can arrive with more rows than the form allows.
        let raw: Vec<String> = (0..15).map(|i| format!("https://example.com/{i}")).collect();
        let links: EvidenceLinks = serde_json::from_value(serde_json::json!(raw)).unwrap();

        assert_eq!(links.sanitised().len(), EvidenceLinks::MAX_LINKS);
    }

    #[test]
    fn test_report_requires_description() {
        let mut report = report_with_links(&[]);
        report.description = "   ".into();

        let err = report.normalised().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                field: "description",
                ..
            }
        ));
    }

    #[test]
    fn test_report_description_limit() {
        let mut report = report_with_links(&[]);
        report.description = "x".repeat(MAX_DESCRIPTION_CHARS + 1);

        let err = report.normalised().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                field: "description",
                ..
            }
        ));

        // Exactly at the limit is accepted.
        report.description = "x".repeat(MAX_DESCRIPTION_CHARS);
        assert!(report.normalised().is_ok());
    }

    #[test]
    fn test_platform_context_limit_and_blank_handling() {
        let mut report = report_with_links(&[]);

        report.platform_context = Some("  ".into());
        assert_eq!(report.normalised().unwrap().platform_context, None);

        report.platform_context = Some("y".repeat(MAX_PLATFORM_CONTEXT_CHARS + 1));
        let err = report.normalised().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation {
                field: "platform_context",
                ..
            }
        ));

        report.platform_context = Some("Instagram DM".into());
        let normalised = report.normalised().unwrap();
        assert_eq!(
            normalised.platform_context.unwrap().as_str(),
            "Instagram DM"
        );
    }

    #[test]
    fn test_donation_rejects_non_positive_amounts() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let donation = Donation {
                amount,
                currency: "USD".into(),
                message: None,
            };
            let err = donation.normalised().unwrap_err();
            assert!(
                matches!(err, CoreError::Validation { field: "amount", .. }),
                "amount {amount} should be rejected"
            );
        }
    }

    #[test]
    fn test_donation_amount_formats_to_two_decimals() {
        let donation = Donation {
            amount: 25.5,
            currency: "USD".into(),
            message: None,
        };
        let normalised = donation.normalised().unwrap();
        assert_eq!(normalised.formatted_amount(), "25.50");
    }

    #[test]
    fn test_donation_blank_currency_defaults_to_usd() {
        let donation = Donation {
            amount: 10.0,
            currency: "  ".into(),
            message: None,
        };
        assert_eq!(donation.normalised().unwrap().currency, "USD");
    }

    #[test]
    fn test_donation_blank_message_becomes_none() {
        let donation = Donation {
            amount: 10.0,
            currency: "EUR".into(),
            message: Some("  ".into()),
        };
        assert_eq!(donation.normalised().unwrap().message, None);
    }

    #[test]
    fn test_payload_validate_delegates_to_variant() {
        let ok = SubmissionPayload::Donation(Donation {
            amount: 1.0,
            currency: "USD".into(),
            message: None,
        });
        assert!(ok.validate().is_ok());
        assert_eq!(ok.kind(), "donation");

        let bad = SubmissionPayload::Report(IncidentReport {
            incident_type: IncidentType::Other,
            description: "".into(),
            occurred_at: None,
            platform_context: None,
            evidence_links: EvidenceLinks::new(),
            consent_for_followup: true,
        });
        assert!(bad.validate().is_err());
        assert_eq!(bad.kind(), "report");
    }

    #[test]
    fn test_incident_type_serialises_lowercase() {
        let json = serde_json::to_string(&IncidentType::Stalking).unwrap();
        assert_eq!(json, "\"stalking\"");
        assert_eq!(IncidentType::Stalking.to_string(), "stalking");
    }
}
