//! Eligibility gates for resubmission.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use claims_model::{CanonicalClaim, DenialClassification, EligibilityDecision};

use crate::classify::classify_denial_reason;

/// Minimum whole-day age before a claim may be resubmitted.
const MIN_CLAIM_AGE_DAYS: i64 = 7;

/// Applies the gating checks against a fixed reference date.
///
/// The reference date is fixed at construction instead of read from the
/// wall clock so runs are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEvaluator {
    reference_date: NaiveDate,
}

impl EligibilityEvaluator {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Run the short-circuiting checks in order and produce a decision.
    ///
    /// Total over its input: malformed dates become an ineligibility reason,
    /// never a failure.
    pub fn evaluate(&self, claim: &CanonicalClaim) -> EligibilityDecision {
        if claim.status.as_deref() != Some("denied") {
            return EligibilityDecision::excluded("Status is not denied");
        }

        if claim
            .patient_id
            .as_deref()
            .is_none_or(|patient_id| patient_id.is_empty())
        {
            return EligibilityDecision::excluded("Missing patient ID");
        }

        // Age gate only applies when a submission date is present at all; an
        // empty value counts as absent, not as unparsable.
        if let Some(submitted_at) = claim
            .submitted_at
            .as_deref()
            .filter(|value| !value.is_empty())
        {
            match parse_submitted_at(submitted_at) {
                Some(submitted) => {
                    let reference = self.reference_date.and_time(NaiveTime::MIN);
                    let age_days = reference.signed_duration_since(submitted).num_days();
                    if age_days <= MIN_CLAIM_AGE_DAYS {
                        return EligibilityDecision::excluded(format!(
                            "Claim is only {age_days} days old (need > {MIN_CLAIM_AGE_DAYS} days)"
                        ));
                    }
                }
                None => {
                    debug!(
                        claim_id = claim.display_id(),
                        submitted_at, "could not parse submission date"
                    );
                    return EligibilityDecision::excluded("Invalid date format");
                }
            }
        }

        let classification = classify_denial_reason(claim.denial_reason.as_deref());
        match classification {
            DenialClassification::NonRetryable => {
                let reason = claim.denial_reason.as_deref().unwrap_or_default();
                return EligibilityDecision::excluded(format!(
                    "Non-retryable denial reason: {reason}"
                ));
            }
            DenialClassification::Ambiguous => {
                // Audit trail only; ambiguous claims are allowed through.
                debug!(
                    claim_id = claim.display_id(),
                    denial_reason = claim.denial_reason.as_deref().unwrap_or("none"),
                    "ambiguous denial reason treated as retryable"
                );
            }
            DenialClassification::Retryable => {}
        }

        EligibilityDecision::eligible()
    }
}

/// Parse a submission date in either of the accepted shapes.
///
/// Values containing a `T` separator are ISO-8601 timestamps, with an
/// optional trailing `Z` or numeric UTC offset; anything else must be a
/// plain `YYYY-MM-DD` date, interpreted at midnight.
fn parse_submitted_at(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.contains('T') {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(with_offset.naive_utc());
        }
        return NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok();
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
