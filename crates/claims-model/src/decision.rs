use serde::{Deserialize, Serialize};

use crate::claim::SourceSystem;

/// Whether a denial reason is worth fixing and resubmitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialClassification {
    Retryable,
    NonRetryable,
    Ambiguous,
}

impl DenialClassification {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialClassification::Retryable => "retryable",
            DenialClassification::NonRetryable => "non_retryable",
            DenialClassification::Ambiguous => "ambiguous",
        }
    }
}

/// Outcome of the eligibility checks for one claim.
///
/// The reason is always populated, for accepted and rejected claims alike,
/// and is drawn from a small fixed set of templates so exclusion counts can
/// be aggregated by reason string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityDecision {
    pub eligible: bool,
    pub reason: String,
}

impl EligibilityDecision {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            reason: "Eligible for resubmission".to_string(),
        }
    }

    pub fn excluded(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: reason.into(),
        }
    }
}

/// Output record for one eligible claim.
///
/// Field order matters: the report document serializes candidates with
/// these fields in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResubmissionRecommendation {
    pub claim_id: Option<String>,
    pub resubmission_reason: String,
    pub source_system: SourceSystem,
    pub recommended_changes: String,
    pub patient_id: Option<String>,
    pub procedure_code: Option<String>,
    pub submitted_at: Option<String>,
}
