//! Schema normalization: raw source records into the common claim schema.
//!
//! Both source shapes are handled by one entry point dispatching on
//! [`SourceSystem`], so the orchestrator stays shape-agnostic. A failed
//! record produces an explicit error carrying the best-effort claim
//! identifier; the orchestrator decides what to do with it.

use chrono::NaiveDate;
use thiserror::Error;

use claims_model::{CanonicalClaim, RawRecord, SourceSystem};

/// Per-record normalization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("claim {claim_id} ({source_system}): invalid submitted_at {value:?}, expected YYYY-MM-DD")]
    InvalidSubmittedDate {
        claim_id: String,
        source_system: SourceSystem,
        value: String,
    },
}

impl NormalizeError {
    /// Best-effort identifier of the record that failed.
    pub fn claim_id(&self) -> &str {
        match self {
            NormalizeError::InvalidSubmittedDate { claim_id, .. } => claim_id,
        }
    }
}

/// Normalize one raw record of a known shape into a [`CanonicalClaim`].
pub fn normalize_record(
    source: SourceSystem,
    record: &RawRecord,
) -> Result<CanonicalClaim, NormalizeError> {
    match source {
        SourceSystem::Alpha => normalize_alpha(record),
        SourceSystem::Beta => Ok(normalize_beta(record)),
    }
}

/// Alpha mapping: canonical field names, with sentinel cleanup and the
/// submitted date rewritten to an ISO-8601 midnight timestamp.
fn normalize_alpha(record: &RawRecord) -> Result<CanonicalClaim, NormalizeError> {
    // Empty patient IDs are the Alpha export's way of saying "absent".
    let patient_id = field(record, "patient_id").filter(|value| !value.is_empty());

    // An empty date cell means the Alpha export had no submission date.
    let submitted_at = match field(record, "submitted_at").filter(|value| !value.is_empty()) {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                NormalizeError::InvalidSubmittedDate {
                    claim_id: field(record, "claim_id").unwrap_or_else(|| "unknown".to_string()),
                    source_system: SourceSystem::Alpha,
                    value: raw.clone(),
                }
            })?;
            Some(format!("{}T00:00:00", date.format("%Y-%m-%d")))
        }
        None => None,
    };

    // The Alpha export writes the literal string "None" for missing reasons.
    let denial_reason = field(record, "denial_reason").filter(|value| value != "None");

    Ok(CanonicalClaim {
        claim_id: field(record, "claim_id"),
        patient_id,
        procedure_code: field(record, "procedure_code"),
        denial_reason,
        status: field(record, "status"),
        submitted_at,
        source_system: SourceSystem::Alpha,
    })
}

/// Beta mapping: field renames only, values passed through unmodified.
fn normalize_beta(record: &RawRecord) -> CanonicalClaim {
    CanonicalClaim {
        claim_id: field(record, "id"),
        patient_id: field(record, "member"),
        procedure_code: field(record, "code"),
        denial_reason: field(record, "error_msg"),
        status: field(record, "status"),
        submitted_at: field(record, "date"),
        source_system: SourceSystem::Beta,
    }
}

fn field(record: &RawRecord, name: &str) -> Option<String> {
    record.get(name).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_record() -> RawRecord {
        RawRecord::from([
            ("claim_id".to_string(), "A123".to_string()),
            ("patient_id".to_string(), "P001".to_string()),
            ("procedure_code".to_string(), "99213".to_string()),
            ("denial_reason".to_string(), "Missing modifier".to_string()),
            ("status".to_string(), "denied".to_string()),
            ("submitted_at".to_string(), "2025-07-01".to_string()),
        ])
    }

    #[test]
    fn alpha_rewrites_date_to_midnight_timestamp() {
        let claim = normalize_record(SourceSystem::Alpha, &alpha_record()).expect("normalize");
        assert_eq!(claim.submitted_at.as_deref(), Some("2025-07-01T00:00:00"));
        assert_eq!(claim.source_system, SourceSystem::Alpha);
        assert_eq!(claim.claim_id.as_deref(), Some("A123"));
    }

    #[test]
    fn alpha_empty_patient_id_becomes_absent() {
        let mut record = alpha_record();
        record.insert("patient_id".to_string(), String::new());
        let claim = normalize_record(SourceSystem::Alpha, &record).expect("normalize");
        assert_eq!(claim.patient_id, None);
    }

    #[test]
    fn alpha_none_literal_denial_reason_becomes_absent() {
        let mut record = alpha_record();
        record.insert("denial_reason".to_string(), "None".to_string());
        let claim = normalize_record(SourceSystem::Alpha, &record).expect("normalize");
        assert_eq!(claim.denial_reason, None);
    }

    #[test]
    fn alpha_bad_date_fails_the_record() {
        let mut record = alpha_record();
        record.insert("submitted_at".to_string(), "07/01/2025".to_string());
        let err = normalize_record(SourceSystem::Alpha, &record).expect_err("must fail");
        assert_eq!(err.claim_id(), "A123");
    }

    #[test]
    fn alpha_empty_date_cell_becomes_absent() {
        let mut record = alpha_record();
        record.insert("submitted_at".to_string(), String::new());
        let claim = normalize_record(SourceSystem::Alpha, &record).expect("normalize");
        assert_eq!(claim.submitted_at, None);
    }

    #[test]
    fn alpha_missing_date_is_allowed() {
        let mut record = alpha_record();
        record.remove("submitted_at");
        let claim = normalize_record(SourceSystem::Alpha, &record).expect("normalize");
        assert_eq!(claim.submitted_at, None);
    }

    #[test]
    fn beta_renames_without_validation() {
        let record = RawRecord::from([
            ("id".to_string(), "B987".to_string()),
            ("member".to_string(), "P9".to_string()),
            ("code".to_string(), "99214".to_string()),
            ("error_msg".to_string(), "Incorrect NPI".to_string()),
            ("status".to_string(), "denied".to_string()),
            ("date".to_string(), "not-a-date".to_string()),
        ]);
        let claim = normalize_record(SourceSystem::Beta, &record).expect("normalize");
        assert_eq!(claim.claim_id.as_deref(), Some("B987"));
        assert_eq!(claim.patient_id.as_deref(), Some("P9"));
        assert_eq!(claim.denial_reason.as_deref(), Some("Incorrect NPI"));
        // No date validation on the Beta path.
        assert_eq!(claim.submitted_at.as_deref(), Some("not-a-date"));
        assert_eq!(claim.source_system, SourceSystem::Beta);
    }

    #[test]
    fn beta_keeps_none_literal_and_empty_values_verbatim() {
        let record = RawRecord::from([
            ("id".to_string(), "B1".to_string()),
            ("member".to_string(), String::new()),
            ("error_msg".to_string(), "None".to_string()),
        ]);
        let claim = normalize_record(SourceSystem::Beta, &record).expect("normalize");
        // Sentinel cleanup is Alpha-specific.
        assert_eq!(claim.patient_id.as_deref(), Some(""));
        assert_eq!(claim.denial_reason.as_deref(), Some("None"));
    }
}
