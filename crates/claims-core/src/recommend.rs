//! Remediation recommendations for eligible claims.

use claims_model::{CanonicalClaim, ResubmissionRecommendation, UNKNOWN_REASON, recommended_action};

/// Assemble the output record for an eligible claim.
///
/// The action text comes from the exact-match lookup table; a claim with no
/// denial reason reports the literal `Unknown` and gets the generic action.
pub fn build_recommendation(claim: &CanonicalClaim) -> ResubmissionRecommendation {
    let recommended_changes = recommended_action(claim.denial_reason.as_deref()).to_string();
    let resubmission_reason = claim
        .denial_reason
        .clone()
        .unwrap_or_else(|| UNKNOWN_REASON.to_string());

    ResubmissionRecommendation {
        claim_id: claim.claim_id.clone(),
        resubmission_reason,
        source_system: claim.source_system,
        recommended_changes,
        patient_id: claim.patient_id.clone(),
        procedure_code: claim.procedure_code.clone(),
        submitted_at: claim.submitted_at.clone(),
    }
}
