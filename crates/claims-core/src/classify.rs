//! Denial reason classification.

use claims_model::{
    AMBIGUOUS_KEYWORDS, DenialClassification, NON_RETRYABLE_REASONS, RETRYABLE_REASONS,
};

/// Classify a denial reason string into one of the three buckets.
///
/// Pure and total: every input, including absence, maps to exactly one
/// classification. Precedence matters because a reason can match multiple
/// substrings; the fixed sets are consulted before the keyword heuristic, so
/// a string containing both a non-retryable phrase and an ambiguous keyword
/// resolves as non-retryable.
pub fn classify_denial_reason(denial_reason: Option<&str>) -> DenialClassification {
    let Some(reason) = denial_reason else {
        return DenialClassification::Ambiguous;
    };
    let normalized = reason.trim().to_lowercase();

    if RETRYABLE_REASONS
        .iter()
        .any(|known| normalized.contains(&known.to_lowercase()))
    {
        return DenialClassification::Retryable;
    }

    if NON_RETRYABLE_REASONS
        .iter()
        .any(|known| normalized.contains(&known.to_lowercase()))
    {
        return DenialClassification::NonRetryable;
    }

    // Unrecognized but plausibly fixable language is assumed fixable.
    if AMBIGUOUS_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
    {
        return DenialClassification::Retryable;
    }

    DenialClassification::Ambiguous
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reason_is_ambiguous() {
        assert_eq!(
            classify_denial_reason(None),
            DenialClassification::Ambiguous
        );
    }

    #[test]
    fn retryable_set_matches_as_substring_case_insensitive() {
        assert_eq!(
            classify_denial_reason(Some("Missing modifier")),
            DenialClassification::Retryable
        );
        assert_eq!(
            classify_denial_reason(Some("  MISSING MODIFIER on line 3 ")),
            DenialClassification::Retryable
        );
        assert_eq!(
            classify_denial_reason(Some("claim rejected: prior auth required")),
            DenialClassification::Retryable
        );
    }

    #[test]
    fn non_retryable_set_matches_as_substring() {
        assert_eq!(
            classify_denial_reason(Some("Authorization expired")),
            DenialClassification::NonRetryable
        );
        assert_eq!(
            classify_denial_reason(Some("denied - incorrect provider type")),
            DenialClassification::NonRetryable
        );
    }

    #[test]
    fn keyword_heuristic_defaults_to_retryable() {
        assert_eq!(
            classify_denial_reason(Some("form incomplete")),
            DenialClassification::Retryable
        );
        assert_eq!(
            classify_denial_reason(Some("service not billable")),
            DenialClassification::Retryable
        );
    }

    #[test]
    fn fixed_sets_win_over_keywords() {
        // "incorrect" is an ambiguous keyword, but the non-retryable set is
        // consulted first.
        assert_eq!(
            classify_denial_reason(Some("Incorrect provider type")),
            DenialClassification::NonRetryable
        );
        // "Incorrect NPI" contains "incorrect" too, but hits the retryable
        // set before the heuristic.
        assert_eq!(
            classify_denial_reason(Some("Incorrect NPI")),
            DenialClassification::Retryable
        );
    }

    #[test]
    fn unrecognized_reason_is_ambiguous() {
        assert_eq!(
            classify_denial_reason(Some("Duplicate claim")),
            DenialClassification::Ambiguous
        );
        assert_eq!(
            classify_denial_reason(Some("")),
            DenialClassification::Ambiguous
        );
    }
}
