//! Fixed rule tables consulted by the classifier and recommendation lookup.
//!
//! These are configuration constants rather than inline literals so the
//! tables can be tested and extended without touching control flow. The
//! classifier matches entries as lowercased substrings; the recommendation
//! table is matched by exact string equality.

/// Denial reasons known to be fixable. Substring match, case-insensitive.
pub const RETRYABLE_REASONS: &[&str] =
    &["Missing modifier", "Incorrect NPI", "Prior auth required"];

/// Denial reasons that cannot be retried. Substring match, case-insensitive.
pub const NON_RETRYABLE_REASONS: &[&str] = &["Authorization expired", "Incorrect provider type"];

/// Keywords suggesting unrecognized-but-plausibly-fixable language.
/// Matched after both fixed sets and treated as retryable.
pub const AMBIGUOUS_KEYWORDS: &[&str] = &["incorrect", "incomplete", "not billable", "form"];

/// Exact-match lookup from denial reason to remediation action.
pub const RECOMMENDED_ACTIONS: &[(&str, &str)] = &[
    ("Missing modifier", "Add appropriate modifier code and resubmit"),
    ("Incorrect NPI", "Review NPI number and resubmit"),
    ("Prior auth required", "Obtain prior authorization and resubmit"),
    (
        "incorrect procedure",
        "Review procedure code and resubmit with correct code",
    ),
    ("form incomplete", "Complete all required fields and resubmit"),
    (
        "not billable",
        "Review billing requirements and resubmit if appropriate",
    ),
];

/// Action text for denial reasons not in [`RECOMMENDED_ACTIONS`].
pub const FALLBACK_ACTION: &str = "Review claim details and resubmit";

/// Placeholder reason reported for claims with no denial reason at all.
pub const UNKNOWN_REASON: &str = "Unknown";

/// Look up the remediation action for a denial reason by exact match.
pub fn recommended_action(denial_reason: Option<&str>) -> &'static str {
    let Some(reason) = denial_reason else {
        return FALLBACK_ACTION;
    };
    RECOMMENDED_ACTIONS
        .iter()
        .find(|(key, _)| *key == reason)
        .map_or(FALLBACK_ACTION, |(_, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_lookup_is_exact_match() {
        assert_eq!(
            recommended_action(Some("Missing modifier")),
            "Add appropriate modifier code and resubmit"
        );
        // Substring or case variants fall back, unlike the classifier.
        assert_eq!(
            recommended_action(Some("missing modifier")),
            FALLBACK_ACTION
        );
        assert_eq!(
            recommended_action(Some("Claim denied: Missing modifier")),
            FALLBACK_ACTION
        );
    }

    #[test]
    fn absent_reason_falls_back() {
        assert_eq!(recommended_action(None), FALLBACK_ACTION);
        // The rendered placeholder is not a table key either.
        assert_eq!(recommended_action(Some(UNKNOWN_REASON)), FALLBACK_ACTION);
    }

    #[test]
    fn rule_tables_do_not_overlap() {
        for reason in RETRYABLE_REASONS {
            assert!(!NON_RETRYABLE_REASONS.contains(reason));
        }
    }
}
