//! Property tests for the denial classifier.

use proptest::prelude::*;

use claims_core::classify_denial_reason;
use claims_model::{DenialClassification, NON_RETRYABLE_REASONS, RETRYABLE_REASONS};

proptest! {
    /// The classifier is deterministic and total over arbitrary input.
    #[test]
    fn classification_is_deterministic(reason in ".*") {
        let first = classify_denial_reason(Some(&reason));
        let second = classify_denial_reason(Some(&reason));
        prop_assert_eq!(first, second);
    }

    /// Any string containing a retryable phrase classifies as retryable,
    /// regardless of casing or surrounding text.
    #[test]
    fn retryable_substring_wins(
        index in 0..RETRYABLE_REASONS.len(),
        prefix in "[a-z ]{0,12}",
        suffix in "[a-z ]{0,12}",
        uppercase in any::<bool>(),
    ) {
        let phrase = RETRYABLE_REASONS[index];
        let phrase = if uppercase { phrase.to_uppercase() } else { phrase.to_lowercase() };
        let reason = format!("{prefix}{phrase}{suffix}");
        prop_assert_eq!(
            classify_denial_reason(Some(&reason)),
            DenialClassification::Retryable
        );
    }

    /// Non-retryable phrases classify as non-retryable as long as no
    /// retryable phrase is present (the retryable set is checked first).
    #[test]
    fn non_retryable_substring_wins_without_retryable_text(
        index in 0..NON_RETRYABLE_REASONS.len(),
        prefix in "[a-z ]{0,12}",
        suffix in "[a-z ]{0,12}",
    ) {
        let reason = format!("{prefix}{}{suffix}", NON_RETRYABLE_REASONS[index]);
        let lowered = reason.to_lowercase();
        prop_assume!(
            !RETRYABLE_REASONS
                .iter()
                .any(|known| lowered.contains(&known.to_lowercase()))
        );
        prop_assert_eq!(
            classify_denial_reason(Some(&reason)),
            DenialClassification::NonRetryable
        );
    }
}

#[test]
fn absent_input_is_always_ambiguous() {
    assert_eq!(
        classify_denial_reason(None),
        DenialClassification::Ambiguous
    );
}
