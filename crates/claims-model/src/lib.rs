pub mod claim;
pub mod decision;
pub mod metrics;
pub mod rules;

pub use claim::{CanonicalClaim, RawRecord, SourceSystem};
pub use decision::{DenialClassification, EligibilityDecision, ResubmissionRecommendation};
pub use metrics::PipelineMetrics;
pub use rules::{
    AMBIGUOUS_KEYWORDS, FALLBACK_ACTION, NON_RETRYABLE_REASONS, RECOMMENDED_ACTIONS,
    RETRYABLE_REASONS, UNKNOWN_REASON, recommended_action,
};
