//! Claims resubmission core pipeline.
//!
//! The pipeline follows these stages in order:
//! 1. **Normalize**: map raw Alpha/Beta records into the common claim schema
//! 2. **Classify**: bucket the denial reason as retryable / non-retryable / ambiguous
//! 3. **Evaluate**: run the eligibility gates against a fixed reference date
//! 4. **Recommend**: attach a remediation action to each eligible claim
//!
//! Each stage is a pure function over in-memory data; ingestion and report
//! writing live in their own crates.

pub mod classify;
pub mod eligibility;
pub mod normalize;
pub mod pipeline;
pub mod recommend;

pub use classify::classify_denial_reason;
pub use eligibility::EligibilityEvaluator;
pub use normalize::{NormalizeError, normalize_record};
pub use pipeline::{Pipeline, RunOutcome};
pub use recommend::build_recommendation;
