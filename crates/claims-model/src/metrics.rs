use std::collections::BTreeMap;

use serde::Serialize;

/// Run-scoped counters accumulated by the orchestrator.
///
/// `claims_from_alpha`, `claims_from_beta` and `total_claims_processed` count
/// RAW records as supplied by the sources, before normalization.
/// `claims_flagged` and `claims_excluded` count NORMALIZED claims, so
/// `claims_flagged + claims_excluded == normalized_claims` always holds after
/// a run, while the raw totals can sit above it whenever normalization drops
/// records. The two families are kept as separate counters on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineMetrics {
    pub claims_from_alpha: usize,
    pub claims_from_beta: usize,
    pub total_claims_processed: usize,
    pub normalized_claims: usize,
    pub claims_flagged: usize,
    pub claims_excluded: usize,
    pub exclusion_reasons: BTreeMap<String, usize>,
}

impl PipelineMetrics {
    pub fn record_flagged(&mut self) {
        self.claims_flagged += 1;
    }

    pub fn record_excluded(&mut self, reason: &str) {
        self.claims_excluded += 1;
        *self.exclusion_reasons.entry(reason.to_string()).or_insert(0) += 1;
    }

    /// Records dropped because normalization failed.
    pub fn dropped_records(&self) -> usize {
        self.total_claims_processed
            .saturating_sub(self.normalized_claims)
    }
}
