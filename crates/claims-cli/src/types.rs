use std::path::PathBuf;

use chrono::NaiveDate;

use claims_model::{PipelineMetrics, ResubmissionRecommendation};

#[derive(Debug)]
pub struct RunResult {
    pub reference_date: NaiveDate,
    /// Where the report was written; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub metrics: PipelineMetrics,
    pub candidates: Vec<ResubmissionRecommendation>,
    /// Rendered messages for records dropped during normalization.
    pub dropped_records: Vec<String>,
}
