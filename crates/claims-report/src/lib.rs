//! Resubmission candidate report generation.
//!
//! Writes the final decision document: a `metadata` block (generation
//! timestamp, reference date, candidate count) and the ordered `candidates`
//! array, pretty-printed as JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use claims_model::ResubmissionRecommendation;

/// Top-level report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesDocument {
    pub metadata: ReportMetadata,
    pub candidates: Vec<ResubmissionRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated, RFC 3339 UTC.
    pub generated_at: String,
    /// The fixed "now" used for age computation, ISO-8601 at midnight.
    pub reference_date: String,
    pub total_candidates: usize,
}

/// Assemble the report document with an explicit generation timestamp.
pub fn build_document(
    candidates: Vec<ResubmissionRecommendation>,
    reference_date: NaiveDate,
    generated_at: String,
) -> CandidatesDocument {
    CandidatesDocument {
        metadata: ReportMetadata {
            generated_at,
            reference_date: format!("{}T00:00:00", reference_date.format("%Y-%m-%d")),
            total_candidates: candidates.len(),
        },
        candidates,
    }
}

/// Write the candidates document to `path` as pretty-printed JSON.
pub fn write_candidates_report(
    path: &Path,
    candidates: Vec<ResubmissionRecommendation>,
    reference_date: NaiveDate,
) -> Result<PathBuf> {
    let document = build_document(
        candidates,
        reference_date,
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    );
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document)
        .with_context(|| format!("write {}", path.display()))?;
    info!(
        report_path = %path.display(),
        candidate_count = document.metadata.total_candidates,
        "report written"
    );
    Ok(path.to_path_buf())
}
