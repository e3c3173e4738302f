use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Untyped record as it arrives from a source system: field name to raw value.
///
/// Alpha records carry `claim_id`, `patient_id`, `procedure_code`,
/// `denial_reason`, `status`, `submitted_at`. Beta records carry `id`,
/// `member`, `code`, `error_msg`, `status`, `date`.
pub type RawRecord = BTreeMap<String, String>;

/// Originating record system of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSystem {
    /// Tabular (CSV) source with canonical-ish field names.
    Alpha,
    /// Structured (JSON) source with its own field names.
    Beta,
}

impl SourceSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceSystem::Alpha => "alpha",
            SourceSystem::Beta => "beta",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim in the common schema, produced by exactly one normalization path.
///
/// All fields except `source_system` are optional: a source record may omit
/// any of them, and absence is meaningful to the eligibility checks. The
/// normalizer maps sentinel values (empty `patient_id`, the literal string
/// `"None"` as a denial reason) to `None` so downstream code only ever deals
/// with real values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalClaim {
    pub claim_id: Option<String>,
    pub patient_id: Option<String>,
    pub procedure_code: Option<String>,
    pub denial_reason: Option<String>,
    pub status: Option<String>,
    /// ISO-8601 timestamp for Alpha claims; passed through unmodified for Beta.
    pub submitted_at: Option<String>,
    pub source_system: SourceSystem,
}

impl CanonicalClaim {
    /// Best-effort identifier for log messages, never empty.
    pub fn display_id(&self) -> &str {
        self.claim_id.as_deref().unwrap_or("unknown")
    }
}
