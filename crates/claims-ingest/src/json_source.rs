use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::{error, info};

use claims_model::RawRecord;

use crate::error::IngestError;

/// Load Beta records from a JSON document holding an array of objects.
///
/// String values are taken verbatim. Numbers and booleans are rendered with
/// their JSON text so downstream code sees strings uniformly; `null` fields
/// are treated as absent. Nested values are rejected nowhere but rendered as
/// raw JSON, matching the pass-through contract of the Beta mapping.
pub fn load_beta_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let Value::Array(entries) = document else {
        return Err(IngestError::UnexpectedShape {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let Value::Object(fields) = entry else {
            return Err(IngestError::UnexpectedShape {
                path: path.to_path_buf(),
            });
        };
        let mut record = RawRecord::new();
        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::String(text) => {
                    record.insert(key, text);
                }
                other => {
                    record.insert(key, other.to_string());
                }
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Read Beta records, yielding an empty batch when the source is unavailable.
pub fn read_beta_records(path: &Path) -> Vec<RawRecord> {
    match load_beta_records(path) {
        Ok(records) => {
            info!(
                source_system = "beta",
                source_file = %path.display(),
                record_count = records.len(),
                "loaded claims"
            );
            records
        }
        Err(err) => {
            error!(
                source_system = "beta",
                source_file = %path.display(),
                "failed to load claims: {err}"
            );
            Vec::new()
        }
    }
}
