use std::path::Path;

use csv::ReaderBuilder;
use tracing::{error, info};

use claims_model::RawRecord;

use crate::error::IngestError;

/// Strip BOM and surrounding whitespace from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load Alpha records from a CSV file with a header row.
///
/// Cell values are kept verbatim; only headers are cleaned up. Rows shorter
/// than the header are padded with absent fields, extra cells are ignored.
pub fn load_alpha_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut record = RawRecord::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            record.insert(header.clone(), value.to_string());
        }
        records.push(record);
    }
    Ok(records)
}

/// Read Alpha records, yielding an empty batch when the source is unavailable.
pub fn read_alpha_records(path: &Path) -> Vec<RawRecord> {
    match load_alpha_records(path) {
        Ok(records) => {
            info!(
                source_system = "alpha",
                source_file = %path.display(),
                record_count = records.len(),
                "loaded claims"
            );
            records
        }
        Err(err) => {
            error!(
                source_system = "alpha",
                source_file = %path.display(),
                "failed to load claims: {err}"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_header_and_rows() {
        let file = write_temp(
            "claim_id,patient_id,status\nA123,P1,denied\nA124,,approved\n",
        );
        let records = load_alpha_records(file.path()).expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("claim_id").map(String::as_str), Some("A123"));
        assert_eq!(records[1].get("patient_id").map(String::as_str), Some(""));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let file = write_temp("claim_id,patient_id,status\nA123\n");
        let records = load_alpha_records(file.path()).expect("load");
        assert_eq!(records[0].get("claim_id").map(String::as_str), Some("A123"));
        assert!(records[0].get("status").is_none());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let path = Path::new("does/not/exist.csv");
        assert!(matches!(
            load_alpha_records(path),
            Err(IngestError::NotFound(_))
        ));
        assert!(read_alpha_records(path).is_empty());
    }
}
