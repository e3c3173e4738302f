//! Claim record ingestion.
//!
//! Readers for the two source systems: the Alpha system exports a CSV file
//! with a header row, the Beta system exports a JSON array of objects. Both
//! readers produce untyped [`RawRecord`] field maps; schema interpretation
//! belongs to the normalizer in `claims-core`.
//!
//! The `read_*` entry points honor the source-unavailable contract: a missing
//! or unparsable file yields an empty sequence and an error log, never a hard
//! failure, so a run can continue with whatever the other source provided.
//! The fallible `load_*` variants are exposed for callers that want the error.

mod csv_source;
mod error;
mod json_source;

pub use csv_source::{load_alpha_records, read_alpha_records};
pub use error::IngestError;
pub use json_source::{load_beta_records, read_beta_records};
