#![deny(missing_docs)]
#![doc = "Provenance record construction and export for UFT constant predictions."]

/// Filesystem export of frozen records.
pub mod export;
/// Canonical hashing helpers.
pub mod hash;
/// Record and row types plus the builder.
pub mod record;
/// Canonical JSON helpers.
pub mod serde;

pub use export::{write_csv, write_json};
pub use record::{
    ProvenanceRecord, ProvenanceRow, RecordBuilder, RecordStatus, ValidationSummary,
};
