use serde::{Deserialize, Serialize};
use uft_core::errors::{ErrorInfo, UftError};
use uft_core::{Mode, SchemaVersion, Source};
use uft_running::ConstantEstimate;
use uft_scheme::{GeometricInputs, RunningCoefficient, SchemeVersion};
use uft_validate::ValidationReport;

use crate::hash::stable_hash_string;

/// Publication status of an exported record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Every check passed and every row is derived; safe for consumption.
    #[serde(rename = "final")]
    Final,
    /// Exported for inspection only; not a validated prediction.
    #[serde(rename = "unvalidated")]
    Unvalidated,
}

impl RecordStatus {
    /// Returns the stable tag written into exported artifacts.
    pub fn tag(&self) -> &'static str {
        match self {
            RecordStatus::Final => "final",
            RecordStatus::Unvalidated => "unvalidated",
        }
    }
}

/// One parameter row of an exported provenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceRow {
    /// Stable parameter name.
    pub parameter: String,
    /// Numeric value; absent for placeholder rows, which carry no number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Tolerance attached to the row, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    /// Provenance source of the row.
    pub source: Source,
    /// Scheme version the row was produced under.
    pub scheme_version: String,
}

/// Condensed validation verdict embedded in every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of checks executed.
    pub total: usize,
    /// Number of checks that passed.
    pub passed: usize,
    /// Whether the whole battery passed.
    pub all_pass: bool,
    /// Stable hash of the full validation report.
    pub report_hash: String,
}

/// An exported, immutable provenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// Schema version of the record payload.
    pub schema_version: SchemaVersion,
    /// Publication status.
    pub status: RecordStatus,
    /// Scheme version tag the pipeline ran under.
    pub scheme_tag: String,
    /// Mode the pipeline ran under.
    pub mode: Mode,
    /// Parameter rows in insertion order.
    pub rows: Vec<ProvenanceRow>,
    /// Condensed validation verdict.
    pub validation: ValidationSummary,
    /// ISO-8601 timestamp recording when the record was created.
    pub created_at: String,
    /// Content hash over everything except the timestamp.
    pub record_hash: String,
}

impl ProvenanceRecord {
    /// Iterates over the rows a downstream prediction consumer may read.
    pub fn derived_rows(&self) -> impl Iterator<Item = &ProvenanceRow> {
        self.rows
            .iter()
            .filter(|row| row.source == Source::Derived)
    }
}

fn integrity_error(message: impl Into<String>) -> UftError {
    UftError::Provenance(ErrorInfo::new("provenance-integrity", message))
}

/// Accumulates rows and freezes them into a [`ProvenanceRecord`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    version: SchemeVersion,
    mode: Mode,
    rows: Vec<ProvenanceRow>,
}

impl RecordBuilder {
    /// Starts an empty record for a scheme version and mode.
    pub fn new(version: SchemeVersion, mode: Mode) -> Self {
        Self {
            version,
            mode,
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, parameter: &str, value: Option<f64>, source: Source) {
        self.rows.push(ProvenanceRow {
            parameter: parameter.to_string(),
            value,
            tolerance: None,
            source,
            scheme_version: self.version.tag().to_string(),
        });
    }

    /// Records the geometric inputs as derived rows.
    pub fn push_inputs(&mut self, inputs: &GeometricInputs) {
        for entry in inputs.entries() {
            self.push_row(&entry.name, Some(entry.value), Source::Derived);
        }
    }

    /// Records the running coefficient as a derived row.
    pub fn push_coefficient(&mut self, coefficient: &RunningCoefficient) {
        self.push_row(
            "running_coefficient",
            Some(coefficient.value),
            Source::Derived,
        );
    }

    /// Records a constant estimate under the given parameter name.
    ///
    /// The row's source comes from the estimate's tagged value, so a
    /// non-derived value can never be exported as derived.
    pub fn push_estimate(&mut self, parameter: &str, estimate: &ConstantEstimate) {
        self.push_row(parameter, estimate.value.value(), estimate.value.source());
    }

    /// Records a display-only comparison value from outside the pipeline.
    pub fn push_external_reference(&mut self, parameter: &str, value: f64) {
        self.push_row(parameter, Some(value), Source::ExternalReference);
    }

    /// Records a named derivation that has not been implemented yet.
    pub fn push_placeholder(&mut self, parameter: &str) {
        self.push_row(parameter, None, Source::Placeholder);
    }

    fn status_for(&self, report: &ValidationReport) -> RecordStatus {
        let all_derived = self.rows.iter().all(|row| row.source == Source::Derived);
        if report.all_pass && all_derived && self.mode == Mode::Strict {
            RecordStatus::Final
        } else {
            RecordStatus::Unvalidated
        }
    }

    /// Freezes the builder into a record, downgrading to
    /// [`RecordStatus::Unvalidated`] whenever the final contract is unmet.
    pub fn finish(self, report: &ValidationReport) -> Result<ProvenanceRecord, UftError> {
        if report.provenance.scheme_tag != self.version.tag() {
            return Err(integrity_error(format!(
                "validation report covers scheme `{}`, record covers `{}`",
                report.provenance.scheme_tag,
                self.version.tag()
            )));
        }
        if self.rows.is_empty() {
            return Err(integrity_error("a record must contain at least one row"));
        }
        let status = self.status_for(report);
        if status == RecordStatus::Final
            && self.rows.iter().any(|row| row.source != Source::Derived)
        {
            // Unreachable by construction; kept as the loud contract surface.
            return Err(integrity_error(
                "a final record may only contain derived rows",
            ));
        }
        let validation = ValidationSummary {
            total: report.checks.len(),
            passed: report.checks.iter().filter(|check| check.pass).count(),
            all_pass: report.all_pass,
            report_hash: report.report_hash.clone(),
        };
        let schema_version = SchemaVersion::default();
        let scheme_tag = self.version.tag().to_string();
        let record_hash = stable_hash_string(&(
            schema_version,
            status.tag(),
            &scheme_tag,
            self.mode.tag(),
            &self.rows,
            &validation,
        ))?;
        Ok(ProvenanceRecord {
            schema_version,
            status,
            scheme_tag,
            mode: self.mode,
            rows: self.rows,
            validation,
            created_at: chrono::Utc::now().to_rfc3339(),
            record_hash,
        })
    }

    /// Freezes the builder into a record that must be final.
    ///
    /// Errors loudly instead of downgrading: a failed check, a non-derived
    /// row, or an approximate-mode run is a contract violation here.
    pub fn finish_final(self, report: &ValidationReport) -> Result<ProvenanceRecord, UftError> {
        if !report.all_pass {
            return Err(integrity_error(format!(
                "{} validation check(s) failed; record cannot be final",
                report.failed_count()
            )));
        }
        if self.mode != Mode::Strict {
            return Err(integrity_error(
                "approximate-mode results cannot be published as final",
            ));
        }
        if let Some(row) = self.rows.iter().find(|row| row.source != Source::Derived) {
            return Err(integrity_error(format!(
                "row `{}` has source `{}`; a final record may only contain derived rows",
                row.parameter,
                row.source.tag()
            )));
        }
        let record = self.finish(report)?;
        debug_assert_eq!(record.status, RecordStatus::Final);
        Ok(record)
    }
}
