use serde::{Deserialize, Serialize};
use uft_core::errors::{ErrorInfo, UftError};
use uft_core::Mode;

use crate::hash::stable_hash_string;
use crate::policies::Policy;

fn report_error(code: &str, message: impl Into<String>) -> UftError {
    UftError::Serde(ErrorInfo::new(code, message.into()))
}

/// Outcome of a single consistency check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// Stable identifier for the check.
    pub name: String,
    /// Whether the check passed under the configured policy.
    pub pass: bool,
    /// Rounded numeric deviation captured during evaluation.
    pub deviation: f64,
    /// Tolerance the deviation was compared against.
    pub tolerance: f64,
    /// Optional note surfaced when the check fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Provenance metadata attached to [`ValidationReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationProvenance {
    /// Policy applied during the run.
    pub policy: Policy,
    /// Stable hash of the geometric inputs under validation.
    pub input_hash: String,
    /// Tag of the scheme version under validation.
    pub scheme_tag: String,
    /// Mode the battery ran under.
    pub mode: Mode,
    /// Ordering of executed checks for determinism.
    pub check_order: Vec<String>,
}

/// Aggregated battery report bundling all executed checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    /// Content-addressed hash of the report payload.
    pub report_hash: String,
    /// Whether every check in the battery passed.
    pub all_pass: bool,
    /// Per-check results, complete and in execution order.
    pub checks: Vec<ValidationResult>,
    /// Provenance describing policy, inputs, and ordering.
    pub provenance: ValidationProvenance,
}

impl ValidationReport {
    /// Constructs a report from checks and provenance, computing the verdict
    /// and the stable hash.
    pub fn new(
        checks: Vec<ValidationResult>,
        provenance: ValidationProvenance,
    ) -> Result<Self, UftError> {
        validate_checks(&checks)?;
        let all_pass = checks.iter().all(|check| check.pass);
        let report_hash = stable_hash_string(&(&checks, &provenance, all_pass))?;
        Ok(Self {
            report_hash,
            all_pass,
            checks,
            provenance,
        })
    }

    /// Number of failing checks in the battery.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|check| !check.pass).count()
    }
}

/// Validates that the report contains at least one check.
pub fn validate_checks(checks: &[ValidationResult]) -> Result<(), UftError> {
    if checks.is_empty() {
        return Err(report_error(
            "empty-battery",
            "at least one check must be executed",
        ));
    }
    Ok(())
}
