use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uft_core::errors::{ErrorInfo, UftError};
use uft_core::{Mode, SchemaVersion, TaggedValue};
use uft_scheme::GeometricInputs;

/// Reference scale at which the baseline constant is anchored.
pub const SCALE0: f64 = 1.0;

/// The constant's value at one energy scale, tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantEstimate {
    /// Energy-like scale the value refers to.
    pub scale: f64,
    /// Source-tagged value; only `derived` values feed further evolution.
    pub value: TaggedValue,
    /// Tag of the scheme version that produced the estimate.
    pub scheme_tag: String,
    /// Revision of the closed-form formula used.
    pub formula_version: SchemaVersion,
}

fn round_f64(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

/// Computes the baseline constant at [`SCALE0`] from the geometric inputs.
///
/// Closed form `A0 = Omega pi^2 + pi^2 + pi`; for the registered tables
/// this sits near the observed inverse coupling without ever reading it.
pub fn baseline(inputs: &GeometricInputs, mode: Mode) -> Result<ConstantEstimate, UftError> {
    if !inputs.solid_angle.is_finite() || inputs.solid_angle <= 0.0 {
        return Err(UftError::Domain(
            ErrorInfo::new("input-out-of-domain", "solid angle must be finite and positive")
                .with_context("solid_angle", inputs.solid_angle.to_string()),
        ));
    }
    let value = inputs.solid_angle * PI * PI + PI * PI + PI;
    let value = match mode {
        Mode::Strict => value,
        Mode::Approximate => round_f64(value),
    };
    Ok(ConstantEstimate {
        scale: SCALE0,
        value: TaggedValue::Derived(value),
        scheme_tag: inputs.version.tag().to_string(),
        formula_version: inputs.version.formula_version(),
    })
}
