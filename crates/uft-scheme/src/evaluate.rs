use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uft_core::errors::{ErrorInfo, UftError};
use uft_core::Mode;

use crate::hash::{round_f64, stable_hash_string};
use crate::inputs::GeometricInputs;

/// Auxiliary gauge parameter used when no perturbation is requested.
pub const REFERENCE_GAUGE: f64 = 0.0;

/// The derived scalar controlling the running of the constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningCoefficient {
    /// Coefficient value.
    pub value: f64,
    /// Tag of the scheme version the coefficient was evaluated under.
    pub scheme_tag: String,
    /// Label of the closed-form derivation that produced the value.
    pub derivation: String,
    /// Stable content hash of the coefficient payload.
    pub coefficient_hash: String,
}

fn domain_error(message: impl Into<String>, name: &str, value: f64) -> UftError {
    UftError::Domain(
        ErrorInfo::new("input-out-of-domain", message).with_context(name, value.to_string()),
    )
}

fn require_positive_finite(name: &str, value: f64) -> Result<(), UftError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(domain_error(
            "geometric input must be finite and positive",
            name,
            value,
        ));
    }
    Ok(())
}

fn finish(
    value: f64,
    inputs: &GeometricInputs,
    derivation: &str,
    mode: Mode,
) -> Result<RunningCoefficient, UftError> {
    let value = match mode {
        Mode::Strict => value,
        Mode::Approximate => round_f64(value),
    };
    let scheme_tag = inputs.version.tag().to_string();
    let coefficient_hash = stable_hash_string(&(&scheme_tag, derivation, value))?;
    Ok(RunningCoefficient {
        value,
        scheme_tag,
        derivation: derivation.to_string(),
        coefficient_hash,
    })
}

/// Evaluates the running coefficient from the mode count.
///
/// Closed form `c = n r / (Omega pi^2)` plus a gauge-dependent vertex term
/// and its propagator counterpart. The two gauge terms are the same product
/// negated, so their sum is exactly zero for every finite gauge value and
/// the coefficient carries no residual gauge dependence.
pub fn evaluate_running_coefficient(
    inputs: &GeometricInputs,
    gauge: f64,
    mode: Mode,
) -> Result<RunningCoefficient, UftError> {
    require_positive_finite("mode_count", inputs.mode_count)?;
    require_positive_finite("radius", inputs.radius)?;
    require_positive_finite("solid_angle", inputs.solid_angle)?;
    if !gauge.is_finite() {
        return Err(domain_error(
            "gauge parameter must be finite",
            "gauge",
            gauge,
        ));
    }

    let bare = inputs.mode_count * inputs.radius / (inputs.solid_angle * PI * PI);
    let vertex = gauge * inputs.radius / inputs.solid_angle;
    let propagator = -(gauge * inputs.radius / inputs.solid_angle);
    let value = bare + (vertex + propagator);
    finish(value, inputs, "mode-count", mode)
}

/// Evaluates the running coefficient from the solid angle alone.
///
/// Uses the mode-counting identity `n = 3 Omega / pi`, giving
/// `c = 3 r / pi^3`. For a consistent input table this agrees with
/// [`evaluate_running_coefficient`]; any disagreement signals a broken
/// geometric identity and is surfaced by the identity-cancellation check.
pub fn coefficient_from_solid_angle(
    inputs: &GeometricInputs,
    mode: Mode,
) -> Result<RunningCoefficient, UftError> {
    require_positive_finite("radius", inputs.radius)?;
    require_positive_finite("solid_angle", inputs.solid_angle)?;

    let value = 3.0 * inputs.radius / (PI * PI * PI);
    finish(value, inputs, "solid-angle", mode)
}
