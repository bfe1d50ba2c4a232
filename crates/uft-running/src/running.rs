use uft_core::errors::{ErrorInfo, UftError};
use uft_core::{Mode, TaggedValue};
use uft_scheme::{RunningCoefficient, SchemeVersion};

use crate::estimate::ConstantEstimate;

/// Smallest denominator accepted before the pole region is declared.
pub const DENOM_MIN: f64 = 1e-9;

fn round_f64(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}

fn domain_error(message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new("scale-out-of-domain", message)
}

/// Logarithmic renormalization factor `ln(scale / reference)`.
///
/// Both scales must be finite and strictly positive; the model is not
/// defined elsewhere.
pub fn log_factor(scale: f64, reference: f64) -> Result<f64, UftError> {
    for (name, value) in [("scale", scale), ("reference", reference)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(UftError::Domain(
                domain_error("scales must be finite and strictly positive")
                    .with_context(name, value.to_string()),
            ));
        }
    }
    Ok((scale / reference).ln())
}

/// Evolves the baseline constant to an arbitrary scale.
///
/// Evolution law `A(mu) = A0 / (1 - c L - kappa c^2 L^2)` with
/// `L = ln(mu / mu0)`. Reduces to the baseline exactly at `mu = mu0` and is
/// smooth and monotonic over the validity region; scales that drive the
/// denominator to [`DENOM_MIN`] or below, or off the physical branch, are
/// rejected. The baseline must carry a `derived` value; evolving an
/// external reference or placeholder is a provenance violation.
pub fn evaluate_at_scale(
    baseline: &ConstantEstimate,
    coefficient: &RunningCoefficient,
    scale: f64,
    mode: Mode,
) -> Result<ConstantEstimate, UftError> {
    if baseline.scheme_tag != coefficient.scheme_tag {
        return Err(UftError::Scheme(
            ErrorInfo::new("scheme-mismatch", "baseline and coefficient schemes differ")
                .with_context("baseline", &baseline.scheme_tag)
                .with_context("coefficient", &coefficient.scheme_tag),
        ));
    }
    let base_value = baseline.value.into_derived()?;
    let log = log_factor(scale, baseline.scale)?;

    let version = SchemeVersion::from_tag(&coefficient.scheme_tag)?;
    let kappa = match mode {
        Mode::Strict => version.kappa(),
        // Fast path truncates the quadratic logarithm term.
        Mode::Approximate => 0.0,
    };

    let x = coefficient.value * log;
    let denominator = 1.0 - x - kappa * x * x;
    if denominator <= DENOM_MIN {
        return Err(UftError::Domain(
            domain_error("denominator vanished; scale is outside the model's validity region")
                .with_context("scale", scale.to_string())
                .with_context("denominator", denominator.to_string()),
        ));
    }
    if 1.0 + 2.0 * kappa * x <= 0.0 {
        return Err(UftError::Domain(
            domain_error("scale left the physical branch of the evolution law")
                .with_context("scale", scale.to_string()),
        ));
    }

    let value = base_value / denominator;
    let value = match mode {
        Mode::Strict => value,
        Mode::Approximate => round_f64(value),
    };
    Ok(ConstantEstimate {
        scale,
        value: TaggedValue::Derived(value),
        scheme_tag: baseline.scheme_tag.clone(),
        formula_version: baseline.formula_version,
    })
}

/// Evaluates a batch of scales, isolating per-scale domain failures.
///
/// One out-of-domain scale never aborts the remaining evaluations.
pub fn evaluate_batch(
    baseline: &ConstantEstimate,
    coefficient: &RunningCoefficient,
    scales: &[f64],
    mode: Mode,
) -> Vec<(f64, Result<ConstantEstimate, UftError>)> {
    scales
        .iter()
        .map(|&scale| (scale, evaluate_at_scale(baseline, coefficient, scale, mode)))
        .collect()
}
