use uft_core::errors::UftError;
use uft_core::Mode;
use uft_running::{baseline, evaluate_at_scale, log_factor, ConstantEstimate};
use uft_scheme::{
    coefficient_from_solid_angle, evaluate_running_coefficient, get_inputs, GeometricInputs,
    RunningCoefficient, SchemeVersion, REFERENCE_GAUGE,
};

use crate::policies::Policy;
use crate::report::{ValidationProvenance, ValidationReport, ValidationResult};

/// Gauge parameters probed by the gauge-independence check.
const GAUGE_PROBES: [f64; 2] = [0.3, 1.7];
/// Probe scales used by the scale-independence check.
const SCALE_PROBES: [f64; 2] = [2.0, 3.0];
/// Reference scales the invariant is re-anchored at.
const REFERENCE_PROBES: [f64; 2] = [1.0, 1.5];

/// Completed pipeline state the battery validates.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryInputs {
    /// Scheme version under validation.
    pub version: SchemeVersion,
    /// Geometric inputs the pipeline ran with.
    pub inputs: GeometricInputs,
    /// Running coefficient derived from the inputs.
    pub coefficient: RunningCoefficient,
    /// Baseline constant at the reference scale.
    pub baseline: ConstantEstimate,
    /// Mode the pipeline ran under.
    pub mode: Mode,
}

impl BatteryInputs {
    /// Derives a complete pipeline state for a scheme version.
    pub fn derive(version: SchemeVersion, mode: Mode) -> Result<Self, UftError> {
        let inputs = get_inputs(version);
        let coefficient = evaluate_running_coefficient(&inputs, REFERENCE_GAUGE, mode)?;
        let base = baseline(&inputs, mode)?;
        Ok(Self {
            version,
            inputs,
            coefficient,
            baseline: base,
            mode,
        })
    }
}

fn failed(name: &str, tolerance: f64, err: &UftError) -> ValidationResult {
    ValidationResult {
        name: name.to_string(),
        pass: false,
        deviation: f64::MAX,
        tolerance,
        note: Some(err.info().message.clone()),
    }
}

fn graded(name: &str, deviation: f64, tolerance: f64, note: &str) -> ValidationResult {
    let pass = deviation <= tolerance;
    ValidationResult {
        name: name.to_string(),
        pass,
        deviation,
        tolerance,
        note: if pass { None } else { Some(note.to_string()) },
    }
}

/// Two independently derived renormalization coefficients must agree.
fn identity_cancellation(state: &BatteryInputs, policy: &Policy) -> ValidationResult {
    let name = "identity_cancellation";
    let from_modes = evaluate_running_coefficient(&state.inputs, REFERENCE_GAUGE, state.mode);
    let from_angle = coefficient_from_solid_angle(&state.inputs, state.mode);
    match (from_modes, from_angle) {
        (Ok(first), Ok(second)) => graded(
            name,
            policy.round((first.value - second.value).abs()),
            policy.identity_tol,
            "mode-count and solid-angle derivations disagree; a geometric identity is broken",
        ),
        (Err(err), _) | (_, Err(err)) => failed(name, policy.identity_tol, &err),
    }
}

/// Evolving to the reference scale must reproduce the baseline exactly.
fn switch_off_limit(state: &BatteryInputs, policy: &Policy) -> ValidationResult {
    let name = "switch_off_limit";
    let evolved = evaluate_at_scale(
        &state.baseline,
        &state.coefficient,
        state.baseline.scale,
        state.mode,
    );
    match evolved {
        Ok(estimate) => {
            let base = state.baseline.value.value().unwrap_or(f64::MAX);
            let ratio = estimate.value.value().unwrap_or(f64::MAX) / base;
            graded(
                name,
                policy.round((ratio - 1.0).abs()),
                policy.limit_tol,
                "running does not collapse to the base theory at switch-off",
            )
        }
        Err(err) => failed(name, policy.limit_tol, &err),
    }
}

/// The coefficient must not move under a change of auxiliary gauge.
fn gauge_independence(state: &BatteryInputs, policy: &Policy) -> ValidationResult {
    let name = "gauge_independence";
    let first = evaluate_running_coefficient(&state.inputs, GAUGE_PROBES[0], state.mode);
    let second = evaluate_running_coefficient(&state.inputs, GAUGE_PROBES[1], state.mode);
    match (first, second) {
        (Ok(first), Ok(second)) => graded(
            name,
            // Deliberately unrounded: any nonzero variation is a hard failure.
            (first.value - second.value).abs(),
            policy.gauge_tol,
            "running coefficient depends on the auxiliary gauge parameter",
        ),
        (Err(err), _) | (_, Err(err)) => failed(name, policy.gauge_tol, &err),
    }
}

/// The coefficient times the renormalization logarithm difference must not
/// depend on the reference scale it is anchored at.
fn scale_independence(state: &BatteryInputs, policy: &Policy) -> ValidationResult {
    let name = "scale_independence";
    let anchored = |reference: f64| -> Result<f64, UftError> {
        let first = log_factor(SCALE_PROBES[0], reference)?;
        let second = log_factor(SCALE_PROBES[1], reference)?;
        Ok(state.coefficient.value * (first - second))
    };
    match (anchored(REFERENCE_PROBES[0]), anchored(REFERENCE_PROBES[1])) {
        (Ok(first), Ok(second)) => graded(
            name,
            policy.round((first - second).abs()),
            policy.scale_tol,
            "renormalization product drifts under reference-scale change",
        ),
        (Err(err), _) | (_, Err(err)) => failed(name, policy.scale_tol, &err),
    }
}

/// The provider must hand out bit-identical inputs on every call.
fn input_uniqueness(state: &BatteryInputs, policy: &Policy) -> ValidationResult {
    let name = "input_uniqueness";
    let first = get_inputs(state.version);
    let mut worst: f64 = 0.0;
    let mut identical = true;
    for _ in 0..policy.uniqueness_probes.max(1) {
        let probe = get_inputs(state.version);
        let fields = [
            (probe.mode_count, first.mode_count),
            (probe.radius, first.radius),
            (probe.solid_angle, first.solid_angle),
        ];
        for (probed, reference) in fields {
            if probed.to_bits() != reference.to_bits() {
                identical = false;
                worst = worst.max((probed - reference).abs());
            }
        }
    }
    ValidationResult {
        name: name.to_string(),
        pass: identical,
        deviation: worst,
        tolerance: 0.0,
        note: if identical {
            None
        } else {
            Some("geometric inputs vary between calls".to_string())
        },
    }
}

/// Runs the fixed battery of five independent checks.
///
/// Checks never short-circuit; a failing check is reported, never corrected,
/// and the returned report always contains all five results.
pub fn run_battery(state: &BatteryInputs, policy: &Policy) -> Result<ValidationReport, UftError> {
    let checks = vec![
        identity_cancellation(state, policy),
        switch_off_limit(state, policy),
        gauge_independence(state, policy),
        scale_independence(state, policy),
        input_uniqueness(state, policy),
    ];
    let check_order = checks.iter().map(|check| check.name.clone()).collect();
    let provenance = ValidationProvenance {
        policy: policy.clone(),
        input_hash: state.inputs.input_hash()?,
        scheme_tag: state.version.tag().to_string(),
        mode: state.mode,
        check_order,
    };
    ValidationReport::new(checks, provenance)
}
