use uft_core::{Mode, SchemaVersion, TaggedValue};
use uft_running::{baseline, evaluate_at_scale, evaluate_batch, ConstantEstimate, SCALE0};
use uft_scheme::{evaluate_running_coefficient, get_inputs, SchemeVersion, REFERENCE_GAUGE};

fn pipeline_pair() -> (ConstantEstimate, uft_scheme::RunningCoefficient) {
    let inputs = get_inputs(SchemeVersion::LeadingLog);
    let base = baseline(&inputs, Mode::Strict).unwrap();
    let coefficient =
        evaluate_running_coefficient(&inputs, REFERENCE_GAUGE, Mode::Strict).unwrap();
    (base, coefficient)
}

#[test]
fn non_positive_scales_are_rejected() {
    let (base, coefficient) = pipeline_pair();
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = evaluate_at_scale(&base, &coefficient, scale, Mode::Strict).unwrap_err();
        assert_eq!(err.info().code, "scale-out-of-domain", "scale {scale}");
    }
}

#[test]
fn pole_crossing_scales_are_rejected() {
    let (base, coefficient) = pipeline_pair();
    // The leading-log denominator vanishes at ln(mu) = 1/c; anything at or
    // beyond the pole must be refused.
    let pole = (1.0 / coefficient.value).exp();
    let err = evaluate_at_scale(&base, &coefficient, pole * 2.0, Mode::Strict).unwrap_err();
    assert_eq!(err.info().code, "scale-out-of-domain");
}

#[test]
fn a_bad_scale_does_not_poison_the_batch() {
    let (base, coefficient) = pipeline_pair();
    let outcomes = evaluate_batch(&base, &coefficient, &[1.0, -2.0, 3.0], Mode::Strict);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].1.is_ok());
    assert!(outcomes[1].1.is_err());
    assert!(outcomes[2].1.is_ok());
}

#[test]
fn external_reference_baselines_are_refused() {
    let (base, coefficient) = pipeline_pair();
    let external = ConstantEstimate {
        value: TaggedValue::ExternalReference(137.035999),
        ..base
    };
    let err = evaluate_at_scale(&external, &coefficient, 2.0, Mode::Strict).unwrap_err();
    assert_eq!(err.info().code, "provenance-integrity");
}

#[test]
fn pending_baselines_are_refused() {
    let (_, coefficient) = pipeline_pair();
    let pending = ConstantEstimate {
        scale: SCALE0,
        value: TaggedValue::Pending,
        scheme_tag: SchemeVersion::LeadingLog.tag().to_string(),
        formula_version: SchemaVersion::new(1, 0, 0),
    };
    assert!(evaluate_at_scale(&pending, &coefficient, 2.0, Mode::Strict).is_err());
}

#[test]
fn mismatched_schemes_are_refused() {
    let (base, _) = pipeline_pair();
    let other_inputs = get_inputs(SchemeVersion::NextToLeadingLog);
    let other_coefficient =
        evaluate_running_coefficient(&other_inputs, REFERENCE_GAUGE, Mode::Strict).unwrap();
    let err = evaluate_at_scale(&base, &other_coefficient, 2.0, Mode::Strict).unwrap_err();
    assert_eq!(err.info().code, "scheme-mismatch");
}

#[test]
fn estimate_json_round_trips() {
    let (base, _) = pipeline_pair();
    let json = uft_running::serde::estimate_to_json(&base).unwrap();
    let restored = uft_running::serde::estimate_from_json(&json).unwrap();
    assert_eq!(restored, base);
}
