use uft_core::{Mode, Source};
use uft_prov::{RecordBuilder, RecordStatus};
use uft_running::evaluate_at_scale;
use uft_scheme::SchemeVersion;
use uft_validate::{run_battery, BatteryInputs, Policy, ValidationReport};

fn passing_state() -> (BatteryInputs, ValidationReport) {
    let state = BatteryInputs::derive(SchemeVersion::LeadingLog, Mode::Strict).unwrap();
    let report = run_battery(&state, &Policy::default()).unwrap();
    (state, report)
}

fn failing_state() -> (BatteryInputs, ValidationReport) {
    let mut state = BatteryInputs::derive(SchemeVersion::LeadingLog, Mode::Strict).unwrap();
    state.inputs.mode_count *= 2.0;
    let report = run_battery(&state, &Policy::default()).unwrap();
    (state, report)
}

fn derived_builder(state: &BatteryInputs) -> RecordBuilder {
    let mut builder = RecordBuilder::new(state.version, state.mode);
    builder.push_inputs(&state.inputs);
    builder.push_coefficient(&state.coefficient);
    builder.push_estimate("constant_baseline", &state.baseline);
    let evolved =
        evaluate_at_scale(&state.baseline, &state.coefficient, 2.0, state.mode).unwrap();
    builder.push_estimate("constant_mu_2", &evolved);
    builder
}

#[test]
fn all_pass_all_derived_is_final() {
    let (state, report) = passing_state();
    let record = derived_builder(&state).finish(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Final);
    assert!(record.rows.iter().all(|row| row.source == Source::Derived));
    assert_eq!(record.validation.total, 5);
    assert_eq!(record.validation.passed, 5);
}

#[test]
fn failed_battery_downgrades_to_unvalidated() {
    let (state, report) = failing_state();
    let record = derived_builder(&state).finish(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Unvalidated);
    assert!(!record.validation.all_pass);
}

#[test]
fn external_reference_rows_never_appear_in_a_final_record() {
    let (state, report) = passing_state();
    let mut builder = derived_builder(&state);
    builder.push_external_reference("constant_observed", 137.035999084);
    let record = builder.finish(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Unvalidated);
    // The safety property: a final record has only derived rows.
    assert!(record
        .rows
        .iter()
        .any(|row| row.source == Source::ExternalReference));
}

#[test]
fn placeholder_rows_carry_no_value_and_block_finality() {
    let (state, report) = passing_state();
    let mut builder = derived_builder(&state);
    builder.push_placeholder("lepton_mass_ratio");
    let record = builder.finish(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Unvalidated);
    let placeholder = record
        .rows
        .iter()
        .find(|row| row.parameter == "lepton_mass_ratio")
        .unwrap();
    assert_eq!(placeholder.source, Source::Placeholder);
    assert_eq!(placeholder.value, None);
}

#[test]
fn approximate_mode_blocks_finality() {
    let state = BatteryInputs::derive(SchemeVersion::LeadingLog, Mode::Approximate).unwrap();
    let report = run_battery(&state, &Policy::default()).unwrap();
    let record = derived_builder(&state).finish(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Unvalidated);
}

#[test]
fn finish_final_is_loud_on_violations() {
    let (state, report) = passing_state();
    let mut builder = derived_builder(&state);
    builder.push_external_reference("constant_observed", 137.035999084);
    let err = builder.finish_final(&report).unwrap_err();
    assert_eq!(err.info().code, "provenance-integrity");

    let (failed_state, failed_report) = failing_state();
    let err = derived_builder(&failed_state)
        .finish_final(&failed_report)
        .unwrap_err();
    assert_eq!(err.info().code, "provenance-integrity");
}

#[test]
fn finish_final_succeeds_on_a_clean_pipeline() {
    let (state, report) = passing_state();
    let record = derived_builder(&state).finish_final(&report).unwrap();
    assert_eq!(record.status, RecordStatus::Final);
}

#[test]
fn mismatched_report_is_rejected() {
    let (state, _) = passing_state();
    let other = BatteryInputs::derive(SchemeVersion::NextToLeadingLog, Mode::Strict).unwrap();
    let other_report = run_battery(&other, &Policy::default()).unwrap();
    let err = derived_builder(&state).finish(&other_report).unwrap_err();
    assert_eq!(err.info().code, "provenance-integrity");
}

#[test]
fn derived_rows_filter_hides_non_predictions() {
    let (state, report) = passing_state();
    let mut builder = derived_builder(&state);
    builder.push_external_reference("constant_observed", 137.035999084);
    builder.push_placeholder("lepton_mass_ratio");
    let record = builder.finish(&report).unwrap();
    let derived: Vec<&str> = record
        .derived_rows()
        .map(|row| row.parameter.as_str())
        .collect();
    assert!(derived.contains(&"running_coefficient"));
    assert!(!derived.contains(&"constant_observed"));
    assert!(!derived.contains(&"lepton_mass_ratio"));
}

#[test]
fn record_hash_ignores_the_timestamp() {
    let (state, report) = passing_state();
    let first = derived_builder(&state).finish(&report).unwrap();
    let second = derived_builder(&state).finish(&report).unwrap();
    assert_eq!(first.record_hash, second.record_hash);
}
