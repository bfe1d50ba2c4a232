use uft_core::Mode;
use uft_scheme::SchemeVersion;
use uft_validate::{run_battery, BatteryInputs, Policy};

#[test]
fn doubled_mode_count_fails_the_cancellation_identity() {
    let mut state = BatteryInputs::derive(SchemeVersion::LeadingLog, Mode::Strict).unwrap();
    state.inputs.mode_count *= 2.0;
    let report = run_battery(&state, &Policy::default()).unwrap();

    assert!(!report.all_pass);
    assert_eq!(report.checks.len(), 5, "report must stay complete");

    let identity = report
        .checks
        .iter()
        .find(|check| check.name == "identity_cancellation")
        .unwrap();
    assert!(!identity.pass);
    assert!(identity.deviation > 0.0);
    assert!(identity.note.is_some());

    // The corruption is local: the remaining identities still hold.
    for name in [
        "switch_off_limit",
        "gauge_independence",
        "scale_independence",
        "input_uniqueness",
    ] {
        let check = report.checks.iter().find(|check| check.name == name).unwrap();
        assert!(check.pass, "{name} should still pass");
    }
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn broken_inputs_are_reported_not_thrown() {
    let mut state = BatteryInputs::derive(SchemeVersion::LeadingLog, Mode::Strict).unwrap();
    state.inputs.solid_angle = 0.0;
    // Evaluation inside the affected checks fails; the battery still
    // completes and reports the failure as data.
    let report = run_battery(&state, &Policy::default()).unwrap();
    assert!(!report.all_pass);
    assert_eq!(report.checks.len(), 5);
    let identity = report
        .checks
        .iter()
        .find(|check| check.name == "identity_cancellation")
        .unwrap();
    assert!(!identity.pass);
}

#[test]
fn failing_report_serde_round_trips() {
    let mut state = BatteryInputs::derive(SchemeVersion::NextToLeadingLog, Mode::Strict).unwrap();
    state.inputs.mode_count *= 2.0;
    let report = run_battery(&state, &Policy::default()).unwrap();
    let bytes = uft_validate::serde::to_canonical_json_bytes(&report).unwrap();
    let restored: uft_validate::ValidationReport =
        uft_validate::serde::from_json_slice(&bytes).unwrap();
    assert_eq!(restored, report);
}
