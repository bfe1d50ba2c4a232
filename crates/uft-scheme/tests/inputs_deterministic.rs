use uft_scheme::{get_inputs, SchemeVersion, GEOMETRY_ORIGIN};

#[test]
fn repeated_calls_are_bit_identical() {
    for version in SchemeVersion::all() {
        let first = get_inputs(version);
        for _ in 0..4 {
            let again = get_inputs(version);
            assert_eq!(
                again.mode_count.to_bits(),
                first.mode_count.to_bits(),
                "mode_count drifted for {}",
                version.tag()
            );
            assert_eq!(again.radius.to_bits(), first.radius.to_bits());
            assert_eq!(again.solid_angle.to_bits(), first.solid_angle.to_bits());
        }
    }
}

#[test]
fn input_hash_is_stable() {
    let version = SchemeVersion::NextToLeadingLog;
    let first = get_inputs(version).input_hash().unwrap();
    let second = get_inputs(version).input_hash().unwrap();
    assert_eq!(first, second);
}

#[test]
fn entries_are_geometry_tagged_and_name_ordered() {
    let entries = get_inputs(SchemeVersion::LeadingLog).entries();
    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["mode_count", "radius", "solid_angle"]);
    assert!(entries
        .iter()
        .all(|entry| entry.origin == GEOMETRY_ORIGIN));
}

#[test]
fn unknown_tag_is_fatal() {
    let err = SchemeVersion::from_tag("minimal-subtraction").unwrap_err();
    assert_eq!(err.info().code, "unknown-scheme-version");
}

#[test]
fn registered_tags_round_trip() {
    for version in SchemeVersion::all() {
        assert_eq!(SchemeVersion::from_tag(version.tag()).unwrap(), version);
    }
}
