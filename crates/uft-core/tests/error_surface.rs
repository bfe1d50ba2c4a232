use uft_core::{ErrorInfo, UftError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("scheme", "leading-log")
        .with_context("scale", "2.5")
}

#[test]
fn scheme_error_surface() {
    let err = UftError::Scheme(sample_info("unknown-scheme-version", "tag not registered"));
    assert_eq!(err.info().code, "unknown-scheme-version");
    assert!(err.info().context.contains_key("scheme"));
}

#[test]
fn domain_error_surface() {
    let err = UftError::Domain(sample_info("scale-out-of-domain", "denominator vanished"));
    assert_eq!(err.info().code, "scale-out-of-domain");
    assert!(err.info().context.contains_key("scale"));
}

#[test]
fn provenance_error_surface() {
    let err = UftError::Provenance(sample_info("provenance-integrity", "non-derived row"));
    assert_eq!(err.info().code, "provenance-integrity");
}

#[test]
fn serde_error_surface() {
    let err = UftError::Serde(sample_info("json-encode", "schema mismatch"));
    assert_eq!(err.info().code, "json-encode");
}

#[test]
fn display_includes_hint_and_context() {
    let err = UftError::Domain(
        ErrorInfo::new("scale-out-of-domain", "scale must be positive")
            .with_context("scale", "-1")
            .with_hint("pass a scale strictly greater than zero"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("scale-out-of-domain"));
    assert!(rendered.contains("scale=-1"));
    assert!(rendered.contains("strictly greater than zero"));
}
