use uft_scheme::SchemeVersion;

/// Prints the registered scheme versions with their formula revisions.
pub fn run() {
    for version in SchemeVersion::all() {
        let formula = version.formula_version();
        println!(
            "{:<24} kappa={:<6} formula={}.{}.{}",
            version.tag(),
            version.kappa(),
            formula.major,
            formula.minor,
            formula.patch
        );
    }
}
