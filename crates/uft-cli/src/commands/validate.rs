use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use uft_scheme::SchemeVersion;
use uft_validate::{run_battery, BatteryInputs};

use super::{load_policy, mode_from_flag};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Scheme version tag to validate.
    #[arg(long)]
    pub scheme: String,
    /// Opt in to the fast approximate evaluation path.
    #[arg(long)]
    pub approximate: bool,
    /// Policy YAML overriding the default tolerances.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Optional directory where the full report is written.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Runs the battery and prints the checklist; returns the overall verdict.
pub fn run(args: &ValidateArgs) -> Result<bool, Box<dyn Error>> {
    let version = SchemeVersion::from_tag(&args.scheme)?;
    let mode = mode_from_flag(args.approximate);
    let policy = load_policy(args.policy.as_deref())?;

    let state = BatteryInputs::derive(version, mode)?;
    let report = run_battery(&state, &policy)?;

    for check in &report.checks {
        let verdict = if check.pass { "PASS" } else { "FAIL" };
        println!(
            "[{verdict}] {:<24} deviation={:>12.3e} tolerance={:>12.3e}",
            check.name, check.deviation, check.tolerance
        );
        if let Some(note) = &check.note {
            println!("       {note}");
        }
    }
    if report.all_pass {
        println!("ALL CHECKS PASSED");
    } else {
        println!("{} CHECK(S) FAILED", report.failed_count());
    }

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        fs::write(
            out.join("validation_report.json"),
            uft_validate::serde::to_canonical_json_bytes(&report)?,
        )?;
    }
    Ok(report.all_pass)
}
