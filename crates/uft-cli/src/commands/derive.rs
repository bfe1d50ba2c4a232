use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use uft_prov::{write_csv, write_json, RecordBuilder};
use uft_running::{evaluate_batch, SCALE0};
use uft_scheme::SchemeVersion;
use uft_validate::{run_battery, BatteryInputs};

use super::{load_policy, mode_from_flag};

#[derive(Args, Debug)]
pub struct DeriveArgs {
    /// Scheme version tag to derive under.
    #[arg(long)]
    pub scheme: String,
    /// Scales to evaluate the constant at; defaults to the reference scale.
    #[arg(long = "scale")]
    pub scales: Vec<f64>,
    /// Opt in to the fast approximate evaluation path.
    #[arg(long)]
    pub approximate: bool,
    /// Policy YAML overriding the default tolerances.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Output directory for the record and reports.
    #[arg(long)]
    pub out: PathBuf,
}

/// Derives the constant, validates it, and exports the provenance record.
pub fn run(args: &DeriveArgs) -> Result<bool, Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let version = SchemeVersion::from_tag(&args.scheme)?;
    let mode = mode_from_flag(args.approximate);
    let policy = load_policy(args.policy.as_deref())?;

    let state = BatteryInputs::derive(version, mode)?;
    let report = run_battery(&state, &policy)?;

    let mut builder = RecordBuilder::new(version, mode);
    builder.push_inputs(&state.inputs);
    builder.push_coefficient(&state.coefficient);
    builder.push_estimate("constant_baseline", &state.baseline);

    let scales = if args.scales.is_empty() {
        vec![SCALE0]
    } else {
        args.scales.clone()
    };
    let mut skipped = Vec::new();
    for (scale, outcome) in evaluate_batch(&state.baseline, &state.coefficient, &scales, mode) {
        match outcome {
            Ok(estimate) => {
                builder.push_estimate(&format!("constant_mu_{scale}"), &estimate);
            }
            Err(err) => {
                // One out-of-domain scale never aborts the rest of the batch.
                skipped.push(json!({
                    "scale": scale,
                    "error": err.info().message,
                }));
            }
        }
    }

    let record = builder.finish(&report)?;
    write_json(&record, &args.out.join("record.json"))?;
    write_csv(&record, &args.out.join("record.csv"))?;
    fs::write(
        args.out.join("validation_report.json"),
        uft_validate::serde::to_canonical_json_bytes(&report)?,
    )?;

    let summary = json!({
        "scheme": version.tag(),
        "mode": mode.tag(),
        "status": record.status.tag(),
        "all_pass": report.all_pass,
        "scales_evaluated": scales.len() - skipped.len(),
        "scales_skipped": skipped,
        "record_hash": record.record_hash,
    });
    fs::write(
        args.out.join("summary.json"),
        serde_json::to_string_pretty(&summary)?,
    )?;

    println!(
        "record {} written to {} (validation: {})",
        record.status.tag(),
        args.out.display(),
        if report.all_pass {
            "ALL CHECKS PASSED".to_string()
        } else {
            format!("{} CHECK(S) FAILED", report.failed_count())
        }
    );
    Ok(report.all_pass)
}
