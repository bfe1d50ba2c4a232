#![deny(missing_docs)]
#![doc = "Self-consistency validation battery for the UFT constant derivation pipeline."]

/// The fixed battery of five independent checks.
pub mod battery;
/// Canonical hashing helpers.
pub mod hash;
/// Tolerance policy definitions.
pub mod policies;
/// Per-check results and the aggregated report.
pub mod report;
/// Canonical JSON helpers.
pub mod serde;

pub use battery::{run_battery, BatteryInputs};
pub use policies::Policy;
pub use report::{ValidationProvenance, ValidationReport, ValidationResult};
