#![deny(missing_docs)]
#![doc = "Scale evolution of the derived constant: baseline derivation and the running procedure."]

/// Baseline derivation and the tagged estimate type.
pub mod estimate;
/// The one-parameter scale evolution law.
pub mod running;
/// JSON io helpers for estimates.
pub mod serde;

pub use estimate::{baseline, ConstantEstimate, SCALE0};
pub use running::{evaluate_at_scale, evaluate_batch, log_factor, DENOM_MIN};
