#![deny(missing_docs)]
#![doc = "Scheme registry, fixed geometric inputs, and running-coefficient evaluation for the UFT constant pipeline."]

/// Running-coefficient evaluation in its registered closed forms.
pub mod evaluate;
/// Canonical hashing helpers.
pub mod hash;
/// Baked geometric input tables.
pub mod inputs;
/// Canonical JSON helpers.
pub mod serde;
/// Registered scheme versions.
pub mod version;

pub use evaluate::{
    coefficient_from_solid_angle, evaluate_running_coefficient, RunningCoefficient,
    REFERENCE_GAUGE,
};
pub use inputs::{get_inputs, GeometricInput, GeometricInputs, GEOMETRY_ORIGIN};
pub use version::SchemeVersion;
