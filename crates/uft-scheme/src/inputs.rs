use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uft_core::errors::UftError;

use crate::hash::stable_hash_string;
use crate::version::SchemeVersion;

/// Origin tag carried by every geometric input row.
pub const GEOMETRY_ORIGIN: &str = "model-geometry";

/// A single named geometric parameter with its declared value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricInput {
    /// Stable parameter name.
    pub name: String,
    /// Declared dimensionless value.
    pub value: f64,
    /// Provenance origin; always [`GEOMETRY_ORIGIN`], never a fitted value.
    pub origin: String,
}

/// The fixed geometric input set for one scheme version.
///
/// Fields are declared constants of the model: constructed from the baked
/// table, read-only thereafter, with no file or network access at call
/// time. Field-level construction is exposed so perturbation studies can
/// probe the validator's sensitivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricInputs {
    /// Scheme version this input set belongs to.
    pub version: SchemeVersion,
    /// Effective number of boundary modes.
    pub mode_count: f64,
    /// Normalized characteristic radius.
    pub radius: f64,
    /// Total solid angle subtended by the mode sphere.
    pub solid_angle: f64,
}

impl GeometricInputs {
    /// Lists the inputs as named rows in stable name order.
    pub fn entries(&self) -> Vec<GeometricInput> {
        let row = |name: &str, value: f64| GeometricInput {
            name: name.to_string(),
            value,
            origin: GEOMETRY_ORIGIN.to_string(),
        };
        vec![
            row("mode_count", self.mode_count),
            row("radius", self.radius),
            row("solid_angle", self.solid_angle),
        ]
    }

    /// Stable content hash of the input set.
    pub fn input_hash(&self) -> Result<String, UftError> {
        stable_hash_string(&(self.version.tag(), self.entries()))
    }
}

/// Returns the baked geometric input table for a scheme version.
///
/// Repeated calls return identical values; the table is compiled in and is
/// not scale- or context-dependent.
pub fn get_inputs(version: SchemeVersion) -> GeometricInputs {
    // Both registered versions share the same geometry; they differ only in
    // the order of the running law.
    GeometricInputs {
        version,
        mode_count: 12.0,
        radius: 1.0,
        solid_angle: 4.0 * PI,
    }
}
