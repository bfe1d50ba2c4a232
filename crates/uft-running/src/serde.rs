use uft_core::errors::{ErrorInfo, UftError};

use crate::estimate::ConstantEstimate;

fn map_err(err: serde_json::Error, code: &str) -> UftError {
    UftError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a constant estimate to JSON.
pub fn estimate_to_json(estimate: &ConstantEstimate) -> Result<String, UftError> {
    serde_json::to_string_pretty(estimate).map_err(|err| map_err(err, "estimate-serialize"))
}

/// Restores a constant estimate from JSON.
pub fn estimate_from_json(json: &str) -> Result<ConstantEstimate, UftError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "estimate-deserialize"))
}
