use serde::{Deserialize, Serialize};
use uft_core::errors::{ErrorInfo, UftError};
use uft_core::SchemaVersion;

/// Closed enumeration of registered scheme versions.
///
/// The running formula is a versioned strategy, not a hard-coded
/// expression; collaborating documentation selects a version through its
/// opaque tag and never through free-form configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeVersion {
    /// First-order (leading logarithm) running.
    #[serde(rename = "leading-log")]
    LeadingLog,
    /// Second-order running with the quadratic logarithm term enabled.
    #[serde(rename = "next-to-leading-log")]
    NextToLeadingLog,
}

impl SchemeVersion {
    /// All registered scheme versions in declaration order.
    pub fn all() -> [SchemeVersion; 2] {
        [SchemeVersion::LeadingLog, SchemeVersion::NextToLeadingLog]
    }

    /// Resolves an opaque tag into a registered scheme version.
    ///
    /// Unknown tags are a fatal error; no default scheme is ever assumed.
    pub fn from_tag(tag: &str) -> Result<Self, UftError> {
        match tag {
            "leading-log" => Ok(SchemeVersion::LeadingLog),
            "next-to-leading-log" => Ok(SchemeVersion::NextToLeadingLog),
            other => Err(UftError::Scheme(
                ErrorInfo::new("unknown-scheme-version", "scheme tag is not registered")
                    .with_context("tag", other)
                    .with_hint("run `uft schemes` for the registered tags"),
            )),
        }
    }

    /// Returns the stable tag identifying this version in exported records.
    pub fn tag(&self) -> &'static str {
        match self {
            SchemeVersion::LeadingLog => "leading-log",
            SchemeVersion::NextToLeadingLog => "next-to-leading-log",
        }
    }

    /// Coefficient of the quadratic logarithm term in the running law.
    pub fn kappa(&self) -> f64 {
        match self {
            SchemeVersion::LeadingLog => 0.0,
            SchemeVersion::NextToLeadingLog => 0.25,
        }
    }

    /// Formula revision recorded on every estimate this version produces.
    pub fn formula_version(&self) -> SchemaVersion {
        match self {
            SchemeVersion::LeadingLog => SchemaVersion::new(1, 0, 0),
            SchemeVersion::NextToLeadingLog => SchemaVersion::new(2, 0, 0),
        }
    }
}
