//! Source-tagged numeric values enforcing the no-fallback contract.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, UftError};

/// Closed enumeration of provenance sources a published value may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// Computed from the model geometry through the registered pipeline.
    #[serde(rename = "derived")]
    Derived,
    /// Supplied from outside the pipeline for display-only comparison.
    #[serde(rename = "external-reference")]
    ExternalReference,
    /// Stands in for a derivation that has not been implemented yet.
    #[serde(rename = "placeholder-pending-implementation")]
    Placeholder,
}

impl Source {
    /// Returns the stable string tag used in exported records.
    pub fn tag(&self) -> &'static str {
        match self {
            Source::Derived => "derived",
            Source::ExternalReference => "external-reference",
            Source::Placeholder => "placeholder-pending-implementation",
        }
    }

    /// Resolves a stable string tag back into a source.
    pub fn from_tag(tag: &str) -> Result<Self, UftError> {
        match tag {
            "derived" => Ok(Source::Derived),
            "external-reference" => Ok(Source::ExternalReference),
            "placeholder-pending-implementation" => Ok(Source::Placeholder),
            other => Err(UftError::Provenance(
                ErrorInfo::new("unknown-source-tag", "source tag is not registered")
                    .with_context("tag", other),
            )),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A numeric value that always carries its provenance source.
///
/// Bare floats never cross component boundaries; callers must unwrap through
/// [`TaggedValue::into_derived`] before treating a number as a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value")]
pub enum TaggedValue {
    /// A value produced by the derivation pipeline.
    #[serde(rename = "derived")]
    Derived(f64),
    /// An externally supplied comparison value.
    #[serde(rename = "external-reference")]
    ExternalReference(f64),
    /// A derivation that has not been carried out; holds no number at all.
    #[serde(rename = "placeholder-pending-implementation")]
    Pending,
}

impl TaggedValue {
    /// Returns the carried number, if any variant carries one.
    pub fn value(&self) -> Option<f64> {
        match self {
            TaggedValue::Derived(value) | TaggedValue::ExternalReference(value) => Some(*value),
            TaggedValue::Pending => None,
        }
    }

    /// Returns the provenance source of the value.
    pub fn source(&self) -> Source {
        match self {
            TaggedValue::Derived(_) => Source::Derived,
            TaggedValue::ExternalReference(_) => Source::ExternalReference,
            TaggedValue::Pending => Source::Placeholder,
        }
    }

    /// Unwraps the value for use as a first-principles prediction.
    ///
    /// Refuses anything that is not [`TaggedValue::Derived`]; treating an
    /// external reference or placeholder as a prediction is the exact
    /// failure mode the pipeline exists to prevent.
    pub fn into_derived(self) -> Result<f64, UftError> {
        match self {
            TaggedValue::Derived(value) => Ok(value),
            other => Err(UftError::Provenance(
                ErrorInfo::new(
                    "provenance-integrity",
                    "value is not derived and may not be used as a prediction",
                )
                .with_context("source", other.source().tag()),
            )),
        }
    }
}
