//! Explicit evaluation mode threaded through every call boundary.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Evaluation discipline selected by the caller.
///
/// There is intentionally no `Default` implementation: every entry point
/// must receive the mode explicitly so an approximate run is always an
/// auditable opt-in, never an ambient fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Full closed-form evaluation at full precision.
    #[serde(rename = "strict")]
    Strict,
    /// Fast display path: truncated running law, canonically rounded output.
    #[serde(rename = "approximate")]
    Approximate,
}

impl Mode {
    /// Returns the stable string tag recorded in reports and records.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Approximate => "approximate",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
