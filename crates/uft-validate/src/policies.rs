use serde::{Deserialize, Serialize};

/// Tolerance policy controlling the validation battery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    /// Rounding granularity applied to reported deviations.
    #[serde(default = "Policy::default_rounding")]
    pub rounding: f64,
    /// Tolerance for the identity-cancellation check.
    #[serde(default = "Policy::default_identity_tol")]
    pub identity_tol: f64,
    /// Tolerance for the switch-off limit check.
    #[serde(default = "Policy::default_limit_tol")]
    pub limit_tol: f64,
    /// Tolerance for the gauge-independence check; zero means exact.
    #[serde(default = "Policy::default_gauge_tol")]
    pub gauge_tol: f64,
    /// Tolerance for the scale-independence check.
    #[serde(default = "Policy::default_scale_tol")]
    pub scale_tol: f64,
    /// Number of repeated provider calls in the input-uniqueness check.
    #[serde(default = "Policy::default_uniqueness_probes")]
    pub uniqueness_probes: usize,
}

impl Policy {
    const fn default_rounding() -> f64 {
        1e-12
    }

    const fn default_identity_tol() -> f64 {
        1e-10
    }

    const fn default_limit_tol() -> f64 {
        1e-10
    }

    const fn default_gauge_tol() -> f64 {
        0.0
    }

    const fn default_scale_tol() -> f64 {
        1e-10
    }

    const fn default_uniqueness_probes() -> usize {
        3
    }

    /// Rounds the provided value according to the policy granularity.
    pub fn round(&self, value: f64) -> f64 {
        if self.rounding <= 0.0 {
            return value;
        }
        (value / self.rounding).round() * self.rounding
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            rounding: Self::default_rounding(),
            identity_tol: Self::default_identity_tol(),
            limit_tol: Self::default_limit_tol(),
            gauge_tol: Self::default_gauge_tol(),
            scale_tol: Self::default_scale_tol(),
            uniqueness_probes: Self::default_uniqueness_probes(),
        }
    }
}
