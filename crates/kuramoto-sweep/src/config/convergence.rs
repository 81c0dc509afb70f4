//! Windowed-stability detector settings.

use serde::{Deserialize, Serialize};

/// Settings for "run until converged" measurements.
///
/// Convergence is declared at the first sample index `i >= window` where
/// every value of `r[i - window..i]` lies within `eps` of `r[i - 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceConfig {
    /// Integration horizon searched for a steady state.
    pub t_max: f64,

    /// Trailing window length in samples.
    pub window: usize,

    /// Maximum allowed deviation inside the window.
    pub eps: f64,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            t_max: 500.0,
            window: 100,
            eps: 1e-4,
        }
    }
}

impl ConvergenceConfig {
    /// Validate the convergence configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.t_max.is_finite() && self.t_max > 0.0) {
            return Err(format!("t_max must be > 0, got {}", self.t_max));
        }
        if self.window == 0 {
            return Err("window must be > 0".to_string());
        }
        if !(self.eps.is_finite() && self.eps > 0.0) {
            return Err(format!("eps must be > 0, got {}", self.eps));
        }
        Ok(())
    }
}
