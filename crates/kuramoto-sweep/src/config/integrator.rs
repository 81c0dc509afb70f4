//! Adaptive integrator settings.
//!
//! Tolerances are tight because the location of the synchronization
//! transition is sensitive to accumulated phase drift over long horizons.

use serde::{Deserialize, Serialize};

/// Settings for the Dormand-Prince integrator and its output grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegratorConfig {
    /// Fixed output cadence (time units between samples).
    pub dt: f64,

    /// Relative tolerance of the local error estimate.
    pub rtol: f64,

    /// Absolute tolerance of the local error estimate.
    pub atol: f64,

    /// Maximum attempted steps (accepted + rejected) per integration call.
    pub max_steps: usize,

    /// Whether the sample grid includes `T` itself.
    /// When `false` the grid is `0, dt, 2dt, ...` strictly below `T`.
    #[serde(default)]
    pub include_endpoint: bool,

    /// Initial trial step. `None` selects one from the field magnitude.
    #[serde(default)]
    pub initial_step: Option<f64>,

    /// Safety factor applied to the optimal step estimate.
    pub safety: f64,

    /// Lower bound on the step shrink factor.
    pub min_factor: f64,

    /// Upper bound on the step growth factor.
    pub max_factor: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt: 0.05,
            rtol: 1e-8,
            atol: 1e-10,
            max_steps: 1_000_000,
            include_endpoint: false,
            initial_step: None,
            safety: 0.9,
            min_factor: 0.2,
            max_factor: 10.0,
        }
    }
}

impl IntegratorConfig {
    /// Validate the integrator configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(format!("dt must be > 0, got {}", self.dt));
        }
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(format!("rtol must be > 0, got {}", self.rtol));
        }
        if !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(format!("atol must be > 0, got {}", self.atol));
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0".to_string());
        }
        if let Some(h0) = self.initial_step {
            if !(h0.is_finite() && h0 > 0.0) {
                return Err(format!("initial_step must be > 0, got {}", h0));
            }
        }
        if !(0.0 < self.safety && self.safety < 1.0) {
            return Err(format!("safety must be in (0, 1), got {}", self.safety));
        }
        if !(0.0 < self.min_factor && self.min_factor < 1.0) {
            return Err(format!(
                "min_factor must be in (0, 1), got {}",
                self.min_factor
            ));
        }
        if self.max_factor <= 1.0 {
            return Err(format!("max_factor must be > 1, got {}", self.max_factor));
        }
        Ok(())
    }

    /// Number of output samples produced for a horizon of length `t_end`.
    pub fn sample_count(&self, t_end: f64) -> usize {
        let strict = ((t_end / self.dt) - 1e-9).ceil().max(0.0) as usize;
        if self.include_endpoint {
            strict + 1
        } else {
            strict
        }
    }
}
