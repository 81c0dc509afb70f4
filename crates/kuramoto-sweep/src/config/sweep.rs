//! Coupling sweep settings.

use serde::{Deserialize, Serialize};

/// Steady-state strategy used at each grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DetectorKind {
    /// Integrate up to `t_max` and stop at the first stable window.
    /// A non-converged forward point terminates the sweep.
    Windowed,

    /// Integrate a fixed horizon in chunks and summarize trailing blocks.
    /// Always yields a continuation seed.
    #[default]
    Block,
}

/// Coupling grid and sweep-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest coupling strength on the grid.
    pub k_min: f64,

    /// Largest coupling strength on the grid.
    pub k_max: f64,

    /// Number of grid points (inclusive of both ends).
    pub k_steps: usize,

    /// Order-parameter level that counts as synchronized when locating
    /// forward and backward transitions.
    ///
    /// Independent of
    /// [`BlockConfig::sync_threshold`](super::BlockConfig::sync_threshold),
    /// which only labels regimes; the defaults agree.
    pub sync_threshold: f64,

    /// Steady-state strategy.
    #[serde(default)]
    pub detector: DetectorKind,

    /// Seed for the cold-start phase draw. `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Natural frequency per unit degree (ω_i = frequency_scale · deg_i).
    pub frequency_scale: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            k_min: 0.0,
            k_max: 5.0,
            k_steps: 100,
            sync_threshold: 0.8,
            detector: DetectorKind::Block,
            seed: None,
            frequency_scale: 1.0,
        }
    }
}

impl SweepConfig {
    /// Validate the sweep configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.k_min.is_finite() && self.k_min >= 0.0) {
            return Err(format!("k_min must be >= 0, got {}", self.k_min));
        }
        if !self.k_max.is_finite() {
            return Err(format!("k_max must be finite, got {}", self.k_max));
        }
        if self.k_steps == 0 {
            return Err("k_steps must be > 0".to_string());
        }
        if self.k_steps > 1 && self.k_max <= self.k_min {
            return Err(format!(
                "k_max ({}) must be > k_min ({}) when k_steps > 1",
                self.k_max, self.k_min
            ));
        }
        if !(0.0..=1.0).contains(&self.sync_threshold) {
            return Err(format!(
                "sync_threshold must be in [0, 1], got {}",
                self.sync_threshold
            ));
        }
        if !(self.frequency_scale.is_finite() && self.frequency_scale >= 0.0) {
            return Err(format!(
                "frequency_scale must be >= 0, got {}",
                self.frequency_scale
            ));
        }
        Ok(())
    }
}
