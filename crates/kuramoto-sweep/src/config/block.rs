//! Block-statistics detector settings.
//!
//! The measurement horizon is integrated in chunks; the trailing
//! `num_blocks * block_length` samples of r(t) are split into disjoint
//! contiguous blocks whose means feed the summary and the regime label.

use serde::{Deserialize, Serialize};

/// Settings for the bounded-runtime block measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Simulated time per grid point.
    pub t_measure: f64,

    /// Length of one integration chunk. The last chunk may be shorter.
    pub t_chunk: f64,

    /// Samples per block.
    pub block_length: usize,

    /// Number of trailing blocks (M).
    pub num_blocks: usize,

    /// Dispersion ceiling on block means before flagging `Noisy`.
    pub sigma_max: f64,

    /// Drift ceiling on the block-mean slope (per block) before flagging
    /// `NotPlateau`.
    pub slope_tol: f64,

    /// Minimum r_mean labelled `Synchronized`.
    ///
    /// Only drives the regime label. It is independent of
    /// [`SweepConfig::sync_threshold`](super::SweepConfig::sync_threshold),
    /// which locates the hysteresis transitions; the defaults agree.
    /// Range: `[0.0, 1.0]`
    pub sync_threshold: f64,

    /// Width of the desynchronized band above the incoherent baseline
    /// `1/sqrt(N)`.
    pub desync_margin: f64,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            t_measure: 200.0,
            t_chunk: 50.0,
            block_length: 200,
            num_blocks: 10,
            sigma_max: 0.02,
            slope_tol: 0.005,
            sync_threshold: 0.8,
            desync_margin: 0.1,
        }
    }
}

impl BlockConfig {
    /// Number of r(t) samples that feed the block statistics.
    #[inline]
    pub fn window_samples(&self) -> usize {
        self.block_length * self.num_blocks
    }

    /// Validate the block configuration against the output cadence `dt`.
    pub fn validate(&self, dt: f64) -> Result<(), String> {
        if !(self.t_measure.is_finite() && self.t_measure > 0.0) {
            return Err(format!("t_measure must be > 0, got {}", self.t_measure));
        }
        if !(self.t_chunk.is_finite() && self.t_chunk > 0.0) {
            return Err(format!("t_chunk must be > 0, got {}", self.t_chunk));
        }
        if self.block_length == 0 {
            return Err("block_length must be > 0".to_string());
        }
        if self.num_blocks == 0 {
            return Err("num_blocks must be > 0".to_string());
        }
        if !(self.sigma_max.is_finite() && self.sigma_max >= 0.0) {
            return Err(format!("sigma_max must be >= 0, got {}", self.sigma_max));
        }
        if !(self.slope_tol.is_finite() && self.slope_tol >= 0.0) {
            return Err(format!("slope_tol must be >= 0, got {}", self.slope_tol));
        }
        if !(0.0..=1.0).contains(&self.sync_threshold) {
            return Err(format!(
                "sync_threshold must be in [0, 1], got {}",
                self.sync_threshold
            ));
        }
        if !(0.0..=1.0).contains(&self.desync_margin) {
            return Err(format!(
                "desync_margin must be in [0, 1], got {}",
                self.desync_margin
            ));
        }
        if dt > 0.0 {
            let available = ((self.t_measure / dt) - 1e-9).ceil() as usize;
            if self.window_samples() > available {
                return Err(format!(
                    "num_blocks * block_length ({}) exceeds the {} samples in t_measure",
                    self.window_samples(),
                    available
                ));
            }
        }
        Ok(())
    }
}
