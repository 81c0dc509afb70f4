//! Simulation configuration types.
//!
//! Every parameter of a sweep (output cadence, tolerances, horizons, block
//! partitioning, classification thresholds, coupling grid) is passed in
//! through [`SimulationConfig`]; nothing is baked into the detectors.

mod block;
mod convergence;
mod integrator;
mod sweep;

#[cfg(test)]
mod tests;

pub use self::block::BlockConfig;
pub use self::convergence::ConvergenceConfig;
pub use self::integrator::IntegratorConfig;
pub use self::sweep::{DetectorKind, SweepConfig};

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Top-level configuration for a coupling sweep.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::config::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.sweep.k_steps, 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    /// Integrator tolerances and output cadence.
    pub integrator: IntegratorConfig,

    /// Windowed-stability detector settings.
    pub convergence: ConvergenceConfig,

    /// Block-statistics detector settings.
    pub block: BlockConfig,

    /// Coupling grid and strategy.
    pub sweep: SweepConfig,
}

impl SimulationConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Short horizons for smoke runs and tests.
    ///
    /// Keeps the default tolerances but measures 60 time units per grid
    /// point over 8 blocks of 5 time units.
    pub fn quick_preset() -> Self {
        Self {
            convergence: ConvergenceConfig {
                t_max: 100.0,
                ..Default::default()
            },
            block: BlockConfig {
                t_measure: 60.0,
                t_chunk: 20.0,
                block_length: 100,
                num_blocks: 8,
                ..Default::default()
            },
            sweep: SweepConfig {
                k_steps: 11,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Long horizons for publication-grade curves.
    pub fn precise_preset() -> Self {
        Self {
            convergence: ConvergenceConfig {
                t_max: 2000.0,
                window: 400,
                eps: 1e-5,
            },
            block: BlockConfig {
                t_measure: 1000.0,
                t_chunk: 100.0,
                block_length: 400,
                num_blocks: 20,
                sigma_max: 0.01,
                slope_tol: 0.002,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Validate the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.integrator.validate()?;
        self.convergence.validate()?;
        self.block.validate(self.integrator.dt)?;
        self.sweep.validate()?;
        Ok(())
    }

    /// Validate and convert failures into [`SyncError::ConfigError`].
    pub fn check(&self) -> SyncResult<()> {
        self.validate().map_err(SyncError::ConfigError)
    }
}
