//! Steady-state detection.
//!
//! Two strategies share the [`SteadyStateDetector`] seam:
//! - [`WindowedDetector`]: integrate a long horizon and stop at the first
//!   stable window. May report "no steady state" (`theta_last == None`).
//! - [`BlockDetector`]: integrate a fixed horizon in chunks and summarize
//!   trailing blocks. Always returns a continuation seed, degrading to
//!   flags instead.

mod block;
mod buffer;
mod regime;
mod window;


use std::collections::BTreeSet;

pub use block::{classify, BlockDetector, BlockSummary};
pub use buffer::RollingWindow;
pub use regime::{AnomalyFlag, Regime};
pub use window::{find_convergence_index, run_until_converged, ConvergenceReport, WindowedDetector};

use crate::config::{DetectorKind, SimulationConfig};
use crate::dynamics::PhaseVelocityField;
use crate::error::SyncResult;

/// Strategy that measures the steady-state order parameter at one coupling.
///
/// `seed` is passed by value: the caller hands over its current phase
/// vector and takes the next one back from [`Measurement::theta_last`].
pub trait SteadyStateDetector: Send + Sync {
    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Integrate from `seed` under `field` and summarize the outcome.
    ///
    /// # Errors
    ///
    /// Domain errors for a malformed seed, integration failures when the
    /// integrator cannot meet its tolerances.
    fn measure(&self, field: &PhaseVelocityField<'_>, seed: Vec<f64>) -> SyncResult<Measurement>;
}

/// Strategy-specific measurement data.
#[derive(Debug, Clone)]
pub enum MeasurementDetail {
    /// Windowed-stability outcome.
    Windowed {
        /// Sample index where convergence was declared.
        converged_at: Option<usize>,
        /// r(t) up to the convergence index, or the full series.
        r_history: Vec<f64>,
    },

    /// Block statistics.
    Block(BlockSummary),
}

/// Result of one steady-state measurement.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// Coupling strength K the measurement was taken at.
    pub coupling: f64,

    /// Converged r (windowed) or mean of block means (block).
    pub r_summary: f64,

    /// Dispersion of block means; block detector only.
    pub r_std: Option<f64>,

    /// Regime label; block detector only.
    pub regime: Option<Regime>,

    /// Anomaly flags; empty for the windowed detector.
    pub flags: BTreeSet<AnomalyFlag>,

    /// Phase vector to continue from, folded into `[0, 2π)`.
    /// `None` only when the windowed detector found no steady state.
    pub theta_last: Option<Vec<f64>>,

    /// Strategy-specific data.
    pub detail: MeasurementDetail,
}

impl Measurement {
    /// Whether this measurement yields a valid continuation seed.
    #[inline]
    pub fn has_seed(&self) -> bool {
        self.theta_last.is_some()
    }

    /// Whether any anomaly flag was raised.
    #[inline]
    pub fn is_low_confidence(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Build the detector selected by `config.sweep.detector`.
pub fn detector_from_config(config: &SimulationConfig) -> SyncResult<Box<dyn SteadyStateDetector>> {
    Ok(match config.sweep.detector {
        DetectorKind::Windowed => Box::new(WindowedDetector::new(
            config.convergence.clone(),
            config.integrator.clone(),
        )?),
        DetectorKind::Block => Box::new(BlockDetector::new(
            config.block.clone(),
            config.integrator.clone(),
        )?),
    })
}
