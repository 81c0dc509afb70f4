//! Block-statistics detector (bounded-runtime measurement).
//!
//! The measurement horizon is integrated in chunks; the trailing
//! `num_blocks * block_length` samples of r(t) are cut into disjoint
//! contiguous blocks. Block means give the summary (mean and dispersion),
//! their least-squares slope gives the drift, and both feed the regime
//! label. A continuation seed is always produced.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{BlockConfig, IntegratorConfig};
use crate::dynamics::{integrate, wrap_phases, PhaseVelocityField};
use crate::error::{SyncError, SyncResult};

use super::buffer::RollingWindow;
use super::regime::{AnomalyFlag, Regime};
use super::{Measurement, MeasurementDetail, SteadyStateDetector};

/// Statistics over the trailing blocks of an r(t) series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSummary {
    /// Mean of each block, oldest first.
    pub block_means: Vec<f64>,

    /// Mean of the block means.
    pub r_mean: f64,

    /// Population standard deviation of the block means.
    pub r_std: f64,

    /// Least-squares slope of block mean per block index.
    pub slope: f64,

    /// Incoherent baseline `1/sqrt(N)` used for classification.
    pub baseline: f64,

    /// Qualitative label.
    pub regime: Regime,

    /// Soft warnings.
    pub flags: BTreeSet<AnomalyFlag>,
}

impl BlockSummary {
    /// Summarize the trailing `config.window_samples()` values of `r`.
    ///
    /// # Errors
    ///
    /// - `EmptyNetwork` if `n_oscillators` is 0
    /// - `InvalidParameter` if `r` holds fewer samples than the blocks need
    ///
    /// # Example
    ///
    /// ```
    /// use kuramoto_sweep::config::BlockConfig;
    /// use kuramoto_sweep::steady::{BlockSummary, Regime};
    ///
    /// let config = BlockConfig { block_length: 4, num_blocks: 3, ..Default::default() };
    /// let summary = BlockSummary::from_series(&[0.95; 20], &config, 100).unwrap();
    /// assert_eq!(summary.r_std, 0.0);
    /// assert_eq!(summary.regime, Regime::Synchronized);
    /// ```
    pub fn from_series(r: &[f64], config: &BlockConfig, n_oscillators: usize) -> SyncResult<Self> {
        if n_oscillators == 0 {
            return Err(SyncError::EmptyNetwork);
        }
        if config.block_length == 0 || config.num_blocks == 0 {
            return Err(SyncError::ConfigError(
                "block_length and num_blocks must be > 0".to_string(),
            ));
        }
        let needed = config.window_samples();
        if r.len() < needed {
            return Err(SyncError::invalid_param(
                "r",
                format!("{} samples", r.len()),
                format!("block statistics need at least {needed} samples"),
            ));
        }

        let tail = &r[r.len() - needed..];
        let block_means: Vec<f64> = tail
            .chunks_exact(config.block_length)
            .map(|block| block.iter().sum::<f64>() / block.len() as f64)
            .collect();

        let m = block_means.len() as f64;
        let r_mean = block_means.iter().sum::<f64>() / m;
        let identical = block_means.windows(2).all(|w| w[0] == w[1]);
        // Identical means must report exactly zero, not summation residue
        let r_std = if identical {
            0.0
        } else {
            (block_means
                .iter()
                .map(|b| (b - r_mean).powi(2))
                .sum::<f64>()
                / m)
                .sqrt()
        };
        let slope = if identical {
            0.0
        } else {
            least_squares_slope(&block_means)
        };

        let mut flags = BTreeSet::new();
        if slope.abs() > config.slope_tol {
            flags.insert(AnomalyFlag::NotPlateau);
        }
        if r_std > config.sigma_max {
            flags.insert(AnomalyFlag::Noisy);
        }

        let baseline = 1.0 / (n_oscillators as f64).sqrt();
        let regime = classify(r_mean, baseline, &flags, config);

        Ok(Self {
            block_means,
            r_mean,
            r_std,
            slope,
            baseline,
            regime,
            flags,
        })
    }
}

/// Regime label from the block mean and raised flags.
///
/// Any flag makes the window `Transitional`. Otherwise the mean is compared
/// against `sync_threshold` and the band `baseline + desync_margin`; values
/// in between form a `Metastable` plateau.
pub fn classify(
    r_mean: f64,
    baseline: f64,
    flags: &BTreeSet<AnomalyFlag>,
    config: &BlockConfig,
) -> Regime {
    if !flags.is_empty() {
        Regime::Transitional
    } else if r_mean >= config.sync_threshold {
        Regime::Synchronized
    } else if r_mean <= baseline + config.desync_margin {
        Regime::Desynchronized
    } else {
        Regime::Metastable
    }
}

fn least_squares_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = values.iter().sum::<f64>() / n as f64;
    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, &y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });
    num / den
}

/// Chunked fixed-horizon detector.
#[derive(Debug, Clone, Default)]
pub struct BlockDetector {
    block: BlockConfig,
    integrator: IntegratorConfig,
}

impl BlockDetector {
    /// Create a detector from validated settings.
    pub fn new(block: BlockConfig, integrator: IntegratorConfig) -> SyncResult<Self> {
        integrator.validate().map_err(SyncError::ConfigError)?;
        block
            .validate(integrator.dt)
            .map_err(SyncError::ConfigError)?;
        Ok(Self { block, integrator })
    }

    /// Block partitioning and classification settings.
    pub fn block(&self) -> &BlockConfig {
        &self.block
    }

    /// Samples per integration chunk, a whole number of output steps.
    fn chunk_samples(&self) -> usize {
        ((self.block.t_chunk / self.integrator.dt).round() as usize).max(1)
    }

    /// Samples over the whole measurement horizon.
    fn total_samples(&self) -> usize {
        IntegratorConfig {
            include_endpoint: false,
            ..self.integrator.clone()
        }
        .sample_count(self.block.t_measure)
    }
}

impl SteadyStateDetector for BlockDetector {
    fn name(&self) -> &'static str {
        "block"
    }

    fn measure(&self, field: &PhaseVelocityField<'_>, seed: Vec<f64>) -> SyncResult<Measurement> {
        // Chunks share one global grid, so each excludes its own endpoint;
        // the endpoint is the next chunk's first sample.
        let chunk_config = IntegratorConfig {
            include_endpoint: false,
            ..self.integrator.clone()
        };
        let dt = chunk_config.dt;
        let total = self.total_samples();
        let per_chunk = self.chunk_samples();

        let mut tail = RollingWindow::new(self.block.window_samples());
        let mut theta = seed;
        let mut done = 0usize;

        while done < total {
            let samples = per_chunk.min(total - done);
            let trajectory = integrate(field, &theta, samples as f64 * dt, &chunk_config)?;
            let r_chunk = trajectory.order_parameters()?;
            done += r_chunk.len();

            debug!(
                coupling = field.coupling(),
                t = done as f64 * dt,
                chunk_r_mean = r_chunk.iter().sum::<f64>() / r_chunk.len().max(1) as f64,
                "block chunk integrated"
            );
            tail.extend(r_chunk);

            theta = trajectory.final_state;
            wrap_phases(&mut theta);
        }

        let samples = tail.to_vec();
        let summary = BlockSummary::from_series(&samples, &self.block, field.dim())?;
        if !summary.flags.is_empty() {
            warn!(
                coupling = field.coupling(),
                r_mean = summary.r_mean,
                r_std = summary.r_std,
                slope = summary.slope,
                flags = ?summary.flags,
                "low-confidence block measurement"
            );
        }

        Ok(Measurement {
            coupling: field.coupling(),
            r_summary: summary.r_mean,
            r_std: Some(summary.r_std),
            regime: Some(summary.regime),
            flags: summary.flags.clone(),
            theta_last: Some(theta),
            detail: MeasurementDetail::Block(summary),
        })
    }
}
