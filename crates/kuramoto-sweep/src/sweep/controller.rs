//! Forward/backward continuation sweep over a coupling grid.

use rand::thread_rng;
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::dynamics::{random_phases, random_phases_seeded, wrapped, PhaseVelocityField};
use crate::error::{SyncError, SyncResult};
use crate::network::Network;
use crate::steady::{detector_from_config, SteadyStateDetector};

use super::grid::{coupling_grid, validate_grid};
use super::hysteresis::hysteresis_summary;
use super::types::{aligned_r, SweepCurve, SweepDirection, SweepPoint, SweepReport, Termination};

/// One direction's points plus the phase vector the next direction
/// continues from.
struct DirectionRun {
    points: Vec<SweepPoint>,
    theta: Vec<f64>,
    stopped_at: Option<f64>,
}

/// Drives the detector across a coupling grid with continuation.
///
/// The network is borrowed read-only for the whole sweep. The current
/// phase vector is a local owned value: it is moved into each detector
/// call and replaced by the returned `theta_last`.
pub struct SweepController<'a> {
    network: &'a Network,
    detector: &'a dyn SteadyStateDetector,
    sync_threshold: f64,
}

impl<'a> SweepController<'a> {
    /// Create a controller.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `sync_threshold` is outside `[0, 1]`.
    pub fn new(
        network: &'a Network,
        detector: &'a dyn SteadyStateDetector,
        sync_threshold: f64,
    ) -> SyncResult<Self> {
        if !(0.0..=1.0).contains(&sync_threshold) {
            return Err(SyncError::invalid_param(
                "sync_threshold",
                sync_threshold,
                "Must be in [0, 1]",
            ));
        }
        Ok(Self {
            network,
            detector,
            sync_threshold,
        })
    }

    /// Sweep `grid` upward from `theta0`, then downward from the forward
    /// sweep's final state.
    ///
    /// Integration failures mark a point as failed and the sweep continues
    /// from the last valid phase vector. A point without a steady state
    /// stops that direction; if it happens going forward, no backward sweep
    /// is run.
    ///
    /// # Errors
    ///
    /// - `InvalidGrid` for an empty or non-ascending grid
    /// - `DimensionMismatch` if `theta0` does not match the network size
    /// - any other domain error raised by the detector
    pub fn run(&self, grid: &[f64], theta0: Vec<f64>) -> SyncResult<SweepReport> {
        validate_grid(grid)?;
        if theta0.len() != self.network.len() {
            return Err(SyncError::DimensionMismatch {
                expected: self.network.len(),
                actual: theta0.len(),
            });
        }

        let forward = self.run_direction(SweepDirection::Forward, grid, wrapped(&theta0))?;
        let mut termination = forward.stopped_at.map(|coupling| Termination {
            direction: SweepDirection::Forward,
            coupling,
        });

        let backward = if termination.is_some() {
            warn!(
                detector = self.detector.name(),
                "forward sweep ended without a steady state, skipping backward sweep"
            );
            None
        } else {
            let run = self.run_direction(SweepDirection::Backward, grid, forward.theta)?;
            termination = run.stopped_at.map(|coupling| Termination {
                direction: SweepDirection::Backward,
                coupling,
            });
            let mut points = run.points;
            points.reverse();
            Some(SweepCurve {
                direction: SweepDirection::Backward,
                points,
            })
        };

        let forward = SweepCurve {
            direction: SweepDirection::Forward,
            points: forward.points,
        };
        let hysteresis = hysteresis_summary(
            grid,
            &aligned_r(grid, Some(&forward)),
            &aligned_r(grid, backward.as_ref()),
            self.sync_threshold,
        );

        Ok(SweepReport {
            grid: grid.to_vec(),
            forward,
            backward,
            termination,
            hysteresis,
        })
    }

    fn run_direction(
        &self,
        direction: SweepDirection,
        grid: &[f64],
        mut theta: Vec<f64>,
    ) -> SyncResult<DirectionRun> {
        let couplings: Vec<f64> = match direction {
            SweepDirection::Forward => grid.to_vec(),
            SweepDirection::Backward => grid.iter().rev().copied().collect(),
        };
        info!(
            %direction,
            detector = self.detector.name(),
            points = couplings.len(),
            "sweep started"
        );

        let mut points = Vec::with_capacity(couplings.len());
        let mut stopped_at = None;

        for k in couplings {
            let field = PhaseVelocityField::new(self.network, k)?;
            match self.detector.measure(&field, theta.clone()) {
                Ok(measurement) => {
                    let point = SweepPoint::measured(theta, measurement);
                    info!(
                        %direction,
                        coupling = k,
                        r = point.r_or_nan(),
                        regime = ?point.regime,
                        "K = {:.4}, r = {:.4}",
                        k,
                        point.r_or_nan()
                    );
                    match point.theta_last.clone() {
                        Some(next) => {
                            theta = next;
                            points.push(point);
                        }
                        None => {
                            warn!(
                                %direction,
                                coupling = k,
                                "no steady state found, stopping sweep"
                            );
                            theta = point.seed.clone();
                            points.push(point);
                            stopped_at = Some(k);
                            break;
                        }
                    }
                }
                Err(err) if err.is_integration_failure() => {
                    warn!(
                        %direction,
                        coupling = k,
                        error = %err,
                        "integration failed, continuing from last valid phases"
                    );
                    points.push(SweepPoint::failed(k, theta.clone(), err.to_string()));
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            %direction,
            measured = points.iter().filter(|p| p.theta_last.is_some()).count(),
            failed = points.iter().filter(|p| p.is_failed()).count(),
            "sweep finished"
        );
        Ok(DirectionRun {
            points,
            theta,
            stopped_at,
        })
    }
}

/// Run a full sweep from explicit configuration.
///
/// Applies `config.sweep.frequency_scale` to the network, builds the grid
/// from `k_min`, `k_max`, `k_steps` and the detector from
/// `config.sweep.detector`. Without `theta0` the sweep cold-starts from
/// uniform random phases, seeded by `config.sweep.seed` when set.
///
/// # Example
///
/// ```no_run
/// use kuramoto_sweep::config::SimulationConfig;
/// use kuramoto_sweep::network::{DenseGraph, Network};
/// use kuramoto_sweep::sweep::run_sweep;
///
/// let edges: Vec<_> = (0..20).map(|i| (i, (i + 1) % 20)).collect();
/// let network = Network::from_adapter(&DenseGraph::from_edges(20, &edges).unwrap()).unwrap();
///
/// let mut config = SimulationConfig::quick_preset();
/// config.sweep.seed = Some(7);
/// let report = run_sweep(&network, &config, None).unwrap();
/// println!("{:?}", report.hysteresis.gap);
/// ```
pub fn run_sweep(
    network: &Network,
    config: &SimulationConfig,
    theta0: Option<Vec<f64>>,
) -> SyncResult<SweepReport> {
    config.check()?;
    let network = network
        .clone()
        .with_frequency_scale(config.sweep.frequency_scale)?;
    let grid = coupling_grid(config.sweep.k_min, config.sweep.k_max, config.sweep.k_steps)?;
    let detector = detector_from_config(config)?;

    let theta0 = match (theta0, config.sweep.seed) {
        (Some(theta), _) => theta,
        (None, Some(seed)) => random_phases_seeded(network.len(), seed),
        (None, None) => random_phases(network.len(), &mut thread_rng()),
    };

    let controller =
        SweepController::new(&network, detector.as_ref(), config.sweep.sync_threshold)?;
    controller.run(&grid, theta0)
}
