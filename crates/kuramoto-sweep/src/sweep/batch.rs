//! Independent sweeps in parallel.
//!
//! Continuation makes a single sweep sequential, but sweeps over distinct
//! networks or configurations share nothing mutable and run on the rayon
//! pool. Networks are borrowed read-only; each job owns its phase vector.

use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::SyncResult;
use crate::network::Network;

use super::controller::run_sweep;
use super::types::SweepReport;

/// One independent sweep.
#[derive(Debug, Clone)]
pub struct SweepJob<'a> {
    /// Label carried through for reporting.
    pub label: String,

    /// Network to sweep, shared read-only across jobs.
    pub network: &'a Network,

    /// Full sweep configuration.
    pub config: SimulationConfig,

    /// Explicit starting phases; `None` cold-starts.
    pub theta0: Option<Vec<f64>>,
}

impl<'a> SweepJob<'a> {
    /// Job with a cold start.
    pub fn new(label: impl Into<String>, network: &'a Network, config: SimulationConfig) -> Self {
        Self {
            label: label.into(),
            network,
            config,
            theta0: None,
        }
    }

    /// Start from explicit phases instead of a cold start.
    pub fn with_theta0(mut self, theta0: Vec<f64>) -> Self {
        self.theta0 = Some(theta0);
        self
    }
}

/// Run sweeps in parallel.
///
/// # Returns
///
/// `(label, result)` per job, in input order.
pub fn run_batch(jobs: &[SweepJob<'_>]) -> Vec<(String, SyncResult<SweepReport>)> {
    jobs.par_iter()
        .map(|job| {
            (
                job.label.clone(),
                run_sweep(job.network, &job.config, job.theta0.clone()),
            )
        })
        .collect()
}
