//! Sweep result records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::steady::{AnomalyFlag, Measurement, Regime};

/// Direction of travel along the coupling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Increasing coupling.
    Forward,
    /// Decreasing coupling.
    Backward,
}

impl fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepDirection::Forward => f.write_str("forward"),
            SweepDirection::Backward => f.write_str("backward"),
        }
    }
}

/// Outcome class of one grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointStatus {
    /// Detector produced a result with a continuation seed.
    Measured,
    /// Windowed detector found no steady state; no seed.
    NotConverged,
    /// Integrator failed; the message is the error text.
    Failed(String),
}

/// One grid point of a sweep curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Coupling strength K.
    pub coupling: f64,

    /// r summary; `None` when integration failed.
    pub r_summary: Option<f64>,

    /// Dispersion of block means (block detector).
    pub r_std: Option<f64>,

    /// Regime label (block detector).
    pub regime: Option<Regime>,

    /// Anomaly flags.
    pub flags: BTreeSet<AnomalyFlag>,

    /// Outcome class.
    pub status: PointStatus,

    /// Phase vector this point was started from.
    #[serde(skip)]
    pub seed: Vec<f64>,

    /// Phase vector this point ended on, if it is a valid seed.
    #[serde(skip)]
    pub theta_last: Option<Vec<f64>>,
}

impl SweepPoint {
    /// Record a detector result.
    pub fn measured(seed: Vec<f64>, measurement: Measurement) -> Self {
        let status = if measurement.has_seed() {
            PointStatus::Measured
        } else {
            PointStatus::NotConverged
        };
        Self {
            coupling: measurement.coupling,
            r_summary: Some(measurement.r_summary),
            r_std: measurement.r_std,
            regime: measurement.regime,
            flags: measurement.flags,
            status,
            seed,
            theta_last: measurement.theta_last,
        }
    }

    /// Record an integration failure.
    pub fn failed(coupling: f64, seed: Vec<f64>, reason: String) -> Self {
        Self {
            coupling,
            r_summary: None,
            r_std: None,
            regime: None,
            flags: BTreeSet::new(),
            status: PointStatus::Failed(reason),
            seed,
            theta_last: None,
        }
    }

    /// Whether the integrator failed at this point.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, PointStatus::Failed(_))
    }

    /// r summary, or NaN for a failed point.
    #[inline]
    pub fn r_or_nan(&self) -> f64 {
        self.r_summary.unwrap_or(f64::NAN)
    }
}

/// Result sequence of one sweep direction, in ascending K order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepCurve {
    /// Direction the curve was computed in.
    pub direction: SweepDirection,

    /// Points in ascending coupling order.
    pub points: Vec<SweepPoint>,
}

impl SweepCurve {
    /// Point at coupling `k`, matched exactly against the grid value.
    pub fn point_at(&self, k: f64) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.coupling == k)
    }

    /// Number of failed points.
    pub fn failures(&self) -> usize {
        self.points.iter().filter(|p| p.is_failed()).count()
    }
}

/// Why a sweep stopped before covering the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Termination {
    /// Direction that stopped.
    pub direction: SweepDirection,
    /// Coupling at which no steady state was found.
    pub coupling: f64,
}

/// Transition points located on the forward and backward curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HysteresisSummary {
    /// r level that counts as synchronized.
    pub threshold: f64,

    /// Lowest K of the synchronized run the forward curve holds up to K_max.
    pub forward_critical: Option<f64>,

    /// Lowest K of the synchronized run the backward curve keeps from K_max
    /// downward.
    pub backward_critical: Option<f64>,

    /// `forward_critical - backward_critical`, when both exist.
    pub gap: Option<f64>,

    /// `backward_r - forward_r` per grid point (NaN where either is missing).
    pub gap_per_k: Vec<f64>,
}

/// Full result of a forward + backward sweep on one network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    /// Ascending coupling grid.
    pub grid: Vec<f64>,

    /// Forward curve; shorter than the grid if it terminated.
    pub forward: SweepCurve,

    /// Backward curve, reversed to ascending order. `None` when the forward
    /// sweep terminated without a seed.
    pub backward: Option<SweepCurve>,

    /// Set when either direction stopped on a non-converged point.
    pub termination: Option<Termination>,

    /// Transition summary.
    pub hysteresis: HysteresisSummary,
}

impl SweepReport {
    /// Coupling grid as a plain array.
    pub fn k_values(&self) -> Vec<f64> {
        self.grid.clone()
    }

    /// Forward r aligned on the grid; NaN for failed or missing points.
    pub fn forward_r(&self) -> Vec<f64> {
        aligned_r(&self.grid, Some(&self.forward))
    }

    /// Backward r aligned on the grid; NaN for failed or missing points.
    pub fn backward_r(&self) -> Vec<f64> {
        aligned_r(&self.grid, self.backward.as_ref())
    }

    /// Whether both directions covered the whole grid.
    pub fn is_complete(&self) -> bool {
        self.termination.is_none()
            && self.forward.points.len() == self.grid.len()
            && self
                .backward
                .as_ref()
                .is_some_and(|b| b.points.len() == self.grid.len())
    }
}

pub(crate) fn aligned_r(grid: &[f64], curve: Option<&SweepCurve>) -> Vec<f64> {
    grid.iter()
        .map(|&k| {
            curve
                .and_then(|c| c.point_at(k))
                .map_or(f64::NAN, SweepPoint::r_or_nan)
        })
        .collect()
}
