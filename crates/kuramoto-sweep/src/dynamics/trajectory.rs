//! Sampled integration output.

use std::f64::consts::TAU;

use crate::error::SyncResult;
use crate::order::order_parameter_series;

/// Counters collected during one integration call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegrationStats {
    /// Accepted steps.
    pub accepted: usize,
    /// Rejected steps.
    pub rejected: usize,
    /// Field evaluations.
    pub evaluations: usize,
}

/// Phase samples on a fixed output grid plus the state at the end time.
///
/// Samples are unwrapped; only [`Trajectory::final_state_wrapped`] folds
/// phases back into `[0, 2π)`.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Sample times `0, dt, 2dt, ...`.
    pub times: Vec<f64>,
    /// Phase vector at each sample time.
    pub states: Vec<Vec<f64>>,
    /// Phase vector at `t_end`, whether or not `t_end` is sampled.
    pub final_state: Vec<f64>,
    /// End of the integrated interval.
    pub t_end: f64,
    /// Step statistics.
    pub stats: IntegrationStats,
}

impl Trajectory {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if no samples were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// r(t) for every sample.
    pub fn order_parameters(&self) -> SyncResult<Vec<f64>> {
        order_parameter_series(&self.states)
    }

    /// Final state folded into `[0, 2π)`.
    pub fn final_state_wrapped(&self) -> Vec<f64> {
        wrapped(&self.final_state)
    }
}

/// Fold every phase into `[0, 2π)`.
pub fn wrap_phases(theta: &mut [f64]) {
    for phase in theta.iter_mut() {
        *phase = phase.rem_euclid(TAU);
    }
}

/// Copy of `theta` folded into `[0, 2π)`.
pub fn wrapped(theta: &[f64]) -> Vec<f64> {
    let mut out = theta.to_vec();
    wrap_phases(&mut out);
    out
}
