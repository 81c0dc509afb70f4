//! Windowed-stability detector ("run until converged").
//!
//! Integrates one long horizon, then scans r(t) forward for the first
//! index whose trailing window has stopped drifting.

use tracing::debug;

use crate::config::{ConvergenceConfig, IntegratorConfig};
use crate::dynamics::{integrate, wrapped, PhaseVelocityField};
use crate::error::{SyncError, SyncResult};

use super::buffer::RollingWindow;
use super::{Measurement, MeasurementDetail, SteadyStateDetector};

/// First index `i >= window` where every sample of `r[i - window..i]` lies
/// strictly within `eps` of `r[i - 1]`.
///
/// Returns `None` if the series never settles.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::steady::find_convergence_index;
///
/// let r = [0.1, 0.5, 0.7, 0.7, 0.7, 0.7, 0.7];
/// assert_eq!(find_convergence_index(&r, 3, 1e-6), Some(5));
/// ```
pub fn find_convergence_index(r: &[f64], window: usize, eps: f64) -> Option<usize> {
    if window == 0 || r.len() <= window {
        return None;
    }
    let mut trailing = RollingWindow::new(window);
    trailing.extend(r[..window].iter().copied());

    for i in window..r.len() {
        if let Some(deviation) = trailing.max_deviation_from_last() {
            if deviation < eps {
                return Some(i);
            }
        }
        trailing.push(r[i]);
    }
    None
}

/// Result of [`run_until_converged`].
#[derive(Debug, Clone)]
pub struct ConvergenceReport {
    /// r at the convergence index, or the last r if none.
    pub r_final: f64,

    /// r(t) up to and including the convergence index, or the full series.
    pub r_history: Vec<f64>,

    /// Sample times matching `r_history`.
    pub times: Vec<f64>,

    /// Phase vector at the convergence index, folded into `[0, 2π)`.
    /// `None` means no steady state was found; it must not seed a
    /// continuation step.
    pub theta_final: Option<Vec<f64>>,

    /// Sample index at which convergence was declared.
    pub converged_at: Option<usize>,
}

impl ConvergenceReport {
    /// Whether a steady state was found.
    #[inline]
    pub fn converged(&self) -> bool {
        self.theta_final.is_some()
    }
}

/// Integrate `[0, t_max]` once and locate the first stable window.
///
/// # Errors
///
/// Domain errors for bad configuration or seed, integration failures from
/// the integrator. Non-convergence is not an error.
pub fn run_until_converged(
    field: &PhaseVelocityField<'_>,
    theta0: &[f64],
    convergence: &ConvergenceConfig,
    integrator: &IntegratorConfig,
) -> SyncResult<ConvergenceReport> {
    convergence.validate().map_err(SyncError::ConfigError)?;

    let trajectory = integrate(field, theta0, convergence.t_max, integrator)?;
    let mut r_values = trajectory.order_parameters()?;
    let mut times = trajectory.times;

    match find_convergence_index(&r_values, convergence.window, convergence.eps) {
        Some(i) => {
            debug!(
                coupling = field.coupling(),
                index = i,
                t = times[i],
                r = r_values[i],
                "r converged to a stable value"
            );
            r_values.truncate(i + 1);
            times.truncate(i + 1);
            Ok(ConvergenceReport {
                r_final: r_values[i],
                r_history: r_values,
                times,
                theta_final: Some(wrapped(&trajectory.states[i])),
                converged_at: Some(i),
            })
        }
        None => {
            let r_final = r_values.last().copied().unwrap_or(f64::NAN);
            debug!(
                coupling = field.coupling(),
                r = r_final,
                "r did not converge to a stable value"
            );
            Ok(ConvergenceReport {
                r_final,
                r_history: r_values,
                times,
                theta_final: None,
                converged_at: None,
            })
        }
    }
}

/// [`SteadyStateDetector`] wrapper around [`run_until_converged`].
#[derive(Debug, Clone, Default)]
pub struct WindowedDetector {
    convergence: ConvergenceConfig,
    integrator: IntegratorConfig,
}

impl WindowedDetector {
    /// Create a detector from validated settings.
    pub fn new(convergence: ConvergenceConfig, integrator: IntegratorConfig) -> SyncResult<Self> {
        convergence.validate().map_err(SyncError::ConfigError)?;
        integrator.validate().map_err(SyncError::ConfigError)?;
        Ok(Self {
            convergence,
            integrator,
        })
    }

    /// Horizon and stability window settings.
    pub fn convergence(&self) -> &ConvergenceConfig {
        &self.convergence
    }
}

impl SteadyStateDetector for WindowedDetector {
    fn name(&self) -> &'static str {
        "windowed"
    }

    fn measure(&self, field: &PhaseVelocityField<'_>, seed: Vec<f64>) -> SyncResult<Measurement> {
        let report = run_until_converged(field, &seed, &self.convergence, &self.integrator)?;
        Ok(Measurement {
            coupling: field.coupling(),
            r_summary: report.r_final,
            r_std: None,
            regime: None,
            flags: Default::default(),
            theta_last: report.theta_final,
            detail: MeasurementDetail::Windowed {
                converged_at: report.converged_at,
                r_history: report.r_history,
            },
        })
    }
}
