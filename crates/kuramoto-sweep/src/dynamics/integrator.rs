//! Adaptive Dormand-Prince 5(4) integrator with fixed-cadence output.
//!
//! Steps are chosen from the embedded 4th-order error estimate and are
//! clipped so every output time is hit exactly; the observed sample grid
//! is therefore `0, dt, 2dt, ...` regardless of the internal step sizes.

use tracing::debug;

use crate::config::IntegratorConfig;
use crate::error::{SyncError, SyncResult};

use super::field::PhaseVelocityField;
use super::trajectory::{IntegrationStats, Trajectory};

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// 5th-order weights (also the last stage row, FSAL)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// 5th minus 4th-order weights
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

const ORDER_EXPONENT: f64 = 1.0 / 5.0;

/// Integrate `field` from `theta0` over `[0, t_end]`.
///
/// Samples are recorded at `k · dt` for every `k · dt < t_end`, plus
/// `t_end` itself when `include_endpoint` is set. The state at `t_end`
/// is always returned as [`Trajectory::final_state`].
///
/// # Errors
///
/// - `DimensionMismatch` if `theta0` does not match the network size
/// - `InvalidParameter` / `ConfigError` for a bad horizon or config
/// - `StepBudgetExceeded`, `StepSizeUnderflow`, `NonFiniteState` when the
///   tolerances cannot be met
pub fn integrate(
    field: &PhaseVelocityField<'_>,
    theta0: &[f64],
    t_end: f64,
    config: &IntegratorConfig,
) -> SyncResult<Trajectory> {
    let n = field.dim();
    if theta0.len() != n {
        return Err(SyncError::DimensionMismatch {
            expected: n,
            actual: theta0.len(),
        });
    }
    if !(t_end.is_finite() && t_end > 0.0) {
        return Err(SyncError::invalid_param("t_end", t_end, "Must be > 0"));
    }
    config.validate().map_err(SyncError::ConfigError)?;
    if theta0.iter().any(|v| !v.is_finite()) {
        return Err(SyncError::NonFiniteState { t: 0.0 });
    }

    let strict_samples = IntegratorConfig {
        include_endpoint: false,
        ..config.clone()
    }
    .sample_count(t_end);

    let mut stepper = Stepper::new(field, theta0, config);
    let mut times = Vec::with_capacity(strict_samples + 1);
    let mut states = Vec::with_capacity(strict_samples + 1);

    for k in 0..strict_samples {
        let t_out = k as f64 * config.dt;
        stepper.advance_to(t_out)?;
        times.push(t_out);
        states.push(stepper.y.clone());
    }
    stepper.advance_to(t_end)?;
    if config.include_endpoint {
        times.push(t_end);
        states.push(stepper.y.clone());
    }

    debug!(
        coupling = field.coupling(),
        t_end,
        accepted = stepper.stats.accepted,
        rejected = stepper.stats.rejected,
        "integration finished"
    );

    Ok(Trajectory {
        times,
        states,
        final_state: stepper.y,
        t_end,
        stats: stepper.stats,
    })
}

/// Mutable integration state for one call. Never outlives `integrate`.
struct Stepper<'f, 'n> {
    field: &'f PhaseVelocityField<'n>,
    config: &'f IntegratorConfig,
    t: f64,
    h: f64,
    y: Vec<f64>,
    k: [Vec<f64>; 7],
    y_stage: Vec<f64>,
    y_new: Vec<f64>,
    stats: IntegrationStats,
}

impl<'f, 'n> Stepper<'f, 'n> {
    fn new(
        field: &'f PhaseVelocityField<'n>,
        theta0: &[f64],
        config: &'f IntegratorConfig,
    ) -> Self {
        let n = theta0.len();
        let mut stepper = Self {
            field,
            config,
            t: 0.0,
            h: 0.0,
            y: theta0.to_vec(),
            k: std::array::from_fn(|_| vec![0.0; n]),
            y_stage: vec![0.0; n],
            y_new: vec![0.0; n],
            stats: IntegrationStats::default(),
        };
        field.eval_into(&stepper.y, &mut stepper.k[0]);
        stepper.stats.evaluations += 1;
        stepper.h = config
            .initial_step
            .unwrap_or_else(|| stepper.initial_step_guess())
            .min(config.dt);
        stepper
    }

    /// Step size from the ratio of state scale to derivative scale.
    fn initial_step_guess(&self) -> f64 {
        let n = self.y.len() as f64;
        let mut d0 = 0.0;
        let mut d1 = 0.0;
        for (y, f) in self.y.iter().zip(&self.k[0]) {
            let sc = self.config.atol + self.config.rtol * y.abs();
            d0 += (y / sc).powi(2);
            d1 += (f / sc).powi(2);
        }
        let (d0, d1) = ((d0 / n).sqrt(), (d1 / n).sqrt());
        if d0 < 1e-5 || d1 < 1e-5 {
            1e-6
        } else {
            0.01 * d0 / d1
        }
    }

    fn advance_to(&mut self, t_out: f64) -> SyncResult<()> {
        while t_out - self.t > 1e-12 * t_out.abs().max(1.0) {
            let attempts = self.stats.accepted + self.stats.rejected;
            if attempts >= self.config.max_steps {
                return Err(SyncError::StepBudgetExceeded {
                    t: self.t,
                    max_steps: self.config.max_steps,
                });
            }

            let remaining = t_out - self.t;
            let clipped = self.h >= remaining;
            let h = if clipped { remaining } else { self.h };

            let err = self.attempt(h);
            if err.is_finite() && err <= 1.0 {
                self.t = if clipped { t_out } else { self.t + h };
                std::mem::swap(&mut self.y, &mut self.y_new);
                self.k.swap(0, 6);
                self.stats.accepted += 1;

                let factor = if err == 0.0 {
                    self.config.max_factor
                } else {
                    (self.config.safety * err.powf(-ORDER_EXPONENT))
                        .clamp(self.config.min_factor, self.config.max_factor)
                };
                let proposed = h * factor;
                // A clipped step says nothing about the attainable step size
                self.h = if clipped && factor >= 1.0 {
                    self.h.max(proposed)
                } else {
                    proposed
                };
            } else {
                self.stats.rejected += 1;
                let factor = if err.is_finite() {
                    (self.config.safety * err.powf(-ORDER_EXPONENT)).max(self.config.min_factor)
                } else {
                    self.config.min_factor
                };
                self.h = h * factor.min(1.0);
                if self.h <= 16.0 * f64::EPSILON * self.t.abs().max(1.0) {
                    if !err.is_finite() {
                        return Err(SyncError::NonFiniteState { t: self.t });
                    }
                    return Err(SyncError::StepSizeUnderflow {
                        t: self.t,
                        h: self.h,
                    });
                }
            }
        }
        Ok(())
    }

    /// One trial step of size `h`. Leaves the candidate in `y_new` and its
    /// derivative in `k[6]`; returns the scaled RMS error norm.
    fn attempt(&mut self, h: f64) -> f64 {
        let n = self.y.len();
        let [k1, k2, k3, k4, k5, k6, k7] = &mut self.k;
        let y = &self.y;
        let ys = &mut self.y_stage;
        let field = self.field;

        for i in 0..n {
            ys[i] = y[i] + h * A21 * k1[i];
        }
        field.eval_into(ys, k2);
        for i in 0..n {
            ys[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        field.eval_into(ys, k3);
        for i in 0..n {
            ys[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        field.eval_into(ys, k4);
        for i in 0..n {
            ys[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        field.eval_into(ys, k5);
        for i in 0..n {
            ys[i] = y[i]
                + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        field.eval_into(ys, k6);
        for i in 0..n {
            self.y_new[i] =
                y[i] + h * (B1 * k1[i] + B3 * k3[i] + B4 * k4[i] + B5 * k5[i] + B6 * k6[i]);
        }
        field.eval_into(&self.y_new, k7);
        self.stats.evaluations += 6;

        let mut sum = 0.0;
        for i in 0..n {
            let e = h
                * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i]);
            let sc = self.config.atol + self.config.rtol * y[i].abs().max(self.y_new[i].abs());
            sum += (e / sc).powi(2);
        }
        (sum / n as f64).sqrt()
    }
}
