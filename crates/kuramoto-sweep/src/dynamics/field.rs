//! Phase-velocity field of the degree-normalized Kuramoto model.
//!
//! ```text
//! dθᵢ/dt = ωᵢ + (K / dᵢ) Σⱼ Aᵢⱼ sin(θⱼ - θᵢ)
//! ```
//!
//! Where:
//! - ωᵢ = natural frequency, proportional to the degree of node i
//! - dᵢ = max(degᵢ, 1), the guarded coupling normalizer
//! - K = coupling strength

use crate::error::{SyncError, SyncResult};
use crate::network::Network;

/// Right-hand side of the Kuramoto ODE for a fixed network and coupling.
///
/// Holds only shared references and a scalar, so it can be evaluated at
/// arbitrary stage points by the integrator without hidden state.
#[derive(Debug, Clone, Copy)]
pub struct PhaseVelocityField<'a> {
    network: &'a Network,
    coupling: f64,
}

impl<'a> PhaseVelocityField<'a> {
    /// Bind a network to a coupling strength.
    ///
    /// # Errors
    ///
    /// `NegativeCoupling` if `coupling` is negative or not finite.
    pub fn new(network: &'a Network, coupling: f64) -> SyncResult<Self> {
        if !(coupling.is_finite() && coupling >= 0.0) {
            return Err(SyncError::NegativeCoupling(coupling));
        }
        Ok(Self { network, coupling })
    }

    /// Coupling strength K.
    #[inline]
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// Network the field is defined on.
    #[inline]
    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// Number of oscillators.
    #[inline]
    pub fn dim(&self) -> usize {
        self.network.len()
    }

    /// Write dθ/dt at `theta` into `out`.
    ///
    /// Both slices must have length N; the integrator guarantees this.
    pub fn eval_into(&self, theta: &[f64], out: &mut [f64]) {
        debug_assert_eq!(theta.len(), self.dim());
        debug_assert_eq!(out.len(), self.dim());

        let omega = self.network.natural_frequencies();
        let norm = self.network.normalizers();

        for (i, d_theta) in out.iter_mut().enumerate() {
            let theta_i = theta[i];
            let coupling_sum: f64 = self
                .network
                .neighbors(i)
                .iter()
                .map(|&j| (theta[j] - theta_i).sin())
                .sum();
            *d_theta = omega[i] + (self.coupling / norm[i]) * coupling_sum;
        }
    }

    /// Evaluate dθ/dt at `theta`, checking its length.
    pub fn eval(&self, theta: &[f64]) -> SyncResult<Vec<f64>> {
        if theta.len() != self.dim() {
            return Err(SyncError::DimensionMismatch {
                expected: self.dim(),
                actual: theta.len(),
            });
        }
        let mut out = vec![0.0; theta.len()];
        self.eval_into(theta, &mut out);
        Ok(out)
    }
}
