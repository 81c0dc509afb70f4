//! Kuramoto order parameter.
//!
//! ```text
//! r · e^(iψ) = (1/N) Σⱼ e^(iθⱼ)
//! ```
//!
//! r ∈ [0, 1] measures phase coherence: r → 1 when all oscillators are in
//! phase, r ≈ 1/√N for N uncorrelated phases.

use std::f64::consts::TAU;

use crate::error::{SyncError, SyncResult};

/// Synchronization magnitude r of a phase vector.
///
/// # Errors
///
/// `EmptyInput` for an empty vector.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::order::order_parameter;
///
/// let r = order_parameter(&[0.3, 0.3, 0.3]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn order_parameter(theta: &[f64]) -> SyncResult<f64> {
    order_parameter_with_phase(theta).map(|(r, _)| r)
}

/// Order parameter and collective mean phase (r, ψ), ψ ∈ [0, 2π).
pub fn order_parameter_with_phase(theta: &[f64]) -> SyncResult<(f64, f64)> {
    if theta.is_empty() {
        return Err(SyncError::EmptyInput);
    }
    let n = theta.len() as f64;
    let (sum_sin, sum_cos) = theta
        .iter()
        .fold((0.0, 0.0), |(s, c), &phase| (s + phase.sin(), c + phase.cos()));

    let avg_cos = sum_cos / n;
    let avg_sin = sum_sin / n;

    // Rounding can push |z| a hair above 1 for aligned phases
    let r = avg_cos.hypot(avg_sin).min(1.0);
    let psi = avg_sin.atan2(avg_cos).rem_euclid(TAU);
    Ok((r, psi))
}

/// r for every phase vector in a batch, in order.
pub fn order_parameter_series<S: AsRef<[f64]>>(states: &[S]) -> SyncResult<Vec<f64>> {
    states
        .iter()
        .map(|theta| order_parameter(theta.as_ref()))
        .collect()
}
