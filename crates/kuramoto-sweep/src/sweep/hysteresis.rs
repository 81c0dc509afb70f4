//! Transition points and hysteresis gap of a forward/backward curve pair.

use super::types::HysteresisSummary;

/// Locate the forward and backward transitions on grid-aligned r arrays.
///
/// `forward_r` and `backward_r` are aligned on the ascending `grid`; NaN
/// marks a missing or failed point and never counts as synchronized.
///
/// Both critical couplings use the same rule: the lowest K of the
/// unbroken run of points at `r >= threshold` that ends at `K_max`. A
/// curve that crosses, dips and recrosses is located at its last crossing,
/// so identical curves always give a zero gap.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::sweep::hysteresis_summary;
///
/// let grid = [0.0, 1.0, 2.0, 3.0];
/// let forward = [0.1, 0.2, 0.9, 0.95];
/// let backward = [0.1, 0.85, 0.9, 0.95];
/// let summary = hysteresis_summary(&grid, &forward, &backward, 0.8);
/// assert_eq!(summary.forward_critical, Some(2.0));
/// assert_eq!(summary.backward_critical, Some(1.0));
/// assert_eq!(summary.gap, Some(1.0));
/// ```
pub fn hysteresis_summary(
    grid: &[f64],
    forward_r: &[f64],
    backward_r: &[f64],
    threshold: f64,
) -> HysteresisSummary {
    let forward_critical = synchronized_onset(grid, forward_r, threshold);
    let backward_critical = synchronized_onset(grid, backward_r, threshold);

    let gap = forward_critical
        .zip(backward_critical)
        .map(|(forward, backward)| forward - backward);

    let gap_per_k = (0..grid.len())
        .map(|i| match (forward_r.get(i), backward_r.get(i)) {
            (Some(f), Some(b)) => b - f,
            _ => f64::NAN,
        })
        .collect();

    HysteresisSummary {
        threshold,
        forward_critical,
        backward_critical,
        gap,
        gap_per_k,
    }
}

/// Lowest K of the run at `r >= threshold` reaching down from `K_max`.
fn synchronized_onset(grid: &[f64], r: &[f64], threshold: f64) -> Option<f64> {
    let mut onset = None;
    for i in (0..grid.len()).rev() {
        match r.get(i) {
            Some(&value) if value >= threshold => onset = Some(grid[i]),
            _ => break,
        }
    }
    onset
}
