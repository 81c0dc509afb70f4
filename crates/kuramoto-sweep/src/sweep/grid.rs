//! Coupling grid construction and validation.

use crate::error::{SyncError, SyncResult};

/// Evenly spaced grid of `steps` couplings from `k_min` to `k_max`
/// inclusive. The last point is exactly `k_max`.
///
/// # Errors
///
/// `InvalidGrid` if `steps` is 0, a bound is negative or non-finite, or
/// `k_max <= k_min` with more than one step.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::sweep::coupling_grid;
///
/// let grid = coupling_grid(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn coupling_grid(k_min: f64, k_max: f64, steps: usize) -> SyncResult<Vec<f64>> {
    if steps == 0 {
        return Err(SyncError::InvalidGrid("grid needs at least one point".to_string()));
    }
    if steps == 1 {
        let grid = vec![k_min];
        validate_grid(&grid)?;
        return Ok(grid);
    }
    let span = k_max - k_min;
    let last = steps - 1;
    let grid: Vec<f64> = (0..steps)
        .map(|i| {
            if i == last {
                k_max
            } else {
                k_min + span * i as f64 / last as f64
            }
        })
        .collect();
    validate_grid(&grid)?;
    Ok(grid)
}

/// Check that a grid is non-empty, finite, non-negative and strictly
/// ascending.
pub fn validate_grid(grid: &[f64]) -> SyncResult<()> {
    if grid.is_empty() {
        return Err(SyncError::InvalidGrid("grid is empty".to_string()));
    }
    if let Some(k) = grid.iter().find(|k| !(k.is_finite() && **k >= 0.0)) {
        return Err(SyncError::InvalidGrid(format!(
            "couplings must be finite and >= 0, found {k}"
        )));
    }
    if let Some(i) = grid.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SyncError::InvalidGrid(format!(
            "grid must be strictly ascending: K[{}] = {} >= K[{}] = {}",
            i,
            grid[i],
            i + 1,
            grid[i + 1]
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        let grid = coupling_grid(0.0, 5.0, 100).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[99], 5.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(coupling_grid(2.5, 0.0, 1).unwrap(), vec![2.5]);
    }

    #[test]
    fn test_rejects_bad_grids() {
        for (k_min, k_max, steps) in [
            (0.0, 1.0, 0),
            (1.0, 1.0, 3),
            (-1.0, 1.0, 3),
            (0.0, f64::INFINITY, 3),
        ] {
            assert!(
                matches!(coupling_grid(k_min, k_max, steps), Err(SyncError::InvalidGrid(_))),
                "({k_min}, {k_max}, {steps}) accepted"
            );
        }

        assert!(validate_grid(&[]).is_err());
        assert!(validate_grid(&[0.0, 1.0, 1.0]).is_err());
        assert!(validate_grid(&[0.0, 2.0, 1.0]).is_err());
        assert!(validate_grid(&[0.0, f64::NAN]).is_err());
        assert!(validate_grid(&[0.0, 0.5, 3.0]).is_ok());
    }
}
