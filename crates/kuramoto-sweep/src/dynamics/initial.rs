//! Cold-start phase vectors.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draw `n` phases uniformly from `[0, 2π)`.
pub fn random_phases<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(0.0..TAU)).collect()
}

/// Reproducible uniform phases from a seed.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::dynamics::random_phases_seeded;
///
/// assert_eq!(random_phases_seeded(8, 42), random_phases_seeded(8, 42));
/// ```
pub fn random_phases_seeded(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_phases(n, &mut rng)
}
