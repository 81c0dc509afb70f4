//! Parallel batches of independent sweeps.

use kuramoto_sweep::{run_batch, run_sweep, SweepJob};

use super::helpers::{golden_phases, quick_config, ring, short_blocks, small_world_12};

#[test]
fn test_batch_over_topologies() {
    let ring = ring(12);
    let small_world = small_world_12();
    let mut config = quick_config(2.0, 3);
    config.block = short_blocks();
    config.sweep.seed = Some(5);

    let jobs = vec![
        SweepJob::new("ring", &ring, config.clone()),
        SweepJob::new("small-world", &small_world, config.clone()),
        SweepJob::new("small-world-golden", &small_world, config.clone())
            .with_theta0(golden_phases(12)),
    ];
    let results = run_batch(&jobs);
    assert_eq!(results.len(), 3);

    for (label, result) in &results {
        let report = result.as_ref().unwrap_or_else(|e| panic!("{label} failed: {e}"));
        assert_eq!(report.grid, vec![0.0, 1.0, 2.0]);
        assert!(report.is_complete(), "{label} incomplete");
    }

    // Same job run alone gives the same curves
    let alone = run_sweep(&small_world, &config, None).unwrap();
    let batched = results[1].1.as_ref().unwrap();
    assert_eq!(alone.forward_r(), batched.forward_r());
    assert_eq!(alone.backward_r(), batched.backward_r());
}

#[test]
fn test_batch_isolates_failures() {
    let ring = ring(12);
    let mut bad = quick_config(2.0, 3);
    bad.sweep.k_max = -1.0;
    let mut good = quick_config(2.0, 3);
    good.block = short_blocks();
    good.sweep.seed = Some(1);

    let jobs = vec![
        SweepJob::new("bad", &ring, bad),
        SweepJob::new("good", &ring, good),
    ];
    let results = run_batch(&jobs);
    assert!(results[0].1.is_err());
    assert!(results[1].1.is_ok());
}
