//! Forward/backward sweeps on a heterogeneous small-world network.

use kuramoto_sweep::run_sweep;
use kuramoto_sweep::sweep::{PointStatus, SweepDirection};

use super::helpers::{golden_phases, quick_config, small_world_12};

#[test]
fn test_small_world_gap_is_non_negative() {
    let network = small_world_12();
    assert_eq!(network.degrees(), &[4, 5, 3, 4, 4, 3, 5, 4, 3, 5, 4, 4]);

    let config = quick_config(6.0, 13);
    let report = run_sweep(&network, &config, Some(golden_phases(12))).unwrap();

    assert!(report.is_complete());
    let backward = report.backward.as_ref().unwrap();
    assert_eq!(backward.direction, SweepDirection::Backward);
    assert!(report
        .forward
        .points
        .iter()
        .chain(&backward.points)
        .all(|p| p.status == PointStatus::Measured));

    let forward_r = report.forward_r();
    let backward_r = report.backward_r();
    assert!(forward_r[0] < 0.8, "K = 0 should not be synchronized: {}", forward_r[0]);
    assert!(forward_r[12] > 0.9);
    assert!(backward_r[12] > 0.9);

    let summary = &report.hysteresis;
    let forward_critical = summary.forward_critical.expect("forward sweep crosses");
    let backward_critical = summary.backward_critical.expect("backward sweep crosses");
    assert!(
        forward_critical >= backward_critical,
        "forward onset {forward_critical} below backward loss {backward_critical}"
    );
    assert!(summary.gap.unwrap() >= 0.0);
    assert_eq!(summary.gap_per_k.len(), 13);
}

#[test]
fn test_backward_starts_where_forward_ends() {
    let network = small_world_12();
    let config = quick_config(3.0, 4);
    let report = run_sweep(&network, &config, Some(golden_phases(12))).unwrap();

    let forward_last = report.forward.points.last().unwrap();
    let backward = report.backward.as_ref().unwrap();
    let backward_first = backward.points.last().unwrap();

    assert_eq!(backward_first.coupling, 3.0);
    assert_eq!(Some(&backward_first.seed), forward_last.theta_last.as_ref());
}
