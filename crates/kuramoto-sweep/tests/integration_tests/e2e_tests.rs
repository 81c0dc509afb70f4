//! End-to-end pipeline tests on a 10-node ring.

use kuramoto_sweep::config::{ConvergenceConfig, IntegratorConfig};
use kuramoto_sweep::dynamics::{integrate, random_phases_seeded, PhaseVelocityField};
use kuramoto_sweep::order::order_parameter_series;
use kuramoto_sweep::steady::{run_until_converged, BlockDetector, SteadyStateDetector};
use kuramoto_sweep::{order_parameter, Regime, SimulationConfig, SweepController};

use super::helpers::{ring, RING10_THETA0};

// =============================================================================
// Raw pipeline: field -> integrator -> order parameter
// =============================================================================

#[test]
fn test_uncoupled_ring_keeps_initial_coherence() {
    // Equal degrees give equal frequencies, so K = 0 is a rigid rotation
    let network = ring(10);
    let field = PhaseVelocityField::new(&network, 0.0).unwrap();
    let trajectory = integrate(&field, &RING10_THETA0, 50.0, &IntegratorConfig::default()).unwrap();

    let r0 = order_parameter(&RING10_THETA0).unwrap();
    let series = order_parameter_series(&trajectory.states).unwrap();
    assert_eq!(series.len(), 1000);
    for r in &series {
        assert!((r - r0).abs() < 1e-6, "r drifted from {r0} to {r}");
    }
    assert!(r0 < 2.0 / (10f64).sqrt());
}

#[test]
fn test_coupled_ring_synchronizes() {
    let network = ring(10);
    for k in [1.0, 5.0] {
        let field = PhaseVelocityField::new(&network, k).unwrap();
        let trajectory =
            integrate(&field, &RING10_THETA0, 100.0, &IntegratorConfig::default()).unwrap();
        let r_end = order_parameter(&trajectory.final_state).unwrap();
        assert!(r_end > 0.9, "K = {k}: r = {r_end}");
    }
}

// =============================================================================
// Detectors at fixed coupling
// =============================================================================

#[test]
fn test_windowed_detector_on_ring() {
    let network = ring(10);
    let field = PhaseVelocityField::new(&network, 1.0).unwrap();
    let report = run_until_converged(
        &field,
        &RING10_THETA0,
        &ConvergenceConfig {
            t_max: 100.0,
            ..Default::default()
        },
        &IntegratorConfig::default(),
    )
    .unwrap();

    assert!(report.converged());
    assert!(report.r_final > 0.99, "r = {}", report.r_final);
    let idx = report.converged_at.unwrap();
    assert_eq!(report.r_history.len(), idx + 1);
    assert_eq!(report.times.len(), idx + 1);
    let theta = report.theta_final.unwrap();
    assert!(theta.iter().all(|p| (0.0..std::f64::consts::TAU).contains(p)));
}

#[test]
fn test_block_detector_regimes_on_ring() {
    let network = ring(10);
    let detector = BlockDetector::new(
        SimulationConfig::quick_preset().block,
        IntegratorConfig::default(),
    )
    .unwrap();

    let field = PhaseVelocityField::new(&network, 0.0).unwrap();
    let incoherent = detector.measure(&field, RING10_THETA0.to_vec()).unwrap();
    assert_eq!(incoherent.regime, Some(Regime::Desynchronized));
    assert!(incoherent.r_summary < 0.1);
    assert!(incoherent.flags.is_empty());

    for k in [1.0, 5.0] {
        let field = PhaseVelocityField::new(&network, k).unwrap();
        let synced = detector.measure(&field, RING10_THETA0.to_vec()).unwrap();
        assert_eq!(synced.regime, Some(Regime::Synchronized), "K = {k}");
        assert!(synced.r_summary > 0.99);
        assert!(synced.r_std.unwrap() < 0.02);
        assert!(synced.has_seed());
    }
}

// =============================================================================
// Full sweep from a random cold start
// =============================================================================

#[test]
fn test_seeded_cold_start_sweep_on_ring() {
    // Seed fixed: some draws relax into a twisted ring state with r near 0
    // at K = 5 instead of the in-phase state.
    const SEED: u64 = 0;
    let network = ring(10);
    let detector =
        BlockDetector::new(SimulationConfig::quick_preset().block, IntegratorConfig::default())
            .unwrap();
    let controller = SweepController::new(&network, &detector, 0.8).unwrap();

    let theta0 = random_phases_seeded(10, SEED);
    let r_draw = order_parameter(&theta0).unwrap();
    let report = controller.run(&[0.0, 1.0, 5.0], theta0).unwrap();
    assert!(report.is_complete());

    // K = 0 is a rigid rotation, so r stays at the draw's value. Ten uniform
    // phases give r around 1/sqrt(10) with a spread of about 0.15.
    let forward_r = report.forward_r();
    assert!((forward_r[0] - r_draw).abs() < 1e-6);
    assert!(
        (forward_r[0] - 1.0 / 10f64.sqrt()).abs() < 0.15,
        "r(K = 0) = {}",
        forward_r[0]
    );
    assert!(forward_r[2] > 0.9, "r(K = 5) = {}", forward_r[2]);

    // Continuation: each point starts where the previous one ended
    let forward = &report.forward.points;
    for pair in forward.windows(2) {
        assert_eq!(Some(&pair[1].seed), pair[0].theta_last.as_ref());
    }
    let backward = report.backward.as_ref().unwrap();
    assert_eq!(
        backward.point_at(5.0).map(|p| &p.seed),
        forward[2].theta_last.as_ref()
    );
}
