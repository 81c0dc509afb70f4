//! Input validation through the public entry points.

use kuramoto_sweep::config::SimulationConfig;
use kuramoto_sweep::dynamics::PhaseVelocityField;
use kuramoto_sweep::{run_sweep, Network, SyncError};

use super::helpers::{quick_config, ring, MisreportedDegrees};

#[test]
fn test_inconsistent_adapter_rejected() {
    let result = Network::from_adapter(&MisreportedDegrees);
    assert!(matches!(result, Err(SyncError::DegreeMismatch { node: 2, .. })));
}

#[test]
fn test_negative_coupling_rejected() {
    let network = ring(5);
    let err = PhaseVelocityField::new(&network, -0.1).unwrap_err();
    assert!(matches!(err, SyncError::NegativeCoupling(_)));
    assert!(err.is_domain_error());
}

#[test]
fn test_sweep_config_errors() {
    let network = ring(5);

    let mut config = quick_config(2.0, 3);
    config.sweep.k_min = -0.5;
    assert!(matches!(
        run_sweep(&network, &config, None),
        Err(SyncError::ConfigError(_))
    ));

    let mut config = quick_config(2.0, 3);
    config.block.num_blocks = 100;
    assert!(run_sweep(&network, &config, None).is_err());

    let config = quick_config(2.0, 3);
    let err = run_sweep(&network, &config, Some(vec![0.0; 4])).unwrap_err();
    assert!(matches!(
        err,
        SyncError::DimensionMismatch {
            expected: 5,
            actual: 4
        }
    ));
}

#[test]
fn test_config_json_roundtrip_drives_sweep() {
    let mut config = SimulationConfig::quick_preset();
    config.sweep.k_steps = 2;
    config.sweep.k_max = 1.0;
    config.sweep.seed = Some(9);
    config.block.t_measure = 10.0;
    config.block.t_chunk = 5.0;
    config.block.block_length = 20;
    config.block.num_blocks = 5;

    let json = serde_json::to_string(&config).unwrap();
    let restored: SimulationConfig = serde_json::from_str(&json).unwrap();

    let network = ring(6);
    let a = run_sweep(&network, &config, None).unwrap();
    let b = run_sweep(&network, &restored, None).unwrap();
    assert_eq!(a.forward_r(), b.forward_r());
}
