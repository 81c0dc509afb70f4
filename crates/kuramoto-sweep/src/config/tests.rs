//! Tests for simulation configuration types.

use super::*;

#[test]
fn test_simulation_config_default() {
    let config = SimulationConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.integrator.dt, 0.05);
    assert_eq!(config.convergence.window, 100);
    assert_eq!(config.sweep.detector, DetectorKind::Block);
}

#[test]
fn test_presets_validate() {
    assert!(SimulationConfig::quick_preset().validate().is_ok());
    assert!(SimulationConfig::precise_preset().validate().is_ok());
}

#[test]
fn test_integrator_config_validation() {
    let invalid = IntegratorConfig {
        dt: 0.0,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = IntegratorConfig {
        rtol: -1e-8,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = IntegratorConfig {
        max_steps: 0,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = IntegratorConfig {
        initial_step: Some(f64::NAN),
        ..Default::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_sample_count_matches_arange() {
    let config = IntegratorConfig::default();
    // arange(0, 100, 0.05) has 2000 entries
    assert_eq!(config.sample_count(100.0), 2000);
    // Non-multiple horizons round up
    assert_eq!(config.sample_count(0.12), 3);

    let inclusive = IntegratorConfig {
        include_endpoint: true,
        ..Default::default()
    };
    assert_eq!(inclusive.sample_count(100.0), 2001);
}

#[test]
fn test_convergence_config_validation() {
    assert!(ConvergenceConfig::default().validate().is_ok());

    let invalid = ConvergenceConfig {
        window: 0,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());

    let invalid = ConvergenceConfig {
        eps: 0.0,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_block_config_rejects_window_longer_than_horizon() {
    let config = BlockConfig {
        t_measure: 10.0,
        block_length: 100,
        num_blocks: 3,
        ..Default::default()
    };
    // 10 / 0.05 = 200 samples < 300
    let err = config.validate(0.05).unwrap_err();
    assert!(err.contains("exceeds"));

    let ok = BlockConfig {
        num_blocks: 2,
        ..config
    };
    assert!(ok.validate(0.05).is_ok());
}

#[test]
fn test_block_config_threshold_ranges() {
    let invalid = BlockConfig {
        sync_threshold: 1.5,
        ..Default::default()
    };
    assert!(invalid.validate(0.05).is_err());

    let invalid = BlockConfig {
        sigma_max: -0.1,
        ..Default::default()
    };
    assert!(invalid.validate(0.05).is_err());
}

#[test]
fn test_sweep_config_validation() {
    assert!(SweepConfig::default().validate().is_ok());

    let negative = SweepConfig {
        k_min: -1.0,
        ..Default::default()
    };
    assert!(negative.validate().is_err());

    let inverted = SweepConfig {
        k_min: 3.0,
        k_max: 1.0,
        ..Default::default()
    };
    assert!(inverted.validate().is_err());

    let single_point = SweepConfig {
        k_min: 2.0,
        k_max: 2.0,
        k_steps: 1,
        ..Default::default()
    };
    assert!(single_point.validate().is_ok());
}

#[test]
fn test_sync_thresholds_are_independent() {
    let config = SimulationConfig::default();
    assert_eq!(config.block.sync_threshold, config.sweep.sync_threshold);

    let mut split = SimulationConfig::default();
    split.block.sync_threshold = 0.95;
    split.sweep.sync_threshold = 0.5;
    assert!(split.validate().is_ok());
}

#[test]
fn test_check_wraps_config_error() {
    let mut config = SimulationConfig::default();
    config.sweep.k_steps = 0;
    let err = config.check().unwrap_err();
    assert!(err.is_domain_error());
    assert!(format!("{}", err).contains("k_steps"));
}

#[test]
fn test_config_serde_roundtrip() {
    let config = SimulationConfig::quick_preset();
    let json = serde_json::to_string(&config).unwrap();
    let restored: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.block.num_blocks, config.block.num_blocks);
    assert_eq!(restored.sweep.detector, config.sweep.detector);
    assert!(restored.validate().is_ok());
}

#[test]
fn test_optional_fields_default_when_missing() {
    let json = r#"{
        "k_min": 0.0,
        "k_max": 2.0,
        "k_steps": 5,
        "sync_threshold": 0.7,
        "frequency_scale": 1.0
    }"#;
    let sweep: SweepConfig = serde_json::from_str(json).unwrap();
    assert_eq!(sweep.detector, DetectorKind::Block);
    assert!(sweep.seed.is_none());
}
