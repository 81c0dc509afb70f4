//! Kuramoto oscillator networks and coupling sweeps.
//!
//! This crate simulates phase oscillators coupled over an undirected network,
//! measures their collective synchronization, and sweeps the coupling
//! strength up and down to expose hysteresis:
//!
//! ```text
//! dθᵢ/dt = ωᵢ + (K / dᵢ) Σⱼ Aᵢⱼ sin(θⱼ − θᵢ)
//! ```
//!
//! with `ωᵢ = frequency_scale · degᵢ` and `dᵢ = max(degᵢ, 1)`.
//!
//! # Modules
//!
//! - [`config`]: Configuration types for the integrator, detectors and sweep
//! - [`error`]: Error types and result aliases
//! - [`network`]: Graph adapter and validated oscillator network
//! - [`dynamics`]: Phase-velocity field and Dormand-Prince integrator
//! - [`order`]: Order parameter r (and mean phase ψ)
//! - [`steady`]: Windowed-stability and block-statistics steady-state detectors
//! - [`sweep`]: Forward/backward continuation sweep and hysteresis summary
//!
//! # Example
//!
//! ```
//! use kuramoto_sweep::{DenseGraph, Network, SimulationConfig, SweepController};
//! use kuramoto_sweep::steady::detector_from_config;
//!
//! let edges: Vec<_> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
//! let network = Network::from_adapter(&DenseGraph::from_edges(6, &edges).unwrap()).unwrap();
//!
//! let mut config = SimulationConfig::quick_preset();
//! config.block.t_measure = 10.0;
//! config.block.t_chunk = 5.0;
//! config.block.block_length = 20;
//! config.block.num_blocks = 5;
//! let detector = detector_from_config(&config).unwrap();
//!
//! let controller = SweepController::new(&network, detector.as_ref(), 0.8).unwrap();
//! let theta0 = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let report = controller.run(&[0.0, 1.0], theta0).unwrap();
//! assert_eq!(report.forward_r().len(), 2);
//! ```

pub mod config;
pub mod dynamics;
pub mod error;
pub mod network;
pub mod order;
pub mod steady;
pub mod sweep;

pub use config::SimulationConfig;
pub use error::{SyncError, SyncResult};
pub use network::{DenseGraph, GraphAdapter, Network};

// Re-export measurement types for convenience
pub use order::{order_parameter, order_parameter_with_phase};
pub use steady::{AnomalyFlag, Measurement, Regime, SteadyStateDetector};

// Re-export sweep entry points
pub use sweep::{run_batch, run_sweep, SweepController, SweepJob, SweepReport};
