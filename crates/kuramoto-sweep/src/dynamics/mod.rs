//! Kuramoto dynamics: phase-velocity field, adaptive integrator, samples.
//!
//! # Example
//!
//! ```
//! use kuramoto_sweep::config::IntegratorConfig;
//! use kuramoto_sweep::dynamics::{integrate, PhaseVelocityField};
//! use kuramoto_sweep::network::{DenseGraph, Network};
//!
//! let graph = DenseGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
//! let network = Network::from_adapter(&graph).unwrap();
//! let field = PhaseVelocityField::new(&network, 1.0).unwrap();
//!
//! let config = IntegratorConfig::default();
//! let trajectory = integrate(&field, &[0.0, 1.0, 2.0], 1.0, &config).unwrap();
//! assert_eq!(trajectory.len(), 20);
//! ```

mod field;
mod initial;
mod integrator;
mod trajectory;


pub use field::PhaseVelocityField;
pub use initial::{random_phases, random_phases_seeded};
pub use integrator::integrate;
pub use trajectory::{wrap_phases, wrapped, IntegrationStats, Trajectory};
