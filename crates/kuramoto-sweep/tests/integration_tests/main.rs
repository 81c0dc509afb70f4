//! Integration tests for the Kuramoto sweep engine.
//!
//! These tests run the full pipeline on real networks (NO MOCKS):
//! - Graph adapter -> field -> integrator -> order parameter
//! - Both steady-state detectors at fixed couplings
//! - Forward/backward continuation sweeps and the hysteresis gap
//! - Parallel batches of independent sweeps

mod helpers;
mod batch_tests;
mod e2e_tests;
mod hysteresis_tests;
mod validation_tests;
