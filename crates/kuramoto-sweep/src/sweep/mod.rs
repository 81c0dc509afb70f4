//! Coupling sweeps with continuation.
//!
//! A sweep visits an ascending coupling grid twice. The forward pass seeds
//! every point with the previous point's final phases; the backward pass
//! starts from the forward pass's last state at `K_max` and walks down.
//! Both curves are stored in ascending K order, so they line up on the
//! grid for plotting and for locating the hysteresis gap.

mod batch;
mod controller;
mod grid;
mod hysteresis;
mod types;


pub use batch::{run_batch, SweepJob};
pub use controller::{run_sweep, SweepController};
pub use grid::{coupling_grid, validate_grid};
pub use hysteresis::hysteresis_summary;
pub use types::{
    HysteresisSummary, PointStatus, SweepCurve, SweepDirection, SweepPoint, SweepReport,
    Termination,
};
