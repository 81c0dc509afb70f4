//! Sweep error types.
//!
//! Errors fall into two classes:
//! - **Domain errors**: structurally invalid input (empty or malformed
//!   network, negative coupling, bad configuration). Never retried; the
//!   caller must fix its input.
//! - **Integration failures**: the adaptive integrator could not meet its
//!   tolerances within the step budget. The sweep controller records these
//!   per grid point and keeps going.
//!
//! Non-convergence of the windowed detector is *not* an error; it is an
//! ordinary outcome carried in [`crate::steady::Measurement`].

use thiserror::Error;

/// Errors that can occur while simulating or sweeping a Kuramoto network.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network has no oscillators.
    #[error("Network must contain at least one oscillator")]
    EmptyNetwork,

    /// Empty phase vector passed where N >= 1 is required.
    #[error("Empty phase vector")]
    EmptyInput,

    /// Adjacency matrix is not N x N.
    #[error("Adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row
        row: usize,
        /// Row length
        len: usize,
        /// Expected row length (N)
        expected: usize,
    },

    /// Adjacency entry other than 0 or 1.
    #[error("Adjacency entry A[{i}][{j}] = {value} is not binary")]
    NonBinaryEntry {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
        /// Entry value
        value: u8,
    },

    /// Self-loop in the adjacency matrix.
    #[error("Adjacency diagonal A[{0}][{0}] must be zero")]
    NonZeroDiagonal(usize),

    /// A[i][j] != A[j][i].
    #[error("Adjacency matrix is asymmetric at ({i}, {j})")]
    AsymmetricAdjacency {
        /// Row index
        i: usize,
        /// Column index
        j: usize,
    },

    /// Declared degree disagrees with the adjacency row sum.
    #[error("Degree mismatch at node {node}: declared {declared}, adjacency row sum {row_sum}")]
    DegreeMismatch {
        /// Node index
        node: usize,
        /// Degree reported by the graph adapter
        declared: usize,
        /// Row sum of the adjacency matrix
        row_sum: usize,
    },

    /// Phase vector length does not match the network size.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// Coupling strength is negative or not finite.
    #[error("Coupling strength must be finite and non-negative, got {0}")]
    NegativeCoupling(f64),

    /// Coupling grid is empty or not strictly ascending.
    #[error("Invalid coupling grid: {0}")]
    InvalidGrid(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Integrator exhausted its step budget before reaching the end time.
    #[error("Integration failed at t={t}: step budget of {max_steps} exhausted")]
    StepBudgetExceeded {
        /// Time reached when the budget ran out
        t: f64,
        /// Configured budget
        max_steps: usize,
    },

    /// Step size collapsed below floating-point resolution.
    #[error("Integration failed at t={t}: step size {h:e} underflowed")]
    StepSizeUnderflow {
        /// Time at failure
        t: f64,
        /// Rejected step size
        h: f64,
    },

    /// NaN or infinity appeared in the state or its derivative.
    #[error("Integration failed at t={t}: non-finite state")]
    NonFiniteState {
        /// Time at failure
        t: f64,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for sweep operations.
pub type SyncResult<T> = Result<T, SyncError>;

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::SerializationError(err.to_string())
    }
}

impl SyncError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        SyncError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error rejects structurally invalid input.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SyncError::EmptyNetwork
                | SyncError::EmptyInput
                | SyncError::NotSquare { .. }
                | SyncError::NonBinaryEntry { .. }
                | SyncError::NonZeroDiagonal(_)
                | SyncError::AsymmetricAdjacency { .. }
                | SyncError::DegreeMismatch { .. }
                | SyncError::DimensionMismatch { .. }
                | SyncError::NegativeCoupling(_)
                | SyncError::InvalidGrid(_)
                | SyncError::InvalidParameter { .. }
                | SyncError::ConfigError(_)
        )
    }

    /// Check if this error is an integrator failure.
    pub fn is_integration_failure(&self) -> bool {
        matches!(
            self,
            SyncError::StepBudgetExceeded { .. }
                | SyncError::StepSizeUnderflow { .. }
                | SyncError::NonFiniteState { .. }
        )
    }
}
