//! Qualitative labels attached to block measurements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dynamical regime of a measurement window.
///
/// # Example
///
/// ```
/// use kuramoto_sweep::steady::Regime;
///
/// assert_eq!(Regime::Synchronized.as_str(), "synchronized");
/// assert!(Regime::Synchronized.is_settled());
/// assert!(!Regime::Transitional.is_settled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// High, steady coherence.
    Synchronized,

    /// Coherence at the incoherent baseline, steady.
    Desynchronized,

    /// Steady plateau between the two bands (partial synchronization).
    Metastable,

    /// Drifting or too noisy to call.
    Transitional,
}

impl Regime {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Synchronized => "synchronized",
            Regime::Desynchronized => "desynchronized",
            Regime::Metastable => "metastable",
            Regime::Transitional => "transitional",
        }
    }

    /// Whether the window reached a plateau.
    #[inline]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Regime::Transitional)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soft warning raised by the block detector.
///
/// Flags never fail a measurement; consumers decide whether to discard
/// flagged points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyFlag {
    /// Block means still drift by more than `slope_tol` per block.
    NotPlateau,

    /// Standard deviation of block means exceeds `sigma_max`.
    Noisy,
}

impl AnomalyFlag {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyFlag::NotPlateau => "not_plateau",
            AnomalyFlag::Noisy => "noisy",
        }
    }
}

impl fmt::Display for AnomalyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
