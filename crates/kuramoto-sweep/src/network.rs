//! Oscillator network supplied by an external graph builder.
//!
//! Graph generation lives outside this crate. A builder hands over an
//! adjacency matrix and a degree sequence through [`GraphAdapter`];
//! [`Network::from_adapter`] checks them for consistency and stores
//! neighbor lists so field evaluation costs O(edges), not O(N²).

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Read-only view of an undirected network of N oscillators.
pub trait GraphAdapter {
    /// N x N binary matrix, symmetric with zero diagonal.
    fn adjacency_matrix(&self) -> Vec<Vec<u8>>;

    /// Per-node degree, equal to the adjacency row sums.
    fn degree_sequence(&self) -> Vec<usize>;
}

/// Minimal [`GraphAdapter`] backed by a dense adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenseGraph {
    adjacency: Vec<Vec<u8>>,
}

impl DenseGraph {
    /// Wrap an adjacency matrix. Validation happens in [`Network::from_adapter`].
    pub fn new(adjacency: Vec<Vec<u8>>) -> Self {
        Self { adjacency }
    }

    /// Build from an undirected edge list over `n` nodes.
    ///
    /// Duplicate edges collapse; self-loops are rejected.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> SyncResult<Self> {
        let mut adjacency = vec![vec![0u8; n]; n];
        for &(a, b) in edges {
            if a >= n || b >= n {
                return Err(SyncError::invalid_param(
                    "edge",
                    format!("({a}, {b})"),
                    format!("endpoints must be < {n}"),
                ));
            }
            if a == b {
                return Err(SyncError::NonZeroDiagonal(a));
            }
            adjacency[a][b] = 1;
            adjacency[b][a] = 1;
        }
        Ok(Self { adjacency })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl GraphAdapter for DenseGraph {
    fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        self.adjacency.clone()
    }

    fn degree_sequence(&self) -> Vec<usize> {
        self.adjacency
            .iter()
            .map(|row| row.iter().map(|&a| a as usize).sum())
            .collect()
    }
}

/// Validated, immutable oscillator network.
///
/// Holds neighbor lists, degrees, the guarded coupling normalizers
/// `d_i = max(deg_i, 1)`, and the natural frequencies
/// `ω_i = frequency_scale · deg_i`. An isolated node therefore has zero
/// drive and a normalizer of 1.
#[derive(Debug, Clone)]
pub struct Network {
    neighbors: Vec<Vec<usize>>,
    degrees: Vec<usize>,
    normalizers: Vec<f64>,
    natural_frequencies: Vec<f64>,
}

impl Network {
    /// Validate a graph adapter's output and build the network with
    /// natural frequencies equal to node degree.
    ///
    /// # Errors
    ///
    /// - `EmptyNetwork` for N = 0
    /// - `NotSquare`, `NonBinaryEntry`, `NonZeroDiagonal`,
    ///   `AsymmetricAdjacency` for a malformed matrix
    /// - `DimensionMismatch` / `DegreeMismatch` when the degree sequence
    ///   disagrees with the matrix
    pub fn from_adapter<G: GraphAdapter + ?Sized>(graph: &G) -> SyncResult<Self> {
        Self::from_parts(graph.adjacency_matrix(), graph.degree_sequence())
    }

    /// Build directly from an adjacency matrix, deriving degrees from row sums.
    pub fn from_adjacency(adjacency: Vec<Vec<u8>>) -> SyncResult<Self> {
        let graph = DenseGraph::new(adjacency);
        Self::from_adapter(&graph)
    }

    fn from_parts(adjacency: Vec<Vec<u8>>, degrees: Vec<usize>) -> SyncResult<Self> {
        let n = adjacency.len();
        if n == 0 {
            return Err(SyncError::EmptyNetwork);
        }
        if degrees.len() != n {
            return Err(SyncError::DimensionMismatch {
                expected: n,
                actual: degrees.len(),
            });
        }

        let mut neighbors = Vec::with_capacity(n);
        for (i, row) in adjacency.iter().enumerate() {
            if row.len() != n {
                return Err(SyncError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            let mut adjacent = Vec::new();
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 if i == j => return Err(SyncError::NonZeroDiagonal(i)),
                    1 => adjacent.push(j),
                    _ => return Err(SyncError::NonBinaryEntry { i, j, value }),
                }
            }
            neighbors.push(adjacent);
        }

        for (i, adjacent) in neighbors.iter().enumerate() {
            for &j in adjacent {
                if adjacency[j].get(i).copied() != Some(1) {
                    return Err(SyncError::AsymmetricAdjacency { i, j });
                }
            }
            if adjacent.len() != degrees[i] {
                return Err(SyncError::DegreeMismatch {
                    node: i,
                    declared: degrees[i],
                    row_sum: adjacent.len(),
                });
            }
        }

        let normalizers = degrees.iter().map(|&d| d.max(1) as f64).collect();
        let natural_frequencies = degrees.iter().map(|&d| d as f64).collect();

        Ok(Self {
            neighbors,
            degrees,
            normalizers,
            natural_frequencies,
        })
    }

    /// Rescale natural frequencies to `scale · deg_i`.
    pub fn with_frequency_scale(mut self, scale: f64) -> SyncResult<Self> {
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(SyncError::invalid_param(
                "frequency_scale",
                scale,
                "Must be finite and >= 0",
            ));
        }
        self.natural_frequencies = self.degrees.iter().map(|&d| scale * d as f64).collect();
        Ok(self)
    }

    /// Number of oscillators N.
    #[inline]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Always false: construction rejects N = 0.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Neighbors of node `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbors[i]
    }

    /// Degree sequence.
    #[inline]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Guarded coupling normalizers `max(deg_i, 1)`.
    #[inline]
    pub fn normalizers(&self) -> &[f64] {
        &self.normalizers
    }

    /// Natural frequencies ω_i.
    #[inline]
    pub fn natural_frequencies(&self) -> &[f64] {
        &self.natural_frequencies
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.degrees.iter().sum::<usize>() / 2
    }

    /// Expected order parameter of N uncorrelated phases, `1/sqrt(N)`.
    #[inline]
    pub fn incoherent_baseline(&self) -> f64 {
        1.0 / (self.len() as f64).sqrt()
    }
}
