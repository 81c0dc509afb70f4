//! Helper Functions: Deterministic Network Generation (NO MOCKS)

use std::f64::consts::TAU;

use kuramoto_sweep::config::{BlockConfig, SimulationConfig};
use kuramoto_sweep::{DenseGraph, GraphAdapter, Network};

/// Fixed, spread-out starting phases for a 10-node ring (r ≈ 0.05).
pub const RING10_THETA0: [f64; 10] = [0.0, 2.1, 4.3, 1.2, 5.5, 3.0, 0.7, 3.9, 5.9, 2.6];

/// Undirected ring over `n` nodes.
pub fn ring(n: usize) -> Network {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    network_from_edges(n, &edges)
}

/// Build and validate a network from an edge list.
pub fn network_from_edges(n: usize, edges: &[(usize, usize)]) -> Network {
    let graph = DenseGraph::from_edges(n, edges).expect("edge list should be valid");
    Network::from_adapter(&graph).expect("graph should validate")
}

/// Ring lattice over `n` nodes linking each node to its `k` nearest
/// neighbors on each side.
pub fn ring_lattice_edges(n: usize, k: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..n {
        for s in 1..=k {
            let j = (i + s) % n;
            edges.push((i.min(j), i.max(j)));
        }
    }
    edges
}

/// 12-node small world: a k = 2 ring lattice with three fixed rewirings,
/// giving a heterogeneous degree sequence.
pub fn small_world_12() -> Network {
    let mut edges = ring_lattice_edges(12, 2);
    for (removed, added) in [((0, 2), (0, 6)), ((3, 5), (3, 9)), ((7, 8), (1, 7))] {
        edges.retain(|&e| e != removed);
        edges.push(added);
    }
    network_from_edges(12, &edges)
}

/// Golden-angle phases: deterministic and well spread.
pub fn golden_phases(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 2.399963).rem_euclid(TAU)).collect()
}

/// Quick preset with a coupling grid.
pub fn quick_config(k_max: f64, k_steps: usize) -> SimulationConfig {
    let mut config = SimulationConfig::quick_preset();
    config.sweep.k_min = 0.0;
    config.sweep.k_max = k_max;
    config.sweep.k_steps = k_steps;
    config
}

/// Short block settings for cheap sweeps.
pub fn short_blocks() -> BlockConfig {
    BlockConfig {
        t_measure: 10.0,
        t_chunk: 5.0,
        block_length: 20,
        num_blocks: 5,
        ..Default::default()
    }
}

/// Adapter whose degree sequence disagrees with its adjacency matrix.
pub struct MisreportedDegrees;

impl GraphAdapter for MisreportedDegrees {
    fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]
    }

    fn degree_sequence(&self) -> Vec<usize> {
        vec![2, 1, 2]
    }
}
