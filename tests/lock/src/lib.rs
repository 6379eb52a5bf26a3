//! Shared helpers for lock tests: deterministic graph generation and a
//! brute-force reference solver.

use std::collections::HashSet;

use decontam_kernel::carrier::config::{ActionV1, ConfigurationV1};
use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::operators::apply::apply;

/// Linear congruential generator; fixed constants so every platform and
/// process produces the same graphs.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(seed ^ 0x5DEE_CE66_D1CE_4E5B)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: usize) -> usize {
        #[allow(clippy::cast_possible_truncation)]
        let v = (self.next_u64() % bound as u64) as usize;
        v
    }
}

/// Random graph with exactly `n` vertices and `edges` edges (duplicates and
/// self-loops allowed).
///
/// # Panics
///
/// Panics if `n` is zero or above 64.
#[must_use]
pub fn random_graph(seed: u64, n: usize, edges: usize) -> GraphV1 {
    let mut rng = Lcg::new(seed);
    let mut graph = GraphV1::with_vertex_count(n).expect("n within capacity");
    for _ in 0..edges {
        let from = rng.below(n);
        let to = rng.below(n);
        graph.add_edge(from, to).expect("endpoints below n");
    }
    graph
}

/// Directed cycle `0 → 1 → … → n-1 → 0`, optionally with a self-loop on
/// every vertex.
///
/// # Panics
///
/// Panics if `n` is zero or above 64.
#[must_use]
pub fn cycle_graph(n: usize, self_loops: bool) -> GraphV1 {
    let mut graph = GraphV1::with_vertex_count(n).expect("n within capacity");
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n).expect("endpoints below n");
        if self_loops {
            graph.add_edge(v, v).expect("endpoints below n");
        }
    }
    graph
}

/// Reference answer computed without the enumerator or the frontier:
/// `(k, rounds)` where k is the smallest size from which the clean
/// configuration is reachable and rounds its shortest distance.
///
/// Intended for `n <= 8`.
#[must_use]
pub fn brute_force_minimum(graph: &GraphV1) -> (usize, usize) {
    let n = graph.vertex_count();
    if n == 0 {
        return (0, 0);
    }
    for k in 1..=n {
        let actions: Vec<ActionV1> = (0..(1u64 << n))
            .filter(|w| w.count_ones() as usize == k)
            .map(ActionV1::from_bits)
            .collect();
        let mut seen = HashSet::new();
        let mut layer = vec![ConfigurationV1::fully_contaminated(n)];
        seen.insert(layer[0]);
        let mut depth = 0;
        while !layer.is_empty() {
            if layer.iter().any(|c| c.is_clean()) {
                return (k, depth);
            }
            let mut next_layer = Vec::new();
            for &c in &layer {
                for &a in &actions {
                    let next = apply(graph, c, a);
                    if seen.insert(next) {
                        next_layer.push(next);
                    }
                }
            }
            layer = next_layer;
            depth += 1;
        }
    }
    unreachable!("k = n always reaches the clean configuration")
}
