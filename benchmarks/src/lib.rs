//! Shared graph regimes for decontam benchmark suites.

use decontam_kernel::carrier::graph::GraphV1;

/// A named benchmark graph.
pub struct Regime {
    pub name: &'static str,
    pub graph: GraphV1,
}

/// Directed cycle over `n` vertices, optionally self-looped.
///
/// # Panics
///
/// Panics if `n` is zero or above 64. Benchmark setup failures are fatal.
#[must_use]
pub fn cycle(n: usize, self_loops: bool) -> GraphV1 {
    let mut graph = GraphV1::with_vertex_count(n).expect("vertex count within capacity");
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n).expect("edge within capacity");
        if self_loops {
            graph.add_edge(v, v).expect("edge within capacity");
        }
    }
    graph
}

/// Complete digraph with self-loops: every vertex reinfects every vertex.
///
/// # Panics
///
/// Panics if `n` is zero or above 64.
#[must_use]
pub fn complete(n: usize) -> GraphV1 {
    let mut graph = GraphV1::with_vertex_count(n).expect("vertex count within capacity");
    for u in 0..n {
        for v in 0..n {
            graph.add_edge(u, v).expect("edge within capacity");
        }
    }
    graph
}

/// Undirected `rows × cols` grid, each edge stored in both directions.
///
/// # Panics
///
/// Panics if `rows * cols` is zero or above 64.
#[must_use]
pub fn grid(rows: usize, cols: usize) -> GraphV1 {
    let mut graph = GraphV1::with_vertex_count(rows * cols).expect("vertex count within capacity");
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(v, v + 1).expect("edge within capacity");
                graph.add_edge(v + 1, v).expect("edge within capacity");
            }
            if r + 1 < rows {
                graph.add_edge(v, v + cols).expect("edge within capacity");
                graph.add_edge(v + cols, v).expect("edge within capacity");
            }
        }
    }
    graph
}

/// The macro regimes: small enough to solve in a benchmark iteration, large
/// enough that several k attempts exhaust.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "cycle_12",
            graph: cycle(12, false),
        },
        Regime {
            name: "cycle_self_loops_6",
            graph: cycle(6, true),
        },
        Regime {
            name: "complete_5",
            graph: complete(5),
        },
        Regime {
            name: "grid_3x3",
            graph: grid(3, 3),
        },
    ]
}
