//! `GraphV1`: directed adjacency over the bounded vertex domain.
//!
//! The graph is write-once, read-many: edges are added while ingesting the
//! edge stream and never removed. Out-neighbor lists keep insertion order and
//! keep multi-edges and self-loops verbatim. Per-vertex out/in bit masks are
//! maintained alongside the lists; they are pure functions of the lists and
//! are what the transition function and guard checker read.

use thiserror::Error;

use crate::carrier::config::MAX_VERTICES;

/// Typed failure for graph construction. Fail-closed: the graph is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `0..MAX_VERTICES`.
    #[error("vertex index {index} is outside the supported domain 0..{max}")]
    InvalidVertexIndex { index: usize, max: usize },
    /// A declared vertex count exceeds the fixed bit-width bound.
    #[error("vertex count {vertex_count} exceeds the supported maximum of {max}")]
    CapacityExceeded { vertex_count: usize, max: usize },
}

/// Directed graph with an inferred vertex count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphV1 {
    /// Out-neighbor lists, insertion order, one per vertex.
    adjacency: Vec<Vec<usize>>,
    /// `out_masks[i]` has bit `j` set iff some edge `i -> j` exists.
    out_masks: Vec<u64>,
    /// `in_masks[j]` has bit `i` set iff some edge `i -> j` exists.
    in_masks: Vec<u64>,
    edge_count: usize,
}

impl GraphV1 {
    /// Create an empty graph (zero vertices).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `vertex_count` declared vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if `vertex_count > MAX_VERTICES`.
    pub fn with_vertex_count(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::CapacityExceeded {
                vertex_count,
                max: MAX_VERTICES,
            });
        }
        let mut graph = Self::new();
        graph.grow_to(vertex_count);
        Ok(graph)
    }

    /// Add the directed edge `from -> to`, growing the vertex domain as needed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertexIndex`] if either endpoint is
    /// `>= MAX_VERTICES`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        for index in [from, to] {
            if index >= MAX_VERTICES {
                return Err(GraphError::InvalidVertexIndex {
                    index,
                    max: MAX_VERTICES,
                });
            }
        }
        self.grow_to(from.max(to) + 1);
        self.adjacency[from].push(to);
        self.out_masks[from] |= 1u64 << to;
        self.in_masks[to] |= 1u64 << from;
        self.edge_count += 1;
        Ok(())
    }

    fn grow_to(&mut self, vertex_count: usize) {
        if vertex_count > self.adjacency.len() {
            self.adjacency.resize_with(vertex_count, Vec::new);
            self.out_masks.resize(vertex_count, 0);
            self.in_masks.resize(vertex_count, 0);
        }
    }

    /// Number of vertices: one more than the highest index seen (or declared).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added, duplicates included.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-neighbors of `vertex` in insertion order. Empty for unknown vertices.
    #[must_use]
    pub fn out_neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[][..], Vec::as_slice)
    }

    /// Out-neighbor bit mask of `vertex`. Zero for unknown vertices.
    #[must_use]
    pub fn out_mask(&self, vertex: usize) -> u64 {
        self.out_masks.get(vertex).copied().unwrap_or(0)
    }

    /// In-neighbor bit mask of `vertex`. Zero for unknown vertices.
    #[must_use]
    pub fn in_mask(&self, vertex: usize) -> u64 {
        self.in_masks.get(vertex).copied().unwrap_or(0)
    }

    /// All edges, grouped by source in ascending order, each group in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }
}
