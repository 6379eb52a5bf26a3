//! `replay_guards()`: independent replay of a guard strategy.
//!
//! This is the verification collaborator of the search. It never calls the
//! search or the transition function; it re-derives the propagation closure
//! from in-neighbor masks under the complementary encoding.
//!
//! # Encoding inversion
//!
//! | layer    | bit = 1 means          |
//! |----------|------------------------|
//! | search   | vertex contaminated    |
//! | checker  | vertex guarded / clean |
//!
//! The checker state after round `r` is the complement (within `N` bits) of
//! the search configuration after round `r` under the same actions.
//!
//! # Rule
//!
//! State `g` starts at 0. For each guard row `l`:
//! `g' = { j : in(j) ⊆ g ∪ l }`: a vertex is clean next round when every
//! in-neighbor was clean or guarded this round.
//!
//! # Input format (whitespace tokens)
//!
//! ```text
//! N                  node count (<= 64)
//! E                  edge count
//! u v   (E times)    edges, indices < N
//! P L                guards per row, strategy length
//! P x (L+1) indices  L+1 guard rows
//! ```

use thiserror::Error;

use crate::carrier::config::{width_mask, ConfigurationV1, MAX_VERTICES};
use crate::carrier::graph::GraphV1;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_GUARD_REPLAY};

/// Typed failure for guard-strategy input. Fail-closed: nothing is replayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardInputError {
    /// A token is missing, is not a non-negative integer, or is unexpected.
    #[error("token {position}: expected {expected}, found {found}")]
    MalformedInputRecord {
        position: usize,
        expected: &'static str,
        found: String,
    },
    /// A vertex index is not below the declared node count.
    #[error("token {position}: vertex index {index} is outside 0..{vertex_count}")]
    InvalidVertexIndex {
        position: usize,
        index: u64,
        vertex_count: usize,
    },
    /// The declared node count exceeds the fixed bit-width bound.
    #[error("node count {vertex_count} exceeds the supported maximum of 64")]
    CapacityExceeded { vertex_count: u64 },
    /// A guard row does not hold exactly `guards_per_round` indices.
    #[error("guard row {row} has {actual} indices, expected {expected}")]
    RowSizeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A checker state: bit `i` set means vertex `i` is guarded or clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardStateV1(u64);

impl GuardStateV1 {
    /// Wrap a raw bit word.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bit word.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Translate a search configuration into the checker encoding.
    #[must_use]
    pub const fn from_configuration(config: ConfigurationV1, vertex_count: usize) -> Self {
        Self(!config.bits() & width_mask(vertex_count))
    }

    /// Render as `N` space-separated `'0'`/`'1'` characters, vertex 0 first.
    #[must_use]
    pub fn render(self, vertex_count: usize) -> String {
        (0..vertex_count.min(MAX_VERTICES))
            .map(|v| if self.0 & (1u64 << v) != 0 { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A guard strategy: graph with declared node count plus `L+1` guard rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardStrategyV1 {
    graph: GraphV1,
    guards_per_round: usize,
    rows: Vec<Vec<usize>>,
}

impl GuardStrategyV1 {
    /// Build a strategy, validating row sizes and vertex indices.
    ///
    /// # Errors
    ///
    /// Returns [`GuardInputError::RowSizeMismatch`] if a row does not contain
    /// exactly `guards_per_round` entries, or
    /// [`GuardInputError::InvalidVertexIndex`] if an entry is not a vertex of
    /// `graph` (position is the entry's 1-based offset across all rows).
    pub fn new(
        graph: GraphV1,
        guards_per_round: usize,
        rows: Vec<Vec<usize>>,
    ) -> Result<Self, GuardInputError> {
        let n = graph.vertex_count();
        let mut position = 0usize;
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != guards_per_round {
                return Err(GuardInputError::RowSizeMismatch {
                    row: row_idx,
                    expected: guards_per_round,
                    actual: row.len(),
                });
            }
            for &v in row {
                position += 1;
                if v >= n {
                    return Err(GuardInputError::InvalidVertexIndex {
                        position,
                        index: v as u64,
                        vertex_count: n,
                    });
                }
            }
        }
        Ok(Self {
            graph,
            guards_per_round,
            rows,
        })
    }

    /// The graph being guarded.
    #[must_use]
    pub fn graph(&self) -> &GraphV1 {
        &self.graph
    }

    /// Guards placed per round (`P`).
    #[must_use]
    pub const fn guards_per_round(&self) -> usize {
        self.guards_per_round
    }

    /// Strategy length `L`: one less than the number of rows.
    #[must_use]
    pub fn length(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// The guard rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Serialize to the checker input format (newline-separated records).
    #[must_use]
    pub fn to_input_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.graph.vertex_count()));
        out.push_str(&format!("{}\n", self.graph.edge_count()));
        for (from, to) in self.graph.edges() {
            out.push_str(&format!("{from} {to}\n"));
        }
        out.push_str(&format!("{} {}\n", self.guards_per_round, self.length()));
        for row in &self.rows {
            let line = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Final checker verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdictV1 {
    /// Every vertex was clean after `round` (1-based) rounds.
    Ok { round: usize },
    /// All rows were consumed without reaching the all-clean state.
    No,
}

/// Per-round states plus verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardReplayV1 {
    pub vertex_count: usize,
    /// State after each replayed round, in order.
    pub states: Vec<GuardStateV1>,
    pub verdict: GuardVerdictV1,
}

impl GuardReplayV1 {
    /// True if the strategy cleared the graph.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self.verdict, GuardVerdictV1::Ok { .. })
    }

    /// One line per round, then `OK!` or `NO`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for state in &self.states {
            out.push_str(&state.render(self.vertex_count));
            out.push('\n');
        }
        out.push_str(match self.verdict {
            GuardVerdictV1::Ok { .. } => "OK!\n",
            GuardVerdictV1::No => "NO\n",
        });
        out
    }

    /// Content hash of the rendered transcript.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_GUARD_REPLAY, self.render().as_bytes())
    }
}

/// Replay `strategy`, stopping at the first all-clean state.
#[must_use]
pub fn replay_guards(strategy: &GuardStrategyV1) -> GuardReplayV1 {
    let graph = &strategy.graph;
    let n = graph.vertex_count();
    let all = width_mask(n);

    let mut state = 0u64;
    let mut states = Vec::with_capacity(strategy.rows.len());
    for (round, row) in strategy.rows.iter().enumerate() {
        let guarded = row.iter().fold(state, |acc, &v| acc | (1u64 << v));
        let next = (0..n)
            .filter(|&j| graph.in_mask(j) & !guarded == 0)
            .fold(0u64, |acc, j| acc | (1u64 << j));
        states.push(GuardStateV1(next));
        if next == all {
            return GuardReplayV1 {
                vertex_count: n,
                states,
                verdict: GuardVerdictV1::Ok { round: round + 1 },
            };
        }
        state = next;
    }
    GuardReplayV1 {
        vertex_count: n,
        states,
        verdict: GuardVerdictV1::No,
    }
}

/// Parse the checker input format.
///
/// # Errors
///
/// Returns [`GuardInputError`] on the first missing, non-integer, or
/// out-of-domain token, or on trailing tokens after the last row.
pub fn parse_guard_input(input: &str) -> Result<GuardStrategyV1, GuardInputError> {
    let mut tokens = Tokens::new(input);

    let vertex_count = tokens.next_u64("node count")?;
    if vertex_count > MAX_VERTICES as u64 {
        return Err(GuardInputError::CapacityExceeded { vertex_count });
    }
    #[allow(clippy::cast_possible_truncation)]
    let n = vertex_count as usize;
    let mut graph = GraphV1::with_vertex_count(n)
        .map_err(|_| GuardInputError::CapacityExceeded { vertex_count })?;

    let edge_count = tokens.next_u64("edge count")?;
    for _ in 0..edge_count {
        let from = tokens.next_vertex("edge source", n)?;
        let to = tokens.next_vertex("edge target", n)?;
        // Both endpoints are below n <= MAX_VERTICES.
        graph
            .add_edge(from, to)
            .map_err(|_| GuardInputError::CapacityExceeded { vertex_count })?;
    }

    let guards_per_round = tokens.next_usize("guard count")?;
    if guards_per_round == 0 {
        return Err(GuardInputError::MalformedInputRecord {
            position: tokens.position,
            expected: "positive guard count",
            found: "0".into(),
        });
    }
    let length = tokens.next_usize("strategy length")?;

    let mut rows = Vec::with_capacity(length.saturating_add(1).min(1 << 16));
    for _ in 0..=length {
        let mut row = Vec::with_capacity(guards_per_round.min(MAX_VERTICES));
        for _ in 0..guards_per_round {
            row.push(tokens.next_vertex("guard vertex", n)?);
        }
        rows.push(row);
    }

    tokens.expect_end()?;
    GuardStrategyV1::new(graph, guards_per_round, rows)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_u64(&mut self, expected: &'static str) -> Result<u64, GuardInputError> {
        self.position += 1;
        let position = self.position;
        let token = self.inner.next().ok_or(GuardInputError::MalformedInputRecord {
            position,
            expected,
            found: "end of input".into(),
        })?;
        token
            .parse::<u64>()
            .map_err(|_| GuardInputError::MalformedInputRecord {
                position,
                expected,
                found: format!("{token:?}"),
            })
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, GuardInputError> {
        let value = self.next_u64(expected)?;
        usize::try_from(value).map_err(|_| GuardInputError::MalformedInputRecord {
            position: self.position,
            expected,
            found: value.to_string(),
        })
    }

    fn next_vertex(&mut self, expected: &'static str, n: usize) -> Result<usize, GuardInputError> {
        let index = self.next_u64(expected)?;
        match usize::try_from(index) {
            Ok(v) if v < n => Ok(v),
            _ => Err(GuardInputError::InvalidVertexIndex {
                position: self.position,
                index,
                vertex_count: n,
            }),
        }
    }

    fn expect_end(&mut self) -> Result<(), GuardInputError> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(GuardInputError::MalformedInputRecord {
                position: self.position + 1,
                expected: "end of input",
                found: format!("{token:?}"),
            }),
        }
    }
}
