//! Ingestion boundary: edge stream text -> `GraphV1`.
//!
//! # Format
//!
//! One edge per line: two whitespace-separated non-negative integers
//! `source target`. Blank lines are skipped. End of input terminates the
//! stream.
//!
//! Ingestion is fail-closed: the first bad record aborts with its 1-based line
//! number and no partial graph is returned.

use std::io::BufRead;

use thiserror::Error;

use crate::carrier::config::MAX_VERTICES;
use crate::carrier::graph::{GraphError, GraphV1};

/// Typed ingestion failure.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A line does not consist of exactly two integer tokens.
    #[error("line {line}: malformed edge record {content:?} ({detail})")]
    MalformedInputRecord {
        line: usize,
        content: String,
        detail: &'static str,
    },
    /// An integer token is negative or not below `MAX_VERTICES`.
    #[error("line {line}: vertex index {index} is outside the supported domain 0..64")]
    InvalidVertexIndex { line: usize, index: String },
    /// The graph rejected an edge.
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
    /// The underlying reader failed.
    #[error("failed to read edge stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse an in-memory edge stream.
///
/// # Errors
///
/// Returns [`IngestError::MalformedInputRecord`] or
/// [`IngestError::InvalidVertexIndex`] on the first bad line.
pub fn parse_edge_stream(input: &str) -> Result<GraphV1, IngestError> {
    let mut graph = GraphV1::new();
    for (idx, line) in input.lines().enumerate() {
        ingest_line(&mut graph, idx + 1, line)?;
    }
    Ok(graph)
}

/// Read an edge stream line by line from `reader`.
///
/// # Errors
///
/// Same as [`parse_edge_stream`], plus [`IngestError::Io`] on read failure.
pub fn read_edge_stream<R: BufRead>(reader: R) -> Result<GraphV1, IngestError> {
    let mut graph = GraphV1::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        ingest_line(&mut graph, idx + 1, &line)?;
    }
    Ok(graph)
}

fn ingest_line(graph: &mut GraphV1, line_no: usize, line: &str) -> Result<(), IngestError> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(());
    };
    let Some(second) = tokens.next() else {
        return Err(malformed(line_no, line, "expected 2 tokens, found 1"));
    };
    if tokens.next().is_some() {
        return Err(malformed(line_no, line, "expected 2 tokens, found more"));
    }

    let from = parse_vertex(line_no, line, first)?;
    let to = parse_vertex(line_no, line, second)?;
    graph
        .add_edge(from, to)
        .map_err(|source| IngestError::Graph {
            line: line_no,
            source,
        })
}

/// Classify a token: valid vertex index, out-of-domain integer, or garbage.
fn parse_vertex(line_no: usize, line: &str, token: &str) -> Result<usize, IngestError> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(line_no, line, "token is not an integer"));
    }
    let out_of_domain = || IngestError::InvalidVertexIndex {
        line: line_no,
        index: token.to_string(),
    };
    if digits.len() != token.len() {
        return Err(out_of_domain());
    }
    match token.parse::<usize>() {
        Ok(v) if v < MAX_VERTICES => Ok(v),
        _ => Err(out_of_domain()),
    }
}

fn malformed(line: usize, content: &str, detail: &'static str) -> IngestError {
    IngestError::MalformedInputRecord {
        line,
        content: content.to_string(),
        detail,
    }
}
