//! Run orchestration: input → kernel/search → rendered output.
//!
//! Every entry point takes a reader and returns the text to print. Nothing
//! here touches stdout or the process exit code; `main.rs` owns both.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::carrier::ingest::read_edge_stream;
use decontam_kernel::proof::replay::{parse_guard_input, replay_guards, GuardReplayV1};
use decontam_search::minimize::{solve, SolutionV1};
use decontam_search::render::render_sequence;
use decontam_search::report::SolutionReportV1;

use crate::config::PolicyConfig;
use crate::error::HarnessError;
use crate::translate::guard_input;

/// Output format of `solve`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Alternating configuration / action lines.
    #[default]
    Text,
    /// One-line `SolutionReportV1` JSON.
    Json,
}

/// Open `path`, or stdin when `None`.
///
/// # Errors
///
/// Returns [`HarnessError::Open`] if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, HarnessError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| HarnessError::Open {
                path: path.display().to_string(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Ingest an edge stream and solve it.
///
/// # Errors
///
/// Propagates ingest and search failures.
pub fn solve_stream<R: BufRead>(
    reader: R,
    config: &PolicyConfig,
) -> Result<(GraphV1, SolutionV1), HarnessError> {
    let graph = read_edge_stream(reader)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge stream ingested"
    );
    let policy = config.to_policy();
    debug!(?policy, "resolved search policy");
    let solution = solve(&graph, &policy)?;
    Ok((graph, solution))
}

/// `decontam solve`: the minimal sequence in the requested format.
///
/// # Errors
///
/// Propagates ingest, search, and serialization failures.
pub fn run_solve<R: BufRead>(
    reader: R,
    format: OutputFormat,
    config: &PolicyConfig,
) -> Result<String, HarnessError> {
    let (graph, solution) = solve_stream(reader, config)?;
    match format {
        OutputFormat::Text => Ok(render_sequence(&solution.sequence)),
        OutputFormat::Json => {
            let report = SolutionReportV1::new(&graph, &solution);
            let mut text = String::from_utf8_lossy(&report.to_json_bytes()?).into_owned();
            text.push('\n');
            Ok(text)
        }
    }
}

/// `decontam guards`: solve, then emit the checker input for the sequence.
///
/// # Errors
///
/// Returns [`HarnessError::NoGuardTranslation`] for an empty graph, and
/// propagates ingest and search failures.
pub fn run_guards<R: BufRead>(reader: R, config: &PolicyConfig) -> Result<String, HarnessError> {
    let (graph, solution) = solve_stream(reader, config)?;
    let strategy =
        guard_input(&graph, &solution.sequence)?.ok_or(HarnessError::NoGuardTranslation)?;
    Ok(strategy.to_input_text())
}

/// `decontam verify`: replay a guard strategy.
///
/// # Errors
///
/// Propagates read and checker-input failures. A `NO` verdict is a
/// successful replay, not an error.
pub fn run_verify<R: Read>(mut reader: R) -> Result<GuardReplayV1, HarnessError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let strategy = parse_guard_input(&input)?;
    let replay = replay_guards(&strategy);
    info!(
        vertices = replay.vertex_count,
        rounds_replayed = replay.states.len(),
        ok = replay.is_ok(),
        "guard strategy replayed"
    );
    Ok(replay)
}
