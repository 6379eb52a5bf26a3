//! Fixture binary for cross-process determinism.
//!
//! Solves a fixed set of generated graphs and prints one `key=value` line per
//! digest. Output must be byte-identical across processes and environments.

use decontam_harness::translate::guard_input;
use decontam_kernel::proof::replay::replay_guards;
use decontam_search::minimize::solve;
use decontam_search::policy::SearchPolicyV1;
use decontam_search::render::sequence_digest;
use decontam_search::report::SolutionReportV1;
use lock_tests::{cycle_graph, random_graph};

fn main() {
    let mut graphs = vec![cycle_graph(5, false), cycle_graph(4, true)];
    for seed in 0..6u64 {
        graphs.push(random_graph(seed, 7, 12));
    }

    let policy = SearchPolicyV1::default();
    for (i, graph) in graphs.iter().enumerate() {
        let solution = solve(graph, &policy).expect("fixture graph solves");
        let report = SolutionReportV1::new(graph, &solution);
        println!("graph={i} k={} rounds={}", solution.k(), solution.rounds());
        println!(
            "graph={i} report_digest={}",
            report.digest().expect("report serializes").as_str()
        );
        println!(
            "graph={i} sequence_digest={}",
            sequence_digest(&solution.sequence).as_str()
        );
        if let Some(strategy) =
            guard_input(graph, &solution.sequence).expect("sequence fits its graph")
        {
            println!(
                "graph={i} replay_digest={}",
                replay_guards(&strategy).digest().as_str()
            );
        }
    }
}
