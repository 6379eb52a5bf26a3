//! Search ↔ checker round-trip: translated sequences replay to `OK!` at the
//! emitted round count, and every checker state complements the matching
//! search configuration.

use decontam_harness::translate::guard_input;
use decontam_kernel::proof::replay::{
    parse_guard_input, replay_guards, GuardStateV1, GuardVerdictV1,
};
use decontam_search::minimize::solve;
use decontam_search::policy::SearchPolicyV1;
use lock_tests::{cycle_graph, random_graph};

#[test]
fn translated_sequences_replay_ok() {
    let policy = SearchPolicyV1::default();
    let mut graphs = vec![cycle_graph(4, false), cycle_graph(5, true)];
    for seed in 300..320u64 {
        graphs.push(random_graph(seed, 6, 11));
    }
    for g in &graphs {
        let solution = solve(g, &policy).unwrap();
        let strategy = guard_input(g, &solution.sequence).unwrap().unwrap();
        let replay = replay_guards(&strategy);
        assert_eq!(
            replay.verdict,
            GuardVerdictV1::Ok {
                round: solution.rounds()
            }
        );

        let n = g.vertex_count();
        let after_rounds = solution.sequence.configurations().skip(1);
        for (state, config) in replay.states.iter().zip(after_rounds) {
            assert_eq!(*state, GuardStateV1::from_configuration(config, n));
        }
    }
}

#[test]
fn translated_text_parses_back_identically() {
    let policy = SearchPolicyV1::default();
    for seed in 400..410u64 {
        let g = random_graph(seed, 5, 8);
        let solution = solve(&g, &policy).unwrap();
        let strategy = guard_input(&g, &solution.sequence).unwrap().unwrap();
        let parsed = parse_guard_input(&strategy.to_input_text()).unwrap();
        assert_eq!(parsed.rows(), strategy.rows());
        assert_eq!(parsed.guards_per_round(), strategy.guards_per_round());
        assert_eq!(replay_guards(&parsed), replay_guards(&strategy));
    }
}

#[test]
fn truncated_strategy_is_no() {
    let g = cycle_graph(5, true);
    let solution = solve(&g, &SearchPolicyV1::default()).unwrap();
    let strategy = guard_input(&g, &solution.sequence).unwrap().unwrap();
    let rows = strategy.rows();
    if rows.len() < 2 {
        return;
    }
    let mut text = String::new();
    text.push_str(&format!("{}\n{}\n", g.vertex_count(), g.edge_count()));
    for (from, to) in g.edges() {
        text.push_str(&format!("{from} {to}\n"));
    }
    text.push_str(&format!("{} {}\n", strategy.guards_per_round(), rows.len() - 2));
    for row in &rows[..rows.len() - 1] {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    let replay = replay_guards(&parse_guard_input(&text).unwrap());
    assert_eq!(replay.verdict, GuardVerdictV1::No);
}
