//! Minimality sweep: the reported k and round count match a brute-force
//! reference, and every smaller k is exhausted.

use decontam_search::minimize::{solve, AttemptOutcomeV1};
use decontam_search::policy::SearchPolicyV1;
use decontam_search::search::search_level;
use lock_tests::{brute_force_minimum, cycle_graph, random_graph};

#[test]
fn random_graphs_match_brute_force() {
    let policy = SearchPolicyV1::default();
    for seed in 0..40u64 {
        let n = 2 + (seed as usize % 5);
        let edges = n + (seed as usize % 7);
        let g = random_graph(seed, n, edges);
        let solution = solve(&g, &policy).unwrap();
        let (k, rounds) = brute_force_minimum(&g);
        assert_eq!(solution.k(), k, "seed={seed} n={n}");
        assert_eq!(solution.rounds(), rounds, "seed={seed} n={n}");
    }
}

#[test]
fn every_smaller_k_is_exhausted() {
    let policy = SearchPolicyV1::default();
    for seed in 100..120u64 {
        let g = random_graph(seed, 6, 14);
        let solution = solve(&g, &policy).unwrap();
        for k in 1..solution.k() {
            let result = search_level(&g, k, &policy).unwrap();
            assert!(!result.is_success(), "seed={seed} k={k}");
        }
        let outcomes: Vec<_> = solution.attempts.iter().map(|a| a.outcome).collect();
        assert_eq!(outcomes.last(), Some(&AttemptOutcomeV1::Success));
    }
}

#[test]
fn self_looped_cycles_match_brute_force() {
    let policy = SearchPolicyV1::default();
    for n in 1..=7 {
        let g = cycle_graph(n, true);
        let solution = solve(&g, &policy).unwrap();
        assert_eq!((solution.k(), solution.rounds()), brute_force_minimum(&g), "n={n}");
    }
}

#[test]
fn reported_sequence_replays_under_apply() {
    use decontam_kernel::operators::apply::apply;
    let policy = SearchPolicyV1::default();
    for seed in 200..215u64 {
        let g = random_graph(seed, 5, 9);
        let solution = solve(&g, &policy).unwrap();
        let steps = &solution.sequence.steps;
        for pair in steps.windows(2) {
            let action = pair[1].action.expect("non-initial step has an action");
            assert_eq!(action.size() as usize, solution.k());
            assert_eq!(apply(&g, pair[0].configuration, action), pair[1].configuration);
        }
        assert!(steps.last().unwrap().configuration.is_clean());
    }
}
