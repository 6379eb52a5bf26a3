//! In-process determinism: repeated solves produce identical reports.

use decontam_search::minimize::solve;
use decontam_search::policy::SearchPolicyV1;
use decontam_search::render::{render_sequence, sequence_digest};
use decontam_search::report::SolutionReportV1;
use lock_tests::random_graph;

#[test]
fn repeated_solves_are_byte_identical() {
    let policy = SearchPolicyV1::default();
    let g = random_graph(7, 10, 18);
    let first = solve(&g, &policy).unwrap();
    let first_bytes = SolutionReportV1::new(&g, &first).to_json_bytes().unwrap();
    let first_text = render_sequence(&first.sequence);
    for _ in 0..5 {
        let again = solve(&g, &policy).unwrap();
        assert_eq!(
            SolutionReportV1::new(&g, &again).to_json_bytes().unwrap(),
            first_bytes
        );
        assert_eq!(render_sequence(&again.sequence), first_text);
    }
}

#[test]
fn equal_graphs_built_separately_agree() {
    let policy = SearchPolicyV1::default();
    let a = random_graph(11, 8, 15);
    let b = random_graph(11, 8, 15);
    assert_eq!(a, b);
    let sa = solve(&a, &policy).unwrap();
    let sb = solve(&b, &policy).unwrap();
    assert_eq!(sequence_digest(&sa.sequence), sequence_digest(&sb.sequence));
    assert_eq!(
        SolutionReportV1::new(&a, &sa).digest().unwrap(),
        SolutionReportV1::new(&b, &sb).digest().unwrap()
    );
}

#[test]
fn digests_are_prefixed() {
    let g = random_graph(3, 6, 10);
    let s = solve(&g, &SearchPolicyV1::default()).unwrap();
    let digest = sequence_digest(&s.sequence);
    assert_eq!(digest.algorithm(), "sha256");
    assert_eq!(digest.hex_digest().len(), 64);
}
