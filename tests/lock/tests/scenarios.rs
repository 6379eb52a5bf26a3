//! Reference scenarios with exact expected text output.

use decontam_kernel::carrier::graph::GraphV1;
use decontam_kernel::carrier::ingest::parse_edge_stream;
use decontam_search::minimize::solve;
use decontam_search::policy::SearchPolicyV1;
use decontam_search::render::render_sequence;
use lock_tests::cycle_graph;

fn solve_text(graph: &GraphV1) -> (usize, String) {
    let solution = solve(graph, &SearchPolicyV1::default()).expect("solves");
    (solution.k(), render_sequence(&solution.sequence))
}

#[test]
fn two_cycle() {
    let g = parse_edge_stream("0 1\n1 0\n").unwrap();
    assert_eq!(solve_text(&g), (1, "11\n0\n10\n0\n00\n".to_string()));
}

#[test]
fn single_self_loop() {
    let g = parse_edge_stream("0 0\n").unwrap();
    assert_eq!(solve_text(&g), (1, "1\n0\n0\n".to_string()));
}

#[test]
fn three_isolated_vertices() {
    let g = GraphV1::with_vertex_count(3).unwrap();
    assert_eq!(solve_text(&g), (1, "111\n0\n000\n".to_string()));
}

#[test]
fn empty_stream() {
    let g = parse_edge_stream("").unwrap();
    assert_eq!(solve_text(&g), (0, "\n".to_string()));
}

#[test]
fn isolated_vertex_inferred_from_higher_index() {
    // Vertex 1 has no edges but is inside the domain.
    let g = parse_edge_stream("2 2\n").unwrap();
    assert_eq!(g.vertex_count(), 3);
    let (k, text) = solve_text(&g);
    assert_eq!(k, 1);
    assert_eq!(text, "111\n2\n000\n");
}

#[test]
fn self_looped_triangle_needs_two() {
    let g = cycle_graph(3, true);
    let solution = solve(&g, &SearchPolicyV1::default()).unwrap();
    assert_eq!(solution.k(), 2);
    assert_eq!(solution.attempts.len(), 2);
}

#[test]
fn self_looped_pair_needs_both() {
    let g = cycle_graph(2, true);
    let solution = solve(&g, &SearchPolicyV1::default()).unwrap();
    assert_eq!(solution.k(), 2);
    assert_eq!(render_sequence(&solution.sequence), "11\n0 1\n00\n");
}

#[test]
fn k_equals_n_clears_in_one_round() {
    use decontam_kernel::carrier::config::{ActionV1, ConfigurationV1};
    use decontam_kernel::operators::apply::apply;
    for n in 1..=8 {
        let g = cycle_graph(n, true);
        let next = apply(&g, ConfigurationV1::fully_contaminated(n), ActionV1::full(n));
        assert!(next.is_clean(), "n={n}");
    }
}

#[test]
fn output_lines_alternate() {
    let g = cycle_graph(5, true);
    let solution = solve(&g, &SearchPolicyV1::default()).unwrap();
    let text = render_sequence(&solution.sequence);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 * solution.rounds() + 1);
    assert_eq!(lines[0], "11111");
    assert_eq!(*lines.last().unwrap(), "00000");
    for (i, line) in lines.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(line.len(), 5);
            assert!(line.chars().all(|c| c == '0' || c == '1'));
        } else {
            assert_eq!(line.split(' ').count(), solution.k());
        }
    }
}
