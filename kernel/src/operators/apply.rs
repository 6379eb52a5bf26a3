//! `apply()`: one propagation round over a configuration.
//!
//! For every vertex `i` that is contaminated in `c` and not targeted by `a`,
//! contamination spreads to every out-neighbor of `i`. The next configuration
//! is built from scratch: a vertex is contaminated next round iff some
//! qualifying source points at it.
//!
//! Targeting a vertex only removes it from the source set for this round.
//! There is no rule that marks a targeted vertex clean; it ends up clean
//! exactly when no other qualifying source reinfects it. Self-loops and
//! cycles rely on this.

use crate::carrier::config::{ActionV1, ConfigurationV1};
use crate::carrier::graph::GraphV1;

/// Apply `action` to `config` on `graph`, producing the next configuration.
///
/// Pure: the result depends only on `(graph, config, action)`.
#[must_use]
pub fn apply(graph: &GraphV1, config: ConfigurationV1, action: ActionV1) -> ConfigurationV1 {
    let sources = ConfigurationV1::from_bits(config.bits() & !action.bits());
    let mut next = 0u64;
    for source in sources.contaminated() {
        next |= graph.out_mask(source);
    }
    ConfigurationV1::from_bits(next)
}

/// Reference form of [`apply`] that walks out-neighbor lists edge by edge.
///
/// Used to cross-check the mask-based path; multi-edges are visited verbatim.
#[must_use]
pub fn apply_by_edges(
    graph: &GraphV1,
    config: ConfigurationV1,
    action: ActionV1,
) -> ConfigurationV1 {
    let mut next = 0u64;
    for i in 0..graph.vertex_count() {
        if config.is_contaminated(i) && !action.targets(i) {
            for &j in graph.out_neighbors(i) {
                next |= 1u64 << j;
            }
        }
    }
    ConfigurationV1::from_bits(next)
}
