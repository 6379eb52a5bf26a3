//! Text rendering of a decontamination sequence.
//!
//! # Format
//!
//! ```text
//! 111        initial configuration (vertex 0 first, '1' = contaminated)
//! 0          action: ascending vertex indices, space-separated
//! 011
//! 1 2
//! 000        final configuration
//! ```
//!
//! Configuration lines and action lines alternate; there is one fewer action
//! line than configuration lines. Every line ends with `'\n'`.

use decontam_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEQUENCE_TEXT};

use crate::path::DecontaminationSequenceV1;

/// Render the sequence as alternating configuration / action lines.
#[must_use]
pub fn render_sequence(sequence: &DecontaminationSequenceV1) -> String {
    let n = sequence.vertex_count;
    let mut out = String::new();
    for step in &sequence.steps {
        if let Some(action) = step.action {
            out.push_str(&action.render());
            out.push('\n');
        }
        out.push_str(&step.configuration.render(n));
        out.push('\n');
    }
    out
}

/// Content hash of the rendered text.
#[must_use]
pub fn sequence_digest(sequence: &DecontaminationSequenceV1) -> ContentHash {
    canonical_hash(DOMAIN_SEQUENCE_TEXT, render_sequence(sequence).as_bytes())
}
