//! Renders the generated output: import block and wrapper stubs.
//!
//! The rendering is byte-stable: imports are ordered by alias and
//! functions by name, so two runs over an unchanged directory produce
//! identical output.

use std::fmt::Write as _;

use crate::semantic::{CandidateSet, ImportMerge};

/// Render the merged import block (only if non-empty) followed by one
/// doc-comment-prefixed wrapper stub per candidate.
pub fn render(merge: &ImportMerge, set: &CandidateSet) -> String {
    let mut out = String::new();

    if !merge.entries().is_empty() {
        out.push_str("Imports:\n");
        for (alias, import) in merge.entries() {
            let _ = writeln!(out, "  {} {:?}", alias, import.path);
        }
    }

    for (name, candidate) in &set.candidates {
        for line in &candidate.doc {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "func (must) {name}()\n");
    }

    out
}
