//! Reference collection: which package qualifiers a signature uses.
//!
//! Walks every parameter and result type of each candidate (the
//! trailing `error` slot included) and records the qualifier of every
//! `pkg.Type` reference. Per-candidate sets are merged into one
//! [`ImportNeed`] per owning file.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::selector::{Candidate, CandidateSet};
use crate::syntax::TypeExpr;

/// The aliases one file's candidates reference.
#[derive(Debug, Clone)]
pub struct ImportNeed {
    /// Index of the owning file in [`CandidateSet::files`].
    pub file: usize,
    /// Representative candidate (the file's alphabetically first one),
    /// named in resolution diagnostics.
    pub func: SmolStr,
    pub aliases: FxHashSet<SmolStr>,
}

/// Qualifiers referenced by one candidate's signature.
pub fn candidate_qualifiers(candidate: &Candidate) -> FxHashSet<SmolStr> {
    let mut out = FxHashSet::default();
    for field in candidate.params.iter().chain(&candidate.results) {
        for expr in &field.exprs {
            expr.walk(&mut |e| {
                if let TypeExpr::Selector { qualifier, .. } = e {
                    out.insert(qualifier.clone());
                }
            });
        }
    }
    out
}

/// Build one [`ImportNeed`] per file that owns at least one candidate,
/// ordered by file index (lexicographic path order).
pub fn collect_import_needs(set: &CandidateSet) -> Vec<ImportNeed> {
    let mut needs: BTreeMap<usize, ImportNeed> = BTreeMap::new();
    for candidate in set.candidates.values() {
        let aliases = candidate_qualifiers(candidate);
        let need = needs.entry(candidate.file).or_insert_with(|| ImportNeed {
            file: candidate.file,
            func: candidate.name.clone(),
            aliases: FxHashSet::default(),
        });
        need.aliases.extend(aliases);
    }
    needs.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_file;
    use crate::project::Package;
    use crate::semantic::select_candidates;

    fn needs_for(source: &str) -> (CandidateSet, Vec<ImportNeed>) {
        let file = parse_file("x.go", source).unwrap();
        let set = select_candidates(vec![Package {
            name: file.package.clone(),
            files: vec![file],
        }]);
        let needs = collect_import_needs(&set);
        (set, needs)
    }

    #[test]
    fn collects_qualifiers_from_params_and_results() {
        let (_, needs) = needs_for(
            "package p\n\nimport (\n\t\"io\"\n\t\"bytes\"\n)\n\nfunc Copy(r io.Reader) (*bytes.Buffer, error) { return nil, nil }\n",
        );
        assert_eq!(needs.len(), 1);
        let mut aliases: Vec<_> = needs[0].aliases.iter().cloned().collect();
        aliases.sort();
        assert_eq!(aliases, vec!["bytes", "io"]);
    }

    #[test]
    fn bare_types_produce_no_aliases() {
        let (_, needs) = needs_for("package p\n\nfunc Close() error { return nil }\n");
        assert_eq!(needs.len(), 1);
        assert!(needs[0].aliases.is_empty());
    }

    #[test]
    fn needs_merge_across_candidates_of_one_file() {
        let (_, needs) = needs_for(
            "package p\n\nimport (\n\t\"io\"\n\t\"fmt\"\n)\n\nfunc A(r io.Reader) error { return nil }\n\nfunc B(s fmt.Stringer) error { return nil }\n",
        );
        assert_eq!(needs.len(), 1);
        assert_eq!(needs[0].aliases.len(), 2);
        // A is the alphabetically first candidate of the file.
        assert_eq!(needs[0].func, "A");
    }

    #[test]
    fn only_files_with_candidates_get_needs() {
        let a = parse_file("a.go", "package p\n\nfunc A() error { return nil }\n").unwrap();
        let b = parse_file("b.go", "package p\n\nfunc internal() error { return nil }\n").unwrap();
        let set = select_candidates(vec![Package {
            name: "p".into(),
            files: vec![a, b],
        }]);
        let needs = collect_import_needs(&set);
        assert_eq!(needs.len(), 1);
        assert_eq!(set.files[needs[0].file].file_name(), "a.go");
    }
}
