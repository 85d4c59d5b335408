//! Candidate selection: which functions get a wrapper.
//!
//! A top-level function qualifies when it is exported, has no receiver,
//! is not already named like a wrapper, and its last declared result is
//! the bare identifier `error`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use smol_str::SmolStr;
use tracing::{trace, warn};

use crate::project::Package;
use crate::syntax::{Field, FuncDecl, SourceFile};

/// Prefix of generated wrapper names.
pub const WRAPPER_PREFIX: &str = "Must";

/// A function that qualifies for wrapping.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: SmolStr,
    /// Doc comment lines, verbatim.
    pub doc: Vec<SmolStr>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    /// Index of the owning file in [`CandidateSet::files`].
    pub file: usize,
}

/// The selection result: all scanned files plus the candidates keyed by
/// exported name. `BTreeMap` keeps downstream iteration name-ordered.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    /// Every surviving file, in lexicographic path order across packages.
    pub files: Vec<SourceFile>,
    pub candidates: BTreeMap<SmolStr, Candidate>,
}

impl CandidateSet {
    /// File name of a candidate's owning file, for diagnostics.
    pub fn file_name(&self, candidate: &Candidate) -> &str {
        self.files[candidate.file].file_name()
    }
}

/// Apply the qualification rules to every top-level function.
///
/// Files are visited in lexicographic path order; when two files export
/// the same qualifying name, the later one wins and the overwrite is
/// logged.
pub fn select_candidates(packages: Vec<Package>) -> CandidateSet {
    let mut files: Vec<SourceFile> = packages.into_iter().flat_map(|p| p.files).collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    let paths: Vec<PathBuf> = files.iter().map(|f| f.path.clone()).collect();

    let mut candidates: BTreeMap<SmolStr, Candidate> = BTreeMap::new();
    for (file_idx, file) in files.iter_mut().enumerate() {
        for func in std::mem::take(&mut file.funcs) {
            if !qualifies(&func) {
                continue;
            }
            trace!("candidate {} in {}", func.name, file.path.display());
            let candidate = Candidate {
                name: func.name.clone(),
                doc: func.doc,
                params: func.params,
                results: func.results,
                file: file_idx,
            };
            if let Some(previous) = candidates.insert(func.name.clone(), candidate) {
                warn!(
                    "duplicate exported function {}: {}:{} overwrites {}",
                    func.name,
                    file.path.display(),
                    func.span.start.line + 1,
                    paths[previous.file].display(),
                );
            }
        }
    }

    CandidateSet { files, candidates }
}

/// The qualification rules, in the order they reject.
fn qualifies(func: &FuncDecl) -> bool {
    if func.has_receiver {
        return false;
    }
    if !func.is_exported() {
        return false;
    }
    if func.results.is_empty() {
        return false;
    }
    if has_wrapper_prefix(&func.name) {
        return false;
    }
    func.last_result_type()
        .is_some_and(|ty| ty.is_bare_ident("error"))
}

/// True when the name is already a wrapper name: it starts with the
/// prefix and the character after the prefix is upper-case. `Mustache`
/// is not a wrapper name; `MustFoo` is.
fn has_wrapper_prefix(name: &str) -> bool {
    name.strip_prefix(WRAPPER_PREFIX)
        .is_some_and(|rest| rest.chars().next().is_some_and(char::is_uppercase))
}
