//! Import resolution: merging per-file alias tables into one map.
//!
//! Every file that owns candidates gets its referenced aliases resolved
//! against that file's own import declarations, then merged into a
//! global alias→path table. The same alias may legitimately mean a
//! different path in a different file — that is a conflict, never an
//! overwrite. Problems accumulate as diagnostics; the merge keeps
//! going so one run reports everything.
//!
//! The merge is an explicit accumulator: each (file, alias) pair goes
//! through one check-then-insert decision, computed by a pure function
//! over the current table and applied atomically. Processing order is
//! lexicographic by file path and sorted by alias within a file, so
//! the result is deterministic run to run.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::collector::ImportNeed;
use super::diagnostics::ResolveDiagnostic;
use super::selector::CandidateSet;
use crate::syntax::{ImportAlias, SourceFile};

// ============================================================
// Alias derivation
// ============================================================

/// Derives the local alias an unrenamed import binds.
///
/// Pluggable because the real rule depends on the imported package's
/// own `package` clause, which a single-directory scan cannot see.
pub trait AliasStrategy {
    fn derive<'a>(&self, path: &'a str) -> &'a str;
}

/// Default heuristic: the last slash-delimited segment of the path,
/// truncated at the first dot.
///
/// Known limitations: vanity paths whose final segment differs from
/// the declared package name, and `/v2`-style version suffixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSuffix;

impl AliasStrategy for PathSuffix {
    fn derive<'a>(&self, path: &'a str) -> &'a str {
        let tail = path.rsplit('/').next().unwrap_or(path);
        tail.split('.').next().unwrap_or(tail)
    }
}

// ============================================================
// Per-file alias table
// ============================================================

/// One file's alias→path mapping, in declaration order.
///
/// Dot- and blank-imports bind no usable alias and are excluded, so
/// references through them always resolve to nothing.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: IndexMap<SmolStr, SmolStr>,
}

impl AliasTable {
    pub fn from_file(file: &SourceFile, strategy: &dyn AliasStrategy) -> Self {
        let mut entries = IndexMap::new();
        for spec in &file.imports {
            let alias = match &spec.alias {
                Some(ImportAlias::Dot) | Some(ImportAlias::Blank) => continue,
                Some(ImportAlias::Named(name)) => name.clone(),
                None => SmolStr::new(strategy.derive(&spec.path)),
            };
            entries.insert(alias, spec.path.clone());
        }
        Self { entries }
    }

    pub fn get(&self, alias: &str) -> Option<&SmolStr> {
        self.entries.get(alias)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================
// Merge accumulator
// ============================================================

/// A merged entry: the resolved path plus the candidate/file that
/// established it, kept for conflict messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedImport {
    pub path: SmolStr,
    pub func: SmolStr,
    pub file: String,
}

/// Outcome of offering one (file, alias) pair to the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The alias was not in the table and is now established.
    Established,
    /// The alias was already established by this same file.
    AlreadySatisfied,
    /// Established by a different file whose mapping agrees.
    Agreed,
    /// The owning file has no mapping for the alias. Diagnosed.
    Unresolved,
    /// The owning file maps the alias to a different path. Diagnosed.
    Conflict,
}

/// The internal decision, carrying what the application step needs.
enum Decision {
    Establish(SmolStr),
    Satisfied,
    Agreed,
    Unresolved,
    Conflict {
        path: SmolStr,
        established: MergedImport,
    },
}

/// The global merge state: alias→path entries plus accumulated
/// diagnostics. Entries live in a `BTreeMap`, so iteration is
/// alias-ordered and emission is byte-stable.
#[derive(Debug, Clone, Default)]
pub struct ImportMerge {
    entries: BTreeMap<SmolStr, MergedImport>,
    diagnostics: Vec<ResolveDiagnostic>,
}

impl ImportMerge {
    pub fn entries(&self) -> &BTreeMap<SmolStr, MergedImport> {
        &self.entries
    }

    pub fn diagnostics(&self) -> &[ResolveDiagnostic] {
        &self.diagnostics
    }

    /// Total accumulated errors. The pipeline driver decides what a
    /// non-zero count means for the process.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn into_parts(self) -> (BTreeMap<SmolStr, MergedImport>, Vec<ResolveDiagnostic>) {
        (self.entries, self.diagnostics)
    }

    /// Offer one alias referenced by `func` in `file_name` to the merge.
    ///
    /// `lookup` consults the owning file's alias table; it is only
    /// invoked when the decision needs it, so the table can be built
    /// lazily by the caller. Check and insert happen in one step — the
    /// table is never left between the two.
    pub fn offer(
        &mut self,
        func: &SmolStr,
        file_name: &str,
        alias: &SmolStr,
        lookup: &mut dyn FnMut(&str) -> Option<SmolStr>,
    ) -> MergeOutcome {
        let decision = decide(&self.entries, file_name, alias, lookup);
        match decision {
            Decision::Establish(path) => {
                self.entries.insert(
                    alias.clone(),
                    MergedImport {
                        path,
                        func: func.clone(),
                        file: file_name.to_string(),
                    },
                );
                MergeOutcome::Established
            }
            Decision::Satisfied => MergeOutcome::AlreadySatisfied,
            Decision::Agreed => MergeOutcome::Agreed,
            Decision::Unresolved => {
                self.diagnostics.push(ResolveDiagnostic::Unresolved {
                    func: func.clone(),
                    file: file_name.to_string(),
                    alias: alias.clone(),
                });
                MergeOutcome::Unresolved
            }
            Decision::Conflict { path, established } => {
                self.diagnostics.push(ResolveDiagnostic::Conflict {
                    func: func.clone(),
                    file: file_name.to_string(),
                    alias: alias.clone(),
                    established_func: established.func,
                    established_file: established.file,
                    path,
                    established_path: established.path,
                });
                MergeOutcome::Conflict
            }
        }
    }
}

/// Pure decision over the current table. Does not mutate anything;
/// `lookup` is called at most once.
fn decide(
    entries: &BTreeMap<SmolStr, MergedImport>,
    file_name: &str,
    alias: &SmolStr,
    lookup: &mut dyn FnMut(&str) -> Option<SmolStr>,
) -> Decision {
    match entries.get(alias) {
        // Already resolved from this same file: no re-lookup.
        Some(existing) if existing.file == file_name => Decision::Satisfied,
        // Established by another file: the alias may mean something
        // else here, so re-resolve against this file's own imports.
        Some(existing) => match lookup(alias) {
            None => Decision::Unresolved,
            Some(path) if path == existing.path => Decision::Agreed,
            Some(path) => Decision::Conflict {
                path,
                established: existing.clone(),
            },
        },
        None => match lookup(alias) {
            None => Decision::Unresolved,
            Some(path) => Decision::Establish(path),
        },
    }
}

// ============================================================
// Driver
// ============================================================

/// Resolve every file's referenced aliases and merge them.
///
/// `needs` comes ordered by file (lexicographic path order); aliases
/// are taken in sorted order within each file. Each file's alias table
/// is built lazily, on the first lookup that actually needs it.
pub fn resolve_imports(
    set: &CandidateSet,
    needs: &[ImportNeed],
    strategy: &dyn AliasStrategy,
) -> ImportMerge {
    let mut merge = ImportMerge::default();

    for need in needs {
        let file = &set.files[need.file];
        let file_name = file.file_name();
        let mut table: Option<AliasTable> = None;

        let mut aliases: Vec<&SmolStr> = need.aliases.iter().collect();
        aliases.sort();

        for alias in aliases {
            let outcome = merge.offer(&need.func, file_name, alias, &mut |alias| {
                table
                    .get_or_insert_with(|| {
                        debug!("building alias table for {}", file.path.display());
                        AliasTable::from_file(file, strategy)
                    })
                    .get(alias)
                    .cloned()
            });
            trace!("{}: alias {} -> {:?}", file_name, alias, outcome);
        }
    }

    merge
}
