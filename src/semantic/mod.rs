//! Semantic analysis over the parsed declaration layer.
//!
//! Three passes, in pipeline order:
//! - [`selector`]: applies the qualification rules and produces the
//!   candidate set, keyed by exported function name
//! - [`collector`]: gathers the package qualifiers referenced by each
//!   candidate's signature, merged per owning file
//! - [`resolver`]: merges per-file alias tables into one global
//!   alias→path map, accumulating conflicts and unresolved references

mod collector;
mod diagnostics;
mod resolver;
mod selector;

pub use collector::{ImportNeed, candidate_qualifiers, collect_import_needs};
pub use diagnostics::ResolveDiagnostic;
pub use resolver::{
    AliasStrategy, AliasTable, ImportMerge, MergeOutcome, MergedImport, PathSuffix,
    resolve_imports,
};
pub use selector::{Candidate, CandidateSet, WRAPPER_PREFIX, select_candidates};
