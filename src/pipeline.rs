//! Drives one full run: load → select → collect → resolve → emit.
//!
//! The library side of the CLI. Resolution diagnostics do not abort
//! the run; they come back with the rendering so the caller decides
//! what a non-zero error count means for the process.

use std::collections::BTreeMap;
use std::path::Path;

use smol_str::SmolStr;
use tracing::debug;

use crate::Result;
use crate::emit;
use crate::project;
use crate::semantic::{
    MergedImport, PathSuffix, ResolveDiagnostic, collect_import_needs, resolve_imports,
    select_candidates,
};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The rendered output (import block + wrapper stubs).
    pub rendering: String,
    /// The merged alias→path table, possibly partial if errors occurred.
    pub imports: BTreeMap<SmolStr, MergedImport>,
    /// Accumulated resolution problems, in the order they were found.
    pub diagnostics: Vec<ResolveDiagnostic>,
}

impl RunOutcome {
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Scan `dir` and produce the rendering plus resolution diagnostics.
///
/// Fails only on fatal conditions: unreadable directory or a file that
/// does not parse.
pub fn run(dir: &Path) -> Result<RunOutcome> {
    let packages = project::load_package(dir)?;
    debug!("loaded {} package(s) from {}", packages.len(), dir.display());

    let set = select_candidates(packages);
    debug!("{} candidate function(s)", set.candidates.len());

    let needs = collect_import_needs(&set);
    let merge = resolve_imports(&set, &needs, &PathSuffix);

    let rendering = emit::render(&merge, &set);
    let (imports, diagnostics) = merge.into_parts();

    Ok(RunOutcome {
        rendering,
        imports,
        diagnostics,
    })
}
