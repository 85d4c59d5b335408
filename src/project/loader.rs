//! Loads every non-test Go file of one directory.
//!
//! Mirrors the shape of Go's `parser.ParseDir`: the scan is a single
//! directory, not a tree, and files are grouped by their declared
//! package name. Test files (`*_test.go`) and test packages
//! (`*_test`) are excluded. Any read or parse failure is fatal: the
//! loader returns everything or nothing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base::LineIndex;
use crate::parser::parse_file;
use crate::syntax::SourceFile;
use crate::{Error, Result};

/// All files of a directory that declare the same package name.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: SmolStr,
    /// Files in lexicographic path order.
    pub files: Vec<SourceFile>,
}

/// Load and parse every non-test `.go` file in `dir`, grouped by
/// declared package name. Packages named `*_test` are dropped.
pub fn load_package(dir: &Path) -> Result<Vec<Package>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".go") {
            continue;
        }
        if name.ends_with("_test.go") {
            debug!("skipping test file {}", path.display());
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let files = paths
        .par_iter()
        .map(|path| load_and_parse(path))
        .collect::<Result<Vec<_>>>()?;

    let mut packages: BTreeMap<SmolStr, Vec<SourceFile>> = BTreeMap::new();
    for file in files {
        if file.package.ends_with("_test") {
            debug!(
                "skipping file {} of test package {}",
                file.path.display(),
                file.package
            );
            continue;
        }
        packages.entry(file.package.clone()).or_default().push(file);
    }

    Ok(packages
        .into_iter()
        .map(|(name, files)| Package { name, files })
        .collect())
}

fn load_and_parse(path: &PathBuf) -> Result<SourceFile> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let file = parse_file(path, &text).map_err(|e| {
        let lc = LineIndex::new(&text).line_col(e.range.start());
        Error::parse(path, lc.line + 1, lc.col + 1, e.message)
    })?;
    trace!(
        "parsed {}: package {}, {} imports, {} funcs",
        path.display(),
        file.package,
        file.imports.len(),
        file.funcs.len()
    );
    Ok(file)
}
