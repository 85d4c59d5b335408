//! Error types for package scanning.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run.
///
/// All of these are fatal: the loader either parses the whole package or
/// produces nothing. Resolution problems are not errors in this sense —
/// they accumulate as [`crate::semantic::ResolveDiagnostic`]s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The package directory does not exist or is not a directory.
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// IO error while reading the directory or a source file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file failed to parse.
    #[error("{file}:{line}:{col}: {message}")]
    Parse {
        file: PathBuf,
        /// 1-indexed line of the offending token.
        line: u32,
        /// 1-indexed column of the offending token.
        col: u32,
        message: String,
    },
}

impl Error {
    /// Create an IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error at a 1-indexed line/column.
    pub fn parse(file: impl Into<PathBuf>, line: u32, col: u32, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            col,
            message: message.into(),
        }
    }
}
