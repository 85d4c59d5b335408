//! Resolution diagnostics.
//!
//! These accumulate during the import merge instead of aborting it, so
//! one run surfaces every problem. Rendered form is a single line:
//! `<function>(<file>): <message>`.

use smol_str::SmolStr;
use thiserror::Error;

/// A recoverable resolution problem, reported once and counted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveDiagnostic {
    /// The owning file has no import declaration that binds the alias
    /// (including the dot- and blank-import cases, which bind nothing).
    #[error("{func}({file}): can't find import path for package {alias:?}")]
    Unresolved {
        func: SmolStr,
        file: String,
        alias: SmolStr,
    },

    /// Two files bind the same alias to different import paths.
    #[error(
        "{func}({file}): import conflict for alias {alias:?} with \
         {established_func}({established_file}): {path:?} vs {established_path:?}"
    )]
    Conflict {
        func: SmolStr,
        file: String,
        alias: SmolStr,
        established_func: SmolStr,
        established_file: String,
        path: SmolStr,
        established_path: SmolStr,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_renders_one_line() {
        let d = ResolveDiagnostic::Unresolved {
            func: "ReadAll".into(),
            file: "a.go".into(),
            alias: "io".into(),
        };
        assert_eq!(
            d.to_string(),
            "ReadAll(a.go): can't find import path for package \"io\""
        );
    }

    #[test]
    fn conflict_names_both_sides() {
        let d = ResolveDiagnostic::Conflict {
            func: "B".into(),
            file: "b.go".into(),
            alias: "f".into(),
            established_func: "A".into(),
            established_file: "a.go".into(),
            path: "strings".into(),
            established_path: "fmt".into(),
        };
        assert_eq!(
            d.to_string(),
            "B(b.go): import conflict for alias \"f\" with A(a.go): \"strings\" vs \"fmt\""
        );
    }
}
