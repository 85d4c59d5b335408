//! Owned AST for the declaration layer.
//!
//! Only what the scanner needs survives parsing: the package clause,
//! import declarations, and top-level function signatures with their
//! doc comments. Bodies and non-func declarations are discarded.

use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::base::Span;

/// A parsed source file: package clause, imports, top-level functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Declared package name (`package foo`).
    pub package: SmolStr,
    pub imports: Vec<ImportSpec>,
    pub funcs: Vec<FuncDecl>,
}

impl SourceFile {
    /// The file name without its directory, used in diagnostics.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_else(|| fallback_name(&self.path))
    }
}

fn fallback_name(path: &Path) -> &str {
    path.to_str().unwrap_or("<non-utf8 path>")
}

/// The local name an import declaration binds, when explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportAlias {
    /// `import f "fmt"`
    Named(SmolStr),
    /// `import . "fmt"` — wildcard, excluded from alias tables
    Dot,
    /// `import _ "fmt"` — side-effect only, excluded from alias tables
    Blank,
}

/// One import declaration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub alias: Option<ImportAlias>,
    /// Unquoted import path.
    pub path: SmolStr,
}

/// A top-level function declaration. The body is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: SmolStr,
    /// Doc comment lines, verbatim (`// ...` / `/* ... */`), in order.
    pub doc: Vec<SmolStr>,
    pub has_receiver: bool,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    /// Location of the `func` keyword through the function name,
    /// reported when a later file shadows the declaration.
    pub span: Span,
}

impl FuncDecl {
    /// Go export rule: the first character of the name is upper-case.
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }

    /// The type of the last declared result, if any.
    pub fn last_result_type(&self) -> Option<&TypeExpr> {
        self.results.last().and_then(Field::type_expr)
    }
}

/// One comma-separated entry of a parameter or result list.
///
/// The parser does not distinguish names from types: `n int` is kept as
/// two adjacent expressions. The type of the entry is always the last
/// expression, which is all selection and collection need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub exprs: Vec<TypeExpr>,
}

impl Field {
    pub fn type_expr(&self) -> Option<&TypeExpr> {
        self.exprs.last()
    }
}

/// A type expression, deep enough to find every qualified reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `error`, `int`, `T`
    Ident(SmolStr),
    /// `pkg.Type`
    Selector { qualifier: SmolStr, member: SmolStr },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T` — the length expression is discarded
    Array(Box<TypeExpr>),
    /// `map[K]V`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// `chan T`, `<-chan T`, `chan<- T` — direction is discarded
    Chan(Box<TypeExpr>),
    /// `...T`
    Variadic(Box<TypeExpr>),
    /// `func(...) ...`
    Func {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    /// `T[A, B]` generic instantiation
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `struct{...}` / `interface{...}` in a signature; holds the
    /// qualified references found inside the braces
    Composite(Vec<TypeExpr>),
    /// `(T)`
    Paren(Box<TypeExpr>),
}

impl TypeExpr {
    /// True for an unqualified, uncomposed identifier equal to `name`.
    pub fn is_bare_ident(&self, name: &str) -> bool {
        matches!(self, TypeExpr::Ident(n) if n == name)
    }

    /// Visit this expression and every nested type expression.
    pub fn walk(&self, f: &mut impl FnMut(&TypeExpr)) {
        f(self);
        match self {
            TypeExpr::Ident(_) | TypeExpr::Selector { .. } => {}
            TypeExpr::Pointer(inner)
            | TypeExpr::Slice(inner)
            | TypeExpr::Array(inner)
            | TypeExpr::Chan(inner)
            | TypeExpr::Variadic(inner)
            | TypeExpr::Paren(inner) => inner.walk(f),
            TypeExpr::Map(key, value) => {
                key.walk(f);
                value.walk(f);
            }
            TypeExpr::Func { params, results } => {
                for field in params.iter().chain(results) {
                    for expr in &field.exprs {
                        expr.walk(f);
                    }
                }
            }
            TypeExpr::Generic { base, args } => {
                base.walk(f);
                for arg in args {
                    arg.walk(f);
                }
            }
            TypeExpr::Composite(refs) => {
                for r in refs {
                    r.walk(f);
                }
            }
        }
    }
}
