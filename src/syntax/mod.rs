//! AST types for the declaration layer of parsed Go files.

mod ast;

pub use ast::{Field, FuncDecl, ImportAlias, ImportSpec, SourceFile, TypeExpr};
