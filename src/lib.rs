//! # gomust
//!
//! Scans a Go package directory for exported top-level functions whose
//! last result is `error` and generates `Must`-prefixed panic-on-failure
//! wrapper stubs, together with the import block those wrappers need.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! pipeline  → Drives one full run: load → select → collect → resolve → emit
//!   ↓
//! emit      → Renders the import block and wrapper stubs
//!   ↓
//! semantic  → Candidate selection, qualifier collection, import merge
//!   ↓
//! project   → Package loading: directory scan, test-file exclusion
//!   ↓
//! syntax    → AST types: SourceFile, ImportSpec, FuncDecl, TypeExpr
//!   ↓
//! parser    → Logos lexer, recursive-descent declaration parser
//!   ↓
//! base      → Primitives (Position, Span, LineIndex)
//! ```

/// Foundation types: Position, Span, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent declaration parser
pub mod parser;

/// Syntax: AST types for the parsed declaration layer
pub mod syntax;

/// Project management: package directory loading
pub mod project;

/// Semantic analysis: selection, reference collection, import resolution
pub mod semantic;

/// Output rendering: import block and wrapper stubs
pub mod emit;

/// Pipeline driver used by the CLI
pub mod pipeline;

mod error;

pub use error::{Error, Result};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span};
