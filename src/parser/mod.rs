//! Declaration-level parser for Go source files.
//!
//! This module provides:
//! - **logos** for fast lexing of a Go token subset
//! - a recursive-descent parser that extracts the declaration layer
//!   (package clause, imports, top-level functions with signatures and
//!   doc comments) into the plain AST in [`crate::syntax`]
//!
//! Function bodies and non-func declarations are skipped by balanced
//! delimiter matching; the scanner never needs to understand statements.
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → SourceFile AST (imports, func signatures, doc comments)
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod lexer;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{ParseError, parse_file};
