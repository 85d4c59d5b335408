//! Foundation types for the gomust toolchain.
//!
//! This module provides the fundamental types used throughout the scanner:
//! - [`Position`], [`Span`] - Line/column positions for AST nodes
//! - [`LineCol`], [`LineIndex`] - Byte-offset to line/column conversion
//!
//! This module has NO dependencies on other gomust modules.

mod line_index;
mod position;

pub use line_index::{LineCol, LineIndex};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
