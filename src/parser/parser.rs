//! Recursive descent parser for the Go declaration layer.
//!
//! Extracts the package clause, import declarations, and top-level
//! function signatures (with attached doc comments) from a token
//! stream. Function bodies, receivers, and `type`/`var`/`const`
//! declarations are skipped by balanced delimiter matching. The first
//! syntax error aborts the parse: a file that cannot be scanned is
//! fatal for the whole run.

use std::path::PathBuf;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::lexer::{Lexer, Token, TokenKind};
use crate::base::{LineIndex, Position, Span};
use crate::syntax::{Field, FuncDecl, ImportAlias, ImportSpec, SourceFile, TypeExpr};

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub range: TextRange,
}

impl ParseError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse one Go source file into its declaration-layer AST.
pub fn parse_file(path: impl Into<PathBuf>, input: &str) -> Result<SourceFile, ParseError> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let index = LineIndex::new(input);
    let mut parser = Parser::new(&tokens, &index, input.len());
    let (package, imports, funcs) = parser.parse_source_file()?;
    Ok(SourceFile {
        path: path.into(),
        package,
        imports,
        funcs,
    })
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    index: &'a LineIndex,
    input_len: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], index: &'a LineIndex, input_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            index,
            input_len,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skip all trivia, including newlines.
    fn skip_trivia(&mut self) {
        while self.current_kind().is_some_and(TokenKind::is_trivia) {
            self.bump();
        }
    }

    /// Skip whitespace and comments, stopping at newlines and semicolons.
    /// Used where Go's semicolon insertion makes line ends significant.
    fn skip_inline(&mut self) {
        while let Some(kind) = self.current_kind() {
            match kind {
                TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment => {
                    self.bump()
                }
                _ => break,
            }
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>, ParseError> {
        match self.current() {
            Some(tok) if tok.kind == kind => {
                self.bump();
                Ok(tok)
            }
            Some(tok) => Err(self.error_at(tok, format!("expected {what}, found {:?}", tok.kind))),
            None => Err(self.error_at_eof(format!("expected {what}, found end of file"))),
        }
    }

    fn error_at(&self, tok: Token<'_>, message: impl Into<String>) -> ParseError {
        let len = TextSize::new(tok.text.len() as u32);
        ParseError::new(message, TextRange::at(tok.offset, len))
    }

    fn error_at_eof(&self, message: impl Into<String>) -> ParseError {
        let end = TextSize::new(self.input_len as u32);
        ParseError::new(message, TextRange::empty(end))
    }

    fn token_position(&self, tok: Token<'_>) -> Position {
        let lc = self.index.line_col(tok.offset);
        Position::new(lc.line as usize, lc.col as usize)
    }

    fn token_end_position(&self, tok: Token<'_>) -> Position {
        let end = tok.offset + TextSize::new(tok.text.len() as u32);
        let lc = self.index.line_col(end);
        Position::new(lc.line as usize, lc.col as usize)
    }

    // =========================================================================
    // Source file
    // =========================================================================

    fn parse_source_file(
        &mut self,
    ) -> Result<(SmolStr, Vec<ImportSpec>, Vec<FuncDecl>), ParseError> {
        self.skip_trivia();
        self.expect(TokenKind::PackageKw, "package clause")?;
        self.skip_inline();
        let pkg = self.expect(TokenKind::Ident, "package name")?;
        let package = SmolStr::new(pkg.text);

        let mut imports = Vec::new();
        let mut funcs = Vec::new();

        // Doc comments attach to the next declaration only when no blank
        // line separates them from it.
        let mut pending_doc: Vec<SmolStr> = Vec::new();
        let mut newlines_since_comment = 0usize;

        while let Some(tok) = self.current() {
            match tok.kind {
                TokenKind::Whitespace => self.bump(),
                TokenKind::Newline => {
                    newlines_since_comment += 1;
                    if newlines_since_comment > 1 {
                        pending_doc.clear();
                    }
                    self.bump();
                }
                TokenKind::LineComment | TokenKind::BlockComment => {
                    pending_doc.push(SmolStr::new(tok.text));
                    newlines_since_comment = 0;
                    self.bump();
                }
                TokenKind::Semicolon => {
                    pending_doc.clear();
                    self.bump();
                }
                TokenKind::ImportKw => {
                    pending_doc.clear();
                    self.bump();
                    self.parse_import_decl(&mut imports)?;
                }
                TokenKind::FuncKw => {
                    let doc = std::mem::take(&mut pending_doc);
                    let func = self.parse_func_decl(tok, doc)?;
                    funcs.push(func);
                }
                TokenKind::TypeKw | TokenKind::VarKw | TokenKind::ConstKw => {
                    pending_doc.clear();
                    self.bump();
                    self.skip_simple_decl()?;
                }
                _ => {
                    return Err(self.error_at(tok, "unexpected token at top level"));
                }
            }
        }

        Ok((package, imports, funcs))
    }

    // =========================================================================
    // Imports
    // =========================================================================

    fn parse_import_decl(&mut self, imports: &mut Vec<ImportSpec>) -> Result<(), ParseError> {
        self.skip_trivia();
        if self.at(TokenKind::LParen) {
            self.bump();
            loop {
                self.skip_trivia();
                match self.current_kind() {
                    Some(TokenKind::RParen) => {
                        self.bump();
                        break;
                    }
                    Some(TokenKind::Semicolon) => self.bump(),
                    Some(_) => imports.push(self.parse_import_spec()?),
                    None => return Err(self.error_at_eof("unclosed import group")),
                }
            }
        } else {
            imports.push(self.parse_import_spec()?);
        }
        Ok(())
    }

    fn parse_import_spec(&mut self) -> Result<ImportSpec, ParseError> {
        self.skip_trivia();
        let first = self
            .current()
            .ok_or_else(|| self.error_at_eof("expected import spec"))?;

        let alias = match first.kind {
            TokenKind::Dot => {
                self.bump();
                Some(ImportAlias::Dot)
            }
            TokenKind::Ident if first.text == "_" => {
                self.bump();
                Some(ImportAlias::Blank)
            }
            TokenKind::Ident => {
                self.bump();
                Some(ImportAlias::Named(SmolStr::new(first.text)))
            }
            _ => None,
        };

        self.skip_inline();
        let path_tok = match self.current() {
            Some(tok) if matches!(tok.kind, TokenKind::Str | TokenKind::RawStr) => {
                self.bump();
                tok
            }
            Some(tok) => return Err(self.error_at(tok, "expected import path string")),
            None => return Err(self.error_at_eof("expected import path string")),
        };

        Ok(ImportSpec {
            alias,
            path: unquote(path_tok.text),
        })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn parse_func_decl(
        &mut self,
        func_tok: Token<'a>,
        doc: Vec<SmolStr>,
    ) -> Result<FuncDecl, ParseError> {
        self.bump(); // `func`
        self.skip_trivia();

        let mut has_receiver = false;
        if self.at(TokenKind::LParen) {
            has_receiver = true;
            self.skip_balanced(TokenKind::LParen, TokenKind::RParen, "receiver")?;
        }

        self.skip_trivia();
        let name_tok = self.expect(TokenKind::Ident, "function name")?;

        self.skip_inline();
        if self.at(TokenKind::LBrack) {
            // Type parameter list of a generic function.
            self.skip_balanced(TokenKind::LBrack, TokenKind::RBrack, "type parameter list")?;
        }

        self.skip_inline();
        self.expect(TokenKind::LParen, "parameter list")?;
        let params = self.parse_field_list()?;
        let results = self.parse_results()?;

        // The opening brace sits on the signature line (semicolon
        // insertion); a newline first means a bodyless declaration.
        self.skip_inline();
        if self.at(TokenKind::LBrace) {
            self.skip_balanced(TokenKind::LBrace, TokenKind::RBrace, "function body")?;
        }

        Ok(FuncDecl {
            name: SmolStr::new(name_tok.text),
            doc,
            has_receiver,
            params,
            results,
            span: Span::new(
                self.token_position(func_tok),
                self.token_end_position(name_tok),
            ),
        })
    }

    /// Result list: none, a parenthesized field list, or one bare type on
    /// the same line.
    fn parse_results(&mut self) -> Result<Vec<Field>, ParseError> {
        self.skip_inline();
        match self.current_kind() {
            Some(TokenKind::LParen) => {
                self.bump();
                self.parse_field_list()
            }
            Some(kind) if starts_type(kind) => {
                let ty = self.parse_type()?;
                Ok(vec![Field { exprs: vec![ty] }])
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Parse comma-separated fields up to and including the closing paren.
    ///
    /// Names are not distinguished from types: each field keeps its
    /// adjacent expressions in order, so `n int` is two expressions and
    /// the field type is the last one.
    fn parse_field_list(&mut self) -> Result<Vec<Field>, ParseError> {
        let mut fields = Vec::new();
        loop {
            self.skip_trivia();
            match self.current_kind() {
                Some(TokenKind::RParen) => {
                    self.bump();
                    return Ok(fields);
                }
                Some(TokenKind::Comma) => self.bump(),
                Some(_) => {
                    let mut exprs = vec![self.parse_type()?];
                    loop {
                        self.skip_trivia();
                        match self.current_kind() {
                            Some(TokenKind::Comma) => {
                                self.bump();
                                break;
                            }
                            Some(TokenKind::RParen) | None => break,
                            Some(_) => exprs.push(self.parse_type()?),
                        }
                    }
                    fields.push(Field { exprs });
                }
                None => return Err(self.error_at_eof("unclosed parameter list")),
            }
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        self.skip_trivia();
        let tok = self
            .current()
            .ok_or_else(|| self.error_at_eof("expected type"))?;

        match tok.kind {
            TokenKind::Star => {
                self.bump();
                Ok(TypeExpr::Pointer(Box::new(self.parse_type()?)))
            }
            TokenKind::Arrow => {
                // `<-chan T`
                self.bump();
                self.skip_trivia();
                self.expect(TokenKind::ChanKw, "`chan`")?;
                Ok(TypeExpr::Chan(Box::new(self.parse_type()?)))
            }
            TokenKind::ChanKw => {
                self.bump();
                self.skip_inline();
                if self.at(TokenKind::Arrow) {
                    self.bump();
                }
                Ok(TypeExpr::Chan(Box::new(self.parse_type()?)))
            }
            TokenKind::LBrack => {
                self.bump();
                self.skip_trivia();
                if self.at(TokenKind::RBrack) {
                    self.bump();
                    Ok(TypeExpr::Slice(Box::new(self.parse_type()?)))
                } else {
                    // Array length expression: skip to the matching bracket.
                    self.skip_until_balanced(TokenKind::LBrack, TokenKind::RBrack, 1)?;
                    Ok(TypeExpr::Array(Box::new(self.parse_type()?)))
                }
            }
            TokenKind::MapKw => {
                self.bump();
                self.skip_trivia();
                self.expect(TokenKind::LBrack, "`[` after `map`")?;
                let key = self.parse_type()?;
                self.skip_trivia();
                self.expect(TokenKind::RBrack, "`]` after map key type")?;
                let value = self.parse_type()?;
                Ok(TypeExpr::Map(Box::new(key), Box::new(value)))
            }
            TokenKind::Ellipsis => {
                self.bump();
                Ok(TypeExpr::Variadic(Box::new(self.parse_type()?)))
            }
            TokenKind::FuncKw => {
                self.bump();
                self.skip_inline();
                self.expect(TokenKind::LParen, "parameter list of func type")?;
                let params = self.parse_field_list()?;
                let results = self.parse_results()?;
                Ok(TypeExpr::Func { params, results })
            }
            TokenKind::StructKw | TokenKind::InterfaceKw => {
                self.bump();
                self.skip_trivia();
                self.expect(TokenKind::LBrace, "`{`")?;
                let refs = self.scan_composite()?;
                Ok(TypeExpr::Composite(refs))
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_type()?;
                self.skip_trivia();
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(TypeExpr::Paren(Box::new(inner)))
            }
            TokenKind::Ident => self.parse_ident_type(),
            _ => Err(self.error_at(tok, "expected type")),
        }
    }

    fn parse_ident_type(&mut self) -> Result<TypeExpr, ParseError> {
        let ident = self.expect(TokenKind::Ident, "type name")?;

        // Qualified reference `pkg.Type`. The dot must be on the same
        // line as the qualifier (semicolon insertion forbids the rest).
        let save = self.pos;
        self.skip_inline();
        let mut expr = if self.at(TokenKind::Dot) {
            self.bump();
            self.skip_trivia();
            let member = self.expect(TokenKind::Ident, "identifier after `.`")?;
            TypeExpr::Selector {
                qualifier: SmolStr::new(ident.text),
                member: SmolStr::new(member.text),
            }
        } else {
            self.pos = save;
            TypeExpr::Ident(SmolStr::new(ident.text))
        };

        // Generic instantiation `T[A, B]`: only when the bracket is
        // adjacent, which separates it from `name []T` field syntax.
        if let (expr_end, Some(tok)) = (self.last_token_end(), self.current()) {
            if tok.kind == TokenKind::LBrack && tok.offset == expr_end {
                // `[]` directly after the ident is a name followed by a
                // slice type, not an instantiation.
                let next_significant = self.tokens[self.pos + 1..]
                    .iter()
                    .find(|t| !t.kind.is_trivia());
                if next_significant.map(|t| t.kind) != Some(TokenKind::RBrack) {
                    self.bump();
                    let args = self.parse_generic_args()?;
                    expr = TypeExpr::Generic {
                        base: Box::new(expr),
                        args,
                    };
                }
            }
        }

        Ok(expr)
    }

    fn parse_generic_args(&mut self) -> Result<Vec<TypeExpr>, ParseError> {
        let mut args = Vec::new();
        loop {
            self.skip_trivia();
            match self.current_kind() {
                Some(TokenKind::RBrack) => {
                    self.bump();
                    return Ok(args);
                }
                Some(TokenKind::Comma) => self.bump(),
                Some(TokenKind::IntNumber) | Some(TokenKind::FloatNumber) => self.bump(),
                Some(_) => args.push(self.parse_type()?),
                None => return Err(self.error_at_eof("unclosed type argument list")),
            }
        }
    }

    /// End offset of the most recently consumed token.
    fn last_token_end(&self) -> TextSize {
        self.tokens[..self.pos]
            .last()
            .map(|t| t.offset + TextSize::new(t.text.len() as u32))
            .unwrap_or_default()
    }

    /// Scan a `struct{...}`/`interface{...}` body, collecting the
    /// qualified references (`pkg.Type`) that appear anywhere inside.
    fn scan_composite(&mut self) -> Result<Vec<TypeExpr>, ParseError> {
        let mut depth = 1u32;
        let mut refs = Vec::new();
        let mut prev_ident: Option<SmolStr> = None;
        let mut pending_dot = false;

        while let Some(tok) = self.current() {
            self.bump();
            match tok.kind {
                TokenKind::LBrace => {
                    depth += 1;
                    prev_ident = None;
                    pending_dot = false;
                }
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(refs);
                    }
                    prev_ident = None;
                    pending_dot = false;
                }
                TokenKind::Ident => {
                    if pending_dot {
                        if let Some(qualifier) = prev_ident.take() {
                            refs.push(TypeExpr::Selector {
                                qualifier,
                                member: SmolStr::new(tok.text),
                            });
                        }
                        pending_dot = false;
                    } else {
                        prev_ident = Some(SmolStr::new(tok.text));
                    }
                }
                TokenKind::Dot => {
                    pending_dot = prev_ident.is_some();
                }
                kind if kind.is_trivia() => {}
                _ => {
                    prev_ident = None;
                    pending_dot = false;
                }
            }
        }
        Err(self.error_at_eof("unclosed struct or interface body"))
    }

    // =========================================================================
    // Skipping
    // =========================================================================

    /// Consume a balanced `open ... close` region starting at `open`.
    fn skip_balanced(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        what: &str,
    ) -> Result<(), ParseError> {
        self.expect(open, "opening delimiter")?;
        self.skip_until_balanced(open, close, 1)
            .map_err(|_| self.error_at_eof(format!("unclosed {what}")))
    }

    /// Consume tokens until `depth` reaches zero.
    fn skip_until_balanced(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut depth: u32,
    ) -> Result<(), ParseError> {
        while let Some(tok) = self.current() {
            self.bump();
            if tok.kind == open {
                depth += 1;
            } else if tok.kind == close {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
        }
        Err(self.error_at_eof("unclosed delimiter"))
    }

    /// Skip a `type`/`var`/`const` declaration (keyword already consumed):
    /// either a parenthesized group or everything up to the end of the
    /// logical line, tracking delimiter depth for multi-line literals.
    fn skip_simple_decl(&mut self) -> Result<(), ParseError> {
        self.skip_inline();
        if self.at(TokenKind::LParen) {
            return self.skip_balanced(TokenKind::LParen, TokenKind::RParen, "declaration group");
        }

        let mut depth = 0u32;
        while let Some(tok) = self.current() {
            match tok.kind {
                TokenKind::LParen | TokenKind::LBrack | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBrack | TokenKind::RBrace => {
                    depth = depth.saturating_sub(1)
                }
                TokenKind::Newline | TokenKind::Semicolon if depth == 0 => break,
                _ => {}
            }
            self.bump();
        }
        Ok(())
    }
}

/// Token kinds that can begin a type expression.
fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Star
            | TokenKind::LBrack
            | TokenKind::MapKw
            | TokenKind::ChanKw
            | TokenKind::Arrow
            | TokenKind::StructKw
            | TokenKind::InterfaceKw
            | TokenKind::FuncKw
    )
}

/// Strip quotes from a string literal, processing the escape sequences
/// that can occur in import paths.
fn unquote(text: &str) -> SmolStr {
    if let Some(inner) = text.strip_prefix('`').and_then(|t| t.strip_suffix('`')) {
        return SmolStr::new(inner);
    }
    let inner = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    if !inner.contains('\\') {
        return SmolStr::new(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    SmolStr::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> SourceFile {
        parse_file("test.go", input).expect("parse failed")
    }

    #[test]
    fn parses_package_clause() {
        let file = parse("package io\n");
        assert_eq!(file.package, "io");
        assert!(file.imports.is_empty());
        assert!(file.funcs.is_empty());
    }

    #[test]
    fn parses_import_forms() {
        let file = parse(
            "package p\n\nimport \"fmt\"\nimport (\n\tf \"os\"\n\t. \"strings\"\n\t_ \"net/http\"\n\t`errors`\n)\n",
        );
        assert_eq!(file.imports.len(), 5);
        assert_eq!(file.imports[0].alias, None);
        assert_eq!(file.imports[0].path, "fmt");
        assert_eq!(
            file.imports[1].alias,
            Some(ImportAlias::Named(SmolStr::new("f")))
        );
        assert_eq!(file.imports[2].alias, Some(ImportAlias::Dot));
        assert_eq!(file.imports[3].alias, Some(ImportAlias::Blank));
        assert_eq!(file.imports[3].path, "net/http");
        assert_eq!(file.imports[4].path, "errors");
    }

    #[test]
    fn parses_func_signature() {
        let file = parse("package p\n\nfunc ReadAll(r io.Reader) ([]byte, error) {\n\treturn nil, nil\n}\n");
        assert_eq!(file.funcs.len(), 1);
        let f = &file.funcs[0];
        assert_eq!(f.name, "ReadAll");
        assert!(!f.has_receiver);
        assert_eq!(f.params.len(), 1);
        assert_eq!(f.results.len(), 2);
        assert!(f.last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn func_span_covers_keyword_through_name() {
        let file = parse("package p\n\nfunc ReadAll() error { return nil }\n");
        let span = file.funcs[0].span;
        assert_eq!(span.start, Position::new(2, 0));
        assert_eq!(span.end, Position::new(2, 12));
    }

    #[test]
    fn receiver_is_recorded() {
        let file = parse("package p\n\nfunc (b *Buffer) Read(p []byte) (int, error) { return 0, nil }\n");
        assert!(file.funcs[0].has_receiver);
        assert_eq!(file.funcs[0].name, "Read");
    }

    #[test]
    fn single_bare_result() {
        let file = parse("package p\n\nfunc Close() error { return nil }\n");
        let f = &file.funcs[0];
        assert_eq!(f.results.len(), 1);
        assert!(f.last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn no_result_function() {
        let file = parse("package p\n\nfunc Reset() {\n}\n\nfunc Next() error { return nil }\n");
        assert!(file.funcs[0].results.is_empty());
        assert_eq!(file.funcs[1].name, "Next");
    }

    #[test]
    fn bodyless_func_does_not_swallow_next_decl() {
        let file = parse("package p\n\nfunc Raw() int\n\nfunc Cooked() error { return nil }\n");
        assert_eq!(file.funcs.len(), 2);
        assert_eq!(file.funcs[0].results.len(), 1);
        assert!(file.funcs[0].last_result_type().unwrap().is_bare_ident("int"));
    }

    #[test]
    fn doc_comment_attaches_without_blank_line() {
        let file = parse(
            "package p\n\n// stray comment\n\n// ReadAll reads.\n// Second line.\nfunc ReadAll() error { return nil }\n",
        );
        let f = &file.funcs[0];
        assert_eq!(f.doc, vec!["// ReadAll reads.", "// Second line."]);
    }

    #[test]
    fn blank_line_detaches_doc_comment() {
        let file = parse("package p\n\n// far away\n\nfunc F() error { return nil }\n");
        assert!(file.funcs[0].doc.is_empty());
    }

    #[test]
    fn named_results_keep_last_type() {
        let file = parse("package p\n\nfunc Open(name string) (f *File, err error) { return }\n");
        let f = &file.funcs[0];
        assert!(f.last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn shared_type_in_name_group() {
        // `(a, b error)`: the last field's last expression is the type.
        let file = parse("package p\n\nfunc Pair() (a, b error) { return }\n");
        assert!(file.funcs[0].last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn qualified_result_is_not_bare_error() {
        let file = parse("package p\n\nfunc E() pkg.error { return nil }\n");
        let last = file.funcs[0].last_result_type().unwrap();
        assert!(!last.is_bare_ident("error"));
        assert!(matches!(last, TypeExpr::Selector { .. }));
    }

    #[test]
    fn pointer_result_is_not_bare_error() {
        let file = parse("package p\n\nfunc E() *error { return nil }\n");
        assert!(!file.funcs[0].last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn complex_types_in_params() {
        let file = parse(
            "package p\n\nfunc G(m map[string]pkg.V, ch <-chan a.B, fns ...func(x.Y) (z.W, error)) error { return nil }\n",
        );
        let f = &file.funcs[0];
        assert_eq!(f.params.len(), 3);
        let mut quals = Vec::new();
        for field in &f.params {
            for expr in &field.exprs {
                expr.walk(&mut |e| {
                    if let TypeExpr::Selector { qualifier, .. } = e {
                        quals.push(qualifier.clone());
                    }
                });
            }
        }
        quals.sort();
        assert_eq!(quals, vec!["a", "pkg", "x", "z"]);
    }

    #[test]
    fn struct_literal_in_signature_yields_refs() {
        let file = parse("package p\n\nfunc H(s struct{ t q.T }) error { return nil }\n");
        let field = &file.funcs[0].params[0];
        let mut found = false;
        for expr in &field.exprs {
            expr.walk(&mut |e| {
                if let TypeExpr::Selector { qualifier, .. } = e {
                    assert_eq!(qualifier, "q");
                    found = true;
                }
            });
        }
        assert!(found);
    }

    #[test]
    fn generic_function_type_params_are_skipped() {
        let file = parse("package p\n\nfunc Map[T any](xs []T) ([]T, error) { return nil, nil }\n");
        assert_eq!(file.funcs[0].name, "Map");
        assert!(file.funcs[0].last_result_type().unwrap().is_bare_ident("error"));
    }

    #[test]
    fn generic_instantiation_vs_slice_field() {
        let file = parse("package p\n\nfunc I(l List[pkg.T], xs []int) error { return nil }\n");
        let f = &file.funcs[0];
        let mut quals = Vec::new();
        for field in &f.params {
            for expr in &field.exprs {
                expr.walk(&mut |e| {
                    if let TypeExpr::Selector { qualifier, .. } = e {
                        quals.push(qualifier.clone());
                    }
                });
            }
        }
        assert_eq!(quals, vec!["pkg"]);
    }

    #[test]
    fn type_var_const_decls_are_skipped() {
        let file = parse(
            "package p\n\ntype Foo struct {\n\tx int\n}\n\nvar x = Foo{}\n\nconst (\n\tA = 1\n\tB = 2\n)\n\nfunc F() error { return nil }\n",
        );
        assert_eq!(file.funcs.len(), 1);
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = parse_file("bad.go", "package p\n\n)\n").unwrap_err();
        assert!(err.message.contains("unexpected token"));
    }

    #[test]
    fn missing_package_clause_is_an_error() {
        assert!(parse_file("bad.go", "func F() {}\n").is_err());
    }
}
