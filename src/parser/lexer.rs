//! Logos-based lexer for the Go token subset the scanner needs.
//!
//! Fast tokenization using the logos crate. Comments and newlines are
//! kept as trivia tokens: the parser needs both to attach doc comments
//! to declarations.

use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, GoToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: GoToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Token kinds exposed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    Newline,
    LineComment,
    BlockComment,

    // Literals
    Ident,
    IntNumber,
    FloatNumber,
    Str,
    RawStr,
    Rune,

    // Keywords
    PackageKw,
    ImportKw,
    FuncKw,
    TypeKw,
    VarKw,
    ConstKw,
    MapKw,
    ChanKw,
    StructKw,
    InterfaceKw,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Comma,
    Semicolon,
    Dot,
    Ellipsis,
    Star,
    Arrow,
    /// Any other operator (`=`, `:=`, `+`, `&&`, ...). Only appears in
    /// regions the parser skips.
    Op,

    Error,
}

impl TokenKind {
    /// Whitespace, newlines, and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum GoToken {
    // =========================================================================
    // TRIVIA (newlines are significant for doc-comment attachment)
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    #[regex(r"[0-9][0-9a-fA-F_xXoObB]*")]
    IntNumber,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?")]
    FloatNumber,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    #[regex(r"`[^`]*`")]
    RawStr,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Rune,

    // =========================================================================
    // KEYWORDS (the subset the declaration grammar needs)
    // =========================================================================
    #[token("package")]
    PackageKw,

    #[token("import")]
    ImportKw,

    #[token("func")]
    FuncKw,

    #[token("type")]
    TypeKw,

    #[token("var")]
    VarKw,

    #[token("const")]
    ConstKw,

    #[token("map")]
    MapKw,

    #[token("chan")]
    ChanKw,

    #[token("struct")]
    StructKw,

    #[token("interface")]
    InterfaceKw,

    // =========================================================================
    // PUNCTUATION (multi-character before single-character)
    // =========================================================================
    #[token("...")]
    Ellipsis,

    #[token("<-")]
    Arrow,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("[")]
    LBrack,

    #[token("]")]
    RBrack,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[regex(r"[-+/%&|^!=<>:~?@]+")]
    Op,
}

impl From<GoToken> for TokenKind {
    fn from(t: GoToken) -> Self {
        match t {
            GoToken::Whitespace => TokenKind::Whitespace,
            GoToken::Newline => TokenKind::Newline,
            GoToken::LineComment => TokenKind::LineComment,
            GoToken::BlockComment => TokenKind::BlockComment,
            GoToken::Ident => TokenKind::Ident,
            GoToken::IntNumber => TokenKind::IntNumber,
            GoToken::FloatNumber => TokenKind::FloatNumber,
            GoToken::Str => TokenKind::Str,
            GoToken::RawStr => TokenKind::RawStr,
            GoToken::Rune => TokenKind::Rune,
            GoToken::PackageKw => TokenKind::PackageKw,
            GoToken::ImportKw => TokenKind::ImportKw,
            GoToken::FuncKw => TokenKind::FuncKw,
            GoToken::TypeKw => TokenKind::TypeKw,
            GoToken::VarKw => TokenKind::VarKw,
            GoToken::ConstKw => TokenKind::ConstKw,
            GoToken::MapKw => TokenKind::MapKw,
            GoToken::ChanKw => TokenKind::ChanKw,
            GoToken::StructKw => TokenKind::StructKw,
            GoToken::InterfaceKw => TokenKind::InterfaceKw,
            GoToken::Ellipsis => TokenKind::Ellipsis,
            GoToken::Arrow => TokenKind::Arrow,
            GoToken::LParen => TokenKind::LParen,
            GoToken::RParen => TokenKind::RParen,
            GoToken::LBrace => TokenKind::LBrace,
            GoToken::RBrace => TokenKind::RBrace,
            GoToken::LBrack => TokenKind::LBrack,
            GoToken::RBrack => TokenKind::RBrack,
            GoToken::Comma => TokenKind::Comma,
            GoToken::Semicolon => TokenKind::Semicolon,
            GoToken::Dot => TokenKind::Dot,
            GoToken::Star => TokenKind::Star,
            GoToken::Op => TokenKind::Op,
        }
    }
}
