//! Token types produced by the [`crate::lexer::Lexer`].

use lyth_util::{SourceOrigin, Symbol};

/// Single- and multi-character symbols recognized by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Add,       // +
    Sub,       // -
    Mul,       // *
    Div,       // /
    Floor,     // //
    MutAssign, // <-
    ImmAssign, // ->
    Colon,     // :
    LParen,    // (
    RParen,    // )
    Eq,        // ==
    Ne,        // !=
    Le,        // <=
    Ge,        // >=
    Lt,        // <
    Gt,        // >
    Assign,    // =
    Dot,       // .
    DotDot,    // ..
    Inc,       // ++
    Dec,       // --
    AddAssign, // +=
}

impl SymbolKind {
    pub fn lexeme(self) -> &'static str {
        match self {
            SymbolKind::Add => "+",
            SymbolKind::Sub => "-",
            SymbolKind::Mul => "*",
            SymbolKind::Div => "/",
            SymbolKind::Floor => "//",
            SymbolKind::MutAssign => "<-",
            SymbolKind::ImmAssign => "->",
            SymbolKind::Colon => ":",
            SymbolKind::LParen => "(",
            SymbolKind::RParen => ")",
            SymbolKind::Eq => "==",
            SymbolKind::Ne => "!=",
            SymbolKind::Le => "<=",
            SymbolKind::Ge => ">=",
            SymbolKind::Lt => "<",
            SymbolKind::Gt => ">",
            SymbolKind::Assign => "=",
            SymbolKind::Dot => ".",
            SymbolKind::DotDot => "..",
            SymbolKind::Inc => "++",
            SymbolKind::Dec => "--",
            SymbolKind::AddAssign => "+=",
        }
    }

    /// Attempts to classify a fully-aggregated lexeme as a known symbol.
    ///
    /// The grammar in §4.3 only ever *consumes* `+ - * / // <- -> ( ) :`;
    /// the rest of the table exists because §3's data model reserves the
    /// spellings regardless, so a lone `<` or `==` lexes cleanly (and is
    /// rejected later, at the parser, as an unexpected token) instead of
    /// failing at the character level with `InvalidCharacter`.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        crate::lexer::operator::SYMBOLS
            .iter()
            .find(|(text, _)| *text == lexeme)
            .map(|(_, kind)| *kind)
    }
}

/// Reserved words. Only `Let` and `Be` drive a grammar production today;
/// the rest are reserved per §3's data model so they cannot be used as
/// identifiers, even though no statement form consumes them yet (the same
/// "accepted, not yet evaluated" treatment the analyzer gives `Class`/`Type`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Let,
    Be,
    If,
    For,
    In,
    Is,
    At,
    Of,
    And,
    Or,
    Not,
    True,
    False,
    None,
    With,
    From,
    Import,
}

impl KeywordKind {
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "let" => KeywordKind::Let,
            "be" => KeywordKind::Be,
            "if" => KeywordKind::If,
            "for" => KeywordKind::For,
            "in" => KeywordKind::In,
            "is" => KeywordKind::Is,
            "at" => KeywordKind::At,
            "of" => KeywordKind::Of,
            "and" => KeywordKind::And,
            "or" => KeywordKind::Or,
            "not" => KeywordKind::Not,
            "true" => KeywordKind::True,
            "false" => KeywordKind::False,
            "none" => KeywordKind::None,
            "with" => KeywordKind::With,
            "from" => KeywordKind::From,
            "import" => KeywordKind::Import,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Value,
    Name,
    Doc,
}

/// The finalized payload carried by a token, once aggregation is complete.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    Int(i64),
    Text(Symbol),
    Indent(u32),
    Symbol(SymbolKind),
    Keyword(KeywordKind),
    Doc(Symbol),
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Symbol(SymbolKind),
    Keyword(KeywordKind),
    Literal(LiteralKind),
    Indent,
    Eol,
    Eof,
}

/// A single lexical token, carrying both its classification and the
/// location it came from for diagnostic rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
    pub origin: SourceOrigin,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Lexeme, origin: SourceOrigin) -> Self {
        Self { kind, lexeme, origin }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn as_symbol(&self) -> Option<SymbolKind> {
        match self.kind {
            TokenKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> Option<KeywordKind> {
        match self.kind {
            TokenKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        match &self.lexeme {
            Lexeme::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<Symbol> {
        match &self.lexeme {
            Lexeme::Text(s) => Some(*s),
            _ => None,
        }
    }

    pub fn doc(&self) -> Option<Symbol> {
        match &self.lexeme {
            Lexeme::Doc(s) => Some(*s),
            _ => None,
        }
    }

    pub fn indent_level(&self) -> Option<u32> {
        match &self.lexeme {
            Lexeme::Indent(n) => Some(*n),
            _ => None,
        }
    }
}
