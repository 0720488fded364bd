//! Operator/punctuation table, separated from [`super::core`] so the
//! recognized multi-character symbols live in one place.

use crate::token::SymbolKind;

/// All one- and two-character spellings the lexer recognizes, longest
/// first so a greedy two-character match is tried before falling back to a
/// one-character one.
pub const SYMBOLS: &[(&str, SymbolKind)] = &[
    ("//", SymbolKind::Floor),
    ("<-", SymbolKind::MutAssign),
    ("->", SymbolKind::ImmAssign),
    ("==", SymbolKind::Eq),
    ("!=", SymbolKind::Ne),
    ("<=", SymbolKind::Le),
    (">=", SymbolKind::Ge),
    ("..", SymbolKind::DotDot),
    ("++", SymbolKind::Inc),
    ("--", SymbolKind::Dec),
    ("+=", SymbolKind::AddAssign),
    ("+", SymbolKind::Add),
    ("-", SymbolKind::Sub),
    ("*", SymbolKind::Mul),
    ("/", SymbolKind::Div),
    (":", SymbolKind::Colon),
    ("(", SymbolKind::LParen),
    (")", SymbolKind::RParen),
    ("<", SymbolKind::Lt),
    (">", SymbolKind::Gt),
    ("=", SymbolKind::Assign),
    (".", SymbolKind::Dot),
];
