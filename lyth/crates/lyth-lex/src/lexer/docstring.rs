//! `"""`-delimited docstrings, finalized to a single token in one shot
//! rather than aggregated character by character — unlike every other
//! token family, a docstring's content is opaque text, not something built
//! out of the symbol/keyword/numeral grammar.

use lyth_util::error::LythErrorKind;
use lyth_util::{Result, SourceOrigin, SyntaxError};

use crate::token::{Lexeme, LiteralKind, Token, TokenKind};

use super::core::Lexer;

impl Lexer {
    /// Called once the opening `"` of a `"""..."""` docstring has been
    /// consumed by the caller.
    pub(crate) fn lex_docstring(&mut self) -> Result<Token> {
        let start_line = self.scanner.line();
        let start_column = self.scanner.column() - 1;
        let origin = SourceOrigin::new(
            self.scanner.filename().to_string(),
            start_line,
            start_column,
            self.scanner.current_line().to_string(),
        );

        for _ in 0..2 {
            match self.scanner.next_char() {
                Some('"') => {}
                _ => return Err(SyntaxError::new(LythErrorKind::SyntaxError, origin)),
            }
        }

        let mut text = String::new();
        let mut quotes_seen = 0;
        loop {
            match self.scanner.next_char() {
                None => return Err(SyntaxError::new(LythErrorKind::IncompleteLine, origin)),
                Some('"') => {
                    quotes_seen += 1;
                    if quotes_seen == 3 {
                        break;
                    }
                }
                Some(c) => {
                    for _ in 0..quotes_seen {
                        text.push('"');
                    }
                    quotes_seen = 0;
                    text.push(c);
                }
            }
        }

        let sym = self.table.intern(&text);
        Ok(Token::new(TokenKind::Literal(LiteralKind::Doc), Lexeme::Doc(sym), origin))
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;

    #[test]
    fn lexes_docstring_contents() {
        let mut lexer = Lexer::new("<test>", "\"\"\"hello\"\"\"\n");
        let tok = lexer.next_token().unwrap();
        assert!(matches!(tok.kind, crate::token::TokenKind::Literal(crate::token::LiteralKind::Doc)));
    }
}
