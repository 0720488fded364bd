//! Identifier classification.
//!
//! Keywords are recognized later, by [`super::core::Lexer::finalize`]
//! checking [`crate::token::KeywordKind::from_text`] before falling back to
//! a plain name — an identifier is simply "anything keyword lookup didn't
//! claim".

pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
