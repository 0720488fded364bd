//! Numeral classification.
//!
//! A numeral aggregates as a run of ASCII digits only — a leading `+`/`-`
//! is always its own token (see [`super::core::Lexer::try_extend`]'s
//! recovery rule), so by the time text reaches here it never carries a
//! sign.

pub fn is_numeral(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_unsigned_numerals_only() {
        assert!(is_numeral("42"));
        assert!(!is_numeral("-5"));
        assert!(!is_numeral("+5"));
        assert!(!is_numeral(""));
        assert!(!is_numeral("4a"));
    }
}
