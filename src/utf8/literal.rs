use crate::cursor::Cursor;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact, case-sensitive string prefix
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for LiteralParser {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        if !cursor.remaining().starts_with(self.expected.as_ref()) {
            return None;
        }
        cursor.advance(self.expected.chars().count());
        Some(())
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(literal("hello").parse(&mut cursor), Some(()));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let mut cursor = Cursor::new("hello world");
        assert_eq!(literal("hello").parse(&mut cursor), Some(()));
        assert_eq!(cursor.remaining(), " world");
    }

    #[test]
    fn test_degree_sign() {
        let mut cursor = Cursor::new("° N, 73° W");
        assert_eq!(literal("° ").parse(&mut cursor), Some(()));
        assert_eq!(cursor.remaining(), "N, 73° W");
    }

    #[test]
    fn test_owned_string() {
        let separator = String::from(", ");
        let mut cursor = Cursor::new(", next");
        assert_eq!(literal(separator).parse(&mut cursor), Some(()));
        assert_eq!(cursor.remaining(), "next");
    }

    #[test]
    fn test_empty_literal() {
        let mut cursor = Cursor::new("hello");
        assert_eq!(literal("").parse(&mut cursor), Some(()));
        assert_eq!(cursor.remaining(), "hello");
    }

    #[test]
    fn test_mismatch_first_char() {
        let mut cursor = Cursor::new("world");
        assert_eq!(literal("hello").parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "world");
    }

    #[test]
    fn test_mismatch_middle_char() {
        let mut cursor = Cursor::new("help");
        assert_eq!(literal("hello").parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "help");
    }

    #[test]
    fn test_insufficient_input() {
        let mut cursor = Cursor::new("hel");
        assert_eq!(literal("hello").parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "hel");
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new("");
        assert_eq!(literal("hello").parse(&mut cursor), None);
    }

    #[test]
    fn test_case_sensitive() {
        let mut cursor = Cursor::new("Hello");
        assert_eq!(literal("hello").parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "Hello");
    }

    #[test]
    fn test_unicode_literal() {
        let mut cursor = Cursor::new("こんにちは世界");
        assert_eq!(literal("こんにちは").parse(&mut cursor), Some(()));
        assert_eq!(cursor.remaining(), "世界");
    }

    #[test]
    fn test_repeated_failure_no_drift() {
        let mut cursor = Cursor::new("abc");
        let parser = literal("abd");
        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "abc");
    }
}
