use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser that consumes and returns a single character
pub struct CharParser;

impl<'code> Parser<'code> for CharParser {
    type Output = char;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let ch = cursor.peek()?;
        cursor.advance(1);
        Some(ch)
    }
}

/// Convenience function to create a CharParser
pub fn char() -> CharParser {
    CharParser
}
