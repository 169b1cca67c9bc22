use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser that matches a run of ASCII digits and returns it as an i64
///
/// An empty run, or one too large for i64, fails without consuming input.
pub fn int<'code>() -> impl Parser<'code, Output = i64> {
    IntParser
}

struct IntParser;

impl<'code> Parser<'code> for IntParser {
    type Output = i64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let digits = cursor.prefix_while(|c| c.is_ascii_digit());

        // Overflow and the empty run both surface as a conversion error
        let value = digits.parse::<i64>().ok()?;

        // Every digit is a single character
        cursor.advance(digits.len());
        Some(value)
    }
}
