use crate::cursor::Cursor;
use crate::parser::Parser;

const DECIMAL_POINT: char = '.';

/// Parser that matches a decimal number made of ASCII digits and at most one
/// decimal point, returning it as an f64
///
/// The run stops in front of a second decimal point, so `"0.1.2"` yields
/// `0.1` and leaves `".2"`. Whatever run was collected is handed to the
/// standard float conversion and its verdict is final: `".5"` parses, a lone
/// `"."` does not.
pub fn double<'code>() -> impl Parser<'code, Output = f64> {
    DoubleParser
}

struct DoubleParser;

impl<'code> Parser<'code> for DoubleParser {
    type Output = f64;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let mut seen_point = false;
        let run = cursor.prefix_while(|c| match c {
            DECIMAL_POINT if !seen_point => {
                seen_point = true;
                true
            }
            c => c.is_ascii_digit(),
        });

        let value = run.parse::<f64>().ok()?;

        cursor.advance(run.len());
        Some(value)
    }
}
