use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        // The inner parser leaves the cursor alone on failure, nothing to undo here
        let value = self.parser.parse(cursor)?;
        Some((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{double, int};
    use crate::utf8::char::char;
    use crate::utf8::literal;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
    }

    #[test]
    fn test_map_char_to_uppercase() {
        let mut cursor = Cursor::new("a");
        let parser = char().map(|c| c.to_ascii_uppercase());

        assert_eq!(parser.parse(&mut cursor), Some('A'));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_integer_to_string() {
        let mut cursor = Cursor::new("123");
        let parser = int().map(|num| format!("Number: {}", num));

        assert_eq!(parser.parse(&mut cursor).as_deref(), Some("Number: 123"));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_to_enum() {
        let mut cursor = Cursor::new("X1");
        let letter = char().map(Token::Letter);
        let number = int().map(Token::Number);

        assert_eq!(letter.parse(&mut cursor), Some(Token::Letter('X')));
        assert_eq!(number.parse(&mut cursor), Some(Token::Number(1)));
    }

    #[test]
    fn test_map_chaining() {
        let mut cursor = Cursor::new("2.5");
        let parser = double().map(|d| d * 2.0).map(|d| d as i64).map(|n| n + 1);

        assert_eq!(parser.parse(&mut cursor), Some(6));
    }

    #[test]
    fn test_map_preserves_failure() {
        let mut cursor = Cursor::new("xyz");
        let parser = literal("abc").map(|_| 1);

        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "xyz");
    }

    #[test]
    fn test_function_syntax() {
        let mut cursor = Cursor::new("9");
        let parser = map(int(), |n| n * 10);

        assert_eq!(parser.parse(&mut cursor), Some(90));
    }
}
