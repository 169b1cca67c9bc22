use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives start from the same position. A failing alternative
/// leaves the cursor untouched, so the second one sees the original input.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        self.parser1
            .parse(cursor)
            .or_else(|| self.parser2.parse(cursor))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::utf8::literal;
    use crate::zip::zip;

    #[test]
    fn test_or_first_succeeds() {
        let mut cursor = Cursor::new("abc");
        let parser = or(literal("a").map(|_| 'a'), literal("b").map(|_| 'b'));

        assert_eq!(parser.parse(&mut cursor), Some('a'));
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let mut cursor = Cursor::new("bcd");
        let parser = or(literal("a").map(|_| 'a'), literal("b").map(|_| 'b'));

        assert_eq!(parser.parse(&mut cursor), Some('b'));
        assert_eq!(cursor.remaining(), "cd");
    }

    #[test]
    fn test_or_both_fail() {
        let mut cursor = Cursor::new("xyz");
        let parser = literal("a").or(literal("b"));

        assert_eq!(parser.parse(&mut cursor), None);
        assert_eq!(cursor.remaining(), "xyz");
    }

    #[test]
    fn test_or_backtracks_over_partial_match() {
        let mut cursor = Cursor::new("abd");
        // The first branch matches "ab" before failing on 'c'
        let parser = zip((literal("ab"), literal("c")))
            .map(|_| 1)
            .or(literal("abd").map(|_| 2));

        assert_eq!(parser.parse(&mut cursor), Some(2));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_or_method_chain() {
        let mut cursor = Cursor::new("c");
        let parser = literal("a").or(literal("b")).or(literal("c"));

        assert_eq!(parser.parse(&mut cursor), Some(()));
        assert!(cursor.is_empty());
    }
}
