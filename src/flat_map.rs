use crate::cursor::Cursor;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that feeds the output of one parser into a function
/// choosing the next parser to run (monadic bind)
///
/// If either step fails the cursor is rewound to where it stood before the
/// first parser ran, so a half-matched chain never leaks consumed input.
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        let start = cursor.checkpoint();

        let Some(value) = self.parser.parse(cursor) else {
            cursor.rewind(start);
            return None;
        };

        let next = (self.binder)(value);
        match next.parse(cursor) {
            Some(output) => Some(output),
            None => {
                trace!(
                    position = cursor.position(),
                    rewind_to = start.position(),
                    "flat_map continuation failed, rewinding"
                );
                cursor.rewind(start);
                None
            }
        }
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
