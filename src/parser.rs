use crate::cursor::Cursor;

/// Core parser trait for parser combinators
///
/// A parser either succeeds, returning a value and leaving the cursor after
/// the consumed input, or fails with `None`. A failing parser must leave the
/// cursor exactly where it found it.
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the cursor's current position
    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output>;

    /// Parse from the start of `input`, returning the result together with
    /// the cursor as the parse left it
    fn run(&self, input: &'code str) -> (Option<Self::Output>, Cursor<'code>) {
        let mut cursor = Cursor::new(input);
        let result = self.parse(&mut cursor);
        (result, cursor)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser, handy when a combinator chain's type gets unwieldy
pub type BoxedParser<'a, 'code, T> = Box<dyn Parser<'code, Output = T> + 'a>;

/// Parser backed by a plain function or closure
pub struct FnParser<F> {
    run: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(&mut Cursor<'code>) -> Option<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        (self.run)(cursor)
    }
}

/// Build a parser from a function
///
/// The function is responsible for leaving the cursor untouched when it
/// returns `None`.
pub fn from_fn<'code, F, T>(run: F) -> FnParser<F>
where
    F: Fn(&mut Cursor<'code>) -> Option<T>,
{
    FnParser { run }
}

/// Extension trait to erase a parser's concrete type
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'a>(self) -> BoxedParser<'a, 'code, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
