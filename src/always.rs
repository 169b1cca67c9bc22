use crate::cursor::Cursor;
use crate::parser::Parser;

/// Parser that always succeeds without consuming input and returns a clone of its value
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    pub fn new(value: T) -> Self {
        Always { value }
    }
}

impl<'code, T> Parser<'code> for Always<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        Some(self.value.clone())
    }
}

/// Convenience function to create an Always parser
pub fn always<T>(value: T) -> Always<T>
where
    T: Clone,
{
    Always::new(value)
}
