use crate::cursor::Cursor;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
pub struct Never<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Never<T> {
    pub fn new() -> Self {
        Never {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Never<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T> Parser<'code> for Never<T> {
    type Output = T;

    fn parse(&self, _cursor: &mut Cursor<'code>) -> Option<Self::Output> {
        None
    }
}

/// Convenience function to create a Never parser
pub fn never<T>() -> Never<T> {
    Never::new()
}
