/// Mutable view over the not-yet-consumed part of an input string
///
/// Parsers receive the cursor by `&mut` and move it forward on success.
/// The cursor is `Copy`, so saving a position is just keeping a copy around;
/// combinators that need to undo work use [`Cursor::checkpoint`] and
/// [`Cursor::rewind`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code str,
    /// Byte offset of the first unconsumed character
    offset: usize,
}

/// A saved cursor position, restored with [`Cursor::rewind`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl Checkpoint {
    /// Byte offset the checkpoint points at
    pub fn position(&self) -> usize {
        self.0
    }
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        Cursor { source, offset: 0 }
    }

    /// Look at the next character without consuming it
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Drop the first `n` characters of the remaining input
    ///
    /// Asking for more characters than are left moves the cursor to the end.
    pub fn advance(&mut self, n: usize) {
        let rest = self.remaining();
        let skipped = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(index, _)| index);
        self.offset += skipped;
    }

    /// The unconsumed part of the input
    pub fn remaining(&self) -> &'code str {
        &self.source[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Byte offset into the original input
    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.offset)
    }

    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.0;
    }

    /// Longest leading run of the remaining input whose characters all satisfy `pred`
    ///
    /// Nothing is consumed.
    pub fn prefix_while<F>(&self, mut pred: F) -> &'code str
    where
        F: FnMut(char) -> bool,
    {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .find(|&(_, ch)| !pred(ch))
            .map_or(rest.len(), |(index, _)| index);
        &rest[..end]
    }
}
