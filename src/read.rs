/// Input source that reads from a slice of bytes.
///
/// The slice is the whole declared range: the reader never looks past its end
/// and needs no terminator. Positions are byte offsets from the start of the
/// slice.
pub(crate) struct SliceRead<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by peek().
    index: usize,
}

impl<'a> SliceRead<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        SliceRead { slice, index: 0 }
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        // `self.slice.get(self.index).copied()` is slower.
        if self.index < self.slice.len() {
            Some(self.slice[self.index])
        } else {
            None
        }
    }

    /// Consumes the next byte if `accept` returns true for it.
    #[inline]
    pub fn next_if(&mut self, accept: impl FnOnce(u8) -> bool) -> Option<u8> {
        match self.peek() {
            Some(ch) if accept(ch) => {
                self.index += 1;
                Some(ch)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn discard(&mut self) {
        debug_assert!(self.index < self.slice.len());
        self.index += 1;
    }

    /// Advances past `n` bytes that the caller has already inspected.
    #[inline]
    pub fn skip(&mut self, n: usize) {
        debug_assert!(n <= self.remaining().len());
        self.index += n;
    }

    /// The unread tail of the input.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.slice[self.index..]
    }

    pub fn is_empty(&self) -> bool {
        self.index == self.slice.len()
    }

    pub fn byte_offset(&self) -> usize {
        self.index
    }

    /// Moves back to an offset previously returned by `byte_offset`.
    pub fn rewind(&mut self, offset: usize) {
        debug_assert!(offset <= self.index);
        self.index = offset;
    }
}
