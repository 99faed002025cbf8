//! Code-point cursor over source text.
//!
//! End of input is `None`. Reading past the end is counted rather than
//! ignored, so every [`Scanner::next`] can be undone by exactly one
//! [`Scanner::backup`], including reads that returned `None`.

use tracing::trace;

#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    src: &'src str,
    pos: usize,
    over_eof: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Scanner {
            src,
            pos: 0,
            over_eof: 0,
        }
    }

    /// Byte offset of the next code point.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Next code point without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Consume and return the next code point.
    pub fn next(&mut self) -> Option<char> {
        let c = self.peek();
        match c {
            Some(c) => self.pos += c.len_utf8(),
            None => self.over_eof += 1,
        }
        c
    }

    /// Undo the last [`next`](Self::next).
    pub fn backup(&mut self) {
        if self.over_eof > 0 {
            self.over_eof -= 1;
            return;
        }
        if let Some(c) = self.src[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
        } else {
            trace!("scanner backup at start of input");
        }
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.src[self.pos..].starts_with(prefix)
    }

    /// Source text in `from..self.pos()`.
    pub fn since(&self, from: usize) -> &'src str {
        &self.src[from..self.pos]
    }
}
