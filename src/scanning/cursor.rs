//! Positional reader over the input text
//!
//!     The cursor tracks three byte offsets into the input: the current read
//!     position, the width of the last rune read (so the scanner can back up
//!     over one lookahead rune), and the start of the pending emission, that
//!     is the span accumulated since the last token was taken.

/// Rune-by-rune reader with one-rune backtracking and a pending-emission mark.
///
/// All offsets are byte offsets and always sit on UTF-8 boundaries.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    width: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// The full input being scanned.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current read position as a byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The next rune, advancing the cursor. `None` at end of input.
    pub fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// The next rune without advancing.
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Step back over the last rune read.
    ///
    /// Valid at most once per call to [`next`](Self::next); only the width of
    /// the latest rune is remembered. A no-op after reading end of input.
    pub fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    /// Advance `len` bytes without inspecting them.
    ///
    /// The caller must know the span ends on a rune boundary, e.g. because it
    /// was measured by [`match_fold`](Self::match_fold) or is an ASCII
    /// literal already confirmed by [`at_literal`](Self::at_literal).
    pub fn advance(&mut self, len: usize) {
        self.pos += len;
        self.width = 0;
    }

    /// Discard everything accumulated since the last emission.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// True if anything has accumulated since the last emission.
    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    /// Take the span accumulated since the last emission, marking it emitted.
    pub fn take_pending(&mut self) -> &'a str {
        let pending = &self.input[self.start..self.pos];
        self.start = self.pos;
        pending
    }

    /// True when the remaining input starts with the exact literal.
    pub fn at_literal(&self, literal: &str) -> bool {
        self.input[self.pos..].starts_with(literal)
    }

    /// Case-insensitive prefix test against the remaining input.
    ///
    /// Returns the byte length of the matched input span, which can differ
    /// from the phrase length when the input mixes cases of multi-byte runes.
    pub fn match_fold(&self, phrase: &str) -> Option<usize> {
        let mut rest = self.input[self.pos..].chars();
        let mut matched = 0;
        for expected in phrase.chars() {
            let c = rest.next()?;
            if !c.to_lowercase().eq(expected.to_lowercase()) {
                return None;
            }
            matched += c.len_utf8();
        }
        Some(matched)
    }
}
