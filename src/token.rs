//! Token types emitted by the scanner
//!
//!     A token is a classified span of the commit message. Tokens arrive in
//!     document order and partition the input into contiguous spans, except
//!     for the separators the grammar consumes outright: the move-instruction
//!     keywords, the newline terminating a destination, and the free text
//!     trailing a link up to the first whitespace.
//!
//!     The stream is terminated by a single End token, or by an Error token
//!     when scanning halts on a malformed link. After either, the scanner
//!     keeps answering End.

use std::fmt;

/// Classification of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain commit message text.
    Text,
    /// A trello card link: the fixed URL prefix plus the card identifier.
    Link,
    /// The destination list named by a move instruction.
    MoveDestination,
    /// End of input; the stream carries exactly one, possibly after an Error.
    End,
    /// Scanning failed; the token text holds the message, not input.
    Error,
}

/// A token returned from the scanner.
///
/// `text` is the exact substring of the input covered by the token, except
/// for [`TokenKind::Error`] where it is a human-readable message and
/// [`TokenKind::End`] where it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn end() -> Self {
        Token::new(TokenKind::End, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::End => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ => {
                if self.text.chars().count() > 10 {
                    let head: String = self.text.chars().take(10).collect();
                    write!(f, "{head:?}...")
                } else {
                    write!(f, "{:?}", self.text)
                }
            }
        }
    }
}
