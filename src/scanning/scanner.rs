//! Pull-based lexical state machine
//!
//!     Each state is a method that reads runes through the cursor, picks the
//!     next state, and may produce one token. [`Scanner::next_token`] loops
//!     through states until one emits, so every call returns exactly one
//!     token and the machine suspends between calls.
//!
//! Algorithm
//!
//!     1. TEXT accumulates plain runes until the card link prefix or EOF,
//!        emitting the accumulated span as a Text token first.
//!     2. LINK consumes the prefix plus a non-empty run of unreserved runes.
//!        An empty run is the single error case and halts the scan.
//!     3. AFTER_LINK discards the free text trailing the identifier (path
//!        segments on the card URL). A newline returns to TEXT; any other
//!        whitespace hands over to the instruction check.
//!     4. AFTER_LINK_INSTRUCTIONS matches the move phrases case-insensitively
//!        ("move to " before "move ", which is its prefix). Anything else
//!        falls back to plain text, unconsumed.
//!     5. MOVE_DESTINATION accumulates the list name up to `\n`, `\r\n`, or
//!        EOF and emits it as a MoveDestination token; the terminator is
//!        discarded.

use crate::scanning::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// The fixed URL prefix that introduces a card link.
pub const CARD_LINK_PREFIX: &str = "https://trello.com/c/";

// "move to " must be tested before "move ", which is a prefix of it.
const MOVE_TO_PHRASE: &str = "move to ";
const MOVE_PHRASE: &str = "move ";

const INVALID_LINK_MESSAGE: &str = "Invalid trello card link";

// RFC 3986 unreserved marks minus the period, which is a valid unreserved
// character yet not expected in a card shortlink.
const UNRESERVED_MARKS: &str = "-~_";

/// True for runes a card identifier may contain.
fn is_unreserved(c: char) -> bool {
    c.is_alphanumeric() || UNRESERVED_MARKS.contains(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Link,
    AfterLink,
    AfterLinkInstructions,
    MoveDestination,
    Done,
}

/// Lexical scanner over one commit message.
///
/// Produces the token stream on demand: one token per [`next_token`] call.
/// Once End or Error has been produced the scanner answers End forever, so a
/// consumer polling past the end of the stream stays well defined.
///
/// [`next_token`]: Scanner::next_token
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(input),
            state: State::Text,
        }
    }

    /// The input consumed so far, used for error context.
    pub fn consumed(&self) -> &'a str {
        &self.cursor.input()[..self.cursor.pos()]
    }

    /// Produce the next token, advancing the machine just far enough.
    pub fn next_token(&mut self) -> Token {
        loop {
            let emitted = match self.state {
                State::Text => self.scan_text(),
                State::Link => self.scan_link(),
                State::AfterLink => self.scan_after_link(),
                State::AfterLinkInstructions => self.scan_instructions(),
                State::MoveDestination => self.scan_move_destination(),
                State::Done => Some(Token::end()),
            };
            if let Some(token) = emitted {
                return token;
            }
        }
    }

    fn emit(&mut self, kind: TokenKind) -> Option<Token> {
        Some(Token::new(kind, self.cursor.take_pending()))
    }

    fn error(&mut self, message: &str) -> Option<Token> {
        self.state = State::Done;
        Some(Token::new(TokenKind::Error, message))
    }

    /// Plain text up to the card link prefix or EOF.
    fn scan_text(&mut self) -> Option<Token> {
        loop {
            if self.cursor.at_literal(CARD_LINK_PREFIX) {
                self.state = State::Link;
                if self.cursor.has_pending() {
                    return self.emit(TokenKind::Text);
                }
                return None;
            }
            if self.cursor.next().is_none() {
                break;
            }
        }
        self.state = State::Done;
        if self.cursor.has_pending() {
            return self.emit(TokenKind::Text);
        }
        Some(Token::end())
    }

    /// The prefix plus a non-empty run of unreserved identifier runes.
    ///
    /// The Link token covers prefix and identifier; the terminating rune is
    /// left for the next state. An empty identifier is the malformed-link
    /// error, reported with the offending rune included in the consumed span.
    fn scan_link(&mut self) -> Option<Token> {
        self.cursor.advance(CARD_LINK_PREFIX.len());
        let id_start = self.cursor.pos();
        while matches!(self.cursor.peek(), Some(c) if is_unreserved(c)) {
            self.cursor.next();
        }
        if self.cursor.pos() == id_start {
            self.cursor.next();
            return self.error(INVALID_LINK_MESSAGE);
        }
        self.state = State::AfterLink;
        self.emit(TokenKind::Link)
    }

    /// Free text trailing the identifier, discarded rune by rune.
    fn scan_after_link(&mut self) -> Option<Token> {
        loop {
            match self.cursor.next() {
                None => {
                    self.state = State::Done;
                    return Some(Token::end());
                }
                Some('\n') => {
                    self.cursor.ignore();
                    self.state = State::Text;
                    return None;
                }
                Some(c) if c.is_whitespace() => {
                    self.cursor.ignore();
                    self.state = State::AfterLinkInstructions;
                    return None;
                }
                Some(_) => {}
            }
        }
    }

    /// The optional move phrase; everything else falls back to plain text.
    ///
    /// Whitespace consumed while looking for the fallback boundary is kept
    /// pending and surfaces at the front of the next Text token.
    fn scan_instructions(&mut self) -> Option<Token> {
        for phrase in [MOVE_TO_PHRASE, MOVE_PHRASE] {
            if let Some(len) = self.cursor.match_fold(phrase) {
                self.cursor.advance(len);
                self.cursor.ignore();
                self.state = State::MoveDestination;
                return None;
            }
        }
        loop {
            match self.cursor.next() {
                None => {
                    self.state = State::Done;
                    return Some(Token::end());
                }
                Some('\n') => {
                    self.cursor.ignore();
                    self.state = State::Text;
                    return None;
                }
                Some(c) if !c.is_whitespace() => {
                    self.cursor.backup();
                    self.state = State::Text;
                    return None;
                }
                Some(_) => {}
            }
        }
    }

    /// The destination list name, up to `\n`, `\r\n`, or EOF.
    ///
    /// A bare `\r` not followed by `\n` is ordinary destination content. An
    /// empty span emits nothing.
    fn scan_move_destination(&mut self) -> Option<Token> {
        loop {
            match self.cursor.next() {
                None => {
                    self.state = State::Done;
                    if self.cursor.has_pending() {
                        return self.emit(TokenKind::MoveDestination);
                    }
                    return Some(Token::end());
                }
                Some('\r') if self.cursor.peek() == Some('\n') => {
                    self.cursor.backup();
                    let token = self.pending_destination();
                    self.cursor.advance(2);
                    self.cursor.ignore();
                    self.state = State::Text;
                    return token;
                }
                Some('\n') => {
                    self.cursor.backup();
                    let token = self.pending_destination();
                    self.cursor.advance(1);
                    self.cursor.ignore();
                    self.state = State::Text;
                    return token;
                }
                Some(_) => {}
            }
        }
    }

    fn pending_destination(&mut self) -> Option<Token> {
        if self.cursor.has_pending() {
            self.emit(TokenKind::MoveDestination)
        } else {
            None
        }
    }
}
