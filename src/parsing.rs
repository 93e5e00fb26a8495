//! Tree builder over the scanner's token stream
//!
//!     Building is a single fold: pull one token at a time from the scanner
//!     and grow the tree under a Root node. Text and Link tokens become
//!     children of Root; a MoveDestination token becomes a MoveAction node
//!     under the link it follows. End terminates the build, Error turns into
//!     a [`ParseError`] carrying the scanner's message, the input consumed up
//!     to the failure, and the tree built so far.
//!
//!     The grammar only ever emits a MoveDestination directly after a Link,
//!     because the scanner reaches the destination state solely by consuming
//!     a move phrase that itself can only occur right after a link. The
//!     builder still guards the attachment with a debug assertion; tripping
//!     it would be a scanner bug, not a malformed message.

use std::fmt;

use crate::ast::{Node, NodeKind};
use crate::scanning::Scanner;
use crate::token::TokenKind;

/// Failure to parse a commit message.
///
/// The only recoverable error the core knows: a card link prefix with no
/// identifier after it. Everything scanned before the malformed link stays
/// inspectable through [`partial_tree`](ParseError::partial_tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    consumed: String,
    partial: Node,
}

impl ParseError {
    /// The scanner's error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input consumed before scanning stopped.
    pub fn consumed(&self) -> &str {
        &self.consumed
    }

    /// The tree built before scanning stopped.
    pub fn partial_tree(&self) -> &Node {
        &self.partial
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error [{}] near \"{}\"", self.message, self.consumed)
    }
}

impl std::error::Error for ParseError {}

/// Parse a commit message into its tree.
///
/// Always builds a Root-rooted tree: zero children for empty input, one Text
/// child for all-whitespace input. Each call owns an independent scanner, so
/// separate parses share no state.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut root = Node::root();
    loop {
        let token = scanner.next_token();
        match token.kind() {
            TokenKind::End => break,
            TokenKind::Error => {
                return Err(ParseError {
                    message: token.text().to_string(),
                    consumed: scanner.consumed().to_string(),
                    partial: root,
                });
            }
            TokenKind::Text => root.add_child(Node::new(NodeKind::Text, token.text())),
            TokenKind::Link => root.add_child(Node::new(NodeKind::Link, token.text())),
            TokenKind::MoveDestination => match root.last_child_mut() {
                Some(link) if link.kind() == NodeKind::Link => {
                    link.add_child(Node::new(NodeKind::MoveAction, token.text()));
                }
                _ => debug_assert!(false, "move destination without a preceding link"),
            },
        }
    }
    Ok(root)
}
