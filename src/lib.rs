//! # cmsg-parser
//!
//! A parser for trello card references embedded in commit messages.
//!
//! Commit messages may reference trello cards by their card URL and may carry
//! an instruction, directly after the link, to move the referenced card to a
//! named list:
//!
//! ```text
//! Added filtering by dossier codes
//! https://trello.com/c/skumba move to Done
//! ```
//!
//! Processing runs in two stages:
//!
//!     1. Scanning: a pull-based lexical state machine classifies spans of the
//!        message as plain text, card links, or move destinations. See the
//!        [scanning](scanning) module.
//!
//!     2. Tree building: the token stream is folded into a rooted, ordered
//!        tree that records which destination belongs to which link. See the
//!        [parsing](parsing) module.
//!
//! The crate owns no network or tracker interaction. Downstream integrations
//! walk the tree (or call [`Node::card_moves`]) and issue whatever move
//! requests the host application defines.
//!
//! ```
//! use cmsg_parser::{parse, NodeKind};
//!
//! let tree = parse("Fix login\nhttps://trello.com/c/abc123 move to Done\n").unwrap();
//! assert_eq!(tree.children().len(), 2);
//! assert_eq!(tree.children()[1].kind(), NodeKind::Link);
//! assert_eq!(tree.card_moves(), vec![("https://trello.com/c/abc123", "Done")]);
//! ```

pub mod ast;
pub mod parsing;
pub mod scanning;
pub mod token;

pub use ast::{Node, NodeKind};
pub use parsing::{parse, ParseError};
pub use scanning::{Scanner, CARD_LINK_PREFIX};
pub use token::{Token, TokenKind};
