//! Scanner for commit message text
//!
//!     The scanner turns raw message text into the token stream described in
//!     the [token](crate::token) module. It is a lexical state machine: each
//!     state inspects the input at the current cursor position, decides the
//!     next state, and may emit one token.
//!
//!     The machine is pull-based. Nothing runs in the background; the caller
//!     (normally the tree builder in [parsing](crate::parsing)) requests one
//!     token at a time and the scanner advances its cursor only as far as
//!     needed to produce it. Abandoning a scan mid-stream leaks nothing, and
//!     two parses never share state.
//!
//! States
//!
//!     TEXT                     plain message text, up to a card link or EOF
//!     LINK                     the card URL prefix plus identifier
//!     AFTER_LINK               discarded free text trailing the identifier
//!     AFTER_LINK_INSTRUCTIONS  the optional case-insensitive move phrase
//!     MOVE_DESTINATION         the named list, up to newline or EOF
//!
//!     The single error case is a link prefix with no identifier after it.
//!     It halts scanning permanently; further requests answer End.

pub mod cursor;
pub mod scanner;

pub use cursor::Cursor;
pub use scanner::{Scanner, CARD_LINK_PREFIX};
