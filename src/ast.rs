//! Parse tree for commit messages
//!
//!     The tree is rooted at a single Root node whose children are, in
//!     document order, every Text and Link node of the message. A move
//!     instruction becomes a MoveAction node attached under the Link it
//!     follows; a Link carries at most one.
//!
//!     Parents exclusively own their children. Traversal is strictly root to
//!     leaf, so nodes carry no back-pointers, and nothing is mutated or
//!     removed once building finishes.

use serde::Serialize;
use std::fmt;

/// The type of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// The singular tree entry point; its value is empty.
    Root,
    /// Plain commit message text.
    Text,
    /// A trello card link.
    Link,
    /// A request to move the parent Link's card to the named list.
    MoveAction,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Root => "RootNode",
            NodeKind::Text => "TextNode",
            NodeKind::Link => "LinkNode",
            NodeKind::MoveAction => "MoveActionNode",
        };
        write!(f, "{name}")
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: NodeKind,
    value: String,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node::new(NodeKind::Root, "")
    }

    pub(crate) fn new(kind: NodeKind, value: impl Into<String>) -> Self {
        Node {
            kind,
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The token text that produced this node; empty for Root.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The node's children, in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn last_child_mut(&mut self) -> Option<&mut Node> {
        self.children.last_mut()
    }

    /// The card moves requested by the message, as (link, destination) pairs
    /// in document order.
    ///
    /// This is the view a downstream integration acts on; issuing the actual
    /// move request is the host application's business.
    pub fn card_moves(&self) -> Vec<(&str, &str)> {
        self.children
            .iter()
            .filter(|child| child.kind == NodeKind::Link)
            .filter_map(|link| {
                link.children
                    .iter()
                    .find(|c| c.kind == NodeKind::MoveAction)
                    .map(|action| (link.value.as_str(), action.value.as_str()))
            })
            .collect()
    }

    /// Serialize the tree as a JSON value for tooling that inspects parse
    /// results.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_names() {
        assert_eq!(NodeKind::Root.to_string(), "RootNode");
        assert_eq!(NodeKind::Text.to_string(), "TextNode");
        assert_eq!(NodeKind::Link.to_string(), "LinkNode");
        assert_eq!(NodeKind::MoveAction.to_string(), "MoveActionNode");
    }

    #[test]
    fn test_card_moves_skips_links_without_action() {
        let mut root = Node::root();
        root.add_child(Node::new(NodeKind::Link, "https://trello.com/c/aaa"));
        let mut linked = Node::new(NodeKind::Link, "https://trello.com/c/bbb");
        linked.add_child(Node::new(NodeKind::MoveAction, "Done"));
        root.add_child(linked);
        root.add_child(Node::new(NodeKind::Text, "tail\n"));

        assert_eq!(
            root.card_moves(),
            vec![("https://trello.com/c/bbb", "Done")]
        );
    }
}
