//! Property-based tests for the commit message parser
//!
//! Structured messages are generated line by line so the expected tree is
//! known by construction; arbitrary strings check determinism and the
//! structural invariants of the tree.

use cmsg_parser::{parse, Node, NodeKind, CARD_LINK_PREFIX};
use proptest::prelude::*;

/// One generated line of a commit message.
#[derive(Debug, Clone)]
enum Line {
    Text(String),
    Link {
        id: String,
        slug: Option<String>,
        destination: Option<String>,
    },
}

/// Plain text content; the charset has no `:` or `/`, so a generated text
/// line can never contain the card link prefix.
fn text_line() -> impl Strategy<Value = Line> {
    "[A-Za-z0-9 .,!?()-]{0,30}".prop_map(Line::Text)
}

fn link_line() -> impl Strategy<Value = Line> {
    (
        "[a-z0-9]{1,8}",
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of("[A-Za-z0-9][A-Za-z0-9 ]{0,14}"),
    )
        .prop_map(|(id, slug, destination)| Line::Link {
            id,
            slug,
            destination,
        })
}

fn message() -> impl Strategy<Value = Vec<Line>> {
    proptest::collection::vec(prop_oneof![text_line(), link_line()], 0..8)
}

fn render(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            Line::Text(text) => out.push_str(text),
            Line::Link {
                id,
                slug,
                destination,
            } => {
                out.push_str(CARD_LINK_PREFIX);
                out.push_str(id);
                if let Some(slug) = slug {
                    out.push('/');
                    out.push_str(slug);
                }
                if let Some(destination) = destination {
                    out.push_str(" move to ");
                    out.push_str(destination);
                }
            }
        }
        out.push('\n');
    }
    out
}

/// The tree shape a rendered message must produce: consecutive text lines
/// coalesce into one Text node; every link line becomes a Link node carrying
/// its destination, if any, as a MoveAction child.
fn expected_children(lines: &[Line]) -> Vec<(NodeKind, String, Option<String>)> {
    let mut children = Vec::new();
    let mut pending_text = String::new();
    for line in lines {
        match line {
            Line::Text(text) => {
                pending_text.push_str(text);
                pending_text.push('\n');
            }
            Line::Link {
                id, destination, ..
            } => {
                if !pending_text.is_empty() {
                    children.push((NodeKind::Text, std::mem::take(&mut pending_text), None));
                }
                children.push((
                    NodeKind::Link,
                    format!("{CARD_LINK_PREFIX}{id}"),
                    destination.clone(),
                ));
            }
        }
    }
    if !pending_text.is_empty() {
        children.push((NodeKind::Text, pending_text, None));
    }
    children
}

/// Every MoveAction hangs under a Link, and each Link carries at most one.
fn assert_attachment_invariants(node: &Node) {
    let move_children = node
        .children()
        .iter()
        .filter(|c| c.kind() == NodeKind::MoveAction)
        .count();
    match node.kind() {
        NodeKind::Link => assert!(move_children <= 1),
        _ => assert_eq!(move_children, 0),
    }
    for child in node.children() {
        assert_attachment_invariants(child);
    }
}

proptest! {
    #[test]
    fn structured_messages_produce_the_expected_tree(lines in message()) {
        let input = render(&lines);
        let root = parse(&input).unwrap();
        let expected = expected_children(&lines);

        prop_assert_eq!(root.children().len(), expected.len());
        for (child, (kind, value, destination)) in root.children().iter().zip(&expected) {
            prop_assert_eq!(child.kind(), *kind);
            prop_assert_eq!(child.value(), value);
            match destination {
                Some(destination) => {
                    prop_assert_eq!(child.children().len(), 1);
                    prop_assert_eq!(child.children()[0].kind(), NodeKind::MoveAction);
                    prop_assert_eq!(child.children()[0].value(), destination);
                }
                None => prop_assert!(child.children().is_empty()),
            }
        }
    }

    #[test]
    fn parsing_is_deterministic(input in any::<String>()) {
        prop_assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn trees_satisfy_structural_invariants(input in any::<String>()) {
        let root = match parse(&input) {
            Ok(root) => root,
            Err(err) => err.partial_tree().clone(),
        };
        assert_eq!(root.kind(), NodeKind::Root);
        for child in root.children() {
            assert!(matches!(child.kind(), NodeKind::Text | NodeKind::Link));
        }
        assert_attachment_invariants(&root);
    }

    #[test]
    fn link_free_input_is_a_single_text_node(input in "[A-Za-z0-9 \n.,!?()-]{1,80}") {
        let root = parse(&input).unwrap();
        prop_assert_eq!(root.children().len(), 1);
        prop_assert_eq!(root.children()[0].kind(), NodeKind::Text);
        prop_assert_eq!(root.children()[0].value(), input);
    }
}
