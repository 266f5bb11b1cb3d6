//! Property-based tests for tree rendering.

use proptest::prelude::*;
use pypoet::{Block, ChainKind, Error, Indent, Node, PythonFile, Renderable, Statement};

/// Single-line statement text that never starts with whitespace.
fn statement_text() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_ =().']{0,15}"
}

/// A chain construct, with a condition when it needs one.
fn chain_block() -> impl Strategy<Value = Block> {
    prop_oneof![
        Just(Block::if_("a")),
        Just(Block::elif("b")),
        Just(Block::else_()),
        Just(Block::for_("i", "xs")),
    ]
}

fn nested(depth: usize, leaf: &str) -> Node {
    let mut node: Node = Statement::new(leaf).into();
    for level in 0..depth {
        node = Block::if_(format!("c{level}"))
            .with(node)
            .expect("a statement body is always accepted")
            .into();
    }
    node
}

proptest! {
    /// Top-level statements render in exactly the order they were appended.
    #[test]
    fn prop_append_order_is_render_order(texts in prop::collection::vec(statement_text(), 0..40)) {
        let mut file = PythonFile::new();
        for text in &texts {
            file.append(Statement::new(text.as_str())).unwrap();
        }

        let lines: Vec<String> = file.render(0).collect();
        prop_assert_eq!(lines, texts);
    }

    /// Block children keep append order one level deeper than the header.
    #[test]
    fn prop_block_children_keep_order(texts in prop::collection::vec(statement_text(), 1..20)) {
        let mut block = Block::for_("x", "xs");
        for text in &texts {
            block.push_statement(text.as_str());
        }

        let lines: Vec<String> = block.render(0).collect();
        prop_assert_eq!(&lines[0], "for x in xs:");
        let expected: Vec<String> = texts.iter().map(|t| format!("    {t}")).collect();
        prop_assert_eq!(&lines[1..], &expected[..]);
    }

    /// A node nested in `d` blocks is prefixed by exactly `d` indent units.
    #[test]
    fn prop_indentation_matches_depth(depth in 0usize..8, tab in any::<bool>()) {
        let indent = if tab { Indent::Tab } else { Indent::PEP8 };
        let mut file = PythonFile::new().with_indent(indent);
        file.append(nested(depth, "leaf()")).unwrap();

        let source = file.to_source();
        let lines: Vec<&str> = source.lines().collect();
        prop_assert_eq!(lines.len(), depth + 1);
        for (level, line) in lines.iter().enumerate() {
            let prefix = indent.as_str().repeat(level);
            prop_assert!(line.starts_with(&prefix));
            prop_assert!(!line[prefix.len()..].starts_with(indent.as_str()));
        }
        prop_assert_eq!(lines[depth].trim_start(), "leaf()");
    }

    /// Rendering without mutation in between is byte-identical.
    #[test]
    fn prop_render_is_idempotent(depth in 0usize..6, texts in prop::collection::vec(statement_text(), 0..10)) {
        let mut file = PythonFile::new();
        for text in &texts {
            file.append(Statement::new(text.as_str())).unwrap();
        }
        file.append(nested(depth, "x = 1")).unwrap();

        prop_assert_eq!(file.to_source(), file.to_source());
    }

    /// Chain appends succeed exactly when `elif`/`else` follow `if`/`elif`,
    /// and a rejected append leaves the file unchanged.
    #[test]
    fn prop_chain_ordering(blocks in prop::collection::vec(chain_block(), 1..12)) {
        let mut file = PythonFile::new();
        for block in blocks {
            let kind = block.kind().chain();
            let previous = file.nodes().last().and_then(Node::chain);
            let before = file.clone();

            let result = file.append(block).map(|_| ());
            let allowed = match kind {
                Some(ChainKind::Elif | ChainKind::Else) => {
                    matches!(previous, Some(ChainKind::If | ChainKind::Elif))
                }
                _ => true,
            };

            if allowed {
                prop_assert!(result.is_ok());
                prop_assert_eq!(file.nodes().len(), before.nodes().len() + 1);
            } else {
                prop_assert!(
                    matches!(result, Err(Error::Ordering { .. })),
                    "expected an ordering error, got {:?}",
                    result
                );
                prop_assert_eq!(&file, &before);
            }
        }
    }
}
