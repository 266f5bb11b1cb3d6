//! Tree nodes and the child sequence shared by blocks and files.

use pypoet_codegen::{CodeFragment, Renderable};
use tracing::debug;

use super::{Block, ChainKind, Statement};
use crate::{Error, Result};

/// Any element that can be appended to a block or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Statement(Statement),
    Block(Block),
}

impl Node {
    /// The conditional chain kind, if this node is an `if`/`elif`/`else` block.
    pub fn chain(&self) -> Option<ChainKind> {
        match self {
            Self::Block(block) => block.kind().chain(),
            Self::Statement(_) => None,
        }
    }

    /// Short human-readable description used in error messages.
    fn describe(&self) -> String {
        match self {
            Self::Statement(stmt) => format!("statement `{}`", stmt.text()),
            Self::Block(block) => format!("`{}` block", block.kind().keyword()),
        }
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Self::Statement(stmt)
    }
}

impl From<Block> for Node {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl Renderable for Node {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Statement(stmt) => stmt.to_fragments(),
            Self::Block(block) => block.to_fragments(),
        }
    }
}

/// Ordered, append-only child sequence.
///
/// All validation happens in [`Suite::push`] before anything is stored, so
/// a rejected node leaves the sequence untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Suite {
    nodes: Vec<Node>,
}

impl Suite {
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) -> Result<()> {
        if let Node::Block(block) = &node {
            block.kind().validate().inspect_err(|err| {
                debug!(kind = block.kind().keyword(), reason = %err, "rejected malformed block");
            })?;
            self.check_chain(block.kind().chain())?;
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Statements can never break a chain rule, so they skip validation.
    pub(crate) fn push_statement(&mut self, stmt: Statement) {
        self.nodes.push(Node::Statement(stmt));
    }

    fn check_chain(&self, chain: Option<ChainKind>) -> Result<()> {
        let kind = match chain {
            Some(kind @ (ChainKind::Elif | ChainKind::Else)) => kind,
            _ => return Ok(()),
        };

        let last = self.nodes.last();
        if matches!(
            last.and_then(Node::chain),
            Some(ChainKind::If | ChainKind::Elif)
        ) {
            return Ok(());
        }

        let found = last.map_or_else(|| "no preceding sibling".to_string(), Node::describe);
        debug!(kind = %kind, found = %found, "rejected out-of-order chain block");
        Err(Error::ordering(kind, found))
    }
}

impl Renderable for Suite {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.nodes.iter().flat_map(Node::to_fragments).collect()
    }
}
