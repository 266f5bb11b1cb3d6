//! Compound statements: conditionals, loops, functions and classes.

use std::fmt;

use pypoet_codegen::{CodeFragment, Renderable};

use super::{DocString, Node, Statement, Suite, text_lines};
use crate::{Error, Result};

/// Position of a block in an `if`/`elif`/`else` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainKind {
    If,
    Elif,
    Else,
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
        })
    }
}

/// The construct a block opens, with the parts of its header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    If { condition: String },
    Elif { condition: String },
    Else,
    For { target: String, iterable: String },
    While { condition: String },
    Def { name: String, params: Vec<String> },
    Class { name: String, bases: Vec<String> },
}

impl BlockKind {
    /// The Python keyword opening this block.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::If { .. } => "if",
            Self::Elif { .. } => "elif",
            Self::Else => "else",
            Self::For { .. } => "for",
            Self::While { .. } => "while",
            Self::Def { .. } => "def",
            Self::Class { .. } => "class",
        }
    }

    /// The conditional chain this block takes part in, if any.
    pub fn chain(&self) -> Option<ChainKind> {
        match self {
            Self::If { .. } => Some(ChainKind::If),
            Self::Elif { .. } => Some(ChainKind::Elif),
            Self::Else => Some(ChainKind::Else),
            _ => None,
        }
    }

    /// The header line, including the trailing colon.
    pub fn header(&self) -> String {
        match self {
            Self::If { condition } => format!("if {condition}:"),
            Self::Elif { condition } => format!("elif {condition}:"),
            Self::Else => "else:".to_string(),
            Self::For { target, iterable } => format!("for {target} in {iterable}:"),
            Self::While { condition } => format!("while {condition}:"),
            Self::Def { name, params } => format!("def {name}({}):", params.join(", ")),
            Self::Class { name, bases } if bases.is_empty() => format!("class {name}(object):"),
            Self::Class { name, bases } => format!("class {name}({}):", bases.join(", ")),
        }
    }

    /// Reject headers that cannot form a single well-formed line.
    pub(crate) fn validate(&self) -> Result<()> {
        let fields: Vec<(&str, &str)> = match self {
            Self::If { condition } | Self::Elif { condition } | Self::While { condition } => {
                vec![("condition", condition.as_str())]
            }
            Self::Else => Vec::new(),
            Self::For { target, iterable } => {
                vec![("target", target.as_str()), ("iterable", iterable.as_str())]
            }
            Self::Def { name, params } => std::iter::once(("name", name.as_str()))
                .chain(params.iter().map(|p| ("parameter", p.as_str())))
                .collect(),
            Self::Class { name, bases } => std::iter::once(("name", name.as_str()))
                .chain(bases.iter().map(|b| ("base", b.as_str())))
                .collect(),
        };

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::invalid_node(
                    self.keyword(),
                    format!("{field} is empty"),
                ));
            }
            if value.contains(['\n', '\r']) {
                return Err(Error::invalid_node(
                    self.keyword(),
                    format!("{field} `{}` spans multiple lines", value.escape_debug()),
                ));
            }
        }
        Ok(())
    }
}

/// A compound statement: a header line followed by an indented body.
///
/// Blocks are built with the constructor for their construct and filled
/// with [`Block::append`] (or the consuming [`Block::with`]):
///
/// ```
/// use pypoet::{Block, Renderable};
///
/// # fn main() -> pypoet::Result<()> {
/// let def = Block::def("count_cats", ["cats"])
///     .with(Block::for_("cat", "cats").add_statement("print(cat)"))?
///     .returns("len(cats)");
/// let lines: Vec<String> = def.render(0).collect();
///
/// assert_eq!(
///     lines,
///     [
///         "def count_cats(cats):",
///         "    for cat in cats:",
///         "        print(cat)",
///         "    return len(cats)",
///     ]
/// );
/// # Ok(())
/// # }
/// ```
///
/// `elif` and `else` blocks are only accepted directly after an `if` or
/// `elif` sibling; the check runs when they are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    kind: BlockKind,
    docstring: Option<DocString>,
    body: Suite,
    returns: Option<String>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            docstring: None,
            body: Suite::default(),
            returns: None,
        }
    }

    /// `if <condition>:`
    pub fn if_(condition: impl Into<String>) -> Self {
        Self::new(BlockKind::If {
            condition: condition.into(),
        })
    }

    /// `elif <condition>:`
    pub fn elif(condition: impl Into<String>) -> Self {
        Self::new(BlockKind::Elif {
            condition: condition.into(),
        })
    }

    /// `else:`
    pub fn else_() -> Self {
        Self::new(BlockKind::Else)
    }

    /// `for <target> in <iterable>:`
    pub fn for_(target: impl Into<String>, iterable: impl Into<String>) -> Self {
        Self::new(BlockKind::For {
            target: target.into(),
            iterable: iterable.into(),
        })
    }

    /// `while <condition>:`
    pub fn while_(condition: impl Into<String>) -> Self {
        Self::new(BlockKind::While {
            condition: condition.into(),
        })
    }

    /// `def <name>(<params>):`
    pub fn def(
        name: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(BlockKind::Def {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        })
    }

    /// `class <name>(<bases>):`, inheriting from `object` when no base is given.
    pub fn class(
        name: impl Into<String>,
        bases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(BlockKind::Class {
            name: name.into(),
            bases: bases.into_iter().map(Into::into).collect(),
        })
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn header(&self) -> String {
        self.kind.header()
    }

    /// Children in append order.
    pub fn children(&self) -> &[Node] {
        self.body.nodes()
    }

    pub fn docstring(&self) -> Option<&DocString> {
        self.docstring.as_ref()
    }

    /// Append a child node.
    ///
    /// Fails without modifying the block if the node is an out-of-order
    /// `elif`/`else` or has a malformed header.
    pub fn append(&mut self, node: impl Into<Node>) -> Result<&mut Self> {
        self.body.push(node.into())?;
        Ok(self)
    }

    /// Consuming variant of [`Block::append`].
    pub fn with(mut self, node: impl Into<Node>) -> Result<Self> {
        self.body.push(node.into())?;
        Ok(self)
    }

    /// Append a [`Statement`].
    pub fn add_statement(mut self, text: impl Into<String>) -> Self {
        self.push_statement(text);
        self
    }

    /// Append a [`Statement`] in place.
    pub fn push_statement(&mut self, text: impl Into<String>) -> &mut Self {
        self.body.push_statement(Statement::new(text));
        self
    }

    /// Set the docstring, rendered first in the body.
    pub fn add_docstring(mut self, docstring: DocString) -> Self {
        self.docstring = Some(docstring);
        self
    }

    /// Set a `return <what>` line, rendered after every child.
    ///
    /// Blank text renders a bare `return`; multi-line text continues on
    /// following lines at the same depth, like a [`Statement`].
    pub fn returns(mut self, what: impl Into<String>) -> Self {
        self.returns = Some(what.into());
        self
    }
}

impl Renderable for Block {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        if let Some(docstring) = &self.docstring {
            body.extend(docstring.to_fragments());
        }
        body.extend(self.body.to_fragments());
        if let Some(what) = &self.returns {
            body.extend(return_fragments(what));
        }
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }
        vec![CodeFragment::block(self.kind.header(), body)]
    }
}

fn return_fragments(what: &str) -> Vec<CodeFragment> {
    let mut lines = text_lines(what);
    let head = match lines.next() {
        Some(first) if !first.trim().is_empty() => format!("return {first}"),
        _ => "return".to_string(),
    };
    std::iter::once(CodeFragment::line(head))
        .chain(lines.map(CodeFragment::line))
        .collect()
}
