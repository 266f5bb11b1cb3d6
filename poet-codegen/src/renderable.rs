//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Nodes describe their shape as fragments and never deal with
//! indentation themselves; depth is applied when the fragments are walked.

use crate::{Indent, Lines};

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code. Must not contain a line break.
    Line(String),
    /// A blank line, never indented.
    Blank,
    /// A header line followed by a body one level deeper.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// Indent the contained fragments by one level.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments at the current level.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Lazily render this node as lines, starting at `depth` with the
    /// default indentation.
    fn render(&self, depth: usize) -> Lines {
        self.lines(depth, Indent::default())
    }

    /// Lazily render this node as lines with a specific indentation unit.
    fn lines(&self, depth: usize, indent: Indent) -> Lines {
        Lines::new(self.to_fragments(), depth, indent)
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
