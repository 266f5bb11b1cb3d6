//! Opaque single-statement leaves.

use pypoet_codegen::{CodeFragment, Renderable};

use super::text_lines;

/// A Python statement, taken verbatim.
///
/// The text is never parsed. An empty statement renders as a blank line;
/// text containing `\n` renders as several lines, each at the statement's
/// own depth. Both `\n` and `\r\n` breaks are recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    text: String,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Renderable for Statement {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        text_lines(&self.text).map(CodeFragment::line).collect()
    }
}
