//! Code builder utility for generating properly indented code.

use crate::{Indent, Renderable};

/// Accumulates rendered nodes into a source string.
///
/// Every line, including the last one, is terminated by `\n`.
///
/// # Example
///
/// ```
/// use pypoet_codegen::{CodeBuilder, CodeFragment};
///
/// let main = CodeFragment::block(
///     "def main():",
///     vec![CodeFragment::line("print('Hello, world!')")],
/// );
///
/// let mut builder = CodeBuilder::default();
/// builder.emit(&main);
///
/// assert_eq!(builder.build(), "def main():\n    print('Hello, world!')\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            buffer: String::new(),
        }
    }

    /// Emit a Renderable node at the top level.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for line in node.lines(0, self.indent) {
            self.buffer.push_str(&line);
            self.buffer.push('\n');
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
