//! PythonFile: the root of a generated module.

use std::path::Path;

use pypoet_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};
use pypoet_core::{FsStorage, Storage};
use tracing::debug;

use crate::{
    Result,
    ast::{DocString, Node, Suite},
};

/// A Python module.
///
/// The file has no header line of its own, so its top-level nodes render
/// without indentation.
///
/// # Example
///
/// ```
/// use pypoet::{Block, PythonFile, Statement};
///
/// # fn main() -> pypoet::Result<()> {
/// let mut file = PythonFile::new();
/// file.append(Statement::new("import sys"))?
///     .append(Block::if_("len(sys.argv) > 1").add_statement("print('x')"))?
///     .append(Block::else_().add_statement("print('Goodbye.')"))?;
///
/// assert_eq!(
///     file.to_source(),
///     "import sys\nif len(sys.argv) > 1:\n    print('x')\nelse:\n    print('Goodbye.')\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonFile {
    docstring: Option<DocString>,
    body: Suite,
    indent: Indent,
}

impl PythonFile {
    /// Create an empty file using 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different indentation unit when serializing.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Top-level nodes in append order.
    pub fn nodes(&self) -> &[Node] {
        self.body.nodes()
    }

    pub fn docstring(&self) -> Option<&DocString> {
        self.docstring.as_ref()
    }

    /// Set the module docstring.
    pub fn add_docstring(&mut self, docstring: DocString) -> &mut Self {
        self.docstring = Some(docstring);
        self
    }

    /// Append a top-level node.
    ///
    /// Fails without modifying the file if the node is an out-of-order
    /// `elif`/`else` or has a malformed header.
    pub fn append(&mut self, node: impl Into<Node>) -> Result<&mut Self> {
        self.body.push(node.into())?;
        Ok(self)
    }

    /// Render the whole file, terminating every line with `\n`.
    ///
    /// An empty file renders as an empty string.
    pub fn to_source(&self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        builder.emit(self);
        builder.build()
    }

    /// Render the file and write it to `path` on the local filesystem.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_to(&FsStorage, path)
    }

    /// Render the file and hand it to `storage`.
    ///
    /// `storage` is called exactly once; its error is returned unchanged.
    pub fn write_to(&self, storage: &impl Storage, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = self.to_source();
        debug!(
            path = %path.display(),
            lines = source.lines().count(),
            bytes = source.len(),
            "writing python file"
        );
        storage.persist(&source, path)?;
        Ok(())
    }
}

impl Renderable for PythonFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(docstring) = &self.docstring {
            fragments.extend(docstring.to_fragments());
            if !self.body.is_empty() {
                fragments.push(CodeFragment::blank());
            }
        }
        fragments.extend(self.body.to_fragments());
        fragments
    }
}
