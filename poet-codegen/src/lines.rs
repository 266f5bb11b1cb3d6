//! Lazy line rendering over a fragment tree.

use std::vec;

use crate::{CodeFragment, Indent};

/// Iterator producing indented lines from code fragments.
///
/// The fragment tree is walked depth-first with an explicit stack, so each
/// line is only materialised when it is pulled. Blank lines and empty
/// [`CodeFragment::Line`]s come out as empty strings with no indentation.
#[derive(Debug, Clone)]
pub struct Lines {
    stack: Vec<Frame>,
    indent: Indent,
}

#[derive(Debug, Clone)]
struct Frame {
    fragments: vec::IntoIter<CodeFragment>,
    depth: usize,
}

impl Lines {
    /// Render `fragments` with the first level at `depth`.
    pub fn new(fragments: Vec<CodeFragment>, depth: usize, indent: Indent) -> Self {
        Self {
            stack: vec![Frame {
                fragments: fragments.into_iter(),
                depth,
            }],
            indent,
        }
    }

    fn push(&mut self, fragments: Vec<CodeFragment>, depth: usize) {
        self.stack.push(Frame {
            fragments: fragments.into_iter(),
            depth,
        });
    }

    fn indented(&self, text: &str, depth: usize) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut line = String::with_capacity(self.indent.as_str().len() * depth + text.len());
        self.indent.write_to(&mut line, depth);
        line.push_str(text);
        line
    }
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let depth = frame.depth;
            let Some(fragment) = frame.fragments.next() else {
                self.stack.pop();
                continue;
            };

            match fragment {
                CodeFragment::Line(text) => return Some(self.indented(&text, depth)),
                CodeFragment::Blank => return Some(String::new()),
                CodeFragment::Block { header, body } => {
                    self.push(body, depth + 1);
                    return Some(self.indented(&header, depth));
                }
                CodeFragment::Indent(body) => self.push(body, depth + 1),
                CodeFragment::Sequence(body) => self.push(body, depth),
            }
        }
    }
}
