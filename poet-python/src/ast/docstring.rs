//! Docstrings for modules, classes and functions.

use pypoet_codegen::{CodeFragment, Renderable};

use super::text_lines;

const QUOTES: &str = "\"\"\"";

/// A documentation string.
///
/// A docstring with only a single-line summary renders on one line.
/// Anything more renders as a multi-line docstring with `Args:` and
/// `Returns:` sections. Text containing line breaks is split so every
/// line picks up the docstring's indentation.
///
/// # Example
///
/// ```
/// use pypoet::{DocString, Renderable};
///
/// let doc = DocString::new("Add two numbers.")
///     .arg("a")
///     .arg("b")
///     .returns("int");
/// let lines: Vec<String> = doc.render(0).collect();
///
/// assert_eq!(lines[0], "\"\"\"Add two numbers.");
/// assert_eq!(lines.last().map(String::as_str), Some("\"\"\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocString {
    summary: String,
    description: Option<String>,
    args: Vec<String>,
    returns: Option<String>,
}

impl DocString {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: None,
            args: Vec::new(),
            returns: None,
        }
    }

    /// Add a description paragraph below the summary.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Document an argument.
    pub fn arg(mut self, name: impl Into<String>) -> Self {
        self.args.push(name.into());
        self
    }

    /// Document several arguments.
    pub fn args(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(names.into_iter().map(Into::into));
        self
    }

    /// Document the return value.
    pub fn returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    fn is_single_line(&self) -> bool {
        self.description.is_none()
            && self.args.is_empty()
            && self.returns.is_none()
            && !self.summary.contains('\n')
    }
}

fn push_text(fragments: &mut Vec<CodeFragment>, text: &str) {
    fragments.extend(text_lines(text).map(CodeFragment::line));
}

impl Renderable for DocString {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_single_line() {
            return vec![CodeFragment::line(format!("{QUOTES}{}{QUOTES}", self.summary))];
        }

        let mut fragments = Vec::new();
        push_text(&mut fragments, &format!("{QUOTES}{}", self.summary));
        fragments.push(CodeFragment::blank());

        if let Some(description) = &self.description {
            push_text(&mut fragments, description);
            fragments.push(CodeFragment::blank());
        }

        if !self.args.is_empty() {
            fragments.push(CodeFragment::line("Args:"));
            let mut args = Vec::new();
            for arg in &self.args {
                push_text(&mut args, &format!("{arg} ():"));
            }
            fragments.push(CodeFragment::indent(args));
            fragments.push(CodeFragment::blank());
        }

        if let Some(returns) = &self.returns {
            fragments.push(CodeFragment::line("Returns:"));
            let mut section = Vec::new();
            push_text(&mut section, &format!("{returns}:"));
            fragments.push(CodeFragment::indent(section));
        }

        fragments.push(CodeFragment::line(QUOTES));
        fragments
    }
}
