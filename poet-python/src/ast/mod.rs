//! Python constructs that make up a generated file.

mod block;
mod docstring;
mod node;
mod statement;

pub use block::{Block, BlockKind, ChainKind};
pub use docstring::DocString;
pub use node::Node;
pub(crate) use node::Suite;
pub use statement::Statement;

/// Split caller text into lines on `\n`, dropping the `\r` of a `\r\n` break.
///
/// Always yields at least one (possibly empty) line.
pub(crate) fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
