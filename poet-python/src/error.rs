use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::ChainKind;

/// Result type for tree construction and writing.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("`{kind}` block must directly follow an `if` or `elif` block, found {found}")]
    #[diagnostic(
        code(pypoet::ordering),
        help("append an `if` block at the same nesting level first")
    )]
    Ordering { kind: ChainKind, found: String },

    #[error("invalid `{construct}` block: {reason}")]
    #[diagnostic(code(pypoet::invalid_node))]
    InvalidNode {
        construct: &'static str,
        reason: String,
    },

    #[error(transparent)]
    #[diagnostic(code(pypoet::persist))]
    Persist(#[from] io::Error),
}

impl Error {
    /// Create an ordering error for a chain block that has no opener.
    pub(crate) fn ordering(kind: ChainKind, found: impl Into<String>) -> Self {
        Self::Ordering {
            kind,
            found: found.into(),
        }
    }

    /// Create an invalid node error.
    pub(crate) fn invalid_node(construct: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            construct,
            reason: reason.into(),
        }
    }
}
