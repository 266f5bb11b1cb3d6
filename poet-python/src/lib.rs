//! Python that writes Python.
//!
//! Build a tree of Python constructs, then render it to correctly indented
//! source and persist it:
//!
//! ```no_run
//! use pypoet::{Block, PythonFile, Statement};
//!
//! # fn main() -> pypoet::Result<()> {
//! let mut file = PythonFile::new();
//! file.append(Statement::new("print('Hello world!')"))?
//!     .append(Block::def("main", ["argv"]).returns("0"))?;
//! file.write("hello.py")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - Statements, blocks and docstrings
//! - [`PythonFile`] - The root container and its write operations
//! - [`Error`] - Ordering, invalid node and persist errors
//!
//! Statement text is never parsed or checked; the library only guarantees
//! structure and indentation.

pub mod ast;
mod error;
mod python_file;

pub use ast::{Block, BlockKind, ChainKind, DocString, Node, Statement};
pub use error::{Error, Result};
pub use pypoet_codegen::{Indent, Lines, Renderable};
pub use pypoet_core::{FsStorage, Storage};
pub use python_file::PythonFile;
