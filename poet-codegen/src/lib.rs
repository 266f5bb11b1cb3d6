//! Rendering primitives for pypoet.
//!
//! This crate is language-agnostic: it knows how to turn a tree of
//! [`CodeFragment`]s into indented lines, but nothing about Python.
//!
//! - [`Renderable`] - Trait for nodes that lower to code fragments
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Lines`] - Lazy, depth-first line iterator over fragments
//! - [`CodeBuilder`] - Accumulates lines into a source string
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod lines;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use lines::Lines;
pub use renderable::{CodeFragment, Renderable};
