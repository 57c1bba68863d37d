//! Serif IR - shared data model for the Serif interpreter.
//!
//! Serif programs are rich text: structure is carried by character
//! formatting rather than by textual syntax. This crate holds the types
//! every later stage agrees on:
//! - [`Style`]: the resolved formatting of one run of text
//! - [`FormatTree`]: the nested tree recovered from styled text, stored
//!   as an arena of [`FormatNode`]s addressed by [`NodeId`]
//! - [`Expr`]: the immutable expression tree produced by lowering
//!
//! Both trees render a canonical debug string through `Display`, used in
//! tracing output and as test fixtures.

mod expr;
mod format_tree;
mod style;

pub use expr::Expr;
pub use format_tree::{
    ArgsKind, DisplayNode, FormatNode, FormatTag, FormatTree, NodeId, TOKEN_SEPARATORS,
};
pub use style::{Style, DEFAULT_COLOR, DEFAULT_SIZE, MAX_COLOR};
