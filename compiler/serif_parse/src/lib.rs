//! Serif parser.
//!
//! Turns styled text into expressions in three steps:
//! 1. [`split_statements`] groups runs into sentences;
//! 2. [`build_document`] recovers a format tree from the character styles;
//! 3. [`parse`] pre-parses and lowers that tree into an [`Expr`].
//!
//! [`Expr`]: serif_ir::Expr

mod builder;
mod error;
mod lower;
mod preparse;
mod runs;

pub use builder::{build_document, build_statement, TreeBuilder, PRECEDENCE};
pub use error::{Arity, ParseError, ParseErrorKind};
pub use lower::parse;
pub use preparse::preparse;
pub use runs::{split_statements, StyledRun};
