//! Parse errors.
//!
//! Parsing a program is all-or-nothing: the first violation aborts and is
//! reported as a [`ParseError`] before any evaluation happens.

use std::fmt;

use serif_ir::FormatTag;
use thiserror::Error;

/// How many children a tag accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// What went wrong while pre-parsing or lowering a node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{tag} expects {expected} children, found {found}")]
    WrongChildCount {
        tag: FormatTag,
        expected: Arity,
        found: usize,
    },
    #[error("document children must be statements, found {found}")]
    NotAStatement { found: FormatTag },
    #[error("{tag} cannot be the first child; it needs a preceding base expression")]
    ScriptFirstChild { tag: FormatTag },
    #[error("{tag} survived pre-parsing without a base expression")]
    StrayScript { tag: FormatTag },
    #[error("comma inside token \"{token}\"")]
    CommaInToken { token: String },
    #[error("sequence has a misplaced comma at child {position}")]
    MisplacedComma { position: usize },
    #[error("sequence ends with a comma")]
    TrailingComma,
    #[error("string literal must hold a single token, found {found}")]
    FontContent { found: FormatTag },
    #[error("integer literal {value:#x} exceeds 0xffffff")]
    LiteralOutOfRange { value: u32 },
    #[error("{tag} node is missing its payload")]
    MissingPayload { tag: FormatTag },
}

/// A failed parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("parse error: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        ParseError { kind }
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        ParseError::new(kind)
    }
}

/// Check `count` against `expected` for a node tagged `tag`.
pub(crate) fn check_arity(tag: FormatTag, expected: Arity, count: usize) -> Result<(), ParseError> {
    if expected.accepts(count) {
        Ok(())
    } else {
        Err(ParseErrorKind::WrongChildCount {
            tag,
            expected,
            found: count,
        }
        .into())
    }
}
