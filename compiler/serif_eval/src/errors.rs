//! Runtime errors and their constructors.
//!
//! Evaluation code never builds an [`EvalErrorKind`] inline; it calls one
//! of the constructors below so every message lives in one place.

use serif_ir::Expr;
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, RuntimeError>;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },
    #[error("calling a non-closure ({type_name})")]
    NotCallable { type_name: &'static str },
    #[error("function expects {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("{operation} expects {expected}, got {got}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("indexing non-array ({type_name})")]
    IndexingNonArray { type_name: &'static str },
    #[error("strings take one or two indices, got {count}")]
    StringIndexCount { count: usize },
    #[error("invalid lvalue: {target}")]
    InvalidLvalue { target: String },
    #[error("malformed definition: {reason}")]
    MalformedDefinition { reason: &'static str },
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("invalid array extent {extent}")]
    InvalidExtent { extent: i64 },
    #[error("sequencing zero expressions")]
    EmptySequence,
}

/// A failed evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("runtime error: {kind}")]
pub struct RuntimeError {
    pub kind: EvalErrorKind,
}

impl RuntimeError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        RuntimeError { kind }
    }
}

impl From<EvalErrorKind> for RuntimeError {
    fn from(kind: EvalErrorKind) -> Self {
        RuntimeError::from_kind(kind)
    }
}

#[cold]
pub fn unbound_identifier(name: &str) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn type_mismatch(
    operation: &'static str,
    expected: &'static str,
    got: &'static str,
) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::TypeMismatch {
        operation,
        expected,
        got,
    })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn indexing_non_array(type_name: &'static str) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::IndexingNonArray { type_name })
}

#[cold]
pub fn string_index_count(count: usize) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::StringIndexCount { count })
}

#[cold]
pub fn invalid_lvalue(target: &Expr) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::InvalidLvalue {
        target: target.to_string(),
    })
}

#[cold]
pub fn malformed_definition(reason: &'static str) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::MalformedDefinition { reason })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn invalid_extent(extent: i64) -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::InvalidExtent { extent })
}

#[cold]
pub fn empty_sequence() -> RuntimeError {
    RuntimeError::from_kind(EvalErrorKind::EmptySequence)
}
