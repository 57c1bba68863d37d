#![deny(clippy::arithmetic_side_effects)]
//! Serif evaluator.
//!
//! Evaluates [`Expr`] trees produced by `serif_parse` against a two-tier
//! [`Environment`].
//!
//! # Architecture
//!
//! - [`Value`]: numbers, strings, closures and aliased arrays
//! - [`Environment`]: shared global tier, per-call local tier, call depth
//! - [`Interpreter`]: the tree walker; calls run in a scoped call frame
//! - [`errors`]: [`RuntimeError`] and its constructors
//!
//! [`Expr`]: serif_ir::Expr

mod environment;
pub mod errors;
pub mod interpreter;
mod shared;
mod value;

pub use environment::{Environment, Tier};
pub use errors::{EvalErrorKind, EvalResult, RuntimeError};
pub use interpreter::{evaluate, Interpreter, ScopedInterpreter};
pub use value::{Array, Closure, Value};
