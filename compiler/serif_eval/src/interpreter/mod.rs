//! Tree-walking interpreter for Serif.
//!
//! Every expression is evaluated recursively against the interpreter's
//! current [`Environment`]. A call swaps in a fresh call frame for the
//! duration of the body through a [`ScopedInterpreter`] guard, which puts
//! the caller's environment back on every exit path, errors included.
//!
//! Helper modules:
//! - `call` - closure calls and argument binding
//! - `bind` - assignment, function definition, array declaration and store
//! - `index` - array and string indexing

mod bind;
mod call;
mod index;
mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use std::rc::Rc;

use serif_ir::Expr;
use serif_stack::ensure_sufficient_stack;

use crate::errors::{empty_sequence, integer_overflow, type_mismatch, unbound_identifier};
use crate::{Environment, EvalResult, RuntimeError, Value};

/// Evaluates expressions against an owned environment.
#[derive(Debug, Default)]
pub struct Interpreter {
    pub env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn with_env(env: Environment) -> Self {
        Interpreter { env }
    }

    pub fn into_env(self) -> Environment {
        self.env
    }

    /// Evaluate `expr` to a value.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Integer(n) => Ok(Value::Number(i64::from(*n))),
            Expr::Str(text) => Ok(Value::string(text.as_str())),
            Expr::Ident(name) => self.eval_ident(name),
            Expr::Call { callee, args } => self.eval_call(callee, args),
            Expr::Index { base, indices } => self.eval_index(base, indices),
            Expr::Bind { target, value } => self.eval_bind(target, value),
            Expr::If {
                test,
                then,
                otherwise,
            } => {
                if self.eval_test(test)? {
                    self.eval(then)
                } else {
                    self.eval(otherwise)
                }
            }
            Expr::Add(addends) => self.eval_add(addends),
            Expr::Negate(operand) => match self.eval(operand)? {
                Value::Number(n) => n
                    .checked_neg()
                    .map(Value::Number)
                    .ok_or_else(|| integer_overflow("negation")),
                other => Err(type_mismatch("negation", "a number", other.type_name())),
            },
            Expr::Sequence(exprs) => {
                let mut last = None;
                for expr in exprs {
                    last = Some(self.eval(expr)?);
                }
                last.ok_or_else(empty_sequence)
            }
        }
    }

    /// Read `name`. A closure is handed out as a copy with its own
    /// captured environment.
    fn eval_ident(&self, name: &str) -> EvalResult {
        match self.env.lookup(name) {
            Some(Value::Closure(closure)) => Ok(Value::Closure(Rc::new(closure.deep_copy()))),
            Some(value) => Ok(value),
            None => Err(unbound_identifier(name)),
        }
    }

    /// Numbers are true when positive, strings when non-empty.
    fn eval_test(&mut self, test: &Expr) -> Result<bool, RuntimeError> {
        match self.eval(test)? {
            Value::Number(n) => Ok(n > 0),
            Value::Str(text) => Ok(!text.is_empty()),
            other => Err(type_mismatch(
                "conditional",
                "a number or string",
                other.type_name(),
            )),
        }
    }

    /// Left fold from `0`. Once either side is a string the fold
    /// concatenates for the rest of the expression.
    fn eval_add(&mut self, addends: &[Expr]) -> EvalResult {
        let mut sum = Value::Number(0);
        for addend in addends {
            let value = self.eval(addend)?;
            sum = match (sum, value) {
                (Value::Number(a), Value::Number(b)) => {
                    Value::Number(a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?)
                }
                (Value::Number(a), Value::Str(b)) => Value::Str(format!("{a}{b}")),
                (Value::Str(mut a), Value::Number(b)) => {
                    a.push_str(&b.to_string());
                    Value::Str(a)
                }
                (Value::Str(mut a), Value::Str(b)) => {
                    a.push_str(&b);
                    Value::Str(a)
                }
                (_, other) => {
                    return Err(type_mismatch(
                        "addition",
                        "a number or string",
                        other.type_name(),
                    ))
                }
            };
        }
        Ok(sum)
    }
}

/// Evaluate `expr` against `env`, leaving every binding it makes in `env`.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult {
    let mut interpreter = Interpreter::with_env(std::mem::take(env));
    let result = interpreter.eval(expr);
    *env = interpreter.into_env();
    result
}
