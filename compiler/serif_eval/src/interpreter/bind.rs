//! Binding: assignment, function definition and array declaration/store.
//!
//! The shape of the target decides what a bind does:
//!
//! | target        | effect                                              |
//! |---------------|-----------------------------------------------------|
//! | `x`           | assign the value to `x`                             |
//! | `f^(a b)`     | define a closure `f` with parameters `a b`          |
//! | `x_(i j)`     | store into `x` if bound, else declare an `i`x`j` array |

use std::rc::Rc;

use serif_ir::Expr;

use super::Interpreter;
use crate::errors::{indexing_non_array, invalid_extent, invalid_lvalue, malformed_definition};
use crate::{Closure, EvalResult, RuntimeError, Value};

impl Interpreter {
    pub(super) fn eval_bind(&mut self, target: &Expr, value: &Expr) -> EvalResult {
        match target {
            Expr::Ident(name) => {
                let value = self.eval(value)?;
                tracing::trace!(name = %name, depth = self.env.depth(), "assign");
                self.env.assign(name, value.clone());
                Ok(value)
            }
            Expr::Call { callee, args } => self.define_function(callee, args, value),
            Expr::Index { base, indices } => self.bind_indexed(target, base, indices, value),
            _ => Err(invalid_lvalue(target)),
        }
    }

    /// Bind a closure over the current environment. The body is not
    /// evaluated; the closure itself is the result.
    fn define_function(&mut self, callee: &Expr, args: &[Expr], body: &Expr) -> EvalResult {
        let name = callee
            .as_ident()
            .ok_or_else(|| malformed_definition("function name must be an identifier"))?;
        let params = args
            .iter()
            .map(|arg| {
                arg.as_ident()
                    .map(str::to_owned)
                    .ok_or_else(|| malformed_definition("parameters must be identifiers"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let closure = Value::Closure(Rc::new(Closure {
            name: Some(name.to_owned()),
            params,
            body: Rc::new(body.clone()),
            env: self.env.clone(),
        }));
        tracing::debug!(name, depth = self.env.depth(), "define function");
        self.env.assign(name, closure.clone());
        Ok(closure)
    }

    /// Store into an existing array, or declare a new one filled with
    /// copies of the value when the name is unbound.
    fn bind_indexed(
        &mut self,
        target: &Expr,
        base: &Expr,
        indices: &[Expr],
        value: &Expr,
    ) -> EvalResult {
        let name = base.as_ident().ok_or_else(|| invalid_lvalue(target))?;
        let indices = self.eval_indices(indices)?;

        match self.env.lookup(name) {
            Some(Value::Array(array)) => {
                let value = self.eval(value)?;
                set_path(&Value::Array(array), &indices, value.clone())?;
                Ok(value)
            }
            Some(other) => Err(indexing_non_array(other.type_name())),
            None => {
                let extents = indices
                    .iter()
                    .map(|&extent| usize::try_from(extent).map_err(|_| invalid_extent(extent)))
                    .collect::<Result<Vec<_>, _>>()?;
                let fill = self.eval(value)?;
                let array = Value::filled(&extents, &fill);
                tracing::debug!(name, ?extents, "declare array");
                self.env.assign(name, array.clone());
                Ok(array)
            }
        }
    }
}

/// Store `value` at `indices` below `root`. Every step but the last must
/// land on an array.
fn set_path(root: &Value, indices: &[i64], value: Value) -> Result<(), RuntimeError> {
    let Some((&last, path)) = indices.split_last() else {
        return Err(indexing_non_array(root.type_name()));
    };
    let mut current = root.clone();
    for &index in path {
        current = match current {
            Value::Array(array) => array.get(index)?,
            other => return Err(indexing_non_array(other.type_name())),
        };
    }
    match current {
        Value::Array(array) => array.set(last, value),
        other => Err(indexing_non_array(other.type_name())),
    }
}
