//! Closure calls.

use std::rc::Rc;

use serif_ir::Expr;

use super::Interpreter;
use crate::errors::{not_callable, wrong_arg_count};
use crate::{Closure, Environment, EvalResult, RuntimeError, Value};

impl Interpreter {
    /// Call the closure `callee` evaluates to with `args`.
    ///
    /// Arguments are evaluated in the caller's environment, after the
    /// argument count has been checked.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> EvalResult {
        let closure = match self.eval(callee)? {
            Value::Closure(closure) => closure,
            other => return Err(not_callable(other.type_name())),
        };
        check_arg_count(&closure, args.len())?;

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let frame = self.prepare_call_env(&closure, values);
        tracing::debug!(
            name = closure.name.as_deref().unwrap_or("<anonymous>"),
            depth = frame.depth(),
            "call"
        );
        self.with_frame(frame, |scoped| scoped.eval(&closure.body))
    }

    /// Build the frame a call to `closure` runs in.
    ///
    /// The function's own name is bound first so the body can recurse,
    /// then each parameter, shadowing any captured binding of that name.
    fn prepare_call_env(&self, closure: &Rc<Closure>, args: Vec<Value>) -> Environment {
        let mut frame = self.env.call_frame(&closure.env);
        if let Some(name) = &closure.name {
            frame.define_local(name.clone(), Value::Closure(Rc::clone(closure)));
        }
        for (param, value) in closure.params.iter().zip(args) {
            frame.define_local(param.clone(), value);
        }
        frame
    }
}

fn check_arg_count(closure: &Closure, got: usize) -> Result<(), RuntimeError> {
    let expected = closure.params.len();
    if expected == got {
        Ok(())
    } else {
        Err(wrong_arg_count(expected, got))
    }
}
