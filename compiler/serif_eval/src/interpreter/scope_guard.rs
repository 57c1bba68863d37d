//! RAII call-frame guard.
//!
//! [`ScopedInterpreter`] installs a call frame as the interpreter's
//! environment and restores the caller's environment when dropped, so the
//! scope depth unwinds even when the body fails or panics.
//!
//! ```text
//! interpreter.with_frame(frame, |scoped| scoped.eval(&closure.body))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

/// Interpreter running inside a call frame.
///
/// Derefs to [`Interpreter`]; dropping it returns to the caller's
/// environment.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    caller: Option<Environment>,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        if let Some(caller) = self.caller.take() {
            self.interpreter.env = caller;
        }
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter `frame` until the returned guard is dropped.
    pub fn scoped(&mut self, frame: Environment) -> ScopedInterpreter<'_> {
        let caller = std::mem::replace(&mut self.env, frame);
        ScopedInterpreter {
            interpreter: self,
            caller: Some(caller),
        }
    }

    /// Run `f` inside `frame`; the caller's environment is restored afterwards.
    pub fn with_frame<T, F>(&mut self, frame: Environment, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped(frame);
        f(&mut scoped)
    }
}

