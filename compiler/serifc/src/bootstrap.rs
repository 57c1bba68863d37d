//! The environment every run starts from.
//!
//! The bootstrap document is ordinary Serif, embedded in the binary. It
//! defines the constants `one`, `zero`, `t` and `f`, and the helpers
//! `Sub(x y)`, `Not(x)`, `Gt(x y)`, `Abs(x)` and `Dec(n)`.

use serif_eval::Environment;

use crate::{reader, run_runs, RunError};

const BOOTSTRAP_SOURCE: &str = include_str!("bootstrap.json");

/// Evaluate the embedded bootstrap document into a fresh environment.
pub fn bootstrap_environment() -> Environment {
    bootstrap_from(BOOTSTRAP_SOURCE)
}

/// Evaluate the run document `source` into a fresh environment.
///
/// A document that fails to read, parse or evaluate is reported and
/// replaced by an empty environment; the failure never reaches the caller.
pub fn bootstrap_from(source: &str) -> Environment {
    match load_bootstrap(source) {
        Ok(env) => env,
        Err(error) => {
            tracing::warn!(%error, "bootstrap environment failed, continuing with an empty environment");
            Environment::new()
        }
    }
}

fn load_bootstrap(source: &str) -> Result<Environment, RunError> {
    let runs = reader::parse_runs(source, "<bootstrap>")?;
    let mut env = Environment::new();
    run_runs(&runs, &mut env)?;
    tracing::debug!(names = ?env.global_names(), "bootstrap environment ready");
    Ok(env)
}
