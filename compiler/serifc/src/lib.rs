//! Serif driver.
//!
//! Ties the pipeline together: run document → format tree → expression →
//! value. The `serif` binary is a thin wrapper over [`run`].

pub mod bootstrap;
mod options;
pub mod reader;

use std::io::Write;
use std::sync::Once;

use serif_eval::{evaluate, Environment, RuntimeError, Value};
use serif_ir::{Expr, FormatTree};
use serif_parse::{build_document, parse, ParseError, StyledRun};
use thiserror::Error;

pub use bootstrap::{bootstrap_environment, bootstrap_from};
pub use options::RunOptions;
pub use reader::{parse_runs, read_runs, ReadError};

/// Anything that stops a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Value printed when no document was run.
pub const NO_RESULT: Value = Value::Number(-1);

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// A parsed document.
pub struct Program {
    /// Format tree as built, before pre-parsing rewrote it.
    pub format_tree: String,
    pub expr: Expr,
}

/// Build and lower the format tree of `runs`.
pub fn compile(runs: &[StyledRun]) -> Result<Program, ParseError> {
    let mut tree = FormatTree::new();
    let document = build_document(&mut tree, runs);
    let format_tree = tree.display(document).to_string();
    let expr = parse(&mut tree, document)?;
    Ok(Program { format_tree, expr })
}

/// Compile `runs` and evaluate them against `env`.
pub fn run_runs(runs: &[StyledRun], env: &mut Environment) -> Result<Value, RunError> {
    let program = compile(runs)?;
    Ok(evaluate(&program.expr, env)?)
}

/// Run every document of `options` in order against one environment and
/// return the value of the last. Verbose output goes to `out`.
pub fn run(options: &RunOptions, out: &mut impl Write) -> Result<Value, RunError> {
    let mut env = if options.bootstrap {
        bootstrap_environment()
    } else {
        Environment::new()
    };

    let mut result = NO_RESULT;
    for path in &options.files {
        let runs = read_runs(path)?;
        let program = compile(&runs)?;
        if options.verbose {
            writeln!(out, "Format tree:")?;
            writeln!(out, "{}", program.format_tree)?;
            writeln!(out, "Expression:")?;
            writeln!(out, "{}", program.expr)?;
        }
        tracing::info!(path = %path.display(), "evaluating document");
        result = evaluate(&program.expr, &mut env)?;
    }
    Ok(result)
}
