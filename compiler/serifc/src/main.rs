//! `serif` command-line interpreter.

use serifc::{init_tracing, run, RunOptions};

fn main() {
    init_tracing();

    let (options, unknown) = RunOptions::parse(std::env::args().skip(1));
    for flag in unknown {
        eprintln!("Unrecognized commandline option: {flag}");
    }

    let result = run(&options, &mut std::io::stdout().lock());
    match result {
        Ok(value) => println!("{value}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
