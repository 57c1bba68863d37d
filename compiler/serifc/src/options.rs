//! Command-line configuration.

use std::path::PathBuf;

/// What a `serif` invocation should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the format tree and expression of every document.
    pub verbose: bool,
    /// Start from the bootstrap environment instead of an empty one.
    pub bootstrap: bool,
    pub files: Vec<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            verbose: false,
            bootstrap: true,
            files: Vec::new(),
        }
    }
}

impl RunOptions {
    /// Parse arguments, program name excluded.
    ///
    /// Unknown flags are returned alongside the options so the caller can
    /// report them; they do not stop the run.
    pub fn parse<I, S>(args: I) -> (RunOptions, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = RunOptions::default();
        let mut unknown = Vec::new();
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "-v" | "--verbose" => options.verbose = true,
                "--no-bootstrap" => options.bootstrap = false,
                flag if flag.starts_with('-') => unknown.push(arg),
                _ => options.files.push(PathBuf::from(arg)),
            }
        }
        (options, unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_defaults() {
        let (options, unknown) = RunOptions::parse(Vec::<String>::new());
        assert_eq!(options, RunOptions::default());
        assert!(options.bootstrap);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_parse_flags_and_files() {
        let (options, unknown) =
            RunOptions::parse(["a.json", "-v", "--no-bootstrap", "--bogus", "b.json"]);
        assert!(options.verbose);
        assert!(!options.bootstrap);
        assert_eq!(
            options.files,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert_eq!(unknown, vec!["--bogus".to_string()]);
    }

    #[test]
    fn test_parse_long_verbose() {
        let (options, _) = RunOptions::parse(["--verbose"]);
        assert!(options.verbose);
    }
}
