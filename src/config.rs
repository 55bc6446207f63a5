
use std::path::PathBuf;

use anyhow::{bail, Result};

pub const USAGE: &str = "\
usage: lisp [--dump-tree] [--stop-on-error] [FILE]

Evaluates FILE one line at a time, or reads lines interactively when no FILE
is given. Set RUST_LOG=debug to trace each step.

  --dump-tree       print the parsed tree of every line before evaluating it
  --stop-on-error   stop at the first line that fails
  -h, --help        show this message";

#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    File(PathBuf),
    Interactive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub source: Source,
    pub dump_tree: bool,
    pub stop_on_error: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            source: Source::Interactive,
            dump_tree: false,
            stop_on_error: false,
            help: false,
        }
    }
}

impl Config {
    /// Parse command-line arguments, program name excluded.
    pub fn from_args<I: IntoIterator<Item=String>>(args: I) -> Result<Config> {
        let mut config = Config::default();

        for arg in args {
            match &*arg {
                "--dump-tree" => config.dump_tree = true,
                "--stop-on-error" => config.stop_on_error = true,
                "-h" | "--help" => config.help = true,
                flag if flag.starts_with('-') => {
                    bail!("unknown option {}", flag)
                },
                _ => {
                    if config.source != Source::Interactive {
                        bail!("only one input file may be given");
                    }
                    config.source = Source::File(PathBuf::from(&arg));
                },
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_args(args(&[])).unwrap(), Config::default());
    }

    #[test]
    fn test_flags_and_file() {
        let config = Config::from_args(args(&["--dump-tree", "prog.lisp",
            "--stop-on-error"])).unwrap();
        assert_eq!(config.source, Source::File(PathBuf::from("prog.lisp")));
        assert!(config.dump_tree);
        assert!(config.stop_on_error);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Config::from_args(args(&["--fast"])).is_err());
    }

    #[test]
    fn test_rejects_two_files() {
        assert!(Config::from_args(args(&["a", "b"])).is_err());
    }
}
