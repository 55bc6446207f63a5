
mod config;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lisp::{Interpreter, Literal};

use crate::config::{Config, Source, USAGE};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut interp = Interpreter::new();
    match config.source {
        Source::File(ref path) => run_file(path, &config, &mut interp),
        Source::Interactive => run_repl(&config, &mut interp),
    }
}

fn run_line(line: &str, config: &Config, interp: &mut Interpreter) ->
    Result<Literal, lisp::Error> {

    let tree = interp.parse_line(line)?;
    if config.dump_tree {
        if let Err(err) = tree.dump(&mut io::stdout().lock()) {
            log::warn!("could not dump tree: {}", err);
        }
    }
    interp.eval(&tree)
}

fn is_blank(line: &str) -> bool {
    line.trim_matches(' ').is_empty()
}

fn run_file(path: &Path, config: &Config, interp: &mut Interpreter) ->
    Result<()> {

    let file = File::open(path)
        .with_context(|| format!("{} is inaccessible", path.display()))?;

    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}",
            path.display()))?;
        if is_blank(&line) {
            continue;
        }

        match run_line(&line, config, interp) {
            Ok(val) => println!("{}", val),
            Err(err) => {
                eprintln!("{}:{}: {}", path.display(), n + 1, err);
                if config.stop_on_error {
                    bail!("stopped at line {}", n + 1);
                }
            },
        }
    }

    Ok(())
}

fn run_repl(config: &Config, interp: &mut Interpreter) -> Result<()> {
    let mut rl = DefaultEditor::new().context("could not start line editor")?;

    loop {
        match rl.readline("lisp> ") {
            Ok(line) => {
                if is_blank(&line) {
                    continue;
                }
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    log::warn!("could not record history: {}", err);
                }

                match run_line(&line, config, interp) {
                    Ok(val) => println!("{}", val),
                    Err(err) => {
                        eprintln!("{}", err);
                        if config.stop_on_error {
                            bail!("stopped after error");
                        }
                    },
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("reading input"),
        }
    }

    Ok(())
}
