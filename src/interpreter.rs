
use crate::error::Error;
use crate::node::{Literal, Node};
use crate::read;
use crate::runtime::Environment;

/// One interpreter session. Global definitions persist from line to line.
#[derive(Debug, Default)]
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
        }
    }

    pub fn with_environment(env: Environment) -> Self {
        Interpreter { env }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn parse_line(&self, line: &str) -> Result<Node, Error> {
        let tree = read::read(line)?;
        log::debug!("parsed {}", tree);
        Ok(tree)
    }

    pub fn eval(&mut self, tree: &Node) -> Result<Literal, Error> {
        let result = tree.eval(&mut self.env);
        debug_assert_eq!(self.env.depth(), 1);
        match result {
            Ok(ref val) => log::debug!("{} => {}", tree, val),
            Err(ref err) => log::debug!("{} failed: {}", tree, err),
        }
        result
    }

    /// Lex, parse and evaluate one line of source.
    pub fn eval_line(&mut self, line: &str) -> Result<Literal, Error> {
        log::debug!("read {:?}", line);
        let tree = self.parse_line(line)?;
        self.eval(&tree)
    }
}

#[test]
fn test_session_keeps_globals() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.eval_line("(def! x 5)"), Ok(Literal::Int(5)));
    assert_eq!(interp.eval_line("(* x x)"), Ok(Literal::Int(25)));
    assert!(interp.environment().lookup("x").is_some());
}

#[test]
fn test_session_survives_failure() {
    let mut interp = Interpreter::new();
    assert!(interp.eval_line("(let* (t 1) (/ t 0))").is_err());
    assert_eq!(interp.environment().depth(), 1);
    assert_eq!(interp.eval_line("(+ 1 1)"), Ok(Literal::Int(2)));
}

#[test]
fn test_session_with_preset_globals() {
    let globals = hashmap! {
        "base".to_string() => Node::int(100),
    };
    let mut interp = Interpreter::with_environment(Environment::from_hashmap(
        globals));
    assert_eq!(interp.eval_line("(+ base 1)"), Ok(Literal::Int(101)));
}

#[test]
fn test_session_rejects_runaway_nesting() {
    let mut interp = Interpreter::new();
    assert!(matches!(interp.eval_line(&"(".repeat(200_000)),
        Err(Error::ParenMismatch(_))));
    assert_eq!(interp.eval_line("(+ 1 1)"), Ok(Literal::Int(2)));
}
