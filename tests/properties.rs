
use lisp::{tokenize, Error, Interpreter, Literal, Node, Token};

fn eval(line: &str) -> Result<Literal, Error> {
    Interpreter::new().eval_line(line)
}

#[test]
fn test_literal_round_trip() {
    assert_eq!(tokenize("42"), Ok(vec![Token::Atom("42".to_string())]));
    assert_eq!(lisp::read::parse_atom("42"), Ok(Node::int(42)));
    assert_eq!(eval("(def! n 42)"), Ok(Literal::Int(42)));
}

#[test]
fn test_parse_yields_one_list() {
    for line in &["(+ 1 2)", "(a (b c) \"d e\" 'f' -7 true null)", "()"] {
        match lisp::read(line) {
            Ok(Node::List(_)) => {},
            other => panic!("{:?} parsed to {:?}", line, other),
        }
    }
}

#[test]
fn test_define_overwrites() {
    let mut interp = Interpreter::new();
    interp.eval_line("(def! x 5)").unwrap();
    interp.eval_line("(def! x 10)").unwrap();
    assert_eq!(interp.eval_line("(let* () x)"), Ok(Literal::Int(10)));
}

#[test]
fn test_let_sequential_visibility() {
    assert_eq!(eval("(let* (a 1 b (+ a 1)) (+ a b))"), Ok(Literal::Int(3)));
}

#[test]
fn test_let_scope_restored() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.eval_line("(let* (inner 1) inner)"), Ok(Literal::Int(1)));
    assert_eq!(interp.eval_line("(+ inner 1)"),
        Err(Error::UndefinedSymbol("inner".to_string())));

    assert_eq!(interp.eval_line("(let* (failing 1) (+ failing \"x\"))"),
        Err(Error::OperandType {
            operator: "+".to_string(),
            expected: "integer",
            found: "string".to_string(),
        }));
    assert_eq!(interp.eval_line("(+ failing 1)"),
        Err(Error::UndefinedSymbol("failing".to_string())));
    assert_eq!(interp.environment().depth(), 1);
}

#[test]
fn test_arity_and_type() {
    assert_eq!(eval("(+ 1 2 3)"), Err(Error::Arity {
        operator: "+".to_string(),
        expected: 2,
        found: 3,
    }));
    assert!(matches!(eval("(- 1)"), Err(Error::Arity { found: 1, .. })));
    assert!(matches!(eval("(+ 1 \"a\")"), Err(Error::OperandType { .. })));
    assert!(matches!(eval("(* true 2)"), Err(Error::OperandType { .. })));
}

#[test]
fn test_empty_and_malformed_lists() {
    assert_eq!(eval("()"), Err(Error::EmptyList));
    assert_eq!(eval("(1 2)"), Err(Error::NotAFunction("1".to_string())));
    assert_eq!(eval("(car 2)"), Err(Error::NotAFunction("car".to_string())));
}

#[test]
fn test_division() {
    assert_eq!(eval("(/ 7 2)"), Ok(Literal::Int(3)));
    assert_eq!(eval("(/ -7 2)"), Ok(Literal::Int(-3)));
    assert_eq!(eval("(/ 1 0)"), Err(Error::DivisionByZero));
}

#[test]
fn test_unbalanced_parentheses() {
    assert!(matches!(eval("(+ 1 2"), Err(Error::ParenMismatch(_))));
    assert!(matches!(eval("(+ 1 2))"), Err(Error::ParenMismatch(_))));
    assert!(matches!(eval("(+ 1 2) (+ 3 4)"), Err(Error::ParenMismatch(_))));
}

#[test]
fn test_token_and_literal_errors() {
    assert!(matches!(eval("(def! s \"open)"), Err(Error::TokenFormat(_))));
    assert!(matches!(eval("(def! c 'xy')"), Err(Error::TokenFormat(_))));
    assert!(matches!(eval("(+ 1x 2)"), Err(Error::LiteralFormat { .. })));
}

#[test]
fn test_all_literal_kinds() {
    assert_eq!(eval("(def! v 'z')"), Ok(Literal::Char('z')));
    assert_eq!(eval("(def! v \"two words\")"),
        Ok(Literal::Str("two words".to_string())));
    assert_eq!(eval("(def! v false)"), Ok(Literal::Bool(false)));
    assert_eq!(eval("(def! v null)"), Ok(Literal::Null));
    assert_eq!(eval("(def! v -12)"), Ok(Literal::Int(-12)));
}

#[test]
fn test_multi_line_session() {
    let mut interp = Interpreter::new();
    let lines = [
        "(def! width 6)",
        "(def! height (+ width 1))",
        "(let* (area (* width height) half (/ area 2)) (- area half))",
    ];
    let results: Vec<_> = lines.iter().map(|l| interp.eval_line(l)).collect();
    assert_eq!(results, vec![Ok(Literal::Int(6)), Ok(Literal::Int(7)),
        Ok(Literal::Int(21))]);
}

#[test]
fn test_nested_within_limit_evaluates() {
    let depth = lisp::read::MAX_DEPTH - 1;
    let line = format!("{}0{}", "(+ 1 ".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&line), Ok(Literal::Int(depth as i64)));
}

#[test]
fn test_deep_unclosed_line_is_paren_error() {
    assert!(matches!(eval(&"(".repeat(200_000)), Err(Error::ParenMismatch(_))));
}
