mod lexer;

use std::collections::VecDeque;

use either::{Either, Left, Right};

use crate::error::Error;
use crate::node::{Literal, Node};
use crate::number;

pub use self::lexer::{tokenize, Lexer, Token};

/// Lex and parse one line of source.
pub fn read(input: &str) -> Result<Node, Error> {
    parse(tokenize(input)?)
}

/// Build the single top-level list the tokens describe.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    Reader::new(tokens).read_line()
}

/// Deepest list nesting a line may have. Reading and evaluating both recurse
/// once per level.
pub const MAX_DEPTH: usize = 256;

pub struct Reader {
    tokens: VecDeque<Token>,
    depth: usize,
}

impl Reader {
    pub fn new(tokens: Vec<Token>) -> Self {
        Reader {
            tokens: tokens.into(),
            depth: 0,
        }
    }

    pub fn read_line(&mut self) -> Result<Node, Error> {
        match self.tokens.pop_front() {
            Some(Token::LeftParen) => {},
            _ => return Err(Error::ParenMismatch(
                "code must start with an opening parenthesis")),
        }

        let list = self.read_list()?;

        if !self.tokens.is_empty() {
            return Err(Error::ParenMismatch(
                "tokens left over after the closing parenthesis"));
        }

        Ok(list)
    }

    // Called just after an opening parenthesis has been consumed.
    fn read_list(&mut self) -> Result<Node, Error> {
        if self.depth == MAX_DEPTH {
            return Err(Error::ParenMismatch("parentheses nested too deeply"));
        }
        self.depth += 1;
        let mut children = Vec::new();

        while let Some(token) = self.tokens.pop_front() {
            match token {
                Token::RightParen => {
                    self.depth -= 1;
                    return Ok(Node::list(children));
                },
                Token::LeftParen => children.push(self.read_list()?),
                other => children.push(parse_atom(other.as_str())?),
            }
        }

        Err(Error::ParenMismatch("parentheses are not well-matched"))
    }
}

/// Left for literal-looking text, Right for symbol names.
fn classify(text: &str) -> Either<&str, &str> {
    let mut chars = text.chars();
    let literal = match chars.next() {
        Some('\'') | Some('"') => true,
        Some(c) if c.is_ascii_digit() => true,
        Some('+') | Some('-') => chars.next().map_or(false, |c| c.is_ascii_digit()),
        _ => text == "true" || text == "false" || text == "null",
    };

    if literal {
        Left(text)
    } else {
        Right(text)
    }
}

fn parse_literal(text: &str) -> Result<Literal, Error> {
    match text {
        "true" => return Ok(Literal::Bool(true)),
        "false" => return Ok(Literal::Bool(false)),
        "null" => return Ok(Literal::Null),
        _ => {},
    }

    if text.starts_with('\'') {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() == 3 && chars[2] == '\'' {
            Ok(Literal::Char(chars[1]))
        } else {
            Err(Error::literal(text, "character"))
        }
    } else if text.starts_with('"') {
        if text.len() >= 2 && text.ends_with('"') {
            Ok(Literal::Str(text[1..text.len() - 1].to_string()))
        } else {
            Err(Error::literal(text, "string"))
        }
    } else {
        number::parse_int(text).map(Literal::Int)
    }
}

/// Turn the text of a non-parenthesis token into a leaf node.
pub fn parse_atom(text: &str) -> Result<Node, Error> {
    match classify(text) {
        Left(lit) => Ok(Node::Literal(parse_literal(lit)?)),
        Right(name) => Ok(Node::symbol(name)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_0() {
        assert_eq!(read("(+ 1 2)"), Ok(Node::list(vec![Node::symbol("+"),
            Node::int(1), Node::int(2)])));
    }

    #[test]
    fn test_read_nested() {
        assert_eq!(read("(a (b (c)) ())"), Ok(Node::list(vec![
            Node::symbol("a"),
            Node::list(vec![Node::symbol("b"),
                Node::list(vec![Node::symbol("c")])]),
            Node::list(vec![]),
        ])));
    }

    #[test]
    fn test_literal_round_trip() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(parse_atom(tokens[0].as_str()), Ok(Node::int(42)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(parse_atom("-5"), Ok(Node::int(-5)));
        assert_eq!(parse_atom("+12"), Ok(Node::int(12)));
        assert_eq!(parse_atom("-"), Ok(Node::symbol("-")));
        assert_eq!(parse_atom("+x"), Ok(Node::symbol("+x")));
        assert_eq!(parse_atom("let*"), Ok(Node::symbol("let*")));
        assert_eq!(parse_atom("true"), Ok(Node::boolean(true)));
        assert_eq!(parse_atom("false"), Ok(Node::boolean(false)));
        assert_eq!(parse_atom("null"), Ok(Node::null()));
        assert_eq!(parse_atom("nullable"), Ok(Node::symbol("nullable")));
    }

    #[test]
    fn test_quoted_literals() {
        assert_eq!(read("(f 'a' \"hi there\" \"\")"), Ok(Node::list(vec![
            Node::symbol("f"), Node::character('a'),
            Node::string("hi there"), Node::string(""),
        ])));
    }

    #[test]
    fn test_bad_literals() {
        assert_eq!(parse_atom("12x"), Err(Error::literal("12x", "integer")));
        assert_eq!(parse_atom("'ab'"), Err(Error::literal("'ab'", "character")));
        assert_eq!(parse_atom("\"abc"), Err(Error::literal("\"abc", "string")));
        assert_eq!(parse_atom("\""), Err(Error::literal("\"", "string")));
    }

    #[test]
    fn test_missing_close() {
        assert_eq!(read("(+ 1 2"),
            Err(Error::ParenMismatch("parentheses are not well-matched")));
    }

    #[test]
    fn test_extra_close() {
        assert!(matches!(read("(+ 1 2))"), Err(Error::ParenMismatch(_))));
        assert!(matches!(read("(+ 1 2) 3"), Err(Error::ParenMismatch(_))));
        assert!(matches!(read("(a) (b)"), Err(Error::ParenMismatch(_))));
    }

    #[test]
    fn test_must_open_with_paren() {
        assert!(matches!(read("42"), Err(Error::ParenMismatch(_))));
        assert!(matches!(read(")"), Err(Error::ParenMismatch(_))));
        assert!(matches!(read(""), Err(Error::ParenMismatch(_))));
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(read(&deep).is_ok());

        let too_deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1),
            ")".repeat(MAX_DEPTH + 1));
        assert_eq!(read(&too_deep),
            Err(Error::ParenMismatch("parentheses nested too deeply")));
    }

    #[test]
    fn test_long_unclosed_run() {
        assert!(matches!(read(&"(".repeat(200_000)),
            Err(Error::ParenMismatch(_))));
    }

    #[test]
    fn test_token_error_surfaces() {
        assert!(matches!(read("(f \"open)"), Err(Error::TokenFormat(_))));
    }
}
