
use nom::branch::alt;
use nom::bytes::complete::{is_not, take_while};
use nom::character::complete::{char, none_of, one_of};
use nom::combinator::{cut, map, recognize};
use nom::sequence::{preceded, terminated};
use nom::IResult;

use crate::error::Error;

/// Quoted tokens keep their delimiting quotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    LeftParen,
    RightParen,
    Str(String),
    Char(String),
    Atom(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match *self {
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Str(ref s) | Token::Char(ref s) | Token::Atom(ref s) => &*s,
        }
    }
}

#[derive(Debug)]
pub struct Lexer<'a>(&'a str);

pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(input).collect()
}

// Once the opening quote is seen the token must complete; `cut` keeps `alt`
// from falling through to the other token classes.
fn string_token(input: &str) -> IResult<&str, Token> {
    map(recognize(preceded(char('"'),
            cut(terminated(take_while(|c: char| c != '"'), char('"'))))),
        |s: &str| Token::Str(s.to_string()))(input)
}

fn char_token(input: &str) -> IResult<&str, Token> {
    map(recognize(preceded(char('\''),
            cut(terminated(none_of("'"), char('\''))))),
        |s: &str| Token::Char(s.to_string()))(input)
}

fn paren(input: &str) -> IResult<&str, Token> {
    map(one_of("()"), |c: char| if c == '(' {
        Token::LeftParen
    } else {
        Token::RightParen
    })(input)
}

fn atom(input: &str) -> IResult<&str, Token> {
    map(is_not(" ()'\""), |s: &str| Token::Atom(s.to_string()))(input)
}

fn read_token(input: &str) -> IResult<&str, Token> {
    alt((string_token, char_token, paren, atom))(input)
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str) -> Lexer {
        Lexer(input)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.0.trim_start_matches(' ');
        if input.is_empty() {
            self.0 = input;
            return None;
        }

        match read_token(input) {
            Ok((rest, token)) => {
                log::trace!("token {:?}", token);
                self.0 = rest;
                Some(Ok(token))
            },
            Err(_) => {
                // Fuse: nothing after a malformed token is worth reading.
                self.0 = "";
                Some(Err(Error::TokenFormat(input.to_string())))
            },
        }
    }
}

#[cfg(test)]
fn atom_token(s: &str) -> Token {
    Token::Atom(s.to_string())
}

#[test]
fn test_token_0() {
    assert_eq!(read_token("("), Ok(("", Token::LeftParen)));
}

#[test]
fn test_token_1() {
    assert_eq!(read_token(")x"), Ok(("x", Token::RightParen)));
}

#[test]
fn test_token_2() {
    assert_eq!(read_token("blah blub"), Ok((" blub", atom_token("blah"))));
}

#[test]
fn test_atom_stops_at_quote() {
    assert_eq!(read_token("ab\"c\""), Ok(("\"c\"", atom_token("ab"))));
}

#[test]
fn test_lexer() {
    assert_eq!(tokenize("(x y)"), Ok(vec![Token::LeftParen, atom_token("x"),
        atom_token("y"), Token::RightParen]));
}

#[test]
fn test_empty() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("   "), Ok(vec![]));
}

#[test]
fn test_single_atom() {
    assert_eq!(tokenize("42"), Ok(vec![atom_token("42")]));
}

#[test]
fn test_string_keeps_spaces_and_quotes() {
    assert_eq!(tokenize("(f \"a b  c\")"), Ok(vec![Token::LeftParen,
        atom_token("f"), Token::Str("\"a b  c\"".to_string()),
        Token::RightParen]));
    assert_eq!(tokenize("\"\""), Ok(vec![Token::Str("\"\"".to_string())]));
}

#[test]
fn test_unterminated_string() {
    assert_eq!(tokenize("(f \"abc)"),
        Err(Error::TokenFormat("\"abc)".to_string())));
}

#[test]
fn test_char() {
    assert_eq!(tokenize("'a''('"), Ok(vec![Token::Char("'a'".to_string()),
        Token::Char("'('".to_string())]));
}

#[test]
fn test_bad_char() {
    assert!(tokenize("'ab'").is_err());
    assert!(tokenize("''").is_err());
    assert!(tokenize("'a").is_err());
}

#[test]
fn test_parens_split_atoms() {
    assert_eq!(tokenize("(+ 1(- 2 3))").map(|v| v.len()), Ok(9));
}
