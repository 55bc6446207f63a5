
use std::fmt;
use std::io::{self, Write};

use crate::number::Int;

/// A fully evaluated value. Also the payload of `Node::Literal`.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(Int),
    Char(char),
    Str(String),
    Bool(bool),
    Null,
}

/// Syntax tree node. Every node exclusively owns its children.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Literal(Literal),
    Symbol(String),
    List(Vec<Node>),
    Function(Function),
}

/// A user-defined procedure. Only constructed and bound; never called.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub parameters: Vec<String>,
    pub body: Vec<Node>,
}

impl Literal {
    pub fn as_int(&self) -> Option<Int> {
        if let Literal::Int(n) = *self {
            Some(n)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match *self {
            Literal::Int(_) => "integer",
            Literal::Char(_) => "character",
            Literal::Str(_) => "string",
            Literal::Bool(_) => "boolean",
            Literal::Null => "null",
        }
    }
}

impl Node {
    pub fn int(n: Int) -> Node {
        Node::Literal(Literal::Int(n))
    }

    pub fn character(c: char) -> Node {
        Node::Literal(Literal::Char(c))
    }

    pub fn string<S: ToString>(s: S) -> Node {
        Node::Literal(Literal::Str(s.to_string()))
    }

    pub fn boolean(b: bool) -> Node {
        Node::Literal(Literal::Bool(b))
    }

    pub fn null() -> Node {
        Node::Literal(Literal::Null)
    }

    pub fn symbol<S: ToString>(s: S) -> Node {
        Node::Symbol(s.to_string())
    }

    pub fn list(children: Vec<Node>) -> Node {
        Node::List(children)
    }

    pub fn function(parameters: Vec<String>, body: Vec<Node>) -> Node {
        Node::Function(Function { parameters, body })
    }

    pub fn as_symbol(&self) -> Option<&str> {
        if let Node::Symbol(ref s) = *self {
            Some(&*s)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        if let Node::List(ref children) = *self {
            Some(&*children)
        } else {
            None
        }
    }

    /// Write the tree one node per line, indenting four spaces per level.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.dump_at(out, 0)
    }

    fn dump_at<W: Write>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        write!(out, "{:width$}", "", width = depth * 4)?;
        match *self {
            Node::Literal(ref lit) => {
                writeln!(out, "[Literal] {} ({})", lit, lit.type_name())
            },
            Node::Symbol(ref s) => writeln!(out, "[Symbol] {}", s),
            Node::List(ref children) => {
                writeln!(out, "[List]")?;
                for child in children {
                    child.dump_at(out, depth + 1)?;
                }
                Ok(())
            },
            Node::Function(ref func) => {
                writeln!(out, "[Function] ({})", func.parameters.join(" "))
            },
        }
    }
}

impl From<Literal> for Node {
    fn from(lit: Literal) -> Node {
        Node::Literal(lit)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Char(c) => write!(f, "'{}'", c),
            // No escapes exist in the token grammar, so none are written.
            Literal::Str(ref s) => write!(f, "\"{}\"", s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Null => write!(f, "null"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Node::Literal(ref lit) => write!(f, "{}", lit),
            Node::Symbol(ref s) => write!(f, "{}", s),
            Node::List(ref children) => {
                write!(f, "(")?;
                for (n, x) in children.iter().enumerate() {
                    if n > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", x)?;
                }
                write!(f, ")")
            },
            Node::Function(ref func) => {
                write!(f, "<function ({})>", func.parameters.join(" "))
            },
        }
    }
}
