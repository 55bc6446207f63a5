
use std::collections::HashMap;

use either::{Either, Left, Right};

use crate::error::Error;
use crate::node::{Literal, Node};
use crate::number::{self, Int};
use crate::runtime::Environment;

/// Special form: receives its operands unevaluated.
pub type Syntax = fn(&[Node], &mut Environment) -> Result<Literal, Error>;

/// Binary integer operator: receives both operands evaluated.
pub type Primitive = fn(Int, Int) -> Result<Int, Error>;

pub type Operator = Either<Syntax, Primitive>;

lazy_static! {
    static ref OPERATORS: HashMap<&'static str, Operator> = hashmap! {
        "def!" => Left(define as Syntax),
        "let*" => Left(let_star as Syntax),

        "+" => Right(number::add as Primitive),
        "-" => Right(number::sub as Primitive),
        "*" => Right(number::mul as Primitive),
        "/" => Right(number::div as Primitive),
    };
}

/// Look up the special form or primitive named `name`. The environment is
/// never consulted, so these names cannot be shadowed.
pub fn operator(name: &str) -> Option<Operator> {
    OPERATORS.get(name).copied()
}

pub fn two_operands<'a>(operator: &str, operands: &'a [Node]) ->
    Result<(&'a Node, &'a Node), Error> {

    match *operands {
        [ref a, ref b] => Ok((a, b)),
        _ => Err(Error::Arity {
            operator: operator.to_string(),
            expected: 2,
            found: operands.len(),
        }),
    }
}

// (def! name expr)
fn define(operands: &[Node], env: &mut Environment) -> Result<Literal, Error> {
    let (name, expr) = two_operands("def!", operands)?;
    let name = name.as_symbol()
        .ok_or_else(|| Error::operand_type("def!", "symbol", name))?;

    let val = expr.eval(env)?;
    env.define(name, Node::from(val.clone()));
    Ok(val)
}

// (let* (name expr ...) body)
fn let_star(operands: &[Node], env: &mut Environment) -> Result<Literal, Error> {
    let (bindings, body) = two_operands("let*", operands)?;
    let bindings = bindings.as_list()
        .ok_or(Error::BindingFormat("bindings must be a list"))?;
    if bindings.len() % 2 != 0 {
        return Err(Error::BindingFormat(
            "bindings must come in name/expression pairs"));
    }
    let pairs = bindings.chunks(2)
        .map(|pair| match pair[0].as_symbol() {
            Some(name) => Ok((name, &pair[1])),
            None => Err(Error::operand_type("let*", "symbol", &pair[0])),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut local = env.push_scope();
    for (name, expr) in pairs {
        let val = expr.eval(&mut local)?;
        local.bind(name, Node::from(val));
    }
    body.eval(&mut local)
}
