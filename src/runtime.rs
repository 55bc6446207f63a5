
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use either::{Left, Right};

use crate::builtin;
use crate::error::Error;
use crate::node::{Literal, Node};
use crate::number::Int;

/// One level of bindings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    local: HashMap<String, Node>,
}

/// Stack of scopes, innermost last. Index 0 is the global scope and is never
/// popped.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    scopes: Vec<Scope>,
}

/// Exclusive handle on an `Environment` with one extra scope pushed. The
/// scope is popped when the guard goes away, whichever way evaluation ended.
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Scope {
    pub fn new() -> Scope {
        Scope::default()
    }

    pub fn get(&self, variable: &str) -> Option<&Node> {
        self.local.get(variable)
    }

    pub fn bind(&mut self, variable: &str, val: Node) {
        self.local.insert(variable.to_string(), val);
    }

    pub fn len(&self) -> usize {
        self.local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }
}

impl Environment {
    pub fn new() -> Environment {
        Environment::from_hashmap(HashMap::new())
    }

    pub fn from_hashmap(globals: HashMap<String, Node>) -> Environment {
        Environment {
            scopes: vec![Scope { local: globals }],
        }
    }

    pub fn lookup(&self, variable: &str) -> Option<&Node> {
        self.scopes.iter().rev().find_map(|scope| scope.get(variable))
    }

    /// Bind in the innermost scope only.
    pub fn bind(&mut self, variable: &str, val: Node) {
        log::trace!("bind {} at depth {}", variable, self.depth());
        self.innermost_mut().bind(variable, val);
    }

    /// Bind in the global scope, whatever the current depth.
    pub fn define(&mut self, variable: &str, val: Node) {
        log::trace!("define {}", variable);
        self.scopes[0].bind(variable, val);
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    pub fn scope(&self, index: usize) -> Option<&Scope> {
        self.scopes.get(index)
    }

    pub fn scope_mut(&mut self, index: usize) -> Option<&mut Scope> {
        self.scopes.get_mut(index)
    }

    /// Number of scopes on the stack, counting the global one.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) -> ScopeGuard {
        self.scopes.push(Scope::new());
        log::trace!("push scope, depth {}", self.depth());
        ScopeGuard { env: self }
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }
}

impl Default for Environment {
    fn default() -> Environment {
        Environment::new()
    }
}

impl<'a> Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Environment {
        self.env
    }
}

impl<'a> DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Environment {
        self.env
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        debug_assert!(self.env.scopes.len() > 1);
        self.env.scopes.pop();
        log::trace!("pop scope, depth {}", self.env.depth());
    }
}

/// Evaluate `node` against `env`, innermost scope first.
pub fn eval(node: &Node, env: &mut Environment) -> Result<Literal, Error> {
    match *node {
        Node::Literal(ref lit) => Ok(lit.clone()),
        Node::Symbol(ref name) => match env.lookup(name) {
            Some(Node::Literal(lit)) => Ok(lit.clone()),
            Some(_) => Err(Error::FunctionCall),
            None => Err(Error::UndefinedSymbol(name.clone())),
        },
        Node::List(ref children) => eval_list(children, env),
        Node::Function(_) => Err(Error::FunctionCall),
    }
}

fn eval_list(children: &[Node], env: &mut Environment) -> Result<Literal,
    Error> {

    let (operator, operands) = children.split_first().ok_or(Error::EmptyList)?;

    match *operator {
        Node::Literal(ref lit) => Err(Error::NotAFunction(lit.to_string())),
        Node::Symbol(ref name) => match builtin::operator(name) {
            Some(Left(form)) => form(operands, env),
            Some(Right(primitive)) =>
                apply_primitive(name, primitive, operands, env),
            None => match env.lookup(name) {
                Some(Node::Function(_)) => Err(Error::FunctionCall),
                _ => Err(Error::NotAFunction(name.clone())),
            },
        },
        Node::List(_) | Node::Function(_) => Err(Error::FunctionCall),
    }
}

fn apply_primitive(name: &str, primitive: builtin::Primitive,
    operands: &[Node], env: &mut Environment) -> Result<Literal, Error> {

    let (lhs, rhs) = builtin::two_operands(name, operands)?;
    let a = eval_int(name, lhs, env)?;
    let b = eval_int(name, rhs, env)?;
    Ok(Literal::Int(primitive(a, b)?))
}

fn eval_int(name: &str, operand: &Node, env: &mut Environment) ->
    Result<Int, Error> {

    let val = eval(operand, env)?;
    val.as_int().ok_or_else(|| Error::operand_type(name, "integer",
        val.type_name()))
}

impl Node {
    pub fn eval(&self, env: &mut Environment) -> Result<Literal, Error> {
        eval(self, env)
    }
}
