
extern crate either;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

mod builtin;
pub mod error;
mod interpreter;
pub mod node;
pub mod number;
pub mod read;
pub mod runtime;

pub use crate::error::Error;
pub use crate::interpreter::Interpreter;
pub use crate::node::{Function, Literal, Node};
pub use crate::read::{parse, read, tokenize, Token};
pub use crate::runtime::{eval, Environment, Scope, ScopeGuard};
