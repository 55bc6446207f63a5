use thiserror::Error;

/// Everything that can abort the evaluation of a line.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("[token error] {0:?} does not match the required token format")]
    TokenFormat(String),

    #[error("[token error] {token:?} is not a valid {expected} literal")]
    LiteralFormat {
        token: String,
        expected: &'static str,
    },

    #[error("[parentheses error] {0}")]
    ParenMismatch(&'static str),

    #[error("[list error] list is empty")]
    EmptyList,

    #[error("[operator error] {operator} takes {expected} operands, got {found}")]
    Arity {
        operator: String,
        expected: usize,
        found: usize,
    },

    #[error("[operator error] {operator} expects {expected}, got {found}")]
    OperandType {
        operator: String,
        expected: &'static str,
        found: String,
    },

    #[error("[let* error] {0}")]
    BindingFormat(&'static str),

    #[error("[list error] {0} in operator position is not a function")]
    NotAFunction(String),

    #[error("[undefined symbol error] {0} has not been defined")]
    UndefinedSymbol(String),

    #[error("[arithmetic error] division by zero")]
    DivisionByZero,

    #[error("[arithmetic error] integer overflow")]
    Overflow,

    #[error("[function error] user-defined function invocation is not supported")]
    FunctionCall,
}

impl Error {
    pub(crate) fn literal(token: &str, expected: &'static str) -> Error {
        Error::LiteralFormat {
            token: token.to_string(),
            expected,
        }
    }

    pub(crate) fn operand_type<S: ToString>(operator: &str,
        expected: &'static str, found: S) -> Error {

        Error::OperandType {
            operator: operator.to_string(),
            expected,
            found: found.to_string(),
        }
    }
}
