/*! Defines an abstract syntax tree (AST) for binary formulae over simple terms. */

mod formula;
mod macros;
mod operator;
mod symbol;
mod term;

pub use formula::{Binary, Formula};
pub use operator::Operator;
pub use symbol::{F, V};
pub use term::Term;

use thiserror::Error;

/// Is the type of errors arising from assembling formulae.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum Error {
    /// Is returned when a string is not the symbol of any [`Operator`].
    #[error("found unknown binary operator: `{symbol}`")]
    UnknownOperator { symbol: String },
}
