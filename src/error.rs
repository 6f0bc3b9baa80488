/// Syntax errors.
///
/// Defines every failure that can occur while lexing or parsing formula text.
/// Syntax errors include unknown characters, malformed literals, unexpected or
/// missing tokens, trailing input and excessive nesting. They are raised only
/// by [`Expression::parse`](crate::Expression::parse) and always carry the
/// byte offset at which the problem was detected.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains every error that can be raised while evaluating a parsed
/// expression tree: type mismatches at operator and construct boundaries,
/// unresolved identifiers, invalid call targets, division by zero and
/// failures reported by native functions.
pub mod runtime_error;

use thiserror::Error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

use crate::interpreter::value::core::KindMismatch;

/// Boxed error type returned by native functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any error a caller of the one-shot helpers can observe.
///
/// [`Expression::parse`](crate::Expression::parse) and
/// [`Expression::evaluate`](crate::Expression::evaluate) return their own
/// narrow error kinds; this umbrella exists for [`crate::evaluate`] and the
/// result projections ([`crate::string`], [`crate::number`],
/// [`crate::boolean`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The formula text could not be parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The expression failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Evaluation succeeded but produced a value of an unexpected kind.
    #[error(transparent)]
    Kind(#[from] KindMismatch),
}
