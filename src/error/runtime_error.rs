use thiserror::Error;

use crate::{error::BoxError, interpreter::value::core::ValueKind};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A boolean-only construct (`NOT`, `AND`, `OR`, `IF`) received another
    /// kind of value.
    #[error("runtime error: {construct} expects boolean arguments, found {found}")]
    ExpectedBoolean {
        /// The construct name.
        construct: &'static str,
        /// Kind of the offending operand.
        found:     ValueKind,
    },
    /// An arithmetic operator received a non-numeric operand.
    #[error("runtime error: invalid {operator} operands ({left} and {right})")]
    InvalidOperands {
        /// The operator symbol.
        operator: &'static str,
        /// Kind of the left operand.
        left:     ValueKind,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// One side of `&` was not a string.
    #[error("runtime error: {side} of & must be string, found {found}")]
    ConcatOperand {
        /// `LHS` or `RHS`.
        side:  &'static str,
        /// Kind of the offending operand.
        found: ValueKind,
    },
    /// An equality or comparison operator received operands of different or
    /// unsupported kinds.
    #[error("runtime error: mismatched {operator} operand types ({left} and {right})")]
    MismatchedOperands {
        /// The operator symbol.
        operator: &'static str,
        /// Kind of the left operand.
        left:     ValueKind,
        /// Kind of the right operand.
        right:    ValueKind,
    },
    /// An identifier did not resolve in the environment.
    #[error("runtime error: unknown identifier {name}")]
    UnknownIdentifier {
        /// The identifier.
        name: String,
    },
    /// An identifier resolved to a function where a value was required.
    #[error("runtime error: identifier '{name}' has invalid type")]
    InvalidIdentifierType {
        /// The identifier.
        name: String,
    },
    /// A called name did not resolve in the environment.
    #[error("runtime error: unknown function {name}")]
    UnknownFunction {
        /// The function name.
        name: String,
    },
    /// A called name resolved to a plain value.
    #[error("runtime error: cannot call non-function {name}")]
    NotAFunction {
        /// The called name.
        name: String,
    },
    /// Division by exactly zero.
    #[error("runtime error: attempted division by zero")]
    DivisionByZero,
    /// A native function reported a failure.
    #[error("runtime error: {name}: {source}")]
    Function {
        /// Name the function was called by.
        name:   String,
        /// The error reported by the function.
        source: BoxError,
    },
}
