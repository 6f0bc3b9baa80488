//! # celform
//!
//! celform is a small embeddable formula language written in Rust.
//! It parses spreadsheet-style formulas such as `=IF(a > 1; "big"; "small")`
//! into an immutable expression tree and evaluates that tree against a
//! caller-supplied environment of named values and native functions.
//!
//! Formulas compute with three kinds of values (strings, numbers and
//! booleans), check operand kinds strictly at every operator, and
//! short-circuit `AND`, `OR` and `IF`.
//!
//! ```
//! use celform::{Expression, Value, base};
//!
//! let env = base().with_value("price", 40.0).with_value("qty", 3.0);
//! let e: Expression = "=price * qty - 20".parse().unwrap();
//!
//! assert_eq!(e.evaluate(&env).unwrap(), Value::Number(100.0));
//! assert_eq!(e.to_string(), "=price * qty - 20");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Node` enum and the operator enums that
/// represent a formula as a tree. The tree is built by the parser, walked by
/// the evaluator and turned back into canonical text by the encoder.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Encodes trees as canonical formula text, inserting parentheses where
///   grouping would otherwise be lost.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Parsing fails only with a `SyntaxError` carrying a byte offset;
/// evaluation fails only with a `RuntimeError`. The `Error` umbrella joins
/// both for callers that parse and evaluate in one step.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches source positions and operand kinds for context.
pub mod error;
/// The parsed-formula façade.
///
/// `Expression` wraps a tree behind the two operations most callers need:
/// parse text once, evaluate many times. It also provides the canonical text
/// form used for display and serialization.
pub mod expression;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator, value types,
/// environments and the base function library.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric formatting and conversion.
///
/// # Responsibilities
/// - Format numbers canonically.
/// - Convert between `f64`, `i64` and `usize` without panicking.
pub mod util;

pub use crate::{
    error::{BoxError, Error, runtime_error::RuntimeError, syntax_error::SyntaxError},
    expression::Expression,
    interpreter::{
        builtin::base,
        environment::{Binding, EmptyEnvironment, Environment, Environments, FnEnvironment, MapEnvironment},
        parser::core::ParseOptions,
        value::{
            core::{KindMismatch, Value, ValueKind},
            function::{Call, CallError, NativeFunction},
        },
    },
};

/// Parses and evaluates `text` in one step.
///
/// Convenient for formulas evaluated once; parse with
/// [`Expression::parse`] instead when the same formula runs repeatedly.
///
/// # Errors
/// Returns [`Error::Syntax`] if parsing fails and [`Error::Runtime`] if
/// evaluation fails.
///
/// # Examples
/// ```
/// use celform::{Error, Value, base, evaluate};
///
/// let env = base();
/// assert_eq!(evaluate("=LEN(\"abc\") * 2", &env).unwrap(), Value::Number(6.0));
///
/// // Syntax and runtime failures are told apart by variant.
/// assert!(matches!(evaluate("=1 +", &env), Err(Error::Syntax(_))));
/// assert!(matches!(evaluate("=1 / 0", &env), Err(Error::Runtime(_))));
/// ```
pub fn evaluate(text: &str, environment: &dyn Environment) -> Result<Value, Error> {
    Ok(Expression::parse(text)?.evaluate(environment)?)
}

/// Unwraps a string from an evaluation result.
///
/// # Errors
/// Passes through the result's own error, or returns [`Error::Kind`] if the
/// value is not a string.
///
/// # Example
/// ```
/// use celform::{Error, base, evaluate, number, string};
///
/// let env = base();
/// assert_eq!(string(evaluate("=LOWER(\"ABC\")", &env)).unwrap(), "abc");
/// assert!(matches!(number(evaluate("=\"abc\"", &env)), Err(Error::Kind(_))));
/// ```
pub fn string<E: Into<Error>>(result: Result<Value, E>) -> Result<String, Error> {
    Ok(result.map_err(Into::<Error>::into)?.into_string()?)
}

/// Unwraps a number from an evaluation result.
///
/// # Errors
/// Passes through the result's own error, or returns [`Error::Kind`] if the
/// value is not a number.
pub fn number<E: Into<Error>>(result: Result<Value, E>) -> Result<f64, Error> {
    Ok(result.map_err(Into::<Error>::into)?.as_number()?)
}

/// Unwraps a boolean from an evaluation result.
///
/// # Errors
/// Passes through the result's own error, or returns [`Error::Kind`] if the
/// value is not a boolean.
pub fn boolean<E: Into<Error>>(result: Result<Value, E>) -> Result<bool, Error> {
    Ok(result.map_err(Into::<Error>::into)?.as_bool()?)
}
