/// Core evaluation logic.
///
/// Contains the `Evaluator`, which walks an expression tree against an
/// environment, the `EvalResult` alias, and `Node::evaluate`.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, concatenation, equality and ordering, each with
/// strict kind checks on both operands.
pub mod binary;

/// Boolean constructs.
///
/// Evaluates `NOT`, the short-circuiting `AND` and `OR`, and the lazy `IF`.
pub mod logic;

/// Identifier and function resolution.
///
/// Resolves lookups and calls through the environment, evaluates call
/// arguments and wraps native-function failures.
pub mod function;
