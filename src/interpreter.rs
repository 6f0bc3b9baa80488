/// The built-in function library.
///
/// Provides [`base`](builtin::base), which builds a fresh environment holding
/// the standard math and string functions. Nothing here is global; callers
/// decide whether formulas see these functions at all.
pub mod builtin;
/// Name resolution for evaluation.
///
/// Defines the `Environment` trait the evaluator resolves identifiers and
/// function names through, the `Binding` a name resolves to, and the stock
/// environments: empty, closure-backed, map-backed and layered.
///
/// # Responsibilities
/// - Maps names to values or native functions.
/// - Lets callers combine several sources of names.
/// - Converts JSON objects into bindings.
pub mod environment;
/// The evaluator module walks expression trees and computes results.
///
/// The evaluator traverses a parsed tree against an environment, applies
/// every operator with strict kind checks, short-circuits the boolean
/// constructs and invokes native functions.
///
/// # Responsibilities
/// - Evaluates every node kind.
/// - Reports runtime errors such as division by zero or mismatched operands.
/// - Never mutates the tree, so one tree can be evaluated concurrently.
pub mod evaluator;
/// The lexer module tokenizes formula text for further parsing.
///
/// The lexer reads the text after the `=` sigil and produces tokens on
/// demand: numbers, strings, identifiers, operators and delimiters, each with
/// the byte offset where it ends.
///
/// # Responsibilities
/// - Converts the input into tokens with source positions.
/// - Decodes numeric and string literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser with one token of lookahead and a bounded
/// nesting depth.
///
/// # Responsibilities
/// - Converts tokens into `Node` trees following the operator precedence.
/// - Recognizes the reserved forms `IF`, `TRUE`, `FALSE`, `NOT`, `AND` and
///   `OR`.
/// - Reports syntax errors with byte offsets.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Formulas compute with exactly three kinds of values: strings, numbers and
/// booleans. This module also defines native functions and the call record
/// they receive.
///
/// # Responsibilities
/// - Defines the `Value` enum and its kind-checked projections.
/// - Defines `NativeFunction` and `Call`.
pub mod value;
